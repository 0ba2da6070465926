//! Telemetry helpers for applications embedding `x3d-charts`.
//!
//! Markup assembly runs silently by default. Hosts that want to see the
//! crate's `tracing` output (scale derivation, skipped values, render
//! summaries) can either call `init_default_tracing` or install their own
//! subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Honors `RUST_LOG`; without it the filter defaults to this crate's
/// debug events (`x3d_charts=debug`), which is where scale resolution
/// and render summaries are logged. Timestamps are omitted because
/// chart assembly is a one-shot synchronous call.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("x3d_charts=debug"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .without_time()
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
