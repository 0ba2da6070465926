//! x3d-charts: declarative 3D chart generation for X3DOM hosts.
//!
//! This crate turns keyed statistical datasets into X3D scene-graph
//! fragments: scales are derived from the data, chart components build
//! named scene groups, and the resulting tree serializes to
//! deterministic markup a browser-hosted X3DOM runtime can display.

pub mod chart;
pub mod component;
pub mod core;
pub mod error;
pub mod scene;
pub mod telemetry;

pub use chart::{MultiSeriesBarChart, VerticalBarChart};
pub use error::{ChartError, ChartResult};
pub use scene::SceneNode;
pub use self::core::{DataPoint, Series};

/// Crate version, mirrored from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Attribution string for hosts that display library credits.
pub const AUTHOR: &str = "x3d-charts contributors";
/// SPDX license expression covering the crate.
pub const LICENSE: &str = "MIT OR Apache-2.0";
/// Crate copyright line.
pub const COPYRIGHT: &str = "Copyright 2026 x3d-charts contributors";
