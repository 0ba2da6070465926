use x3d_charts::chart::{MultiSeriesBarChart, VerticalBarChart};
use x3d_charts::core::{BandScale, ColorScale, Dimensions, LinearScale};

#[test]
fn vertical_chart_documented_defaults() {
    let chart = VerticalBarChart::new();

    assert_eq!(chart.width(), 500);
    assert_eq!(chart.height(), 500);
    assert_eq!(chart.dimensions(), Dimensions::new(40.0, 40.0, 40.0));
    assert_eq!(chart.colors(), &["orange", "red", "yellow", "steelblue", "green"]);
    assert_eq!(chart.classed(), "x3dBarChartVertical");
    assert!(!chart.debug());
    assert!(chart.x_scale().is_none());
    assert!(chart.y_scale().is_none());
    assert!(chart.color_scale().is_none());
}

#[test]
fn multi_series_chart_documented_defaults() {
    let chart = MultiSeriesBarChart::new();

    assert_eq!(chart.width(), 500);
    assert_eq!(chart.height(), 500);
    assert_eq!(chart.dimensions(), Dimensions::new(40.0, 40.0, 40.0));
    assert_eq!(chart.colors(), &["green", "red", "yellow", "steelblue", "orange"]);
    assert_eq!(chart.classed(), "x3dBarChartMultiSeries");
    assert!(!chart.debug());
    assert!(chart.x_scale().is_none());
    assert!(chart.y_scale().is_none());
    assert!(chart.z_scale().is_none());
    assert!(chart.color_scale().is_none());
}

#[test]
fn builders_round_trip_through_accessors() {
    let x = BandScale::new(vec!["a".to_owned()], (0.0, 10.0)).expect("valid scale");
    let y = LinearScale::new((0.0, 50.0), (0.0, 10.0)).expect("valid scale");
    let color =
        ColorScale::new(vec!["a".to_owned()], vec!["teal".to_owned()]).expect("valid scale");

    let chart = VerticalBarChart::new()
        .with_width(800)
        .with_height(600)
        .with_dimensions(Dimensions::new(10.0, 20.0, 30.0))
        .with_colors(vec!["teal".to_owned()])
        .with_classed("customChart")
        .with_debug(true)
        .with_x_scale(x.clone())
        .with_y_scale(y)
        .with_color_scale(color.clone());

    assert_eq!(chart.width(), 800);
    assert_eq!(chart.height(), 600);
    assert_eq!(chart.dimensions(), Dimensions::new(10.0, 20.0, 30.0));
    assert_eq!(chart.colors(), &["teal"]);
    assert_eq!(chart.classed(), "customChart");
    assert!(chart.debug());
    assert_eq!(chart.x_scale(), Some(&x));
    assert_eq!(chart.y_scale(), Some(y));
    assert_eq!(chart.color_scale(), Some(&color));
}

#[test]
fn builders_accept_out_of_range_values_verbatim() {
    // Values are trusted until render validates them.
    let chart = VerticalBarChart::new()
        .with_width(0)
        .with_dimensions(Dimensions::new(-1.0, 0.0, f64::NAN));

    assert_eq!(chart.width(), 0);
    assert!(chart.dimensions().z.is_nan());
}

#[test]
fn vertical_chart_config_round_trips_through_json() {
    let chart = VerticalBarChart::new()
        .with_width(1024)
        .with_classed("persisted")
        .with_debug(true);

    let json = chart.to_json_pretty().expect("serialize");
    let parsed = VerticalBarChart::from_json_str(&json).expect("parse back");
    assert_eq!(parsed, chart);
}

#[test]
fn multi_series_chart_config_round_trips_through_json() {
    let z = BandScale::new(vec!["uk".to_owned()], (0.0, 40.0)).expect("valid scale");
    let chart = MultiSeriesBarChart::new().with_height(300).with_z_scale(z);

    let json = chart.to_json_pretty().expect("serialize");
    let parsed = MultiSeriesBarChart::from_json_str(&json).expect("parse back");
    assert_eq!(parsed, chart);
}

#[test]
fn missing_json_fields_fall_back_to_defaults() {
    let parsed = VerticalBarChart::from_json_str("{}").expect("empty object");
    assert_eq!(parsed, VerticalBarChart::new());

    let parsed = VerticalBarChart::from_json_str(r#"{"width": 640}"#).expect("partial object");
    assert_eq!(parsed.width(), 640);
    assert_eq!(parsed.height(), 500);
    assert_eq!(parsed.classed(), "x3dBarChartVertical");
}

#[test]
fn malformed_chart_json_is_rejected() {
    assert!(VerticalBarChart::from_json_str("{\"width\": }").is_err());
    assert!(MultiSeriesBarChart::from_json_str("{\"height\": }").is_err());
}

#[test]
fn non_object_chart_json_is_rejected() {
    // serde's derived struct deserializer would accept a sequence and
    // fill every defaulted field, turning "[]" into a default chart.
    assert!(VerticalBarChart::from_json_str("[]").is_err());
    assert!(VerticalBarChart::from_json_str("null").is_err());
    assert!(VerticalBarChart::from_json_str("42").is_err());
    assert!(MultiSeriesBarChart::from_json_str("[]").is_err());
    assert!(MultiSeriesBarChart::from_json_str("\"chart\"").is_err());
}

#[test]
fn json_supplied_scales_must_satisfy_scale_invariants() {
    let duplicate_domain = r#"{
        "x_scale": {"domain": ["a", "a"], "range_start": 0.0, "range_end": 10.0}
    }"#;
    assert!(VerticalBarChart::from_json_str(duplicate_domain).is_err());

    let bad_padding = r#"{
        "z_scale": {"domain": ["uk"], "range_start": 0.0, "range_end": 40.0, "padding": 1.5}
    }"#;
    assert!(MultiSeriesBarChart::from_json_str(bad_padding).is_err());

    let degenerate_y = r#"{
        "y_scale": {"domain_start": 5.0, "domain_end": 5.0, "range_start": 0.0, "range_end": 40.0}
    }"#;
    assert!(VerticalBarChart::from_json_str(degenerate_y).is_err());
}
