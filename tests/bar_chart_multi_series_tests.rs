use approx::assert_relative_eq;
use x3d_charts::chart::MultiSeriesBarChart;
use x3d_charts::core::{BandScale, Series};
use x3d_charts::error::ChartError;
use x3d_charts::scene::SceneNode;

fn dataset() -> Vec<Series> {
    vec![
        Series::from_pairs("uk", vec![("q1", 5.0), ("q2", 10.0)]),
        Series::from_pairs("france", vec![("q1", 15.0), ("q2", 20.0)]),
    ]
}

#[test]
fn scales_derive_from_the_dataset() {
    let scales = MultiSeriesBarChart::new().resolve_scales(&dataset()).expect("resolve");

    assert_eq!(scales.x.domain(), ["q1", "q2"]);
    assert_eq!(scales.x.range(), (0.0, 40.0));
    assert_eq!(scales.z.domain(), ["uk", "france"]);
    assert_eq!(scales.z.range(), (0.0, 40.0));
    assert_relative_eq!(scales.z.band_width(), 40.0 / 2.7 * 0.3, max_relative = 1e-12);
    assert_eq!(scales.color.color("q1").expect("known key"), "green");
}

#[test]
fn y_scale_default_is_derived_when_not_supplied() {
    let scales = MultiSeriesBarChart::new().resolve_scales(&dataset()).expect("resolve");

    assert_eq!(scales.y.domain(), (0.0, 20.0));
    assert_eq!(scales.y.range(), (0.0, 40.0));
}

#[test]
fn series_depth_follows_input_order() {
    let scales = MultiSeriesBarChart::new().resolve_scales(&dataset()).expect("resolve");
    assert_eq!(scales.z.domain(), ["uk", "france"]);

    let mut reversed = dataset();
    reversed.reverse();
    let scales = MultiSeriesBarChart::new().resolve_scales(&reversed).expect("resolve");
    assert_eq!(scales.z.domain(), ["france", "uk"]);
}

#[test]
fn fragment_has_the_documented_shape() {
    let fragment = MultiSeriesBarChart::new().render(&dataset()).expect("render");

    assert_eq!(fragment.tag(), "x3d");
    assert_eq!(fragment.attr("width"), Some("500px"));
    assert_eq!(fragment.attr("height"), Some("500px"));

    let scene = fragment.child_by_tag("scene").expect("scene element");
    assert_eq!(scene.attr("class"), Some("x3dBarChartMultiSeries"));

    let layer_classes: Vec<&str> = scene
        .children()
        .iter()
        .filter(|child| child.tag() == "group")
        .filter_map(|child| child.attr("class"))
        .collect();
    assert_eq!(layer_classes, vec!["axis", "bars"]);
    assert!(scene.child_by_tag("viewpoint").is_some());
    assert!(scene.child_by_tag("directionallight").is_some());
}

#[test]
fn axis_group_contains_the_three_plane_composite() {
    let fragment = MultiSeriesBarChart::new().render(&dataset()).expect("render");
    let scene = fragment.child_by_tag("scene").expect("scene element");
    let axis = scene.child_by_class("axis").expect("axis group");

    let pane_classes: Vec<&str> = axis
        .children()
        .iter()
        .filter_map(|child| child.attr("class"))
        .collect();
    assert_eq!(pane_classes, vec!["xzAxis", "yzAxis", "yxAxis", "zxAxis"]);
}

#[test]
fn bars_group_holds_one_row_per_series() {
    let fragment = MultiSeriesBarChart::new().render(&dataset()).expect("render");
    let scene = fragment.child_by_tag("scene").expect("scene element");
    let bars = scene.child_by_class("bars").expect("bars group");

    assert_eq!(bars.children().len(), 2);
    for row in bars.children() {
        assert_eq!(row.attr("class"), Some("seriesGroup"));
        let translation = row.attr("translation").expect("depth translation");
        assert!(translation.starts_with("0 0 "));
        assert_eq!(row.count_descendants("box"), 2);
    }
    assert_eq!(bars.count_descendants("box"), 4);
}

#[test]
fn camera_is_dimetric_and_centered_on_the_plot() {
    let fragment = MultiSeriesBarChart::new().render(&dataset()).expect("render");
    let scene = fragment.child_by_tag("scene").expect("scene element");
    let viewpoint = scene.child_by_tag("viewpoint").expect("viewpoint element");

    assert_eq!(viewpoint.attr("position"), Some("80 15 80"));
    assert_eq!(viewpoint.attr("orientation"), Some("0 1 0 0.8"));
    assert_eq!(viewpoint.attr("fieldOfView"), Some("0.8"));
    assert_eq!(viewpoint.attr("centerOfRotation"), Some("20 20 20"));
}

#[test]
fn scene_light_matches_the_chart_defaults() {
    let fragment = MultiSeriesBarChart::new().render(&dataset()).expect("render");
    let scene = fragment.child_by_tag("scene").expect("scene element");
    let light = scene.child_by_tag("directionallight").expect("light element");

    assert_eq!(light.attr("direction"), Some("1 0 -1"));
    assert_eq!(light.attr("on"), Some("true"));
    assert_eq!(light.attr("intensity"), Some("0.4"));
    assert_eq!(light.attr("shadowIntensity"), Some("0"));
}

#[test]
fn rendering_is_deterministic() {
    let chart = MultiSeriesBarChart::new();
    let first = chart.render(&dataset()).expect("first render");
    let second = chart.render(&dataset()).expect("second render");

    assert_eq!(first, second);
    assert_eq!(first.to_markup(), second.to_markup());
}

#[test]
fn debug_flag_exposes_runtime_overlays() {
    let noisy = MultiSeriesBarChart::new().with_debug(true).render(&dataset()).expect("render");
    assert_eq!(noisy.attr("showLog"), Some("true"));
    assert_eq!(noisy.attr("showStat"), Some("true"));
}

#[test]
fn supplied_z_scale_takes_precedence() {
    let z = BandScale::new(
        vec!["uk".to_owned(), "france".to_owned(), "spare".to_owned()],
        (0.0, 90.0),
    )
    .expect("valid scale");

    let scales = MultiSeriesBarChart::new()
        .with_z_scale(z.clone())
        .resolve_scales(&dataset())
        .expect("resolve");
    assert_eq!(scales.z, z);
}

#[test]
fn duplicate_series_keys_share_one_band() {
    let duplicated = vec![
        Series::from_pairs("uk", vec![("q1", 1.0)]),
        Series::from_pairs("uk", vec![("q1", 2.0)]),
    ];

    let chart = MultiSeriesBarChart::new();
    let scales = chart.resolve_scales(&duplicated).expect("resolve");
    assert_eq!(scales.z.domain(), ["uk"]);

    // Both rows still render, stacked at the same depth.
    let fragment = chart.render(&duplicated).expect("render");
    let scene = fragment.child_by_tag("scene").expect("scene element");
    let bars = scene.child_by_class("bars").expect("bars group");
    assert_eq!(bars.children().len(), 2);
    assert_eq!(bars.children()[0].attr("translation"), bars.children()[1].attr("translation"));
}

#[test]
fn render_into_appends_under_the_container() {
    let mut container = SceneNode::new("div");
    MultiSeriesBarChart::new()
        .render_into(&mut container, &dataset())
        .expect("render into");

    assert_eq!(container.children().len(), 1);
    assert_eq!(container.children()[0].tag(), "x3d");
}

#[test]
fn empty_dataset_is_rejected() {
    let err = MultiSeriesBarChart::new().render(&[]).expect_err("no series");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
