use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::component::{Axis, AxisDirection, AxisScale, Bars, QuickView, Viewpoint};
use crate::core::{
    BandScale, CanvasSize, ColorScale, Dimensions, LinearScale, Series, summarize_series,
};
use crate::error::{ChartError, ChartResult};
use crate::scene::SceneNode;

use super::x3d_root;

/// Group class names created by the chart, in scene order.
pub const VERTICAL_BAR_LAYERS: [&str; 3] = ["xAxis", "yAxis", "bars"];

const BAND_PADDING: f64 = 0.5;
const TICK_COUNT: usize = 10;

/// Scales backing one render pass, caller-supplied or derived.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVerticalScales {
    pub x: BandScale,
    pub y: LinearScale,
    pub color: ColorScale,
}

/// Single-series vertical bar chart.
///
/// The chart is a plain configuration value: build it up with `with_*`
/// calls, then `render` any number of series through it. Rendering
/// derives scales from the data unless the caller supplied explicit
/// ones, assembles the scene groups, and returns the `x3d` fragment.
///
/// The type is serializable so host applications can persist chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalBarChart {
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default)]
    dimensions: Dimensions,
    #[serde(default = "default_colors")]
    colors: Vec<String>,
    #[serde(default = "default_classed")]
    classed: String,
    #[serde(default)]
    debug: bool,
    #[serde(default)]
    x_scale: Option<BandScale>,
    #[serde(default)]
    y_scale: Option<LinearScale>,
    #[serde(default)]
    color_scale: Option<ColorScale>,
}

impl VerticalBarChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the viewport width in CSS pixels.
    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the viewport height in CSS pixels.
    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Sets the plot-area bounding box in scene units.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Sets the bar color palette.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the class tag stamped on the scene element.
    #[must_use]
    pub fn with_classed(mut self, classed: impl Into<String>) -> Self {
        self.classed = classed.into();
        self
    }

    /// Enables the X3DOM log and statistics overlays.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Supplies an explicit x scale, suppressing derivation.
    #[must_use]
    pub fn with_x_scale(mut self, x_scale: BandScale) -> Self {
        self.x_scale = Some(x_scale);
        self
    }

    /// Supplies an explicit y scale, suppressing derivation.
    #[must_use]
    pub fn with_y_scale(mut self, y_scale: LinearScale) -> Self {
        self.y_scale = Some(y_scale);
        self
    }

    /// Supplies an explicit color scale, suppressing derivation.
    #[must_use]
    pub fn with_color_scale(mut self, color_scale: ColorScale) -> Self {
        self.color_scale = Some(color_scale);
        self
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[must_use]
    pub fn classed(&self) -> &str {
        &self.classed
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub fn x_scale(&self) -> Option<&BandScale> {
        self.x_scale.as_ref()
    }

    #[must_use]
    pub fn y_scale(&self) -> Option<LinearScale> {
        self.y_scale
    }

    #[must_use]
    pub fn color_scale(&self) -> Option<&ColorScale> {
        self.color_scale.as_ref()
    }

    /// Serializes chart configuration to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// Deserializes chart configuration from JSON.
    ///
    /// Only a JSON object is accepted; derived struct deserialization
    /// would otherwise also admit a sequence and fill every field from
    /// its default.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        if !value.is_object() {
            return Err(ChartError::InvalidData("chart config must be a JSON object".to_owned()));
        }
        serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    /// Resolves the scales one render pass will use.
    ///
    /// Caller-supplied scales win unchanged; the rest are derived from
    /// the series: x bands over the observation keys in input order, y
    /// over `[0, max]` widened to round tick bounds, colors cycling the
    /// palette over the observation keys.
    pub fn resolve_scales(&self, series: &Series) -> ChartResult<ResolvedVerticalScales> {
        self.dimensions.validate()?;
        let summary = summarize_series(series)?;

        let x = match &self.x_scale {
            Some(scale) => scale.clone(),
            None => BandScale::new(summary.column_keys.clone(), (0.0, self.dimensions.x))?
                .with_padding(BAND_PADDING)?
                .with_round(true),
        };
        let y = match self.y_scale {
            Some(scale) => scale,
            None => LinearScale::new(summary.value_extent(), (0.0, self.dimensions.y))?
                .nice(TICK_COUNT),
        };
        let color = match &self.color_scale {
            Some(scale) => scale.clone(),
            None => ColorScale::new(summary.column_keys, self.colors.clone())?,
        };

        debug!(
            columns = x.domain().len(),
            supplied_x = self.x_scale.is_some(),
            supplied_y = self.y_scale.is_some(),
            supplied_color = self.color_scale.is_some(),
            "resolved vertical bar chart scales"
        );
        Ok(ResolvedVerticalScales { x, y, color })
    }

    /// Assembles the full `x3d` fragment for one series.
    pub fn render(&self, series: &Series) -> ChartResult<SceneNode> {
        let canvas = self.canvas().validate()?;
        let scales = self.resolve_scales(series)?;
        let [x_axis_class, y_axis_class, bars_class] = VERTICAL_BAR_LAYERS;

        let mut x_axis_group = SceneNode::new("group").with_attr("class", x_axis_class);
        Axis::new(AxisScale::Band(scales.x.clone()), AxisDirection::X, AxisDirection::Y)
            .with_tick_size(0.0)
            .apply(&mut x_axis_group)?;

        let mut y_axis_group = SceneNode::new("group").with_attr("class", y_axis_class);
        Axis::new(AxisScale::Linear(scales.y), AxisDirection::Y, AxisDirection::X)
            .with_tick_size(self.dimensions.x)
            .with_tick_count(TICK_COUNT)
            .apply(&mut y_axis_group)?;

        let mut bars_group = SceneNode::new("group").with_attr("class", bars_class);
        Bars::new(scales.x, scales.y, scales.color).apply(series, &mut bars_group)?;

        let mut scene = SceneNode::new("scene").with_attr("class", self.classed.as_str());
        scene.push_child(x_axis_group);
        scene.push_child(y_axis_group);
        scene.push_child(bars_group);
        Viewpoint::new().quick_view(QuickView::Left).apply(&mut scene);

        debug!(
            width = self.width,
            height = self.height,
            bars = series.points.len(),
            "rendered vertical bar chart"
        );
        Ok(x3d_root(canvas, self.debug).with_child(scene))
    }

    /// Renders and appends the fragment under a caller-owned container.
    pub fn render_into(&self, container: &mut SceneNode, series: &Series) -> ChartResult<()> {
        let fragment = self.render(series)?;
        container.push_child(fragment);
        Ok(())
    }

    fn canvas(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }
}

impl Default for VerticalBarChart {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            dimensions: Dimensions::default(),
            colors: default_colors(),
            classed: default_classed(),
            debug: false,
            x_scale: None,
            y_scale: None,
            color_scale: None,
        }
    }
}

fn default_width() -> u32 {
    500
}

fn default_height() -> u32 {
    500
}

fn default_colors() -> Vec<String> {
    ["orange", "red", "yellow", "steelblue", "green"].map(str::to_owned).to_vec()
}

fn default_classed() -> String {
    "x3dBarChartVertical".to_owned()
}
