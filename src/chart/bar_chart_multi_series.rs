use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::component::{AxisThreePlane, BarsMultiSeries, Viewpoint};
use crate::core::{BandScale, CanvasSize, ColorScale, Dimensions, LinearScale, Series, summarize};
use crate::error::{ChartError, ChartResult};
use crate::scene::SceneNode;

use super::x3d_root;

/// Group class names created by the chart, in scene order.
pub const MULTI_SERIES_BAR_LAYERS: [&str; 2] = ["axis", "bars"];

const X_BAND_PADDING: f64 = 0.5;
const Z_BAND_PADDING: f64 = 0.7;
const TICK_COUNT: usize = 10;

/// Scales backing one render pass, caller-supplied or derived.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMultiSeriesScales {
    pub x: BandScale,
    pub y: LinearScale,
    pub z: BandScale,
    pub color: ColorScale,
}

/// Multi-series bar chart: rows of bars along the z axis, one row per
/// series, framed by a three-plane axis box.
///
/// Same configuration model as the vertical chart, plus a z scale over
/// the series keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSeriesBarChart {
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
    z_scale: Option<BandScale>,
    #[serde(default)]
    color_scale: Option<ColorScale>,
}

impl MultiSeriesBarChart {
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

    /// Supplies an explicit z scale, suppressing derivation.
    #[must_use]
    pub fn with_z_scale(mut self, z_scale: BandScale) -> Self {
        self.z_scale = Some(z_scale);
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
    pub fn z_scale(&self) -> Option<&BandScale> {
        self.z_scale.as_ref()
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
    /// the dataset: x bands over the observation keys, y over
    /// `[0, max]` widened to round tick bounds, z bands over the series
    /// keys in input order, colors cycling the palette over the
    /// observation keys.
    pub fn resolve_scales(&self, dataset: &[Series]) -> ChartResult<ResolvedMultiSeriesScales> {
        self.dimensions.validate()?;
        let summary = summarize(dataset)?;

        let x = match &self.x_scale {
            Some(scale) => scale.clone(),
            None => BandScale::new(summary.column_keys.clone(), (0.0, self.dimensions.x))?
                .with_padding(X_BAND_PADDING)?
                .with_round(true),
        };
        let y = match self.y_scale {
            Some(scale) => scale,
            None => LinearScale::new(summary.value_extent(), (0.0, self.dimensions.y))?
                .nice(TICK_COUNT),
        };
        let z = match &self.z_scale {
            Some(scale) => scale.clone(),
            None => BandScale::new(summary.row_keys.clone(), (0.0, self.dimensions.z))?
                .with_padding(Z_BAND_PADDING)?,
        };
        let color = match &self.color_scale {
            Some(scale) => scale.clone(),
            None => ColorScale::new(summary.column_keys, self.colors.clone())?,
        };

        debug!(
            columns = x.domain().len(),
            rows = z.domain().len(),
            supplied_x = self.x_scale.is_some(),
            supplied_y = self.y_scale.is_some(),
            supplied_z = self.z_scale.is_some(),
            supplied_color = self.color_scale.is_some(),
            "resolved multi-series bar chart scales"
        );
        Ok(ResolvedMultiSeriesScales { x, y, z, color })
    }

    /// Assembles the full `x3d` fragment for a dataset.
    pub fn render(&self, dataset: &[Series]) -> ChartResult<SceneNode> {
        let canvas = self.canvas().validate()?;
        let scales = self.resolve_scales(dataset)?;
        let [axis_class, bars_class] = MULTI_SERIES_BAR_LAYERS;

        let mut axis_group = SceneNode::new("group").with_attr("class", axis_class);
        AxisThreePlane::new(scales.x.clone(), scales.y, scales.z.clone())
            .with_tick_count(TICK_COUNT)
            .apply(&mut axis_group)?;

        let mut bars_group = SceneNode::new("group").with_attr("class", bars_class);
        BarsMultiSeries::new(scales.x, scales.y, scales.z, scales.color)
            .apply(dataset, &mut bars_group)?;

        let mut scene = SceneNode::new("scene").with_attr("class", self.classed.as_str());
        scene.push_child(axis_group);
        scene.push_child(bars_group);
        Viewpoint::new()
            .with_center_of_rotation(self.dimensions.center())
            .apply(&mut scene);
        scene.push_child(
            SceneNode::new("directionallight")
                .with_attr("direction", "1 0 -1")
                .with_attr("on", "true")
                .with_attr("intensity", "0.4")
                .with_attr("shadowIntensity", "0"),
        );

        debug!(
            width = self.width,
            height = self.height,
            series = dataset.len(),
            "rendered multi-series bar chart"
        );
        Ok(x3d_root(canvas, self.debug).with_child(scene))
    }

    /// Renders and appends the fragment under a caller-owned container.
    pub fn render_into(&self, container: &mut SceneNode, dataset: &[Series]) -> ChartResult<()> {
        let fragment = self.render(dataset)?;
        container.push_child(fragment);
        Ok(())
    }

    fn canvas(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }
}

impl Default for MultiSeriesBarChart {
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
            z_scale: None,
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
    ["green", "red", "yellow", "steelblue", "orange"].map(str::to_owned).to_vec()
}

fn default_classed() -> String {
    "x3dBarChartMultiSeries".to_owned()
}
