use crate::core::{BandScale, LinearScale};
use crate::error::ChartResult;
use crate::scene::{SceneNode, scalar_attr, vec3_attr, vec4_attr};

use super::material_shape;

const DEFAULT_TICK_COUNT: usize = 10;
const DEFAULT_TICK_SIZE: f64 = 1.0;
const DEFAULT_TICK_PADDING: f64 = 1.5;
const DEFAULT_COLOR: &str = "black";
const DEFAULT_LABEL_SIZE: f64 = 1.3;
const AXIS_LINE_RADIUS: f64 = 0.1;
const TICK_LINE_RADIUS: f64 = 0.05;

/// Principal axis a component is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    X,
    Y,
    Z,
}

impl AxisDirection {
    /// Unit vector of the direction.
    #[must_use]
    pub fn unit(self) -> [f64; 3] {
        match self {
            Self::X => [1.0, 0.0, 0.0],
            Self::Y => [0.0, 1.0, 0.0],
            Self::Z => [0.0, 0.0, 1.0],
        }
    }

    /// Axis-angle rotation carrying y-aligned geometry (the cylinder
    /// default) onto this direction.
    #[must_use]
    pub fn rotation(self) -> [f64; 4] {
        match self {
            Self::X => [1.0, 1.0, 0.0, std::f64::consts::PI],
            Self::Y => [0.0, 0.0, 0.0, 0.0],
            Self::Z => [0.0, 1.0, 1.0, std::f64::consts::PI],
        }
    }
}

/// Scale driving tick placement along one axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    Band(BandScale),
    Linear(LinearScale),
}

impl AxisScale {
    /// `(range position, label text)` pairs for the axis ticks.
    ///
    /// Band scales tick every key at its band center; linear scales tick
    /// round values, roughly `tick_count` of them.
    pub fn tick_entries(&self, tick_count: usize) -> ChartResult<Vec<(f64, String)>> {
        match self {
            Self::Band(scale) => scale
                .domain()
                .iter()
                .map(|key| Ok((scale.center(key)?, key.clone())))
                .collect(),
            Self::Linear(scale) => scale
                .ticks(tick_count)
                .into_iter()
                .map(|value| Ok((scale.map(value)?, scalar_attr(value))))
                .collect(),
        }
    }

    /// Range extent covered by the axis line.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Band(scale) => scale.range(),
            Self::Linear(scale) => scale.range(),
        }
    }
}

/// Single-plane axis: an axis line plus a tick line and a billboard
/// label per tick value.
///
/// Tick lines run into the plot along `tick_direction` (gridline style)
/// and labels sit on the opposite side, outside the plot box.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    scale: AxisScale,
    direction: AxisDirection,
    tick_direction: AxisDirection,
    tick_size: f64,
    tick_padding: f64,
    tick_count: usize,
    color: String,
    show_labels: bool,
    label_size: f64,
}

impl Axis {
    #[must_use]
    pub fn new(scale: AxisScale, direction: AxisDirection, tick_direction: AxisDirection) -> Self {
        Self {
            scale,
            direction,
            tick_direction,
            tick_size: DEFAULT_TICK_SIZE,
            tick_padding: DEFAULT_TICK_PADDING,
            tick_count: DEFAULT_TICK_COUNT,
            color: DEFAULT_COLOR.to_owned(),
            show_labels: true,
            label_size: DEFAULT_LABEL_SIZE,
        }
    }

    /// Sets the tick line length. Zero suppresses tick lines entirely.
    #[must_use]
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Sets the label offset outside the plot box.
    #[must_use]
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Sets the requested tick count for linear scales. Band scales
    /// always tick every key.
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the color token used for the axis line, ticks and labels.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Shows or hides tick labels.
    #[must_use]
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Sets the label font size in scene units.
    #[must_use]
    pub fn with_label_size(mut self, label_size: f64) -> Self {
        self.label_size = label_size;
        self
    }

    #[must_use]
    pub fn scale(&self) -> &AxisScale {
        &self.scale
    }

    /// Builds the axis geometry into `group`.
    pub fn apply(&self, group: &mut SceneNode) -> ChartResult<()> {
        group.push_child(self.axis_line());
        for (position, label) in self.scale.tick_entries(self.tick_count)? {
            if self.tick_size > 0.0 {
                group.push_child(self.tick_line(position));
            }
            if self.show_labels {
                group.push_child(self.tick_label(position, &label));
            }
        }
        Ok(())
    }

    fn axis_line(&self) -> SceneNode {
        let (range_start, range_end) = self.scale.range();
        let length = (range_end - range_start).abs();
        let midpoint = (range_start + range_end) / 2.0;
        let [ux, uy, uz] = self.direction.unit();
        let [rx, ry, rz, angle] = self.direction.rotation();

        let cylinder = SceneNode::new("cylinder")
            .with_attr("radius", scalar_attr(AXIS_LINE_RADIUS))
            .with_attr("height", scalar_attr(length));

        SceneNode::new("transform")
            .with_attr("class", "axisLine")
            .with_attr("translation", vec3_attr(ux * midpoint, uy * midpoint, uz * midpoint))
            .with_attr("rotation", vec4_attr(rx, ry, rz, angle))
            .with_child(material_shape(cylinder, &self.color))
    }

    fn tick_line(&self, position: f64) -> SceneNode {
        let [ux, uy, uz] = self.direction.unit();
        let [tx, ty, tz] = self.tick_direction.unit();
        let half = self.tick_size / 2.0;
        let [rx, ry, rz, angle] = self.tick_direction.rotation();

        let cylinder = SceneNode::new("cylinder")
            .with_attr("radius", scalar_attr(TICK_LINE_RADIUS))
            .with_attr("height", scalar_attr(self.tick_size));

        SceneNode::new("transform")
            .with_attr("class", "tick")
            .with_attr(
                "translation",
                vec3_attr(
                    ux * position + tx * half,
                    uy * position + ty * half,
                    uz * position + tz * half,
                ),
            )
            .with_attr("rotation", vec4_attr(rx, ry, rz, angle))
            .with_child(material_shape(cylinder, &self.color))
    }

    fn tick_label(&self, position: f64, label: &str) -> SceneNode {
        let [ux, uy, uz] = self.direction.unit();
        let [tx, ty, tz] = self.tick_direction.unit();
        let offset = -self.tick_padding;

        let fontstyle = SceneNode::new("fontstyle")
            .with_attr("size", scalar_attr(self.label_size))
            .with_attr("family", "SANS")
            .with_attr("justify", "\"MIDDLE\" \"MIDDLE\"");
        let text = SceneNode::new("text")
            .with_attr("string", label)
            .with_attr("solid", "false")
            .with_child(fontstyle);

        SceneNode::new("transform")
            .with_attr("class", "tickLabel")
            .with_attr(
                "translation",
                vec3_attr(
                    ux * position + tx * offset,
                    uy * position + ty * offset,
                    uz * position + tz * offset,
                ),
            )
            .with_child(
                SceneNode::new("billboard")
                    .with_attr("axisOfRotation", "0 0 0")
                    .with_child(material_shape(text, &self.color)),
            )
    }
}
