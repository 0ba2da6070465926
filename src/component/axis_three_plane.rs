use crate::core::{BandScale, LinearScale};
use crate::error::{ChartError, ChartResult};
use crate::scene::SceneNode;

use super::{Axis, AxisDirection, AxisScale};

/// Composite of four axes framing the 3D plot box.
///
/// Two value axes share the y scale: `yzAxis` carries the labels while
/// `yxAxis` only repeats the gridlines on the back wall, so values are
/// not printed twice.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisThreePlane {
    x_scale: BandScale,
    y_scale: LinearScale,
    z_scale: BandScale,
    colors: [String; 3],
    tick_count: usize,
}

impl AxisThreePlane {
    #[must_use]
    pub fn new(x_scale: BandScale, y_scale: LinearScale, z_scale: BandScale) -> Self {
        Self {
            x_scale,
            y_scale,
            z_scale,
            colors: default_colors(),
            tick_count: 10,
        }
    }

    /// Sets the color tokens for the x, y and z axes.
    pub fn with_colors(mut self, colors: [String; 3]) -> ChartResult<Self> {
        if colors.iter().any(String::is_empty) {
            return Err(ChartError::InvalidData("axis colors must not be empty".to_owned()));
        }
        self.colors = colors;
        Ok(self)
    }

    /// Sets the requested tick count for the value axes.
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Builds the four axis groups into `group`.
    pub fn apply(&self, group: &mut SceneNode) -> ChartResult<()> {
        let x_reach = self.x_scale.range().1;
        let z_reach = self.z_scale.range().1;
        let [x_color, y_color, z_color] = &self.colors;

        let panes = [
            (
                "xzAxis",
                Axis::new(AxisScale::Band(self.x_scale.clone()), AxisDirection::X, AxisDirection::Z)
                    .with_tick_size(z_reach)
                    .with_color(x_color.clone()),
            ),
            (
                "yzAxis",
                Axis::new(AxisScale::Linear(self.y_scale), AxisDirection::Y, AxisDirection::Z)
                    .with_tick_size(z_reach)
                    .with_tick_count(self.tick_count)
                    .with_color(y_color.clone()),
            ),
            (
                "yxAxis",
                Axis::new(AxisScale::Linear(self.y_scale), AxisDirection::Y, AxisDirection::X)
                    .with_tick_size(x_reach)
                    .with_tick_count(self.tick_count)
                    .with_color(y_color.clone())
                    .with_labels(false),
            ),
            (
                "zxAxis",
                Axis::new(AxisScale::Band(self.z_scale.clone()), AxisDirection::Z, AxisDirection::X)
                    .with_tick_size(x_reach)
                    .with_color(z_color.clone()),
            ),
        ];

        for (class_name, axis) in panes {
            let mut pane = SceneNode::new("group").with_attr("class", class_name);
            axis.apply(&mut pane)?;
            group.push_child(pane);
        }
        Ok(())
    }
}

fn default_colors() -> [String; 3] {
    ["blue".to_owned(), "red".to_owned(), "black".to_owned()]
}
