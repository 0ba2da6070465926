use tracing::trace;

use crate::core::{BandScale, ColorScale, LinearScale, Series};
use crate::error::ChartResult;
use crate::scene::{SceneNode, vec3_attr};

use super::material_shape;

/// Column geometry for one series: a scaled unit box per observation.
///
/// Each bar is a `box` of size `1 1 1` stretched by a transform, so bar
/// footprint and height come entirely from the scales.
#[derive(Debug, Clone, PartialEq)]
pub struct Bars {
    x_scale: BandScale,
    y_scale: LinearScale,
    color_scale: ColorScale,
}

impl Bars {
    #[must_use]
    pub fn new(x_scale: BandScale, y_scale: LinearScale, color_scale: ColorScale) -> Self {
        Self {
            x_scale,
            y_scale,
            color_scale,
        }
    }

    /// Builds one bar per observation into `group`.
    ///
    /// Fails with `UnknownKey` when an observation key is missing from
    /// the x or color domain, which surfaces scale/data mismatches at
    /// the call site instead of emitting degenerate geometry.
    pub fn apply(&self, series: &Series, group: &mut SceneNode) -> ChartResult<()> {
        let width = self.x_scale.band_width();
        for point in &series.points {
            let center = self.x_scale.center(&point.key)?;
            let height = self.y_scale.map(point.value)?;
            let color = self.color_scale.color(&point.key)?;

            let geometry = SceneNode::new("box").with_attr("size", "1 1 1");
            let bar = SceneNode::new("transform")
                .with_attr("class", "bar")
                .with_attr("translation", vec3_attr(center, height / 2.0, 0.0))
                .with_attr("scale", vec3_attr(width, height, width))
                .with_child(material_shape(geometry, color));
            group.push_child(bar);
        }

        trace!(
            series = %series.key,
            bars = series.points.len(),
            band_width = width,
            "assembled bar geometry"
        );
        Ok(())
    }
}
