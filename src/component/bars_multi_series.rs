use tracing::trace;

use crate::core::{BandScale, ColorScale, LinearScale, Series};
use crate::error::ChartResult;
use crate::scene::{SceneNode, vec3_attr};

use super::Bars;

/// Rows of bars: one z-translated group per series, each reusing the
/// single-series bar geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BarsMultiSeries {
    x_scale: BandScale,
    y_scale: LinearScale,
    z_scale: BandScale,
    color_scale: ColorScale,
}

impl BarsMultiSeries {
    #[must_use]
    pub fn new(
        x_scale: BandScale,
        y_scale: LinearScale,
        z_scale: BandScale,
        color_scale: ColorScale,
    ) -> Self {
        Self {
            x_scale,
            y_scale,
            z_scale,
            color_scale,
        }
    }

    /// Builds one `seriesGroup` per series into `group`, in dataset
    /// order.
    pub fn apply(&self, dataset: &[Series], group: &mut SceneNode) -> ChartResult<()> {
        let bars = Bars::new(self.x_scale.clone(), self.y_scale, self.color_scale.clone());

        for series in dataset {
            let depth = self.z_scale.center(&series.key)?;
            let mut series_group = SceneNode::new("transform")
                .with_attr("class", "seriesGroup")
                .with_attr("translation", vec3_attr(0.0, 0.0, depth));
            bars.apply(series, &mut series_group)?;
            group.push_child(series_group);
        }

        trace!(series = dataset.len(), "assembled multi-series bar rows");
        Ok(())
    }
}
