mod bar_chart_multi_series;
mod bar_chart_vertical;

pub use bar_chart_multi_series::{
    MULTI_SERIES_BAR_LAYERS, MultiSeriesBarChart, ResolvedMultiSeriesScales,
};
pub use bar_chart_vertical::{ResolvedVerticalScales, VERTICAL_BAR_LAYERS, VerticalBarChart};

use crate::core::CanvasSize;
use crate::scene::{SceneNode, px_attr};

/// Builds the `x3d` viewport element shared by all chart types.
///
/// Debug mode exposes the X3DOM runtime log and statistics overlays.
pub(crate) fn x3d_root(canvas: CanvasSize, debug: bool) -> SceneNode {
    let mut root = SceneNode::new("x3d")
        .with_attr("width", px_attr(canvas.width))
        .with_attr("height", px_attr(canvas.height));
    if debug {
        root.set_attr("showLog", "true");
        root.set_attr("showStat", "true");
    }
    root
}
