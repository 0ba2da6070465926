mod axis;
mod axis_three_plane;
mod bars;
mod bars_multi_series;
mod viewpoint;

pub use axis::{Axis, AxisDirection, AxisScale};
pub use axis_three_plane::AxisThreePlane;
pub use bars::Bars;
pub use bars_multi_series::BarsMultiSeries;
pub use viewpoint::{QuickView, Viewpoint};

use crate::scene::SceneNode;

/// Wraps a geometry node in `shape > appearance > material` with the
/// given diffuse color token.
pub(crate) fn material_shape(geometry: SceneNode, color: &str) -> SceneNode {
    SceneNode::new("shape")
        .with_child(
            SceneNode::new("appearance")
                .with_child(SceneNode::new("material").with_attr("diffuseColor", color)),
        )
        .with_child(geometry)
}
