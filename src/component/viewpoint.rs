use crate::scene::{SceneNode, scalar_attr, vec3_attr, vec4_attr};

/// Preset camera angles for common chart reading positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickView {
    Left,
    Side,
    Top,
    Dimetric,
}

/// Camera definition appended to the scene.
///
/// Defaults to the dimetric preset, which shows all three plot planes
/// at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    position: [f64; 3],
    orientation: [f64; 4],
    field_of_view: f64,
    center_of_rotation: [f64; 3],
}

impl Viewpoint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to a preset camera angle, keeping the rotation center.
    #[must_use]
    pub fn quick_view(mut self, preset: QuickView) -> Self {
        let (position, orientation, field_of_view) = match preset {
            QuickView::Left => (
                [37.10119, 18.70484, 51.01594],
                [0.06724, 0.99767, -0.01148, 0.33908],
                1.0,
            ),
            QuickView::Side => (
                [109.47188, 5.28316, 62.3294],
                [0.23771, 0.78966, 0.56541, 1.2855],
                1.0,
            ),
            QuickView::Top => (
                [27.12955, 106.67181, 31.65828],
                [0.86241, 0.3749, 0.34013, 1.60141],
                1.0,
            ),
            QuickView::Dimetric => ([80.0, 15.0, 80.0], [0.0, 1.0, 0.0, 0.8], 0.8),
        };
        self.position = position;
        self.orientation = orientation;
        self.field_of_view = field_of_view;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: [f64; 3]) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: [f64; 4]) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_field_of_view(mut self, field_of_view: f64) -> Self {
        self.field_of_view = field_of_view;
        self
    }

    #[must_use]
    pub fn with_center_of_rotation(mut self, center_of_rotation: [f64; 3]) -> Self {
        self.center_of_rotation = center_of_rotation;
        self
    }

    #[must_use]
    pub fn position(&self) -> [f64; 3] {
        self.position
    }

    #[must_use]
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Appends the `viewpoint` element to `scene`.
    pub fn apply(&self, scene: &mut SceneNode) {
        let [px, py, pz] = self.position;
        let [ox, oy, oz, angle] = self.orientation;
        let [cx, cy, cz] = self.center_of_rotation;
        scene.push_child(
            SceneNode::new("viewpoint")
                .with_attr("position", vec3_attr(px, py, pz))
                .with_attr("orientation", vec4_attr(ox, oy, oz, angle))
                .with_attr("fieldOfView", scalar_attr(self.field_of_view))
                .with_attr("centerOfRotation", vec3_attr(cx, cy, cz))
                .with_attr("set_bind", "true"),
        );
    }
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self {
            position: [80.0, 15.0, 80.0],
            orientation: [0.0, 1.0, 0.0, 0.8],
            field_of_view: 0.8,
            center_of_rotation: [0.0, 0.0, 0.0],
        }
    }
}
