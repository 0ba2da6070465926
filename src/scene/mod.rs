mod node;
mod writer;

pub use node::SceneNode;

/// Formats a 3-component attribute value (`"x y z"`).
///
/// Uses the shortest round-trip float form, so whole numbers carry no
/// decimal point and output stays byte-stable across runs.
#[must_use]
pub fn vec3_attr(x: f64, y: f64, z: f64) -> String {
    format!("{x} {y} {z}")
}

/// Formats a 4-component attribute value (`"x y z angle"`).
#[must_use]
pub fn vec4_attr(x: f64, y: f64, z: f64, angle: f64) -> String {
    format!("{x} {y} {z} {angle}")
}

/// Formats a scalar attribute value.
#[must_use]
pub fn scalar_attr(value: f64) -> String {
    format!("{value}")
}

/// Formats a CSS pixel length (`"500px"`).
#[must_use]
pub fn px_attr(length: u32) -> String {
    format!("{length}px")
}
