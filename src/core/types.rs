use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// On-page size of the `x3d` viewport element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub(crate) fn validate(self) -> ChartResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Plot-area bounding box in scene units.
///
/// Scales map into this box: categorical x along `x`, values up `y`,
/// series depth along `z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Dimensions {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_finite()
            && self.x > 0.0
            && self.y > 0.0
            && self.z > 0.0
    }

    pub(crate) fn validate(self) -> ChartResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ChartError::InvalidDimensions {
                x: self.x,
                y: self.y,
                z: self.z,
            })
        }
    }

    /// Geometric center of the box, used as the camera rotation target.
    #[must_use]
    pub fn center(self) -> [f64; 3] {
        [self.x / 2.0, self.y / 2.0, self.z / 2.0]
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(40.0, 40.0, 40.0)
    }
}
