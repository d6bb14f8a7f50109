//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    ///
    /// A maximum below the minimum (or NaN) collapses to the minimum.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            fit(size.width, self.min_width, self.max_width),
            fit(size.height, self.min_height, self.max_height),
        )
    }
}

fn fit(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max.max(min))
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
