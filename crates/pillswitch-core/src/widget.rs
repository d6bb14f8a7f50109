//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self within allocated bounds
//! 3. **Paint**: Generate draw commands for rendering
//!
//! Input arrives through [`Widget::event`], which may return a message for the
//! host application to act on.
//!
//! # Examples
//!
//! ```
//! use pillswitch_core::TypeId;
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{CornerRadius, Point, Rect, Size};
use crate::{Color, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types (used for diffing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rounded rectangle.
    ///
    /// Backends clamp `radius` to half the rect's shorter side.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color);

    /// Draw a stroked rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, stroke: &StrokeStyle);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Checkbox
    Checkbox,
    /// On/off switch
    Switch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_distinguishes_types() {
        assert_eq!(TypeId::of::<u8>(), TypeId::of::<u8>());
        assert_ne!(TypeId::of::<u8>(), TypeId::of::<u16>());
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
    }

    #[test]
    fn test_layout_result_default() {
        assert_eq!(LayoutResult::default().size, Size::ZERO);
    }
}
