//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
        /// Touch pressure (0.0 to 1.0)
        pressure: f32,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
        /// Button (for mouse pointers)
        button: Option<MouseButton>,
    },
}

impl Event {
    /// Position carried by the event.
    #[must_use]
    pub const fn position(&self) -> Point {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchEnd { position, .. }
            | Self::PointerDown { position, .. } => *position,
        }
    }

    /// Whether this event is a primary press: a click or a tap.
    #[must_use]
    pub const fn is_primary_press(&self) -> bool {
        match self {
            Self::MouseDown { button, .. } => matches!(button, MouseButton::Left),
            Self::TouchStart { .. } => true,
            Self::PointerDown {
                is_primary, button, ..
            } => *is_primary && matches!(button, None | Some(MouseButton::Left)),
            _ => false,
        }
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}
