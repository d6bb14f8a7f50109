//! Switch geometry and painting.
//!
//! Everything here is a pure function of the allocated bounds and the
//! checked state. There is no interpolation between states: the thumb is
//! either flush left or flush right.

use crate::colors::ResolvedColors;
use pillswitch_core::{Canvas, CornerRadius, LineCap, Point, Rect, Size, StrokeStyle};
use serde::{Deserialize, Serialize};

/// Border stroke width, in logical units.
pub const BORDER_SIZE: f32 = 1.0;

/// Requested track corner radius. Rounded-rect primitives clamp it to half
/// the track height, which makes the track a pill.
pub const TRACK_CORNER_RADIUS: f32 = 100.0;

/// Default widget extent.
pub const DEFAULT_SIZE: Size = Size::new(54.0, 32.0);

/// Everything needed to paint one switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchGeometry {
    /// Outline rect, the full surface
    pub border: Rect,
    /// Filled track, inset by the border
    pub track: Rect,
    /// Corner radius shared by outline and track
    pub corner_radius: CornerRadius,
    /// Thumb center
    pub thumb_center: Point,
    /// Thumb radius, never negative
    pub thumb_radius: f32,
}

impl SwitchGeometry {
    /// Lay out a switch inside `bounds`.
    #[must_use]
    pub fn compute(bounds: Rect, checked: bool) -> Self {
        let thumb_radius = thumb_radius(bounds.height);
        Self {
            border: bounds,
            track: track_rect(bounds),
            corner_radius: CornerRadius::uniform(TRACK_CORNER_RADIUS),
            thumb_center: thumb_center(bounds, thumb_radius, checked),
            thumb_radius,
        }
    }
}

/// Track fill rect: the surface inset by [`BORDER_SIZE`] on every side.
#[must_use]
pub fn track_rect(bounds: Rect) -> Rect {
    bounds.inset(BORDER_SIZE)
}

/// Thumb radius for a surface of the given height.
///
/// Half the height minus four border widths, clamped at zero. Surfaces of
/// height 8 or less get a zero-radius thumb.
#[must_use]
pub fn thumb_radius(height: f32) -> f32 {
    let raw = height / 2.0 - BORDER_SIZE * 4.0;
    if raw < 0.0 {
        tracing::debug!(height, raw, "surface too short for thumb; radius clamped to 0");
    }
    raw.max(0.0)
}

/// Thumb center: vertically centered, flush right when checked and flush
/// left otherwise, two border widths in from the edge.
#[must_use]
pub fn thumb_center(bounds: Rect, radius: f32, checked: bool) -> Point {
    let y = bounds.y + bounds.height / 2.0;
    let x = if checked {
        bounds.x + bounds.width - radius - BORDER_SIZE * 2.0
    } else {
        bounds.x + radius + BORDER_SIZE * 2.0
    };
    Point::new(x, y)
}

/// Paint border, track and thumb, in that order.
pub fn paint_switch(canvas: &mut dyn Canvas, geometry: &SwitchGeometry, colors: &ResolvedColors) {
    tracing::trace!(?geometry, "painting switch");

    canvas.stroke_rounded_rect(
        geometry.border,
        geometry.corner_radius,
        &StrokeStyle::new(colors.border, BORDER_SIZE).with_cap(LineCap::Round),
    );
    canvas.fill_rounded_rect(geometry.track, geometry.corner_radius, colors.track);
    canvas.fill_circle(geometry.thumb_center, geometry.thumb_radius, colors.thumb);
}
