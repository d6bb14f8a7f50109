//! Draw commands.
//!
//! All rendering reduces to these primitives. A switch paints with rounded
//! rectangles (filled or stroked) and filled circles.

use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl StrokeStyle {
    /// Solid stroke of the given color and width.
    #[must_use]
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    /// Set the line cap.
    #[must_use]
    pub const fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

/// Box style for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius as requested; rasterizers clamp it to the bounds
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },
}

impl DrawCommand {
    /// Create a filled rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: CornerRadius, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a stroked rounded rectangle.
    #[must_use]
    pub const fn stroked_rounded_rect(
        bounds: Rect,
        radius: CornerRadius,
        stroke: StrokeStyle,
    ) -> Self {
        Self::Rect {
            bounds,
            radius,
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Fill color of this command, if it fills.
    #[must_use]
    pub fn fill_color(&self) -> Option<Color> {
        match self {
            Self::Rect { style, .. } | Self::Circle { style, .. } => style.fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_style_default() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.width, 1.0);
        assert_eq!(style.cap, LineCap::Butt);
    }

    #[test]
    fn test_stroke_style_with_cap() {
        let style = StrokeStyle::new(Color::WHITE, 2.0).with_cap(LineCap::Round);
        assert_eq!(style.cap, LineCap::Round);
        assert_eq!(style.width, 2.0);
        assert_eq!(style.color, Color::WHITE);
    }

    #[test]
    fn test_box_style_fill_and_stroke() {
        let fill = BoxStyle::fill(Color::WHITE);
        assert_eq!(fill.fill, Some(Color::WHITE));
        assert!(fill.stroke.is_none());

        let stroke = BoxStyle::stroke(StrokeStyle::default());
        assert!(stroke.fill.is_none());
        assert!(stroke.stroke.is_some());
    }

    #[test]
    fn test_rounded_rect_keeps_requested_radius() {
        let cmd = DrawCommand::rounded_rect(
            Rect::new(0.0, 0.0, 54.0, 32.0),
            CornerRadius::uniform(100.0),
            Color::WHITE,
        );
        match cmd {
            DrawCommand::Rect { radius, .. } => assert_eq!(radius, CornerRadius::uniform(100.0)),
            DrawCommand::Circle { .. } => panic!("expected rect"),
        }
    }

    #[test]
    fn test_fill_color() {
        let circle = DrawCommand::filled_circle(Point::ORIGIN, 4.0, Color::WHITE);
        assert_eq!(circle.fill_color(), Some(Color::WHITE));

        let outline = DrawCommand::stroked_rounded_rect(
            Rect::default(),
            CornerRadius::ZERO,
            StrokeStyle::default(),
        );
        assert_eq!(outline.fill_color(), None);
        assert_eq!(
            DrawCommand::rounded_rect(Rect::default(), CornerRadius::ZERO, Color::BLACK)
                .fill_color(),
            Some(Color::BLACK)
        );
    }

    #[test]
    fn test_draw_command_json_tag() {
        let cmd = DrawCommand::filled_circle(Point::new(14.0, 16.0), 12.0, Color::WHITE);
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["kind"], "circle");
        assert_eq!(json["radius"], 12.0);
    }
}
