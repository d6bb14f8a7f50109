//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::widget::Canvas;
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to a rasterizer)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::stroked_rounded_rect(
            rect,
            radius,
            stroke.clone(),
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }
}
