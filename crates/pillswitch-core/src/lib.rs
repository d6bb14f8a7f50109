//! Core types and traits for the pillswitch toggle control.
//!
//! This crate provides foundational types used by the switch widget:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with hex parsing
//! - Draw commands and the [`Canvas`] seam: [`DrawCommand`], [`RecordingCanvas`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - Theme tokens: [`ThemeTokens`], loadable from TOML

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod theme;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, LineCap, StrokeStyle};
pub use event::{Event, MouseButton, PointerId, PointerType, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use theme::{ThemeError, ThemeTokens, ThemeVariant};
pub use widget::{AccessibleRole, Canvas, LayoutResult, TypeId, Widget};
