//! Toggle switch widget.
//!
//! The switch does not own its checked state. The host passes `checked` in,
//! and on activation the switch reports `!checked` through the change
//! handler and a [`SwitchChanged`] message. The host stores the new value
//! and rebuilds the switch with it.

use crate::colors::{resolve_colors, ColorMemo, ResolvedColors, SwitchColors};
use crate::geometry::{paint_switch, SwitchGeometry, DEFAULT_SIZE};
use pillswitch_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, DrawCommand, Event, Rect, RecordingCanvas, Size, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Message emitted when the switch is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The requested new state
    pub checked: bool,
}

/// Callback invoked with the requested new state.
pub type CheckedChangeHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// The state an activation requests: always the negation.
#[must_use]
pub const fn on_activate(checked: bool) -> bool {
    !checked
}

/// Render a switch of `size` at the origin into draw commands.
#[must_use]
pub fn render(checked: bool, colors: &SwitchColors, size: Size) -> Vec<DrawCommand> {
    let geometry = SwitchGeometry::compute(Rect::from_size(size), checked);
    let mut canvas = RecordingCanvas::new();
    paint_switch(&mut canvas, &geometry, &resolve_colors(checked, colors));
    canvas.take_commands()
}

/// Toggle switch widget (on/off).
#[derive(Clone)]
pub struct Switch {
    /// State supplied by the host
    checked: bool,
    /// Color scheme
    colors: SwitchColors,
    /// Preferred size
    size: Size,
    /// Change handler
    on_checked_change: Option<CheckedChangeHandler>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Last color resolution
    memo: ColorMemo,
    /// Cached bounds
    bounds: Rect,
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("checked", &self.checked)
            .field("colors", &self.colors)
            .field("size", &self.size)
            .field("on_checked_change", &self.on_checked_change.is_some())
            .field("accessible_name", &self.accessible_name_value)
            .field("test_id", &self.test_id_value)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self {
            checked: false,
            colors: SwitchColors::default(),
            size: DEFAULT_SIZE,
            on_checked_change: None,
            accessible_name_value: None,
            test_id_value: None,
            memo: ColorMemo::new(),
            bounds: Rect::default(),
        }
    }
}

impl Switch {
    /// Create a switch showing the given state.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self::default().checked(checked)
    }

    /// Set the displayed state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the color scheme.
    #[must_use]
    pub const fn colors(mut self, colors: SwitchColors) -> Self {
        self.colors = colors;
        self
    }

    /// Override the default 54x32 size.
    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the handler called with the requested state on activation.
    #[must_use]
    pub fn on_checked_change(mut self, handler: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_checked_change = Some(Arc::new(handler));
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Seed the color memo, typically with the one from the previous frame.
    #[must_use]
    pub const fn memo(mut self, memo: ColorMemo) -> Self {
        self.memo = memo;
        self
    }

    /// Get the displayed state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Get the color scheme.
    #[must_use]
    pub const fn get_colors(&self) -> &SwitchColors {
        &self.colors
    }

    /// Get the preferred size.
    #[must_use]
    pub const fn get_size(&self) -> Size {
        self.size
    }

    /// Colors for the current state.
    #[must_use]
    pub fn resolved_colors(&self) -> ResolvedColors {
        self.memo
            .get(self.checked, &self.colors)
            .unwrap_or_else(|| resolve_colors(self.checked, &self.colors))
    }

    /// Geometry for the current bounds and state.
    #[must_use]
    pub fn geometry(&self) -> SwitchGeometry {
        SwitchGeometry::compute(self.bounds, self.checked)
    }

    /// Color memo as of the last layout.
    #[must_use]
    pub const fn color_memo(&self) -> &ColorMemo {
        &self.memo
    }

    /// Number of fresh color resolutions performed during layout.
    #[must_use]
    pub const fn color_recomputes(&self) -> u64 {
        self.memo.recompute_count()
    }

    fn activate(&self) -> SwitchChanged {
        let requested = on_activate(self.checked);
        tracing::debug!(from = self.checked, to = requested, "switch activated");
        if let Some(handler) = &self.on_checked_change {
            handler(requested);
        }
        SwitchChanged { checked: requested }
    }
}

impl Widget for Switch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.memo.resolve(self.checked, &self.colors);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        paint_switch(canvas, &self.geometry(), &self.resolved_colors());
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if !event.is_primary_press() {
            return None;
        }
        if !self.bounds.contains_point(&event.position()) {
            return None;
        }
        Some(Box::new(self.activate()))
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
