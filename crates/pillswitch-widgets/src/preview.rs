//! Sample and preview scaffolding.
//!
//! [`sample_column`] is the reference layout: a checked switch above an
//! unchecked one. [`PreviewHost`] plays the part of an application that owns
//! the checked flag, rebuilding the switch from it for every frame. The
//! host's color memo outlives each switch, so frames with an unchanged state
//! reuse the last resolution.

use crate::colors::{ColorMemo, SwitchColors};
use crate::column::Column;
use crate::switch::{Switch, SwitchChanged};
use pillswitch_core::{
    Constraints, DrawCommand, Event, MouseButton, RecordingCanvas, Rect, Size, Widget,
};

/// Two switches, checked then unchecked, stacked with no gap.
#[must_use]
pub fn sample_column(colors: SwitchColors) -> Column {
    Column::new()
        .child(Switch::new(true).colors(colors).test_id("sample-checked"))
        .child(Switch::new(false).colors(colors).test_id("sample-unchecked"))
}

/// Lay out and paint the sample column at the origin.
#[must_use]
pub fn render_sample(colors: SwitchColors) -> Vec<DrawCommand> {
    let mut column = sample_column(colors);
    let size = column.measure(Constraints::unbounded());
    column.layout(Rect::from_size(size));

    let mut canvas = RecordingCanvas::new();
    column.paint(&mut canvas);
    canvas.take_commands()
}

/// Owns the checked flag and feeds it back into a fresh switch each frame.
#[derive(Debug, Clone)]
pub struct PreviewHost {
    checked: bool,
    colors: SwitchColors,
    size: Size,
    memo: ColorMemo,
}

impl PreviewHost {
    /// Create a host with an initial state.
    #[must_use]
    pub const fn new(checked: bool, colors: SwitchColors, size: Size) -> Self {
        Self {
            checked,
            colors,
            size,
            memo: ColorMemo::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn checked(&self) -> bool {
        self.checked
    }

    /// Fresh color resolutions across all frames so far.
    #[must_use]
    pub const fn color_recomputes(&self) -> u64 {
        self.memo.recompute_count()
    }

    /// Build the switch for the current state, laid out at the origin.
    pub fn view(&mut self) -> Switch {
        let mut switch = Switch::new(self.checked)
            .colors(self.colors)
            .size(self.size)
            .memo(std::mem::take(&mut self.memo));
        let size = switch.measure(Constraints::unbounded());
        switch.layout(Rect::from_size(size));
        self.memo = switch.color_memo().clone();
        switch
    }

    /// Paint the current frame.
    pub fn frame(&mut self) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();
        self.view().paint(&mut canvas);
        canvas.take_commands()
    }

    /// Route an event through a fresh view; store any requested state.
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        let Some(msg) = self.view().event(event) else {
            return false;
        };
        match msg.downcast_ref::<SwitchChanged>() {
            Some(changed) => {
                tracing::info!(checked = changed.checked, "preview state updated");
                self.checked = changed.checked;
                true
            }
            None => false,
        }
    }

    /// Click the center of the switch.
    pub fn click(&mut self) -> bool {
        let position = Rect::from_size(self.size).center();
        self.dispatch(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        })
    }
}
