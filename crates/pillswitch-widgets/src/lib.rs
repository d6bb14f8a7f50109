//! Toggle switch widget for the pillswitch toolkit.
//!
//! A switch is a pill-shaped track with a border and a circular thumb that
//! sits left when unchecked and right when checked. Rendering is a pure
//! function of `(checked, colors, size)`:
//!
//! ```
//! use pillswitch_widgets::{render, SwitchColors, DEFAULT_SIZE};
//!
//! let commands = render(true, &SwitchColors::default(), DEFAULT_SIZE);
//! assert_eq!(commands.len(), 3); // border, track, thumb
//! ```

pub mod colors;
pub mod column;
pub mod geometry;
pub mod preview;
pub mod switch;

pub use colors::{resolve_colors, ColorMemo, ResolvedColors, SwitchColors};
pub use column::Column;
pub use geometry::{
    paint_switch, thumb_center, thumb_radius, track_rect, SwitchGeometry, BORDER_SIZE,
    DEFAULT_SIZE, TRACK_CORNER_RADIUS,
};
pub use preview::{render_sample, sample_column, PreviewHost};
pub use switch::{on_activate, render, CheckedChangeHandler, Switch, SwitchChanged};
