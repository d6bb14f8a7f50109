//! Switch color scheme and per-state color resolution.

use pillswitch_core::{Color, ThemeTokens};
use serde::{Deserialize, Serialize};

/// Active/inactive colors for every part of a switch.
///
/// A scheme is never edited in place; a new look is a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchColors {
    /// Thumb color when checked
    pub thumb_active: Color,
    /// Thumb color when unchecked
    pub thumb_inactive: Color,
    /// Track fill when checked
    pub track_active: Color,
    /// Track fill when unchecked
    pub track_inactive: Color,
    /// Track outline when checked
    pub border_active: Color,
    /// Track outline when unchecked
    pub border_inactive: Color,
}

impl SwitchColors {
    /// Create a scheme from all six colors.
    #[must_use]
    pub const fn new(
        thumb_active: Color,
        thumb_inactive: Color,
        track_active: Color,
        track_inactive: Color,
        border_active: Color,
        border_inactive: Color,
    ) -> Self {
        Self {
            thumb_active,
            thumb_inactive,
            track_active,
            track_inactive,
            border_active,
            border_inactive,
        }
    }

    /// Default scheme drawn from theme tokens.
    ///
    /// The thumb keeps one color in both states; only track and border
    /// follow the checked state.
    #[must_use]
    pub const fn from_theme(theme: &ThemeTokens) -> Self {
        Self {
            thumb_active: theme.content_accent_secondary,
            thumb_inactive: theme.content_accent_secondary,
            track_active: theme.button_primary_bg,
            track_inactive: theme.background_secondary,
            border_active: theme.button_primary_bg,
            border_inactive: theme.content_quaternary,
        }
    }

    /// Flat colors for the given state.
    #[must_use]
    pub const fn resolve(&self, checked: bool) -> ResolvedColors {
        resolve_colors(checked, self)
    }
}

impl Default for SwitchColors {
    fn default() -> Self {
        Self::from_theme(&ThemeTokens::default())
    }
}

/// The single color chosen for each part in one state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColors {
    /// Track fill
    pub track: Color,
    /// Track outline
    pub border: Color,
    /// Thumb fill
    pub thumb: Color,
}

/// Pick the active or inactive color of each pair. No blending.
#[must_use]
pub const fn resolve_colors(checked: bool, colors: &SwitchColors) -> ResolvedColors {
    if checked {
        ResolvedColors {
            track: colors.track_active,
            border: colors.border_active,
            thumb: colors.thumb_active,
        }
    } else {
        ResolvedColors {
            track: colors.track_inactive,
            border: colors.border_inactive,
            thumb: colors.thumb_inactive,
        }
    }
}

/// Remembers the last resolution, keyed by `(checked, colors)`.
#[derive(Debug, Clone, Default)]
pub struct ColorMemo {
    entry: Option<(bool, SwitchColors, ResolvedColors)>,
    recomputes: u64,
}

impl ColorMemo {
    /// Create an empty memo.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entry: None,
            recomputes: 0,
        }
    }

    /// Resolve, reusing the cached value when the key is unchanged.
    pub fn resolve(&mut self, checked: bool, colors: &SwitchColors) -> ResolvedColors {
        if let Some(hit) = self.get(checked, colors) {
            return hit;
        }
        let resolved = resolve_colors(checked, colors);
        self.entry = Some((checked, *colors, resolved));
        self.recomputes += 1;
        resolved
    }

    /// Cached value for this key, without recomputing.
    #[must_use]
    pub fn get(&self, checked: bool, colors: &SwitchColors) -> Option<ResolvedColors> {
        match &self.entry {
            Some((c, scheme, resolved)) if *c == checked && scheme == colors => Some(*resolved),
            _ => None,
        }
    }

    /// Number of times the memo had to resolve from scratch.
    #[must_use]
    pub const fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}
