//! Category switches and their exclusivity rules

use crate::wardrobe::category::Category;

/// One of the four user-facing category switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// Show a jacket or hoodie alongside the top
    Layer,
    /// Replace the top with a short top
    ShortTop,
    /// Replace the bottom with shorts
    ShortBottom,
    /// Replace the top with a button-up shirt
    ButtonUp,
}

/// A request to set a switch to a specific position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent {
    /// Switch being changed
    pub toggle: Toggle,
    /// Position it is being set to
    pub enabled: bool,
}

impl ToggleEvent {
    /// Turn a switch on
    pub const fn enable(toggle: Toggle) -> Self {
        Self {
            toggle,
            enabled: true,
        }
    }

    /// Turn a switch off
    pub const fn disable(toggle: Toggle) -> Self {
        Self {
            toggle,
            enabled: false,
        }
    }
}

/// Positions of the four category switches
///
/// Short top and button-up are mutually exclusive: turning either one on
/// turns the other off. Layer and short bottom never affect anything else.
/// Construct and change values through [`apply_toggle`] to keep that
/// guarantee; the fields stay public so states can be inspected and set up
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
// Each flag mirrors an independent on-screen switch
#[allow(clippy::struct_excessive_bools)]
pub struct ToggleState {
    /// Layer slot is shown
    pub layer_enabled: bool,
    /// Short top replaces the top
    pub short_top_enabled: bool,
    /// Shorts replace the bottom
    pub short_bottom_enabled: bool,
    /// Button-up replaces the top
    pub button_up_enabled: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            layer_enabled: true,
            short_top_enabled: false,
            short_bottom_enabled: false,
            button_up_enabled: false,
        }
    }
}

impl ToggleState {
    /// Current position of a switch
    pub const fn is_enabled(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Layer => self.layer_enabled,
            Toggle::ShortTop => self.short_top_enabled,
            Toggle::ShortBottom => self.short_bottom_enabled,
            Toggle::ButtonUp => self.button_up_enabled,
        }
    }
}

/// Apply a switch change and enforce short-top/button-up exclusivity
#[must_use]
pub const fn apply_toggle(state: ToggleState, event: ToggleEvent) -> ToggleState {
    let mut next = state;

    match event.toggle {
        Toggle::Layer => next.layer_enabled = event.enabled,
        Toggle::ShortBottom => next.short_bottom_enabled = event.enabled,
        Toggle::ShortTop => {
            next.short_top_enabled = event.enabled;
            if event.enabled {
                next.button_up_enabled = false;
            }
        }
        Toggle::ButtonUp => {
            next.button_up_enabled = event.enabled;
            if event.enabled {
                next.short_top_enabled = false;
            }
        }
    }

    next
}

/// Category shown in the top slot
///
/// Button-up wins over short top if both are somehow on.
pub const fn active_top(state: &ToggleState) -> Category {
    if state.button_up_enabled {
        Category::ButtonUp
    } else if state.short_top_enabled {
        Category::ShortTop
    } else {
        Category::Top
    }
}

/// Category shown in the bottom slot
pub const fn active_bottom(state: &ToggleState) -> Category {
    if state.short_bottom_enabled {
        Category::ShortBottom
    } else {
        Category::Bottom
    }
}
