//! Tests for switch transitions and active category resolution

#[cfg(test)]
mod tests {
    use outfit_roulette::outfit::toggles::{
        Toggle, ToggleEvent, ToggleState, active_bottom, active_top, apply_toggle,
    };
    use outfit_roulette::wardrobe::Category;

    const ALL_TOGGLES: [Toggle; 4] = [
        Toggle::Layer,
        Toggle::ShortTop,
        Toggle::ShortBottom,
        Toggle::ButtonUp,
    ];

    // Every reachable-or-not combination of the four switches
    fn all_states() -> Vec<ToggleState> {
        (0u8..16)
            .map(|bits| ToggleState {
                layer_enabled: bits & 1 != 0,
                short_top_enabled: bits & 2 != 0,
                short_bottom_enabled: bits & 4 != 0,
                button_up_enabled: bits & 8 != 0,
            })
            .collect()
    }

    // Tests the initial switch positions
    // Verified by starting with layer off
    #[test]
    fn test_default_state() {
        let state = ToggleState::default();

        assert!(state.layer_enabled);
        assert!(!state.short_top_enabled);
        assert!(!state.short_bottom_enabled);
        assert!(!state.button_up_enabled);
    }

    // Tests enabling button-up with layer on
    // Verified by clearing layer along with short top
    #[test]
    fn test_button_up_example() {
        let state = apply_toggle(
            ToggleState::default(),
            ToggleEvent::enable(Toggle::ButtonUp),
        );

        assert_eq!(
            state,
            ToggleState {
                layer_enabled: true,
                short_top_enabled: false,
                short_bottom_enabled: false,
                button_up_enabled: true,
            }
        );
    }

    // Tests short top and button-up exclude each other from any state
    // Verified by removing the forced reset of the other switch
    #[test]
    fn test_exclusivity_from_every_state() {
        for state in all_states() {
            let with_button_up = apply_toggle(state, ToggleEvent::enable(Toggle::ButtonUp));
            assert!(with_button_up.button_up_enabled);
            assert!(!with_button_up.short_top_enabled);

            let with_short_top = apply_toggle(state, ToggleEvent::enable(Toggle::ShortTop));
            assert!(with_short_top.short_top_enabled);
            assert!(!with_short_top.button_up_enabled);

            assert_eq!(
                apply_toggle(with_button_up, ToggleEvent::enable(Toggle::ButtonUp)),
                with_button_up
            );
        }
    }

    // Tests layer and short bottom never touch other switches
    // Verified by clearing short top when short bottom changes
    #[test]
    fn test_independent_switches() {
        for state in all_states() {
            for toggle in [Toggle::Layer, Toggle::ShortBottom] {
                for enabled in [true, false] {
                    let next = apply_toggle(state, ToggleEvent { toggle, enabled });
                    for other in ALL_TOGGLES.iter().filter(|t| **t != toggle) {
                        assert_eq!(next.is_enabled(*other), state.is_enabled(*other));
                    }
                    assert_eq!(next.is_enabled(toggle), enabled);
                }
            }
        }
    }

    // Tests disabling a switch leaves its partner alone
    // Verified by forcing the partner off on every change
    #[test]
    fn test_disable_does_not_touch_partner() {
        let state = ToggleState {
            short_top_enabled: true,
            ..ToggleState::default()
        };

        let next = apply_toggle(state, ToggleEvent::disable(Toggle::ButtonUp));

        assert!(next.short_top_enabled);
        assert!(!next.button_up_enabled);
    }

    // Tests top slot priority, including the unreachable double-on state
    // Verified by checking short top before button-up
    #[test]
    fn test_active_top_priority() {
        let mut state = ToggleState::default();
        assert_eq!(active_top(&state), Category::Top);

        state.short_top_enabled = true;
        assert_eq!(active_top(&state), Category::ShortTop);

        state.button_up_enabled = true;
        assert_eq!(active_top(&state), Category::ButtonUp);
    }

    // Tests bottom slot follows the short bottom switch only
    // Verified by tying shorts to the short top switch
    #[test]
    fn test_active_bottom() {
        let mut state = ToggleState {
            short_top_enabled: true,
            ..ToggleState::default()
        };
        assert_eq!(active_bottom(&state), Category::Bottom);

        state.short_bottom_enabled = true;
        assert_eq!(active_bottom(&state), Category::ShortBottom);
    }
}
