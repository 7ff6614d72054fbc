//! State transitions (TEA pattern)
//!
//! `update` is the only place the form state changes. It never performs I/O;
//! the event loop redraws after every call.

use crate::core::events::EventResult;
use crate::core::message::Message;
use crate::core::state::{AppMode, AppState, FocusedField, TextInput};

/// Apply one message to the state
pub fn update(state: &mut AppState, message: Message) -> EventResult {
    tracing::trace!(?message, mode = ?state.mode, focus = ?state.focus, "update");

    if state.mode == AppMode::Help {
        match message {
            Message::Quit => return EventResult::Quit,
            Message::ToggleHelp | Message::CloseHelp => state.mode = AppMode::Form,
            _ => {}
        }
        return EventResult::Continue;
    }

    match message {
        Message::Input(c) => {
            if let Some(input) = state.focused_input() {
                if !input.insert(c) {
                    tracing::debug!(?c, "Ignored non-numeric input");
                }
            }
        }
        Message::Backspace => edit(state, TextInput::backspace),
        Message::Delete => edit(state, TextInput::delete),
        Message::CursorLeft => edit(state, TextInput::move_left),
        Message::CursorRight => edit(state, TextInput::move_right),
        Message::CursorHome => edit(state, TextInput::move_home),
        Message::CursorEnd => edit(state, TextInput::move_end),
        Message::ClearField => edit(state, TextInput::clear),

        Message::FocusNext => state.focus = state.focus.next(),
        Message::FocusPrev => state.focus = state.focus.prev(),
        Message::Submit => match state.focus {
            FocusedField::RoundUp => toggle_round_up(state),
            field => state.focus = field.next(),
        },

        Message::ToggleRoundUp => toggle_round_up(state),

        Message::ToggleHelp => state.mode = AppMode::Help,
        // Esc on the bare form leaves the app
        Message::CloseHelp | Message::Quit => return EventResult::Quit,
    }

    EventResult::Continue
}

fn edit(state: &mut AppState, f: impl FnOnce(&mut TextInput)) {
    if let Some(input) = state.focused_input() {
        f(input);
    }
}

fn toggle_round_up(state: &mut AppState) {
    state.round_up = !state.round_up;
    tracing::debug!(round_up = state.round_up, "Round up toggled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(state, Message::Input(c));
        }
    }

    #[test]
    fn test_typing_updates_tip() {
        let mut state = AppState::default();
        type_text(&mut state, "100");
        update(&mut state, Message::FocusNext);
        type_text(&mut state, "15");

        assert_eq!(state.amount_input.value(), "100");
        assert_eq!(state.tip_input.value(), "15");
        assert_eq!(state.tip(), "$15.00");
    }

    #[test]
    fn test_submit_walks_the_form() {
        let mut state = AppState::default();
        type_text(&mut state, "33");
        update(&mut state, Message::Submit);
        assert_eq!(state.focus, FocusedField::TipPercent);
        type_text(&mut state, "10");
        update(&mut state, Message::Submit);
        assert_eq!(state.focus, FocusedField::RoundUp);
        assert_eq!(state.tip(), "$3.30");

        update(&mut state, Message::Submit);
        assert!(state.round_up);
        assert_eq!(state.tip(), "$4.00");
    }

    #[test]
    fn test_typing_on_switch_is_ignored() {
        let mut state = AppState::default();
        state.focus = FocusedField::RoundUp;
        type_text(&mut state, "12");
        update(&mut state, Message::Backspace);
        assert!(state.amount_input.value().is_empty());
        assert!(state.tip_input.value().is_empty());
    }

    #[test]
    fn test_toggle_round_up_from_any_field() {
        let mut state = AppState::default();
        update(&mut state, Message::ToggleRoundUp);
        assert!(state.round_up);
        assert_eq!(state.focus, FocusedField::Amount);
        update(&mut state, Message::ToggleRoundUp);
        assert!(!state.round_up);
    }

    #[test]
    fn test_clear_field_only_touches_focused() {
        let mut state = AppState::default();
        type_text(&mut state, "50");
        update(&mut state, Message::FocusNext);
        type_text(&mut state, "20");
        update(&mut state, Message::ClearField);

        assert_eq!(state.amount_input.value(), "50");
        assert!(state.tip_input.value().is_empty());
        assert_eq!(state.tip(), "$0.00");
    }

    #[test]
    fn test_help_swallows_input() {
        let mut state = AppState::default();
        update(&mut state, Message::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);

        type_text(&mut state, "9");
        assert!(state.amount_input.value().is_empty());

        assert_eq!(update(&mut state, Message::CloseHelp), EventResult::Continue);
        assert_eq!(state.mode, AppMode::Form);
    }

    #[test]
    fn test_quit_paths() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Message::CloseHelp), EventResult::Quit);

        state.mode = AppMode::Help;
        assert_eq!(update(&mut state, Message::Quit), EventResult::Quit);
    }
}
