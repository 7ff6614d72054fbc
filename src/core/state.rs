//! Application state for the tip form

use crate::tip::{self, CurrencyFormat};
use crate::ui::theme::Theme;

/// Top-level application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// The tip form
    #[default]
    Form,
    /// Help overlay showing
    Help,
}

/// Which control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedField {
    #[default]
    Amount,
    TipPercent,
    RoundUp,
}

impl FocusedField {
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::TipPercent,
            Self::TipPercent => Self::RoundUp,
            Self::RoundUp => Self::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::RoundUp,
            Self::TipPercent => Self::Amount,
            Self::RoundUp => Self::TipPercent,
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, Self::RoundUp)
    }
}

/// Keys a number field takes, as shown in help
pub const NUMBER_KEYS: &str = "0-9.,-+eE";

/// Single-line text being typed, with a cursor measured in chars
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Characters a numeric keypad can produce
    pub fn accepts(c: char) -> bool {
        c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | 'e' | 'E')
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert at the cursor. Returns false if the char was rejected.
    pub fn insert(&mut self, c: char) -> bool {
        if !Self::accepts(c) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// The typed number, 0.0 when it does not parse
    pub fn number(&self) -> f64 {
        tip::parse_amount(&self.value)
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: AppMode,
    pub amount_input: TextInput,
    pub tip_input: TextInput,
    pub round_up: bool,
    pub focus: FocusedField,
    pub currency: CurrencyFormat,
    pub theme: Theme,
    pub show_hints: bool,
}

impl AppState {
    pub fn new(currency: CurrencyFormat, theme: Theme) -> Self {
        Self {
            mode: AppMode::Form,
            amount_input: TextInput::default(),
            tip_input: TextInput::default(),
            round_up: false,
            focus: FocusedField::Amount,
            currency,
            theme,
            show_hints: true,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount_input.number()
    }

    pub fn tip_percent(&self) -> f64 {
        self.tip_input.number()
    }

    /// Formatted tip for the current inputs, recomputed on every call
    pub fn tip(&self) -> String {
        tip::calculate_tip(
            self.amount(),
            self.tip_percent(),
            self.round_up,
            &self.currency,
        )
    }

    /// The text field that has focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FocusedField::Amount => Some(&mut self.amount_input),
            FocusedField::TipPercent => Some(&mut self.tip_input),
            FocusedField::RoundUp => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CurrencyFormat::en_us(), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_focus_cycles() {
        let field = FocusedField::Amount;
        assert_eq!(field.next(), FocusedField::TipPercent);
        assert_eq!(field.next().next(), FocusedField::RoundUp);
        assert_eq!(field.next().next().next(), FocusedField::Amount);
        assert_eq!(field.prev(), FocusedField::RoundUp);
    }

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        for c in "125".chars() {
            assert!(input.insert(c));
        }
        input.move_left();
        input.insert('.');
        assert_eq!(input.value(), "12.5");
        assert_eq!(input.cursor(), 3);

        input.backspace();
        assert_eq!(input.value(), "125");

        input.move_home();
        input.delete();
        assert_eq!(input.value(), "25");
        assert_eq!(input.cursor(), 0);

        input.move_end();
        input.delete();
        assert_eq!(input.value(), "25");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_text_input_rejects_non_numeric() {
        let mut input = TextInput::new("4");
        assert!(!input.insert('x'));
        assert!(!input.insert(' '));
        assert_eq!(input.value(), "4");
    }

    #[test]
    fn test_number_keys_match_accepted_chars() {
        let listed: Vec<char> = NUMBER_KEYS.trim_start_matches("0-9").chars().collect();
        for c in listed.iter().copied().chain('0'..='9') {
            assert!(TextInput::accepts(c), "{c} should be accepted");
        }
        let accepted = (' '..='~')
            .filter(|c| !c.is_ascii_digit() && TextInput::accepts(*c))
            .count();
        assert_eq!(accepted, listed.len());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = TextInput::new("7");
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor(), 1);
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.value(), "7");
    }

    #[test]
    fn test_empty_inputs_give_zero_tip() {
        let state = AppState::default();
        assert_eq!(state.amount(), 0.0);
        assert_eq!(state.tip_percent(), 0.0);
        assert_eq!(state.tip(), "$0.00");
    }

    #[test]
    fn test_tip_derived_from_inputs() {
        let mut state = AppState::default();
        state.amount_input = TextInput::new("33");
        state.tip_input = TextInput::new("10");
        assert_eq!(state.tip(), "$3.30");
        state.round_up = true;
        assert_eq!(state.tip(), "$4.00");
    }

    #[test]
    fn test_unparseable_input_is_zero() {
        let mut state = AppState::default();
        state.amount_input = TextInput::new("1..2");
        state.tip_input = TextInput::new("20");
        assert_eq!(state.tip(), "$0.00");
    }
}
