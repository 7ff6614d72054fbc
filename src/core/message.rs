//! Messages driving the update function

/// Everything the form can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Type a character into the focused field
    Input(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Clear the focused field
    ClearField,

    FocusNext,
    FocusPrev,
    /// Enter: advance from a text field, toggle on the switch
    Submit,

    ToggleRoundUp,

    ToggleHelp,
    CloseHelp,

    Quit,
}
