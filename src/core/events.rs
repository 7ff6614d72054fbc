//! Terminal event plumbing and key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::core::message::Message;
use crate::core::state::{AppMode, AppState};

/// Input arriving from the terminal
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create the channel and start forwarding terminal input into it
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(Self::terminal_events(tx));
        Self { rx }
    }

    async fn terminal_events(tx: mpsc::UnboundedSender<Event>) {
        use crossterm::event::{Event as CrosstermEvent, EventStream};
        use futures::StreamExt;

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let event = match event_result {
                Ok(CrosstermEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                    Event::Key(key)
                }
                Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!("Terminal event stream failed: {}", e);
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key binding helper
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.code == self.key && event.modifiers == self.modifiers
    }
}

/// Standard key bindings
pub struct KeyBindings;

impl KeyBindings {
    pub fn quit() -> KeyBinding {
        KeyBinding::ctrl(KeyCode::Char('c'))
    }

    pub fn escape() -> KeyBinding {
        KeyBinding::new(KeyCode::Esc)
    }

    pub fn help() -> KeyBinding {
        KeyBinding::new(KeyCode::F(1))
    }

    pub fn help_alt() -> KeyBinding {
        KeyBinding::new(KeyCode::Char('?'))
    }

    pub fn toggle_round_up() -> KeyBinding {
        KeyBinding::ctrl(KeyCode::Char('r'))
    }

    pub fn clear_field() -> KeyBinding {
        KeyBinding::ctrl(KeyCode::Char('u'))
    }

    pub fn tab() -> KeyBinding {
        KeyBinding::new(KeyCode::Tab)
    }

    pub fn backtab() -> KeyBinding {
        KeyBinding {
            key: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    pub fn up() -> KeyBinding {
        KeyBinding::new(KeyCode::Up)
    }

    pub fn down() -> KeyBinding {
        KeyBinding::new(KeyCode::Down)
    }

    pub fn enter() -> KeyBinding {
        KeyBinding::new(KeyCode::Enter)
    }

    pub fn space() -> KeyBinding {
        KeyBinding::new(KeyCode::Char(' '))
    }
}

/// Translate a key press into a message for the current state
pub fn key_to_message(state: &AppState, key: &KeyEvent) -> Option<Message> {
    if KeyBindings::quit().matches(key) {
        return Some(Message::Quit);
    }

    if state.mode == AppMode::Help {
        return (KeyBindings::escape().matches(key)
            || KeyBindings::help().matches(key)
            || KeyBindings::help_alt().matches(key))
        .then_some(Message::CloseHelp);
    }

    if KeyBindings::escape().matches(key) {
        return Some(Message::CloseHelp);
    }
    if KeyBindings::help().matches(key) {
        return Some(Message::ToggleHelp);
    }
    if KeyBindings::toggle_round_up().matches(key) {
        return Some(Message::ToggleRoundUp);
    }
    if KeyBindings::clear_field().matches(key) {
        return Some(Message::ClearField);
    }
    if KeyBindings::tab().matches(key) || KeyBindings::down().matches(key) {
        return Some(Message::FocusNext);
    }
    if KeyBindings::backtab().matches(key) || KeyBindings::up().matches(key) {
        return Some(Message::FocusPrev);
    }
    if KeyBindings::enter().matches(key) {
        return Some(Message::Submit);
    }

    if !state.focus.is_text() {
        if KeyBindings::space().matches(key) {
            return Some(Message::ToggleRoundUp);
        }
        if KeyBindings::help_alt().matches(key) {
            return Some(Message::ToggleHelp);
        }
        return None;
    }

    match key.code {
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Delete => Some(Message::Delete),
        KeyCode::Left => Some(Message::CursorLeft),
        KeyCode::Right => Some(Message::CursorRight),
        KeyCode::Home => Some(Message::CursorHome),
        KeyCode::End => Some(Message::CursorEnd),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Message::Input(c))
        }
        _ => None,
    }
}
