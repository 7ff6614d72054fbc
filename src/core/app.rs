//! Main application orchestrator

use anyhow::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;

use crate::core::events::{key_to_message, Event, EventHandler, EventResult};
use crate::core::state::AppState;
use crate::core::update::update;
use crate::ui::renderer::Renderer;

pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, state })
    }

    pub async fn run(&mut self) -> Result<()> {
        let result = self.start().await;
        // Restore the terminal whether setup, the first draw or the loop failed
        let restored = self.shutdown();
        first_error(result, restored)
    }

    async fn start(&mut self) -> Result<()> {
        self.setup_terminal()?;

        let mut event_handler = EventHandler::spawn();
        self.render()?;
        self.event_loop(&mut event_handler).await
    }

    fn setup_terminal(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide,
        )?;
        self.terminal.clear()?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show,
        )?;
        Ok(())
    }

    async fn event_loop(&mut self, event_handler: &mut EventHandler) -> Result<()> {
        loop {
            let Some(event) = event_handler.next().await else {
                tracing::warn!("Event channel closed");
                break;
            };

            match self.handle_event(event)? {
                EventResult::Continue => {}
                EventResult::Quit => break,
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<EventResult> {
        let result = match event {
            Event::Key(key) => match key_to_message(&self.state, &key) {
                Some(message) => update(&mut self.state, message),
                None => return Ok(EventResult::Continue),
            },
            Event::Resize(w, h) => {
                tracing::debug!(w, h, "Terminal resized");
                EventResult::Continue
            }
        };

        if result == EventResult::Continue {
            self.render()?;
        }
        Ok(result)
    }

    fn render(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| {
            Renderer::render(frame, state);
        })?;
        Ok(())
    }
}

/// The run error wins over a failed restore, which is only logged
fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            tracing::error!(error = %restore_err, "Failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_survives_restore() {
        let err = first_error(Err(anyhow::anyhow!("raw mode")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");

        let err = first_error(
            Err(anyhow::anyhow!("raw mode")),
            Err(anyhow::anyhow!("leave screen")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_restore_error_reported_after_clean_run() {
        let err = first_error(Ok(()), Err(anyhow::anyhow!("leave screen"))).unwrap_err();
        assert_eq!(err.to_string(), "leave screen");
        assert!(first_error(Ok(()), Ok(())).is_ok());
    }
}
