//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::core::state::NUMBER_KEYS;
use crate::ui::theme::Theme;

const CLOSE_HINT: &str = " Press Esc to close ";

pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl<'a> Widget for HelpOverlay<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(Span::styled(" Tiptime Help ", self.theme.styles.overlay_title))
            .borders(Borders::ALL)
            .border_style(self.theme.styles.field_border_focused)
            .style(Style::default().bg(self.theme.colors.bg_secondary));

        let inner = block.inner(area);
        block.render(area, buf);

        let keybindings = [
            ("Editing", vec![
                (NUMBER_KEYS, "Type into the focused field"),
                ("←/→", "Move cursor"),
                ("Home/End", "Jump to start/end"),
                ("Ctrl-U", "Clear field"),
            ]),
            ("Navigation", vec![
                ("Tab/↓", "Next control"),
                ("S-Tab/↑", "Previous control"),
                ("Enter", "Next control / toggle switch"),
            ]),
            ("Tip", vec![
                ("Space", "Toggle round up (on switch)"),
                ("Ctrl-R", "Toggle round up"),
            ]),
            ("General", vec![
                ("F1", "Toggle help"),
                ("Esc", "Close help / quit"),
                ("Ctrl-C", "Quit"),
            ]),
        ];

        let mut y = inner.y;

        for (section, bindings) in &keybindings {
            if y >= inner.bottom() {
                break;
            }

            let header = Line::from(vec![Span::styled(
                format!("─── {} ", section),
                Style::default()
                    .fg(self.theme.colors.accent_primary)
                    .add_modifier(Modifier::BOLD),
            )]);
            buf.set_line(inner.x + 1, y, &header, inner.width.saturating_sub(2));
            y += 1;

            for (key, desc) in bindings {
                if y >= inner.bottom() {
                    break;
                }

                let line = Line::from(vec![
                    Span::styled(
                        format!("  {:>9}  ", key),
                        self.theme.styles.keybind_key,
                    ),
                    Span::styled(*desc, self.theme.styles.keybind),
                ]);
                buf.set_line(inner.x + 1, y, &line, inner.width.saturating_sub(2));
                y += 1;
            }

            y += 1;
        }

        if area.height > 0 {
            let hint_width = (CLOSE_HINT.len() as u16).min(area.width);
            buf.set_span(
                area.x + (area.width - hint_width) / 2,
                area.bottom() - 1,
                &Span::styled(CLOSE_HINT, Style::default().fg(self.theme.colors.fg_muted)),
                hint_width,
            );
        }
    }
}
