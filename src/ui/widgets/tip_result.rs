//! Formatted tip line

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::Theme;

pub struct TipResultText<'a> {
    tip: &'a str,
    theme: &'a Theme,
}

impl<'a> TipResultText<'a> {
    pub fn new(tip: &'a str, theme: &'a Theme) -> Self {
        Self { tip, theme }
    }
}

impl<'a> Widget for TipResultText<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("Tip Amount: ", self.theme.styles.field_text),
            Span::styled(self.tip, self.theme.styles.result),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
