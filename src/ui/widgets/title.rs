//! Screen title

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::Theme;

pub const TITLE: &str = "Calculate Tip";

pub struct TitleText<'a> {
    theme: &'a Theme,
}

impl<'a> TitleText<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl<'a> Widget for TitleText<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(TITLE, self.theme.styles.title))
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}
