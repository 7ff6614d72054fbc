//! Labeled numeric text field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::core::state::TextInput;
use crate::ui::theme::Theme;

pub struct NumberField<'a> {
    label: &'a str,
    icon: &'a str,
    input: &'a TextInput,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> NumberField<'a> {
    pub fn new(label: &'a str, icon: &'a str, input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            label,
            icon,
            input,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First char index shown so the cursor stays inside `width` columns
    fn scroll_offset(&self, width: usize) -> usize {
        if !self.focused || width == 0 {
            return 0;
        }
        (self.input.cursor() + 1).saturating_sub(width)
    }
}

impl<'a> Widget for NumberField<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let styles = &self.theme.styles;
        let (border_style, label_style) = if self.focused {
            (styles.field_border_focused, styles.field_label_focused)
        } else {
            (styles.field_border, styles.field_label)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.label), label_style));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 3 || inner.height == 0 {
            return;
        }

        // Leading icon, then one blank column
        let icon_width = (self.icon.width() as u16).min(inner.width.saturating_sub(3));
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            self.icon,
            icon_width as usize,
            styles.field_icon,
        );

        let text_x = inner.x + 1 + icon_width + 1;
        let text_width = inner.right().saturating_sub(text_x + 1) as usize;
        if text_width == 0 {
            return;
        }

        let offset = self.scroll_offset(text_width);
        let visible: String = self
            .input
            .value()
            .chars()
            .skip(offset)
            .take(text_width)
            .collect();
        buf.set_string(text_x, inner.y, &visible, styles.field_text);

        if self.focused {
            let cursor_x = text_x + (self.input.cursor() - offset) as u16;
            if cursor_x >= text_x + text_width as u16 {
                return;
            }
            if self.input.cursor() >= self.input.value().chars().count() {
                buf.set_string(cursor_x, inner.y, " ", styles.cursor);
            } else {
                buf.set_style(Rect::new(cursor_x, inner.y, 1, 1), styles.cursor);
            }
        }
    }
}
