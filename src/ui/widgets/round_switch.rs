//! "Round up tip?" label with a switch on the right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

pub const ROUND_UP_LABEL: &str = "Round up tip?";

const SWITCH_ON: &str = " ● ON ";
const SWITCH_OFF: &str = " OFF ○ ";

pub struct RoundUpSwitch<'a> {
    round_up: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> RoundUpSwitch<'a> {
    pub fn new(round_up: bool, theme: &'a Theme) -> Self {
        Self {
            round_up,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for RoundUpSwitch<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let styles = &self.theme.styles;

        let label_style = if self.focused {
            styles.field_label_focused
        } else {
            styles.field_text
        };
        let marker = if self.focused { "› " } else { "  " };
        buf.set_line(
            area.x,
            area.y,
            &Line::from(vec![
                Span::styled(marker, styles.field_label_focused),
                Span::styled(ROUND_UP_LABEL, label_style),
            ]),
            area.width,
        );

        let (switch, style) = if self.round_up {
            (SWITCH_ON, styles.switch_on)
        } else {
            (SWITCH_OFF, styles.switch_off)
        };
        let switch_width = switch.width() as u16;
        let x = area.right().saturating_sub(switch_width).max(area.x);
        buf.set_span(x, area.y, &Span::styled(switch, style), switch_width);
    }
}
