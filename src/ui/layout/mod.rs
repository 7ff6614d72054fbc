//! Layout management for the single-column form

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Computed rects for every part of the form
#[derive(Debug, Clone, Default)]
pub struct ComputedLayout {
    pub title: Rect,
    pub amount_field: Rect,
    pub tip_field: Rect,
    pub round_up_row: Rect,
    pub result: Rect,
    pub footer: Option<Rect>,
    pub overlay_area: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    /// Widest the form column gets
    pub const MAX_FORM_WIDTH: u16 = 48;
    /// Columns kept free on each side of the form
    pub const SIDE_PADDING: u16 = 4;

    pub fn compute(area: Rect, show_footer: bool) -> ComputedLayout {
        let (body, footer) = if show_footer {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        // Centered column, like a phone screen in the middle of the terminal
        let width = body
            .width
            .saturating_sub(Self::SIDE_PADDING * 2)
            .min(Self::MAX_FORM_WIDTH);
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(body);

        let [title, amount_field, tip_field, round_up_row, result] = Layout::vertical([
            Constraint::Length(2), // Title + gap
            Constraint::Length(4), // Bordered field + gap
            Constraint::Length(4),
            Constraint::Length(2), // Switch row + gap
            Constraint::Length(1), // Result
        ])
        .flex(Flex::Center)
        .areas(column);

        ComputedLayout {
            title,
            amount_field: Self::trim_gap(amount_field),
            tip_field: Self::trim_gap(tip_field),
            round_up_row: Self::trim_gap(round_up_row),
            result,
            footer,
            overlay_area: Self::centered_rect(60, 70, area),
        }
    }

    /// Drop the spacer row at the bottom of a slot
    fn trim_gap(slot: Rect) -> Rect {
        Rect {
            height: slot.height.saturating_sub(1),
            ..slot
        }
    }

    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
