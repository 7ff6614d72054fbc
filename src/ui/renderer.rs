//! Main UI renderer

use ratatui::Frame;

use crate::core::state::{AppMode, AppState, FocusedField};
use crate::ui::layout::LayoutManager;
use crate::ui::widgets::*;

pub const AMOUNT_LABEL: &str = "Bill Amount";
pub const TIP_PERCENT_LABEL: &str = "Tip Percentage";

pub struct Renderer;

impl Renderer {
    /// Draw the whole screen from `state`. Holds no state of its own.
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let theme = &state.theme;

        // Clear background
        frame.render_widget(
            ratatui::widgets::Block::default()
                .style(ratatui::style::Style::default().bg(theme.colors.bg_primary)),
            area,
        );

        let layout = LayoutManager::compute(area, state.show_hints);

        frame.render_widget(TitleText::new(theme), layout.title);

        frame.render_widget(
            NumberField::new(AMOUNT_LABEL, state.currency.symbol, &state.amount_input, theme)
                .focused(state.focus == FocusedField::Amount),
            layout.amount_field,
        );

        frame.render_widget(
            NumberField::new(TIP_PERCENT_LABEL, "%", &state.tip_input, theme)
                .focused(state.focus == FocusedField::TipPercent),
            layout.tip_field,
        );

        frame.render_widget(
            RoundUpSwitch::new(state.round_up, theme)
                .focused(state.focus == FocusedField::RoundUp),
            layout.round_up_row,
        );

        let tip = state.tip();
        frame.render_widget(TipResultText::new(&tip, theme), layout.result);

        if let Some(footer_area) = layout.footer {
            frame.render_widget(Footer::new(state, theme), footer_area);
        }

        if state.mode == AppMode::Help {
            frame.render_widget(HelpOverlay::new(theme), layout.overlay_area);
        }
    }
}
