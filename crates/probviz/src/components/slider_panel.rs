use probviz_core::SliderSpec;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
};

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, Focus, LARGE_STEP};
use crate::util::format::format_param_value;
use crate::util::styles::{HELP_COLOR, VALUE_COLOR, focused_block_with_help, selected_style};

/// Rows used by a single slider: label line plus gauge line
const SLIDER_HEIGHT: u16 = 2;

/// Keyboard-driven sliders for the selected distribution's parameters
pub struct SliderPanel;

impl SliderPanel {
    fn render_slider(frame: &mut Frame, area: Rect, slider: &SliderSpec, selected: bool) {
        let [label_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let decimals = slider.param.decimals();
        let marker = if selected { "> " } else { "  " };
        let label = Line::from(vec![
            Span::styled(marker, selected_style(selected)),
            Span::styled(slider.label(), selected_style(selected)),
            Span::raw(": "),
            Span::styled(
                format_param_value(slider.value, decimals),
                Style::default().fg(VALUE_COLOR),
            ),
            Span::styled(
                format!(
                    "  [{} .. {}]",
                    format_param_value(slider.low(), decimals),
                    format_param_value(slider.high(), decimals)
                ),
                Style::default().fg(HELP_COLOR),
            ),
        ]);
        frame.render_widget(Paragraph::new(label), label_area);

        let gauge = LineGauge::default()
            .ratio(slider.ratio())
            .label("")
            .line_set(symbols::line::THICK)
            .filled_style(Style::default().fg(VALUE_COLOR))
            .unfilled_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(gauge, gauge_area);
    }
}

impl Component for SliderPanel {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if state.focus != Focus::Sliders {
            return EventResult::NotHandled;
        }

        let nav = &state.keybindings.navigation;
        let sliders = &state.keybindings.sliders;

        // Large steps first: "shift+l" must not fall through to "l"
        let steps = if KeybindingsConfig::matches(&key, &sliders.increase_large) {
            LARGE_STEP
        } else if KeybindingsConfig::matches(&key, &sliders.decrease_large) {
            -LARGE_STEP
        } else if KeybindingsConfig::matches(&key, &nav.right) {
            1
        } else if KeybindingsConfig::matches(&key, &nav.left) {
            -1
        } else if KeybindingsConfig::matches(&key, &nav.down) {
            state.move_slider_selection(1);
            return EventResult::Handled;
        } else if KeybindingsConfig::matches(&key, &nav.up) {
            state.move_slider_selection(-1);
            return EventResult::Handled;
        } else {
            return EventResult::NotHandled;
        };

        state.nudge_focused(steps);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Sliders;
        let block = focused_block_with_help(
            "Parameters",
            focused,
            "j/k: select | h/l: adjust | H/L: x10 | r: reset",
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let sliders = state.session.sliders();
        let constraints = sliders
            .iter()
            .map(|_| Constraint::Length(SLIDER_HEIGHT))
            .chain(std::iter::once(Constraint::Min(0)));
        let rows = Layout::vertical(constraints).spacing(1).split(inner);

        for (idx, slider) in sliders.iter().enumerate() {
            let selected = focused && idx == state.selected_slider;
            Self::render_slider(frame, rows[idx], slider, selected);
        }
    }
}
