use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
};

use super::Screen;
use crate::components::{
    Component, EventResult, chart::render_curve_chart, selector::DistributionSelector,
    slider_panel::SliderPanel,
};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{ERROR_COLOR, focused_block};

/// Width of the parameter column
const SLIDER_PANEL_WIDTH: u16 = 40;

/// Selector on top, sliders on the left and the density chart filling the rest
pub struct ExplorerScreen {
    selector: DistributionSelector,
    sliders: SliderPanel,
}

impl Default for ExplorerScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerScreen {
    pub fn new() -> Self {
        Self {
            selector: DistributionSelector,
            sliders: SliderPanel,
        }
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = format!("{} density", state.selected().name());
        let block = focused_block(&title, false);

        match state.render() {
            Ok(output) => render_curve_chart(frame, area, &output, block),
            Err(e) => {
                let paragraph = Paragraph::new(e.to_string())
                    .style(Style::default().fg(ERROR_COLOR))
                    .wrap(Wrap { trim: true })
                    .block(block);
                frame.render_widget(paragraph, area);
            }
        }
    }
}

impl Component for ExplorerScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let nav = &state.keybindings.navigation;
        if KeybindingsConfig::matches(&key, &nav.next_panel) {
            state.focus = state.focus.next();
            return EventResult::Handled;
        }
        if KeybindingsConfig::matches(&key, &nav.prev_panel) {
            state.focus = state.focus.prev();
            return EventResult::Handled;
        }
        if KeybindingsConfig::matches(&key, &state.keybindings.sliders.reset) {
            state.reset_parameters();
            return EventResult::Handled;
        }

        match self.selector.handle_key(key.clone(), state) {
            EventResult::NotHandled => self.sliders.handle_key(key, state),
            result => result,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [selector_area, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        let [slider_area, chart_area] = Layout::horizontal([
            Constraint::Length(SLIDER_PANEL_WIDTH),
            Constraint::Min(0),
        ])
        .areas(body);

        self.selector.render(frame, selector_area, state);
        self.sliders.render(frame, slider_area, state);
        self.render_chart(frame, chart_area, state);
    }
}

impl Screen for ExplorerScreen {
    fn title(&self) -> &str {
        "Explorer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::state::Focus;
    use probviz_core::DistributionKind;

    #[test]
    fn test_tab_cycles_focus() {
        let mut screen = ExplorerScreen::new();
        let mut state = AppState::default();

        screen.handle_key(AppKeyEvent::plain(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, Focus::Sliders);

        screen.handle_key(AppKeyEvent::plain(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, Focus::Selector);
    }

    #[test]
    fn test_reset_works_from_any_panel() {
        let mut screen = ExplorerScreen::new();
        let mut state = AppState::new(DistributionKind::Poisson, KeybindingsConfig::default());
        state.focus = Focus::Sliders;
        screen.handle_key(AppKeyEvent::plain(KeyCode::Char('l')), &mut state);
        assert_eq!(state.session.get("lambda"), Ok(6.0));

        state.focus = Focus::Selector;
        screen.handle_key(AppKeyEvent::plain(KeyCode::Char('r')), &mut state);
        assert_eq!(state.session.get("lambda"), Ok(5.0));
    }

    #[test]
    fn test_keys_route_to_focused_panel() {
        let mut screen = ExplorerScreen::new();
        let mut state = AppState::default();

        // Selector focused: "l" changes the distribution
        screen.handle_key(AppKeyEvent::plain(KeyCode::Char('l')), &mut state);
        assert_eq!(state.selected(), DistributionKind::Poisson);

        // Sliders focused: "l" moves lambda
        state.focus = Focus::Sliders;
        screen.handle_key(AppKeyEvent::plain(KeyCode::Char('l')), &mut state);
        assert_eq!(state.selected(), DistributionKind::Poisson);
        assert_eq!(state.session.get("lambda"), Ok(6.0));
    }
}
