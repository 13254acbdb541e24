//! Top-level layout and key dispatch shared by the native and web front ends.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult, status_bar::StatusBar};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::screens::{Screen, explorer::ExplorerScreen};
use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR};

pub const APP_TITLE: &str = "Probability Distributions";
const APP_DESCRIPTION: &str =
    "Pick a distribution and adjust its parameters to see how the density changes.";

pub struct Ui {
    explorer: ExplorerScreen,
    status_bar: StatusBar,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            explorer: ExplorerScreen::new(),
            status_bar: StatusBar,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, state: &AppState) {
        let [header_area, screen_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);
        self.explorer.render(frame, screen_area, state);
        self.status_bar.render(frame, status_area, state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", APP_TITLE, self.explorer.title()),
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                APP_DESCRIPTION,
                Style::default().fg(HELP_COLOR),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Route a key through global bindings, then the active screen.
    ///
    /// Returns `EventResult::Exit` when a quit binding was pressed; the caller
    /// decides what exiting means on its platform.
    pub fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let global = &state.keybindings.global;
        if KeybindingsConfig::matches(&key, &global.quit) {
            return EventResult::Exit;
        }
        if KeybindingsConfig::matches(&key, &global.cancel) {
            state.clear_error();
            return EventResult::Handled;
        }

        self.explorer.handle_key(key, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::state::Focus;
    use probviz_core::DistributionKind;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_quit_bindings() {
        let mut ui = Ui::new();
        let mut state = AppState::default();

        let q = AppKeyEvent::plain(KeyCode::Char('q'));
        assert_eq!(ui.handle_key(q, &mut state), EventResult::Exit);

        let mut ctrl_c = AppKeyEvent::plain(KeyCode::Char('c'));
        ctrl_c.ctrl = true;
        assert_eq!(ui.handle_key(ctrl_c, &mut state), EventResult::Exit);
    }

    #[test]
    fn test_esc_clears_error() {
        let mut ui = Ui::new();
        let mut state = AppState::default();
        state.set_error("boom".to_string());

        ui.handle_key(AppKeyEvent::plain(KeyCode::Esc), &mut state);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_full_interaction() {
        let mut ui = Ui::new();
        let mut state = AppState::default();

        for code in [KeyCode::Char('2'), KeyCode::Tab, KeyCode::Char('l')] {
            ui.handle_key(AppKeyEvent::plain(code), &mut state);
        }

        assert_eq!(state.selected(), DistributionKind::Poisson);
        assert_eq!(state.focus, Focus::Sliders);
        assert_eq!(state.session.get("lambda"), Ok(6.0));
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_title_and_sliders() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut ui = Ui::new();
        let state = AppState::default();

        terminal.draw(|frame| ui.draw(frame, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("Standard Deviation"));
        assert!(text.contains("Mean"));
        assert!(text.contains("Probability Density"));
    }

    #[test]
    fn test_draw_each_distribution() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut ui = Ui::new();

        for kind in DistributionKind::ALL {
            let state = AppState::new(kind, KeybindingsConfig::default());
            terminal.draw(|frame| ui.draw(frame, &state)).unwrap();
            let text = buffer_text(&terminal);
            for slider in state.session.sliders() {
                assert!(text.contains(slider.label()));
            }
        }
    }
}
