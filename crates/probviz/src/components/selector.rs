use probviz_core::DistributionKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Tabs,
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::state::{AppState, Focus};
use crate::util::styles::{focused_block_with_help, selected_style};

/// Distribution picker shown as a row of tabs
pub struct DistributionSelector;

impl DistributionSelector {
    /// Digit bindings work regardless of focus
    fn direct_selection(key: &AppKeyEvent, state: &AppState) -> Option<DistributionKind> {
        let global = &state.keybindings.global;
        if KeybindingsConfig::matches(key, &global.normal) {
            Some(DistributionKind::Normal)
        } else if KeybindingsConfig::matches(key, &global.poisson) {
            Some(DistributionKind::Poisson)
        } else if KeybindingsConfig::matches(key, &global.bernoulli) {
            Some(DistributionKind::Bernoulli)
        } else {
            None
        }
    }
}

impl Component for DistributionSelector {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if let Some(kind) = Self::direct_selection(&key, state) {
            state.select_distribution(kind);
            return EventResult::Handled;
        }

        if state.focus != Focus::Selector {
            return EventResult::NotHandled;
        }

        let nav = &state.keybindings.navigation;
        if KeybindingsConfig::matches(&key, &nav.right) || KeybindingsConfig::matches(&key, &nav.down)
        {
            state.cycle_distribution(true);
            EventResult::Handled
        } else if KeybindingsConfig::matches(&key, &nav.left)
            || KeybindingsConfig::matches(&key, &nav.up)
        {
            state.cycle_distribution(false);
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Selector;

        let titles: Vec<Line> = DistributionKind::ALL
            .iter()
            .enumerate()
            .map(|(idx, kind)| {
                let content = format!("[{}] {}", idx + 1, kind.name());
                Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(focused_block_with_help(
                "Distribution",
                focused,
                "h/l: change",
            ))
            .select(state.selected().index())
            .highlight_style(selected_style(true));

        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    #[test]
    fn test_digit_selects_from_any_focus() {
        let mut state = AppState::default();
        state.focus = Focus::Sliders;

        let result =
            DistributionSelector.handle_key(AppKeyEvent::plain(KeyCode::Char('3')), &mut state);

        assert_eq!(result, EventResult::Handled);
        assert_eq!(state.selected(), DistributionKind::Bernoulli);
        assert_eq!(state.session.get("p"), Ok(0.5));
    }

    #[test]
    fn test_arrows_cycle_only_when_focused() {
        let mut state = AppState::default();
        state.focus = Focus::Sliders;
        let result =
            DistributionSelector.handle_key(AppKeyEvent::plain(KeyCode::Char('l')), &mut state);
        assert_eq!(result, EventResult::NotHandled);
        assert_eq!(state.selected(), DistributionKind::Normal);

        state.focus = Focus::Selector;
        DistributionSelector.handle_key(AppKeyEvent::plain(KeyCode::Char('l')), &mut state);
        assert_eq!(state.selected(), DistributionKind::Poisson);
    }
}
