use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, Focus};
use crate::util::styles::{ERROR_COLOR, HELP_COLOR};

pub struct StatusBar;

impl StatusBar {
    fn help_text(state: &AppState) -> &'static str {
        match state.focus {
            Focus::Selector => "1-3: distribution | h/l: change | Tab: sliders | q: quit",
            Focus::Sliders => {
                "1-3: distribution | j/k: select | h/l: adjust | H/L: x10 | r: reset | Tab: panel | q: quit"
            }
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.as_str()),
                Span::styled("  (Esc to dismiss)", Style::default().fg(HELP_COLOR)),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
