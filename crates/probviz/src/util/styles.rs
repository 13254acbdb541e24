//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Color of the plotted curve
pub const CURVE_COLOR: Color = Color::Cyan;

/// Color of slider values and the filled part of a gauge
pub const VALUE_COLOR: Color = Color::Green;

/// Color for error text
pub const ERROR_COLOR: Color = Color::Red;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a block with title and bottom help text that shows focused state.
///
/// The help text is only shown when the panel is focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Highlight style for the selected entry of a list-like widget
pub fn selected_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(FOCUS_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Sliders", true);
        assert!(format!("{:?}", block).contains("Sliders"));
    }

    #[test]
    fn test_help_only_when_focused() {
        let unfocused = format!("{:?}", focused_block_with_help("Chart", false, "h/l: adjust"));
        let focused = format!("{:?}", focused_block_with_help("Chart", true, "h/l: adjust"));
        assert!(!unfocused.contains("h/l: adjust"));
        assert!(focused.contains("h/l: adjust"));
    }

    #[test]
    fn test_selected_style() {
        assert_eq!(selected_style(true).fg, Some(FOCUS_COLOR));
        assert_eq!(selected_style(false).fg, None);
    }
}
