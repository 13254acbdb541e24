use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use probviz_core::DistributionKind;
use ratatui::{DefaultTerminal, Frame};

use crate::components::EventResult;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::ui::Ui;

/// Terminal front end
pub struct App {
    state: AppState,
    ui: Ui,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DistributionKind::Normal, KeybindingsConfig::default())
    }
}

impl App {
    pub fn new(initial: DistributionKind, keybindings: KeybindingsConfig) -> Self {
        Self {
            state: AppState::new(initial, keybindings),
            ui: Ui::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(distribution = %self.state.selected(), "Starting explorer");

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.ui.draw(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Only presses; Windows also reports releases
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event.into());
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: AppKeyEvent) {
        if self.ui.handle_key(key, &mut self.state) == EventResult::Exit {
            tracing::info!("Exit requested");
            self.state.exit = true;
        }
    }
}
