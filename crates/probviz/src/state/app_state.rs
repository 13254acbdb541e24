use probviz_core::{
    DistributionKind, ParamSpec, ParameterSession, RegistryError, RenderOutput, render_kind,
};

use crate::data::keybindings_data::KeybindingsConfig;

use super::Focus;

/// Slider increments applied by the "large" adjustment bindings
pub const LARGE_STEP: i32 = 10;

/// Per-session UI state.
///
/// Holds the selection and slider values between renders. The chart itself is
/// never stored: every draw calls `render` again from scratch.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: ParameterSession,
    pub focus: Focus,
    /// Index into the selected distribution's sliders
    pub selected_slider: usize,
    pub keybindings: KeybindingsConfig,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DistributionKind::Normal, KeybindingsConfig::default())
    }
}

impl AppState {
    pub fn new(initial: DistributionKind, keybindings: KeybindingsConfig) -> Self {
        Self {
            session: ParameterSession::new(initial),
            focus: Focus::default(),
            selected_slider: 0,
            keybindings,
            error_message: None,
            exit: false,
        }
    }

    pub fn selected(&self) -> DistributionKind {
        self.session.kind()
    }

    /// Switch distribution. All sliders reset to the new defaults.
    pub fn select_distribution(&mut self, kind: DistributionKind) {
        if self.session.select(kind) {
            self.selected_slider = 0;
            tracing::info!(distribution = %kind, "Distribution selected");
        }
    }

    pub fn cycle_distribution(&mut self, forward: bool) {
        let current = self.selected();
        let next = if forward {
            current.next()
        } else {
            current.prev()
        };
        self.select_distribution(next);
    }

    pub fn slider_count(&self) -> usize {
        self.selected().spec().params.len()
    }

    /// Parameter under the slider cursor, if the slider panel has focus
    pub fn focused_param(&self) -> Option<&'static ParamSpec> {
        if self.focus != Focus::Sliders {
            return None;
        }
        self.selected().spec().params.get(self.selected_slider)
    }

    /// Move the slider cursor by `delta`, wrapping around
    pub fn move_slider_selection(&mut self, delta: isize) {
        let count = self.slider_count();
        if count == 0 {
            return;
        }
        let current = self.selected_slider.min(count - 1) as isize;
        self.selected_slider = (current + delta).rem_euclid(count as isize) as usize;
    }

    /// Adjust the focused slider by `steps` increments
    pub fn nudge_focused(&mut self, steps: i32) {
        let Some(param) = self.focused_param() else {
            return;
        };

        match self.session.nudge(param.name, steps) {
            Ok(value) => {
                tracing::debug!(param = param.name, value, "Slider moved");
                if value == param.low || value == param.high {
                    tracing::debug!(param = param.name, value, "Slider at bound");
                }
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Put every slider back to its registry default
    pub fn reset_parameters(&mut self) {
        self.session.reset();
        tracing::debug!(distribution = %self.selected(), "Sliders reset");
    }

    /// Evaluate the current selection for drawing
    pub fn render(&self) -> Result<RenderOutput, RegistryError> {
        render_kind(self.session.kind(), self.session.values())
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!(error = %message, "Error shown in status bar");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_resets_slider_cursor() {
        let mut state = AppState::default();
        state.focus = Focus::Sliders;
        state.selected_slider = 1;

        state.select_distribution(DistributionKind::Poisson);

        assert_eq!(state.selected(), DistributionKind::Poisson);
        assert_eq!(state.selected_slider, 0);
        assert_eq!(state.session.get("lambda"), Ok(5.0));
    }

    #[test]
    fn test_switch_discards_previous_values() {
        let mut state = AppState::default();
        state.focus = Focus::Sliders;
        state.nudge_focused(LARGE_STEP);
        assert_ne!(state.session.get("sigma"), Ok(1.0));

        state.select_distribution(DistributionKind::Poisson);
        state.select_distribution(DistributionKind::Normal);

        assert_eq!(state.session.get("sigma"), Ok(1.0));
    }

    #[test]
    fn test_cycle_distribution_wraps() {
        let mut state = AppState::default();
        state.cycle_distribution(false);
        assert_eq!(state.selected(), DistributionKind::Bernoulli);
        state.cycle_distribution(true);
        assert_eq!(state.selected(), DistributionKind::Normal);
    }

    #[test]
    fn test_move_slider_selection_wraps() {
        let mut state = AppState::default();
        state.move_slider_selection(1);
        assert_eq!(state.selected_slider, 1);
        state.move_slider_selection(1);
        assert_eq!(state.selected_slider, 0);
        state.move_slider_selection(-1);
        assert_eq!(state.selected_slider, 1);
    }

    #[test]
    fn test_nudge_requires_slider_focus() {
        let mut state = AppState::new(DistributionKind::Poisson, KeybindingsConfig::default());
        state.nudge_focused(1);
        assert_eq!(state.session.get("lambda"), Ok(5.0));

        state.focus = Focus::Sliders;
        state.nudge_focused(1);
        assert_eq!(state.session.get("lambda"), Ok(6.0));
    }

    #[test]
    fn test_nudge_stops_at_bounds() {
        let mut state = AppState::new(DistributionKind::Bernoulli, KeybindingsConfig::default());
        state.focus = Focus::Sliders;
        for _ in 0..20 {
            state.nudge_focused(LARGE_STEP);
        }
        assert_eq!(state.session.get("p"), Ok(1.0));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_reset_parameters() {
        let mut state = AppState::new(DistributionKind::Poisson, KeybindingsConfig::default());
        state.focus = Focus::Sliders;
        state.nudge_focused(-3);
        state.reset_parameters();
        assert_eq!(state.session.get("lambda"), Ok(5.0));
    }

    #[test]
    fn test_render_tracks_session() {
        let mut state = AppState::new(DistributionKind::Bernoulli, KeybindingsConfig::default());
        state.focus = Focus::Sliders;
        state.nudge_focused(LARGE_STEP * 5);

        let output = state.render().unwrap();
        assert_eq!(output.curve.points(), &[(0.0, 0.0), (1.0, 1.0)]);
    }
}
