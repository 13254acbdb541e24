//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.probviz/keybindings.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work everywhere)
    pub global: GlobalBindings,
    /// Navigation keybindings (focus and selection movement)
    pub navigation: NavigationBindings,
    /// Slider adjustment keybindings
    pub sliders: SliderBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub cancel: Vec<String>,
    pub normal: Vec<String>,
    pub poisson: Vec<String>,
    pub bernoulli: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            cancel: vec!["esc".into()],
            normal: vec!["1".into()],
            poisson: vec!["2".into()],
            bernoulli: vec!["3".into()],
        }
    }
}

/// Navigation keybindings used by the selector and slider panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub next_panel: Vec<String>,
    pub prev_panel: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            left: vec!["h".into(), "left".into()],
            right: vec!["l".into(), "right".into()],
            next_panel: vec!["tab".into()],
            prev_panel: vec!["shift+tab".into()],
        }
    }
}

/// Keybindings for adjusting the focused slider.
///
/// Single-step changes use the navigation `left`/`right` bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderBindings {
    pub increase_large: Vec<String>,
    pub decrease_large: Vec<String>,
    pub reset: Vec<String>,
}

impl Default for SliderBindings {
    fn default() -> Self {
        Self {
            increase_large: vec!["shift+l".into(), "shift+right".into()],
            decrease_large: vec!["shift+h".into(), "shift+left".into()],
            reset: vec!["r".into()],
        }
    }
}
