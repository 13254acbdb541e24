//! Focusable panels of the explorer screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Selector,
    Sliders,
}

impl Focus {
    pub const ALL: [Focus; 2] = [Focus::Selector, Focus::Sliders];

    pub fn name(&self) -> &'static str {
        match self {
            Focus::Selector => "Distribution",
            Focus::Sliders => "Parameters",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Focus::Selector => 0,
            Focus::Sliders => 1,
        }
    }

    /// Get the next panel in the cycle.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous panel in the cycle.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
