//! The closed set of supported distributions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::model::DistributionSpec;
use crate::registry;

/// Distributions the registry knows about.
///
/// The set is closed: every `match` on this enum is exhaustive, so adding a
/// variant forces a registry entry, an evaluator and a chart kind for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionKind {
    Normal,
    Poisson,
    Bernoulli,
}

impl DistributionKind {
    /// Display order of the selection control
    pub const ALL: [DistributionKind; 3] = [
        DistributionKind::Normal,
        DistributionKind::Poisson,
        DistributionKind::Bernoulli,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Normal => "Normal",
            DistributionKind::Poisson => "Poisson",
            DistributionKind::Bernoulli => "Bernoulli",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DistributionKind::Normal => 0,
            DistributionKind::Poisson => 1,
            DistributionKind::Bernoulli => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next distribution in display order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous distribution in display order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Registry entry for this distribution
    pub fn spec(self) -> &'static DistributionSpec {
        registry::spec(self)
    }

    /// How the curve is presented. Presentation policy only.
    pub fn chart_kind(self) -> ChartKind {
        match self {
            DistributionKind::Normal => ChartKind::Line,
            DistributionKind::Poisson => ChartKind::Scatter,
            DistributionKind::Bernoulli => ChartKind::Bar,
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = RegistryError;

    /// Parse a selection name. Matching is exact: `"normal"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RegistryError::UnknownDistribution(s.to_string()))
    }
}

/// Chart widget used to draw a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Scatter,
    Bar,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Bar => "bar",
        }
    }
}
