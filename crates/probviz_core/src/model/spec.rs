//! Registry entry types
//!
//! These are plain constant data: the registry builds them at compile time and
//! only hands out shared references.

use serde::Serialize;

use crate::error::RegistryError;
use crate::model::{DistributionKind, ParameterValues};

/// Sample grid over which a curve is plotted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainSetting {
    pub low: f64,
    pub high: f64,
    /// Number of grid points, endpoints included. Always >= 2.
    pub steps: usize,
}

impl DomainSetting {
    /// Distance between neighbouring grid points
    pub fn spacing(&self) -> f64 {
        (self.high - self.low) / (self.steps - 1) as f64
    }

    /// The i-th grid point. `x_at(0) == low` and `x_at(steps - 1) == high`.
    pub fn x_at(&self, i: usize) -> f64 {
        if i + 1 == self.steps {
            // Avoid accumulated rounding on the closing endpoint
            return self.high;
        }
        self.low + i as f64 * self.spacing()
    }

    /// Evenly spaced grid from `low` to `high` inclusive
    pub fn grid(&self) -> Vec<f64> {
        (0..self.steps).map(|i| self.x_at(i)).collect()
    }
}

/// Slider configuration for one distribution parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Key used in `ParameterValues`
    pub name: &'static str,
    pub low: f64,
    pub high: f64,
    /// Initial slider value; `low <= default <= high`
    pub default: f64,
    /// Slider increment
    pub step: f64,
    /// Slider label
    pub text: &'static str,
}

impl ParamSpec {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Value to bind to the slider given the current UI value.
    ///
    /// First render (no value) and non-finite values resolve to the default;
    /// anything else is clamped into `[low, high]`.
    pub fn resolve(&self, current: Option<f64>) -> f64 {
        match current {
            Some(value) if value.is_finite() => self.clamp(value),
            _ => self.default,
        }
    }

    /// Round to the nearest multiple of `step` above `low`, then clamp.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.low) / self.step).round();
        let scale = 10f64.powi(self.decimals() as i32);
        let snapped = ((self.low + steps * self.step) * scale).round() / scale;
        self.clamp(snapped)
    }

    /// Decimal places needed to display values on the step grid
    pub fn decimals(&self) -> usize {
        if self.step >= 1.0 {
            0
        } else {
            (-self.step.log10()).round().max(0.0) as usize
        }
    }

    /// Position of `value` within the slider range, in `[0, 1]`
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.high - self.low;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.low) / span).clamp(0.0, 1.0)
    }
}

/// Registry entry for one distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionSpec {
    pub kind: DistributionKind,
    pub domain: DomainSetting,
    /// Exactly the free variables of the distribution's formula, in slider order
    pub params: &'static [ParamSpec],
}

impl DistributionSpec {
    pub fn param(&self, name: &str) -> Result<&'static ParamSpec, RegistryError> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| RegistryError::UnknownParameter {
                distribution: self.kind,
                parameter: name.to_string(),
            })
    }

    pub fn param_names(&self) -> impl Iterator<Item = &'static str> {
        self.params.iter().map(|p| p.name)
    }

    /// Parameter values a fresh session starts from
    pub fn defaults(&self) -> ParameterValues {
        self.params.iter().map(|p| (p.name, p.default)).collect()
    }
}
