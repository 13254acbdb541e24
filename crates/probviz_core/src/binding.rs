//! Slider/parameter binding
//!
//! Resolves current UI values against the registry and owns the per-session
//! parameter state. Values are reset to the new distribution's defaults
//! whenever the selection changes; nothing carries over between distributions.

use serde::Serialize;

use crate::error::RegistryError;
use crate::model::{DistributionKind, DistributionSpec, ParamSpec, ParameterValues};
use crate::registry;

/// Resolve the value a slider should show.
///
/// Returns the registry default when there is no prior UI value, otherwise
/// the current value clamped to the parameter bounds.
pub fn resolve_parameter_value(
    name: &str,
    param: &str,
    current: Option<f64>,
) -> Result<f64, RegistryError> {
    Ok(registry::param_spec(name, param)?.resolve(current))
}

pub(crate) fn resolve(
    spec: &DistributionSpec,
    param: &str,
    values: &ParameterValues,
) -> Result<f64, RegistryError> {
    Ok(spec.param(param)?.resolve(values.get(param)))
}

/// Everything a UI needs to draw one slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSpec {
    pub param: &'static ParamSpec,
    /// Resolved value the slider is seeded with
    pub value: f64,
}

impl SliderSpec {
    pub fn name(&self) -> &'static str {
        self.param.name
    }

    pub fn label(&self) -> &'static str {
        self.param.text
    }

    pub fn low(&self) -> f64 {
        self.param.low
    }

    pub fn high(&self) -> f64 {
        self.param.high
    }

    pub fn step(&self) -> f64 {
        self.param.step
    }

    /// Slider position in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        self.param.ratio(self.value)
    }
}

/// One slider per registry parameter of `kind`, in registry order
pub fn slider_specs(kind: DistributionKind, values: &ParameterValues) -> Vec<SliderSpec> {
    kind.spec()
        .params
        .iter()
        .map(|param| SliderSpec {
            param,
            value: param.resolve(values.get(param.name)),
        })
        .collect()
}

/// Selected distribution plus its current slider values.
///
/// The values only ever hold the parameters of the selected distribution,
/// and every stored value lies within its slider bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSession {
    kind: DistributionKind,
    values: ParameterValues,
}

impl Default for ParameterSession {
    fn default() -> Self {
        Self::new(DistributionKind::Normal)
    }
}

impl ParameterSession {
    /// Start a session on `kind` with every slider at its default
    pub fn new(kind: DistributionKind) -> Self {
        Self {
            kind,
            values: kind.spec().defaults(),
        }
    }

    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    pub fn values(&self) -> &ParameterValues {
        &self.values
    }

    /// Change the selected distribution.
    ///
    /// Switching discards all current values and reseeds from the new
    /// distribution's defaults. Re-selecting the current distribution keeps
    /// them. Returns whether the selection changed.
    pub fn select(&mut self, kind: DistributionKind) -> bool {
        if kind == self.kind {
            return false;
        }
        *self = Self::new(kind);
        true
    }

    /// Current value of a parameter of the selected distribution
    pub fn get(&self, param: &str) -> Result<f64, RegistryError> {
        resolve(self.kind.spec(), param, &self.values)
    }

    /// Set a parameter, clamping into its bounds. Returns the stored value.
    pub fn set(&mut self, param: &str, value: f64) -> Result<f64, RegistryError> {
        let spec = self.kind.spec().param(param)?;
        let resolved = spec.resolve(Some(value));
        self.values.insert(spec.name, resolved);
        Ok(resolved)
    }

    /// Move a parameter by `steps` slider increments (negative moves down).
    ///
    /// The result is snapped to the step grid and clamped. Returns the stored value.
    pub fn nudge(&mut self, param: &str, steps: i32) -> Result<f64, RegistryError> {
        let spec = self.kind.spec().param(param)?;
        let current = spec.resolve(self.values.get(spec.name));
        let moved = spec.snap(current + f64::from(steps) * spec.step);
        self.values.insert(spec.name, moved);
        Ok(moved)
    }

    /// Put every slider of the selected distribution back to its default
    pub fn reset(&mut self) {
        self.values = self.kind.spec().defaults();
    }

    /// Slider specs for the selected distribution
    pub fn sliders(&self) -> Vec<SliderSpec> {
        slider_specs(self.kind, &self.values)
    }
}
