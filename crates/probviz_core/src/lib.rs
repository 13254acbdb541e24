//! Probability distribution visualization core
//!
//! This crate holds everything a UI needs to plot a parametric distribution,
//! without depending on any UI toolkit:
//! - A constant registry of distributions, their sampling domains and the
//!   slider bounds/defaults of every parameter
//! - Slider binding: resolving and clamping parameter values against the registry
//! - Per-distribution evaluators that turn parameters into an (x, y) curve
//! - A single `render` entry point returning slider specs and the curve to plot
//!
//! # Example
//!
//! ```ignore
//! use probviz_core::{ParameterValues, render};
//!
//! let mut values = ParameterValues::new();
//! values.insert("lambda", 5.0);
//!
//! let output = render("Poisson", &values)?;
//! assert_eq!(output.curve.len(), 21);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod binding;
pub mod error;
pub mod evaluate;
pub mod registry;
pub mod render;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use binding::{ParameterSession, SliderSpec, resolve_parameter_value};
pub use error::RegistryError;
pub use evaluate::{Density, evaluate};
pub use model::{
    ChartKind, Curve, DistributionKind, DistributionSpec, DomainSetting, ParamSpec,
    ParameterValues,
};
pub use registry::{domain_setting, lookup, param_spec};
pub use render::{RenderOutput, X_LABEL, Y_LABEL, render, render_kind};
