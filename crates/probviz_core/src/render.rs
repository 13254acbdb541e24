//! Render entry point
//!
//! A UI adapter calls `render` on every state change with the selection and
//! the current slider values, and draws whatever comes back. Nothing is
//! cached between calls.

use serde::Serialize;

use crate::binding::{SliderSpec, slider_specs};
use crate::error::RegistryError;
use crate::evaluate::evaluate;
use crate::model::{ChartKind, Curve, DistributionKind, ParameterValues};

/// x-axis title of every chart
pub const X_LABEL: &str = "x";
/// y-axis title of every chart
pub const Y_LABEL: &str = "Probability Density";

/// Result of one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    pub kind: DistributionKind,
    /// Sliders to display, seeded with resolved values
    pub sliders: Vec<SliderSpec>,
    pub curve: Curve,
    pub chart: ChartKind,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

/// Render the distribution named `selection`.
///
/// An unknown name fails with `UnknownDistribution` instead of producing a chart.
pub fn render(selection: &str, values: &ParameterValues) -> Result<RenderOutput, RegistryError> {
    let kind: DistributionKind = selection.parse()?;
    render_kind(kind, values)
}

/// Render an already-parsed selection
pub fn render_kind(
    kind: DistributionKind,
    values: &ParameterValues,
) -> Result<RenderOutput, RegistryError> {
    Ok(RenderOutput {
        kind,
        sliders: slider_specs(kind, values),
        curve: evaluate(kind, values)?,
        chart: kind.chart_kind(),
        x_label: X_LABEL,
        y_label: Y_LABEL,
    })
}
