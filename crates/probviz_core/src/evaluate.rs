//! Curve evaluation
//!
//! Each distribution is a `Density` variant carrying its resolved parameters.
//! Evaluation builds the registry grid and applies the variant's formula to
//! every point.
//!
//! Poisson and Bernoulli are evaluated as continuous approximations so the
//! chart can draw them over a continuous grid:
//! - Poisson uses the gamma function in place of the factorial, so
//!   `lambda^x * e^-lambda / Γ(x + 1)` is defined for non-integer x and agrees
//!   with the PMF on integer grid points.
//! - Bernoulli linearly interpolates between `P(0) = 1 - p` and `P(1) = p`.

use std::f64::consts::PI;

use statrs::function::gamma::gamma;

use crate::binding::resolve;
use crate::error::RegistryError;
use crate::model::{Curve, DistributionKind, DistributionSpec, ParameterValues};

/// A distribution with concrete parameter values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    Normal { mu: f64, sigma: f64 },
    Poisson { lambda: f64 },
    Bernoulli { p: f64 },
}

impl Density {
    /// Resolve parameters for `kind` from the current UI values.
    ///
    /// Missing values take the registry default, out-of-range values are clamped.
    pub fn from_values(
        kind: DistributionKind,
        values: &ParameterValues,
    ) -> Result<Self, RegistryError> {
        let spec = kind.spec();
        Ok(match kind {
            DistributionKind::Normal => Density::Normal {
                mu: resolve(spec, "mu", values)?,
                sigma: resolve(spec, "sigma", values)?,
            },
            DistributionKind::Poisson => Density::Poisson {
                lambda: resolve(spec, "lambda", values)?,
            },
            DistributionKind::Bernoulli => Density::Bernoulli {
                p: resolve(spec, "p", values)?,
            },
        })
    }

    pub fn kind(&self) -> DistributionKind {
        match self {
            Density::Normal { .. } => DistributionKind::Normal,
            Density::Poisson { .. } => DistributionKind::Poisson,
            Density::Bernoulli { .. } => DistributionKind::Bernoulli,
        }
    }

    /// Density (or approximated mass) at `x`
    pub fn at(&self, x: f64) -> f64 {
        match *self {
            Density::Normal { mu, sigma } => normal_pdf(x, mu, sigma),
            Density::Poisson { lambda } => poisson_continuous(x, lambda),
            Density::Bernoulli { p } => bernoulli_interpolated(x, p),
        }
    }

    /// Evaluate over the registry grid of this distribution
    pub fn curve(&self) -> Curve {
        self.curve_over(self.kind().spec())
    }

    fn curve_over(&self, spec: &DistributionSpec) -> Curve {
        let points = spec
            .domain
            .grid()
            .into_iter()
            .map(|x| (x, self.at(x)))
            .collect();
        Curve::new(points)
    }
}

/// Evaluate `kind` with the given UI values into a fresh curve
pub fn evaluate(kind: DistributionKind, values: &ParameterValues) -> Result<Curve, RegistryError> {
    Ok(Density::from_values(kind, values)?.curve())
}

/// Normal density. Requires `sigma > 0`; the registry bounds guarantee it.
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    let exponent = -(x - mu).powi(2) / (2.0 * sigma * sigma);
    (1.0 / (sigma * (2.0 * PI).sqrt())) * exponent.exp()
}

/// Poisson mass generalized to real `x` through Γ(x + 1)
pub fn poisson_continuous(x: f64, lambda: f64) -> f64 {
    lambda.powf(x) * (-lambda).exp() / gamma(x + 1.0)
}

/// Straight line from `(0, 1 - p)` to `(1, p)`
pub fn bernoulli_interpolated(x: f64, p: f64) -> f64 {
    p * x + (1.0 - p) * (1.0 - x)
}
