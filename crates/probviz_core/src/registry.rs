//! Distribution registry
//!
//! A constant table mapping every `DistributionKind` to its sampling domain and
//! the slider configuration of each formula parameter. Slider construction is
//! a single generic routine over this data (see `binding`), so no code path
//! branches on the distribution just to set up its controls.
//!
//! Integer-valued slider bounds (Poisson `lambda`) use a step of 1; float
//! bounds use 0.01.

use crate::error::RegistryError;
use crate::model::{DistributionKind, DistributionSpec, DomainSetting, ParamSpec};

pub static NORMAL: DistributionSpec = DistributionSpec {
    kind: DistributionKind::Normal,
    domain: DomainSetting {
        low: -10.0,
        high: 10.0,
        steps: 1000,
    },
    params: &[
        ParamSpec {
            name: "sigma",
            // Strictly positive so the density is always defined
            low: 0.1,
            high: 10.0,
            default: 1.0,
            step: 0.01,
            text: "Standard Deviation",
        },
        ParamSpec {
            name: "mu",
            low: -10.0,
            high: 10.0,
            default: 0.0,
            step: 0.01,
            text: "Mean",
        },
    ],
};

pub static POISSON: DistributionSpec = DistributionSpec {
    kind: DistributionKind::Poisson,
    // steps = high - low + 1 so grid points land on the integers
    domain: DomainSetting {
        low: 0.0,
        high: 20.0,
        steps: 21,
    },
    params: &[ParamSpec {
        name: "lambda",
        low: 1.0,
        high: 10.0,
        default: 5.0,
        step: 1.0,
        text: "Lambda",
    }],
};

pub static BERNOULLI: DistributionSpec = DistributionSpec {
    kind: DistributionKind::Bernoulli,
    domain: DomainSetting {
        low: 0.0,
        high: 1.0,
        steps: 2,
    },
    params: &[ParamSpec {
        name: "p",
        low: 0.0,
        high: 1.0,
        default: 0.5,
        step: 0.01,
        text: "Probability",
    }],
};

/// Registry entry for a known distribution
pub fn spec(kind: DistributionKind) -> &'static DistributionSpec {
    match kind {
        DistributionKind::Normal => &NORMAL,
        DistributionKind::Poisson => &POISSON,
        DistributionKind::Bernoulli => &BERNOULLI,
    }
}

/// Look up a distribution by its display name
pub fn lookup(name: &str) -> Result<&'static DistributionSpec, RegistryError> {
    let kind: DistributionKind = name.parse()?;
    Ok(spec(kind))
}

/// Sampling domain of the named distribution
pub fn domain_setting(name: &str) -> Result<DomainSetting, RegistryError> {
    Ok(lookup(name)?.domain)
}

/// Slider configuration of one parameter of the named distribution
pub fn param_spec(name: &str, param: &str) -> Result<ParamSpec, RegistryError> {
    lookup(name)?.param(param).copied()
}

/// Every registry entry, in selection order
pub fn all() -> impl Iterator<Item = &'static DistributionSpec> {
    DistributionKind::ALL.into_iter().map(spec)
}
