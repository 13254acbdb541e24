use std::fmt;

use crate::model::DistributionKind;

/// Errors related to registry lookups
///
/// Both variants indicate a mismatch between the caller and the registry
/// (a programming or configuration defect), never bad user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is not one of the enumerated distributions
    UnknownDistribution(String),
    /// The distribution exists but declares no parameter with this name
    UnknownParameter {
        distribution: DistributionKind,
        parameter: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownDistribution(name) => {
                write!(f, "distribution {name:?} is not coded for")
            }
            RegistryError::UnknownParameter {
                distribution,
                parameter,
            } => write!(
                f,
                "distribution {distribution} has no parameter {parameter:?}"
            ),
        }
    }
}

impl std::error::Error for RegistryError {}
