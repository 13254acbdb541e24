mod curve;
mod distribution;
mod spec;
mod values;

pub use curve::Curve;
pub use distribution::{ChartKind, DistributionKind};
pub use spec::{DistributionSpec, DomainSetting, ParamSpec};
pub use values::ParameterValues;
