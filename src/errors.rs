//! Parameter, numeric and generation diagnostics

use crate::float_types::Real;
use std::fmt::Display;

/// Errors that stop a generation run before any geometry is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CamError {
    /// (InvalidParameter) A parameter is outside its valid range
    #[error("(InvalidParameter) `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
    /// (NumericDomain) The pressure-angle `asin` argument left [-1, 1]
    #[error("(NumericDomain) asin argument {argument} is outside [-1, 1] at roll angle {angle} rad")]
    NumericDomain { angle: Real, argument: Real },
}

/// Which pressure-angle bound a [`CamWarning::NoBoundFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Min => write!(f, "minimum"),
            Bound::Max => write!(f, "maximum"),
        }
    }
}

/// Recoverable conditions; generation proceeds with a documented fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum CamWarning {
    /// (NoBoundFound) The scan never crossed the limit, so no radial correction is applied
    NoBoundFound { which: Bound },
    /// (UnderSampled) Fewer than `10·n` samples risks a self-intersecting profile
    UnderSampled { samples: usize, recommended: usize },
    /// (DomainFault) The pressure angle could not be evaluated at this scan degree
    DomainFault { degree: u32 },
}

impl Display for CamWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CamWarning::NoBoundFound { which } => write!(
                f,
                "(NoBoundFound) No {which} pressure-angle bound found in the 0..=180 degree scan; profile left uncorrected"
            ),
            CamWarning::UnderSampled { samples, recommended } => write!(
                f,
                "(UnderSampled) {samples} samples is below the recommended {recommended}; the profile may self-intersect"
            ),
            CamWarning::DomainFault { degree } => write!(
                f,
                "(DomainFault) Pressure angle undefined at {degree} degrees; sample skipped"
            ),
        }
    }
}
