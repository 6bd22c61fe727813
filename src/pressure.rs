//! **Pressure angle analysis**
//!
//! The pressure angle is the angle between the direction of force transmission
//! and the direction of motion at the pin contact. Beyond a configured limit the
//! drive transmits mostly radial load, so the usable part of the profile is
//! bounded by two "limit circles" centered on the cam.
//!
//! ## **Pressure angle**
//! ```text
//! ex = √2,  r3 = p·n,  rg = r3/ex
//! pp = rg·√(ex² + 1 − 2·ex·cos a) − d/2
//! φ(a) = asin( (r3·cos a − rg) / (pp + d/2) )
//! ```
//!
//! ## **Limit circle radius**
//! ```text
//! q = √(r3² + rg² − 2·r3·rg·cos a)
//! x = rg − e + (q − d/2)·(r3·cos a − rg)/q
//! y = (q − d/2)·r3·sin a / q
//! R(a) = √(x² + y²)
//! ```
//!
//! ## **Bound search**
//! Integer degrees `0..=180` are scanned once. The first degree whose angle drops
//! below `+ang` latches `pa_min`; the degree *before* the first one below `−ang`
//! latches `pa_max`. Later crossings are ignored.

use crate::errors::{Bound, CamError, CamWarning};
use crate::float_types::{PI, Real, SQRT_2, tolerance};
use crate::params::CamParameters;
use tracing::{debug, warn};

/// Last degree visited by the bound search.
pub const SCAN_LIMIT_DEG: u32 = 180;

/// Pressure angle in degrees at roll angle `a` (radians).
///
/// The `asin` argument is bounded by 1 analytically, but at `a = 0` rounding can
/// push it a few ulps past 1. Overshoot within [`tolerance`] is clamped back onto
/// `[-1, 1]`. Fails with [`CamError::NumericDomain`] when the argument is further
/// out or not a number, instead of returning `NaN`.
pub fn pressure_angle(p: Real, d: Real, n: Real, a: Real) -> Result<Real, CamError> {
    let ex = SQRT_2;
    let r3 = p * n;
    let rg = r3 / ex;
    let pp = rg * (ex * ex + 1.0 - 2.0 * ex * a.cos()).sqrt() - d / 2.0;
    let argument = (r3 * a.cos() - rg) / (pp + d / 2.0);
    if argument.is_nan() || argument.abs() > 1.0 + tolerance() {
        return Err(CamError::NumericDomain { angle: a, argument });
    }
    Ok(argument.clamp(-1.0, 1.0).asin() * 180.0 / PI)
}

/// Radius of the pressure-limit circle for roll angle `a` (radians).
pub fn pressure_limit_radius(p: Real, d: Real, e: Real, n: Real, a: Real) -> Real {
    let ex = SQRT_2;
    let r3 = p * n;
    let rg = r3 / ex;
    let q = (r3 * r3 + rg * rg - 2.0 * r3 * rg * a.cos()).sqrt();
    let x = rg - e + (q - d / 2.0) * (r3 * a.cos() - rg) / q;
    let y = (q - d / 2.0) * r3 * a.sin() / q;
    (x * x + y * y).sqrt()
}

/// Result of the pressure-angle bound search.
///
/// `None` is the explicit "no bound found" outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressureLimits {
    /// First scan degree where the pressure angle drops below the limit
    pub pa_min: Option<Real>,
    /// Degree before the pressure angle first drops below the negated limit
    pub pa_max: Option<Real>,
    /// Limit circle radius at `pa_min`
    pub pa_rad_min: Option<Real>,
    /// Limit circle radius at `pa_max`
    pub pa_rad_max: Option<Real>,
    /// Scan degrees skipped because the pressure angle was undefined there
    pub domain_faults: Vec<u32>,
}

impl PressureLimits {
    /// Scan `0..=180` degrees for the pressure-angle limit circles.
    ///
    /// Parameters are assumed valid; see [`compute_pressure_limits`] for the
    /// validating entry point.
    pub fn scan(params: &CamParameters) -> Self {
        let p = params.pitch();
        let d = params.pin_diameter;
        let e = params.eccentricity;
        let n = params.teeth as Real;
        let limit = params.pressure_angle_limit;

        let mut limits = PressureLimits::default();
        for i in 0..=SCAN_LIMIT_DEG {
            let angle = match pressure_angle(p, d, n, i as Real * PI / 180.0) {
                Ok(angle) => angle,
                Err(err) => {
                    debug!("skipping scan degree {i}: {err}");
                    limits.domain_faults.push(i);
                    continue;
                }
            };
            if angle < limit && limits.pa_min.is_none() {
                limits.pa_min = Some(i as Real);
            }
            if angle < -limit && limits.pa_max.is_none() {
                limits.pa_max = Some(i as Real - 1.0);
            }
        }

        limits.pa_rad_min = limits
            .pa_min
            .map(|deg| pressure_limit_radius(p, d, e, n, deg * PI / 180.0));
        limits.pa_rad_max = limits
            .pa_max
            .map(|deg| pressure_limit_radius(p, d, e, n, deg * PI / 180.0));

        debug!(
            pa_min = ?limits.pa_min,
            pa_max = ?limits.pa_max,
            pa_rad_min = ?limits.pa_rad_min,
            pa_rad_max = ?limits.pa_rad_max,
            "pressure angle limit circles"
        );
        limits
    }

    /// `(max_radius, min_radius)` when both bounds were found.
    pub fn radial_bounds(&self) -> Option<(Real, Real)> {
        Some((self.pa_rad_max?, self.pa_rad_min?))
    }

    /// Recoverable diagnostics produced by the scan.
    pub fn warnings(&self) -> Vec<CamWarning> {
        let mut warnings: Vec<CamWarning> = self
            .domain_faults
            .iter()
            .map(|&degree| CamWarning::DomainFault { degree })
            .collect();
        if self.pa_min.is_none() {
            warnings.push(CamWarning::NoBoundFound { which: Bound::Min });
        }
        if self.pa_max.is_none() {
            warnings.push(CamWarning::NoBoundFound { which: Bound::Max });
        }
        warnings
    }
}

/// Validate `params` and run the pressure-angle bound search.
pub fn compute_pressure_limits(params: &CamParameters) -> Result<PressureLimits, CamError> {
    params.validate()?;
    let limits = PressureLimits::scan(params);
    for warning in limits.warnings() {
        warn!("{warning}");
    }
    Ok(limits)
}
