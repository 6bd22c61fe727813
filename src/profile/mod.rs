//! Cam profile generation
//!
//! This module samples the cam boundary over one full revolution, with
//! dependency inversion over the sampling strategy (serial/parallel).

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use serial::SerialProfileOps;
pub use traits::ProfileOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelProfileOps;

/// Sampling strategy selected by the `parallel` feature.
#[cfg(not(feature = "parallel"))]
pub type DefaultProfileOps = SerialProfileOps;
/// Sampling strategy selected by the `parallel` feature.
#[cfg(feature = "parallel")]
pub type DefaultProfileOps = ParallelProfileOps;

use crate::clamp::RadialClamp;
use crate::equations::profile_xy;
use crate::errors::{CamError, CamWarning};
use crate::float_types::{Real, TAU, tolerance};
use crate::params::CamParameters;
use crate::pressure::PressureLimits;
use geo::{Coord, LineString, Polygon as GeoPolygon};
use nalgebra::Point2;
use tracing::{debug, warn};

/// Ordered cam boundary, traced once around the cam and shifted by `−e` in x.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCurve {
    /// `s + 1` points; the last one closes the revolution
    pub points: Vec<Point2<Real>>,
    /// Limit circles the samples were corrected against
    pub limits: PressureLimits,
    pub warnings: Vec<CamWarning>,
}

impl ProfileCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point matches the first within the crate tolerance.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first - last).norm() <= tolerance(),
            _ => false,
        }
    }

    /// The profile as an open `geo` line string, point for point.
    pub fn to_line_string(&self) -> LineString<Real> {
        self.points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect()
    }

    /// The profile as a closed `geo` polygon (the closing sample is dropped and
    /// the ring re-closed on the exact first point).
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        let mut coords: Vec<Coord<Real>> = self
            .points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        if self.is_closed() {
            coords.pop();
        }
        GeoPolygon::new(LineString::from(coords), vec![])
    }
}

/// Profile point `i` of `s`: roll angle `i·2π/s`, radial correction, then the
/// eccentricity shift that recenters the cam.
#[inline]
pub(crate) fn sample_at(params: &CamParameters, clamp: Option<&RadialClamp>, i: usize) -> Point2<Real> {
    let p = params.pitch();
    let d = params.pin_diameter;
    let e = params.eccentricity;
    let n = params.teeth as Real;
    let q = TAU / params.samples as Real;

    let (mut x, mut y) = profile_xy(p, d, e, n, q * i as Real);
    if let Some(clamp) = clamp {
        (x, y) = clamp.apply(x, y);
    }
    Point2::new(x - e, y)
}

/// Build the radial correction from the scanned limits, if both bounds exist.
pub fn radial_clamp(params: &CamParameters, limits: &PressureLimits) -> Option<RadialClamp> {
    limits.radial_bounds().map(|(max_radius, min_radius)| {
        RadialClamp::new(
            max_radius,
            min_radius,
            params.pressure_angle_offset,
            params.clamp_mode,
        )
    })
}

/// Sample a profile with an explicit strategy against precomputed limits.
pub fn generate_with<O: ProfileOps>(
    ops: &O,
    params: &CamParameters,
    limits: PressureLimits,
) -> ProfileCurve {
    let mut warnings = limits.warnings();
    warnings.extend(params.sampling_warning());

    let clamp = radial_clamp(params, &limits);
    let points = ops.sample(params, clamp.as_ref());
    debug!(
        samples = points.len(),
        clamped = clamp.is_some(),
        "cam profile sampled"
    );

    ProfileCurve { points, limits, warnings }
}

/// Validate `params`, find the pressure-angle limits and sample the profile.
pub fn compute_profile(params: &CamParameters) -> Result<ProfileCurve, CamError> {
    params.validate()?;
    let limits = PressureLimits::scan(params);
    let curve = generate_with(&DefaultProfileOps::new(), params, limits);
    for warning in &curve.warnings {
        warn!("{warning}");
    }
    Ok(curve)
}
