//! Test support library
//! Provides parameter fixtures and float helpers shared by the integration tests.

use hypocam::{CamParameters, float_types::Real};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The reference cam: p = 0.08, d = 0.15, e = 0.05, n = 10, ang = 50.
pub fn reference_params() -> CamParameters {
    CamParameters::default()
}

/// Smallest and largest distance from `center` over `points`.
pub fn radial_extent(points: &[Point2<Real>], center: Point2<Real>) -> (Real, Real) {
    points.iter().fold((Real::MAX, Real::MIN), |(lo, hi), p| {
        let r = (p - center).norm();
        (lo.min(r), hi.max(r))
    })
}
