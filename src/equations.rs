//! Hypocycloid cam profile equations
//!
//! The profile is the path of the pin's contact point while the cam rolls inside
//! the pin circle of radius `n·p`, offset by the eccentricity `e`:
//!
//! ```text
//! x(a) = n·p·cos(a) + e·cos((n+1)·a) − (d/2)·cos(yp(a) + a)
//! y(a) = n·p·sin(a) + e·sin((n+1)·a) − (d/2)·sin(yp(a) + a)
//! ```
//!
//! where `yp` is the conjugate angle between the pin normal and the roll angle.

use crate::float_types::Real;

/// Conjugate angle `yp(a) = atan( sin(n·a) / (cos(n·a) + n·p/(e·(n+1))) )`.
///
/// This is the single-argument `atan` of a ratio, not `atan2`. Wherever the
/// denominator changes sign the result jumps by π, which shows up as a kink in
/// the profile for some parameter combinations. Reference output depends on it.
///
/// With `e = 0` the ratio term is infinite and the angle collapses to zero.
#[inline]
pub fn conjugate_angle(a: Real, e: Real, n: Real, p: Real) -> Real {
    ((n * a).sin() / ((n * a).cos() + (n * p) / (e * (n + 1.0)))).atan()
}

/// X coordinate of the unclamped, unshifted profile at roll angle `a`.
#[inline]
pub fn profile_x(p: Real, d: Real, e: Real, n: Real, a: Real) -> Real {
    (n * p) * a.cos() + e * ((n + 1.0) * a).cos()
        - d / 2.0 * (conjugate_angle(a, e, n, p) + a).cos()
}

/// Y coordinate of the unclamped, unshifted profile at roll angle `a`.
#[inline]
pub fn profile_y(p: Real, d: Real, e: Real, n: Real, a: Real) -> Real {
    (n * p) * a.sin() + e * ((n + 1.0) * a).sin()
        - d / 2.0 * (conjugate_angle(a, e, n, p) + a).sin()
}

/// Both coordinates of the profile at roll angle `a`, sharing one conjugate-angle evaluation.
#[inline]
pub fn profile_xy(p: Real, d: Real, e: Real, n: Real, a: Real) -> (Real, Real) {
    let yp = conjugate_angle(a, e, n, p) + a;
    (
        (n * p) * a.cos() + e * ((n + 1.0) * a).cos() - d / 2.0 * yp.cos(),
        (n * p) * a.sin() + e * ((n + 1.0) * a).sin() - d / 2.0 * yp.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;

    const P: Real = 0.08;
    const D: Real = 0.15;
    const E: Real = 0.05;
    const N: Real = 10.0;

    #[test]
    fn profile_start_point() {
        let (x, y) = profile_xy(P, D, E, N, 0.0);
        assert!((x - 0.775).abs() < 1e-12, "x(0) = {x}");
        assert!(y.abs() < 1e-12, "y(0) = {y}");
    }

    #[test]
    fn split_and_joint_forms_agree() {
        for i in 0..64 {
            let a = i as Real * PI / 32.0;
            let (x, y) = profile_xy(P, D, E, N, a);
            assert_eq!(x, profile_x(P, D, E, N, a));
            assert_eq!(y, profile_y(P, D, E, N, a));
        }
    }

    #[test]
    fn zero_eccentricity_reduces_to_offset_circle() {
        for i in 0..16 {
            let a = i as Real * PI / 8.0;
            assert_eq!(conjugate_angle(a, 0.0, N, P), 0.0);
            let (x, y) = profile_xy(P, D, 0.0, N, a);
            let r = (x * x + y * y).sqrt();
            assert!((r - (N * P - D / 2.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn conjugate_angle_stays_in_principal_branch() {
        // Large eccentricity drives the denominator negative; atan keeps (-π/2, π/2).
        for i in 0..360 {
            let a = i as Real * PI / 180.0;
            let yp = conjugate_angle(a, 0.5, N, P);
            assert!((-PI / 2.0..=PI / 2.0).contains(&yp));
        }
    }
}
