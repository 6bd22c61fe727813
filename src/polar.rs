//! Polar / rectangular coordinate conversion

use crate::float_types::Real;

/// Rectangular `(x, y)` to polar `(r, a)`.
///
/// `a` comes from `atan2`, so the origin maps to `(0, 0)`.
#[inline]
pub fn to_polar(x: Real, y: Real) -> (Real, Real) {
    ((x * x + y * y).sqrt(), y.atan2(x))
}

/// Polar `(r, a)` to rectangular `(x, y)`.
#[inline]
pub fn to_rect(r: Real, a: Real) -> (Real, Real) {
    (r * a.cos(), r * a.sin())
}
