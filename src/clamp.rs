//! Radial correction of profile points that fall outside the pressure-angle limit circles

use crate::float_types::Real;
use crate::polar::{to_polar, to_rect};
use nalgebra::Point2;

/// How an out-of-bound radius is corrected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClampMode {
    /// Subtract the fixed pressure-angle offset from the radius.
    ///
    /// This is a bias, not a clamp: when the excess is larger than the offset
    /// the point stays out of bounds, and a large offset can push it past the
    /// opposite circle.
    #[default]
    Offset,
    /// Move the point radially onto the violated limit circle.
    ToBound,
}

/// Pressure-angle limit circles plus the correction applied outside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialClamp {
    pub max_radius: Real,
    pub min_radius: Real,
    pub offset: Real,
    pub mode: ClampMode,
}

impl RadialClamp {
    pub const fn new(max_radius: Real, min_radius: Real, offset: Real, mode: ClampMode) -> Self {
        Self { max_radius, min_radius, offset, mode }
    }

    /// Correct `(x, y)` if its radius is outside `[min_radius, max_radius]`.
    ///
    /// In-range points are returned untouched, without a polar round trip.
    pub fn apply(&self, x: Real, y: Real) -> (Real, Real) {
        match self.mode {
            ClampMode::Offset => check_limit(x, y, self.max_radius, self.min_radius, self.offset),
            ClampMode::ToBound => {
                let (r, a) = to_polar(x, y);
                if r > self.max_radius {
                    to_rect(self.max_radius, a)
                } else if r < self.min_radius {
                    to_rect(self.min_radius, a)
                } else {
                    (x, y)
                }
            }
        }
    }

    pub fn apply_point(&self, point: Point2<Real>) -> Point2<Real> {
        let (x, y) = self.apply(point.x, point.y);
        Point2::new(x, y)
    }
}

/// Fixed-offset radial correction.
///
/// When the radius of `(x, y)` is above `maxrad` or below `minrad` it is reduced
/// by `offset` along the same polar angle; otherwise `(x, y)` comes back as is.
pub fn check_limit(x: Real, y: Real, maxrad: Real, minrad: Real, offset: Real) -> (Real, Real) {
    let (r, a) = to_polar(x, y);
    if r > maxrad || r < minrad {
        to_rect(r - offset, a)
    } else {
        (x, y)
    }
}
