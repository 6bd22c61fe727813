//! Pin circle layout

use crate::errors::CamError;
use crate::float_types::{Real, TAU};
use crate::params::CamParameters;
use crate::profile::{DefaultProfileOps, ProfileOps};
use nalgebra::Point2;

/// Ordered pin centers on the bolt circle; one full loop, first and last coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct PinLayout {
    pub points: Vec<Point2<Real>>,
}

impl PinLayout {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pin centers without the closing duplicate, one per pin.
    pub fn distinct(&self) -> &[Point2<Real>] {
        match self.points.split_last() {
            Some((_, rest)) if self.points.len() > 1 => rest,
            _ => &self.points,
        }
    }
}

/// Center of pin `i` for `n` teeth: radius `p·n`, angular step `2π/(n+1)`.
#[inline]
pub fn pin_location(p: Real, n: usize, i: usize) -> Point2<Real> {
    let radius = p * n as Real;
    let theta = TAU / (n + 1) as Real * i as Real;
    Point2::new(radius * theta.cos(), radius * theta.sin())
}

/// Validate `params` and lay out `n + 2` pin centers.
pub fn compute_pin_layout(params: &CamParameters) -> Result<PinLayout, CamError> {
    params.validate()?;
    let points = DefaultProfileOps::new().pins(params);
    tracing::debug!(pins = points.len(), "pin layout");
    Ok(PinLayout { points })
}
