//! Traits defining profile sampling operations for dependency inversion

use crate::clamp::RadialClamp;
use crate::float_types::Real;
use crate::params::CamParameters;
use nalgebra::Point2;

/// Core sampling operations over the full rotation
pub trait ProfileOps {
    /// Sample the cam profile at `s + 1` evenly spaced roll angles.
    ///
    /// `clamp` is `None` when the pressure-angle scan found no usable bounds.
    fn sample(&self, params: &CamParameters, clamp: Option<&RadialClamp>) -> Vec<Point2<Real>>;

    /// Lay out the `n + 2` pin centers.
    fn pins(&self, params: &CamParameters) -> Vec<Point2<Real>>;
}
