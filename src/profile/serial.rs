//! Serial implementation of profile sampling

use crate::clamp::RadialClamp;
use crate::float_types::Real;
use crate::params::CamParameters;
use crate::pins::pin_location;
use crate::profile::sample_at;
use crate::profile::traits::ProfileOps;
use nalgebra::Point2;

/// Serial implementation of profile sampling
pub struct SerialProfileOps;

impl SerialProfileOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialProfileOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileOps for SerialProfileOps {
    fn sample(&self, params: &CamParameters, clamp: Option<&RadialClamp>) -> Vec<Point2<Real>> {
        (0..=params.samples)
            .map(|i| sample_at(params, clamp, i))
            .collect()
    }

    fn pins(&self, params: &CamParameters) -> Vec<Point2<Real>> {
        let p = params.pitch();
        let n = params.teeth;
        let mut points: Vec<Point2<Real>> = (0..=n + 1).map(|i| pin_location(p, n, i)).collect();
        // θ = 2π lands a rounding error away from θ = 0
        points[n + 1] = points[0];
        points
    }
}
