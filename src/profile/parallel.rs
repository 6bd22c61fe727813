//! Parallel implementation of profile sampling

use rayon::prelude::*;

use crate::clamp::RadialClamp;
use crate::float_types::Real;
use crate::params::CamParameters;
use crate::pins::pin_location;
use crate::profile::sample_at;
use crate::profile::traits::ProfileOps;
use nalgebra::Point2;

/// Parallel implementation of profile sampling.
///
/// Every sample is independent; rayon's indexed collect keeps roll-angle order.
pub struct ParallelProfileOps;

impl ParallelProfileOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelProfileOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileOps for ParallelProfileOps {
    fn sample(&self, params: &CamParameters, clamp: Option<&RadialClamp>) -> Vec<Point2<Real>> {
        (0..=params.samples)
            .into_par_iter()
            .map(|i| sample_at(params, clamp, i))
            .collect()
    }

    fn pins(&self, params: &CamParameters) -> Vec<Point2<Real>> {
        let p = params.pitch();
        let n = params.teeth;
        let mut points: Vec<Point2<Real>> = (0..=n + 1)
            .into_par_iter()
            .map(|i| pin_location(p, n, i))
            .collect();
        points[n + 1] = points[0];
        points
    }
}
