//! Mechanical input parameters for a single generation run

use crate::clamp::ClampMode;
use crate::errors::{CamError, CamWarning};
use crate::float_types::Real;

/// Samples per tooth below which the profile is considered under-sampled.
pub const MIN_SAMPLES_PER_TOOTH: usize = 10;

/// Which size drives the cam; the other one is derived through `b = p·n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeBy {
    /// Tooth (lobe) pitch `p`
    Pitch(Real),
    /// Pin bolt circle `b`
    BoltCircle(Real),
}

/// Immutable parameter set threaded through every core operation.
///
/// Construct with [`CamParameters::default`] and adjust with the `with_*`
/// setters, then [`validate`](CamParameters::validate) (every `compute_*`
/// entry point validates on its own as well).
#[derive(Debug, Clone, PartialEq)]
pub struct CamParameters {
    pub size: SizeBy,
    /// Pin (roller) diameter `d`
    pub pin_diameter: Real,
    /// Eccentricity `e`
    pub eccentricity: Real,
    /// Number of teeth (lobes) `n`
    pub teeth: usize,
    /// Line segments in the cam profile `s`
    pub samples: usize,
    /// Pressure angle limit `ang`, in degrees
    pub pressure_angle_limit: Real,
    /// Pressure angle offset `c`, subtracted from out-of-bound radii
    pub pressure_angle_offset: Real,
    /// Segments used when circles are tessellated for output
    pub circle_segments: usize,
    pub clamp_mode: ClampMode,
}

impl Default for CamParameters {
    fn default() -> Self {
        Self {
            size: SizeBy::Pitch(0.08),
            pin_diameter: 0.15,
            eccentricity: 0.05,
            teeth: 10,
            samples: 1000,
            pressure_angle_limit: 50.0,
            pressure_angle_offset: 0.0,
            circle_segments: 180,
            clamp_mode: ClampMode::Offset,
        }
    }
}

impl CamParameters {
    /// Tooth pitch `p`, derived from the bolt circle when that drives the size.
    pub fn pitch(&self) -> Real {
        match self.size {
            SizeBy::Pitch(p) => p,
            SizeBy::BoltCircle(b) => b / self.teeth as Real,
        }
    }

    /// Pin bolt circle `b = p·n`.
    pub fn bolt_circle(&self) -> Real {
        match self.size {
            SizeBy::Pitch(p) => p * self.teeth as Real,
            SizeBy::BoltCircle(b) => b,
        }
    }

    pub const fn with_pitch(mut self, pitch: Real) -> Self {
        self.size = SizeBy::Pitch(pitch);
        self
    }

    pub const fn with_bolt_circle(mut self, bolt_circle: Real) -> Self {
        self.size = SizeBy::BoltCircle(bolt_circle);
        self
    }

    pub const fn with_pin_diameter(mut self, pin_diameter: Real) -> Self {
        self.pin_diameter = pin_diameter;
        self
    }

    pub const fn with_eccentricity(mut self, eccentricity: Real) -> Self {
        self.eccentricity = eccentricity;
        self
    }

    pub const fn with_teeth(mut self, teeth: usize) -> Self {
        self.teeth = teeth;
        self
    }

    pub const fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub const fn with_pressure_angle_limit(mut self, degrees: Real) -> Self {
        self.pressure_angle_limit = degrees;
        self
    }

    pub const fn with_pressure_angle_offset(mut self, offset: Real) -> Self {
        self.pressure_angle_offset = offset;
        self
    }

    pub const fn with_circle_segments(mut self, segments: usize) -> Self {
        self.circle_segments = segments;
        self
    }

    pub const fn with_clamp_mode(mut self, mode: ClampMode) -> Self {
        self.clamp_mode = mode;
        self
    }

    /// Reject parameter sets that would silently produce malformed geometry.
    pub fn validate(&self) -> Result<(), CamError> {
        if self.teeth < 4 {
            return Err(CamError::InvalidParameter {
                name: "teeth",
                value: self.teeth as Real,
                reason: "a cam needs at least 4 teeth",
            });
        }
        if self.samples < 1 {
            return Err(CamError::InvalidParameter {
                name: "samples",
                value: self.samples as Real,
                reason: "at least one profile segment is required",
            });
        }
        let (size_name, size) = match self.size {
            SizeBy::Pitch(p) => ("pitch", p),
            SizeBy::BoltCircle(b) => ("bolt_circle", b),
        };
        positive(size_name, size)?;
        positive("pin_diameter", self.pin_diameter)?;
        positive("pressure_angle_limit", self.pressure_angle_limit)?;
        if !(self.eccentricity.is_finite() && self.eccentricity >= 0.0) {
            return Err(CamError::InvalidParameter {
                name: "eccentricity",
                value: self.eccentricity,
                reason: "must be finite and not negative",
            });
        }
        if !self.pressure_angle_offset.is_finite() {
            return Err(CamError::InvalidParameter {
                name: "pressure_angle_offset",
                value: self.pressure_angle_offset,
                reason: "must be finite",
            });
        }
        Ok(())
    }

    /// Quality warnings that do not prevent generation.
    pub fn sampling_warning(&self) -> Option<CamWarning> {
        let recommended = MIN_SAMPLES_PER_TOOTH * self.teeth;
        (self.samples < recommended).then_some(CamWarning::UnderSampled {
            samples: self.samples,
            recommended,
        })
    }
}

fn positive(name: &'static str, value: Real) -> Result<(), CamError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CamError::InvalidParameter {
            name,
            value,
            reason: "must be finite and greater than zero",
        })
    }
}
