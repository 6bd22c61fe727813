//! Profile generator for **hypocycloid cams** as used in cycloidal reduction drives.
//!
//! Given a tooth pitch, pin diameter, eccentricity and tooth count, the crate
//! computes the cam boundary curve, the ring of mating pin centers, and the
//! pressure-angle limit circles that bound the usable part of the profile.
//!
//! ```rust
//! use hypocam::{CamParameters, compute_pin_layout, compute_profile};
//!
//! let params = CamParameters::default().with_teeth(12).with_samples(1200);
//! let profile = compute_profile(&params)?;
//! let pins = compute_pin_layout(&params)?;
//! assert_eq!(profile.len(), 1201);
//! assert_eq!(pins.len(), 14);
//! # Ok::<(), hypocam::errors::CamError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export with one layer per part
//! - **svg-io**: `.svg` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to sample the profile and pins in parallel

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod cam;
pub mod clamp;
pub mod equations;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod params;
pub mod pins;
pub mod polar;
pub mod pressure;
pub mod profile;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use cam::{CamSketch, HypocycloidCam};
pub use clamp::{ClampMode, RadialClamp, check_limit};
pub use errors::{CamError, CamWarning};
pub use params::{CamParameters, SizeBy};
pub use pins::{PinLayout, compute_pin_layout};
pub use polar::{to_polar, to_rect};
pub use pressure::{PressureLimits, compute_pressure_limits};
pub use profile::{ProfileCurve, compute_profile};

#[cfg(test)]
mod tests;
