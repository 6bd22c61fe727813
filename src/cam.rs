//! A complete cam: parameters, limit circles, profile, pins and diagnostics

use crate::errors::{CamError, CamWarning};
use crate::float_types::{Real, TAU};
use crate::params::CamParameters;
use crate::pins::PinLayout;
use crate::pressure::PressureLimits;
use crate::profile::{DefaultProfileOps, ProfileCurve, ProfileOps, generate_with};
use geo::{Coord, LineString, MultiPolygon, Polygon as GeoPolygon};
use nalgebra::Point2;
use tracing::{info, warn};

/// Everything computed for one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct HypocycloidCam {
    pub params: CamParameters,
    pub profile: ProfileCurve,
    pub pins: PinLayout,
}

/// The cam split into the drawing layers a host would create.
#[derive(Debug, Clone, PartialEq)]
pub struct CamSketch {
    /// Closed cam outline
    pub cam: GeoPolygon<Real>,
    /// Bore circle of diameter `d` at the cam center
    pub cam_center: GeoPolygon<Real>,
    /// Pressure-angle limit circles `[min, max]`, when both were found
    pub pressure: Vec<LineString<Real>>,
    /// One circle of diameter `d` per distinct pin
    pub pins: MultiPolygon<Real>,
    /// Circle of diameter `d` at the pin circle center
    pub pin_center: GeoPolygon<Real>,
}

impl HypocycloidCam {
    /// Validate `params` and compute limits, profile and pin layout.
    pub fn generate(params: CamParameters) -> Result<Self, CamError> {
        params.validate()?;
        let ops = DefaultProfileOps::new();

        let limits = PressureLimits::scan(&params);
        let profile = generate_with(&ops, &params, limits);
        let pins = PinLayout { points: ops.pins(&params) };

        for warning in &profile.warnings {
            warn!("{warning}");
        }
        info!(
            teeth = params.teeth,
            samples = profile.len(),
            pins = pins.len(),
            "generated hypocycloid cam"
        );
        Ok(Self { params, profile, pins })
    }

    pub const fn limits(&self) -> &PressureLimits {
        &self.profile.limits
    }

    pub fn warnings(&self) -> &[CamWarning] {
        &self.profile.warnings
    }

    /// The cam's rotation center; the profile is shifted by `−e` in x.
    pub fn cam_center(&self) -> Point2<Real> {
        Point2::new(-self.params.eccentricity, 0.0)
    }

    /// Parameters and scan results as ordered key/value pairs, for hosts that
    /// persist them as metadata on the generated geometry.
    ///
    /// Missing bounds are reported as `-1`.
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let limits = self.limits();
        let or_unset = |value: Option<Real>| value.unwrap_or(-1.0).to_string();
        vec![
            ("pitch", self.params.pitch().to_string()),
            ("pin diameter", self.params.pin_diameter.to_string()),
            ("eccentricity", self.params.eccentricity.to_string()),
            ("tooth count", self.params.teeth.to_string()),
            ("pressure angle limit", self.params.pressure_angle_limit.to_string()),
            ("pressure angle max", or_unset(limits.pa_max)),
            ("pressure angle min", or_unset(limits.pa_min)),
            ("pressure angle radius max", or_unset(limits.pa_rad_max)),
            ("pressure angle radius min", or_unset(limits.pa_rad_min)),
            ("pressure angle offset", self.params.pressure_angle_offset.to_string()),
            ("pin bolt circle diameter", self.params.bolt_circle().to_string()),
        ]
    }

    /// Layered `geo` geometry, circles tessellated with `circle_segments`.
    pub fn to_sketch(&self) -> CamSketch {
        let segments = self.params.circle_segments;
        let radius = self.params.pin_diameter / 2.0;
        let center = self.cam_center();

        let pressure = match (self.limits().pa_rad_min, self.limits().pa_rad_max) {
            (Some(min), Some(max)) => vec![
                circle_ring(center, min, segments),
                circle_ring(center, max, segments),
            ],
            _ => Vec::new(),
        };

        CamSketch {
            cam: self.profile.to_polygon(),
            cam_center: GeoPolygon::new(circle_ring(center, radius, segments), vec![]),
            pressure,
            pins: self
                .pins
                .distinct()
                .iter()
                .map(|&pin| GeoPolygon::new(circle_ring(pin, radius, segments), vec![]))
                .collect(),
            pin_center: GeoPolygon::new(circle_ring(Point2::origin(), radius, segments), vec![]),
        }
    }
}

/// Closed ring of `segments` edges around `center`. Fewer than 3 segments yields an empty ring.
pub fn circle_ring(center: Point2<Real>, radius: Real, segments: usize) -> LineString<Real> {
    if segments < 3 {
        return LineString::new(Vec::new());
    }
    let mut coords: Vec<Coord<Real>> = (0..segments)
        .map(|i| {
            let theta = TAU * (i as Real) / (segments as Real);
            Coord {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        })
        .collect();
    // close it
    coords.push(coords[0]);
    LineString::new(coords)
}
