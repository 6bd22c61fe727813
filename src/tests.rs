use crate::errors::CamWarning;
use crate::float_types::{PI, Real};
use crate::params::CamParameters;
use crate::polar::{to_polar, to_rect};
use crate::pressure::{PressureLimits, pressure_angle};
use crate::profile::{SerialProfileOps, generate_with, sample_at};

#[test]
fn polar_round_trip() {
    let points: [(Real, Real); 8] = [
        (1.0, 0.0),
        (0.0, 1.0),
        (-1.0, 0.0),
        (0.0, -1.0),
        (0.775, 0.0),
        (-0.3, 0.4),
        (123.456, -789.012),
        (-1e-3, -2e-3),
    ];
    for (x, y) in points {
        let (r, a) = to_polar(x, y);
        let (rx, ry) = to_rect(r, a);
        assert!((rx - x).abs() < 1e-9, "x: {x} -> {rx}");
        assert!((ry - y).abs() < 1e-9, "y: {y} -> {ry}");
    }
}

#[test]
fn polar_origin_has_zero_angle() {
    assert_eq!(to_polar(0.0, 0.0), (0.0, 0.0));
}

#[test]
fn scan_skips_faulting_degrees() {
    // Zero pitch makes every evaluation 0/0.
    let params = CamParameters::default().with_pitch(0.0);
    assert!(pressure_angle(0.0, 0.15, 10.0, PI / 4.0).is_err());

    let limits = PressureLimits::scan(&params);
    assert_eq!(limits.domain_faults.len(), 181);
    assert_eq!(limits.pa_min, None);
    assert_eq!(limits.pa_max, None);
    assert_eq!(limits.radial_bounds(), None);

    let warnings = limits.warnings();
    assert!(warnings.contains(&CamWarning::DomainFault { degree: 0 }));
    assert!(warnings.contains(&CamWarning::DomainFault { degree: 180 }));
}

#[test]
fn unbounded_limits_leave_samples_unclamped() {
    // A 100° limit is never undercut by the ±90° pressure angle.
    let params = CamParameters::default()
        .with_pressure_angle_limit(100.0)
        .with_pressure_angle_offset(0.05);
    let limits = PressureLimits::scan(&params);
    assert_eq!(limits.pa_min, Some(0.0));
    assert_eq!(limits.pa_max, None);

    let curve = generate_with(&SerialProfileOps::new(), &params, limits);
    for (i, point) in curve.points.iter().enumerate() {
        assert_eq!(*point, sample_at(&params, None, i));
    }
}
