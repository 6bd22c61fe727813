mod support;

use hypocam::{
    CamError, CamParameters, CamWarning, ClampMode, compute_profile,
    equations::profile_xy,
    float_types::{Real, TAU},
};
use nalgebra::Point2;

#[test]
fn sample_count_is_s_plus_one() {
    for samples in [1, 100, 1000, 1237] {
        let params = CamParameters::default().with_samples(samples);
        let profile = compute_profile(&params).unwrap();
        assert_eq!(profile.len(), samples + 1);
    }
}

#[test]
fn reference_first_point() {
    let profile = compute_profile(&support::reference_params()).unwrap();
    let first = profile.points[0];
    assert!(support::approx_eq(first.x, 0.725, 1e-12), "{first}");
    assert!(support::approx_eq(first.y, 0.0, 1e-12), "{first}");
}

#[test]
fn profile_closes_after_one_revolution() {
    let profile = compute_profile(&support::reference_params()).unwrap();
    let first = profile.points.first().unwrap();
    let last = profile.points.last().unwrap();
    assert!((first - last).norm() < 1e-6);
    assert!(profile.is_closed());
}

#[test]
fn in_range_samples_are_untouched() {
    let params = support::reference_params().with_pressure_angle_offset(0.01);
    let profile = compute_profile(&params).unwrap();
    let (max, min) = profile.limits.radial_bounds().unwrap();

    let (p, d, e, n) = (params.pitch(), params.pin_diameter, params.eccentricity, params.teeth as Real);
    let step = TAU / params.samples as Real;
    let mut untouched = 0;
    for (i, point) in profile.points.iter().enumerate() {
        let (x, y) = profile_xy(p, d, e, n, step * i as Real);
        let r = (x * x + y * y).sqrt();
        if r <= max && r >= min {
            assert_eq!(*point, Point2::new(x - e, y), "sample {i}");
            untouched += 1;
        } else {
            let corrected = (point + nalgebra::Vector2::new(e, 0.0)).coords.norm();
            assert!(support::approx_eq(corrected, r - 0.01, 1e-12), "sample {i}");
        }
    }
    assert!(untouched > 0 && untouched < profile.len());
}

#[test]
fn offset_moves_the_tip_inward() {
    let params = support::reference_params().with_pressure_angle_offset(0.01);
    let profile = compute_profile(&params).unwrap();
    // The tip at roll angle 0 (r = 0.775) is outside the max circle.
    assert!(support::approx_eq(profile.points[0].x, 0.715, 1e-12));
}

#[test]
fn to_bound_mode_keeps_every_sample_between_the_circles() {
    let params = support::reference_params()
        .with_pressure_angle_offset(0.01)
        .with_clamp_mode(ClampMode::ToBound);
    let profile = compute_profile(&params).unwrap();
    let (max, min) = profile.limits.radial_bounds().unwrap();
    let center = Point2::new(-params.eccentricity, 0.0);
    let (lo, hi) = support::radial_extent(&profile.points, center);
    assert!(lo >= min - 1e-12, "{lo} < {min}");
    assert!(hi <= max + 1e-12, "{hi} > {max}");
}

#[test]
fn bolt_circle_drives_the_same_profile() {
    let by_pitch = compute_profile(&support::reference_params()).unwrap();
    let by_circle = compute_profile(&CamParameters::default().with_bolt_circle(0.8)).unwrap();
    for (a, b) in by_pitch.points.iter().zip(&by_circle.points) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn under_sampling_warns_but_generates() {
    let params = support::reference_params().with_samples(50);
    let profile = compute_profile(&params).unwrap();
    assert_eq!(profile.len(), 51);
    assert!(profile.warnings.contains(&CamWarning::UnderSampled {
        samples: 50,
        recommended: 100
    }));
}

#[test]
fn invalid_parameters_produce_no_geometry() {
    let zero_samples = support::reference_params().with_samples(0);
    assert!(matches!(
        compute_profile(&zero_samples),
        Err(CamError::InvalidParameter { name: "samples", .. })
    ));
    let no_pins = support::reference_params().with_pin_diameter(-0.1);
    assert!(matches!(
        compute_profile(&no_pins),
        Err(CamError::InvalidParameter { name: "pin_diameter", .. })
    ));
}

#[test]
fn polygon_drops_the_closing_sample() {
    use geo::Area;

    let profile = compute_profile(&support::reference_params()).unwrap();
    let polygon = profile.to_polygon();
    // geo re-closes the ring on the exact first point
    assert_eq!(polygon.exterior().0.len(), profile.len());
    assert_eq!(profile.to_line_string().0.len(), profile.len());
    assert!(polygon.unsigned_area() > 0.0);
}
