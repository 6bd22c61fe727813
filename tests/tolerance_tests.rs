// The tolerance cell is process-wide, so this file holds a single test.
#![cfg(feature = "f64")]

use hypocam::{
    CamParameters, compute_profile,
    float_types::{Real, set_tolerance, tolerance},
    pressure::pressure_angle,
};

#[test]
fn runtime_tolerance_is_set_once() {
    set_tolerance(1e-9);
    assert_eq!(tolerance(), 1e-9);

    // Later calls are ignored
    set_tolerance(0.5);
    assert_eq!(tolerance(), 1e-9);

    let profile = compute_profile(&CamParameters::default()).unwrap();
    assert!(profile.is_closed());

    // Rounding overshoot at a = 0 stays well inside the tighter tolerance
    let angle: Real = pressure_angle(0.00137, 0.15, 4.0, 0.0).unwrap();
    assert!((angle - 90.0).abs() < 1e-9, "{angle}");
}
