#![cfg(feature = "parallel")]

mod support;

use hypocam::{
    pressure::PressureLimits,
    profile::{ParallelProfileOps, ProfileOps, SerialProfileOps, generate_with},
};

#[test]
fn parallel_matches_serial_point_for_point() {
    let params = support::reference_params()
        .with_samples(4000)
        .with_pressure_angle_offset(0.005);
    let limits = PressureLimits::scan(&params);

    let serial = generate_with(&SerialProfileOps::new(), &params, limits.clone());
    let parallel = generate_with(&ParallelProfileOps::new(), &params, limits);
    assert_eq!(serial.points, parallel.points);

    assert_eq!(
        SerialProfileOps::new().pins(&params),
        ParallelProfileOps::new().pins(&params)
    );
}
