//! Catalog-level tests for the predefined plants, exercising defaults,
//! parameter merging, and the lazy first-violation validation policy.

use ll_models::{BlockModel, ModelError, ParamMap, ParamValue, get_plant};

fn scalar_updates(pairs: &[(&str, f64)]) -> ParamMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ParamValue::Scalar(*v)))
        .collect()
}

fn set_scalar(plant: &mut ll_models::Plant, key: &str, value: f64) {
    plant
        .set_parameters(&scalar_updates(&[(key, value)]))
        .unwrap();
}

fn ball_and_beam() -> ll_models::Plant {
    let mut plant = get_plant("Ball and Beam").unwrap();
    plant
        .set_parameters(&scalar_updates(&[
            ("m", 1.0),
            ("R", 0.05),
            ("d", 0.5),
            ("g", -9.81),
            ("L", 1.0),
            ("J", 0.02),
        ]))
        .unwrap();
    plant
}

fn motor_speed() -> ll_models::Plant {
    let mut plant = get_plant("DC Motor Speed Control").unwrap();
    plant
        .set_parameters(&scalar_updates(&[
            ("J", 0.01),
            ("b", 0.1),
            ("K", 0.01),
            ("R", 1.0),
            ("L", 0.5),
        ]))
        .unwrap();
    plant
}

fn motor_position() -> ll_models::Plant {
    let mut plant = get_plant("DC Motor Position Control").unwrap();
    plant
        .set_parameters(&scalar_updates(&[
            ("J", 0.02),
            ("b", 0.2),
            ("K", 0.02),
            ("R", 2.0),
            ("L", 1.0),
        ]))
        .unwrap();
    plant
}

// Ball and Beam

#[test]
fn ball_and_beam_initialization() {
    let plant = ball_and_beam();
    let params = plant.parameters();
    assert_eq!(params["m"], ParamValue::Scalar(1.0));
    assert_eq!(params["R"], ParamValue::Scalar(0.05));
    assert_eq!(params["d"], ParamValue::Scalar(0.5));
    assert_eq!(params["g"], ParamValue::Scalar(-9.81));
    assert_eq!(params["L"], ParamValue::Scalar(1.0));
    assert_eq!(params["J"], ParamValue::Scalar(0.02));
}

fn assert_coeffs_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "got {got:?}, want {want:?}");
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() < 1e-12, "got {got:?}, want {want:?}");
    }
}

#[test]
fn ball_and_beam_transfer_function() {
    let tf = ball_and_beam().transfer_function().unwrap();
    // -m*g*d = 4.905; L*(J/R^2 + m) = 9.0
    assert_coeffs_close(tf.numerator().coeffs(), &[4.905]);
    assert_coeffs_close(tf.denominator().coeffs(), &[9.0, 0.0, 0.0]);
}

#[test]
fn ball_and_beam_invalid_mass() {
    let mut plant = ball_and_beam();
    set_scalar(&mut plant, "m", -1.0);
    let err = plant.transfer_function().unwrap_err();
    assert!(err.to_string().contains("Mass m must be positive"));
}

#[test]
fn ball_and_beam_invalid_radius() {
    let mut plant = ball_and_beam();
    set_scalar(&mut plant, "R", -0.05);
    let err = plant.transfer_function().unwrap_err();
    assert!(err.to_string().contains("Radius R must be positive"));
}

#[test]
fn ball_and_beam_invalid_length() {
    let mut plant = ball_and_beam();
    set_scalar(&mut plant, "L", -1.0);
    let err = plant.transfer_function().unwrap_err();
    assert!(err.to_string().contains("Length L must be positive"));
}

#[test]
fn ball_and_beam_invalid_gravity() {
    let mut plant = ball_and_beam();
    set_scalar(&mut plant, "g", 9.81);
    let err = plant.transfer_function().unwrap_err();
    assert!(err.to_string().contains("Gravity g must be negative"));
}

#[test]
fn ball_and_beam_invalid_distance() {
    let mut plant = ball_and_beam();
    set_scalar(&mut plant, "d", -0.5);
    let err = plant.transfer_function().unwrap_err();
    assert!(err.to_string().contains("Distance d must be positive"));
}

#[test]
fn ball_and_beam_invalid_inertia() {
    let mut plant = ball_and_beam();
    set_scalar(&mut plant, "J", -0.02);
    let err = plant.transfer_function().unwrap_err();
    assert!(
        err.to_string()
            .contains("Moment of inertia J must be non-negative")
    );
}

#[test]
fn ball_and_beam_first_violation_wins() {
    // Both mass and gravity invalid; the mass check runs first.
    let mut plant = ball_and_beam();
    plant
        .set_parameters(&scalar_updates(&[("m", -1.0), ("g", 9.81)]))
        .unwrap();
    let err = plant.transfer_function().unwrap_err();
    let text = err.to_string();
    assert!(text.contains("Mass m"));
    assert!(!text.contains("Gravity g"));
}

// DC Motor Speed Control

#[test]
fn motor_speed_initialization() {
    let params = motor_speed().parameters();
    assert_eq!(params["J"], ParamValue::Scalar(0.01));
    assert_eq!(params["b"], ParamValue::Scalar(0.1));
    assert_eq!(params["K"], ParamValue::Scalar(0.01));
    assert_eq!(params["R"], ParamValue::Scalar(1.0));
    assert_eq!(params["L"], ParamValue::Scalar(0.5));
}

#[test]
fn motor_speed_transfer_function() {
    let tf = motor_speed().transfer_function().unwrap();
    assert_coeffs_close(tf.numerator().coeffs(), &[0.01]);
    assert_coeffs_close(tf.denominator().coeffs(), &[0.005, 0.06, 0.1001]);
}

#[test]
fn motor_speed_invalid_inertia() {
    let mut plant = motor_speed();
    set_scalar(&mut plant, "J", -0.01);
    let err = plant.transfer_function().unwrap_err();
    assert!(
        err.to_string()
            .contains("Moment of inertia J must be positive")
    );
}

#[test]
fn motor_speed_invalid_friction() {
    let mut plant = motor_speed();
    set_scalar(&mut plant, "b", -0.1);
    let err = plant.transfer_function().unwrap_err();
    assert!(
        err.to_string()
            .contains("Motor viscous friction constant b must be non-negative")
    );
}

#[test]
fn motor_speed_invalid_electromotive_force() {
    let mut plant = motor_speed();
    set_scalar(&mut plant, "K", -0.01);
    let err = plant.transfer_function().unwrap_err();
    assert!(
        err.to_string()
            .contains("Electromotive force constant K must be non-negative")
    );
}

#[test]
fn motor_speed_invalid_resistance() {
    let mut plant = motor_speed();
    set_scalar(&mut plant, "R", -1.0);
    let err = plant.transfer_function().unwrap_err();
    assert!(
        err.to_string()
            .contains("Electric resistance R must be non-negative")
    );
}

#[test]
fn motor_speed_invalid_inductance() {
    let mut plant = motor_speed();
    set_scalar(&mut plant, "L", -0.5);
    let err = plant.transfer_function().unwrap_err();
    assert!(
        err.to_string()
            .contains("Electric inductance L must be non-negative")
    );
}

// DC Motor Position Control

#[test]
fn motor_position_initialization() {
    let params = motor_position().parameters();
    assert_eq!(params["J"], ParamValue::Scalar(0.02));
    assert_eq!(params["b"], ParamValue::Scalar(0.2));
    assert_eq!(params["K"], ParamValue::Scalar(0.02));
    assert_eq!(params["R"], ParamValue::Scalar(2.0));
    assert_eq!(params["L"], ParamValue::Scalar(1.0));
}

#[test]
fn motor_position_transfer_function() {
    let tf = motor_position().transfer_function().unwrap();
    // (0.02s + 0.2)(s + 2) + 0.0004, times s
    assert_coeffs_close(tf.numerator().coeffs(), &[0.02]);
    assert_coeffs_close(tf.denominator().coeffs(), &[0.02, 0.24, 0.4004, 0.0]);
}

#[test]
fn motor_position_invalid_inertia() {
    let mut plant = motor_position();
    set_scalar(&mut plant, "J", -0.02);
    let err = plant.transfer_function().unwrap_err();
    assert!(
        err.to_string()
            .contains("Moment of inertia J must be positive")
    );
}

#[test]
fn motor_position_invalid_inductance() {
    let mut plant = motor_position();
    set_scalar(&mut plant, "L", -1.0);
    let err = plant.transfer_function().unwrap_err();
    assert!(
        err.to_string()
            .contains("Electric inductance L must be non-negative")
    );
}

// Catalog

#[test]
fn unknown_plant_type_is_an_error() {
    let err = get_plant("Nonexistent").unwrap_err();
    assert!(matches!(err, ModelError::UnknownPlantType { .. }));
    assert!(err.to_string().contains("Unknown plant type: Nonexistent"));
}

#[test]
fn set_parameters_is_lazy() {
    // Invalid values are accepted at assignment time; the failure only
    // surfaces when a transfer function is requested.
    let mut plant = motor_speed();
    assert!(plant.set_parameters(&scalar_updates(&[("J", -1.0)])).is_ok());
    assert!(plant.transfer_function().is_err());
    // Repairing the value repairs the plant; nothing was cached.
    set_scalar(&mut plant, "J", 0.01);
    assert!(plant.transfer_function().is_ok());
}
