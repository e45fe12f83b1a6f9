// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use vecmath_kernel::math::{IndexValue, Quatf, RoundingMode, Vec2f, Vec3f};
use vecmath_kernel::{Handedness, MathConfig, MathError};

#[test]
fn config_round_trips_through_json() {
    let config = MathConfig::new()
        .with_handedness(Handedness::Left)
        .with_rounding(RoundingMode::HalfEven)
        .with_tolerance(1e-4)
        .expect("valid tolerance");
    let json = config.to_json_string().expect("serializable");
    assert!(json.contains("\"left\""), "{json}");
    assert!(json.contains("\"half_even\""), "{json}");
    assert_eq!(MathConfig::from_json_str(&json), Ok(config));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    assert_eq!(MathConfig::from_json_str("{}"), Ok(MathConfig::default()));
    let partial = MathConfig::from_json_str(r#"{ "handedness": "left" }"#).expect("valid json");
    assert_eq!(partial.handedness(), Handedness::Left);
    assert_eq!(partial.rounding(), RoundingMode::HalfUp);
    assert_eq!(partial.tolerance::<f64>().value(), 1e-6);
}

#[test]
fn unknown_and_malformed_input_is_a_config_error() {
    assert!(matches!(
        MathConfig::from_json_str(r#"{ "precision": 3 }"#),
        Err(MathError::Config(_))
    ));
    assert!(matches!(
        MathConfig::from_json_str(r#"{ "rounding": "sideways" }"#),
        Err(MathError::Config(_))
    ));
    assert!(matches!(
        MathConfig::from_json_str("{ handedness"),
        Err(MathError::Config(_))
    ));
}

#[test]
fn negative_tolerance_is_rejected_after_parsing() {
    assert!(matches!(
        MathConfig::from_json_str(r#"{ "tolerance": -0.5 }"#),
        Err(MathError::InvalidArgument { .. })
    ));
}

#[test]
fn loaded_config_drives_cross_and_rounding() {
    let config =
        MathConfig::from_json_str(r#"{ "handedness": "left", "rounding": "floor", "tolerance": 0.5 }"#)
            .expect("valid json");
    assert_eq!(
        config.cross(&Vec3f::UNIT_X, &Vec3f::UNIT_Y),
        -Vec3f::UNIT_Z
    );
    assert_eq!(config.round2(&Vec2f::new(1.5, -1.5)).to_array(), [1.0, -2.0]);
    assert!(config.is_zero(0.4_f32));
    assert!(!config.is_zero(0.6_f32));
}

#[test]
fn value_types_serialize_as_plain_arrays() {
    assert_eq!(
        serde_json::to_string(&Vec3f::new(1.0, 2.5, -3.0)).expect("serializable"),
        "[1.0,2.5,-3.0]"
    );
    assert_eq!(
        serde_json::from_str::<Quatf>("[0.0,0.0,0.0,1.0]").expect("valid json"),
        Quatf::IDENTITY
    );
    assert!(serde_json::from_str::<Vec2f>("[1.0]").is_err());
    assert_eq!(
        serde_json::to_string(&IndexValue::new(2, 0.5_f32)).expect("serializable"),
        r#"{"index":2,"value":0.5}"#
    );
}
