//! The cross-representation contract, exercised through the public API.

use std::str::FromStr;

use quiver_core::{BigDecimal, BigInt, QuiverError, ScalarValue};
use quiver_vectors::{
    values_eq, NumericSeq, Vector2m, Vector3, Vector3b, Vector3i, Vector4, VectorN,
};

#[test]
fn machine_integers_equal_floats_of_the_same_value() {
    let ints = Vector3i::new(1, 2, 3).unwrap();
    let doubles = Vector3::new(1.0, 2.0, 3.0).unwrap();
    assert_eq!(ints, doubles);
    assert_eq!(doubles, ints);
}

#[test]
fn length_disagreement_is_false_never_an_error() {
    let ints = Vector3i::new(1, 2, 3).unwrap();
    let four = Vector4::new(1.0, 2.0, 3.0, 4.0).unwrap();
    assert!(!values_eq(&ints, &four));
    assert_ne!(ints, four);

    let mut dynamic = VectorN::from_slice(&[1, 2, 3]);
    assert_eq!(ints, dynamic);
    dynamic.append(4);
    assert_ne!(ints, dynamic);
}

#[test]
fn exact_values_compare_across_all_backends() {
    let bigs = Vector3b::new(BigInt::from(-5), BigInt::from(0), BigInt::from(9)).unwrap();
    let ints = Vector3i::new(-5, 0, 9).unwrap();
    let doubles = Vector3::new(-5.0, 0.0, 9.0).unwrap();
    assert_eq!(bigs, ints);
    assert_eq!(bigs, doubles);

    // A value only a wide backend can hold equals nothing narrower.
    let wide = Vector3b::new(
        BigInt::from_str("123456789012345678901").unwrap(),
        BigInt::from(0),
        BigInt::from(0),
    )
    .unwrap();
    assert_ne!(wide, ints);
}

#[test]
fn truncating_narrowing_conversions() {
    let decimals = Vector2m::new(
        BigDecimal::from_str("3.99").unwrap(),
        BigDecimal::from_str("-3.99").unwrap(),
    )
    .unwrap();
    // Truncation toward zero, not rounding.
    let narrowed = decimals.cast::<i32>();
    assert_eq!(*narrowed.x(), 3);
    assert_eq!(*narrowed.y(), -3);

    // The truncated value no longer equals the original.
    assert_ne!(narrowed, decimals);
}

#[test]
fn widening_conversions_preserve_equality() {
    let ints = Vector3i::new(7, -8, 9).unwrap();
    assert_eq!(ints.cast::<f64>(), ints);
    assert_eq!(ints.cast::<BigInt>(), ints);
    assert_eq!(ints.cast::<BigDecimal>(), ints);
}

#[test]
fn sequence_views_drive_generic_construction() {
    let dynamic = VectorN::from_slice(&[4, 5, 6]);
    let fixed = Vector3::from_seq(&dynamic).unwrap();
    assert_eq!(fixed, dynamic);

    let err = Vector4::from_seq(&dynamic).unwrap_err();
    assert_eq!(
        err,
        QuiverError::DimensionMismatch {
            expected: 4,
            found: 3
        }
    );

    let values = [ScalarValue::Int(4), ScalarValue::Int(5), ScalarValue::Int(6)];
    assert!(values_eq(&values[..], &dynamic));
    assert_eq!(dynamic.value_at(0), ScalarValue::Int(4));
}

#[test]
fn round_trip_through_the_variable_type() {
    let ints = Vector3i::new(11, -12, 13).unwrap();
    let dynamic = VectorN::from_seq(&ints);
    assert_eq!(dynamic, ints);
    let back: Vector3i = dynamic.to_fixed().unwrap();
    assert_eq!(back, ints);
}
