//! Round-trip properties of the text codec.

use proptest::prelude::*;

use quiver_codec::{decode_any, Decode, Encode};
use quiver_core::{BigDecimal, BigInt};
use quiver_vectors::{Quaternion, Vector3, Vector3i, Vector3m, VectorN};

proptest! {
    #[test]
    fn integer_vectors_round_trip(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
        let v = Vector3i::new(x, y, z).unwrap();
        prop_assert_eq!(Vector3i::decode(&v.encode()).unwrap(), v);
    }

    #[test]
    fn finite_double_vectors_round_trip(
        x in -1e12..1e12f64,
        y in -1e12..1e12f64,
        z in -1e12..1e12f64,
    ) {
        let v = Vector3::new(x, y, z).unwrap();
        prop_assert_eq!(Vector3::decode(&v.encode()).unwrap(), v);
    }

    #[test]
    fn decimal_vectors_round_trip(
        a in any::<i64>(),
        b in any::<i64>(),
        c in any::<i64>(),
        scale in -6..6i64,
    ) {
        let v = Vector3m::new(
            BigDecimal::new(BigInt::from(a), scale),
            BigDecimal::new(BigInt::from(b), scale),
            BigDecimal::new(BigInt::from(c), scale),
        )
        .unwrap();
        prop_assert_eq!(Vector3m::decode(&v.encode()).unwrap(), v);
    }

    #[test]
    fn variable_vectors_round_trip(components in prop::collection::vec(any::<i32>(), 0..8)) {
        let v = VectorN::from_slice(&components);
        prop_assert_eq!(VectorN::decode(&v.encode()).unwrap(), v);
    }

    #[test]
    fn quaternions_round_trip(
        w in -1e6..1e6f64,
        x in -1e6..1e6f64,
        y in -1e6..1e6f64,
        z in -1e6..1e6f64,
    ) {
        let q = Quaternion::new(w, x, y, z);
        prop_assert_eq!(Quaternion::<f64>::decode(&q.encode()).unwrap(), q);
    }

    #[test]
    fn sniffed_decode_agrees_with_typed_decode(x in any::<i32>(), y in any::<i32>()) {
        let text = format!("Vector2i{{x={}, y={}}}", x, y);
        let typed = quiver_vectors::Vector2i::decode(&text).unwrap();
        match decode_any(&text).unwrap() {
            quiver_codec::AnyValue::Vector2i(v) => prop_assert_eq!(v, typed),
            other => prop_assert!(false, "wrong variant: {:?}", other),
        }
    }
}

#[test]
fn concrete_fixture_scenarios() {
    // The canonical examples a consumer would pin in fixtures.
    assert_eq!(
        Vector3::decode("Vector3{x=1, y=2, z=3}").unwrap(),
        Vector3::new(1.0, 2.0, 3.0).unwrap()
    );
    assert!(Vector3::decode("Vector3{x=1, y=2}").is_err());
    assert_eq!(
        Vector3::new(1.0, 2.0, 3.0).unwrap().encode(),
        "Vector3{x=1, y=2, z=3}"
    );
}
