//! Type-sniffing decode for debugging and tooling.
//!
//! The canonical text form starts with the type name, so a single entry
//! point can route to the right concrete decoder. Useful wherever the
//! concrete type is not known statically (inspection tools, test
//! fixtures).

use std::fmt;

use quiver_core::status::format_error;
use quiver_core::{QuiverResult, ScalarValue};
use quiver_vectors::{
    NumericSeq, Quaternion, Quaternionb, Quaternionf, Quaternioni, Quaternionm, Vector2, Vector2b,
    Vector2f, Vector2i, Vector2m, Vector3, Vector3b, Vector3f, Vector3i, Vector3m, Vector4,
    Vector4b, Vector4f, Vector4i, Vector4m, Vector5, VectorN,
};

use crate::traits::Decode;

/// A decoded value of any serializable type.
#[derive(Debug, Clone)]
pub enum AnyValue {
    Vector2(Vector2),
    Vector3(Vector3),
    Vector4(Vector4),
    Vector5(Vector5),
    Vector2f(Vector2f),
    Vector3f(Vector3f),
    Vector4f(Vector4f),
    Vector2i(Vector2i),
    Vector3i(Vector3i),
    Vector4i(Vector4i),
    Vector2b(Vector2b),
    Vector3b(Vector3b),
    Vector4b(Vector4b),
    Vector2m(Vector2m),
    Vector3m(Vector3m),
    Vector4m(Vector4m),
    VectorN(VectorN),
    Quaternion(Quaternion),
    Quaternionf(Quaternionf),
    Quaternioni(Quaternioni),
    Quaternionb(Quaternionb),
    Quaternionm(Quaternionm),
}

macro_rules! for_each_any {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            AnyValue::Vector2($v) => $body,
            AnyValue::Vector3($v) => $body,
            AnyValue::Vector4($v) => $body,
            AnyValue::Vector5($v) => $body,
            AnyValue::Vector2f($v) => $body,
            AnyValue::Vector3f($v) => $body,
            AnyValue::Vector4f($v) => $body,
            AnyValue::Vector2i($v) => $body,
            AnyValue::Vector3i($v) => $body,
            AnyValue::Vector4i($v) => $body,
            AnyValue::Vector2b($v) => $body,
            AnyValue::Vector3b($v) => $body,
            AnyValue::Vector4b($v) => $body,
            AnyValue::Vector2m($v) => $body,
            AnyValue::Vector3m($v) => $body,
            AnyValue::Vector4m($v) => $body,
            AnyValue::VectorN($v) => $body,
            AnyValue::Quaternion($v) => $body,
            AnyValue::Quaternionf($v) => $body,
            AnyValue::Quaternioni($v) => $body,
            AnyValue::Quaternionb($v) => $body,
            AnyValue::Quaternionm($v) => $body,
        }
    };
}

impl AnyValue {
    /// Number of components.
    pub fn dim(&self) -> usize {
        for_each_any!(self, v => NumericSeq::dim(v))
    }

    /// The components widened to their comparable form.
    pub fn values(&self) -> Vec<ScalarValue> {
        for_each_any!(self, v => (0..NumericSeq::dim(v)).map(|i| v.value_at(i)).collect())
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for_each_any!(self, v => write!(f, "{}", v))
    }
}

/// Decodes any canonical text form by its type-name prefix.
pub fn decode_any(text: &str) -> QuiverResult<AnyValue> {
    macro_rules! try_decode {
        ($name:literal, $variant:ident, $ty:ty) => {
            if text.starts_with(concat!($name, "{")) {
                return <$ty>::decode(text).map(AnyValue::$variant);
            }
        };
    }

    try_decode!("Vector2f", Vector2f, Vector2f);
    try_decode!("Vector3f", Vector3f, Vector3f);
    try_decode!("Vector4f", Vector4f, Vector4f);
    try_decode!("Vector2i", Vector2i, Vector2i);
    try_decode!("Vector3i", Vector3i, Vector3i);
    try_decode!("Vector4i", Vector4i, Vector4i);
    try_decode!("Vector2b", Vector2b, Vector2b);
    try_decode!("Vector3b", Vector3b, Vector3b);
    try_decode!("Vector4b", Vector4b, Vector4b);
    try_decode!("Vector2m", Vector2m, Vector2m);
    try_decode!("Vector3m", Vector3m, Vector3m);
    try_decode!("Vector4m", Vector4m, Vector4m);
    try_decode!("Vector2", Vector2, Vector2);
    try_decode!("Vector3", Vector3, Vector3);
    try_decode!("Vector4", Vector4, Vector4);
    try_decode!("Vector5", Vector5, Vector5);
    try_decode!("VectorN", VectorN, VectorN);
    try_decode!("Quaternionf", Quaternionf, Quaternionf);
    try_decode!("Quaternioni", Quaternioni, Quaternioni);
    try_decode!("Quaternionb", Quaternionb, Quaternionb);
    try_decode!("Quaternionm", Quaternionm, Quaternionm);
    try_decode!("Quaternion", Quaternion, Quaternion);

    Err(format_error(format!(
        "unrecognized type prefix in `{}`",
        text
    )))
}

#[cfg(test)]
mod tests {
    use quiver_core::QuiverError;

    use super::*;

    #[test]
    fn test_dispatch_by_prefix() {
        match decode_any("Vector3{x=1, y=2, z=3}").unwrap() {
            AnyValue::Vector3(v) => assert_eq!(v, Vector3::new(1.0, 2.0, 3.0).unwrap()),
            other => panic!("wrong variant: {:?}", other),
        }
        match decode_any("Vector3i{x=1, y=2, z=3}").unwrap() {
            AnyValue::Vector3i(v) => assert_eq!(v, Vector3i::new(1, 2, 3).unwrap()),
            other => panic!("wrong variant: {:?}", other),
        }
        match decode_any("VectorN{values=[4, 5]}").unwrap() {
            AnyValue::VectorN(v) => assert_eq!(v.as_slice(), &[4, 5]),
            other => panic!("wrong variant: {:?}", other),
        }
        match decode_any("Quaternion{w=1, x=0, y=0, z=0}").unwrap() {
            AnyValue::Quaternion(q) => assert_eq!(q, Quaternion::<f64>::identity()),
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_prefix() {
        match decode_any("Matrix3{a=1}") {
            Err(QuiverError::Format(_)) => {}
            other => panic!("expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_dim_and_display_round_trip() {
        let decoded = decode_any("Vector4b{a=1, b=2, c=3, d=4}").unwrap();
        assert_eq!(decoded.dim(), 4);
        assert_eq!(decoded.to_string(), "Vector4b{a=1, b=2, c=3, d=4}");
        assert_eq!(decoded.values().len(), 4);
    }
}
