//! Codec implementations for the vector types.

use quiver_core::scalar::field_names;
use quiver_core::status::format_error;
use quiver_core::{QuiverResult, Scalar};
use quiver_vectors::{Vector, VectorN};

use crate::parser::{parse_fields, strip_wrapper};
use crate::traits::{Decode, Encode};

impl<T: Scalar, const N: usize> Encode for Vector<T, N> {
    fn encode(&self) -> String {
        self.to_string()
    }
}

impl<T: Scalar, const N: usize> Decode for Vector<T, N> {
    fn decode(text: &str) -> QuiverResult<Self> {
        let type_name = format!("Vector{}{}", N, T::SUFFIX);
        let names = field_names(T::FIELDS, N).ok_or_else(|| {
            format_error(format!("`{}` has no canonical field names", type_name))
        })?;
        let raw = parse_fields(text, &type_name, names)?;

        let mut components = Vec::with_capacity(N);
        for (value, name) in raw.iter().zip(names) {
            components.push(T::parse_text(value).ok_or_else(|| {
                format_error(format!(
                    "invalid value `{}` for field `{}` of `{}`",
                    value, name, type_name
                ))
            })?);
        }
        let components: [T; N] = components
            .try_into()
            .map_err(|_| format_error("field count disagrees with dimensionality"))?;
        // Checked construction rejects non-finite floating components as a
        // format error, keeping the decoded invariant identical to the
        // constructed one.
        Vector::from_components(components)
    }
}

impl Encode for VectorN {
    fn encode(&self) -> String {
        self.to_string()
    }
}

impl Decode for VectorN {
    fn decode(text: &str) -> QuiverResult<Self> {
        let body = strip_wrapper(text, "VectorN")?;
        let list = body
            .strip_prefix("values=[")
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| format_error(format!("expected `values=[...]`, found `{}`", body)))?;

        if list.is_empty() {
            return Ok(VectorN::new());
        }
        let mut components = Vec::new();
        for value in list.split(", ") {
            components.push(
                value
                    .parse::<i32>()
                    .map_err(|_| format_error(format!("invalid integer `{}`", value)))?,
            );
        }
        Ok(VectorN::from_slice(&components))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use quiver_core::{BigDecimal, BigInt, QuiverError};
    use quiver_vectors::{Vector2, Vector3, Vector3b, Vector3i, Vector3m, Vector4f, Vector5};

    use super::*;

    fn assert_format_error<T: std::fmt::Debug>(result: QuiverResult<T>) {
        match result {
            Err(QuiverError::Format(_)) => {}
            other => panic!("expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_doubles() {
        let v = Vector3::decode("Vector3{x=1, y=2, z=3}").unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0).unwrap());
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        assert_format_error(Vector3::decode("Vector3{x=1, y=2}"));
        assert_format_error(Vector3::decode("Vector3{x=1, y=2, z=3, w=4}"));
    }

    #[test]
    fn test_decode_rejects_malformed_text() {
        assert_format_error(Vector3::decode("Vector3i{x=1, y=2, z=3}"));
        assert_format_error(Vector3::decode("Vector3{x=1, y=2, z=3"));
        assert_format_error(Vector3::decode("Vector3{a=1, b=2, c=3}"));
        assert_format_error(Vector3::decode("Vector3{x=1,y=2,z=3}"));
        assert_format_error(Vector3::decode("Vector3{x=one, y=2, z=3}"));
        assert_format_error(Vector3::decode("Vector3{x=inf, y=0, z=0}"));
    }

    #[test]
    fn test_round_trip_every_backend() {
        let doubles = Vector2::new(1.5, -2.0).unwrap();
        assert_eq!(Vector2::decode(&doubles.encode()).unwrap(), doubles);

        let singles = Vector4f::new(0.25, -1.0, 3.5, 0.0).unwrap();
        assert_eq!(Vector4f::decode(&singles.encode()).unwrap(), singles);

        let ints = Vector3i::new(-7, 0, 42).unwrap();
        assert_eq!(Vector3i::decode(&ints.encode()).unwrap(), ints);

        let bigs = Vector3b::new(
            BigInt::from_str("123456789012345678901234567890").unwrap(),
            BigInt::from(-1),
            BigInt::from(0),
        )
        .unwrap();
        assert_eq!(Vector3b::decode(&bigs.encode()).unwrap(), bigs);

        let decimals = Vector3m::new(
            BigDecimal::from_str("1.50").unwrap(),
            BigDecimal::from_str("-0.001").unwrap(),
            BigDecimal::from(7),
        )
        .unwrap();
        assert_eq!(Vector3m::decode(&decimals.encode()).unwrap(), decimals);

        let five = Vector5::new(1.0, 2.0, 3.0, 4.0, 5.0).unwrap();
        assert_eq!(Vector5::decode(&five.encode()).unwrap(), five);
    }

    #[test]
    fn test_letter_fields_for_arbitrary_precision() {
        let bigs =
            Vector3b::new(BigInt::from(1), BigInt::from(2), BigInt::from(3)).unwrap();
        assert_eq!(bigs.encode(), "Vector3b{a=1, b=2, c=3}");
        // Axis names are not valid for the letter-named backends.
        assert_format_error(Vector3b::decode("Vector3b{x=1, y=2, z=3}"));
    }

    #[test]
    fn test_vecn_round_trip() {
        let v = VectorN::from_slice(&[1, -2, 3]);
        assert_eq!(v.encode(), "VectorN{values=[1, -2, 3]}");
        assert_eq!(VectorN::decode(&v.encode()).unwrap(), v);

        let empty = VectorN::new();
        assert_eq!(empty.encode(), "VectorN{values=[]}");
        assert_eq!(VectorN::decode("VectorN{values=[]}").unwrap(), empty);
    }

    #[test]
    fn test_vecn_rejects_malformed_text() {
        assert_format_error(VectorN::decode("VectorN{values=[1, 2"));
        assert_format_error(VectorN::decode("VectorN{values=1, 2]}"));
        assert_format_error(VectorN::decode("VectorN{values=[1, x]}"));
        assert_format_error(VectorN::decode("VectorN{values=[1.5]}"));
    }

    #[test]
    fn test_non_finite_encodes_but_does_not_decode() {
        // The relaxed arithmetic path can produce non-finite components;
        // they render, but the decoded invariant rejects them.
        let overflowed = Vector2::new(1.0, -1.0).unwrap().div_scalar(&0.0).unwrap();
        assert_eq!(overflowed.encode(), "Vector2{x=inf, y=-inf}");
        assert_format_error(Vector2::decode(&overflowed.encode()));
    }
}
