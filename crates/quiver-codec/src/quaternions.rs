//! Codec implementations for quaternions.
//!
//! Quaternions are the relaxed domain of the finite-component invariant,
//! so decoding accepts whatever the backend's numeric grammar accepts,
//! non-finite floats included.

use quiver_core::status::format_error;
use quiver_core::{FieldScheme, QuiverResult, Scalar};
use quiver_vectors::Quaternion;

use crate::parser::parse_fields;
use crate::traits::{Decode, Encode};

fn quaternion_field_names<T: Scalar>() -> [&'static str; 4] {
    match T::FIELDS {
        FieldScheme::Axes => ["w", "x", "y", "z"],
        FieldScheme::Letters => ["a", "b", "c", "d"],
    }
}

impl<T: Scalar> Encode for Quaternion<T> {
    fn encode(&self) -> String {
        self.to_string()
    }
}

impl<T: Scalar> Decode for Quaternion<T> {
    fn decode(text: &str) -> QuiverResult<Self> {
        let type_name = format!("Quaternion{}", T::SUFFIX);
        let names = quaternion_field_names::<T>();
        let raw = parse_fields(text, &type_name, &names)?;

        let mut components = Vec::with_capacity(4);
        for (value, name) in raw.iter().zip(&names) {
            components.push(T::parse_text(value).ok_or_else(|| {
                format_error(format!(
                    "invalid value `{}` for field `{}` of `{}`",
                    value, name, type_name
                ))
            })?);
        }
        let mut iter = components.into_iter();
        let (w, x, y, z) = match (iter.next(), iter.next(), iter.next(), iter.next()) {
            (Some(w), Some(x), Some(y), Some(z)) => (w, x, y, z),
            _ => return Err(format_error("field count disagrees with dimensionality")),
        };
        Ok(Quaternion::new(w, x, y, z))
    }
}
