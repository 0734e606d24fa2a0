//! Cross-backend and cross-encoding conversion.
//!
//! Conversions go through the comparable-value bridge: widening is exact,
//! narrowing truncates toward zero and saturates at the machine bounds
//! (the `Scalar::from_value` contract). Derived vectors are always freshly
//! constructed.

use std::array;

use quiver_core::{QuiverError, QuiverResult, Scalar, ScalarValue};

use crate::equality::NumericSeq;
use crate::vecn::VectorN;
use crate::vector::Vector;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Copies into another backend, converting per component.
    ///
    /// Widening conversions are exact; narrowing ones truncate toward
    /// zero. The relaxed construction path is used: a value too large for
    /// a floating backend becomes infinite rather than failing.
    pub fn cast<U: Scalar>(&self) -> Vector<U, N> {
        Vector::from_array(array::from_fn(|i| {
            U::from_value(&self.components()[i].to_value())
        }))
    }

    /// Builds a vector from any sequence view of matching length.
    pub fn from_seq<S: NumericSeq + ?Sized>(seq: &S) -> QuiverResult<Self> {
        if seq.dim() != N {
            return Err(QuiverError::DimensionMismatch {
                expected: N,
                found: seq.dim(),
            });
        }
        Self::from_components(array::from_fn(|i| T::from_value(&seq.value_at(i))))
    }

    /// The components widened to their comparable form.
    pub fn to_values(&self) -> Vec<ScalarValue> {
        self.iter().map(Scalar::to_value).collect()
    }
}

impl VectorN {
    /// Builds a variable-dimension vector from any sequence view,
    /// truncating components to machine integers.
    ///
    /// Total: every length is representable.
    pub fn from_seq<S: NumericSeq + ?Sized>(seq: &S) -> VectorN {
        let components: Vec<i32> = (0..seq.dim())
            .map(|i| i32::from_value(&seq.value_at(i)))
            .collect();
        VectorN::from_slice(&components)
    }
}
