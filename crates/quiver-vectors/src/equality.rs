//! Cross-representation equality.
//!
//! Every vector-like type exposes itself as a sequence of comparable
//! numeric values; one comparison function covers every pairing of
//! concrete types, backends, and dimension encodings. Equality never
//! fails: length disagreement or incomparable components are `false`.

use quiver_core::{Scalar, ScalarValue};

use crate::quaternion::Quaternion;
use crate::vecn::VectorN;
use crate::vector::Vector;

/// A read-only view of a value as a sequence of comparable scalars.
pub trait NumericSeq {
    /// Number of components.
    fn dim(&self) -> usize;

    /// The component at `index`, widened to its comparable form.
    ///
    /// Callers keep `index < dim()`.
    fn value_at(&self, index: usize) -> ScalarValue;
}

/// Positional value equality between any two sequence views.
pub fn values_eq<A, B>(a: &A, b: &B) -> bool
where
    A: NumericSeq + ?Sized,
    B: NumericSeq + ?Sized,
{
    a.dim() == b.dim() && (0..a.dim()).all(|i| a.value_at(i) == b.value_at(i))
}

impl<T: Scalar, const N: usize> NumericSeq for Vector<T, N> {
    fn dim(&self) -> usize {
        N
    }

    fn value_at(&self, index: usize) -> ScalarValue {
        self.components()[index].to_value()
    }
}

impl NumericSeq for VectorN {
    fn dim(&self) -> usize {
        self.len()
    }

    fn value_at(&self, index: usize) -> ScalarValue {
        ScalarValue::Int(i64::from(self.as_slice()[index]))
    }
}

impl<T: Scalar> NumericSeq for Quaternion<T> {
    fn dim(&self) -> usize {
        4
    }

    fn value_at(&self, index: usize) -> ScalarValue {
        match index {
            0 => self.w.to_value(),
            1 => self.x.to_value(),
            2 => self.y.to_value(),
            _ => self.z.to_value(),
        }
    }
}

impl NumericSeq for [ScalarValue] {
    fn dim(&self) -> usize {
        self.len()
    }

    fn value_at(&self, index: usize) -> ScalarValue {
        self[index].clone()
    }
}

// =============================================================================
// PartialEq across backends, dimension encodings, and concrete types
// =============================================================================

impl<T: Scalar, U: Scalar, const N: usize, const M: usize> PartialEq<Vector<U, M>>
    for Vector<T, N>
{
    fn eq(&self, other: &Vector<U, M>) -> bool {
        values_eq(self, other)
    }
}

impl PartialEq for VectorN {
    fn eq(&self, other: &VectorN) -> bool {
        // Only the logical components count; buffer capacity is invisible.
        self.as_slice() == other.as_slice()
    }
}

impl<T: Scalar, const N: usize> PartialEq<VectorN> for Vector<T, N> {
    fn eq(&self, other: &VectorN) -> bool {
        values_eq(self, other)
    }
}

impl<T: Scalar, const N: usize> PartialEq<Vector<T, N>> for VectorN {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        values_eq(self, other)
    }
}

impl<T: Scalar, U: Scalar> PartialEq<Quaternion<U>> for Quaternion<T> {
    fn eq(&self, other: &Quaternion<U>) -> bool {
        values_eq(self, other)
    }
}

impl<T: Scalar, U: Scalar, const N: usize> PartialEq<Vector<U, N>> for Quaternion<T> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        values_eq(self, other)
    }
}

impl<T: Scalar, U: Scalar, const N: usize> PartialEq<Quaternion<U>> for Vector<T, N> {
    fn eq(&self, other: &Quaternion<U>) -> bool {
        values_eq(self, other)
    }
}
