//! Cross-representation comparable values.
//!
//! Every scalar backend can widen itself into a [`ScalarValue`], the common
//! currency used when vectors of different backends are compared or
//! converted. Comparison between kinds goes through an exact decimal
//! rendition, so `3 == 3.0 == BigInt(3) == BigDecimal(3)` holds while
//! `0.1f64` stays equal only to its exact binary expansion.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// A scalar widened to its comparable form.
#[derive(Debug, Clone)]
pub enum ScalarValue {
    /// Machine signed integer.
    Int(i64),
    /// Machine floating point (f32 widens losslessly).
    Float(f64),
    /// Arbitrary-precision integer.
    Big(BigInt),
    /// Arbitrary-precision decimal.
    Decimal(BigDecimal),
}

impl ScalarValue {
    /// Exact decimal rendition of the value.
    ///
    /// `None` for non-finite floats, which have no decimal rendition and
    /// compare equal to nothing across kinds.
    pub fn to_exact(&self) -> Option<BigDecimal> {
        match self {
            ScalarValue::Int(v) => Some(BigDecimal::from(*v)),
            ScalarValue::Float(v) => BigDecimal::try_from(*v).ok(),
            ScalarValue::Big(v) => Some(BigDecimal::from(v.clone())),
            ScalarValue::Decimal(v) => Some(v.clone()),
        }
    }

    /// False only for non-finite floats.
    pub fn is_finite(&self) -> bool {
        match self {
            ScalarValue::Float(v) => v.is_finite(),
            _ => true,
        }
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        use ScalarValue::{Big, Decimal, Float, Int};
        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Big(a), Big(b)) => a == b,
            (Decimal(a), Decimal(b)) => a == b,
            _ => match (self.to_exact(), other.to_exact()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}
