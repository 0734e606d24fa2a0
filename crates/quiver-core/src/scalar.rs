//! The scalar backend trait.
//!
//! A [`Scalar`] is a component type vectors can be built over. Arithmetic
//! comes from the `num-traits` [`Signed`] tower; everything backend-specific
//! — the zero-denominator policy, the square-root rule, the comparable-value
//! bridge, and the text-codec conventions — is declared here once so the
//! vector types never branch on a concrete backend.

use std::fmt;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use crate::decimal::DecimalContext;
use crate::math;
use crate::status::{arithmetic_error, QuiverError, QuiverResult};
use crate::value::ScalarValue;

/// Field-naming scheme used by the text codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScheme {
    /// Axis names: `x,y` / `x,y,z` / `w,x,y,z` / `v,w,x,y,z`.
    Axes,
    /// Letter names: `a, b, c, ...` (arbitrary-precision backends).
    Letters,
}

const AXES_2: &[&str] = &["x", "y"];
const AXES_3: &[&str] = &["x", "y", "z"];
const AXES_4: &[&str] = &["w", "x", "y", "z"];
const AXES_5: &[&str] = &["v", "w", "x", "y", "z"];
const LETTERS: &[&str] = &["a", "b", "c", "d", "e"];

/// Canonical component names for a scheme and dimensionality.
///
/// `None` for dimensionalities the text format does not define.
pub fn field_names(scheme: FieldScheme, dim: usize) -> Option<&'static [&'static str]> {
    match scheme {
        FieldScheme::Axes => match dim {
            2 => Some(AXES_2),
            3 => Some(AXES_3),
            4 => Some(AXES_4),
            5 => Some(AXES_5),
            _ => None,
        },
        FieldScheme::Letters => {
            if (2..=5).contains(&dim) {
                Some(&LETTERS[..dim])
            } else {
                None
            }
        }
    }
}

/// A numeric component type.
///
/// Implementations: `i32`, `f32`, `f64`, [`BigInt`], [`BigDecimal`].
pub trait Scalar: Clone + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Signed {
    /// Type-name suffix used by the text codec (empty for doubles).
    const SUFFIX: &'static str;
    /// Field-naming scheme used by the text codec.
    const FIELDS: FieldScheme;
    /// Whether the backend's own arithmetic defines a result for `x / 0`.
    ///
    /// True only for the IEEE floating backends, which produce infinities
    /// or NaN instead of raising.
    const DIVIDES_BY_ZERO: bool;

    /// Division honoring the backend's zero-denominator policy.
    fn div_checked(&self, rhs: &Self) -> QuiverResult<Self>;

    /// Square root under the backend's precision rules.
    ///
    /// Integer backends take the floor; the decimal backend rounds to its
    /// context. Negative input is an error for the exact backends and NaN
    /// for the floating ones.
    fn sqrt(&self) -> QuiverResult<Self>;

    /// False only for non-finite floating-point values.
    fn is_finite_value(&self) -> bool;

    /// Widens to the cross-representation comparable value.
    fn to_value(&self) -> ScalarValue;

    /// Narrowing conversion from a comparable value.
    ///
    /// Fractional digits truncate toward zero; values beyond a machine
    /// integer's range saturate at the bounds; non-finite floats narrow to
    /// zero for the exact backends.
    fn from_value(value: &ScalarValue) -> Self;

    /// Parses the canonical text form of one component.
    fn parse_text(text: &str) -> Option<Self>;

    /// Renders the canonical text form of one component.
    fn render_text(&self) -> String {
        self.to_string()
    }
}

impl Scalar for i32 {
    const SUFFIX: &'static str = "i";
    const FIELDS: FieldScheme = FieldScheme::Axes;
    const DIVIDES_BY_ZERO: bool = false;

    fn div_checked(&self, rhs: &Self) -> QuiverResult<Self> {
        if *rhs == 0 {
            return Err(QuiverError::DivisionByZero);
        }
        Ok(self.wrapping_div(*rhs))
    }

    fn sqrt(&self) -> QuiverResult<Self> {
        math::int_sqrt_signed(i64::from(*self))
            .map(|root| root as i32)
            .ok_or_else(|| arithmetic_error("square root of a negative integer"))
    }

    fn is_finite_value(&self) -> bool {
        true
    }

    fn to_value(&self) -> ScalarValue {
        ScalarValue::Int(i64::from(*self))
    }

    fn from_value(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Int(v) => (*v).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            // `as` truncates toward zero, saturates, and maps NaN to 0.
            ScalarValue::Float(v) => *v as i32,
            ScalarValue::Big(v) => v
                .to_i32()
                .unwrap_or(if v.is_negative() { i32::MIN } else { i32::MAX }),
            ScalarValue::Decimal(v) => v
                .with_scale_round(0, RoundingMode::Down)
                .to_i32()
                .unwrap_or(if v.is_negative() { i32::MIN } else { i32::MAX }),
        }
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Scalar for f32 {
    const SUFFIX: &'static str = "f";
    const FIELDS: FieldScheme = FieldScheme::Axes;
    const DIVIDES_BY_ZERO: bool = true;

    fn div_checked(&self, rhs: &Self) -> QuiverResult<Self> {
        Ok(self / rhs)
    }

    fn sqrt(&self) -> QuiverResult<Self> {
        Ok(f32::sqrt(*self))
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }

    fn to_value(&self) -> ScalarValue {
        ScalarValue::Float(f64::from(*self))
    }

    fn from_value(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Int(v) => *v as f32,
            ScalarValue::Float(v) => *v as f32,
            ScalarValue::Big(v) => v.to_f32().unwrap_or(f32::NAN),
            ScalarValue::Decimal(v) => v.to_f32().unwrap_or(f32::NAN),
        }
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Scalar for f64 {
    const SUFFIX: &'static str = "";
    const FIELDS: FieldScheme = FieldScheme::Axes;
    const DIVIDES_BY_ZERO: bool = true;

    fn div_checked(&self, rhs: &Self) -> QuiverResult<Self> {
        Ok(self / rhs)
    }

    fn sqrt(&self) -> QuiverResult<Self> {
        Ok(f64::sqrt(*self))
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }

    fn to_value(&self) -> ScalarValue {
        ScalarValue::Float(*self)
    }

    fn from_value(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Int(v) => *v as f64,
            ScalarValue::Float(v) => *v,
            ScalarValue::Big(v) => v.to_f64().unwrap_or(f64::NAN),
            ScalarValue::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Scalar for BigInt {
    const SUFFIX: &'static str = "b";
    const FIELDS: FieldScheme = FieldScheme::Letters;
    const DIVIDES_BY_ZERO: bool = false;

    fn div_checked(&self, rhs: &Self) -> QuiverResult<Self> {
        if rhs.is_zero() {
            return Err(QuiverError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    fn sqrt(&self) -> QuiverResult<Self> {
        if self.is_negative() {
            return Err(arithmetic_error("square root of a negative integer"));
        }
        Ok(BigInt::sqrt(self))
    }

    fn is_finite_value(&self) -> bool {
        true
    }

    fn to_value(&self) -> ScalarValue {
        ScalarValue::Big(self.clone())
    }

    fn from_value(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Int(v) => BigInt::from(*v),
            ScalarValue::Float(v) => BigInt::from_f64(v.trunc()).unwrap_or_else(BigInt::zero),
            ScalarValue::Big(v) => v.clone(),
            ScalarValue::Decimal(v) => {
                v.with_scale_round(0, RoundingMode::Down)
                    .as_bigint_and_exponent()
                    .0
            }
        }
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Scalar for BigDecimal {
    const SUFFIX: &'static str = "m";
    const FIELDS: FieldScheme = FieldScheme::Letters;
    const DIVIDES_BY_ZERO: bool = false;

    fn div_checked(&self, rhs: &Self) -> QuiverResult<Self> {
        DecimalContext::DECIMAL128.div(self, rhs)
    }

    fn sqrt(&self) -> QuiverResult<Self> {
        DecimalContext::DECIMAL128.sqrt(self)
    }

    fn is_finite_value(&self) -> bool {
        true
    }

    fn to_value(&self) -> ScalarValue {
        ScalarValue::Decimal(self.clone())
    }

    fn from_value(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Int(v) => BigDecimal::from(*v),
            ScalarValue::Float(v) => BigDecimal::try_from(*v).unwrap_or_else(|_| BigDecimal::zero()),
            ScalarValue::Big(v) => BigDecimal::from(v.clone()),
            ScalarValue::Decimal(v) => v.clone(),
        }
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}
