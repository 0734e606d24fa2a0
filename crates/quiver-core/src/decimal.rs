//! Explicit rounding/precision context for arbitrary-precision decimals.
//!
//! Non-terminating decimal operations (division, square root) must be cut
//! off at a finite precision. The cut-off is carried by an explicit
//! [`DecimalContext`] value rather than ambient configuration, so the same
//! inputs always produce the same digits.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::status::{arithmetic_error, QuiverError, QuiverResult};

/// Newton's method is quadratically convergent; 64 steps is far beyond what
/// any supported precision needs and bounds the iteration unconditionally.
const MAX_NEWTON_STEPS: usize = 64;

const fn precision(digits: u64) -> NonZeroU64 {
    match NonZeroU64::new(digits) {
        Some(p) => p,
        None => panic!("precision must be non-zero"),
    }
}

/// Rounding and precision rules for non-terminating decimal operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalContext {
    /// Significant digits kept in results.
    pub precision: NonZeroU64,
    /// Rounding applied to the first dropped digit.
    pub rounding: RoundingMode,
}

impl DecimalContext {
    /// 34 significant digits with half-even rounding (IEEE 754 decimal128).
    pub const DECIMAL128: DecimalContext = DecimalContext {
        precision: precision(34),
        rounding: RoundingMode::HalfEven,
    };

    pub const fn new(digits: u64, rounding: RoundingMode) -> DecimalContext {
        DecimalContext {
            precision: precision(digits),
            rounding,
        }
    }

    /// Rounds `value` to this context's precision.
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        value.with_precision_round(self.precision, self.rounding)
    }

    /// Division rounded to the context precision.
    ///
    /// Contexts up to 100 significant digits are supported; beyond that the
    /// underlying long division runs out of digits before rounding.
    pub fn div(&self, numerator: &BigDecimal, denominator: &BigDecimal) -> QuiverResult<BigDecimal> {
        if denominator.is_zero() {
            return Err(QuiverError::DivisionByZero);
        }
        Ok(self.round(&(numerator / denominator)))
    }

    /// Square root rounded to the context precision.
    ///
    /// Negative input is an [`QuiverError::Arithmetic`] error.
    pub fn sqrt(&self, value: &BigDecimal) -> QuiverResult<BigDecimal> {
        if value.is_negative() {
            return Err(arithmetic_error("square root of a negative decimal"));
        }
        if value.is_zero() {
            return Ok(BigDecimal::zero());
        }

        // Guard digits: iterate a little wider than the target so the final
        // rounding is decided by converged digits.
        let work = DecimalContext::new(self.precision.get() + 4, self.rounding);
        let half = BigDecimal::new(BigInt::from(5), 1);

        // Newton's (Babylonian) refinement: the next estimate is the average
        // of |estimate| and |value / estimate|, carried out at the working
        // precision until the digits stop moving.
        let mut estimate = initial_estimate(value);
        for _ in 0..MAX_NEWTON_STEPS {
            let quotient = work.round(&(value / &estimate));
            let next = work.round(&((&estimate + quotient) * &half));
            if next == estimate {
                break;
            }
            estimate = next;
        }
        Ok(self.round(&estimate))
    }
}

/// Starting point for the Newton iteration.
///
/// The double-precision square root is correct to ~15 digits whenever the
/// value fits in an f64; outside that range a power of ten with half the
/// decimal exponent keeps the iteration count small.
fn initial_estimate(value: &BigDecimal) -> BigDecimal {
    if let Some(v) = value.to_f64() {
        if v.is_finite() && v > 0.0 {
            if let Ok(estimate) = BigDecimal::try_from(v.sqrt()) {
                if !estimate.is_zero() {
                    return estimate;
                }
            }
        }
    }
    let (_, scale) = value.as_bigint_and_exponent();
    let magnitude = value.digits() as i64 - scale;
    BigDecimal::new(BigInt::one(), -(magnitude / 2))
}
