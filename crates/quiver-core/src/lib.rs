//! Quiver Core Library
//!
//! Scalar backends and shared numeric infrastructure for the quiver vector
//! algebra library: the error type, the [`Scalar`] trait with its machine
//! and arbitrary-precision implementations, the cross-representation
//! comparable value, and the explicit decimal rounding context.

// =============================================================================
// Core modules
// =============================================================================

pub mod decimal;
pub mod math;
pub mod scalar;
pub mod status;
pub mod value;

// =============================================================================
// Re-exports
// =============================================================================

pub use decimal::DecimalContext;
pub use scalar::{field_names, FieldScheme, Scalar};
pub use status::{QuiverError, QuiverResult};
pub use value::ScalarValue;

// The arbitrary-precision component types are part of the public surface;
// re-export them so downstream crates name one version of each.
pub use bigdecimal::{BigDecimal, RoundingMode};
pub use num_bigint::BigInt;
