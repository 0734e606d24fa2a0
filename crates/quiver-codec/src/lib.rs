//! Quiver Codec Library
//!
//! Symmetric text serialization for every vector and quaternion type:
//! `TypeName{field=value, ...}` with a fixed field order per
//! dimensionality, and `VectorN{values=[...]}` for the variable-dimension
//! type. Encoding delegates to the types' canonical `Display`; decoding is
//! strict and rejects anything that would not round-trip.

// =============================================================================
// Modules
// =============================================================================

pub mod any;
mod parser;
pub mod quaternions;
pub mod traits;
pub mod vectors;

// =============================================================================
// Re-exports
// =============================================================================

pub use any::{decode_any, AnyValue};
pub use traits::{Decode, Encode};
