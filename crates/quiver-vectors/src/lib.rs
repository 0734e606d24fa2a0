//! Quiver Vector Library
//!
//! Fixed- and variable-dimension vectors, quaternions, and the
//! cross-representation equality/conversion layer. Fixed-dimension vectors
//! and quaternions are immutable values and freely shareable across
//! threads; [`VectorN`] is the one mutable type and needs exclusive access
//! for mutation.

// =============================================================================
// Modules
// =============================================================================

pub mod convert;
pub mod equality;
pub mod quaternion;
pub mod vecn;
pub mod vector;

// =============================================================================
// Re-exports
// =============================================================================

pub use equality::{values_eq, NumericSeq};
pub use quaternion::{Quaternion, Quaternionb, Quaternionf, Quaternioni, Quaternionm};
pub use vecn::VectorN;
pub use vector::{
    Vector, Vector2, Vector2b, Vector2f, Vector2i, Vector2m, Vector3, Vector3b, Vector3f,
    Vector3i, Vector3m, Vector4, Vector4b, Vector4f, Vector4i, Vector4m, Vector5,
};
