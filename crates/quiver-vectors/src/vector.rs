//! Fixed-dimension vectors over any scalar backend.
//!
//! One const-generic type covers every backend/dimension combination; the
//! per-backend behavior (zero-denominator policy, square-root rule, codec
//! conventions) lives behind the [`Scalar`] trait. Values are immutable:
//! every operation returns a freshly constructed vector.

use std::array;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use num_traits::{Bounded, One, Zero};

use quiver_core::scalar::field_names;
use quiver_core::status::arithmetic_error;
use quiver_core::{BigDecimal, BigInt, QuiverError, QuiverResult, Scalar};

use crate::quaternion::Quaternion;

/// A fixed-dimensionality immutable vector.
///
/// Components are stored in serialization order: `[x, y]`, `[x, y, z]`,
/// `[w, x, y, z]`, `[v, w, x, y, z]`.
#[derive(Debug, Clone)]
pub struct Vector<T: Scalar, const N: usize> {
    components: [T; N],
}

// 64-bit float family (the unsuffixed types).
pub type Vector2 = Vector<f64, 2>;
pub type Vector3 = Vector<f64, 3>;
pub type Vector4 = Vector<f64, 4>;
pub type Vector5 = Vector<f64, 5>;

// 32-bit float family.
pub type Vector2f = Vector<f32, 2>;
pub type Vector3f = Vector<f32, 3>;
pub type Vector4f = Vector<f32, 4>;

// Machine-integer family.
pub type Vector2i = Vector<i32, 2>;
pub type Vector3i = Vector<i32, 3>;
pub type Vector4i = Vector<i32, 4>;

// Arbitrary-precision integer family.
pub type Vector2b = Vector<BigInt, 2>;
pub type Vector3b = Vector<BigInt, 3>;
pub type Vector4b = Vector<BigInt, 4>;

// Arbitrary-precision decimal family.
pub type Vector2m = Vector<BigDecimal, 2>;
pub type Vector3m = Vector<BigDecimal, 3>;
pub type Vector4m = Vector<BigDecimal, 4>;

/// One component of the Hamilton product of two `[w, x, y, z]` slices.
///
/// Left-multiplication convention: `a` is the left factor. Shared by the
/// 4- and 5-dimension vector products, the quaternion type, and the
/// variable-dimension vector.
pub(crate) fn hamilton<T: Scalar>(a: &[T], b: &[T], i: usize) -> T {
    let (aw, ax, ay, az) = (&a[0], &a[1], &a[2], &a[3]);
    let (bw, bx, by, bz) = (&b[0], &b[1], &b[2], &b[3]);
    match i {
        0 => {
            aw.clone() * bw.clone()
                - ax.clone() * bx.clone()
                - ay.clone() * by.clone()
                - az.clone() * bz.clone()
        }
        1 => {
            aw.clone() * bx.clone() + ax.clone() * bw.clone() + ay.clone() * bz.clone()
                - az.clone() * by.clone()
        }
        2 => {
            aw.clone() * by.clone() - ax.clone() * bz.clone()
                + ay.clone() * bw.clone()
                + az.clone() * bx.clone()
        }
        _ => {
            aw.clone() * bz.clone() + ax.clone() * by.clone() - ay.clone() * bx.clone()
                + az.clone() * bw.clone()
        }
    }
}

pub(crate) fn clamp_component<T: Scalar>(value: &T, lower: &T, upper: &T) -> T {
    if value < lower {
        lower.clone()
    } else if value > upper {
        upper.clone()
    } else {
        value.clone()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Relaxed construction for operation results.
    ///
    /// Arithmetic on floating backends may legitimately produce non-finite
    /// components (overflow, quaternion-derived values); those paths bypass
    /// the checked constructor.
    pub(crate) fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// Creates a vector from its components.
    ///
    /// Fails with [`QuiverError::Format`] if a floating component is
    /// non-finite; exact backends never fail.
    pub fn from_components(components: [T; N]) -> QuiverResult<Self> {
        if let Some(index) = components.iter().position(|c| !c.is_finite_value()) {
            return Err(QuiverError::Format(format!(
                "non-finite component at index {}",
                index
            )));
        }
        Ok(Self { components })
    }

    /// Creates a vector with all components set to the same value.
    pub fn splat(value: T) -> QuiverResult<Self> {
        Self::from_components(array::from_fn(|_| value.clone()))
    }

    /// The zero vector (additive identity).
    pub fn zero() -> Self {
        Self::from_array(array::from_fn(|_| T::zero()))
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        N
    }

    /// Borrows the component array.
    pub fn components(&self) -> &[T; N] {
        &self.components
    }

    /// Iterates over the components in serialization order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    fn zip_with<F: FnMut(&T, &T) -> T>(&self, rhs: &Self, mut f: F) -> Self {
        Self::from_array(array::from_fn(|i| f(&self.components[i], &rhs.components[i])))
    }

    /// Applies `f` to each component.
    pub fn map<F: FnMut(&T) -> T>(&self, mut f: F) -> Self {
        Self::from_array(array::from_fn(|i| f(&self.components[i])))
    }

    /// Component-wise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a.clone() + b.clone())
    }

    /// Component-wise difference.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a.clone() - b.clone())
    }

    /// Adds a scalar to each component.
    pub fn add_scalar(&self, scalar: &T) -> Self {
        self.map(|c| c.clone() + scalar.clone())
    }

    /// Subtracts a scalar from each component.
    pub fn sub_scalar(&self, scalar: &T) -> Self {
        self.map(|c| c.clone() - scalar.clone())
    }

    /// Multiplies each component by a scalar.
    pub fn mul_scalar(&self, scalar: &T) -> Self {
        self.map(|c| c.clone() * scalar.clone())
    }

    /// Divides each component by a scalar.
    ///
    /// Exact backends fail with [`QuiverError::DivisionByZero`] on a zero
    /// denominator; IEEE backends produce infinities or NaN instead.
    pub fn div_scalar(&self, scalar: &T) -> QuiverResult<Self> {
        if !T::DIVIDES_BY_ZERO && scalar.is_zero() {
            return Err(QuiverError::DivisionByZero);
        }
        Ok(self.map(|c| c.clone() / scalar.clone()))
    }

    /// The dimension-specific vector product.
    ///
    /// Complex product in dimension 2, Hamilton product on `[w, x, y, z]`
    /// in dimension 4, graded product in dimension 5 (the scalar slot `v`
    /// multiplies through, the remaining slot follows the Hamilton rule).
    /// Dimension 3 has no canonical product and fails with
    /// [`QuiverError::UnsupportedOperation`]; use `cross` or `dot`.
    pub fn mul(&self, rhs: &Self) -> QuiverResult<Self> {
        match N {
            2 => Ok(self.mul_complex(rhs)),
            4 => Ok(self.mul_hamilton(rhs)),
            5 => Ok(self.mul_graded(rhs)),
            _ => Err(QuiverError::UnsupportedOperation(format!(
                "no canonical vector product in dimension {}; use `dot` or `cross`",
                N
            ))),
        }
    }

    fn mul_complex(&self, rhs: &Self) -> Self {
        let (a, b) = (&self.components, &rhs.components);
        Self::from_array(array::from_fn(|i| match i {
            0 => a[0].clone() * b[0].clone() - a[1].clone() * b[1].clone(),
            _ => a[0].clone() * b[1].clone() + a[1].clone() * b[0].clone(),
        }))
    }

    fn mul_hamilton(&self, rhs: &Self) -> Self {
        Self::from_array(array::from_fn(|i| {
            hamilton(&self.components, &rhs.components, i)
        }))
    }

    fn mul_graded(&self, rhs: &Self) -> Self {
        let (a, b) = (&self.components, &rhs.components);
        Self::from_array(array::from_fn(|i| match i {
            0 => a[0].clone() * b[0].clone(),
            _ => hamilton(&a[1..], &b[1..], i - 1),
        }))
    }

    /// Sum of pairwise component products.
    pub fn dot(&self, rhs: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc = acc + self.components[i].clone() * rhs.components[i].clone();
        }
        acc
    }

    /// Squared Euclidean magnitude. Never fails.
    pub fn norm2(&self) -> T {
        self.dot(self)
    }

    /// Euclidean magnitude.
    ///
    /// Integer backends take the floor square root; the decimal backend
    /// rounds to its precision context.
    pub fn norm(&self) -> QuiverResult<T> {
        Scalar::sqrt(&self.norm2())
    }

    /// L1 magnitude (sum of absolute component values). Never fails.
    pub fn norm_manhattan(&self) -> T {
        let mut acc = T::zero();
        for c in &self.components {
            acc = acc + c.abs();
        }
        acc
    }

    /// Scales to unit magnitude.
    ///
    /// Fails with [`QuiverError::Arithmetic`] on a zero-magnitude vector;
    /// there is no implicit fallback.
    pub fn normalize(&self) -> QuiverResult<Self> {
        let magnitude = self.norm()?;
        if magnitude.is_zero() {
            return Err(arithmetic_error("cannot normalize a zero-magnitude vector"));
        }
        self.div_scalar(&magnitude)
    }

    /// Component-wise negation.
    pub fn negate(&self) -> Self {
        self.map(|c| -c.clone())
    }

    /// Component-wise minimum.
    pub fn min(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| if a <= b { a.clone() } else { b.clone() })
    }

    /// Component-wise maximum.
    pub fn max(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| if a >= b { a.clone() } else { b.clone() })
    }

    /// Clamps each component between the matching components of `lower`
    /// and `upper`.
    pub fn clamp(&self, lower: &Self, upper: &Self) -> Self {
        Self::from_array(array::from_fn(|i| {
            clamp_component(&self.components[i], &lower.components[i], &upper.components[i])
        }))
    }

    /// Euclidean distance to `rhs`.
    pub fn distance(&self, rhs: &Self) -> QuiverResult<T> {
        self.sub(rhs).norm()
    }

    /// Squared Euclidean distance to `rhs`. Never fails.
    pub fn distance2(&self, rhs: &Self) -> T {
        self.sub(rhs).norm2()
    }

    /// L1 distance to `rhs`. Never fails.
    pub fn distance_manhattan(&self, rhs: &Self) -> T {
        self.sub(rhs).norm_manhattan()
    }
}

impl<T: Scalar + Bounded, const N: usize> Vector<T, N> {
    /// Vector of the backend's smallest representable value.
    ///
    /// Only bounded backends (machine integers and floats) have one; the
    /// arbitrary-precision backends are unbounded.
    pub fn min_value() -> Self {
        Self::from_array(array::from_fn(|_| T::min_value()))
    }

    /// Vector of the backend's largest representable value.
    pub fn max_value() -> Self {
        Self::from_array(array::from_fn(|_| T::max_value()))
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new(x: T, y: T) -> QuiverResult<Self> {
        Self::from_components([x, y])
    }

    pub fn x(&self) -> &T {
        &self.components[0]
    }

    pub fn y(&self) -> &T {
        &self.components[1]
    }

    pub fn unit_x() -> Self {
        Self::from_array([T::one(), T::zero()])
    }

    pub fn unit_y() -> Self {
        Self::from_array([T::zero(), T::one()])
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> QuiverResult<Self> {
        Self::from_components([x, y, z])
    }

    pub fn x(&self) -> &T {
        &self.components[0]
    }

    pub fn y(&self) -> &T {
        &self.components[1]
    }

    pub fn z(&self) -> &T {
        &self.components[2]
    }

    pub fn unit_x() -> Self {
        Self::from_array([T::one(), T::zero(), T::zero()])
    }

    pub fn unit_y() -> Self {
        Self::from_array([T::zero(), T::one(), T::zero()])
    }

    pub fn unit_z() -> Self {
        Self::from_array([T::zero(), T::zero(), T::one()])
    }

    /// Standard 3D cross product.
    pub fn cross(&self, rhs: &Self) -> Self {
        let (a, b) = (&self.components, &rhs.components);
        Self::from_array([
            a[1].clone() * b[2].clone() - a[2].clone() * b[1].clone(),
            a[2].clone() * b[0].clone() - a[0].clone() * b[2].clone(),
            a[0].clone() * b[1].clone() - a[1].clone() * b[0].clone(),
        ])
    }

    /// Rotates by a quaternion via conjugation:
    /// `q · pure(self) · conj(q)`, imaginary part extracted.
    ///
    /// The result is only a rotation when `rotation` has unit magnitude;
    /// unit-ness is the caller's responsibility.
    pub fn rotate(&self, rotation: &Quaternion<T>) -> Self {
        rotation
            .mul(&Quaternion::from_vector(self))
            .mul(&rotation.conjugate())
            .vector()
    }
}

impl<T: Scalar> Vector<T, 4> {
    pub fn new(w: T, x: T, y: T, z: T) -> QuiverResult<Self> {
        Self::from_components([w, x, y, z])
    }

    pub fn w(&self) -> &T {
        &self.components[0]
    }

    pub fn x(&self) -> &T {
        &self.components[1]
    }

    pub fn y(&self) -> &T {
        &self.components[2]
    }

    pub fn z(&self) -> &T {
        &self.components[3]
    }

    pub fn unit_w() -> Self {
        Self::from_array([T::one(), T::zero(), T::zero(), T::zero()])
    }

    pub fn unit_x() -> Self {
        Self::from_array([T::zero(), T::one(), T::zero(), T::zero()])
    }

    pub fn unit_y() -> Self {
        Self::from_array([T::zero(), T::zero(), T::one(), T::zero()])
    }

    pub fn unit_z() -> Self {
        Self::from_array([T::zero(), T::zero(), T::zero(), T::one()])
    }
}

impl<T: Scalar> Vector<T, 5> {
    pub fn new(v: T, w: T, x: T, y: T, z: T) -> QuiverResult<Self> {
        Self::from_components([v, w, x, y, z])
    }

    pub fn v(&self) -> &T {
        &self.components[0]
    }

    pub fn w(&self) -> &T {
        &self.components[1]
    }

    pub fn x(&self) -> &T {
        &self.components[2]
    }

    pub fn y(&self) -> &T {
        &self.components[3]
    }

    pub fn z(&self) -> &T {
        &self.components[4]
    }

    pub fn unit_v() -> Self {
        Self::from_array([T::one(), T::zero(), T::zero(), T::zero(), T::zero()])
    }

    pub fn unit_w() -> Self {
        Self::from_array([T::zero(), T::one(), T::zero(), T::zero(), T::zero()])
    }

    pub fn unit_x() -> Self {
        Self::from_array([T::zero(), T::zero(), T::one(), T::zero(), T::zero()])
    }

    pub fn unit_y() -> Self {
        Self::from_array([T::zero(), T::zero(), T::zero(), T::one(), T::zero()])
    }

    pub fn unit_z() -> Self {
        Self::from_array([T::zero(), T::zero(), T::zero(), T::zero(), T::one()])
    }
}

// =============================================================================
// Operator sugar
// =============================================================================

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;

    fn add(self, rhs: &'b Vector<T, N>) -> Vector<T, N> {
        Vector::add(self, rhs)
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, rhs: &'b Vector<T, N>) -> Vector<T, N> {
        Vector::sub(self, rhs)
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Mul<&'b T> for &'a Vector<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, scalar: &'b T) -> Vector<T, N> {
        self.mul_scalar(scalar)
    }
}

impl<'a, T: Scalar, const N: usize> Neg for &'a Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(self) -> Vector<T, N> {
        self.negate()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

// =============================================================================
// Canonical text form
// =============================================================================

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{}{}{{", N, T::SUFFIX)?;
        match field_names(T::FIELDS, N) {
            Some(names) => {
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", name, self.components[i].render_text())?;
                }
            }
            // Dimensionalities outside the named-field grammar fall back to
            // the list form used by the variable-dimension type.
            None => {
                write!(f, "values=[")?;
                for (i, c) in self.components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c.render_text())?;
                }
                write!(f, "]")?;
            }
        }
        write!(f, "}}")
    }
}
