//! Quaternion rotation primitive.
//!
//! Present for every scalar backend; 3-vectors embed as pure quaternions
//! (zero real part) and rotate via conjugation. Construction is not
//! finiteness-checked: quaternion-derived values are the relaxed domain of
//! the floating backends' finite-component invariant.

use std::fmt;

use num_traits::{One, Zero};

use quiver_core::status::arithmetic_error;
use quiver_core::{BigDecimal, BigInt, FieldScheme, QuiverResult, Scalar};

use crate::vector::{hamilton, Vector};

/// A rotation quaternion with real part `w` and imaginary parts `x, y, z`.
///
/// The unparameterized name is the 64-bit float quaternion, like the
/// unsuffixed vector aliases.
#[derive(Debug, Clone)]
pub struct Quaternion<T: Scalar = f64> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Quaternionf = Quaternion<f32>;
pub type Quaternioni = Quaternion<i32>;
pub type Quaternionb = Quaternion<BigInt>;
pub type Quaternionm = Quaternion<BigDecimal>;

impl<T: Scalar> Quaternion<T> {
    /// Creates a quaternion from its four components.
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Embeds a 3-vector as a pure quaternion (zero real part).
    pub fn from_vector(vector: &Vector<T, 3>) -> Self {
        Self::new(
            T::zero(),
            vector.x().clone(),
            vector.y().clone(),
            vector.z().clone(),
        )
    }

    /// Extracts the imaginary part as a 3-vector.
    pub fn vector(&self) -> Vector<T, 3> {
        Vector::from_array([self.x.clone(), self.y.clone(), self.z.clone()])
    }

    /// Hamilton product, with `self` as the left factor.
    ///
    /// Non-commutative; the left-multiplication convention fixes the
    /// rotation direction and must not be swapped.
    pub fn mul(&self, rhs: &Self) -> Self {
        let a = [
            self.w.clone(),
            self.x.clone(),
            self.y.clone(),
            self.z.clone(),
        ];
        let b = [rhs.w.clone(), rhs.x.clone(), rhs.y.clone(), rhs.z.clone()];
        Self::new(
            hamilton(&a, &b, 0),
            hamilton(&a, &b, 1),
            hamilton(&a, &b, 2),
            hamilton(&a, &b, 3),
        )
    }

    /// Negates the imaginary part.
    pub fn conjugate(&self) -> Self {
        Self::new(
            self.w.clone(),
            -self.x.clone(),
            -self.y.clone(),
            -self.z.clone(),
        )
    }

    /// Squared magnitude. Never fails.
    pub fn norm2(&self) -> T {
        self.w.clone() * self.w.clone()
            + self.x.clone() * self.x.clone()
            + self.y.clone() * self.y.clone()
            + self.z.clone() * self.z.clone()
    }

    /// Magnitude, under the backend's square-root rules.
    pub fn norm(&self) -> QuiverResult<T> {
        Scalar::sqrt(&self.norm2())
    }

    /// Scales to unit magnitude.
    ///
    /// Fails with an arithmetic error on a zero-magnitude quaternion.
    pub fn normalize(&self) -> QuiverResult<Self> {
        let magnitude = self.norm()?;
        if magnitude.is_zero() {
            return Err(arithmetic_error(
                "cannot normalize a zero-magnitude quaternion",
            ));
        }
        Ok(Self::new(
            self.w.clone() / magnitude.clone(),
            self.x.clone() / magnitude.clone(),
            self.y.clone() / magnitude.clone(),
            self.z.clone() / magnitude.clone(),
        ))
    }

    /// Copies into another backend, converting per component.
    pub fn cast<U: Scalar>(&self) -> Quaternion<U> {
        Quaternion::new(
            U::from_value(&self.w.to_value()),
            U::from_value(&self.x.to_value()),
            U::from_value(&self.y.to_value()),
            U::from_value(&self.z.to_value()),
        )
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Machine backends use w,x,y,z; arbitrary-precision backends use
        // the letter scheme, like their vectors.
        let names = match T::FIELDS {
            FieldScheme::Axes => ["w", "x", "y", "z"],
            FieldScheme::Letters => ["a", "b", "c", "d"],
        };
        write!(
            f,
            "Quaternion{}{{{}={}, {}={}, {}={}, {}={}}}",
            T::SUFFIX,
            names[0],
            self.w.render_text(),
            names[1],
            self.x.render_text(),
            names[2],
            self.y.render_text(),
            names[3],
            self.z.render_text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector3, Vector3i};

    type QuaternionD = Quaternion<f64>;

    #[test]
    fn test_identity_and_pure() {
        let q = QuaternionD::identity();
        assert_eq!(q.w, 1.0);
        assert_eq!(q.vector(), Vector3::zero());

        let v = Vector3::new(1.0, 2.0, 3.0).unwrap();
        let pure = QuaternionD::from_vector(&v);
        assert_eq!(pure.w, 0.0);
        assert_eq!(pure.vector(), v);
    }

    #[test]
    fn test_hamilton_product_basis() {
        let i = QuaternionD::new(0.0, 1.0, 0.0, 0.0);
        let j = QuaternionD::new(0.0, 0.0, 1.0, 0.0);
        let k = QuaternionD::new(0.0, 0.0, 0.0, 1.0);

        // i*j = k, j*k = i, k*i = j
        assert_eq!(i.mul(&j), k);
        assert_eq!(j.mul(&k), i);
        assert_eq!(k.mul(&i), j);
        // Reversed order negates: j*i = -k (= conj(k), since k is pure).
        assert_eq!(j.mul(&i), k.conjugate());
        // i*i = -1
        let minus_one = QuaternionD::new(-1.0, 0.0, 0.0, 0.0);
        assert_eq!(i.mul(&i), minus_one);
    }

    #[test]
    fn test_conjugate() {
        let q = QuaternionD::new(1.0, 2.0, 3.0, 4.0);
        let c = q.conjugate();
        assert_eq!(c.w, 1.0);
        assert_eq!(c.x, -2.0);
        assert_eq!(c.y, -3.0);
        assert_eq!(c.z, -4.0);
        assert_eq!(c.conjugate(), q);
    }

    #[test]
    fn test_norm_and_normalize() {
        let q = QuaternionD::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(q.norm2(), 4.0);
        assert_eq!(q.norm().unwrap(), 2.0);
        let n = q.normalize().unwrap();
        assert_eq!(n, QuaternionD::new(0.5, 0.5, 0.5, 0.5));
        assert!(QuaternionD::new(0.0, 0.0, 0.0, 0.0).normalize().is_err());
    }

    #[test]
    fn test_rotation_about_z() {
        // Unit quaternion for a 90-degree rotation about +z.
        let half = std::f64::consts::FRAC_PI_4;
        let q = QuaternionD::new(half.cos(), 0.0, 0.0, half.sin());
        let rotated = Vector3::unit_x().rotate(&q);
        let expected = Vector3::unit_y();
        for i in 0..3 {
            assert!(
                (rotated[i] - expected[i]).abs() < 1e-12,
                "component {} was {}",
                i,
                rotated[i]
            );
        }
    }

    #[test]
    fn test_integer_rotation_half_turn() {
        // 180 degrees about +z is exact in integers: (x, y, z) -> (-x, -y, z).
        let q = Quaternioni::new(0, 0, 0, 1);
        let v = Vector3i::new(3, -4, 5).unwrap();
        assert_eq!(v.rotate(&q), Vector3i::new(-3, 4, 5).unwrap());
    }

    #[test]
    fn test_cast() {
        let q = QuaternionD::new(1.9, -2.9, 0.5, 4.0);
        let cast: Quaternioni = q.cast();
        assert_eq!(cast.w, 1);
        assert_eq!(cast.x, -2);
        assert_eq!(cast.y, 0);
        assert_eq!(cast.z, 4);
    }

    #[test]
    fn test_display() {
        let q = QuaternionD::new(1.0, 0.0, 0.5, -1.0);
        assert_eq!(q.to_string(), "Quaternion{w=1, x=0, y=0.5, z=-1}");
        let q = Quaternioni::new(1, 2, 3, 4);
        assert_eq!(q.to_string(), "Quaternioni{w=1, x=2, y=3, z=4}");
        let q = Quaternionb::new(
            BigInt::from(1),
            BigInt::from(2),
            BigInt::from(3),
            BigInt::from(4),
        );
        assert_eq!(q.to_string(), "Quaternionb{a=1, b=2, c=3, d=4}");
    }
}
