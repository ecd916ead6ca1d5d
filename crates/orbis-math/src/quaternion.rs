//! Rotation quaternions.
//!
//! Products follow the Shuster convention: `q ⊗ p` composes rotations so
//! that `(q ⊗ p) * v == q * (p * v)` holds for frame transformations, and
//! [`Quaternion::rotate_vector`] evaluates `q ⊗ (v, 0) ⊗ q⁻¹`. The rotation
//! built from a rotation vector therefore rotates the *frame* by the given
//! angle; use its [`conjugate`](Quaternion::conjugate) to rotate a vector
//! actively.
//!
//! All operations are pure: they return new values and never mutate `self`.

use std::ops::{Mul, Neg};

use crate::{Angle, Defined, GeometryError, Result, RotationMatrix, RotationVector, Vec3, Vector4, EPSILON};

/// Component ordering used when reading or writing four raw components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionFormat {
    /// Vector part first, scalar last.
    XYZS,
    /// Scalar first, vector part last.
    SXYZ,
}

/// A quaternion `(x, y, z, s)` with vector part `(x, y, z)` and scalar part `s`.
#[derive(Debug, Clone, Copy)]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    s: f64,
}

impl Quaternion {
    /// Build from four components in the given ordering.
    pub fn new(a: f64, b: f64, c: f64, d: f64, format: QuaternionFormat) -> Self {
        match format {
            QuaternionFormat::XYZS => Self { x: a, y: b, z: c, s: d },
            QuaternionFormat::SXYZ => Self { x: b, y: c, z: d, s: a },
        }
    }

    /// Build from components in `(x, y, z, s)` order.
    pub fn xyzs(x: f64, y: f64, z: f64, s: f64) -> Self {
        Self { x, y, z, s }
    }

    /// Build from a 4-vector in the given ordering.
    pub fn from_vector(vector: &Vector4, format: QuaternionFormat) -> Self {
        Self::new(vector[0], vector[1], vector[2], vector[3], format)
    }

    /// Build from a vector part and a scalar part.
    pub fn from_parts(vector_part: Vec3, scalar_part: f64) -> Self {
        Self {
            x: vector_part.x,
            y: vector_part.y,
            z: vector_part.z,
            s: scalar_part,
        }
    }

    /// The identity rotation.
    pub fn unit() -> Self {
        Self::xyzs(0.0, 0.0, 0.0, 1.0)
    }

    /// Undefined quaternion.
    pub fn undefined() -> Self {
        Self::xyzs(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// First vector component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second vector component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Third vector component.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Scalar component.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Vector part `(x, y, z)`.
    pub fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Scalar part `s`.
    pub fn scalar_part(&self) -> f64 {
        self.s
    }

    fn squared_norm(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.s * self.s
    }

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> Result<f64> {
        self.ensure_defined()?;
        Ok(self.squared_norm().sqrt())
    }

    /// True if the squared norm is 1 within [`EPSILON`].
    pub fn is_unitary(&self) -> Result<bool> {
        self.ensure_defined()?;
        Ok((self.squared_norm() - 1.0).abs() <= EPSILON)
    }

    fn ensure_defined(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GeometryError::undefined("Quaternion"))
        }
    }

    fn product(&self, other: &Quaternion, cross_sign: f64) -> Quaternion {
        let left = self.vector_part();
        let right = other.vector_part();
        let vector_part = other.s * left + self.s * right + cross_sign * left.cross(&right);
        let scalar_part = self.s * other.s - left.dot(&right);
        Quaternion::from_parts(vector_part, scalar_part)
    }

    /// Quaternion product used for rotation composition.
    pub fn cross_multiply(&self, other: &Quaternion) -> Result<Quaternion> {
        self.ensure_defined()?;
        other.ensure_defined()?;
        Ok(self.product(other, -1.0))
    }

    /// Hamilton product with the opposite cross-term sign.
    pub fn dot_multiply(&self, other: &Quaternion) -> Result<Quaternion> {
        self.ensure_defined()?;
        other.ensure_defined()?;
        Ok(self.product(other, 1.0))
    }

    /// `self ⊗ other⁻¹`.
    pub fn divide(&self, other: &Quaternion) -> Result<Quaternion> {
        self.ensure_defined()?;
        other.ensure_defined()?;
        if other.squared_norm().sqrt() < EPSILON {
            return Err(GeometryError::algorithmic(
                "cannot divide by quaternion with zero norm",
            ));
        }
        self.cross_multiply(&other.inverse()?)
    }

    /// Rotate a vector: vector part of `q ⊗ (v, 0) ⊗ q⁻¹`.
    ///
    /// Requires a unitary quaternion.
    pub fn rotate_vector(&self, vector: &Vec3) -> Result<Vec3> {
        self.ensure_defined()?;
        if !vector.is_defined() {
            return Err(GeometryError::undefined("Vector"));
        }
        if !self.is_unitary()? {
            return Err(GeometryError::algorithmic(format!(
                "quaternion with norm [{}] is not unitary",
                self.squared_norm().sqrt()
            )));
        }
        let pure = Quaternion::from_parts(*vector, 0.0);
        Ok(self.product(&pure, -1.0).product(&self.conjugate()?, -1.0).vector_part())
    }

    /// Scaled to unit norm.
    pub fn normalized(&self) -> Result<Quaternion> {
        self.ensure_defined()?;
        let norm = self.squared_norm().sqrt();
        if norm < EPSILON {
            return Err(GeometryError::algorithmic("quaternion norm is zero"));
        }
        Ok(Self::xyzs(self.x / norm, self.y / norm, self.z / norm, self.s / norm))
    }

    /// Vector part negated.
    pub fn conjugate(&self) -> Result<Quaternion> {
        self.ensure_defined()?;
        Ok(Self::xyzs(-self.x, -self.y, -self.z, self.s))
    }

    /// Multiplicative inverse `q* / |q|²`.
    pub fn inverse(&self) -> Result<Quaternion> {
        self.ensure_defined()?;
        let reduced_norm = self.squared_norm();
        if reduced_norm < EPSILON {
            return Err(GeometryError::algorithmic("quaternion norm is zero"));
        }
        Ok(Self::xyzs(
            -self.x / reduced_norm,
            -self.y / reduced_norm,
            -self.z / reduced_norm,
            self.s / reduced_norm,
        ))
    }

    /// Representative with a non-negative scalar part.
    pub fn rectified(&self) -> Result<Quaternion> {
        self.ensure_defined()?;
        Ok(if self.s < 0.0 { -*self } else { *self })
    }

    /// Rotation angle separating two unit quaternions, in `[0, π]`.
    pub fn angular_difference_with(&self, other: &Quaternion) -> Result<Angle> {
        if !self.is_unitary()? || !other.is_unitary()? {
            return Err(GeometryError::algorithmic("quaternion is not unitary"));
        }
        let delta = self.divide(other)?.normalized()?;
        Ok(Angle::radians(2.0 * delta.s.abs().min(1.0).acos()))
    }

    /// True if the rotations differ by at most `angular_tolerance`.
    pub fn is_near(&self, other: &Quaternion, angular_tolerance: &Angle) -> Result<bool> {
        if !angular_tolerance.is_defined() {
            return Err(GeometryError::undefined("Angular tolerance"));
        }
        let difference = self.angular_difference_with(other)?;
        Ok(difference.in_radians_between(0.0) <= angular_tolerance.in_radians_between(0.0))
    }

    /// Components as a 4-vector in the given ordering.
    pub fn to_vector(&self, format: QuaternionFormat) -> Result<Vector4> {
        self.ensure_defined()?;
        Ok(match format {
            QuaternionFormat::XYZS => Vector4::new(self.x, self.y, self.z, self.s),
            QuaternionFormat::SXYZ => Vector4::new(self.s, self.x, self.y, self.z),
        })
    }

    /// Parse four numbers separated by commas and/or whitespace, optionally bracketed.
    pub fn parse(text: &str, format: QuaternionFormat) -> Result<Quaternion> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GeometryError::undefined("String"));
        }
        let inner = trimmed.trim_start_matches('[').trim_end_matches(']');
        let components = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|err| {
                    GeometryError::invalid_argument(format!("cannot parse [{token}]: {err}"))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        match components.as_slice() {
            &[a, b, c, d] => Ok(Quaternion::new(a, b, c, d, format)),
            other => Err(GeometryError::invalid_argument(format!(
                "expected 4 components, found {}",
                other.len()
            ))),
        }
    }

    /// Rotation from a rotation vector: `(sin(θ/2)·axis, cos(θ/2))`, normalized.
    pub fn from_rotation_vector(rotation_vector: &RotationVector) -> Result<Quaternion> {
        if !rotation_vector.is_defined() {
            return Err(GeometryError::undefined("Rotation vector"));
        }
        let half_angle = rotation_vector.angle().in_radians() / 2.0;
        let vector_part = half_angle.sin() * rotation_vector.axis();
        Quaternion::from_parts(vector_part, half_angle.cos()).normalized()
    }

    /// Rotation from a rotation matrix.
    ///
    /// Branches on the largest of the trace and the diagonal entries to keep
    /// the leading component away from cancellation.
    pub fn from_rotation_matrix(matrix: &RotationMatrix) -> Result<Quaternion> {
        if !matrix.is_defined() {
            return Err(GeometryError::undefined("Rotation matrix"));
        }
        let m = matrix.matrix();
        let trace = m.trace();
        let (m11, m12, m13) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
        let (m21, m22, m23) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
        let (m31, m32, m33) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);

        let q = if trace >= m11 && trace >= m22 && trace >= m33 {
            Quaternion::xyzs(m23 - m32, m31 - m13, m12 - m21, 1.0 + trace)
        } else if m11 >= trace && m11 >= m22 && m11 >= m33 {
            Quaternion::xyzs(1.0 + 2.0 * m11 - trace, m12 + m21, m13 + m31, m23 - m32)
        } else if m22 >= m11 && m22 >= trace && m22 >= m33 {
            Quaternion::xyzs(m21 + m12, 1.0 + 2.0 * m22 - trace, m23 + m32, m31 - m13)
        } else if m33 >= m11 && m33 >= m22 && m33 >= trace {
            Quaternion::xyzs(m31 + m13, m32 + m23, 1.0 + 2.0 * m33 - trace, m12 - m21)
        } else {
            return Err(GeometryError::algorithmic(
                "rotation matrix cannot be converted into quaternion",
            ));
        };

        q.normalized()
    }
}

impl Defined for Quaternion {
    fn is_defined(&self) -> bool {
        self.x.is_defined() && self.y.is_defined() && self.z.is_defined() && self.s.is_defined()
    }
}

/// `q` and `-q` encode the same rotation and compare equal.
impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }
        let same = self.x == other.x && self.y == other.y && self.z == other.z && self.s == other.s;
        let antipodal =
            self.x == -other.x && self.y == -other.y && self.z == -other.z && self.s == -other.s;
        same || antipodal
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::xyzs(-self.x, -self.y, -self.z, -self.s)
    }
}

/// Unchecked [`Quaternion::cross_multiply`]: undefined operands give an undefined product.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.product(&rhs, -1.0)
    }
}
