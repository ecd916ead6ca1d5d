//! Rotation vectors and rotation matrices.
//!
//! Both follow the frame-rotation convention of [`Quaternion`]: the matrix
//! built from a quaternion `q` satisfies `M * v == q.rotate_vector(v)`.

use crate::{Angle, Defined, GeometryError, Matrix3, Quaternion, Result, Vec3, EPSILON};

/// A rotation expressed as a unit axis and an angle about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationVector {
    axis: Vec3,
    angle: Angle,
}

impl RotationVector {
    /// Rotation of `angle` about `axis`. The axis is normalized.
    pub fn new(axis: Vec3, angle: Angle) -> Self {
        Self {
            axis: axis.normalize(),
            angle,
        }
    }

    /// Zero rotation about X.
    pub fn unit() -> Self {
        Self::new(Vec3::x(), Angle::zero())
    }

    /// Undefined rotation vector.
    pub fn undefined() -> Self {
        Self {
            axis: crate::undefined_vec(),
            angle: Angle::undefined(),
        }
    }

    /// Unit rotation axis.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Rotation angle.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Axis-angle form of a rotation quaternion.
    ///
    /// The quaternion is normalized and rectified first so the angle lies in `[0, π]`.
    /// A zero rotation reports the X axis.
    pub fn from_quaternion(quaternion: &Quaternion) -> Result<Self> {
        let q = quaternion.normalized()?.rectified()?;
        let angle = 2.0 * q.scalar_part().min(1.0).acos();
        let vector_part = q.vector_part();
        let sin_half = vector_part.norm();
        if sin_half < EPSILON {
            return Ok(Self::new(Vec3::x(), Angle::radians(angle)));
        }
        Ok(Self::new(vector_part / sin_half, Angle::radians(angle)))
    }
}

impl Defined for RotationVector {
    fn is_defined(&self) -> bool {
        self.axis.is_defined() && self.angle.is_defined()
    }
}

/// A 3x3 rotation matrix.
#[derive(Debug, Clone, Copy)]
pub struct RotationMatrix {
    matrix: Matrix3,
}

impl RotationMatrix {
    /// Wrap a matrix. Orthonormality is not checked.
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// Identity rotation.
    pub fn unit() -> Self {
        Self::new(Matrix3::identity())
    }

    /// Undefined matrix (all entries NaN).
    pub fn undefined() -> Self {
        Self::new(Matrix3::from_element(f64::NAN))
    }

    /// Build from three row vectors.
    pub fn rows(first: Vec3, second: Vec3, third: Vec3) -> Self {
        Self::new(Matrix3::from_rows(&[
            first.transpose(),
            second.transpose(),
            third.transpose(),
        ]))
    }

    /// Build from three column vectors.
    pub fn columns(first: Vec3, second: Vec3, third: Vec3) -> Self {
        Self::new(Matrix3::from_columns(&[first, second, third]))
    }

    /// Underlying matrix.
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Entry at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        if row > 2 || column > 2 {
            return Err(GeometryError::invalid_argument(format!(
                "index ({row}, {column}) is out of bounds"
            )));
        }
        Ok(self.matrix[(row, column)])
    }

    /// Row at `index`.
    pub fn row_at(&self, index: usize) -> Result<Vec3> {
        if index > 2 {
            return Err(GeometryError::invalid_argument(format!("row {index} is out of bounds")));
        }
        Ok(self.matrix.row(index).transpose())
    }

    /// Column at `index`.
    pub fn column_at(&self, index: usize) -> Result<Vec3> {
        if index > 2 {
            return Err(GeometryError::invalid_argument(format!("column {index} is out of bounds")));
        }
        Ok(self.matrix.column(index).into_owned())
    }

    /// Transposed (inverse) rotation.
    pub fn transposed(&self) -> Result<Self> {
        self.ensure_defined()?;
        Ok(Self::new(self.matrix.transpose()))
    }

    /// Matrix product `self * other`.
    pub fn compose(&self, other: &RotationMatrix) -> Result<Self> {
        self.ensure_defined()?;
        other.ensure_defined()?;
        Ok(Self::new(self.matrix * other.matrix))
    }

    /// Matrix-vector product.
    pub fn rotate_vector(&self, vector: &Vec3) -> Result<Vec3> {
        self.ensure_defined()?;
        if !vector.is_defined() {
            return Err(GeometryError::undefined("Vector"));
        }
        Ok(self.matrix * vector)
    }

    /// True if every entry differs by at most `tolerance`.
    pub fn is_near(&self, other: &RotationMatrix, tolerance: f64) -> bool {
        self.is_defined()
            && other.is_defined()
            && self
                .matrix
                .iter()
                .zip(other.matrix.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    fn ensure_defined(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GeometryError::undefined("Rotation matrix"))
        }
    }

    /// Direction cosine matrix of a rotation quaternion (normalized first).
    pub fn from_quaternion(quaternion: &Quaternion) -> Result<Self> {
        let q = quaternion.normalized()?;
        let (x, y, z, s) = (q.x(), q.y(), q.z(), q.s());

        Ok(Self::new(Matrix3::new(
            s * s + x * x - y * y - z * z,
            2.0 * (x * y + s * z),
            2.0 * (x * z - s * y),
            2.0 * (x * y - s * z),
            s * s - x * x + y * y - z * z,
            2.0 * (y * z + s * x),
            2.0 * (x * z + s * y),
            2.0 * (y * z - s * x),
            s * s - x * x - y * y + z * z,
        )))
    }

    /// Rotation matrix of a rotation vector.
    pub fn from_rotation_vector(rotation_vector: &RotationVector) -> Result<Self> {
        Self::from_quaternion(&Quaternion::from_rotation_vector(rotation_vector)?)
    }
}

impl Defined for RotationMatrix {
    fn is_defined(&self) -> bool {
        self.matrix.iter().all(Defined::is_defined)
    }
}

impl PartialEq for RotationMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.matrix == other.matrix
    }
}
