#![warn(missing_docs)]

//! Math types for the orbis geometry kernel.
//!
//! Thin wrappers around nalgebra providing the value types the
//! intersection engine consumes: points, vectors, angles, rotations,
//! the shared tolerance and the error type.

mod angle;
mod error;
mod quaternion;
mod rotation;

pub use angle::Angle;
pub use error::{GeometryError, Result};
pub use quaternion::{Quaternion, QuaternionFormat};
pub use rotation::{RotationMatrix, RotationVector};

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D space.
pub type Point2 = nalgebra::Point2<f64>;

/// A 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// A 4-component vector.
pub type Vector4 = nalgebra::Vector4<f64>;

/// Shared comparison tolerance for containment, tangency and coincidence checks.
pub const EPSILON: f64 = 1e-12;

/// Values that can exist in an undefined state.
///
/// Undefined scalars are NaN; compound values are undefined as soon as one
/// of their components is.
pub trait Defined {
    /// True if the value holds a usable state.
    fn is_defined(&self) -> bool;
}

impl Defined for f64 {
    fn is_defined(&self) -> bool {
        !self.is_nan()
    }
}

impl Defined for Point3 {
    fn is_defined(&self) -> bool {
        self.coords.iter().all(Defined::is_defined)
    }
}

impl Defined for Vec3 {
    fn is_defined(&self) -> bool {
        self.iter().all(Defined::is_defined)
    }
}

impl Defined for Point2 {
    fn is_defined(&self) -> bool {
        self.coords.iter().all(Defined::is_defined)
    }
}

/// An undefined point (all components NaN).
pub fn undefined_point() -> Point3 {
    Point3::new(f64::NAN, f64::NAN, f64::NAN)
}

/// An undefined vector (all components NaN).
pub fn undefined_vec() -> Vec3 {
    Vec3::new(f64::NAN, f64::NAN, f64::NAN)
}

/// Relative comparison tolerance.
///
/// A residual is negligible when it is within `relative` of the magnitude
/// it was computed from. Magnitudes below 1 are floored at 1, so small
/// geometry falls back to an absolute bound of `relative`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest negligible ratio of residual to magnitude.
    pub relative: f64,
}

impl Tolerance {
    /// Kernel tolerance, [`EPSILON`].
    pub const DEFAULT: Self = Self { relative: EPSILON };

    /// True if `residual` vanishes next to `magnitude`.
    pub fn is_negligible(&self, residual: f64, magnitude: f64) -> bool {
        residual.abs() <= self.relative * magnitude.abs().max(1.0)
    }

    /// True if `residual` is negative and not negligible next to `magnitude`.
    pub fn is_negative(&self, residual: f64, magnitude: f64) -> bool {
        residual < 0.0 && !self.is_negligible(residual, magnitude)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
