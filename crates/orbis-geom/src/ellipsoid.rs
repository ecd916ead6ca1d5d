//! Oriented ellipsoid.
//!
//! The orientation quaternion maps world components to body components
//! (see [`Quaternion::rotate_vector`]). Local coordinates are body
//! coordinates divided by the semi-axes, so the ellipsoid surface is the
//! unit sphere in local space.

use orbis_math::{
    undefined_point, Defined, GeometryError, Point3, Quaternion, Result, Tolerance, Vec3,
};

/// An ellipsoid given by center, three semi-axis lengths and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    center: Point3,
    semi_axes: [f64; 3],
    orientation: Quaternion,
}

impl Ellipsoid {
    /// Ellipsoid with semi-axes `a`, `b`, `c` along the body X, Y, Z axes.
    pub fn new(center: Point3, a: f64, b: f64, c: f64, orientation: Quaternion) -> Self {
        Self {
            center,
            semi_axes: [a, b, c],
            orientation,
        }
    }

    /// Axis-aligned ellipsoid.
    pub fn aligned(center: Point3, a: f64, b: f64, c: f64) -> Self {
        Self::new(center, a, b, c, Quaternion::unit())
    }

    /// Undefined ellipsoid.
    pub fn undefined() -> Self {
        Self::new(undefined_point(), f64::NAN, f64::NAN, f64::NAN, Quaternion::undefined())
    }

    /// Center point.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Semi-axis lengths along the body X, Y, Z axes.
    pub fn semi_axes(&self) -> [f64; 3] {
        self.semi_axes
    }

    /// Orientation quaternion.
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// World direction of the first principal axis.
    pub fn first_axis(&self) -> Result<Vec3> {
        self.body_axis(Vec3::x())
    }

    /// World direction of the second principal axis.
    pub fn second_axis(&self) -> Result<Vec3> {
        self.body_axis(Vec3::y())
    }

    /// World direction of the third principal axis.
    pub fn third_axis(&self) -> Result<Vec3> {
        self.body_axis(Vec3::z())
    }

    fn body_axis(&self, axis: Vec3) -> Result<Vec3> {
        self.ensure_valid()?;
        self.orientation.conjugate()?.rotate_vector(&axis)
    }

    fn ensure_valid(&self) -> Result<()> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Ellipsoid"));
        }
        if self.semi_axes.iter().any(|&axis| axis <= 0.0) {
            return Err(GeometryError::invalid_argument(format!(
                "ellipsoid semi-axes must be positive, got {:?}",
                self.semi_axes
            )));
        }
        Ok(())
    }

    /// Map a world direction into local space.
    pub fn to_local_direction(&self, vector: &Vec3) -> Result<Vec3> {
        self.ensure_valid()?;
        if !vector.is_defined() {
            return Err(GeometryError::undefined("Vector"));
        }
        let body = self.orientation.rotate_vector(vector)?;
        Ok(Vec3::new(
            body.x / self.semi_axes[0],
            body.y / self.semi_axes[1],
            body.z / self.semi_axes[2],
        ))
    }

    /// Map a world point into local space, where the surface is the unit sphere.
    pub fn to_local(&self, point: &Point3) -> Result<Point3> {
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        Ok(Point3::from(self.to_local_direction(&(point - self.center))?))
    }

    /// Map a local point back to world space.
    pub fn from_local(&self, point: &Point3) -> Result<Point3> {
        self.ensure_valid()?;
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        let body = Vec3::new(
            point.x * self.semi_axes[0],
            point.y * self.semi_axes[1],
            point.z * self.semi_axes[2],
        );
        Ok(self.center + self.orientation.conjugate()?.rotate_vector(&body)?)
    }

    /// True if `point` lies on the surface.
    pub fn contains(&self, point: &Point3) -> Result<bool> {
        let local = self.to_local(point)?;
        Ok(Tolerance::DEFAULT.is_negligible(local.coords.norm_squared() - 1.0, 1.0))
    }

    /// True if `point` lies strictly inside, clear of the surface tolerance.
    pub fn encloses(&self, point: &Point3) -> Result<bool> {
        let local = self.to_local(point)?;
        Ok(Tolerance::DEFAULT.is_negative(local.coords.norm_squared() - 1.0, 1.0))
    }
}

impl Defined for Ellipsoid {
    fn is_defined(&self) -> bool {
        self.center.is_defined()
            && self.semi_axes.iter().all(Defined::is_defined)
            && self.orientation.is_defined()
    }
}
