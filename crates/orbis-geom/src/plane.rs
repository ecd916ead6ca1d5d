//! Infinite plane.

use orbis_math::{undefined_point, Defined, Dir3, GeometryError, Point3, Result, Vec3, EPSILON};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3,
    /// Unit normal.
    pub normal: Dir3,
}

impl Plane {
    /// Plane through `point` with the given normal (normalized).
    pub fn new(point: Point3, normal: Vec3) -> Self {
        Self {
            point,
            normal: Dir3::new_normalize(normal),
        }
    }

    /// The XY plane through the origin.
    pub fn xy() -> Self {
        Self::new(Point3::origin(), Vec3::z())
    }

    /// Undefined plane.
    pub fn undefined() -> Self {
        Self::new(undefined_point(), Vec3::zeros())
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    pub fn signed_distance(&self, point: &Point3) -> Result<f64> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Plane"));
        }
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        Ok((point - self.point).dot(self.normal.as_ref()))
    }

    /// True if `point` lies on the plane.
    pub fn contains(&self, point: &Point3) -> Result<bool> {
        Ok(self.signed_distance(point)?.abs() < EPSILON)
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project(&self, point: &Point3) -> Result<Point3> {
        let d = self.signed_distance(point)?;
        Ok(point - d * self.normal.as_ref())
    }
}

impl Defined for Plane {
    fn is_defined(&self) -> bool {
        self.point.is_defined() && self.normal.as_ref().is_defined()
    }
}
