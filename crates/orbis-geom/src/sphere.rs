//! Sphere.

use orbis_math::{undefined_point, Defined, GeometryError, Point3, Result, Tolerance, EPSILON};

use crate::PointSet;

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Point3,
    /// Radius.
    pub radius: f64,
}

impl Sphere {
    /// Sphere with the given center and radius.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Unit sphere centered at `center`.
    pub fn unit(center: Point3) -> Self {
        Self::new(center, 1.0)
    }

    /// Undefined sphere.
    pub fn undefined() -> Self {
        Self::new(undefined_point(), f64::NAN)
    }

    fn check(&self, point: &Point3) -> Result<()> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Sphere"));
        }
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        Ok(())
    }

    /// True if the radius is one.
    pub fn is_unitary(&self) -> Result<bool> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Sphere"));
        }
        Ok((self.radius - 1.0).abs() < EPSILON)
    }

    /// True if `point` lies on the surface.
    pub fn contains(&self, point: &Point3) -> Result<bool> {
        self.check(point)?;
        let r2 = self.radius * self.radius;
        let squared = (point - self.center).norm_squared();
        Ok(Tolerance::DEFAULT.is_negligible(squared - r2, r2))
    }

    /// True if every point of the set lies on the surface.
    pub fn contains_point_set(&self, points: &PointSet) -> Result<bool> {
        if !points.is_defined() {
            return Err(GeometryError::undefined("Point set"));
        }
        for point in points {
            if !self.contains(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True if `point` lies strictly inside, clear of the surface tolerance.
    pub fn encloses(&self, point: &Point3) -> Result<bool> {
        self.check(point)?;
        let r2 = self.radius * self.radius;
        let squared = (point - self.center).norm_squared();
        Ok(Tolerance::DEFAULT.is_negative(squared - r2, r2))
    }
}

impl Defined for Sphere {
    fn is_defined(&self) -> bool {
        self.center.is_defined() && self.radius.is_defined()
    }
}
