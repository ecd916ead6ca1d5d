//! Infinite lines and half-lines.

use orbis_math::{undefined_point, Defined, Dir3, GeometryError, Point3, Result, Vec3, EPSILON};

/// Distance from `point` to the line through `origin` along unit `direction`.
fn distance_to_line(origin: &Point3, direction: &Dir3, point: &Point3) -> f64 {
    (point - origin).cross(direction.as_ref()).norm()
}

/// An infinite line through `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// A point on the line.
    pub origin: Point3,
    /// Unit direction.
    pub direction: Dir3,
}

impl Line {
    /// Create a line. The direction is normalized; a zero direction yields
    /// an undefined line.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
        }
    }

    /// Line through two points.
    pub fn between(first: Point3, second: Point3) -> Self {
        Self::new(first, second - first)
    }

    /// Undefined line.
    pub fn undefined() -> Self {
        Self::new(undefined_point(), Vec3::zeros())
    }

    /// Evaluate the line at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }

    /// Distance from `point` to the line.
    pub fn distance_to(&self, point: &Point3) -> Result<f64> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Line"));
        }
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        Ok(distance_to_line(&self.origin, &self.direction, point))
    }

    /// True if `point` lies on the line.
    pub fn contains(&self, point: &Point3) -> Result<bool> {
        Ok(self.distance_to(point)? < EPSILON)
    }
}

impl Defined for Line {
    fn is_defined(&self) -> bool {
        self.origin.is_defined() && self.direction.as_ref().is_defined()
    }
}

/// A half-line starting at `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
        }
    }

    /// Undefined ray.
    pub fn undefined() -> Self {
        Self::new(undefined_point(), Vec3::zeros())
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }

    /// The supporting line.
    pub fn to_line(&self) -> Line {
        Line {
            origin: self.origin,
            direction: self.direction,
        }
    }

    /// True if `point` lies on the ray (origin included).
    pub fn contains(&self, point: &Point3) -> Result<bool> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Ray"));
        }
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        let offset = point - self.origin;
        Ok(distance_to_line(&self.origin, &self.direction, point) < EPSILON
            && offset.dot(self.direction.as_ref()) > -EPSILON)
    }
}

impl Defined for Ray {
    fn is_defined(&self) -> bool {
        self.origin.is_defined() && self.direction.as_ref().is_defined()
    }
}
