//! Bounded line segment.

use orbis_math::{undefined_point, Defined, GeometryError, Point3, Result, Vec3, EPSILON};

/// Segment between two endpoints. Parameter `t` runs over `[0, 1]` with
/// `at(0) == first` and `at(1) == second`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub first: Point3,
    /// Second endpoint.
    pub second: Point3,
}

impl Segment {
    /// Segment between two points.
    pub fn new(first: Point3, second: Point3) -> Self {
        Self { first, second }
    }

    /// Undefined segment.
    pub fn undefined() -> Self {
        Self::new(undefined_point(), undefined_point())
    }

    fn ensure_defined(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GeometryError::undefined("Segment"))
        }
    }

    /// Unnormalized span `second - first`.
    pub fn span(&self) -> Vec3 {
        self.second - self.first
    }

    /// Evaluate at parameter `t`: `first + t * (second - first)`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.first + t * self.span()
    }

    /// True if both endpoints coincide within tolerance.
    pub fn is_degenerate(&self) -> Result<bool> {
        self.ensure_defined()?;
        Ok(self.span().norm() < EPSILON)
    }

    /// Midpoint.
    pub fn center(&self) -> Result<Point3> {
        self.ensure_defined()?;
        Ok(self.at(0.5))
    }

    /// Unit direction from first to second endpoint.
    pub fn direction(&self) -> Result<Vec3> {
        if self.is_degenerate()? {
            return Err(GeometryError::invalid_argument("segment is degenerate"));
        }
        Ok(self.span().normalize())
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> Result<f64> {
        self.ensure_defined()?;
        Ok(self.span().norm())
    }

    /// Distance from `point` to the closest point of the segment.
    pub fn distance_to(&self, point: &Point3) -> Result<f64> {
        self.ensure_defined()?;
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        let span = self.span();
        let length_squared = span.norm_squared();
        if length_squared < EPSILON * EPSILON {
            return Ok((point - self.first).norm());
        }
        let t = ((point - self.first).dot(&span) / length_squared).clamp(0.0, 1.0);
        Ok((point - self.at(t)).norm())
    }

    /// True if `point` lies on the segment (endpoints included).
    pub fn contains(&self, point: &Point3) -> Result<bool> {
        Ok(self.distance_to(point)? < EPSILON)
    }
}

impl Defined for Segment {
    fn is_defined(&self) -> bool {
        self.first.is_defined() && self.second.is_defined()
    }
}
