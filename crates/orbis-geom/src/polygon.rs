//! Planar polygon embedded in 3D.

use orbis_math::{undefined_point, undefined_vec, Defined, GeometryError, Point2, Point3, Result, Vec3};

use crate::Plane;

/// A planar polygon given by 2D vertices in a local frame.
///
/// A vertex `(u, v)` maps to `origin + u * x_axis + v * y_axis`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    origin: Point3,
    x_axis: Vec3,
    y_axis: Vec3,
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Polygon with the given frame. Axes are normalized.
    pub fn new(vertices: Vec<Point2>, origin: Point3, x_axis: Vec3, y_axis: Vec3) -> Self {
        Self {
            origin,
            x_axis: x_axis.normalize(),
            y_axis: y_axis.normalize(),
            vertices,
        }
    }

    /// Undefined polygon.
    pub fn undefined() -> Self {
        Self {
            origin: undefined_point(),
            x_axis: undefined_vec(),
            y_axis: undefined_vec(),
            vertices: Vec::new(),
        }
    }

    /// Frame origin.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Local X axis.
    pub fn x_axis(&self) -> Vec3 {
        self.x_axis
    }

    /// Local Y axis.
    pub fn y_axis(&self) -> Vec3 {
        self.y_axis
    }

    /// Vertices in the local frame.
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of edges (equal to the vertex count).
    pub fn edge_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in world coordinates.
    pub fn vertices_3d(&self) -> Result<Vec<Point3>> {
        self.ensure_defined()?;
        Ok(self
            .vertices
            .iter()
            .map(|v| self.origin + v.x * self.x_axis + v.y * self.y_axis)
            .collect())
    }

    /// Unit normal `x_axis × y_axis`.
    pub fn normal(&self) -> Result<Vec3> {
        self.ensure_defined()?;
        Ok(self.x_axis.cross(&self.y_axis).normalize())
    }

    /// Supporting plane.
    pub fn plane(&self) -> Result<Plane> {
        Ok(Plane::new(self.origin, self.normal()?))
    }

    fn ensure_defined(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GeometryError::undefined("Polygon"))
        }
    }
}

impl Defined for Polygon {
    fn is_defined(&self) -> bool {
        self.vertices.len() >= 3
            && self.vertices.iter().all(Defined::is_defined)
            && self.origin.is_defined()
            && self.x_axis.is_defined()
            && self.y_axis.is_defined()
    }
}
