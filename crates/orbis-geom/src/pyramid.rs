//! Pyramid with a polygonal base.

use orbis_math::{undefined_point, Defined, GeometryError, Point2, Point3, Result};

use crate::Polygon;

/// A pyramid given by its base polygon and apex.
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    base: Polygon,
    apex: Point3,
}

impl Pyramid {
    /// Pyramid over `base` with the given apex.
    pub fn new(base: Polygon, apex: Point3) -> Self {
        Self { base, apex }
    }

    /// Undefined pyramid.
    pub fn undefined() -> Self {
        Self::new(Polygon::undefined(), undefined_point())
    }

    /// Base polygon.
    pub fn base(&self) -> &Polygon {
        &self.base
    }

    /// Apex point.
    pub fn apex(&self) -> Point3 {
        self.apex
    }

    /// Triangular side faces, one per base edge.
    ///
    /// Each face has its frame origin on the edge start, its X axis along
    /// the edge and the apex on its positive Y side.
    pub fn lateral_faces(&self) -> Result<Vec<Polygon>> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Pyramid"));
        }
        let corners = self.base.vertices_3d()?;
        let count = corners.len();

        (0..count)
            .map(|i| {
                let start = corners[i];
                let edge = corners[(i + 1) % count] - start;
                let to_apex = self.apex - start;
                let x_axis = edge.normalize();
                let normal_part = to_apex - to_apex.dot(&x_axis) * x_axis;
                if normal_part.norm() < orbis_math::EPSILON {
                    return Err(GeometryError::invalid_argument("apex lies on a base edge"));
                }
                let y_axis = normal_part.normalize();
                Ok(Polygon::new(
                    vec![
                        Point2::origin(),
                        Point2::new(edge.norm(), 0.0),
                        Point2::new(to_apex.dot(&x_axis), to_apex.dot(&y_axis)),
                    ],
                    start,
                    x_axis,
                    y_axis,
                ))
            })
            .collect()
    }
}

impl Defined for Pyramid {
    fn is_defined(&self) -> bool {
        self.base.is_defined() && self.apex.is_defined()
    }
}
