#![warn(missing_docs)]

//! Geometric object types for the orbis kernel.
//!
//! Every object can be in an undefined state (see [`Defined`]). Plain
//! accessors return stored values as they are; computing operations check
//! their operands and fail with [`GeometryError::UndefinedOperand`].
//!
//! [`Object`] is the closed set of kinds an intersection result can hold.

mod cone;
mod cuboid;
mod ellipsoid;
mod line;
mod line_string;
mod object;
mod plane;
mod point_set;
mod polygon;
mod pyramid;
mod segment;
mod sphere;

pub use cone::Cone;
pub use cuboid::Cuboid;
pub use ellipsoid::Ellipsoid;
pub use line::{Line, Ray};
pub use line_string::LineString;
pub use object::{Object, ObjectKind, ObjectVariant};
pub use plane::Plane;
pub use point_set::PointSet;
pub use polygon::Polygon;
pub use pyramid::Pyramid;
pub use segment::Segment;
pub use sphere::Sphere;

pub use orbis_math::{Defined, GeometryError, Point3, Result, Vec3};

/// Index of the point in `points` closest to `target`. Ties keep the first.
pub(crate) fn closest_index<'a>(
    points: impl IntoIterator<Item = &'a Point3>,
    target: &Point3,
) -> Option<usize> {
    points
        .into_iter()
        .enumerate()
        .map(|(i, p)| (i, (p - target).norm_squared()))
        .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((i, d)),
        })
        .map(|(i, _)| i)
}
