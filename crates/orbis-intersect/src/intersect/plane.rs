//! Line, ray and segment intersection with a plane (closed-form).

use orbis_geom::{Line, Object, Plane, Ray, Segment};
use orbis_math::{Defined, GeometryError, Result, EPSILON};

use super::Parametric;
use crate::Intersection;

/// Crossing of a primitive with a plane.
///
/// A primitive lying in the plane yields `itself`; a parallel one off the
/// plane yields `Empty`.
fn crossing(primitive: &Parametric, plane: &Plane, itself: Object) -> Result<Intersection> {
    if !plane.is_defined() {
        return Err(GeometryError::undefined("Plane"));
    }
    let normal = plane.normal.as_ref();
    let span = primitive.span();
    let distance = plane.signed_distance(&primitive.origin())?;
    let rate = span.dot(normal);

    // Parallel to the plane.
    if rate.abs() < EPSILON * span.norm() {
        return Ok(if distance.abs() < EPSILON {
            Intersection::object(itself)
        } else {
            Intersection::empty()
        });
    }

    let t = -distance / rate;
    if !primitive.admits(t) {
        return Ok(Intersection::empty());
    }
    Ok(Intersection::point(primitive.at(t)))
}

/// Intersect a line with a plane: `Empty`, a `Point`, or the `Line` itself.
pub fn intersect_line_plane(line: &Line, plane: &Plane) -> Result<Intersection> {
    crossing(&Parametric::line(line)?, plane, (*line).into())
}

/// Intersect a ray with a plane: `Empty`, a `Point`, or the `Ray` itself.
pub fn intersect_ray_plane(ray: &Ray, plane: &Plane) -> Result<Intersection> {
    crossing(&Parametric::ray(ray)?, plane, (*ray).into())
}

/// Intersect a segment with a plane: `Empty`, a `Point`, or the `Segment` itself.
///
/// A degenerate segment behaves as a point.
pub fn intersect_segment_plane(segment: &Segment, plane: &Plane) -> Result<Intersection> {
    let primitive = Parametric::segment(segment)?;
    if !plane.is_defined() {
        return Err(GeometryError::undefined("Plane"));
    }
    if segment.is_degenerate()? {
        return Ok(if plane.contains(&segment.first)? {
            Intersection::point(segment.first)
        } else {
            Intersection::empty()
        });
    }
    crossing(&primitive, plane, (*segment).into())
}

/// True if the line meets the plane.
pub fn intersects_line_plane(line: &Line, plane: &Plane) -> Result<bool> {
    Ok(!intersect_line_plane(line, plane)?.is_empty())
}

/// True if the ray meets the plane.
pub fn intersects_ray_plane(ray: &Ray, plane: &Plane) -> Result<bool> {
    Ok(!intersect_ray_plane(ray, plane)?.is_empty())
}

/// True if the segment meets the plane.
pub fn intersects_segment_plane(segment: &Segment, plane: &Plane) -> Result<bool> {
    Ok(!intersect_segment_plane(segment, plane)?.is_empty())
}
