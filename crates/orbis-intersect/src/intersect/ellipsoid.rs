//! Line, ray and segment intersection with an ellipsoid.
//!
//! The primitive is mapped into the ellipsoid's local space, where the
//! surface is the unit sphere. The map is affine, so the parameter `t` of a
//! crossing is the same in both spaces and points are evaluated in world
//! coordinates directly.

use orbis_geom::{Ellipsoid, Line, Ray, Segment};
use orbis_math::{Defined, GeometryError, Point3, Result};

use super::{quadric_crossings, Parametric};
use crate::Intersection;

fn ensure_defined(ellipsoid: &Ellipsoid) -> Result<()> {
    if ellipsoid.is_defined() {
        Ok(())
    } else {
        Err(GeometryError::undefined("Ellipsoid"))
    }
}

fn crossings(
    primitive: &Parametric,
    ellipsoid: &Ellipsoid,
    only_in_sight: bool,
) -> Result<Intersection> {
    let origin = ellipsoid.to_local(&primitive.origin())?.coords;
    let d = ellipsoid.to_local_direction(&primitive.span())?;
    let coefficients = [d.dot(&d), 2.0 * origin.dot(&d), origin.dot(&origin) - 1.0];
    let level = |p: &Point3| -> Result<f64> {
        Ok(ellipsoid.to_local(p)?.coords.norm_squared() - 1.0)
    };
    quadric_crossings(primitive, coefficients, level, only_in_sight)
}

/// Intersect a line with an ellipsoid.
pub fn intersect_line_ellipsoid(line: &Line, ellipsoid: &Ellipsoid) -> Result<Intersection> {
    let primitive = Parametric::line(line)?;
    ensure_defined(ellipsoid)?;
    crossings(&primitive, ellipsoid, false)
}

/// Intersect a ray with an ellipsoid.
///
/// Same endpoint and `only_in_sight` rules as [`super::intersect_ray_sphere`].
pub fn intersect_ray_ellipsoid(
    ray: &Ray,
    ellipsoid: &Ellipsoid,
    only_in_sight: bool,
) -> Result<Intersection> {
    let primitive = Parametric::ray(ray)?;
    ensure_defined(ellipsoid)?;
    crossings(&primitive, ellipsoid, only_in_sight)
}

/// Intersect a segment with an ellipsoid.
pub fn intersect_segment_ellipsoid(segment: &Segment, ellipsoid: &Ellipsoid) -> Result<Intersection> {
    let primitive = Parametric::segment(segment)?;
    ensure_defined(ellipsoid)?;
    if segment.is_degenerate()? {
        return Ok(if ellipsoid.contains(&segment.first)? {
            Intersection::point(segment.first)
        } else {
            Intersection::empty()
        });
    }
    crossings(&primitive, ellipsoid, false)
}

/// True if the line crosses or touches the ellipsoid.
pub fn intersects_line_ellipsoid(line: &Line, ellipsoid: &Ellipsoid) -> Result<bool> {
    Ok(!intersect_line_ellipsoid(line, ellipsoid)?.is_empty())
}

/// True if the ray has a crossing with the ellipsoid.
pub fn intersects_ray_ellipsoid(ray: &Ray, ellipsoid: &Ellipsoid) -> Result<bool> {
    Ok(!intersect_ray_ellipsoid(ray, ellipsoid, false)?.is_empty())
}

/// True if the segment has a crossing with the ellipsoid.
pub fn intersects_segment_ellipsoid(segment: &Segment, ellipsoid: &Ellipsoid) -> Result<bool> {
    Ok(!intersect_segment_ellipsoid(segment, ellipsoid)?.is_empty())
}
