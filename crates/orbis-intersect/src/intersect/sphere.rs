//! Line, ray and segment intersection with a sphere (quadratic equation).

use orbis_geom::{Line, Ray, Segment, Sphere};
use orbis_math::{Defined, GeometryError, Point3, Result};

use super::{quadric_crossings, Parametric};
use crate::Intersection;

fn ensure_defined(sphere: &Sphere) -> Result<()> {
    if sphere.is_defined() {
        Ok(())
    } else {
        Err(GeometryError::undefined("Sphere"))
    }
}

fn crossings(primitive: &Parametric, sphere: &Sphere, only_in_sight: bool) -> Result<Intersection> {
    // |oc + t*d|^2 = 1 in units of the radius.
    let oc = (primitive.origin() - sphere.center) / sphere.radius;
    let d = primitive.span() / sphere.radius;
    let coefficients = [d.dot(&d), 2.0 * oc.dot(&d), oc.dot(&oc) - 1.0];
    let level = |p: &Point3| -> Result<f64> {
        Ok(((p - sphere.center) / sphere.radius).norm_squared() - 1.0)
    };
    quadric_crossings(primitive, coefficients, level, only_in_sight)
}

/// Intersect a line with a sphere.
///
/// Returns `Empty`, a tangent `Point`, or the `PointSet` of both crossings.
pub fn intersect_line_sphere(line: &Line, sphere: &Sphere) -> Result<Intersection> {
    let primitive = Parametric::line(line)?;
    ensure_defined(sphere)?;
    crossings(&primitive, sphere, false)
}

/// Intersect a ray with a sphere.
///
/// A crossing on the ray origin is dropped unless the origin lies strictly
/// inside the sphere. With `only_in_sight`, two crossings collapse to the
/// one nearest the origin.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere, only_in_sight: bool) -> Result<Intersection> {
    let primitive = Parametric::ray(ray)?;
    ensure_defined(sphere)?;
    crossings(&primitive, sphere, only_in_sight)
}

/// Intersect a segment with a sphere.
///
/// Crossings on either endpoint are dropped unless that endpoint lies
/// strictly inside the sphere. A degenerate segment behaves as a point.
pub fn intersect_segment_sphere(segment: &Segment, sphere: &Sphere) -> Result<Intersection> {
    let primitive = Parametric::segment(segment)?;
    ensure_defined(sphere)?;
    if segment.is_degenerate()? {
        return Ok(if sphere.contains(&segment.first)? {
            Intersection::point(segment.first)
        } else {
            Intersection::empty()
        });
    }
    crossings(&primitive, sphere, false)
}

/// True if the line crosses or touches the sphere.
pub fn intersects_line_sphere(line: &Line, sphere: &Sphere) -> Result<bool> {
    Ok(!intersect_line_sphere(line, sphere)?.is_empty())
}

/// True if the ray has a crossing with the sphere.
pub fn intersects_ray_sphere(ray: &Ray, sphere: &Sphere) -> Result<bool> {
    Ok(!intersect_ray_sphere(ray, sphere, false)?.is_empty())
}

/// True if the segment has a crossing with the sphere.
pub fn intersects_segment_sphere(segment: &Segment, sphere: &Sphere) -> Result<bool> {
    Ok(!intersect_segment_sphere(segment, sphere)?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntersectionType;
    use orbis_geom::PointSet;
    use orbis_math::Vec3;

    fn unit() -> Sphere {
        Sphere::unit(Point3::origin())
    }

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_line_through_center() {
        let line = Line::new(p(0.0, 0.0, -5.0), Vec3::z());
        let hit = intersect_line_sphere(&line, &unit()).unwrap();
        assert_eq!(
            hit,
            Intersection::point_set(PointSet::new([p(0.0, 0.0, -1.0), p(0.0, 0.0, 1.0)]))
        );
    }

    #[test]
    fn test_line_behind_still_crosses() {
        // Lines are unbounded: both crossings are behind the origin point.
        let line = Line::new(p(0.0, 0.0, 5.0), Vec3::z());
        let hit = intersect_line_sphere(&line, &unit()).unwrap();
        assert_eq!(hit.intersection_type(), IntersectionType::PointSet);
        assert!(intersects_line_sphere(&line, &unit()).unwrap());
    }

    #[test]
    fn test_line_tangent() {
        let line = Line::new(p(1.0, 0.0, -5.0), Vec3::z());
        let hit = intersect_line_sphere(&line, &unit()).unwrap();
        assert_eq!(hit, Intersection::point(p(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_line_miss() {
        let line = Line::new(p(2.0, 0.0, 0.0), Vec3::z());
        assert!(intersect_line_sphere(&line, &unit()).unwrap().is_empty());
        assert!(!intersects_line_sphere(&line, &unit()).unwrap());
    }

    #[test]
    fn test_ray_from_outside() {
        let ray = Ray::new(p(0.0, 0.0, -5.0), Vec3::z());
        let both = intersect_ray_sphere(&ray, &unit(), false).unwrap();
        assert_eq!(
            both,
            Intersection::point_set(PointSet::new([p(0.0, 0.0, -1.0), p(0.0, 0.0, 1.0)]))
        );
        let near = intersect_ray_sphere(&ray, &unit(), true).unwrap();
        assert_eq!(near, Intersection::point(p(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_ray_pointing_away() {
        let ray = Ray::new(p(0.0, 0.0, 5.0), Vec3::z());
        assert!(intersect_ray_sphere(&ray, &unit(), false).unwrap().is_empty());
        assert!(!intersects_ray_sphere(&ray, &unit()).unwrap());
    }

    #[test]
    fn test_ray_from_center() {
        let ray = Ray::new(Point3::origin(), Vec3::z());
        let hit = intersect_ray_sphere(&ray, &unit(), false).unwrap();
        assert_eq!(hit, Intersection::point(p(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_ray_from_surface_outward_is_empty() {
        let ray = Ray::new(p(0.0, 0.0, 1.0), Vec3::z());
        assert!(intersect_ray_sphere(&ray, &unit(), false).unwrap().is_empty());
    }

    #[test]
    fn test_ray_from_surface_inward_hits_far_side() {
        let ray = Ray::new(p(0.0, 0.0, 1.0), -Vec3::z());
        let hit = intersect_ray_sphere(&ray, &unit(), false).unwrap();
        assert_eq!(hit, Intersection::point(p(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_ray_tangent_at_origin_is_discarded() {
        let ray = Ray::new(p(1.0, 0.0, 0.0), Vec3::z());
        assert!(intersect_ray_sphere(&ray, &unit(), false).unwrap().is_empty());
    }

    #[test]
    fn test_ray_tangent_ahead() {
        let ray = Ray::new(p(1.0, 0.0, -5.0), Vec3::z());
        let hit = intersect_ray_sphere(&ray, &unit(), false).unwrap();
        assert_eq!(hit, Intersection::point(p(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_segment_crossing_both_sides() {
        let segment = Segment::new(p(0.0, 0.0, -2.0), p(0.0, 0.0, 2.0));
        let hit = intersect_segment_sphere(&segment, &unit()).unwrap();
        assert_eq!(
            hit,
            Intersection::point_set(PointSet::new([p(0.0, 0.0, -1.0), p(0.0, 0.0, 1.0)]))
        );
    }

    #[test]
    fn test_segment_leaving_sphere() {
        let segment = Segment::new(Point3::origin(), p(0.0, 0.0, 2.0));
        let hit = intersect_segment_sphere(&segment, &unit()).unwrap();
        assert_eq!(hit, Intersection::point(p(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_segment_inside_or_short() {
        let inside = Segment::new(p(0.0, 0.0, -0.5), p(0.0, 0.0, 0.5));
        assert!(intersect_segment_sphere(&inside, &unit()).unwrap().is_empty());
        let short = Segment::new(p(0.0, 0.0, -5.0), p(0.0, 0.0, -3.0));
        assert!(!intersects_segment_sphere(&short, &unit()).unwrap());
    }

    #[test]
    fn test_segment_ending_on_surface_is_discarded() {
        let segment = Segment::new(p(0.0, 0.0, -3.0), p(0.0, 0.0, -1.0));
        assert!(intersect_segment_sphere(&segment, &unit()).unwrap().is_empty());
    }

    #[test]
    fn test_segment_with_both_ends_on_surface_is_empty() {
        let diameter = Segment::new(p(0.0, 0.0, -1.0), p(0.0, 0.0, 1.0));
        assert!(intersect_segment_sphere(&diameter, &unit()).unwrap().is_empty());

        let chord = Segment::new(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert!(!intersects_segment_sphere(&chord, &unit()).unwrap());
    }

    #[test]
    fn test_segment_from_surface_through_sphere() {
        // The start root is dropped, the far crossing is kept.
        let segment = Segment::new(p(0.0, 0.0, 1.0), p(0.0, 0.0, -3.0));
        let hit = intersect_segment_sphere(&segment, &unit()).unwrap();
        assert_eq!(hit, Intersection::point(p(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_segment_from_center_to_surface_is_empty() {
        // The surface end is not strictly inside, so its root is dropped.
        let outward = Segment::new(Point3::origin(), p(0.0, 0.0, 1.0));
        assert!(intersect_segment_sphere(&outward, &unit()).unwrap().is_empty());
        let inward = Segment::new(p(0.0, 0.0, 1.0), Point3::origin());
        assert!(intersect_segment_sphere(&inward, &unit()).unwrap().is_empty());
    }

    #[test]
    fn test_ray_from_surface_on_earth_sized_sphere() {
        let radius = 6378137.0;
        let sphere = Sphere::new(p(1200.0, -3400.0, 560.0), radius);
        for i in 0..20 {
            let theta = 0.37 + 1.13 * i as f64;
            let phi = 0.21 + 0.77 * i as f64;
            let d = Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());
            let origin = sphere.center + d * radius;

            let outward = Ray::new(origin, d);
            let hit = intersect_ray_sphere(&outward, &sphere, false).unwrap();
            assert!(hit.is_empty(), "outward {i}: {hit:?}");

            let inward = Ray::new(origin, -d);
            let hit = intersect_ray_sphere(&inward, &sphere, false).unwrap();
            let far = hit.as_single::<Point3>().unwrap_or_else(|_| panic!("inward {i}: {hit:?}"));
            assert!((far - (sphere.center - d * radius)).norm() < 1e-6, "inward {i}");
            assert!(sphere.contains(far).unwrap());
        }
    }

    #[test]
    fn test_segment_ends_on_earth_sized_sphere() {
        let radius = 6378137.0;
        let sphere = Sphere::new(Point3::origin(), radius);
        let d = Vec3::new(0.48, -0.6, 0.64);
        let chord = Segment::new(Point3::origin() + d * radius, Point3::origin() - d * radius);
        assert!(intersect_segment_sphere(&chord, &sphere).unwrap().is_empty());

        let through = Segment::new(Point3::origin() + d * radius, Point3::origin() - d * (2.0 * radius));
        let hit = intersect_segment_sphere(&through, &sphere).unwrap();
        assert!(hit.is_single::<Point3>());
    }

    #[test]
    fn test_degenerate_segment() {
        let on = Segment::new(p(0.0, 1.0, 0.0), p(0.0, 1.0, 0.0));
        assert_eq!(
            intersect_segment_sphere(&on, &unit()).unwrap(),
            Intersection::point(p(0.0, 1.0, 0.0))
        );
        let off = Segment::new(Point3::origin(), Point3::origin());
        assert!(intersect_segment_sphere(&off, &unit()).unwrap().is_empty());
    }

    #[test]
    fn test_offset_sphere() {
        let sphere = Sphere::new(p(10.0, -4.0, 2.0), 3.0);
        let ray = Ray::new(p(0.0, -4.0, 2.0), Vec3::x());
        let hit = intersect_ray_sphere(&ray, &sphere, false).unwrap();
        let set = hit.as_single::<PointSet>().unwrap();
        assert!(set.is_near(&PointSet::new([p(7.0, -4.0, 2.0), p(13.0, -4.0, 2.0)]), 1e-12));
        assert!(sphere.contains_point_set(set).unwrap());
    }

    #[test]
    fn test_undefined_operands() {
        assert_eq!(
            intersect_ray_sphere(&Ray::undefined(), &unit(), false),
            Err(GeometryError::undefined("Ray"))
        );
        let ray = Ray::new(Point3::origin(), Vec3::z());
        assert_eq!(
            intersect_ray_sphere(&ray, &Sphere::undefined(), false),
            Err(GeometryError::undefined("Sphere"))
        );
        assert_eq!(
            intersect_segment_sphere(&Segment::undefined(), &unit()),
            Err(GeometryError::undefined("Segment"))
        );
        assert!(intersects_line_sphere(&Line::undefined(), &unit()).is_err());
    }
}
