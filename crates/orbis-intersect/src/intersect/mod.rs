//! Line, ray and segment intersection algorithms.
//!
//! Each target solid has a dedicated module. Sphere and ellipsoid share the
//! quadratic pipeline below: the primitive is written as
//! `origin + t * span`, the implicit surface equation becomes a quadratic
//! in `t`, and the real roots inside the primitive's parameter range are
//! turned into points.
//!
//! Coefficients are always those of the solid mapped onto the unit sphere,
//! so every tolerance below is relative to the size of the solid.
//!
//! A root that lands on a bounding endpoint (ray origin, segment ends) is
//! discarded unless that endpoint lies strictly inside the solid.

mod ellipsoid;
mod plane;
mod sphere;

pub use ellipsoid::{
    intersect_line_ellipsoid, intersect_ray_ellipsoid, intersect_segment_ellipsoid,
    intersects_line_ellipsoid, intersects_ray_ellipsoid, intersects_segment_ellipsoid,
};
pub use plane::{
    intersect_line_plane, intersect_ray_plane, intersect_segment_plane, intersects_line_plane,
    intersects_ray_plane, intersects_segment_plane,
};
pub use sphere::{
    intersect_line_sphere, intersect_ray_sphere, intersect_segment_sphere,
    intersects_line_sphere, intersects_ray_sphere, intersects_segment_sphere,
};

use orbis_geom::{Line, PointSet, Ray, Segment};
use orbis_math::{Defined, GeometryError, Point3, Result, Tolerance, Vec3, EPSILON};
use tracing::{trace, warn};

use crate::solve::real_roots;
use crate::targets::INTERSECT;
use crate::Intersection;

/// Largest local distance between an endpoint on the surface and the root
/// it produces. Tangent roots move by the square root of the residual.
const ENDPOINT_REACH: f64 = 1e-6;

/// Parameter range of a linear primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extent {
    Line,
    Ray,
    Segment,
}

/// A line, ray or segment as `origin + t * span`.
///
/// Lines and rays use their unit direction as span; segments use
/// `second - first` so that `t` runs over `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Parametric {
    origin: Point3,
    end: Point3,
    span: Vec3,
    extent: Extent,
}

impl Parametric {
    pub(crate) fn line(line: &Line) -> Result<Self> {
        if !line.is_defined() {
            return Err(GeometryError::undefined("Line"));
        }
        Ok(Self {
            origin: line.origin,
            end: line.origin,
            span: line.direction.into_inner(),
            extent: Extent::Line,
        })
    }

    pub(crate) fn ray(ray: &Ray) -> Result<Self> {
        if !ray.is_defined() {
            return Err(GeometryError::undefined("Ray"));
        }
        Ok(Self {
            origin: ray.origin,
            end: ray.origin,
            span: ray.direction.into_inner(),
            extent: Extent::Ray,
        })
    }

    pub(crate) fn segment(segment: &Segment) -> Result<Self> {
        if !segment.is_defined() {
            return Err(GeometryError::undefined("Segment"));
        }
        Ok(Self {
            origin: segment.first,
            end: segment.second,
            span: segment.span(),
            extent: Extent::Segment,
        })
    }

    pub(crate) fn origin(&self) -> Point3 {
        self.origin
    }

    pub(crate) fn span(&self) -> Vec3 {
        self.span
    }

    pub(crate) fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.span
    }

    /// True if `t` lies in the parameter range, with a small allowance so
    /// that roots on an endpoint reach the discard rule.
    fn admits(&self, t: f64) -> bool {
        let slack = EPSILON / self.span.norm().max(EPSILON);
        match self.extent {
            Extent::Line => true,
            Extent::Ray => t >= -slack,
            Extent::Segment => t >= -slack && t <= 1.0 + slack,
        }
    }

    /// Endpoints bounding the parameter range, with their parameters.
    fn endpoints(&self) -> Vec<(f64, Point3)> {
        match self.extent {
            Extent::Line => Vec::new(),
            Extent::Ray => vec![(0.0, self.origin)],
            Extent::Segment => vec![(0.0, self.origin), (1.0, self.end)],
        }
    }
}

/// Crossings of a primitive with a quadric surface.
///
/// `[a, b, c]` are the coefficients of `level(origin + t * span)` with
/// `a > 0`, where `level` is the squared local radius minus one: negative
/// inside the solid, zero on its surface. An endpoint whose level is
/// negligible lies on the surface and its own root is dropped. When
/// `only_in_sight` is set, two crossings collapse to the one with the
/// smaller parameter.
pub(crate) fn quadric_crossings(
    primitive: &Parametric,
    [a, b, c]: [f64; 3],
    level: impl Fn(&Point3) -> Result<f64>,
    only_in_sight: bool,
) -> Result<Intersection> {
    let tolerance = Tolerance::DEFAULT;
    let mut roots = real_roots(a, b, c);
    trace!(target: INTERSECT, ?roots, extent = ?primitive.extent, "quadratic roots");

    // Local distance travelled per unit of t.
    let stretch = a.sqrt();

    for (t_end, endpoint) in primitive.endpoints() {
        if !tolerance.is_negligible(level(&endpoint)?, 1.0) {
            continue;
        }
        let nearest = roots
            .iter()
            .enumerate()
            .min_by(|(_, x), (_, y)| (*x - t_end).abs().total_cmp(&(*y - t_end).abs()))
            .map(|(i, &t)| (i, t));
        if let Some((i, t)) = nearest {
            if (t - t_end).abs() * stretch <= ENDPOINT_REACH {
                trace!(target: INTERSECT, t, ?endpoint, "discarding root on endpoint");
                roots.remove(i);
            }
        }
    }

    let mut kept: Vec<f64> = Vec::with_capacity(roots.len());
    for t in roots {
        if !primitive.admits(t) {
            continue;
        }
        let duplicate = kept
            .iter()
            .any(|&other| tolerance.is_negligible((t - other) * stretch, 1.0));
        if !duplicate {
            kept.push(t);
        }
    }

    match kept.as_slice() {
        [] => Ok(Intersection::empty()),
        [t] => Ok(Intersection::point(primitive.at(*t))),
        [t0, _] if only_in_sight => Ok(Intersection::point(primitive.at(*t0))),
        [t0, t1] => Ok(Intersection::point_set(PointSet::new([
            primitive.at(*t0),
            primitive.at(*t1),
        ]))),
        _ => {
            warn!(target: INTERSECT, roots = ?kept, "quadratic solve returned too many roots");
            Err(GeometryError::algorithmic(format!(
                "intersection algorithm has failed with {} roots",
                kept.len()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parametric_segment_range() {
        let segment = Segment::new(Point3::origin(), Point3::new(0.0, 0.0, 2.0));
        let p = Parametric::segment(&segment).unwrap();
        assert_eq!(p.at(1.0), Point3::new(0.0, 0.0, 2.0));
        assert!(p.admits(0.0));
        assert!(p.admits(1.0));
        assert!(!p.admits(1.1));
        assert!(!p.admits(-0.1));
        assert_eq!(
            p.endpoints(),
            vec![(0.0, Point3::origin()), (1.0, Point3::new(0.0, 0.0, 2.0))]
        );
    }

    #[test]
    fn test_parametric_ray_range() {
        let p = Parametric::ray(&Ray::new(Point3::origin(), Vec3::z())).unwrap();
        assert!(p.admits(0.0));
        assert!(p.admits(1e9));
        assert!(!p.admits(-1e-6));
        assert_eq!(p.endpoints(), vec![(0.0, Point3::origin())]);
    }

    #[test]
    fn test_parametric_undefined() {
        assert_eq!(
            Parametric::line(&Line::undefined()).unwrap_err(),
            GeometryError::undefined("Line")
        );
        assert!(Parametric::ray(&Ray::undefined()).is_err());
        assert!(Parametric::segment(&Segment::undefined()).is_err());
    }

    #[test]
    fn test_quadric_crossings_only_in_sight() {
        // t² - 4 t + 3 = (t - 1)(t - 3) along +Z.
        let p = Parametric::ray(&Ray::new(Point3::origin(), Vec3::z())).unwrap();
        let outside = |_: &Point3| -> Result<f64> { Ok(3.0) };
        let near = quadric_crossings(&p, [1.0, -4.0, 3.0], outside, true).unwrap();
        assert_eq!(near, Intersection::point(Point3::new(0.0, 0.0, 1.0)));
        let both = quadric_crossings(&p, [1.0, -4.0, 3.0], outside, false).unwrap();
        assert!(both.is_single::<PointSet>());
    }

    #[test]
    fn test_quadric_crossings_drop_only_the_endpoint_root() {
        // t (t - 2): the origin is on the surface, the far root survives.
        let p = Parametric::ray(&Ray::new(Point3::origin(), Vec3::z())).unwrap();
        let on_surface = |_: &Point3| -> Result<f64> { Ok(0.0) };
        let hit = quadric_crossings(&p, [1.0, -2.0, 0.0], on_surface, false).unwrap();
        assert_eq!(hit, Intersection::point(Point3::new(0.0, 0.0, 2.0)));

        // A root off the origin is kept even when the origin is on the surface.
        let hit = quadric_crossings(&p, [1.0, -4.0, 3.0], on_surface, false).unwrap();
        assert!(hit.is_single::<PointSet>());

        // An enclosed origin keeps its root.
        let inside = |_: &Point3| -> Result<f64> { Ok(-1.0) };
        let hit = quadric_crossings(&p, [1.0, -2.0, 0.0], inside, false).unwrap();
        assert!(hit.is_single::<PointSet>());
    }
}
