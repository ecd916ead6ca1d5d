#![warn(missing_docs)]

//! 3D geometry intersection kernel.
//!
//! Re-exports the orbis crates and adds [`IntersectionWith`], which gives
//! every supported pair of objects method-call syntax.
//!
//! # Example
//!
//! ```
//! use orbis::prelude::*;
//!
//! let sphere = Sphere::unit(Point3::origin());
//! let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::z());
//!
//! let hit = ray.intersection_with(&sphere).unwrap();
//! assert_eq!(hit.intersection_type(), IntersectionType::PointSet);
//! assert!(ray.intersects(&sphere).unwrap());
//! ```

pub use orbis_geom;
pub use orbis_intersect;
pub use orbis_math;

use orbis_geom::{Cone, Ellipsoid, Line, Plane, Ray, Segment, Sphere};
use orbis_intersect::intersect::*;
use orbis_intersect::lateral::{intersect_cone_ellipsoid, intersect_cone_sphere};
use orbis_intersect::{Intersection, LateralSurfaceSettings};
use orbis_math::Result;

/// Commonly used types.
pub mod prelude {
    pub use crate::IntersectionWith;
    pub use orbis_geom::{
        Cone, Cuboid, Ellipsoid, Line, LineString, Object, ObjectKind, Plane, PointSet, Polygon,
        Pyramid, Ray, Segment, Sphere,
    };
    pub use orbis_intersect::{Composite, Intersection, IntersectionType, LateralSurfaceSettings};
    pub use orbis_math::{
        Angle, Defined, GeometryError, Point3, Quaternion, QuaternionFormat, Result, RotationMatrix,
        RotationVector, Vec3, EPSILON,
    };
}

/// Intersection of `Self` with another object.
///
/// Rays report every crossing (`only_in_sight` off) and cones use
/// [`LateralSurfaceSettings::default`]. Call the functions in
/// [`orbis_intersect`] directly for other settings.
pub trait IntersectionWith<T> {
    /// Intersection of `self` with `other`.
    fn intersection_with(&self, other: &T) -> Result<Intersection>;

    /// True if the intersection is not empty.
    fn intersects(&self, other: &T) -> Result<bool> {
        Ok(!self.intersection_with(other)?.is_empty())
    }
}

macro_rules! intersection_with {
    ($($lhs:ty, $rhs:ty => |$a:ident, $b:ident| $body:expr;)*) => {
        $(
            impl IntersectionWith<$rhs> for $lhs {
                fn intersection_with(&self, other: &$rhs) -> Result<Intersection> {
                    let ($a, $b) = (self, other);
                    $body
                }
            }
        )*
    };
}

intersection_with! {
    Line, Sphere => |a, b| intersect_line_sphere(a, b);
    Ray, Sphere => |a, b| intersect_ray_sphere(a, b, false);
    Segment, Sphere => |a, b| intersect_segment_sphere(a, b);
    Line, Ellipsoid => |a, b| intersect_line_ellipsoid(a, b);
    Ray, Ellipsoid => |a, b| intersect_ray_ellipsoid(a, b, false);
    Segment, Ellipsoid => |a, b| intersect_segment_ellipsoid(a, b);
    Line, Plane => |a, b| intersect_line_plane(a, b);
    Ray, Plane => |a, b| intersect_ray_plane(a, b);
    Segment, Plane => |a, b| intersect_segment_plane(a, b);
    Cone, Sphere => |a, b| intersect_cone_sphere(a, b, &LateralSurfaceSettings::default());
    Cone, Ellipsoid => |a, b| intersect_cone_ellipsoid(a, b, &LateralSurfaceSettings::default());
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_method_syntax_matches_free_functions() {
        let sphere = Sphere::unit(Point3::origin());
        let segment = Segment::new(Point3::new(0.0, 0.0, -2.0), Point3::new(0.0, 0.0, 2.0));
        assert_eq!(
            segment.intersection_with(&sphere).unwrap(),
            orbis_intersect::intersect::intersect_segment_sphere(&segment, &sphere).unwrap()
        );
        assert!(!Line::new(Point3::new(0.0, 0.0, 3.0), Vec3::x())
            .intersects(&Plane::xy())
            .unwrap());
    }

    #[test]
    fn test_cone_uses_default_settings() {
        let cone = Cone::new(Point3::origin(), Vec3::z(), Angle::degrees(30.0));
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 3.0);
        let hit = cone.intersection_with(&sphere).unwrap();
        let curves = hit.composite().object_count().unwrap();
        assert_eq!(curves, 2);
        let first = hit.composite().object_at(0).unwrap();
        let ring = first.as_variant::<LineString>().unwrap();
        assert_eq!(ring.len(), LateralSurfaceSettings::default().ray_count);
    }
}
