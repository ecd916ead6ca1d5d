//! Cone lateral-surface intersection.
//!
//! The lateral surface is approximated by a fan of rays from the apex (see
//! [`Cone::rays_of_lateral_surface`]). Each ray is intersected with the
//! target solid in parallel, then the per-ray points are gathered into a
//! near curve and a far curve.

use orbis_geom::{Cone, Ellipsoid, LineString, PointSet, Ray, Sphere};
use orbis_math::{Defined, GeometryError, Point3, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::intersect::{intersect_ray_ellipsoid, intersect_ray_sphere};
use crate::targets::LATERAL;
use crate::{Intersection, IntersectionType};

/// Settings for cone lateral-surface queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LateralSurfaceSettings {
    /// Number of rays approximating the lateral surface.
    pub ray_count: usize,
    /// Keep only the crossing nearest the apex on each ray.
    pub only_in_sight: bool,
}

impl Default for LateralSurfaceSettings {
    fn default() -> Self {
        Self {
            ray_count: 40,
            only_in_sight: false,
        }
    }
}

impl LateralSurfaceSettings {
    /// Settings with the given ray count and the default sight flag.
    pub fn with_ray_count(ray_count: usize) -> Self {
        Self {
            ray_count,
            ..Self::default()
        }
    }
}

/// A solid the lateral rays can be intersected with.
trait LateralTarget: Defined + Sync {
    const NAME: &'static str;

    fn intersect_ray(&self, ray: &Ray, only_in_sight: bool) -> Result<Intersection>;
}

impl LateralTarget for Sphere {
    const NAME: &'static str = "Sphere";

    fn intersect_ray(&self, ray: &Ray, only_in_sight: bool) -> Result<Intersection> {
        intersect_ray_sphere(ray, self, only_in_sight)
    }
}

impl LateralTarget for Ellipsoid {
    const NAME: &'static str = "Ellipsoid";

    fn intersect_ray(&self, ray: &Ray, only_in_sight: bool) -> Result<Intersection> {
        intersect_ray_ellipsoid(ray, self, only_in_sight)
    }
}

fn lateral_rays<T: LateralTarget>(cone: &Cone, target: &T, ray_count: usize) -> Result<Vec<Ray>> {
    if !cone.is_defined() {
        return Err(GeometryError::undefined("Cone"));
    }
    if !target.is_defined() {
        return Err(GeometryError::undefined(T::NAME));
    }
    cone.rays_of_lateral_surface(ray_count)
}

fn lateral_intersection<T: LateralTarget>(
    cone: &Cone,
    target: &T,
    settings: &LateralSurfaceSettings,
) -> Result<Intersection> {
    let rays = lateral_rays(cone, target, settings.ray_count)?;

    let hits = rays
        .par_iter()
        .map(|ray| target.intersect_ray(ray, settings.only_in_sight))
        .collect::<Result<Vec<_>>>()?;

    let apex = cone.apex();
    let mut near: Vec<Point3> = Vec::new();
    let mut far: Vec<Point3> = Vec::new();

    for hit in &hits {
        match hit.intersection_type() {
            IntersectionType::Empty => {}
            IntersectionType::Point => near.push(*hit.as_single::<Point3>()?),
            IntersectionType::PointSet => {
                let points = hit.as_single::<PointSet>()?;
                let closest = points.point_closest_to(&apex)?;
                near.push(closest);
                if let Some(other) = points.iter().find(|&&p| p != closest) {
                    far.push(*other);
                }
            }
            other => {
                warn!(target: LATERAL, kind = %other, "unexpected lateral ray intersection");
                return Err(GeometryError::algorithmic(format!(
                    "lateral ray intersection returned {other}"
                )));
            }
        }
    }

    debug!(
        target: LATERAL,
        rays = rays.len(),
        near = near.len(),
        far = far.len(),
        target_kind = T::NAME,
        "lateral surface buckets"
    );

    match (near.is_empty(), far.is_empty()) {
        (false, false) if !settings.only_in_sight => Intersection::line_string(LineString::new(near))
            .concat(&Intersection::line_string(LineString::new(far))),
        (false, _) => Ok(Intersection::line_string(LineString::new(near))),
        (true, false) => Ok(Intersection::line_string(LineString::new(far))),
        (true, true) => Ok(Intersection::empty()),
    }
}

fn lateral_intersects<T: LateralTarget>(cone: &Cone, target: &T, ray_count: usize) -> Result<bool> {
    for ray in lateral_rays(cone, target, ray_count)? {
        if !target.intersect_ray(&ray, false)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Intersect a cone's lateral surface with a sphere.
///
/// Returns `Empty`, one `LineString` through the crossings nearest the apex,
/// or two line strings (near side then far side) when rays pass through the
/// sphere and `only_in_sight` is off.
pub fn intersect_cone_sphere(
    cone: &Cone,
    sphere: &Sphere,
    settings: &LateralSurfaceSettings,
) -> Result<Intersection> {
    lateral_intersection(cone, sphere, settings)
}

/// Intersect a cone's lateral surface with an ellipsoid.
///
/// Same result shape as [`intersect_cone_sphere`].
pub fn intersect_cone_ellipsoid(
    cone: &Cone,
    ellipsoid: &Ellipsoid,
    settings: &LateralSurfaceSettings,
) -> Result<Intersection> {
    lateral_intersection(cone, ellipsoid, settings)
}

/// True if any of `ray_count` lateral rays crosses the sphere.
pub fn intersects_cone_sphere(cone: &Cone, sphere: &Sphere, ray_count: usize) -> Result<bool> {
    lateral_intersects(cone, sphere, ray_count)
}

/// True if any of `ray_count` lateral rays crosses the ellipsoid.
pub fn intersects_cone_ellipsoid(cone: &Cone, ellipsoid: &Ellipsoid, ray_count: usize) -> Result<bool> {
    lateral_intersects(cone, ellipsoid, ray_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_math::{Angle, Quaternion, Vec3};

    fn cone_30() -> Cone {
        Cone::new(Point3::origin(), Vec3::z(), Angle::degrees(30.0))
    }

    fn line_strings(hit: &Intersection) -> Vec<&LineString> {
        hit.composite()
            .objects()
            .iter()
            .filter_map(|o| o.as_variant::<LineString>())
            .collect()
    }

    #[test]
    fn test_settings_default_and_serde() {
        let settings = LateralSurfaceSettings::default();
        assert_eq!(settings.ray_count, 40);
        assert!(!settings.only_in_sight);

        let json = serde_json::to_string(&LateralSurfaceSettings::with_ray_count(8)).unwrap();
        let back: LateralSurfaceSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ray_count, 8);

        let partial: LateralSurfaceSettings = serde_json::from_str(r#"{"only_in_sight":true}"#).unwrap();
        assert_eq!(partial.ray_count, 40);
        assert!(partial.only_in_sight);
    }

    #[test]
    fn test_apex_inside_sphere_gives_one_curve() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 0.5), 2.0);
        let hit = intersect_cone_sphere(&cone_30(), &sphere, &LateralSurfaceSettings::with_ray_count(4))
            .unwrap();
        assert_eq!(hit.intersection_type(), IntersectionType::LineString);
        let curves = line_strings(&hit);
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].len(), 4);
        for point in curves[0] {
            assert!(sphere.contains(point).unwrap());
        }
    }

    #[test]
    fn test_sphere_ahead_gives_near_and_far_curves() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 3.0);
        let hit = intersect_cone_sphere(&cone_30(), &sphere, &LateralSurfaceSettings::with_ray_count(4))
            .unwrap();
        assert_eq!(hit.intersection_type(), IntersectionType::LineString);
        let curves = line_strings(&hit);
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].len(), 4);
        assert_eq!(curves[1].len(), 4);
        for (near, far) in curves[0].iter().zip(curves[1].iter()) {
            assert!(near.coords.norm() < far.coords.norm());
        }
    }

    #[test]
    fn test_only_in_sight_keeps_near_curve() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 3.0);
        let settings = LateralSurfaceSettings {
            ray_count: 6,
            only_in_sight: true,
        };
        let hit = intersect_cone_sphere(&cone_30(), &sphere, &settings).unwrap();
        let curve = hit.as_single::<LineString>().unwrap();
        assert_eq!(curve.len(), 6);
        for point in curve {
            assert!(point.z < 5.0);
        }
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0);
        let hit = intersect_cone_sphere(&cone_30(), &sphere, &LateralSurfaceSettings::default()).unwrap();
        assert!(hit.is_empty());
        assert!(!intersects_cone_sphere(&cone_30(), &sphere, 16).unwrap());
    }

    #[test]
    fn test_ellipsoid() {
        let ellipsoid = Ellipsoid::new(Point3::new(0.0, 0.0, 6.0), 4.0, 4.0, 2.0, Quaternion::unit());
        let settings = LateralSurfaceSettings::with_ray_count(8);
        let hit = intersect_cone_ellipsoid(&cone_30(), &ellipsoid, &settings).unwrap();
        let curves = line_strings(&hit);
        assert_eq!(curves.len(), 2);
        for curve in &curves {
            assert_eq!(curve.len(), 8);
            for point in *curve {
                assert!(ellipsoid.contains(point).unwrap());
            }
        }
        assert!(intersects_cone_ellipsoid(&cone_30(), &ellipsoid, 8).unwrap());
    }

    #[test]
    fn test_ellipsoid_only_in_sight_keeps_near_curve() {
        let ellipsoid = Ellipsoid::new(Point3::new(0.0, 0.0, 6.0), 4.0, 4.0, 2.0, Quaternion::unit());
        let settings = LateralSurfaceSettings {
            ray_count: 8,
            only_in_sight: true,
        };
        let hit = intersect_cone_ellipsoid(&cone_30(), &ellipsoid, &settings).unwrap();
        let curve = hit.as_single::<LineString>().unwrap();
        assert_eq!(curve.len(), 8);
        for point in curve {
            assert!(point.z < 6.0);
            assert!(ellipsoid.contains(point).unwrap());
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let sphere = Sphere::unit(Point3::new(0.0, 0.0, 5.0));
        assert_eq!(
            intersect_cone_sphere(&Cone::undefined(), &sphere, &LateralSurfaceSettings::default()),
            Err(GeometryError::undefined("Cone"))
        );
        assert_eq!(
            intersect_cone_sphere(&cone_30(), &Sphere::undefined(), &LateralSurfaceSettings::default()),
            Err(GeometryError::undefined("Sphere"))
        );
        assert_eq!(
            intersects_cone_ellipsoid(&cone_30(), &Ellipsoid::undefined(), 4),
            Err(GeometryError::undefined("Ellipsoid"))
        );
        assert!(matches!(
            intersect_cone_sphere(&cone_30(), &sphere, &LateralSurfaceSettings::with_ray_count(0)),
            Err(GeometryError::InvalidArgument(_))
        ));
    }
}
