//! Infinite single-nappe cone.

use orbis_math::{
    undefined_point, undefined_vec, Angle, Defined, GeometryError, Point3, Quaternion, Result,
    RotationVector, Vec3,
};

use crate::Ray;

/// A cone with apex, unit axis and half-angle between axis and lateral surface.
///
/// `(axis, θ)` and `(-axis, 180° - θ)` describe the same cone and compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Cone {
    apex: Point3,
    axis: Vec3,
    angle: Angle,
}

impl Cone {
    /// Cone with the given apex, axis (normalized) and half-angle.
    pub fn new(apex: Point3, axis: Vec3, angle: Angle) -> Self {
        Self {
            apex,
            axis: axis.normalize(),
            angle,
        }
    }

    /// Undefined cone.
    pub fn undefined() -> Self {
        Self {
            apex: undefined_point(),
            axis: undefined_vec(),
            angle: Angle::undefined(),
        }
    }

    /// Apex point.
    pub fn apex(&self) -> Point3 {
        self.apex
    }

    /// Unit axis.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Half-angle.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Rays from the apex sweeping the lateral surface.
    ///
    /// Ray `i` is turned by `i * 360° / ray_count` about the axis, starting
    /// from a reference ray in the plane of the axis and a fixed
    /// perpendicular. A single ray is the reference ray.
    pub fn rays_of_lateral_surface(&self, ray_count: usize) -> Result<Vec<Ray>> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Cone"));
        }
        if ray_count == 0 {
            return Err(GeometryError::invalid_argument("number of rays must be positive"));
        }

        let perpendicular = if self.axis.dot(&Vec3::x()).abs() < 0.5 {
            self.axis.cross(&Vec3::x())
        } else {
            self.axis.cross(&Vec3::y())
        }
        .normalize();

        let tilt = Quaternion::from_rotation_vector(&RotationVector::new(perpendicular, self.angle))?;
        let reference = tilt.conjugate()?.rotate_vector(&self.axis)?;

        let step = 360.0 / ray_count as f64;
        (0..ray_count)
            .map(|i| {
                let turn = Quaternion::from_rotation_vector(&RotationVector::new(
                    self.axis,
                    Angle::degrees(i as f64 * step),
                ))?;
                Ok(Ray::new(self.apex, turn.conjugate()?.rotate_vector(&reference)?))
            })
            .collect()
    }
}

impl Defined for Cone {
    fn is_defined(&self) -> bool {
        self.apex.is_defined() && self.axis.is_defined() && self.angle.is_defined()
    }
}

impl PartialEq for Cone {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() || self.apex != other.apex {
            return false;
        }
        (self.axis == other.axis && self.angle.approx_eq(&other.angle))
            || (self.axis == -other.axis
                && self.angle.approx_eq(&(Angle::degrees(180.0) - other.angle)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cone_30() -> Cone {
        Cone::new(Point3::origin(), Vec3::z(), Angle::degrees(30.0))
    }

    #[test]
    fn test_rays_make_half_angle_with_axis() {
        let cone = cone_30();
        let rays = cone.rays_of_lateral_surface(8).unwrap();
        assert_eq!(rays.len(), 8);
        for ray in &rays {
            assert_eq!(ray.origin, cone.apex());
            let cos = ray.direction.dot(&cone.axis());
            assert!((cos - 30f64.to_radians().cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rays_are_evenly_spaced() {
        let rays = cone_30().rays_of_lateral_surface(4).unwrap();
        let radial: Vec<Vec3> = rays
            .iter()
            .map(|r| Vec3::new(r.direction.x, r.direction.y, 0.0).normalize())
            .collect();
        for i in 0..4 {
            let next = radial[(i + 1) % 4];
            assert!(radial[i].dot(&next).abs() < 1e-12);
            // Counter-clockwise about +Z.
            assert!(radial[i].cross(&next).z > 0.0);
        }
    }

    #[test]
    fn test_reference_ray() {
        // The first ray tilts the axis toward +X about the Y perpendicular.
        let rays = cone_30().rays_of_lateral_surface(1).unwrap();
        assert_eq!(rays.len(), 1);
        assert_abs_diff_eq!(
            rays[0].direction.into_inner(),
            Vec3::new(0.5, 0.0, 3f64.sqrt() / 2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_axis_near_x_uses_y_reference() {
        let cone = Cone::new(Point3::new(1.0, 1.0, 1.0), Vec3::x(), Angle::degrees(45.0));
        for ray in cone.rays_of_lateral_surface(6).unwrap() {
            assert!((ray.direction.x - 45f64.to_radians().cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            cone_30().rays_of_lateral_surface(0),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert_eq!(
            Cone::undefined().rays_of_lateral_surface(4),
            Err(GeometryError::undefined("Cone"))
        );
    }

    #[test]
    fn test_supplementary_equality() {
        let flipped = Cone::new(Point3::origin(), -Vec3::z(), Angle::degrees(150.0));
        assert_eq!(cone_30(), flipped);
        assert_ne!(cone_30(), Cone::new(Point3::origin(), -Vec3::z(), Angle::degrees(30.0)));
        assert_ne!(Cone::undefined(), Cone::undefined());
    }
}
