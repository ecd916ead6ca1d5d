//! Oriented box.

use orbis_math::{undefined_point, undefined_vec, Defined, GeometryError, Point3, Result, Vec3};

/// A box centered at `center` with three orthonormal axes and the
/// half-extent along each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    center: Point3,
    axes: [Vec3; 3],
    extent: [f64; 3],
}

impl Cuboid {
    /// Oriented box. Axes are normalized; `extent` holds half-lengths.
    pub fn new(center: Point3, axes: [Vec3; 3], extent: [f64; 3]) -> Self {
        Self {
            center,
            axes: axes.map(|a| a.normalize()),
            extent,
        }
    }

    /// Axis-aligned cube with the given half-length.
    pub fn cube(center: Point3, half_length: f64) -> Self {
        Self::new(center, [Vec3::x(), Vec3::y(), Vec3::z()], [half_length; 3])
    }

    /// Undefined cuboid.
    pub fn undefined() -> Self {
        Self {
            center: undefined_point(),
            axes: [undefined_vec(); 3],
            extent: [f64::NAN; 3],
        }
    }

    /// Center point.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Unit axes.
    pub fn axes(&self) -> [Vec3; 3] {
        self.axes
    }

    /// Half-lengths along each axis.
    pub fn extent(&self) -> [f64; 3] {
        self.extent
    }

    /// The eight corners. Bit `k` of the index selects the sign along axis `k`.
    pub fn vertices(&self) -> Result<[Point3; 8]> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Cuboid"));
        }
        Ok(std::array::from_fn(|index| {
            (0..3).fold(self.center, |corner, k| {
                let sign = if index & (1 << k) == 0 { -1.0 } else { 1.0 };
                corner + sign * self.extent[k] * self.axes[k]
            })
        }))
    }
}

impl Defined for Cuboid {
    fn is_defined(&self) -> bool {
        self.center.is_defined()
            && self.axes.iter().all(Defined::is_defined)
            && self.extent.iter().all(Defined::is_defined)
    }
}
