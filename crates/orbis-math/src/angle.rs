//! Plane angle with an explicit undefined state.

use std::f64::consts::PI;
use std::ops::{Neg, Sub};

use crate::{Defined, EPSILON};

/// An angle, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Angle from a value in radians.
    pub fn radians(value: f64) -> Self {
        Self { radians: value }
    }

    /// Angle from a value in degrees.
    pub fn degrees(value: f64) -> Self {
        Self {
            radians: value.to_radians(),
        }
    }

    /// Zero angle.
    pub fn zero() -> Self {
        Self { radians: 0.0 }
    }

    /// Undefined angle.
    pub fn undefined() -> Self {
        Self { radians: f64::NAN }
    }

    /// Value in radians.
    pub fn in_radians(&self) -> f64 {
        self.radians
    }

    /// Value in degrees.
    pub fn in_degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Value in radians wrapped into `[lower, lower + 2π)`.
    pub fn in_radians_between(&self, lower: f64) -> f64 {
        lower + (self.radians - lower).rem_euclid(2.0 * PI)
    }

    /// True if both angles are defined and differ by less than `tolerance` radians.
    pub fn is_near(&self, other: &Angle, tolerance: f64) -> bool {
        self.is_defined() && other.is_defined() && (self.radians - other.radians).abs() <= tolerance
    }

    /// Near-equality using the kernel tolerance.
    pub fn approx_eq(&self, other: &Angle) -> bool {
        self.is_near(other, EPSILON)
    }
}

impl Defined for Angle {
    fn is_defined(&self) -> bool {
        self.radians.is_defined()
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::radians(-self.radians)
    }
}
