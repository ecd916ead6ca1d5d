//! Unordered set of distinct points.

use orbis_math::{Defined, GeometryError, Point3, Result};

use crate::closest_index;

/// A set of points. Exact duplicates are collapsed on construction and
/// the remaining points keep their insertion order.
///
/// Equality does not depend on order. An empty set is undefined.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point3>,
}

impl PointSet {
    /// Build a set from points, dropping exact duplicates.
    pub fn new(points: impl IntoIterator<Item = Point3>) -> Self {
        let mut unique: Vec<Point3> = Vec::new();
        for point in points {
            if !unique.contains(&point) {
                unique.push(point);
            }
        }
        Self { points: unique }
    }

    /// Empty (undefined) set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the set holds no point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Iterate the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    /// True if `point` is one of the members.
    pub fn contains(&self, point: &Point3) -> bool {
        self.points.contains(point)
    }

    /// Member closest to `point`.
    pub fn point_closest_to(&self, point: &Point3) -> Result<Point3> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Point set"));
        }
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        closest_index(&self.points, point)
            .map(|i| self.points[i])
            .ok_or_else(|| GeometryError::undefined("Point set"))
    }

    /// True if both sets have the same size and every member of `self` has a
    /// member of `other` within `tolerance`.
    pub fn is_near(&self, other: &PointSet, tolerance: f64) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.len() == other.len()
            && self
                .points
                .iter()
                .all(|p| other.points.iter().any(|q| (p - q).norm() <= tolerance))
    }
}

impl Defined for PointSet {
    fn is_defined(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(Defined::is_defined)
    }
}

impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.len() == other.len()
            && self.points.iter().all(|p| other.contains(p))
    }
}

impl FromIterator<Point3> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
