//! Ordered polyline.

use orbis_math::{Defined, GeometryError, Point3, Result};

use crate::{closest_index, Segment};

/// An ordered sequence of points. An empty line string is undefined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    points: Vec<Point3>,
}

impl LineString {
    /// Line string through `points`, in order.
    pub fn new(points: impl IntoIterator<Item = Point3>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Empty (undefined) line string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Two-point line string spanning a segment.
    pub fn from_segment(segment: &Segment) -> Result<Self> {
        if !segment.is_defined() {
            return Err(GeometryError::undefined("Segment"));
        }
        Ok(Self::new([segment.first, segment.second]))
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there is no point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Iterate the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    /// Consecutive segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Vertex closest to `point`.
    pub fn point_closest_to(&self, point: &Point3) -> Result<Point3> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Line string"));
        }
        if !point.is_defined() {
            return Err(GeometryError::undefined("Point"));
        }
        closest_index(&self.points, point)
            .map(|i| self.points[i])
            .ok_or_else(|| GeometryError::undefined("Line string"))
    }

    /// True if both have the same length and pairwise points lie within `tolerance`.
    pub fn is_near(&self, other: &LineString, tolerance: f64) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.len() == other.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Append the points of `other` after these.
    pub fn concat(&self, other: &LineString) -> LineString {
        Self::new(self.points.iter().chain(&other.points).copied())
    }
}

impl Defined for LineString {
    fn is_defined(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(Defined::is_defined)
    }
}

impl FromIterator<Point3> for LineString {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matters() {
        let a = LineString::new([Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        let b = LineString::new([Point3::new(1.0, 0.0, 0.0), Point3::origin()]);
        assert_ne!(a, b);
        assert_eq!(a.segments().count(), 1);
    }

    #[test]
    fn test_from_segment() {
        let s = Segment::new(Point3::origin(), Point3::new(0.0, 2.0, 0.0));
        let ls = LineString::from_segment(&s).unwrap();
        assert_eq!(ls.points(), &[s.first, s.second]);
        assert!(LineString::from_segment(&Segment::undefined()).is_err());
    }

    #[test]
    fn test_concat_and_closest() {
        let a = LineString::new([Point3::new(0.0, 0.0, 3.0)]);
        let b = LineString::new([Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, 2.0)]);
        let joined = a.concat(&b);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.point_closest_to(&Point3::origin()).unwrap(), Point3::new(0.0, 0.0, 1.0));
        assert!(joined.is_near(&joined.clone(), 0.0));
    }

    #[test]
    fn test_empty_is_undefined() {
        assert!(!LineString::empty().is_defined());
        assert!(LineString::empty().point_closest_to(&Point3::origin()).is_err());
    }
}
