//! Classified intersection results.

use std::fmt;
use std::ops::Add;

use orbis_geom::{LineString, Object, ObjectKind, ObjectVariant, PointSet};
use orbis_math::{Defined, GeometryError, Point3, Result};

use crate::Composite;

/// Classification of an [`Intersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionType {
    /// Never assigned a result.
    Undefined,
    /// No object.
    Empty,
    /// Only points.
    Point,
    /// Only point sets.
    PointSet,
    /// Only lines.
    Line,
    /// Only rays.
    Ray,
    /// Only segments.
    Segment,
    /// Only line strings.
    LineString,
    /// Only polygons.
    Polygon,
    /// Only planes.
    Plane,
    /// Only cuboids.
    Cuboid,
    /// Only spheres.
    Sphere,
    /// Only ellipsoids.
    Ellipsoid,
    /// Only pyramids.
    Pyramid,
    /// Objects of more than one kind.
    Complex,
}

impl IntersectionType {
    /// Display label of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntersectionType::Undefined => "Undefined",
            IntersectionType::Empty => "Empty",
            IntersectionType::Complex => "Complex",
            IntersectionType::Point => ObjectKind::Point.as_str(),
            IntersectionType::PointSet => ObjectKind::PointSet.as_str(),
            IntersectionType::Line => ObjectKind::Line.as_str(),
            IntersectionType::Ray => ObjectKind::Ray.as_str(),
            IntersectionType::Segment => ObjectKind::Segment.as_str(),
            IntersectionType::LineString => ObjectKind::LineString.as_str(),
            IntersectionType::Polygon => ObjectKind::Polygon.as_str(),
            IntersectionType::Plane => ObjectKind::Plane.as_str(),
            IntersectionType::Cuboid => ObjectKind::Cuboid.as_str(),
            IntersectionType::Sphere => ObjectKind::Sphere.as_str(),
            IntersectionType::Ellipsoid => ObjectKind::Ellipsoid.as_str(),
            IntersectionType::Pyramid => ObjectKind::Pyramid.as_str(),
        }
    }

    /// Classify a sequence of objects.
    ///
    /// Empty for no object, the shared kind when every object has the same
    /// kind, and complex as soon as two kinds differ.
    pub fn classify(objects: &[Object]) -> Self {
        let mut kinds = objects.iter().map(Object::kind);
        let Some(first) = kinds.next() else {
            return IntersectionType::Empty;
        };
        if kinds.any(|kind| kind != first) {
            IntersectionType::Complex
        } else {
            first.into()
        }
    }
}

impl From<ObjectKind> for IntersectionType {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Point => IntersectionType::Point,
            ObjectKind::PointSet => IntersectionType::PointSet,
            ObjectKind::Line => IntersectionType::Line,
            ObjectKind::Ray => IntersectionType::Ray,
            ObjectKind::Segment => IntersectionType::Segment,
            ObjectKind::LineString => IntersectionType::LineString,
            ObjectKind::Polygon => IntersectionType::Polygon,
            ObjectKind::Plane => IntersectionType::Plane,
            ObjectKind::Cuboid => IntersectionType::Cuboid,
            ObjectKind::Sphere => IntersectionType::Sphere,
            ObjectKind::Ellipsoid => IntersectionType::Ellipsoid,
            ObjectKind::Pyramid => IntersectionType::Pyramid,
        }
    }
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of an intersection query: a composite and its classification.
///
/// The type is always derived from the composite, never set independently.
#[derive(Debug, Clone)]
pub struct Intersection {
    kind: IntersectionType,
    composite: Composite,
}

impl Intersection {
    /// Intersection that was never assigned a result.
    pub fn undefined() -> Self {
        Self {
            kind: IntersectionType::Undefined,
            composite: Composite::undefined(),
        }
    }

    /// Intersection holding nothing.
    pub fn empty() -> Self {
        Self::from_composite(Composite::empty())
    }

    /// Single point.
    pub fn point(point: Point3) -> Self {
        Self::from_composite(Composite::single(point))
    }

    /// Single point set.
    pub fn point_set(point_set: PointSet) -> Self {
        Self::from_composite(Composite::single(point_set))
    }

    /// Single line string.
    pub fn line_string(line_string: LineString) -> Self {
        Self::from_composite(Composite::single(line_string))
    }

    /// Single object of any kind.
    pub fn object(object: impl Into<Object>) -> Self {
        Self::from_composite(Composite::single(object))
    }

    /// Classified sequence of objects.
    pub fn from_objects(objects: Vec<Object>) -> Self {
        Self::from_composite(Composite::new(objects))
    }

    fn from_composite(composite: Composite) -> Self {
        let kind = if composite.objects().is_empty() && !composite.is_defined() {
            IntersectionType::Undefined
        } else {
            IntersectionType::classify(composite.objects())
        };
        Self { kind, composite }
    }

    fn ensure_defined(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GeometryError::undefined("Intersection"))
        }
    }

    /// True if no object is held.
    pub fn is_empty(&self) -> bool {
        self.kind == IntersectionType::Empty
    }

    /// True if the objects have more than one kind.
    pub fn is_complex(&self) -> bool {
        self.kind == IntersectionType::Complex
    }

    /// Classification.
    pub fn intersection_type(&self) -> IntersectionType {
        self.kind
    }

    /// Underlying composite.
    pub fn composite(&self) -> &Composite {
        &self.composite
    }

    /// True if exactly one object of variant `T` is held.
    pub fn is_single<T: ObjectVariant>(&self) -> bool {
        self.is_defined() && self.composite.is_single::<T>()
    }

    /// The only object, narrowed to `T`.
    pub fn as_single<T: ObjectVariant>(&self) -> Result<&T> {
        self.ensure_defined()?;
        self.composite.as_single::<T>()
    }

    /// Objects of `self` followed by those of `other`, reclassified.
    pub fn concat(&self, other: &Intersection) -> Result<Intersection> {
        self.ensure_defined()?;
        other.ensure_defined()?;
        Ok(Self::from_composite(self.composite.concat(&other.composite)?))
    }

    /// Append the objects of `other` in place.
    pub fn append(&mut self, other: &Intersection) -> Result<()> {
        *self = self.concat(other)?;
        Ok(())
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::undefined()
    }
}

impl Defined for Intersection {
    fn is_defined(&self) -> bool {
        self.kind != IntersectionType::Undefined && self.composite.is_defined()
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.kind == other.kind
            && self.composite == other.composite
    }
}

impl Add<&Intersection> for &Intersection {
    type Output = Result<Intersection>;

    fn add(self, rhs: &Intersection) -> Self::Output {
        self.concat(rhs)
    }
}

impl Add for Intersection {
    type Output = Result<Intersection>;

    fn add(self, rhs: Intersection) -> Self::Output {
        self.concat(&rhs)
    }
}
