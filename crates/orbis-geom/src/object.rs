//! Closed set of object kinds an intersection result can hold.

use std::fmt;

use orbis_math::{Defined, Point3};

use crate::{
    Cuboid, Ellipsoid, Line, LineString, Plane, PointSet, Polygon, Pyramid, Ray, Segment, Sphere,
};

/// The kind of an [`Object`] (for match-based dispatch and labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Single point.
    Point,
    /// Unordered set of distinct points.
    PointSet,
    /// Infinite line.
    Line,
    /// Half-line.
    Ray,
    /// Bounded segment.
    Segment,
    /// Ordered polyline.
    LineString,
    /// Planar polygon.
    Polygon,
    /// Infinite plane.
    Plane,
    /// Oriented box.
    Cuboid,
    /// Sphere.
    Sphere,
    /// Ellipsoid.
    Ellipsoid,
    /// Pyramid.
    Pyramid,
}

impl ObjectKind {
    /// Display label of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Point => "Point",
            ObjectKind::PointSet => "PointSet",
            ObjectKind::Line => "Line",
            ObjectKind::Ray => "Ray",
            ObjectKind::Segment => "Segment",
            ObjectKind::LineString => "LineString",
            ObjectKind::Polygon => "Polygon",
            ObjectKind::Plane => "Plane",
            ObjectKind::Cuboid => "Cuboid",
            ObjectKind::Sphere => "Sphere",
            ObjectKind::Ellipsoid => "Ellipsoid",
            ObjectKind::Pyramid => "Pyramid",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geometric object owned by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Single point.
    Point(Point3),
    /// Point set.
    PointSet(PointSet),
    /// Line.
    Line(Line),
    /// Ray.
    Ray(Ray),
    /// Segment.
    Segment(Segment),
    /// Line string.
    LineString(LineString),
    /// Polygon.
    Polygon(Polygon),
    /// Plane.
    Plane(Plane),
    /// Cuboid.
    Cuboid(Cuboid),
    /// Sphere.
    Sphere(Sphere),
    /// Ellipsoid.
    Ellipsoid(Ellipsoid),
    /// Pyramid.
    Pyramid(Pyramid),
}

impl Object {
    /// The kind tag of this object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Point(_) => ObjectKind::Point,
            Object::PointSet(_) => ObjectKind::PointSet,
            Object::Line(_) => ObjectKind::Line,
            Object::Ray(_) => ObjectKind::Ray,
            Object::Segment(_) => ObjectKind::Segment,
            Object::LineString(_) => ObjectKind::LineString,
            Object::Polygon(_) => ObjectKind::Polygon,
            Object::Plane(_) => ObjectKind::Plane,
            Object::Cuboid(_) => ObjectKind::Cuboid,
            Object::Sphere(_) => ObjectKind::Sphere,
            Object::Ellipsoid(_) => ObjectKind::Ellipsoid,
            Object::Pyramid(_) => ObjectKind::Pyramid,
        }
    }

    /// Narrow to a concrete variant.
    pub fn as_variant<T: ObjectVariant>(&self) -> Option<&T> {
        T::from_object(self)
    }
}

impl Defined for Object {
    fn is_defined(&self) -> bool {
        match self {
            Object::Point(p) => p.is_defined(),
            Object::PointSet(o) => o.is_defined(),
            Object::Line(o) => o.is_defined(),
            Object::Ray(o) => o.is_defined(),
            Object::Segment(o) => o.is_defined(),
            Object::LineString(o) => o.is_defined(),
            Object::Polygon(o) => o.is_defined(),
            Object::Plane(o) => o.is_defined(),
            Object::Cuboid(o) => o.is_defined(),
            Object::Sphere(o) => o.is_defined(),
            Object::Ellipsoid(o) => o.is_defined(),
            Object::Pyramid(o) => o.is_defined(),
        }
    }
}

/// A concrete type stored in one [`Object`] variant.
pub trait ObjectVariant: Sized {
    /// Kind tag of the variant.
    const KIND: ObjectKind;

    /// Borrow the payload if `object` is this variant.
    fn from_object(object: &Object) -> Option<&Self>;
}

macro_rules! object_variants {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl ObjectVariant for $ty {
                const KIND: ObjectKind = ObjectKind::$variant;

                fn from_object(object: &Object) -> Option<&Self> {
                    match object {
                        Object::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Object {
                fn from(value: $ty) -> Self {
                    Object::$variant(value)
                }
            }
        )*
    };
}

object_variants! {
    Point => Point3,
    PointSet => PointSet,
    Line => Line,
    Ray => Ray,
    Segment => Segment,
    LineString => LineString,
    Polygon => Polygon,
    Plane => Plane,
    Cuboid => Cuboid,
    Sphere => Sphere,
    Ellipsoid => Ellipsoid,
    Pyramid => Pyramid,
}
