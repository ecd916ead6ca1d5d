//! Ordered owned collection of geometric objects.

use orbis_geom::{Object, ObjectVariant};
use orbis_math::{Defined, GeometryError, Result};

/// An ordered sequence of objects, duplicates allowed.
///
/// An undefined composite is distinct from an empty one.
#[derive(Debug, Clone)]
pub struct Composite {
    objects: Option<Vec<Object>>,
}

impl Composite {
    /// Composite holding `objects` in order.
    pub fn new(objects: Vec<Object>) -> Self {
        Self {
            objects: Some(objects),
        }
    }

    /// Composite holding a single object.
    pub fn single(object: impl Into<Object>) -> Self {
        Self::new(vec![object.into()])
    }

    /// Defined composite holding nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Undefined composite.
    pub fn undefined() -> Self {
        Self { objects: None }
    }

    fn defined_objects(&self) -> Result<&[Object]> {
        match &self.objects {
            Some(objects) if self.is_defined() => Ok(objects),
            _ => Err(GeometryError::undefined("Composite")),
        }
    }

    /// Objects in order. Empty when undefined.
    pub fn objects(&self) -> &[Object] {
        self.objects.as_deref().unwrap_or_default()
    }

    /// Number of objects.
    pub fn object_count(&self) -> Result<usize> {
        Ok(self.defined_objects()?.len())
    }

    /// True if the composite holds no object.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.defined_objects()?.is_empty())
    }

    /// Object at `index`.
    pub fn object_at(&self, index: usize) -> Result<&Object> {
        let objects = self.defined_objects()?;
        objects.get(index).ok_or_else(|| {
            GeometryError::invalid_argument(format!(
                "index {index} is out of bounds for {} objects",
                objects.len()
            ))
        })
    }

    /// True if the composite holds exactly one object of variant `T`.
    pub fn is_single<T: ObjectVariant>(&self) -> bool {
        matches!(self.defined_objects(), Ok([object]) if T::from_object(object).is_some())
    }

    /// The only object, narrowed to `T`.
    pub fn as_single<T: ObjectVariant>(&self) -> Result<&T> {
        let objects = self.defined_objects()?;
        let found = match objects {
            [object] => match T::from_object(object) {
                Some(inner) => return Ok(inner),
                None => object.kind().as_str(),
            },
            [] => "Empty",
            _ => "Complex",
        };
        Err(GeometryError::wrong_type(T::KIND.as_str(), found))
    }

    /// Objects of `self` followed by those of `other`.
    pub fn concat(&self, other: &Composite) -> Result<Composite> {
        let lhs = self.defined_objects()?;
        let rhs = other.defined_objects()?;
        Ok(Self::new(lhs.iter().chain(rhs).cloned().collect()))
    }
}

impl Default for Composite {
    fn default() -> Self {
        Self::undefined()
    }
}

impl Defined for Composite {
    fn is_defined(&self) -> bool {
        self.objects
            .as_ref()
            .is_some_and(|objects| objects.iter().all(Defined::is_defined))
    }
}

impl PartialEq for Composite {
    fn eq(&self, other: &Self) -> bool {
        match (self.defined_objects(), other.defined_objects()) {
            (Ok(lhs), Ok(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl FromIterator<Object> for Composite {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_geom::{PointSet, Segment, Sphere};
    use orbis_math::Point3;

    fn point(z: f64) -> Object {
        Point3::new(0.0, 0.0, z).into()
    }

    #[test]
    fn test_empty_vs_undefined() {
        let empty = Composite::empty();
        let undefined = Composite::undefined();
        assert!(empty.is_defined());
        assert!(empty.is_empty().unwrap());
        assert!(!undefined.is_defined());
        assert_eq!(undefined.is_empty(), Err(GeometryError::undefined("Composite")));
        assert_eq!(empty, Composite::empty());
        assert_ne!(undefined, Composite::undefined());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Composite::new(vec![point(1.0), point(2.0)]);
        let b = Composite::new(vec![point(2.0), point(1.0)]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(a, Composite::new(vec![point(1.0)]));
    }

    #[test]
    fn test_concat_preserves_order() {
        let a = Composite::single(Point3::new(0.0, 0.0, 1.0));
        let b = Composite::new(vec![point(2.0), point(3.0)]);
        let joined = a.concat(&b).unwrap();
        assert_eq!(joined.object_count().unwrap(), 3);
        assert_eq!(joined.object_at(0).unwrap(), &point(1.0));
        assert_eq!(joined.object_at(2).unwrap(), &point(3.0));
        assert!(joined.object_at(3).is_err());
        assert!(a.concat(&Composite::undefined()).is_err());
    }

    #[test]
    fn test_narrowing() {
        let single = Composite::single(Sphere::unit(Point3::origin()));
        assert!(single.is_single::<Sphere>());
        assert!(!single.is_single::<Point3>());
        assert_eq!(single.as_single::<Sphere>().unwrap().radius, 1.0);
        assert_eq!(
            single.as_single::<PointSet>(),
            Err(GeometryError::wrong_type("PointSet", "Sphere"))
        );

        let pair = Composite::new(vec![point(1.0), point(2.0)]);
        assert!(!pair.is_single::<Point3>());
        assert_eq!(
            pair.as_single::<Point3>(),
            Err(GeometryError::wrong_type("Point", "Complex"))
        );
        assert_eq!(
            Composite::empty().as_single::<Segment>(),
            Err(GeometryError::wrong_type("Segment", "Empty"))
        );
        assert_eq!(
            Composite::undefined().as_single::<Segment>(),
            Err(GeometryError::undefined("Composite"))
        );
    }

    #[test]
    fn test_undefined_member_makes_composite_undefined() {
        let composite = Composite::new(vec![point(1.0), Sphere::undefined().into()]);
        assert!(!composite.is_defined());
        assert!(composite.object_count().is_err());
        assert_eq!(composite.objects().len(), 2);
    }
}
