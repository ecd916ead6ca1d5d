#![warn(missing_docs)]

//! Intersection engine for the orbis geometry kernel.
//!
//! # Architecture
//!
//! - [`Composite`] - ordered owned collection of geometric objects
//! - [`Intersection`] - a composite classified by [`IntersectionType`]
//! - [`intersect`] - closed-form line, ray and segment queries against
//!   spheres, ellipsoids and planes
//! - [`lateral`] - cone lateral-surface queries built on a fan of rays
//!
//! # Example
//!
//! ```
//! use orbis_geom::{Line, Sphere};
//! use orbis_intersect::{intersect::intersect_line_sphere, IntersectionType};
//! use orbis_math::{Point3, Vec3};
//!
//! let sphere = Sphere::unit(Point3::origin());
//! let line = Line::new(Point3::new(0.0, 0.0, -5.0), Vec3::z());
//!
//! let hit = intersect_line_sphere(&line, &sphere).unwrap();
//! assert_eq!(hit.intersection_type(), IntersectionType::PointSet);
//! ```

mod composite;
mod intersection;
mod solve;
pub mod intersect;
pub mod lateral;
pub mod targets;

pub use composite::Composite;
pub use intersection::{Intersection, IntersectionType};
pub use lateral::LateralSurfaceSettings;
