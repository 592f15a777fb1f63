//! Ray-based object picking.
//!
//! Casts pointer or controller rays against entity hit geometry and resolves
//! the hit under the cursor to an entity (and, for selected characters, a
//! bone).

mod geometry;
mod ray;
mod selector;

pub use geometry::{IntersectionProvider, Shape, ShapeHit, ShapeSet};
pub use ray::{pointer_to_ndc, Ray};
pub use selector::{Disambiguation, PickMode, RaycastHit, Selector};
