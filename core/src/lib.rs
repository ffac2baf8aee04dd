//! Exact intersections between 2D primitives.
//!
//! Shapes live in [`geometry`]; [`intersect`] holds the pairwise solvers and
//! the dispatch over every pair of shape kinds.

pub mod geometry;
pub mod intersect;

pub use geometry::{Point2, Shape, ShapeKind, Vector2};
pub use intersect::{
    contains_point, containment, cubic_self_intersection, intersect, intersect_with, intersects, Containment,
    IntersectConfig, IntersectError, IntersectResult, Intersection, IntersectionState,
};
