//! Intersection engine.
//!
//! Pairwise solvers grouped by the algebra they use, plus the exhaustive
//! [`dispatch`] over [`Shape`](crate::geometry::Shape) kinds and the separate
//! [`containment`] query.

use thiserror::Error;

pub mod bezout;
pub mod composite;
pub mod config;
pub mod conic;
pub mod containment;
pub mod curve;
pub mod dispatch;
pub mod linear;
pub mod point;
pub mod quadric;
pub mod result;
pub mod self_intersection;

pub use config::IntersectConfig;
pub use containment::{contains_point, containment, Containment};
pub use dispatch::{intersect, intersect_with, intersects};
pub use linear::{Linear, LinearDomain};
pub use result::{Intersection, IntersectionBuilder, IntersectionState};
pub use self_intersection::cubic_self_intersection;

/// Errors that can occur during intersection queries.
///
/// Geometric degeneracy is never an error; it is reported through
/// [`IntersectionState`].
#[derive(Debug, Error, Clone)]
pub enum IntersectError {
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for intersection operations.
pub type IntersectResult<T> = Result<T, IntersectError>;

#[cfg(test)]
mod tests_quadric;

#[cfg(test)]
mod tests_curve;

#[cfg(test)]
mod tests_conic;

#[cfg(test)]
mod tests_dispatch;
