//! Containment queries for closed shapes.
//!
//! Kept apart from [`IntersectionState`](super::IntersectionState): an
//! intersection result only describes boundary crossings.

use super::dispatch::intersect_with;
use super::quadric::Conic;
use super::{IntersectConfig, IntersectError, IntersectResult};
use crate::geometry::utils_2d::point_in_polygon;
use crate::geometry::{Point2, Segment, Shape};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How two shapes relate once boundary crossings are taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Containment {
    /// The boundaries meet.
    Crossing,
    Disjoint,
    FirstContainsSecond,
    SecondContainsFirst,
}

/// Whether `p` lies in the region bounded by `shape`; the boundary counts as inside.
///
/// Only closed shapes bound a region. Every other kind, and closed shapes
/// too degenerate to bound anything, return [`IntersectError::InvalidShape`].
pub fn contains_point(shape: &Shape, p: &Point2, config: &IntersectConfig) -> IntersectResult<bool> {
    match shape {
        Shape::Circle(c) => conic_contains(&Conic::from_circle(c), p, config),
        Shape::Ellipse(e) => conic_contains(&Conic::from_ellipse(e), p, config),
        Shape::Triangle(t) => Ok(polygon_contains(&t.vertices(), &t.edges(), p, config)),
        Shape::Rectangle(r) => Ok(polygon_contains(&r.corners(), &r.edges(), p, config)),
        Shape::Polygon(poly) => {
            if poly.points.len() < 3 {
                return Err(IntersectError::InvalidShape(format!(
                    "polygon with {} vertices does not bound a region",
                    poly.points.len()
                )));
            }
            Ok(polygon_contains(&poly.points, &poly.edges(), p, config))
        }
        Shape::Point(_)
        | Shape::Line(_)
        | Shape::Ray(_)
        | Shape::Segment(_)
        | Shape::CircularArc(_)
        | Shape::EllipticalArc(_)
        | Shape::QuadraticBezier(_)
        | Shape::CubicBezier(_) => Err(IntersectError::InvalidShape(format!(
            "{} does not bound a region",
            shape.kind()
        ))),
    }
}

fn conic_contains(conic: &Conic, p: &Point2, config: &IntersectConfig) -> IntersectResult<bool> {
    if conic.is_degenerate(config) {
        return Err(IntersectError::InvalidShape("conic with a non-positive radius".to_string()));
    }
    Ok(conic.implicit_value(p) <= 0.0 || conic.contains_point(p, config))
}

fn polygon_contains(vertices: &[Point2], edges: &[Segment], p: &Point2, config: &IntersectConfig) -> bool {
    point_in_polygon(p, vertices) || edges.iter().any(|e| e.as_linear().contains_point(p, config))
}

/// Classify two shapes: crossing boundaries, one inside the other, or apart.
///
/// Without a boundary crossing, a point of each shape is tested against the
/// other. At least one of the shapes must be closed.
pub fn containment(a: &Shape, b: &Shape, config: &IntersectConfig) -> IntersectResult<Containment> {
    if !a.is_closed() && !b.is_closed() {
        return Err(IntersectError::InvalidShape(format!(
            "containment of {} and {} needs a closed shape",
            a.kind(),
            b.kind()
        )));
    }

    let crossing = intersect_with(a, b, config);
    let relation = if !crossing.is_empty() || crossing.is_coincident() {
        Containment::Crossing
    } else if a.is_closed() && contains_point(a, &sample(b)?, config)? {
        Containment::FirstContainsSecond
    } else if b.is_closed() && contains_point(b, &sample(a)?, config)? {
        Containment::SecondContainsFirst
    } else {
        Containment::Disjoint
    };
    debug!(first = %a.kind(), second = %b.kind(), ?relation, "containment");
    Ok(relation)
}

fn sample(shape: &Shape) -> IntersectResult<Point2> {
    shape
        .sample_point()
        .ok_or_else(|| IntersectError::InvalidShape(format!("empty {}", shape.kind())))
}
