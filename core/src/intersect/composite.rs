//! Triangles, rectangles and polygons as unions of their edges.
//!
//! Only boundary crossings are reported. A shape lying entirely inside a
//! composite without touching an edge produces no points here; that relation
//! is answered by [`containment`](super::containment).

use super::result::{Intersection, IntersectionBuilder, IntersectionState};
use super::IntersectConfig;
use crate::geometry::Segment;

/// Intersect every edge with `edge_query` and union the point sets.
///
/// `COINCIDENT` carries over when any edge overlaps the other shape; the rest
/// of each edge result only contributes its points.
pub fn aggregate<F>(edges: &[Segment], mut edge_query: F, config: &IntersectConfig) -> Intersection
where
    F: FnMut(&Segment) -> Intersection,
{
    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    for edge in edges {
        let result = edge_query(edge);
        if result.is_coincident() {
            builder.flag(IntersectionState::COINCIDENT);
        }
        builder.extend(result.into_points());
    }
    builder.finish()
}
