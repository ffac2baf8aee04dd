//! Intersection outcome: state flags plus the set of meeting points.

use crate::geometry::utils_2d::points_equal;
use crate::geometry::Point2;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Classification of how two primitives relate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct IntersectionState: u8 {
        const NO_INTERSECTION = 0b0000_0001;
        const INTERSECTION    = 0b0000_0010;
        /// Linear primitives with the same direction that never meet.
        const PARALLEL        = 0b0000_0100;
        /// Infinitely many common points; only reference points are recorded.
        const COINCIDENT      = 0b0000_1000;
        const INSIDE          = 0b0001_0000;
        const OUTSIDE         = 0b0010_0000;
    }
}

/// Result of intersecting two primitives.
///
/// Points form a set: no two are closer than the merge tolerance used to
/// build the result. Their order follows discovery and carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    state: IntersectionState,
    points: Vec<Point2>,
}

impl Intersection {
    /// Empty result in the `NO_INTERSECTION` state.
    pub fn none() -> Self {
        Self::with_state(IntersectionState::NO_INTERSECTION)
    }

    /// Empty result carrying `state`.
    pub fn with_state(state: IntersectionState) -> Self {
        Self { state, points: Vec::new() }
    }

    pub fn state(&self) -> IntersectionState {
        self.state
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn has_intersection(&self) -> bool {
        self.state.contains(IntersectionState::INTERSECTION)
    }

    pub fn is_coincident(&self) -> bool {
        self.state.contains(IntersectionState::COINCIDENT)
    }

    /// Whether some recorded point is within `tolerance` of `p`.
    pub fn contains_point(&self, p: &Point2, tolerance: f64) -> bool {
        self.points.iter().any(|q| (q - p).norm() <= tolerance)
    }
}

/// Collects points into a local buffer and freezes them into an [`Intersection`].
#[derive(Debug, Clone)]
pub struct IntersectionBuilder {
    state: IntersectionState,
    points: Vec<Point2>,
    tolerance: f64,
}

impl IntersectionBuilder {
    /// `tolerance` is the relative distance under which two points are the same.
    pub fn new(tolerance: f64) -> Self {
        Self {
            state: IntersectionState::empty(),
            points: Vec::new(),
            tolerance,
        }
    }

    /// Record a crossing point; upgrades the state to `INTERSECTION`.
    pub fn push(&mut self, p: Point2) -> &mut Self {
        self.insert(p);
        self.state.insert(IntersectionState::INTERSECTION);
        self
    }

    /// Record a boundary point of an overlap without claiming a crossing.
    pub fn push_reference(&mut self, p: Point2) -> &mut Self {
        self.insert(p);
        self
    }

    pub fn extend<I: IntoIterator<Item = Point2>>(&mut self, points: I) -> &mut Self {
        for p in points {
            self.push(p);
        }
        self
    }

    /// Union another result into this one, keeping its flags except
    /// `NO_INTERSECTION`, which is decided when the builder finishes.
    pub fn merge(&mut self, other: &Intersection) -> &mut Self {
        for p in other.points() {
            self.insert(*p);
        }
        let carried = other.state() - IntersectionState::NO_INTERSECTION;
        self.state.insert(carried);
        self
    }

    pub fn flag(&mut self, state: IntersectionState) -> &mut Self {
        self.state.insert(state);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn finish(self) -> Intersection {
        let mut state = self.state;
        if state.contains(IntersectionState::INTERSECTION) {
            state.remove(IntersectionState::NO_INTERSECTION);
        } else if state.is_empty() {
            state = IntersectionState::NO_INTERSECTION;
        }
        Intersection { state, points: self.points }
    }

    fn insert(&mut self, p: Point2) {
        if !self.points.iter().any(|q| points_equal(q, &p, self.tolerance)) {
            self.points.push(p);
        }
    }
}
