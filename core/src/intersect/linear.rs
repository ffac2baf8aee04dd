//! Line, ray and segment pairs, solved with 2×2 determinants.

use super::result::{Intersection, IntersectionBuilder, IntersectionState};
use super::IntersectConfig;
use crate::geometry::utils_2d::{cross_2d, project_parameter};
use crate::geometry::{Line, Matrix2, Point2, Ray, Segment, Vector2};
use tracing::trace;

/// Parameter range of a linear primitive `origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearDomain {
    /// t unrestricted
    Line,
    /// t ∈ [0, ∞)
    Ray,
    /// t ∈ [0, 1]
    Segment,
}

impl LinearDomain {
    pub fn contains(&self, t: f64, epsilon: f64) -> bool {
        match self {
            LinearDomain::Line => true,
            LinearDomain::Ray => t >= -epsilon,
            LinearDomain::Segment => t >= -epsilon && t <= 1.0 + epsilon,
        }
    }

    pub(crate) fn interval(&self) -> (f64, f64) {
        match self {
            LinearDomain::Line => (f64::NEG_INFINITY, f64::INFINITY),
            LinearDomain::Ray => (0.0, f64::INFINITY),
            LinearDomain::Segment => (0.0, 1.0),
        }
    }
}

/// Common (origin, direction, domain) view of lines, rays and segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub origin: Point2,
    pub direction: Vector2,
    pub domain: LinearDomain,
}

impl Linear {
    pub fn new(origin: Point2, direction: Vector2, domain: LinearDomain) -> Self {
        Self { origin, direction, domain }
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }

    pub fn contains_parameter(&self, t: f64, epsilon: f64) -> bool {
        self.domain.contains(t, epsilon)
    }

    /// Zero direction, or a segment shorter than the distance tolerance.
    pub fn is_degenerate(&self, config: &IntersectConfig) -> bool {
        let length = self.direction.norm();
        match self.domain {
            LinearDomain::Segment => length <= config.distance_tolerance(self.origin.coords.amax()),
            LinearDomain::Line | LinearDomain::Ray => length == 0.0,
        }
    }

    /// Parameter of `p` on this linear primitive measured along the dominant
    /// axis of the direction, avoiding division by a near-zero component.
    pub fn parameter_of(&self, p: &Point2) -> f64 {
        if self.direction.x.abs() >= self.direction.y.abs() {
            (p.x - self.origin.x) / self.direction.x
        } else {
            (p.y - self.origin.y) / self.direction.y
        }
    }

    /// Whether `p` lies on the primitive, within tolerance.
    pub fn contains_point(&self, p: &Point2, config: &IntersectConfig) -> bool {
        let len = self.direction.norm();
        if len == 0.0 {
            return false;
        }
        let offset = p - self.origin;
        let distance = cross_2d(&self.direction, &offset).abs() / len;
        let scale = self.origin.coords.amax().max(p.coords.amax());
        distance <= config.distance_tolerance(scale)
            && self.contains_parameter(project_parameter(&self.origin, &self.direction, p), config.epsilon)
    }
}

impl Line {
    pub fn as_linear(&self) -> Linear {
        Linear::new(self.origin, self.direction, LinearDomain::Line)
    }
}

impl Ray {
    pub fn as_linear(&self) -> Linear {
        Linear::new(self.origin, self.direction, LinearDomain::Ray)
    }
}

impl Segment {
    pub fn as_linear(&self) -> Linear {
        Linear::new(self.start, self.direction(), LinearDomain::Segment)
    }
}

/// Intersect two linear primitives.
///
/// Non-parallel pairs are solved by Cramer's rule and the point is kept when
/// both parameters lie in their domains. Parallel pairs are `PARALLEL`, or
/// `COINCIDENT` when they share a line; a coincident overlap records its
/// finite boundary points, a single touching point is an ordinary
/// intersection, and collinear primitives that do not overlap do not meet.
pub fn linear_linear(a: &Linear, b: &Linear, config: &IntersectConfig) -> Intersection {
    let eps = config.epsilon;
    if a.is_degenerate(config) || b.is_degenerate(config) {
        trace!("degenerate linear primitive, skipping");
        return Intersection::none();
    }

    let det = Matrix2::from_columns(&[a.direction, b.direction]).determinant();
    let offset = b.origin - a.origin;
    let mut builder = IntersectionBuilder::new(config.merge_tolerance);

    if det.abs() <= eps * a.direction.norm() * b.direction.norm() {
        let distance = cross_2d(&offset, &a.direction).abs() / a.direction.norm();
        let scale = a.origin.coords.amax().max(b.origin.coords.amax());
        if distance > config.distance_tolerance(scale) {
            trace!(det, distance, "parallel linear primitives");
            return Intersection::with_state(IntersectionState::PARALLEL);
        }
        return collinear_overlap(a, b, config);
    }

    let ta = cross_2d(&offset, &b.direction) / det;
    let tb = cross_2d(&offset, &a.direction) / det;
    if a.contains_parameter(ta, eps) && b.contains_parameter(tb, eps) {
        builder.push(a.point_at(ta));
    } else {
        trace!(ta, tb, "crossing outside of parameter domain");
    }
    builder.finish()
}

/// Overlap of two collinear primitives, measured in `a`'s parameter.
fn collinear_overlap(a: &Linear, b: &Linear, config: &IntersectConfig) -> Intersection {
    let eps = config.epsilon;
    let (a_lo, a_hi) = a.domain.interval();
    let (b_lo, b_hi) = b.domain.interval();

    let t0 = project_parameter(&a.origin, &a.direction, &b.origin);
    let k = b.direction.dot(&a.direction) / a.direction.norm_squared();
    let (mapped_lo, mapped_hi) = if k > 0.0 {
        (t0 + k * b_lo, t0 + k * b_hi)
    } else {
        (t0 + k * b_hi, t0 + k * b_lo)
    };

    let lo = a_lo.max(mapped_lo);
    let hi = a_hi.min(mapped_hi);
    let mut builder = IntersectionBuilder::new(config.merge_tolerance);

    if hi < lo - eps {
        trace!(lo, hi, "collinear but disjoint");
        return builder.finish();
    }
    if hi - lo <= eps {
        builder.push(a.point_at(lo));
        return builder.finish();
    }

    builder.flag(IntersectionState::COINCIDENT);
    for t in [lo, hi] {
        if t.is_finite() {
            builder.push_reference(a.point_at(t));
        }
    }
    builder.finish()
}

pub fn line_line(a: &Line, b: &Line, config: &IntersectConfig) -> Intersection {
    linear_linear(&a.as_linear(), &b.as_linear(), config)
}

pub fn line_ray(a: &Line, b: &Ray, config: &IntersectConfig) -> Intersection {
    linear_linear(&a.as_linear(), &b.as_linear(), config)
}

pub fn line_segment(a: &Line, b: &Segment, config: &IntersectConfig) -> Intersection {
    linear_linear(&a.as_linear(), &b.as_linear(), config)
}

pub fn ray_ray(a: &Ray, b: &Ray, config: &IntersectConfig) -> Intersection {
    linear_linear(&a.as_linear(), &b.as_linear(), config)
}

pub fn ray_segment(a: &Ray, b: &Segment, config: &IntersectConfig) -> Intersection {
    linear_linear(&a.as_linear(), &b.as_linear(), config)
}

pub fn segment_segment(a: &Segment, b: &Segment, config: &IntersectConfig) -> Intersection {
    linear_linear(&a.as_linear(), &b.as_linear(), config)
}
