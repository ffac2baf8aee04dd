//! Linear primitives against circles, ellipses and their arcs.
//!
//! Every conic is handled in its local unit frame, where it becomes the unit
//! circle and the line substitution is a plain quadratic in the line
//! parameter. Points are recovered by evaluating the original linear
//! primitive at the accepted roots.

use super::linear::Linear;
use super::result::{Intersection, IntersectionBuilder, IntersectionState};
use super::IntersectConfig;
use crate::geometry::utils_2d::{chord_side_accepts, ellipse_point, rotate_inverse, rotation_cos_sin};
use crate::geometry::{Circle, CircularArc, Ellipse, EllipticalArc, Line, Point2, Ray, Segment, Vector2};
use std::f64::consts::TAU;
use tracing::trace;

/// Circle, ellipse, or an arc of either, as seen by the solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Conic {
    pub center: Point2,
    pub radius_x: f64,
    pub radius_y: f64,
    pub cos: f64,
    pub sin: f64,
    /// `(start_angle, sweep_angle)` when only part of the conic is present.
    pub arc: Option<(f64, f64)>,
}

impl Conic {
    pub fn from_circle(c: &Circle) -> Self {
        Self {
            center: c.center,
            radius_x: c.radius,
            radius_y: c.radius,
            cos: 1.0,
            sin: 0.0,
            arc: None,
        }
    }

    pub fn from_arc(a: &CircularArc) -> Self {
        Self {
            arc: Some((a.start_angle, a.sweep_angle)),
            ..Self::from_circle(&a.circle())
        }
    }

    pub fn from_ellipse(e: &Ellipse) -> Self {
        let (cos, sin) = rotation_cos_sin(e.rotation);
        Self {
            center: e.center,
            radius_x: e.radius_x,
            radius_y: e.radius_y,
            cos,
            sin,
            arc: None,
        }
    }

    pub fn from_elliptical_arc(a: &EllipticalArc) -> Self {
        Self {
            arc: Some((a.start_angle, a.sweep_angle)),
            ..Self::from_ellipse(&a.ellipse())
        }
    }

    pub fn is_circle(&self, config: &IntersectConfig) -> bool {
        (self.radius_x - self.radius_y).abs() <= config.epsilon * self.max_radius()
    }

    pub fn max_radius(&self) -> f64 {
        self.radius_x.max(self.radius_y)
    }

    /// Magnitude of the coordinates involved, for distance tolerances.
    pub fn scale(&self) -> f64 {
        self.center.coords.amax() + self.max_radius()
    }

    /// Zero or non-finite radius, or an arc with no sweep.
    pub fn is_degenerate(&self, config: &IntersectConfig) -> bool {
        let bad_radius = |r: f64| !(r.is_finite() && r > 0.0);
        if bad_radius(self.radius_x) || bad_radius(self.radius_y) {
            return true;
        }
        matches!(self.arc, Some((_, sweep)) if sweep.abs() <= config.epsilon)
    }

    /// Map a world point into the frame where the conic is the unit circle.
    pub fn to_local(&self, p: &Point2) -> Point2 {
        Point2::from(self.local_vector(&(p - self.center)))
    }

    pub fn local_vector(&self, v: &Vector2) -> Vector2 {
        let r = rotate_inverse(v, self.cos, self.sin);
        Vector2::new(r.x / self.radius_x, r.y / self.radius_y)
    }

    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        ellipse_point(&self.center, self.radius_x, self.radius_y, self.cos, self.sin, angle)
    }

    /// Arc endpoints, or `None` for a full conic.
    pub fn arc_endpoints(&self) -> Option<[Point2; 2]> {
        self.arc
            .map(|(start, sweep)| [self.point_at_angle(start), self.point_at_angle(start + sweep)])
    }

    /// Whether a point of the full conic lies on the arc.
    pub fn arc_accepts(&self, p: &Point2, config: &IntersectConfig) -> bool {
        let (start, sweep) = match self.arc {
            None => return true,
            Some(arc) => arc,
        };
        if sweep.abs() >= TAU {
            return true;
        }
        let chord_start = self.point_at_angle(start);
        let chord_end = self.point_at_angle(start + sweep);
        let chord = (chord_end - chord_start).norm().max(self.max_radius() * f64::EPSILON);
        let tolerance = config.distance_tolerance(self.scale()) * chord;
        chord_side_accepts(&chord_start, &chord_end, sweep, p, tolerance)
    }

    /// Implicit value in the unit frame: negative inside, zero on, positive outside.
    pub fn implicit_value(&self, p: &Point2) -> f64 {
        self.to_local(p).coords.norm_squared() - 1.0
    }

    /// Whether `p` lies on the conic (and on the arc, if any).
    pub fn contains_point(&self, p: &Point2, config: &IntersectConfig) -> bool {
        let local_scale = self.scale() / self.radius_x.min(self.radius_y);
        self.implicit_value(p).abs() <= 2.0 * config.distance_tolerance(local_scale)
            && self.arc_accepts(p, config)
    }
}

/// Intersect a linear primitive with a conic.
///
/// In the unit frame the roots are `t0 ± sqrt((1 - |f|²) / |d|²)`, where `f`
/// is the foot of the perpendicular from the center at parameter `t0`.
/// `|f|` beyond one is `OUTSIDE`; within tolerance of one gives a single
/// tangent point; otherwise up to two points survive the domain and arc
/// filters. A segment lying strictly between the two roots is `INSIDE`, and
/// one whose roots both fall on the same side of its domain is `OUTSIDE`.
pub(crate) fn linear_conic(line: &Linear, conic: &Conic, config: &IntersectConfig) -> Intersection {
    let eps = config.epsilon;
    if line.is_degenerate(config) || conic.is_degenerate(config) {
        trace!("degenerate primitive in line-conic query");
        return Intersection::none();
    }

    let o = conic.to_local(&line.origin).coords;
    let d = conic.local_vector(&line.direction);
    let a = d.norm_squared();
    if !(a > 0.0 && a.is_finite()) {
        trace!(a, "direction vanishes in the conic frame");
        return Intersection::none();
    }

    // Roots are measured from the foot of the perpendicular from the center
    let t0 = -o.dot(&d) / a;
    let foot = o + d * t0;
    let half_chord_sq = 1.0 - foot.norm_squared();
    let band = 2.0 * eps;
    if half_chord_sq < -band {
        trace!(half_chord_sq, "line misses conic");
        return Intersection::with_state(IntersectionState::OUTSIDE);
    }

    let roots = if half_chord_sq <= band {
        vec![t0]
    } else {
        let offset = (half_chord_sq / a).sqrt();
        vec![t0 - offset, t0 + offset]
    };

    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    let mut in_domain = 0;
    for &t in &roots {
        if !line.contains_parameter(t, eps) {
            trace!(t, "root outside linear domain");
            continue;
        }
        in_domain += 1;
        let p = line.point_at(t);
        if conic.arc_accepts(&p, config) {
            builder.push(p);
        } else {
            trace!(t, "root outside arc sweep");
        }
    }

    if builder.is_empty() && in_domain == 0 {
        let (lo, hi) = line.domain.interval();
        let first = roots[0];
        let last = roots[roots.len() - 1];
        if conic.arc.is_none() && roots.len() == 2 && first < lo && last > hi {
            builder.flag(IntersectionState::INSIDE);
        } else if conic.arc.is_none() {
            builder.flag(IntersectionState::OUTSIDE);
        }
    }
    builder.finish()
}

pub fn linear_circle(line: &Linear, circle: &Circle, config: &IntersectConfig) -> Intersection {
    linear_conic(line, &Conic::from_circle(circle), config)
}

pub fn linear_arc(line: &Linear, arc: &CircularArc, config: &IntersectConfig) -> Intersection {
    linear_conic(line, &Conic::from_arc(arc), config)
}

pub fn linear_ellipse(line: &Linear, ellipse: &Ellipse, config: &IntersectConfig) -> Intersection {
    linear_conic(line, &Conic::from_ellipse(ellipse), config)
}

pub fn linear_elliptical_arc(
    line: &Linear,
    arc: &EllipticalArc,
    config: &IntersectConfig,
) -> Intersection {
    linear_conic(line, &Conic::from_elliptical_arc(arc), config)
}

pub fn line_circle(line: &Line, circle: &Circle, config: &IntersectConfig) -> Intersection {
    linear_circle(&line.as_linear(), circle, config)
}

pub fn line_arc(line: &Line, arc: &CircularArc, config: &IntersectConfig) -> Intersection {
    linear_arc(&line.as_linear(), arc, config)
}

pub fn line_ellipse(line: &Line, ellipse: &Ellipse, config: &IntersectConfig) -> Intersection {
    linear_ellipse(&line.as_linear(), ellipse, config)
}

pub fn line_elliptical_arc(line: &Line, arc: &EllipticalArc, config: &IntersectConfig) -> Intersection {
    linear_elliptical_arc(&line.as_linear(), arc, config)
}

pub fn ray_circle(ray: &Ray, circle: &Circle, config: &IntersectConfig) -> Intersection {
    linear_circle(&ray.as_linear(), circle, config)
}

pub fn ray_arc(ray: &Ray, arc: &CircularArc, config: &IntersectConfig) -> Intersection {
    linear_arc(&ray.as_linear(), arc, config)
}

pub fn ray_ellipse(ray: &Ray, ellipse: &Ellipse, config: &IntersectConfig) -> Intersection {
    linear_ellipse(&ray.as_linear(), ellipse, config)
}

pub fn ray_elliptical_arc(ray: &Ray, arc: &EllipticalArc, config: &IntersectConfig) -> Intersection {
    linear_elliptical_arc(&ray.as_linear(), arc, config)
}

pub fn segment_circle(segment: &Segment, circle: &Circle, config: &IntersectConfig) -> Intersection {
    linear_circle(&segment.as_linear(), circle, config)
}

pub fn segment_arc(segment: &Segment, arc: &CircularArc, config: &IntersectConfig) -> Intersection {
    linear_arc(&segment.as_linear(), arc, config)
}

pub fn segment_ellipse(segment: &Segment, ellipse: &Ellipse, config: &IntersectConfig) -> Intersection {
    linear_ellipse(&segment.as_linear(), ellipse, config)
}

pub fn segment_elliptical_arc(
    segment: &Segment,
    arc: &EllipticalArc,
    config: &IntersectConfig,
) -> Intersection {
    linear_elliptical_arc(&segment.as_linear(), arc, config)
}
