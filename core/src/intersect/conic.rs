//! Conic against conic.
//!
//! Pairs of circles and circular arcs use the two-circle construction. Any
//! pair involving an ellipse is solved through the Bézout resultant of the
//! two implicit conics `A x² + B xy + C y² + D x + E y + F = 0`.

use super::bezout;
use super::quadric::Conic;
use super::result::{Intersection, IntersectionBuilder, IntersectionState};
use super::IntersectConfig;
use crate::geometry::{Circle, CircularArc, Ellipse, EllipticalArc, Point2, Polynomial, Vector2};
use tracing::trace;

pub(crate) fn conic_conic(a: &Conic, b: &Conic, config: &IntersectConfig) -> Intersection {
    if a.is_degenerate(config) || b.is_degenerate(config) {
        trace!("degenerate conic pair");
        return Intersection::none();
    }
    if a.is_circle(config) && b.is_circle(config) {
        circle_pair(a, b, config)
    } else {
        general_pair(a, b, config)
    }
}

pub fn circle_circle(a: &Circle, b: &Circle, config: &IntersectConfig) -> Intersection {
    conic_conic(&Conic::from_circle(a), &Conic::from_circle(b), config)
}

pub fn circle_arc(a: &Circle, b: &CircularArc, config: &IntersectConfig) -> Intersection {
    conic_conic(&Conic::from_circle(a), &Conic::from_arc(b), config)
}

pub fn arc_arc(a: &CircularArc, b: &CircularArc, config: &IntersectConfig) -> Intersection {
    conic_conic(&Conic::from_arc(a), &Conic::from_arc(b), config)
}

pub fn circle_ellipse(a: &Circle, b: &Ellipse, config: &IntersectConfig) -> Intersection {
    conic_conic(&Conic::from_circle(a), &Conic::from_ellipse(b), config)
}

pub fn ellipse_ellipse(a: &Ellipse, b: &Ellipse, config: &IntersectConfig) -> Intersection {
    conic_conic(&Conic::from_ellipse(a), &Conic::from_ellipse(b), config)
}

pub fn ellipse_elliptical_arc(a: &Ellipse, b: &EllipticalArc, config: &IntersectConfig) -> Intersection {
    conic_conic(&Conic::from_ellipse(a), &Conic::from_elliptical_arc(b), config)
}

pub fn elliptical_arc_elliptical_arc(
    a: &EllipticalArc,
    b: &EllipticalArc,
    config: &IntersectConfig,
) -> Intersection {
    conic_conic(&Conic::from_elliptical_arc(a), &Conic::from_elliptical_arc(b), config)
}

/// Coincident conics: the arc endpoints lying on the other conic bound the
/// shared part. Two arcs of one conic that do not touch share nothing.
fn coincident(a: &Conic, b: &Conic, config: &IntersectConfig) -> Intersection {
    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    let mut shared = a.arc.is_none() || b.arc.is_none();
    for (arc, other) in [(a, b), (b, a)] {
        for p in arc.arc_endpoints().into_iter().flatten() {
            if other.arc_accepts(&p, config) {
                builder.push_reference(p);
                shared = true;
            }
        }
    }
    if !shared {
        trace!("arcs of the same conic without overlap");
        return Intersection::none();
    }
    builder.flag(IntersectionState::COINCIDENT);
    builder.finish()
}

fn circle_pair(a: &Conic, b: &Conic, config: &IntersectConfig) -> Intersection {
    let (r1, r2) = (a.radius_x, b.radius_x);
    let offset = b.center - a.center;
    let d = offset.norm();
    let tolerance = config.distance_tolerance(a.scale().max(b.scale()));

    if d <= tolerance && (r1 - r2).abs() <= tolerance {
        return coincident(a, b, config);
    }
    if d > r1 + r2 + tolerance {
        trace!(d, "circles too far apart");
        return Intersection::with_state(IntersectionState::OUTSIDE);
    }
    if d < (r1 - r2).abs() - tolerance {
        trace!(d, "one circle nested in the other");
        return Intersection::with_state(IntersectionState::INSIDE);
    }

    // Distance from a's center to the radical line, and half chord length
    let along = (d * d + r1 * r1 - r2 * r2) / (2.0 * d);
    let h_sq = r1 * r1 - along * along;
    let base = a.center + offset * (along / d);

    let candidates = if h_sq <= config.epsilon * r1 * r1 {
        vec![base]
    } else {
        let h = h_sq.sqrt();
        let perp = Vector2::new(-offset.y, offset.x) * (h / d);
        vec![base + perp, base - perp]
    };

    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    for p in candidates {
        if a.arc_accepts(&p, config) && b.arc_accepts(&p, config) {
            builder.push(p);
        }
    }
    builder.finish()
}

/// Implicit coefficients `[A, B, C, D, E, F]` of a conic mapped by
/// `p' = (p - origin) / scale`.
fn implicit_coefficients(conic: &Conic, origin: &Point2, scale: f64) -> [f64; 6] {
    let center = (conic.center - origin) / scale;
    let (h, k) = (center.x, center.y);
    let (c, s) = (conic.cos, conic.sin);
    let inv_x = (scale / conic.radius_x).powi(2);
    let inv_y = (scale / conic.radius_y).powi(2);

    let a = c * c * inv_x + s * s * inv_y;
    let b = 2.0 * c * s * (inv_x - inv_y);
    let cc = s * s * inv_x + c * c * inv_y;
    let d = -2.0 * a * h - b * k;
    let e = -2.0 * cc * k - b * h;
    let f = a * h * h + b * h * k + cc * k * k - 1.0;
    [a, b, cc, d, e, f]
}

fn implicit_eval(q: &[f64; 6], p: &Point2) -> f64 {
    let [a, b, c, d, e, f] = *q;
    a * p.x * p.x + b * p.x * p.y + c * p.y * p.y + d * p.x + e * p.y + f
}

/// Coefficients, in `x`, of the conic as polynomials in `y`.
fn x_coefficients(q: &[f64; 6]) -> Vec<Polynomial> {
    let [a, b, c, d, e, f] = *q;
    vec![
        Polynomial::new(&[c, e, f]),
        Polynomial::new(&[b, d]),
        Polynomial::constant(a),
    ]
}

fn general_pair(a: &Conic, b: &Conic, config: &IntersectConfig) -> Intersection {
    let origin = a.center;
    let scale = a.max_radius().max(b.max_radius());
    let qa = implicit_coefficients(a, &origin, scale);
    let qb = implicit_coefficients(b, &origin, scale);

    let res = bezout::resultant(&x_coefficients(&qa), &x_coefficients(&qb));
    if res.is_zero(config.epsilon) {
        return coincident(a, b, config);
    }

    let tolerance = config.root_tolerance();
    let mut accepted: Vec<Point2> = Vec::new();
    for y in res.real_roots() {
        // x from the first conic; the second one confirms
        let [qa2, qb2, qc2, qd2, qe2, qf2] = qa;
        let lin = qb2 * y + qd2;
        let cst = qc2 * y * y + qe2 * y + qf2;
        let disc = (lin * lin - 4.0 * qa2 * cst).max(0.0);
        let root = disc.sqrt();
        for x in [(-lin + root) / (2.0 * qa2), (-lin - root) / (2.0 * qa2)] {
            let local = Point2::new(x, y);
            if implicit_eval(&qa, &local).abs() > tolerance || implicit_eval(&qb, &local).abs() > tolerance {
                continue;
            }
            if accepted.iter().any(|q| (q - local).norm() <= tolerance) {
                continue;
            }
            accepted.push(local);
        }
    }

    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    for local in accepted {
        let p = origin + local.coords * scale;
        if a.arc_accepts(&p, config) && b.arc_accepts(&p, config) {
            builder.push(p);
        } else {
            trace!(x = p.x, y = p.y, "conic crossing outside arc sweep");
        }
    }

    if builder.is_empty() && a.arc.is_none() && b.arc.is_none() {
        // Without crossings, one boundary point decides nesting
        let nested = a.implicit_value(&b.point_at_angle(0.0)) < 0.0
            || b.implicit_value(&a.point_at_angle(0.0)) < 0.0;
        builder.flag(if nested { IntersectionState::INSIDE } else { IntersectionState::OUTSIDE });
    }
    builder.finish()
}
