//! Bézier curves against lines, conics and other Bézier curves.

use super::bezout;
use super::linear::Linear;
use super::quadric::Conic;
use super::result::{Intersection, IntersectionBuilder, IntersectionState};
use super::IntersectConfig;
use crate::geometry::bezier::{coordinate_polynomials, to_local_frame};
use crate::geometry::{
    Aabb2, BezierCurve, Circle, CircularArc, CubicBezier, Ellipse, EllipticalArc, Point2, Polynomial,
    QuadraticBezier, Vector2,
};
use tracing::trace;

/// Substitute the curve into the implicit line `A x + B y + C = 0` and keep
/// the curve roots in `[0, 1]` whose line parameter lies in the line's domain.
///
/// A curve lying on the line is `COINCIDENT`, with its endpoints that fall
/// inside the linear domain as reference points.
pub fn linear_bezier<C: BezierCurve>(line: &Linear, curve: &C, config: &IntersectConfig) -> Intersection {
    let eps = config.epsilon;
    if line.is_degenerate(config) {
        trace!("degenerate linear primitive against curve");
        return Intersection::none();
    }

    let d = line.direction;
    let o = line.origin;
    let [x, y] = curve.coordinate_polynomials();
    let implicit = &x * -d.y + &y * d.x + Polynomial::constant(d.y * o.x - d.x * o.y);

    let scale = curve
        .control_points()
        .iter()
        .fold(o.coords.amax(), |m, p| m.max(p.coords.amax()));
    let mut builder = IntersectionBuilder::new(config.merge_tolerance);

    if implicit.is_zero(config.distance_tolerance(scale) * d.norm()) {
        trace!("curve lies on the line");
        builder.flag(IntersectionState::COINCIDENT);
        for p in [curve.point_at(0.0), curve.point_at(1.0)] {
            if line.contains_parameter(line.parameter_of(&p), eps) {
                builder.push_reference(p);
            }
        }
        return builder.finish();
    }

    for s in implicit.roots_in_interval(-eps, 1.0 + eps) {
        let p = curve.point_at(s.clamp(0.0, 1.0));
        let t = line.parameter_of(&p);
        if line.contains_parameter(t, eps) {
            builder.push(p);
        } else {
            trace!(s, t, "curve root outside linear domain");
        }
    }
    builder.finish()
}

pub fn linear_quadratic(line: &Linear, curve: &QuadraticBezier, config: &IntersectConfig) -> Intersection {
    linear_bezier(line, curve, config)
}

pub fn linear_cubic(line: &Linear, curve: &CubicBezier, config: &IntersectConfig) -> Intersection {
    linear_bezier(line, curve, config)
}

/// Intersect two Bézier curves through the Bézout resultant.
///
/// The lower-degree curve is eliminated, so the resultant has degree 4, 6 or
/// 9 in the parameter of the kept curve. Each root in `[0, 1]` is confirmed
/// by recovering a matching parameter on the eliminated curve.
pub fn bezier_bezier<A: BezierCurve, B: BezierCurve>(a: &A, b: &B, config: &IntersectConfig) -> Intersection {
    if b.degree() < a.degree() {
        eliminate(b, a, config)
    } else {
        eliminate(a, b, config)
    }
}

pub fn quadratic_quadratic(a: &QuadraticBezier, b: &QuadraticBezier, config: &IntersectConfig) -> Intersection {
    bezier_bezier(a, b, config)
}

pub fn quadratic_cubic(a: &QuadraticBezier, b: &CubicBezier, config: &IntersectConfig) -> Intersection {
    bezier_bezier(a, b, config)
}

pub fn cubic_cubic(a: &CubicBezier, b: &CubicBezier, config: &IntersectConfig) -> Intersection {
    bezier_bezier(a, b, config)
}

fn eliminate<E: BezierCurve, K: BezierCurve>(
    eliminated: &E,
    kept: &K,
    config: &IntersectConfig,
) -> Intersection {
    let eps = config.epsilon;
    let mut bounds = Aabb2::empty();
    for p in eliminated.control_points().iter().chain(kept.control_points().iter()) {
        bounds.extend(p);
    }
    let extent = (bounds.max - bounds.min).amax();
    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    if extent == 0.0 {
        // Both curves collapse onto the same point
        builder.push(bounds.min);
        return builder.finish();
    }

    let unit = Vector2::new(extent, extent);
    let [ex, ey] = coordinate_polynomials(&to_local_frame(
        &eliminated.power_basis_coefficients(),
        &bounds.min,
        1.0,
        0.0,
        &unit,
    ));
    let [kx, ky] = coordinate_polynomials(&to_local_frame(&kept.power_basis_coefficients(), &bounds.min, 1.0, 0.0, &unit));

    let n = ex.trimmed(eps).degree().max(ey.trimmed(eps).degree());
    if n == 0 {
        let p = Point2::new(ex.coefficient(0), ey.coefficient(0));
        if curve_parameter(&kx, &ky, &p, config).is_some() {
            builder.push(eliminated.point_at(0.0));
        }
        return builder.finish();
    }

    let coefficients = |e: &Polynomial, k: &Polynomial| -> Vec<Polynomial> {
        (0..=n)
            .map(|i| {
                let c = Polynomial::constant(e.coefficient(i));
                if i == 0 {
                    c - k.clone()
                } else {
                    c
                }
            })
            .collect()
    };
    let res = bezout::resultant(&coefficients(&ex, &kx), &coefficients(&ey, &ky));

    if res.is_zero(eps) {
        trace!("vanishing resultant, curves overlap");
        builder.flag(IntersectionState::COINCIDENT);
        return builder.finish();
    }

    for s in res.roots_in_interval(-eps, 1.0 + eps) {
        let s = s.clamp(0.0, 1.0);
        let p = Point2::new(kx.eval(s), ky.eval(s));
        match curve_parameter(&ex, &ey, &p, config) {
            Some(_) => {
                builder.push(kept.point_at(s));
            }
            None => trace!(s, "resultant root without a matching parameter"),
        }
    }
    builder.finish()
}

/// Parameter `r ∈ [0, 1]` at which `(x(r), y(r))` reaches `p`, if any.
///
/// Solves both coordinate equations independently and looks for a pair of
/// roots that agree. An axis along which the curve is constant only has to
/// match `p` and imposes no root. The agreement tolerance grows with the
/// ratio between the coefficient magnitudes and the non-constant ones.
pub(crate) fn curve_parameter(
    x: &Polynomial,
    y: &Polynomial,
    p: &Point2,
    config: &IntersectConfig,
) -> Option<f64> {
    let eps = config.epsilon;
    let px = x - &Polynomial::constant(p.x);
    let py = y - &Polynomial::constant(p.y);
    let tolerance = root_match_tolerance(&px, &py, config);
    let value_tolerance = config.root_tolerance() * p.coords.amax().max(1.0);

    let candidates = |poly: &Polynomial| -> Option<Vec<f64>> {
        let trimmed = poly.trimmed(eps);
        if trimmed.degree() == 0 {
            // Constant along this axis
            return if trimmed.coefficient(0).abs() <= value_tolerance {
                None
            } else {
                Some(Vec::new())
            };
        }
        Some(trimmed.real_roots())
    };

    let in_range = |r: f64| r >= -tolerance && r <= 1.0 + tolerance;
    match (candidates(&px), candidates(&py)) {
        (None, None) => Some(0.0),
        (Some(rx), None) => rx.into_iter().find(|r| in_range(*r)).map(|r| r.clamp(0.0, 1.0)),
        (None, Some(ry)) => ry.into_iter().find(|r| in_range(*r)).map(|r| r.clamp(0.0, 1.0)),
        (Some(rx), Some(ry)) => rx
            .iter()
            .flat_map(|a| ry.iter().map(move |b| (*a, *b)))
            .filter(|(a, b)| (a - b).abs() <= tolerance)
            .map(|(a, b)| 0.5 * (a + b))
            .find(|r| in_range(*r))
            .map(|r| r.clamp(0.0, 1.0)),
    }
}

fn root_match_tolerance(px: &Polynomial, py: &Polynomial, config: &IntersectConfig) -> f64 {
    let magnitude = px.max_abs_coefficient().max(py.max_abs_coefficient());
    let varying = px
        .coefficients()
        .iter()
        .skip(1)
        .chain(py.coefficients().iter().skip(1))
        .fold(0.0_f64, |m, c| m.max(c.abs()));
    if varying == 0.0 {
        return config.root_tolerance();
    }
    config.root_tolerance() * (magnitude / varying).max(1.0)
}

/// Substitute the curve into the conic's unit-frame equation `X² + Y² = 1`.
pub(crate) fn bezier_conic<C: BezierCurve>(curve: &C, conic: &Conic, config: &IntersectConfig) -> Intersection {
    let eps = config.epsilon;
    if conic.is_degenerate(config) {
        trace!("degenerate conic against curve");
        return Intersection::none();
    }

    let radii = Vector2::new(conic.radius_x, conic.radius_y);
    let local = to_local_frame(&curve.power_basis_coefficients(), &conic.center, conic.cos, conic.sin, &radii);
    let [x, y] = coordinate_polynomials(&local);
    let implicit = &x * &x + &y * &y - Polynomial::constant(1.0);

    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    let trimmed = implicit.trimmed(eps);
    if trimmed.degree() == 0 {
        // Only a curve collapsed to a point yields a constant
        let p = curve.point_at(0.0);
        if trimmed.coefficient(0).abs() <= config.root_tolerance() && conic.arc_accepts(&p, config) {
            builder.push(p);
        }
        return builder.finish();
    }

    for s in trimmed.roots_in_interval(-eps, 1.0 + eps) {
        let p = curve.point_at(s.clamp(0.0, 1.0));
        if conic.arc_accepts(&p, config) {
            builder.push(p);
        } else {
            trace!(s, "curve root outside arc sweep");
        }
    }
    builder.finish()
}

pub fn bezier_circle<C: BezierCurve>(curve: &C, circle: &Circle, config: &IntersectConfig) -> Intersection {
    bezier_conic(curve, &Conic::from_circle(circle), config)
}

pub fn bezier_arc<C: BezierCurve>(curve: &C, arc: &CircularArc, config: &IntersectConfig) -> Intersection {
    bezier_conic(curve, &Conic::from_arc(arc), config)
}

pub fn bezier_ellipse<C: BezierCurve>(curve: &C, ellipse: &Ellipse, config: &IntersectConfig) -> Intersection {
    bezier_conic(curve, &Conic::from_ellipse(ellipse), config)
}

pub fn bezier_elliptical_arc<C: BezierCurve>(
    curve: &C,
    arc: &EllipticalArc,
    config: &IntersectConfig,
) -> Intersection {
    bezier_conic(curve, &Conic::from_elliptical_arc(arc), config)
}
