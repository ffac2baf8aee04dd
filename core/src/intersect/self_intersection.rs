//! Loop point of a single cubic Bézier.

use super::result::{Intersection, IntersectionBuilder};
use super::{IntersectConfig, IntersectError, IntersectResult};
use crate::geometry::utils_2d::{cross_2d, points_equal};
use crate::geometry::{CubicBezier, Parametric};
use tracing::trace;

/// Find the point where a cubic crosses itself.
///
/// With `B(t) = a t³ + b t² + c t + d`, two distinct parameters `t1`, `t2`
/// map to the same point iff `a (σ² - π) + b σ + c = 0` for `σ = t1 + t2`
/// and `π = t1 t2`. The two coordinates give a linear system in
/// `(σ² - π, σ)`; the parameters are then the roots of `t² - σ t + π`.
///
/// This is the same condition as asking the cubic `B(t) = B(t1)` along one
/// axis to have three real roots, two of which also solve the other axis:
/// dividing `B(t) - B(t1)` by `t - t1` leaves the quadratic whose second root
/// is `t2`, and eliminating between the axes yields the system above.
///
/// A singular system covers cubics that are really quadratics or lines, and
/// curves whose loop equations are dependent; those return
/// [`IntersectError::NotImplemented`] rather than claiming there is no loop.
pub fn cubic_self_intersection(curve: &CubicBezier, config: &IntersectConfig) -> IntersectResult<Intersection> {
    let eps = config.epsilon;
    let [a, b, c, _] = curve.power_basis();

    let det = cross_2d(&a, &b);
    if det.abs() <= eps * a.norm() * b.norm() || det == 0.0 {
        return Err(IntersectError::NotImplemented(
            "self-intersection of a cubic with dependent loop equations".to_string(),
        ));
    }

    // Cramer's rule on [a b] (u, σ)ᵀ = -c
    let u = cross_2d(&b, &c) / det;
    let sigma = cross_2d(&c, &a) / det;
    let pi = sigma * sigma - u;

    let disc = sigma * sigma - 4.0 * pi;
    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    if disc <= eps {
        trace!(sigma, pi, disc, "no distinct parameter pair, cusp or no loop");
        return Ok(builder.finish());
    }

    let root = disc.sqrt();
    let (t1, t2) = (0.5 * (sigma - root), 0.5 * (sigma + root));
    let in_unit = |t: f64| (-eps..=1.0 + eps).contains(&t);
    if !in_unit(t1) || !in_unit(t2) {
        trace!(t1, t2, "loop parameters outside the curve");
        return Ok(builder.finish());
    }

    let p1 = curve.point_at(t1.clamp(0.0, 1.0));
    let p2 = curve.point_at(t2.clamp(0.0, 1.0));
    if points_equal(&p1, &p2, config.root_tolerance()) {
        builder.push(p1);
    } else {
        trace!(t1, t2, "loop parameters map to different points");
    }
    Ok(builder.finish())
}
