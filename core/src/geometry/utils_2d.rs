//! 2D geometry utilities shared by the intersection solvers.
//!
//! Pure functions over `Point2`/`Vector2`: orientation tests, rotations,
//! projections and the winding-number polygon test.

use super::{Point2, Vector2};
use std::f64::consts::TAU;

/// Values of cos/sin closer to zero than this are snapped to exactly zero.
const TRIG_SNAP: f64 = 4.0 * f64::EPSILON;

// =============================================================================
// Point Operations
// =============================================================================

/// Check if two points are equal within `tolerance`, scaled by their magnitude.
#[inline]
pub fn points_equal(p1: &Point2, p2: &Point2, tolerance: f64) -> bool {
    let scale = p1.coords.amax().max(p2.coords.amax()).max(1.0);
    (p1 - p2).amax() <= tolerance * scale
}

/// Linear interpolation between two points.
#[inline]
pub fn lerp(p1: &Point2, p2: &Point2, t: f64) -> Point2 {
    p1 + (p2 - p1) * t
}

// =============================================================================
// Vector Operations
// =============================================================================

/// 2D cross product (z-component of 3D cross product).
/// Positive if v2 is counter-clockwise from v1.
#[inline]
pub fn cross_2d(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Twice the signed area of the triangle (a, b, c).
/// Positive when the triple turns counter-clockwise.
#[inline]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    cross_2d(&(b - a), &(c - a))
}

/// Cosine and sine of `angle` with near-zero values snapped to zero,
/// so that quarter turns produce exact axis-aligned results.
pub fn rotation_cos_sin(angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    let snap = |v: f64| if v.abs() < TRIG_SNAP { 0.0 } else { v };
    (snap(cos), snap(sin))
}

/// Rotate `v` counter-clockwise by the angle whose cosine/sine are given.
#[inline]
pub fn rotate(v: &Vector2, cos: f64, sin: f64) -> Vector2 {
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotate `v` clockwise by the angle whose cosine/sine are given.
#[inline]
pub fn rotate_inverse(v: &Vector2, cos: f64, sin: f64) -> Vector2 {
    Vector2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

// =============================================================================
// Line Operations
// =============================================================================

/// Find parameter t where `point` projects onto the line `origin + t * direction`.
///
/// A direction negligible next to the offset it would be measured against
/// yields 0.
pub fn project_parameter(origin: &Point2, direction: &Vector2, point: &Point2) -> f64 {
    let offset = point - origin;
    let len_sq = direction.norm_squared();
    if len_sq <= (f64::EPSILON * offset.norm()).powi(2) {
        return 0.0;
    }
    offset.dot(direction) / len_sq
}

// =============================================================================
// Arc Operations
// =============================================================================

/// Point on an (optionally rotated) ellipse at parametric angle `angle`.
#[inline]
pub fn ellipse_point(
    center: &Point2,
    radius_x: f64,
    radius_y: f64,
    cos: f64,
    sin: f64,
    angle: f64,
) -> Point2 {
    let (s, c) = angle.sin_cos();
    center + rotate(&Vector2::new(radius_x * c, radius_y * s), cos, sin)
}

/// Chord-sign test for a swept arc.
///
/// A point on the full conic lies within the arc when the orientation of
/// (chord_start, chord_end, point) has the opposite sign of the sweep, or is
/// zero within `tolerance` (the chord endpoints themselves).
pub fn chord_side_accepts(
    chord_start: &Point2,
    chord_end: &Point2,
    sweep: f64,
    point: &Point2,
    tolerance: f64,
) -> bool {
    if sweep.abs() >= TAU {
        return true;
    }
    let side = orientation(chord_start, chord_end, point);
    side * sweep.signum() <= tolerance
}

// =============================================================================
// Polygon Operations
// =============================================================================

/// Test if a point is inside a polygon using the winding number algorithm.
/// Works for both convex and concave polygons.
pub fn point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut winding: i32 = 0;

    for i in 0..n {
        let p1 = &polygon[i];
        let p2 = &polygon[(i + 1) % n];

        if p1.y <= point.y {
            if p2.y > point.y && orientation(p1, p2, point) > 0.0 {
                // Upward crossing
                winding += 1;
            }
        } else if p2.y <= point.y && orientation(p1, p2, point) < 0.0 {
            // Downward crossing
            winding -= 1;
        }
    }

    winding != 0
}

// =============================================================================
// Tests
// =============================================================================
