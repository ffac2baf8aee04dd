//! Power-basis (polynomial) form of Bézier curves.
//!
//! A curve `B(t) = Σ c_i t^i` is described by its coefficient vectors,
//! highest degree first, which is what the curve solvers substitute into
//! implicit equations.

use super::polynomial::Polynomial;
use super::primitives::{CubicBezier, Parametric, QuadraticBezier};
use super::utils_2d::rotate_inverse;
use super::{Point2, Vector2};

pub trait BezierCurve: Parametric {
    fn degree(&self) -> usize;

    fn control_points(&self) -> Vec<Point2>;

    /// Coefficient vectors ordered highest degree first; the last entry is the start point.
    fn power_basis_coefficients(&self) -> Vec<Vector2>;

    /// `[x(t), y(t)]` as polynomials in `t`.
    fn coordinate_polynomials(&self) -> [Polynomial; 2] {
        coordinate_polynomials(&self.power_basis_coefficients())
    }
}

/// Split coefficient vectors (highest degree first) into per-axis polynomials.
pub fn coordinate_polynomials(coefficients: &[Vector2]) -> [Polynomial; 2] {
    let xs: Vec<f64> = coefficients.iter().map(|c| c.x).collect();
    let ys: Vec<f64> = coefficients.iter().map(|c| c.y).collect();
    [Polynomial::new(&xs), Polynomial::new(&ys)]
}

/// Express power-basis coefficients in a local frame: translate by `-origin`,
/// rotate by the inverse of (cos, sin), then divide each axis by `scale`.
///
/// Only the constant term is a position; the others are directions and
/// skip the translation.
pub fn to_local_frame(
    coefficients: &[Vector2],
    origin: &Point2,
    cos: f64,
    sin: f64,
    scale: &Vector2,
) -> Vec<Vector2> {
    let last = coefficients.len().saturating_sub(1);
    coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let v = if i == last { c - origin.coords } else { *c };
            let rotated = rotate_inverse(&v, cos, sin);
            Vector2::new(rotated.x / scale.x, rotated.y / scale.y)
        })
        .collect()
}

impl QuadraticBezier {
    /// `(a, b, c)` with `B(t) = a t² + b t + c`.
    pub fn power_basis(&self) -> [Vector2; 3] {
        let (p0, p1, p2) = (self.p0.coords, self.p1.coords, self.p2.coords);
        [p0 - p1 * 2.0 + p2, (p1 - p0) * 2.0, p0]
    }
}

impl Parametric for QuadraticBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        Point2::from(
            self.p0.coords * (mt * mt) + self.p1.coords * (2.0 * mt * t) + self.p2.coords * (t * t),
        )
    }
}

impl BezierCurve for QuadraticBezier {
    fn degree(&self) -> usize {
        2
    }

    fn control_points(&self) -> Vec<Point2> {
        vec![self.p0, self.p1, self.p2]
    }

    fn power_basis_coefficients(&self) -> Vec<Vector2> {
        self.power_basis().to_vec()
    }
}

impl CubicBezier {
    /// `(a, b, c, d)` with `B(t) = a t³ + b t² + c t + d`.
    pub fn power_basis(&self) -> [Vector2; 4] {
        let (p0, p1, p2, p3) = (self.p0.coords, self.p1.coords, self.p2.coords, self.p3.coords);
        [
            -p0 + p1 * 3.0 - p2 * 3.0 + p3,
            p0 * 3.0 - p1 * 6.0 + p2 * 3.0,
            (p1 - p0) * 3.0,
            p0,
        ]
    }
}

impl Parametric for CubicBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        Point2::from(
            self.p0.coords * (mt * mt * mt)
                + self.p1.coords * (3.0 * mt * mt * t)
                + self.p2.coords * (3.0 * mt * t * t)
                + self.p3.coords * (t * t * t),
        )
    }
}

impl BezierCurve for CubicBezier {
    fn degree(&self) -> usize {
        3
    }

    fn control_points(&self) -> Vec<Point2> {
        vec![self.p0, self.p1, self.p2, self.p3]
    }

    fn power_basis_coefficients(&self) -> Vec<Vector2> {
        self.power_basis().to_vec()
    }
}
