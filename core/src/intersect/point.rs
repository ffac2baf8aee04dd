//! Point-on-primitive queries.

use super::composite;
use super::curve::curve_parameter;
use super::linear::Linear;
use super::quadric::Conic;
use super::result::{Intersection, IntersectionBuilder};
use super::IntersectConfig;
use crate::geometry::utils_2d::points_equal;
use crate::geometry::{BezierCurve, Point2, Shape};

fn single(p: &Point2, hit: bool, config: &IntersectConfig) -> Intersection {
    let mut builder = IntersectionBuilder::new(config.merge_tolerance);
    if hit {
        builder.push(*p);
    }
    builder.finish()
}

pub fn point_point(p: &Point2, q: &Point2, config: &IntersectConfig) -> Intersection {
    single(p, points_equal(p, q, config.merge_tolerance), config)
}

pub fn point_linear(p: &Point2, line: &Linear, config: &IntersectConfig) -> Intersection {
    let hit = !line.is_degenerate(config) && line.contains_point(p, config);
    single(p, hit, config)
}

pub(crate) fn point_conic(p: &Point2, conic: &Conic, config: &IntersectConfig) -> Intersection {
    let hit = !conic.is_degenerate(config) && conic.contains_point(p, config);
    single(p, hit, config)
}

pub fn point_bezier<C: BezierCurve>(p: &Point2, curve: &C, config: &IntersectConfig) -> Intersection {
    let [x, y] = curve.coordinate_polynomials();
    let hit = curve_parameter(&x, &y, p, config)
        .map(|t| points_equal(&curve.point_at(t), p, config.root_tolerance()))
        .unwrap_or(false);
    single(p, hit, config)
}

/// The point against any shape.
pub fn point_shape(p: &Point2, shape: &Shape, config: &IntersectConfig) -> Intersection {
    match shape {
        Shape::Point(q) => point_point(p, q, config),
        Shape::Line(l) => point_linear(p, &l.as_linear(), config),
        Shape::Ray(r) => point_linear(p, &r.as_linear(), config),
        Shape::Segment(s) => point_linear(p, &s.as_linear(), config),
        Shape::Circle(c) => point_conic(p, &Conic::from_circle(c), config),
        Shape::CircularArc(a) => point_conic(p, &Conic::from_arc(a), config),
        Shape::Ellipse(e) => point_conic(p, &Conic::from_ellipse(e), config),
        Shape::EllipticalArc(a) => point_conic(p, &Conic::from_elliptical_arc(a), config),
        Shape::QuadraticBezier(q) => point_bezier(p, q, config),
        Shape::CubicBezier(c) => point_bezier(p, c, config),
        Shape::Triangle(t) => composite::aggregate(&t.edges(), |e| point_linear(p, &e.as_linear(), config), config),
        Shape::Rectangle(r) => composite::aggregate(&r.edges(), |e| point_linear(p, &e.as_linear(), config), config),
        Shape::Polygon(poly) => {
            composite::aggregate(&poly.edges(), |e| point_linear(p, &e.as_linear(), config), config)
        }
    }
}
