//! Exhaustive pairwise dispatch over [`Shape`] kinds.
//!
//! The first shape selects a per-kind routine, which matches the second shape
//! without wildcard arms; adding a `Shape` variant fails to compile until every
//! pairing is covered. Pairs are solved by one canonical routine, reached with
//! swapped arguments from the other side.

use super::composite::aggregate;
use super::conic::conic_conic;
use super::curve::{bezier_bezier, bezier_conic, linear_bezier};
use super::linear::{linear_linear, Linear};
use super::point::{point_bezier, point_conic, point_linear, point_shape};
use super::quadric::{linear_conic, Conic};
use super::result::Intersection;
use super::IntersectConfig;
use crate::geometry::{BezierCurve, Segment, Shape};
use tracing::debug;

/// Intersect two shapes with the default tolerances.
pub fn intersect(a: &Shape, b: &Shape) -> Intersection {
    intersect_with(a, b, &IntersectConfig::default())
}

pub fn intersect_with(a: &Shape, b: &Shape, config: &IntersectConfig) -> Intersection {
    let result = match a {
        Shape::Point(p) => point_shape(p, b, config),
        Shape::Line(l) => linear_shape(&l.as_linear(), b, config),
        Shape::Ray(r) => linear_shape(&r.as_linear(), b, config),
        Shape::Segment(s) => linear_shape(&s.as_linear(), b, config),
        Shape::Circle(c) => conic_shape(&Conic::from_circle(c), b, config),
        Shape::CircularArc(arc) => conic_shape(&Conic::from_arc(arc), b, config),
        Shape::Ellipse(e) => conic_shape(&Conic::from_ellipse(e), b, config),
        Shape::EllipticalArc(arc) => conic_shape(&Conic::from_elliptical_arc(arc), b, config),
        Shape::QuadraticBezier(q) => bezier_shape(q, b, config),
        Shape::CubicBezier(c) => bezier_shape(c, b, config),
        Shape::Triangle(t) => composite_shape(&t.edges(), b, config),
        Shape::Rectangle(r) => composite_shape(&r.edges(), b, config),
        Shape::Polygon(poly) => composite_shape(&poly.edges(), b, config),
    };
    debug!(
        first = %a.kind(),
        second = %b.kind(),
        state = ?result.state(),
        points = result.len(),
        "intersect"
    );
    result
}

/// Cheap yes/no query: bounding boxes are compared before solving.
///
/// True when the shapes share at least one point or overlap along a stretch.
pub fn intersects(a: &Shape, b: &Shape, config: &IntersectConfig) -> bool {
    if let (Some(ba), Some(bb)) = (a.bounds(), b.bounds()) {
        let scale = [ba.min, ba.max, bb.min, bb.max]
            .iter()
            .fold(0.0_f64, |m, p| m.max(p.coords.amax()));
        if !ba.overlaps(&bb, config.distance_tolerance(scale)) {
            return false;
        }
    }
    let result = intersect_with(a, b, config);
    !result.is_empty() || result.is_coincident()
}

impl Shape {
    pub fn intersect(&self, other: &Shape) -> Intersection {
        intersect(self, other)
    }

    pub fn intersect_with(&self, other: &Shape, config: &IntersectConfig) -> Intersection {
        intersect_with(self, other, config)
    }

    pub fn intersects(&self, other: &Shape, config: &IntersectConfig) -> bool {
        intersects(self, other, config)
    }
}

fn linear_shape(line: &Linear, b: &Shape, config: &IntersectConfig) -> Intersection {
    let edges = |e: &Segment| linear_linear(line, &e.as_linear(), config);
    match b {
        Shape::Point(p) => point_linear(p, line, config),
        Shape::Line(l) => linear_linear(line, &l.as_linear(), config),
        Shape::Ray(r) => linear_linear(line, &r.as_linear(), config),
        Shape::Segment(s) => linear_linear(line, &s.as_linear(), config),
        Shape::Circle(c) => linear_conic(line, &Conic::from_circle(c), config),
        Shape::CircularArc(arc) => linear_conic(line, &Conic::from_arc(arc), config),
        Shape::Ellipse(e) => linear_conic(line, &Conic::from_ellipse(e), config),
        Shape::EllipticalArc(arc) => linear_conic(line, &Conic::from_elliptical_arc(arc), config),
        Shape::QuadraticBezier(q) => linear_bezier(line, q, config),
        Shape::CubicBezier(c) => linear_bezier(line, c, config),
        Shape::Triangle(t) => aggregate(&t.edges(), edges, config),
        Shape::Rectangle(r) => aggregate(&r.edges(), edges, config),
        Shape::Polygon(poly) => aggregate(&poly.edges(), edges, config),
    }
}

fn conic_shape(conic: &Conic, b: &Shape, config: &IntersectConfig) -> Intersection {
    let edges = |e: &Segment| linear_conic(&e.as_linear(), conic, config);
    match b {
        Shape::Point(p) => point_conic(p, conic, config),
        Shape::Line(l) => linear_conic(&l.as_linear(), conic, config),
        Shape::Ray(r) => linear_conic(&r.as_linear(), conic, config),
        Shape::Segment(s) => linear_conic(&s.as_linear(), conic, config),
        Shape::Circle(c) => conic_conic(conic, &Conic::from_circle(c), config),
        Shape::CircularArc(arc) => conic_conic(conic, &Conic::from_arc(arc), config),
        Shape::Ellipse(e) => conic_conic(conic, &Conic::from_ellipse(e), config),
        Shape::EllipticalArc(arc) => conic_conic(conic, &Conic::from_elliptical_arc(arc), config),
        Shape::QuadraticBezier(q) => bezier_conic(q, conic, config),
        Shape::CubicBezier(c) => bezier_conic(c, conic, config),
        Shape::Triangle(t) => aggregate(&t.edges(), edges, config),
        Shape::Rectangle(r) => aggregate(&r.edges(), edges, config),
        Shape::Polygon(poly) => aggregate(&poly.edges(), edges, config),
    }
}

fn bezier_shape<C: BezierCurve>(curve: &C, b: &Shape, config: &IntersectConfig) -> Intersection {
    let edges = |e: &Segment| linear_bezier(&e.as_linear(), curve, config);
    match b {
        Shape::Point(p) => point_bezier(p, curve, config),
        Shape::Line(l) => linear_bezier(&l.as_linear(), curve, config),
        Shape::Ray(r) => linear_bezier(&r.as_linear(), curve, config),
        Shape::Segment(s) => linear_bezier(&s.as_linear(), curve, config),
        Shape::Circle(c) => bezier_conic(curve, &Conic::from_circle(c), config),
        Shape::CircularArc(arc) => bezier_conic(curve, &Conic::from_arc(arc), config),
        Shape::Ellipse(e) => bezier_conic(curve, &Conic::from_ellipse(e), config),
        Shape::EllipticalArc(arc) => bezier_conic(curve, &Conic::from_elliptical_arc(arc), config),
        Shape::QuadraticBezier(q) => bezier_bezier(curve, q, config),
        Shape::CubicBezier(c) => bezier_bezier(curve, c, config),
        Shape::Triangle(t) => aggregate(&t.edges(), edges, config),
        Shape::Rectangle(r) => aggregate(&r.edges(), edges, config),
        Shape::Polygon(poly) => aggregate(&poly.edges(), edges, config),
    }
}

fn composite_shape(edges: &[Segment], b: &Shape, config: &IntersectConfig) -> Intersection {
    aggregate(edges, |e| linear_shape(&e.as_linear(), b, config), config)
}
