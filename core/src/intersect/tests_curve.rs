use super::curve::*;
use super::point::point_bezier;
use super::{IntersectConfig, IntersectionState, Linear, LinearDomain};
use crate::geometry::{Circle, CubicBezier, Line, Point2, QuadraticBezier, Segment, Vector2};

fn cfg() -> IntersectConfig {
    IntersectConfig::default()
}

fn arch() -> QuadraticBezier {
    QuadraticBezier::new(Point2::new(0.0, 0.0), Point2::new(5.0, 10.0), Point2::new(10.0, 0.0))
}

fn horizontal(y: f64) -> Linear {
    Line::through(Point2::new(0.0, y), Point2::new(10.0, y)).as_linear()
}

#[test]
fn test_quadratic_secant_line_is_symmetric() {
    let r = linear_quadratic(&horizontal(2.5), &arch(), &cfg());
    assert_eq!(r.state(), IntersectionState::INTERSECTION);
    assert_eq!(r.len(), 2);
    let (a, b) = (r.points()[0], r.points()[1]);
    assert!((a.x + b.x - 10.0).abs() < 1e-9);
    assert!((a.y - 2.5).abs() < 1e-9 && (b.y - 2.5).abs() < 1e-9);
    assert!((a.x - 5.0).abs() > 1.0);
}

#[test]
fn test_quadratic_apex_is_tangent() {
    let r = linear_quadratic(&horizontal(5.0), &arch(), &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(5.0, 5.0), 1e-9));
}

#[test]
fn test_segment_domain_clamps_curve_roots() {
    let segment = Segment::new(Point2::new(0.0, 2.5), Point2::new(4.0, 2.5));
    let r = linear_quadratic(&segment.as_linear(), &arch(), &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.points()[0].x < 4.0);

    let behind = Linear::new(Point2::new(20.0, 2.5), Vector2::new(1.0, 0.0), LinearDomain::Ray);
    assert_eq!(linear_quadratic(&behind, &arch(), &cfg()).state(), IntersectionState::NO_INTERSECTION);
}

#[test]
fn test_cubic_against_line() {
    let cubic = CubicBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 5.0),
        Point2::new(8.0, 5.0),
        Point2::new(10.0, 0.0),
    );
    let r = linear_cubic(&horizontal(1.0), &cubic, &cfg());
    assert_eq!(r.len(), 2);
    for p in r.points() {
        assert!((p.y - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_flat_curve_on_line_is_coincident() {
    let flat = QuadraticBezier::new(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0), Point2::new(10.0, 0.0));
    let r = linear_quadratic(&horizontal(0.0), &flat, &cfg());
    assert_eq!(r.state(), IntersectionState::COINCIDENT);
    assert_eq!(r.len(), 2);
}

#[test]
fn test_two_quadratics() {
    let dip = QuadraticBezier::new(Point2::new(0.0, 8.0), Point2::new(5.0, -2.0), Point2::new(10.0, 8.0));
    let r = quadratic_quadratic(&arch(), &dip, &cfg());
    assert_eq!(r.len(), 2);
    let offset = 5.0 * 0.2f64.sqrt();
    assert!(r.contains_point(&Point2::new(5.0 - offset, 4.0), 1e-6));
    assert!(r.contains_point(&Point2::new(5.0 + offset, 4.0), 1e-6));
}

#[test]
fn test_quadratic_and_cubic() {
    // Evenly spaced x makes both curves graphs over x
    let dip = CubicBezier::new(
        Point2::new(0.0, 4.0),
        Point2::new(10.0 / 3.0, -1.0),
        Point2::new(20.0 / 3.0, -1.0),
        Point2::new(10.0, 4.0),
    );
    let bump = QuadraticBezier::new(Point2::new(0.0, 0.0), Point2::new(5.0, 7.5), Point2::new(10.0, 0.0));
    let r = quadratic_cubic(&bump, &dip, &cfg());
    assert_eq!(r.len(), 2);
    for p in r.points() {
        assert!((p.y - 2.0).abs() < 1e-6);
    }
    let swapped = bezier_bezier(&dip, &bump, &cfg());
    assert_eq!(swapped.len(), 2);
}

#[test]
fn test_two_cubics_agree_with_line_query() {
    let wave = CubicBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 10.0),
        Point2::new(7.0, -10.0),
        Point2::new(10.0, 0.0),
    );
    let level = CubicBezier::new(
        Point2::new(0.0, 1.0),
        Point2::new(3.0, 1.0),
        Point2::new(7.0, 1.0),
        Point2::new(10.0, 1.0),
    );
    let by_curve = cubic_cubic(&wave, &level, &cfg());
    let by_line = linear_cubic(&Segment::new(level.p0, level.p3).as_linear(), &wave, &cfg());
    assert_eq!(by_line.len(), 2);
    assert_eq!(by_curve.len(), by_line.len());
    for p in by_line.points() {
        assert!(by_curve.contains_point(p, 1e-6));
    }
}

#[test]
fn test_identical_curves_are_coincident() {
    let r = quadratic_quadratic(&arch(), &arch(), &cfg());
    assert_eq!(r.state(), IntersectionState::COINCIDENT);
}

#[test]
fn test_disjoint_curves() {
    let lifted = QuadraticBezier::new(Point2::new(0.0, 20.0), Point2::new(5.0, 30.0), Point2::new(10.0, 20.0));
    let r = quadratic_quadratic(&arch(), &lifted, &cfg());
    assert_eq!(r.state(), IntersectionState::NO_INTERSECTION);
}

#[test]
fn test_quadratic_against_circle() {
    let circle = Circle::new(Point2::new(5.0, 0.0), 4.5);
    let r = bezier_circle(&arch(), &circle, &cfg());
    assert_eq!(r.len(), 4);
    for p in r.points() {
        assert!(((p - circle.center).norm() - 4.5).abs() < 1e-9);
        assert!(point_bezier(p, &arch(), &cfg()).has_intersection());
    }
}
