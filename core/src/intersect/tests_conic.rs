use super::conic::*;
use super::{IntersectConfig, IntersectionState};
use crate::geometry::{Circle, CircularArc, Ellipse, EllipticalArc, Point2};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn cfg() -> IntersectConfig {
    IntersectConfig::default()
}

fn on_ellipse(e: &Ellipse, p: &Point2) -> f64 {
    let (cos, sin) = e.rotation_cos_sin();
    let v = p - e.center;
    let x = v.x * cos + v.y * sin;
    let y = -v.x * sin + v.y * cos;
    (x / e.radius_x).powi(2) + (y / e.radius_y).powi(2) - 1.0
}

#[test]
fn test_two_circles_cross() {
    let a = Circle::new(Point2::origin(), 5.0);
    let b = Circle::new(Point2::new(8.0, 0.0), 5.0);
    let r = circle_circle(&a, &b, &cfg());
    assert_eq!(r.state(), IntersectionState::INTERSECTION);
    assert_eq!(r.len(), 2);
    assert!(r.contains_point(&Point2::new(4.0, 3.0), 1e-9));
    assert!(r.contains_point(&Point2::new(4.0, -3.0), 1e-9));
}

#[test]
fn test_two_circles_touch() {
    let a = Circle::new(Point2::origin(), 5.0);
    let b = Circle::new(Point2::new(10.0, 0.0), 5.0);
    let r = circle_circle(&a, &b, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(5.0, 0.0), 1e-9));
}

#[test]
fn test_circle_relations_without_points() {
    let a = Circle::new(Point2::origin(), 5.0);
    let far = Circle::new(Point2::new(20.0, 0.0), 5.0);
    assert_eq!(circle_circle(&a, &far, &cfg()).state(), IntersectionState::OUTSIDE);

    let nested = Circle::new(Point2::new(1.0, 0.0), 1.0);
    assert_eq!(circle_circle(&a, &nested, &cfg()).state(), IntersectionState::INSIDE);
    assert_eq!(circle_circle(&nested, &a, &cfg()).state(), IntersectionState::INSIDE);

    let r = circle_circle(&a, &a, &cfg());
    assert_eq!(r.state(), IntersectionState::COINCIDENT);
    assert!(r.is_empty());
}

#[test]
fn test_circle_against_half_arc() {
    let a = Circle::new(Point2::origin(), 5.0);
    // Upper half of the circle around (8, 0)
    let arc = CircularArc::new(Point2::new(8.0, 0.0), 5.0, 0.0, PI);
    let r = circle_arc(&a, &arc, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(4.0, 3.0), 1e-9));
}

#[test]
fn test_arcs_of_the_same_circle() {
    let first = CircularArc::new(Point2::origin(), 5.0, 0.0, FRAC_PI_2);
    let second = CircularArc::new(Point2::origin(), 5.0, FRAC_PI_4, FRAC_PI_2);
    let r = arc_arc(&first, &second, &cfg());
    assert_eq!(r.state(), IntersectionState::COINCIDENT);
    assert_eq!(r.len(), 2);
    assert!(r.contains_point(&Point2::new(0.0, 5.0), 1e-9));
    assert!(r.contains_point(&second.start_point(), 1e-9));

    let apart = CircularArc::new(Point2::origin(), 5.0, PI, FRAC_PI_4);
    let short = CircularArc::new(Point2::origin(), 5.0, 0.0, FRAC_PI_4);
    assert_eq!(arc_arc(&short, &apart, &cfg()).state(), IntersectionState::NO_INTERSECTION);
}

#[test]
fn test_crossed_ellipses() {
    let wide = Ellipse::orthogonal(Point2::origin(), 4.0, 2.0);
    let tall = Ellipse::orthogonal(Point2::origin(), 2.0, 4.0);
    let r = ellipse_ellipse(&wide, &tall, &cfg());
    assert_eq!(r.len(), 4);
    let v = (16.0f64 / 5.0).sqrt();
    for (x, y) in [(v, v), (-v, v), (v, -v), (-v, -v)] {
        assert!(r.contains_point(&Point2::new(x, y), 1e-6));
    }
}

#[test]
fn test_rotated_ellipse_and_circle_points_lie_on_both() {
    let ellipse = Ellipse::new(Point2::origin(), 5.0, 3.0, 0.3);
    let circle = Circle::new(Point2::new(2.0, 1.0), 3.0);
    let r = circle_ellipse(&circle, &ellipse, &cfg());
    assert!(r.len() >= 2);
    for p in r.points() {
        assert!(((p - circle.center).norm() - circle.radius).abs() < 1e-6);
        assert!(on_ellipse(&ellipse, p).abs() < 1e-6);
    }
}

#[test]
fn test_ellipse_nested_in_circle() {
    let circle = Circle::new(Point2::origin(), 10.0);
    let ellipse = Ellipse::new(Point2::new(1.0, 0.0), 2.0, 1.0, 0.5);
    let r = circle_ellipse(&circle, &ellipse, &cfg());
    assert_eq!(r.state(), IntersectionState::INSIDE);
    assert!(r.is_empty());

    let far = Ellipse::new(Point2::new(30.0, 0.0), 2.0, 1.0, 0.5);
    assert_eq!(circle_ellipse(&circle, &far, &cfg()).state(), IntersectionState::OUTSIDE);
}

#[test]
fn test_identical_ellipses_are_coincident() {
    let e = Ellipse::new(Point2::new(1.0, 2.0), 3.0, 1.5, 0.7);
    let r = ellipse_ellipse(&e, &e, &cfg());
    assert_eq!(r.state(), IntersectionState::COINCIDENT);
}

#[test]
fn test_elliptical_arcs_filter_crossings() {
    let wide = EllipticalArc::new(Point2::origin(), 4.0, 2.0, 0.0, 0.0, PI);
    let tall = Ellipse::orthogonal(Point2::origin(), 2.0, 4.0);
    let r = ellipse_elliptical_arc(&tall, &wide, &cfg());
    // Only the upper crossings remain
    assert_eq!(r.len(), 2);
    assert!(r.points().iter().all(|p| p.y > 0.0));

    let tall_arc = EllipticalArc::new(Point2::origin(), 2.0, 4.0, 0.0, -FRAC_PI_2, PI);
    let r = elliptical_arc_elliptical_arc(&wide, &tall_arc, &cfg());
    // Upper half of the wide one and right half of the tall one
    assert_eq!(r.len(), 1);
    let v = (16.0f64 / 5.0).sqrt();
    assert!(r.contains_point(&Point2::new(v, v), 1e-6));
}

#[test]
fn test_nearly_round_ellipse_uses_circle_construction() {
    let a = Circle::new(Point2::origin(), 5.0);
    let round = Ellipse::orthogonal(Point2::new(8.0, 0.0), 5.0, 5.0 * (1.0 + 1e-13));
    let r = circle_ellipse(&a, &round, &cfg());
    assert_eq!(r.len(), 2);
    assert!(r.contains_point(&Point2::new(4.0, 3.0), 1e-9));
    assert!(r.contains_point(&Point2::new(4.0, -3.0), 1e-9));
}
