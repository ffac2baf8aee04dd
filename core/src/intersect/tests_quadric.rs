use super::quadric::*;
use super::{IntersectConfig, IntersectionState};
use crate::geometry::{Circle, CircularArc, Ellipse, EllipticalArc, Line, Point2, Ray, Segment, Vector2};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn cfg() -> IntersectConfig {
    IntersectConfig::default()
}

#[test]
fn test_circle_secant_line() {
    let circle = Circle::new(Point2::origin(), 5.0);
    let line = Line::through(Point2::new(-10.0, 0.0), Point2::new(10.0, 0.0));
    let r = line_circle(&line, &circle, &cfg());
    assert_eq!(r.state(), IntersectionState::INTERSECTION);
    assert_eq!(r.len(), 2);
    assert!(r.contains_point(&Point2::new(-5.0, 0.0), 1e-9));
    assert!(r.contains_point(&Point2::new(5.0, 0.0), 1e-9));
}

#[test]
fn test_circle_tangent_line() {
    let circle = Circle::new(Point2::origin(), 5.0);
    let line = Line::through(Point2::new(-10.0, 5.0), Point2::new(10.0, 5.0));
    let r = line_circle(&line, &circle, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(0.0, 5.0), 1e-9));
}

#[test]
fn test_circle_missed_is_outside() {
    let circle = Circle::new(Point2::origin(), 5.0);
    let line = Line::through(Point2::new(-10.0, 6.0), Point2::new(10.0, 6.0));
    let r = line_circle(&line, &circle, &cfg());
    assert_eq!(r.state(), IntersectionState::OUTSIDE);
    assert!(r.is_empty());
}

#[test]
fn test_segment_inside_and_beside_circle() {
    let circle = Circle::new(Point2::origin(), 5.0);

    let inside = Segment::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
    assert_eq!(segment_circle(&inside, &circle, &cfg()).state(), IntersectionState::INSIDE);

    // The supporting line crosses the circle, but behind the segment
    let beside = Segment::new(Point2::new(6.0, 0.0), Point2::new(10.0, 0.0));
    let r = segment_circle(&beside, &circle, &cfg());
    assert_eq!(r.state(), IntersectionState::OUTSIDE);
    assert!(r.is_empty());

    let half = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
    let r = segment_circle(&half, &circle, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(5.0, 0.0), 1e-9));
}

#[test]
fn test_ray_keeps_forward_root_only() {
    let circle = Circle::new(Point2::origin(), 5.0);
    let ray = Ray::new(Point2::origin(), Vector2::new(1.0, 0.0));
    let r = ray_circle(&ray, &circle, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(5.0, 0.0), 1e-9));
}

#[test]
fn test_arc_chord_filter() {
    // Counter-clockwise quarter arc from (5,0) to (0,5)
    let arc = CircularArc::new(Point2::origin(), 5.0, 0.0, FRAC_PI_2);
    let line = Line::through(Point2::new(-10.0, 3.0), Point2::new(10.0, 3.0));
    let r = line_arc(&line, &arc, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(4.0, 3.0), 1e-9));

    let below = Line::through(Point2::new(-10.0, -3.0), Point2::new(10.0, -3.0));
    let r = line_arc(&below, &arc, &cfg());
    assert_eq!(r.state(), IntersectionState::NO_INTERSECTION);
    assert!(r.is_empty());
}

#[test]
fn test_clockwise_arc_chord_filter() {
    // Clockwise quarter arc from (5,0) to (0,-5)
    let arc = CircularArc::new(Point2::origin(), 5.0, 0.0, -FRAC_PI_2);
    let line = Line::through(Point2::new(-10.0, -3.0), Point2::new(10.0, -3.0));
    let r = line_arc(&line, &arc, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(4.0, -3.0), 1e-9));
}

#[test]
fn test_rotated_ellipse_axis_hits() {
    // Major axis along +y after a quarter turn
    let ellipse = Ellipse::new(Point2::new(1.0, 1.0), 4.0, 2.0, FRAC_PI_2);

    let vertical = Line::new(Point2::new(1.0, -10.0), Vector2::new(0.0, 1.0));
    let r = line_ellipse(&vertical, &ellipse, &cfg());
    assert_eq!(r.len(), 2);
    assert!(r.contains_point(&Point2::new(1.0, 5.0), 1e-9));
    assert!(r.contains_point(&Point2::new(1.0, -3.0), 1e-9));

    let horizontal = Line::new(Point2::new(-10.0, 1.0), Vector2::new(1.0, 0.0));
    let r = line_ellipse(&horizontal, &ellipse, &cfg());
    assert_eq!(r.len(), 2);
    assert!(r.contains_point(&Point2::new(3.0, 1.0), 1e-9));
    assert!(r.contains_point(&Point2::new(-1.0, 1.0), 1e-9));
}

#[test]
fn test_oblique_ellipse_points_satisfy_equation() {
    let ellipse = Ellipse::new(Point2::origin(), 2.0, 1.0, FRAC_PI_4);
    let line = Line::new(Point2::origin(), Vector2::new(1.0, 1.0));
    let r = line_ellipse(&line, &ellipse, &cfg());
    assert_eq!(r.len(), 2);
    let half = 2.0 / 2f64.sqrt();
    assert!(r.contains_point(&Point2::new(half, half), 1e-9));
    assert!(r.contains_point(&Point2::new(-half, -half), 1e-9));

    let skew = Segment::new(Point2::new(-3.0, 0.5), Point2::new(3.0, -0.2));
    let r = segment_ellipse(&skew, &ellipse, &cfg());
    assert_eq!(r.len(), 2);
    let (cos, sin) = ellipse.rotation_cos_sin();
    for p in r.points() {
        let x = p.x * cos + p.y * sin;
        let y = -p.x * sin + p.y * cos;
        assert!(((x / 2.0).powi(2) + y.powi(2) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_elliptical_arc_upper_half() {
    let arc = EllipticalArc::new(Point2::origin(), 4.0, 2.0, 0.0, 0.0, PI);
    let line = Line::new(Point2::new(0.0, -10.0), Vector2::new(0.0, 1.0));
    let r = line_elliptical_arc(&line, &arc, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(0.0, 2.0), 1e-9));
}

#[test]
fn test_degenerate_inputs() {
    let point_circle = Circle::new(Point2::origin(), 0.0);
    let line = Line::through(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
    assert_eq!(line_circle(&line, &point_circle, &cfg()).state(), IntersectionState::NO_INTERSECTION);

    let circle = Circle::new(Point2::origin(), 5.0);
    let collapsed = Segment::new(Point2::new(5.0, 0.0), Point2::new(5.0, 0.0));
    assert_eq!(segment_circle(&collapsed, &circle, &cfg()).state(), IntersectionState::NO_INTERSECTION);

    let empty_arc = CircularArc::new(Point2::origin(), 5.0, 1.0, 0.0);
    assert_eq!(line_arc(&line, &empty_arc, &cfg()).state(), IntersectionState::NO_INTERSECTION);
}

#[test]
fn test_short_segment_on_large_circle() {
    let circle = Circle::new(Point2::origin(), 1000.0);
    let short = Segment::new(Point2::new(999.99, 0.0), Point2::new(1000.02, 0.0));
    let r = segment_circle(&short, &circle, &cfg());
    assert_eq!(r.state(), IntersectionState::INTERSECTION);
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(1000.0, 0.0), 1e-9));
}

#[test]
fn test_far_origin_secant_keeps_both_points() {
    let circle = Circle::new(Point2::origin(), 5.0);
    let half = 4.75f64.sqrt();

    let line = Line::new(Point2::new(-1e5, 4.5), Vector2::new(1.0, 0.0));
    let r = line_circle(&line, &circle, &cfg());
    assert_eq!(r.len(), 2);
    assert!(r.contains_point(&Point2::new(-half, 4.5), 1e-9));
    assert!(r.contains_point(&Point2::new(half, 4.5), 1e-9));

    let ray = Ray::new(Point2::new(-1e5, 4.5), Vector2::new(1.0, 0.0));
    let r = ray_circle(&ray, &circle, &cfg());
    assert_eq!(r.len(), 2);
    for p in r.points() {
        assert!((p.coords.norm() - 5.0).abs() < 1e-9);
    }

    // Far off and tangent still touches once
    let tangent = Line::new(Point2::new(-1e5, 5.0), Vector2::new(1.0, 0.0));
    let r = line_circle(&tangent, &circle, &cfg());
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(0.0, 5.0), 1e-9));
}

#[test]
fn test_far_origin_secant_on_rotated_ellipse() {
    let ellipse = Ellipse::new(Point2::new(3.0, -2.0), 6.0, 2.0, 0.7);
    let line = Line::new(Point2::new(3.0 - 8e4, -2.0 - 6e4), Vector2::new(0.8, 0.6));
    let r = line_ellipse(&line, &ellipse, &cfg());
    assert_eq!(r.len(), 2);
    let (cos, sin) = ellipse.rotation_cos_sin();
    for p in r.points() {
        let v = p - ellipse.center;
        let x = v.x * cos + v.y * sin;
        let y = -v.x * sin + v.y * cos;
        assert!(((x / 6.0).powi(2) + (y / 2.0).powi(2) - 1.0).abs() < 1e-9);
    }
}
