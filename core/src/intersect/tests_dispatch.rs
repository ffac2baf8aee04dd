use super::dispatch::{intersect, intersect_with, intersects};
use super::{IntersectConfig, IntersectionState};
use crate::geometry::*;

fn one_of_each() -> Vec<Shape> {
    vec![
        Shape::Point(Point2::new(3.0, 4.0)),
        Shape::Line(Line::new(Point2::new(-10.0, -1.0), Vector2::new(1.0, 0.3))),
        Shape::Ray(Ray::new(Point2::new(-2.0, -6.0), Vector2::new(1.0, 2.0))),
        Shape::Segment(Segment::new(Point2::new(-8.0, 6.0), Point2::new(9.0, -5.0))),
        Shape::Circle(Circle::new(Point2::origin(), 5.0)),
        Shape::CircularArc(CircularArc::new(Point2::new(1.0, 1.0), 4.0, 0.2, 2.5)),
        Shape::Ellipse(Ellipse::new(Point2::new(0.5, -0.5), 6.0, 3.0, 0.4)),
        Shape::EllipticalArc(EllipticalArc::new(Point2::new(-1.0, 2.0), 4.0, 2.0, -0.3, 1.0, -3.5)),
        Shape::QuadraticBezier(QuadraticBezier::new(
            Point2::new(-6.0, -4.0),
            Point2::new(0.0, 9.0),
            Point2::new(7.0, -3.0),
        )),
        Shape::CubicBezier(CubicBezier::new(
            Point2::new(-7.0, 2.0),
            Point2::new(-2.0, -8.0),
            Point2::new(3.0, 9.0),
            Point2::new(8.0, -1.0),
        )),
        Shape::Triangle(Triangle::new(
            Point2::new(-4.0, -4.0),
            Point2::new(5.0, -3.0),
            Point2::new(1.0, 6.0),
        )),
        Shape::Rectangle(Rectangle::new(Point2::new(-3.0, -2.0), Point2::new(4.0, 5.0))),
        Shape::Polygon(Polygon::new(vec![
            Point2::new(-5.0, 0.0),
            Point2::new(0.0, -5.5),
            Point2::new(6.0, -1.0),
            Point2::new(3.0, 6.0),
            Point2::new(-4.0, 4.0),
        ])),
    ]
}

#[test]
fn test_every_pair_is_dispatched_symmetrically() {
    let cfg = IntersectConfig::default();
    let shapes = one_of_each();
    for a in &shapes {
        for b in &shapes {
            let ab = intersect_with(a, b, &cfg);
            let ba = intersect_with(b, a, &cfg);
            assert_eq!(ab.state(), ba.state(), "{} vs {}", a.kind(), b.kind());
            assert_eq!(ab.len(), ba.len(), "{} vs {}", a.kind(), b.kind());
            for p in ab.points() {
                assert!(ba.contains_point(p, 1e-6), "{} vs {} at {:?}", a.kind(), b.kind(), p);
            }
        }
    }
}

#[test]
fn test_every_shape_overlaps_itself() {
    let cfg = IntersectConfig::default();
    for shape in one_of_each() {
        assert!(intersects(&shape, &shape, &cfg), "{}", shape.kind());
    }
}

#[test]
fn test_method_matches_function() {
    let circle = Shape::Circle(Circle::new(Point2::origin(), 5.0));
    let line = Shape::Line(Line::through(Point2::new(-10.0, 0.0), Point2::new(10.0, 0.0)));
    assert_eq!(circle.intersect(&line), intersect(&circle, &line));
    assert_eq!(line.intersect(&circle).len(), 2);
}

#[test]
fn test_bounding_box_rejection() {
    let cfg = IntersectConfig::default();
    let triangle = Shape::Triangle(Triangle::new(
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(5.0, 10.0),
    ));
    let rect = Shape::Rectangle(Rectangle::new(Point2::new(100.0, 100.0), Point2::new(110.0, 110.0)));
    assert!(!intersects(&triangle, &rect, &cfg));
    assert_eq!(intersect(&triangle, &rect).state(), IntersectionState::NO_INTERSECTION);

    // Unbounded shapes skip the box test
    let line = Shape::Line(Line::through(Point2::new(0.0, 105.0), Point2::new(1.0, 105.0)));
    assert!(intersects(&line, &rect, &cfg));
    assert!(!intersects(&line, &triangle, &cfg));
}

#[test]
fn test_composites_cross() {
    let triangle = Shape::Triangle(Triangle::new(
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(5.0, 10.0),
    ));
    let rect = Shape::Rectangle(Rectangle::new(Point2::new(-1.0, 4.0), Point2::new(11.0, 6.0)));
    let r = intersect(&triangle, &rect);
    assert_eq!(r.state(), IntersectionState::INTERSECTION);
    assert_eq!(r.len(), 4);
    assert!(r.contains_point(&Point2::new(2.0, 4.0), 1e-9));
    assert!(r.contains_point(&Point2::new(7.0, 6.0), 1e-9));
}

#[test]
fn test_tangent_classified_through_dispatch() {
    let circle = Shape::Circle(Circle::new(Point2::origin(), 5.0));
    let tangent = Shape::Segment(Segment::new(Point2::new(-10.0, 5.0), Point2::new(10.0, 5.0)));
    let r = intersect(&tangent, &circle);
    assert_eq!(r.len(), 1);
    assert!(r.contains_point(&Point2::new(0.0, 5.0), 1e-9));
}
