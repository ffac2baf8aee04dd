use super::utils_2d::{self, ellipse_point, rotation_cos_sin};
use super::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluate a primitive at a parameter value.
///
/// Lines and rays accept any `t`; segments, arcs and curves are defined on `[0, 1]`.
pub trait Parametric {
    fn point_at(&self, t: f64) -> Point2;
}

/// Infinite line through `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub origin: Point2,
    pub direction: Vector2,
}

impl Line {
    pub fn new(origin: Point2, direction: Vector2) -> Self {
        Self { origin, direction }
    }

    pub fn through(a: Point2, b: Point2) -> Self {
        Self { origin: a, direction: b - a }
    }
}

impl Parametric for Line {
    fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }
}

/// Half-line starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point2,
    pub direction: Vector2,
}

impl Ray {
    pub fn new(origin: Point2, direction: Vector2) -> Self {
        Self { origin, direction }
    }

    pub fn through(origin: Point2, toward: Point2) -> Self {
        Self { origin, direction: toward - origin }
    }
}

impl Parametric for Ray {
    fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

impl Parametric for Segment {
    fn point_at(&self, t: f64) -> Point2 {
        utils_2d::lerp(&self.start, &self.end, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Arc of a circle from `start_angle` sweeping by `sweep_angle` (radians, CCW positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl CircularArc {
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep_angle: f64) -> Self {
        Self { center, radius, start_angle, sweep_angle }
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    pub fn start_point(&self) -> Point2 {
        ellipse_point(&self.center, self.radius, self.radius, 1.0, 0.0, self.start_angle)
    }

    pub fn end_point(&self) -> Point2 {
        ellipse_point(
            &self.center,
            self.radius,
            self.radius,
            1.0,
            0.0,
            self.start_angle + self.sweep_angle,
        )
    }
}

impl Parametric for CircularArc {
    fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + t * self.sweep_angle;
        ellipse_point(&self.center, self.radius, self.radius, 1.0, 0.0, angle)
    }
}

/// Ellipse with semi-axes `radius_x`/`radius_y`, rotated by `rotation` radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point2,
    pub radius_x: f64,
    pub radius_y: f64,
    pub rotation: f64,
}

impl Ellipse {
    pub fn new(center: Point2, radius_x: f64, radius_y: f64, rotation: f64) -> Self {
        Self { center, radius_x, radius_y, rotation }
    }

    /// Axis-aligned ellipse.
    pub fn orthogonal(center: Point2, radius_x: f64, radius_y: f64) -> Self {
        Self::new(center, radius_x, radius_y, 0.0)
    }

    pub fn rotation_cos_sin(&self) -> (f64, f64) {
        rotation_cos_sin(self.rotation)
    }

    /// Point at parametric angle `angle`.
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        let (cos, sin) = self.rotation_cos_sin();
        ellipse_point(&self.center, self.radius_x, self.radius_y, cos, sin, angle)
    }
}

/// Arc of an oblique ellipse between parametric angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticalArc {
    pub center: Point2,
    pub radius_x: f64,
    pub radius_y: f64,
    pub rotation: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl EllipticalArc {
    pub fn new(
        center: Point2,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Self {
        Self { center, radius_x, radius_y, rotation, start_angle, sweep_angle }
    }

    pub fn ellipse(&self) -> Ellipse {
        Ellipse::new(self.center, self.radius_x, self.radius_y, self.rotation)
    }

    pub fn start_point(&self) -> Point2 {
        self.ellipse().point_at_angle(self.start_angle)
    }

    pub fn end_point(&self) -> Point2 {
        self.ellipse().point_at_angle(self.start_angle + self.sweep_angle)
    }
}

impl Parametric for EllipticalArc {
    fn point_at(&self, t: f64) -> Point2 {
        self.ellipse().point_at_angle(self.start_angle + t * self.sweep_angle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
}

impl QuadraticBezier {
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicBezier {
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }
}

/// Axis-aligned rectangle given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub corner: Point2,
    pub opposite: Point2,
}

impl Rectangle {
    pub fn new(corner: Point2, opposite: Point2) -> Self {
        Self { corner, opposite }
    }

    /// Corners in counter-clockwise order starting at the minimum corner.
    pub fn corners(&self) -> [Point2; 4] {
        let min_x = self.corner.x.min(self.opposite.x);
        let max_x = self.corner.x.max(self.opposite.x);
        let min_y = self.corner.y.min(self.opposite.y);
        let max_y = self.corner.y.max(self.opposite.y);
        [
            Point2::new(min_x, min_y),
            Point2::new(max_x, min_y),
            Point2::new(max_x, max_y),
            Point2::new(min_x, max_y),
        ]
    }

    pub fn edges(&self) -> [Segment; 4] {
        let [a, b, c, d] = self.corners();
        [
            Segment::new(a, b),
            Segment::new(b, c),
            Segment::new(c, d),
            Segment::new(d, a),
        ]
    }
}

/// Closed polygon contour; the last vertex joins the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point2>,
}

impl Polygon {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn edges(&self) -> Vec<Segment> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Segment::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }
}

/// Every primitive kind the intersection engine understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Point2),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Circle(Circle),
    CircularArc(CircularArc),
    Ellipse(Ellipse),
    EllipticalArc(EllipticalArc),
    QuadraticBezier(QuadraticBezier),
    CubicBezier(CubicBezier),
    Triangle(Triangle),
    Rectangle(Rectangle),
    Polygon(Polygon),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Line,
    Ray,
    Segment,
    Circle,
    CircularArc,
    Ellipse,
    EllipticalArc,
    QuadraticBezier,
    CubicBezier,
    Triangle,
    Rectangle,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Ray(_) => ShapeKind::Ray,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::CircularArc(_) => ShapeKind::CircularArc,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::EllipticalArc(_) => ShapeKind::EllipticalArc,
            Shape::QuadraticBezier(_) => ShapeKind::QuadraticBezier,
            Shape::CubicBezier(_) => ShapeKind::CubicBezier,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Bounding box, or `None` for unbounded lines and rays.
    ///
    /// Arcs use the box of their full conic and Béziers the box of their
    /// control polygon, so the result is conservative.
    pub fn bounds(&self) -> Option<Aabb2> {
        let from_points = |points: &[Point2]| {
            let mut bounds = Aabb2::empty();
            for p in points {
                bounds.extend(p);
            }
            bounds
        };
        let ellipse_bounds = |e: &Ellipse| {
            let (cos, sin) = e.rotation_cos_sin();
            let hx = ((e.radius_x * cos).powi(2) + (e.radius_y * sin).powi(2)).sqrt();
            let hy = ((e.radius_x * sin).powi(2) + (e.radius_y * cos).powi(2)).sqrt();
            let half = Vector2::new(hx, hy);
            Aabb2::new(e.center - half, e.center + half)
        };

        match self {
            Shape::Point(p) => Some(Aabb2::new(*p, *p)),
            Shape::Line(_) | Shape::Ray(_) => None,
            Shape::Segment(s) => Some(from_points(&[s.start, s.end])),
            Shape::Circle(c) => {
                let half = Vector2::new(c.radius.abs(), c.radius.abs());
                Some(Aabb2::new(c.center - half, c.center + half))
            }
            Shape::CircularArc(a) => {
                let half = Vector2::new(a.radius.abs(), a.radius.abs());
                Some(Aabb2::new(a.center - half, a.center + half))
            }
            Shape::Ellipse(e) => Some(ellipse_bounds(e)),
            Shape::EllipticalArc(a) => Some(ellipse_bounds(&a.ellipse())),
            Shape::QuadraticBezier(q) => Some(from_points(&[q.p0, q.p1, q.p2])),
            Shape::CubicBezier(c) => Some(from_points(&[c.p0, c.p1, c.p2, c.p3])),
            Shape::Triangle(t) => Some(from_points(&t.vertices())),
            Shape::Rectangle(r) => Some(from_points(&r.corners())),
            Shape::Polygon(p) => Some(from_points(&p.points)),
        }
    }

    /// A point known to lie on the shape, used for containment classification.
    pub fn sample_point(&self) -> Option<Point2> {
        match self {
            Shape::Point(p) => Some(*p),
            Shape::Line(l) => Some(l.origin),
            Shape::Ray(r) => Some(r.origin),
            Shape::Segment(s) => Some(s.start),
            Shape::Circle(c) => Some(c.center + Vector2::new(c.radius, 0.0)),
            Shape::CircularArc(a) => Some(a.start_point()),
            Shape::Ellipse(e) => Some(e.point_at_angle(0.0)),
            Shape::EllipticalArc(a) => Some(a.start_point()),
            Shape::QuadraticBezier(q) => Some(q.p0),
            Shape::CubicBezier(c) => Some(c.p0),
            Shape::Triangle(t) => Some(t.a),
            Shape::Rectangle(r) => Some(r.corner),
            Shape::Polygon(p) => p.points.first().copied(),
        }
    }

    /// Whether the shape bounds a region of the plane.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            Shape::Circle(_)
                | Shape::Ellipse(_)
                | Shape::Triangle(_)
                | Shape::Rectangle(_)
                | Shape::Polygon(_)
        )
    }
}

macro_rules! impl_from_record {
    ($($record:ident),* $(,)?) => {
        $(
            impl From<$record> for Shape {
                fn from(value: $record) -> Self {
                    Shape::$record(value)
                }
            }
        )*
    };
}

impl_from_record!(
    Line,
    Ray,
    Segment,
    Circle,
    CircularArc,
    Ellipse,
    EllipticalArc,
    QuadraticBezier,
    CubicBezier,
    Triangle,
    Rectangle,
    Polygon,
);

impl From<Point2> for Shape {
    fn from(value: Point2) -> Self {
        Shape::Point(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn extend(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);

        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn merge(&self, other: &Aabb2) -> Aabb2 {
        let mut res = *self;
        res.min.x = res.min.x.min(other.min.x);
        res.min.y = res.min.y.min(other.min.y);

        res.max.x = res.max.x.max(other.max.x);
        res.max.y = res.max.y.max(other.max.y);
        res
    }

    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether the boxes overlap once each is grown by `tolerance`.
    pub fn overlaps(&self, other: &Aabb2, tolerance: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x <= other.max.x + tolerance
            && other.min.x <= self.max.x + tolerance
            && self.min.y <= other.max.y + tolerance
            && other.min.y <= self.max.y + tolerance
    }
}
