//! Primitive 2D geometry and intersection algorithms
//!
//! Provides the value types the colliders are built from: [`Point`] (also
//! used algebraically as [`Vector`]) and [`Segment`], together with the
//! orientation and segment intersection tests.

use crate::foundation::math::Vec2;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use thiserror::Error;

/// Errors raised when building or deriving geometric primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Both segment endpoints are the same point
    #[error("Segment endpoints must be distinct, got {0} twice")]
    DegenerateSegment(Point),

    /// The zero vector has no direction, so it has no perpendicular
    #[error("The zero vector has no perpendicular direction")]
    ZeroVector,
}

/// A point in 2D space
///
/// Points are plain values: moving one produces or mutates a local copy and
/// never affects another owner of the "same" position.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// A [`Point`] used as a displacement or direction
pub type Vector = Point;

impl Point {
    /// The origin `(0, 0)`
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves this point in place by a vector
    pub fn translate(&mut self, v: Vector) {
        self.x += v.x;
        self.y += v.y;
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (other - *self).length()
    }

    /// Cross product `(q - self) × (r - self)`
    ///
    /// Zero means the three points are collinear; a positive value means
    /// `self → q → r` winds counter-clockwise.
    pub fn orientation(&self, q: Point, r: Point) -> f64 {
        (q.x - self.x) * (r.y - self.y) - (q.y - self.y) * (r.x - self.x)
    }

    /// Dot product with another vector
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Length of this vector
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Whether both coordinates are exactly zero
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Whether both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The two directions perpendicular to this vector: `(-y, x)` then `(y, -x)`
    pub fn perpendiculars(&self) -> Result<[Vector; 2], GeometryError> {
        if self.is_zero() {
            return Err(GeometryError::ZeroVector);
        }
        let first = Vector::new(-self.y, self.x);
        Ok([first, -first])
    }
}

/// Free-function form of [`Point::orientation`]
pub fn orientation(p: Point, q: Point, r: Point) -> f64 {
    p.orientation(q, r)
}

/// Free-function form of [`Point::distance`]
pub fn distance(p: Point, q: Point) -> f64 {
    p.distance(q)
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.translate(rhs);
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2},{:.2})", self.x, self.y)
    }
}

/// A line segment between two distinct points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Creates a segment, rejecting coincident endpoints
    pub fn new(start: Point, end: Point) -> Result<Self, GeometryError> {
        if start == end {
            return Err(GeometryError::DegenerateSegment(start));
        }
        Ok(Self { start, end })
    }

    /// Builds a segment from endpoints the caller already knows are distinct
    pub(crate) const fn from_parts(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// First endpoint
    pub fn start(&self) -> Point {
        self.start
    }

    /// Second endpoint
    pub fn end(&self) -> Point {
        self.end
    }

    /// Vector from start to end (never zero)
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    /// Whether `p` lies on this segment
    ///
    /// The point must be exactly collinear with the endpoints and inside the
    /// segment's closed bounding box; collinear points beyond either end are
    /// rejected.
    pub fn contains(&self, p: Point) -> bool {
        point_on_segment(self.start, self.end, p)
    }

    /// Whether this segment intersects another, touching included
    ///
    /// Compares the orientation of each segment's endpoints against the
    /// other segment's line. Collinear segments produce zero orientations
    /// and therefore report an intersection even when they are disjoint on
    /// their common line; polygon validation accepts this approximation.
    pub fn intersects(&self, other: &Segment) -> bool {
        let d1 = other.start.orientation(other.end, self.start);
        let d2 = other.start.orientation(other.end, self.end);
        let d3 = self.start.orientation(self.end, other.start);
        let d4 = self.start.orientation(self.end, other.end);
        d1 * d2 <= 0.0 && d3 * d4 <= 0.0
    }

    /// Closest point on this segment to `p`
    ///
    /// The projection parameter of `p` onto the segment is clamped to `[0, 1]`.
    pub fn closest_point(&self, p: Point) -> Point {
        closest_point_on_segment(self.start, self.end, p)
    }

    /// Distance from `p` to the closest point of this segment
    pub fn distance_to(&self, p: Point) -> f64 {
        self.closest_point(p).distance(p)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Whether `p` is exactly collinear with `a`-`b` and inside their closed bounding box
pub fn point_on_segment(a: Point, b: Point, p: Point) -> bool {
    if a.orientation(b, p) != 0.0 {
        return false;
    }
    let (min_x, max_x) = min_max(a.x, b.x);
    let (min_y, max_y) = min_max(a.y, b.y);
    (min_x..=max_x).contains(&p.x) && (min_y..=max_y).contains(&p.y)
}

/// Closest point to `p` on the segment `a`-`b`, projection clamped to `[0, 1]`
///
/// A zero-length segment collapses to `a`.
pub fn closest_point_on_segment(a: Point, b: Point, p: Point) -> Point {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_orientation_matches_cross_product() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(1.0, 3.0));
        let manual = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        assert_eq!(orientation(a, b, c), manual);
        assert!(orientation(a, b, c) > 0.0);
        assert!(orientation(a, c, b) < 0.0);
    }

    #[test]
    fn test_collinear_orientation_is_zero() {
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 3.0)), 0.0);
        assert_eq!(orientation(p(-2.0, 5.0), p(0.0, 5.0), p(7.0, 5.0)), 0.0);
    }

    #[test]
    fn test_distance() {
        assert_relative_eq!(distance(p(1.0, 1.0), p(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_vector_algebra() {
        let v = p(3.0, -2.0);
        assert_eq!(-v, p(-3.0, 2.0));
        assert_eq!(v * 2.0, p(6.0, -4.0));
        assert_eq!(v.dot(p(1.0, 1.0)), 1.0);
        assert_eq!(p(1.0, 1.0) + v, p(4.0, -1.0));
        assert_eq!(p(1.0, 1.0) - v, p(-2.0, 3.0));
        assert!(Vector::ORIGIN.is_zero());
    }

    #[test]
    fn test_perpendiculars() {
        let [a, b] = p(2.0, 1.0).perpendiculars().unwrap();
        assert_eq!(a, p(-1.0, 2.0));
        assert_eq!(b, p(1.0, -2.0));
        assert_eq!(a.dot(p(2.0, 1.0)), 0.0);
    }

    #[test]
    fn test_zero_vector_has_no_perpendicular() {
        assert_eq!(Vector::ORIGIN.perpendiculars(), Err(GeometryError::ZeroVector));
    }

    #[test]
    fn test_degenerate_segment_rejected() {
        let err = Segment::new(p(1.0, 2.0), p(1.0, 2.0)).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateSegment(p(1.0, 2.0)));
    }

    #[test]
    fn test_segment_contains() {
        let s = Segment::new(p(-1.0, 0.0), p(1.0, 0.0)).unwrap();
        assert!(s.contains(p(0.0, 0.0)));
        assert!(s.contains(p(1.0, 0.0)));
        assert!(!s.contains(p(2.0, 0.0)));
        assert!(!s.contains(p(0.0, 0.1)));
    }

    #[test]
    fn test_crossing_segments_intersect() {
        let a = Segment::new(p(0.0, 0.0), p(2.0, 2.0)).unwrap();
        let b = Segment::new(p(0.0, 2.0), p(2.0, 0.0)).unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_separate_segments_do_not_intersect() {
        let a = Segment::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        let b = Segment::new(p(0.0, 1.0), p(1.0, 1.0)).unwrap();
        assert!(!a.intersects(&b));

        // The line through `b` crosses `a`, but `b` itself stops short.
        let c = Segment::new(p(0.5, 1.0), p(0.5, 0.5)).unwrap();
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_segments_intersect() {
        let a = Segment::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        let t_junction = Segment::new(p(0.5, 0.0), p(0.5, 1.0)).unwrap();
        let shared_end = Segment::new(p(1.0, 0.0), p(1.0, 1.0)).unwrap();
        assert!(a.intersects(&t_junction));
        assert!(a.intersects(&shared_end));
    }

    #[test]
    fn test_collinear_disjoint_segments_report_intersection() {
        // Sign test approximation: all four orientations are zero.
        let a = Segment::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        let b = Segment::new(p(2.0, 0.0), p(3.0, 0.0)).unwrap();
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_closest_point_clamps_to_endpoints() {
        let s = Segment::new(p(0.0, 0.0), p(10.0, 0.0)).unwrap();
        assert_eq!(s.closest_point(p(5.0, 3.0)), p(5.0, 0.0));
        assert_eq!(s.closest_point(p(-4.0, 3.0)), p(0.0, 0.0));
        assert_eq!(s.closest_point(p(14.0, -3.0)), p(10.0, 0.0));
        assert_relative_eq!(s.distance_to(p(13.0, 4.0)), 5.0);
    }

    #[test]
    fn test_nalgebra_conversion() {
        let v: Vec2 = p(1.5, -2.0).into();
        assert_eq!(Point::from(v), p(1.5, -2.0));
    }
}
