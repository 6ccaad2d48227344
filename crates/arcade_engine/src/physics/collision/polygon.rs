//! Polygon collider
//!
//! Vertices are validated once at construction (count, distinct consecutive
//! vertices, no collinear corner, no self-intersection). Afterwards the
//! polygon only ever undergoes rigid motions and non-zero uniform scaling,
//! which preserve those properties.

use super::circle::CircleCollider;
use super::gjk;
use super::primitives::{closest_point_on_segment, point_on_segment, Point, Segment, Vector};
use super::shape::ColliderError;
use crate::foundation::math::{utils, Vec2};
use std::fmt;

/// Minimum number of vertices for a polygon
pub const MIN_VERTICES: usize = 3;

/// A simple polygon collision shape
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCollider {
    vertices: Vec<Point>,
}

impl PolygonCollider {
    /// Creates a polygon from an ordered vertex list
    pub fn new(vertices: Vec<Point>) -> Result<Self, ColliderError> {
        let n = vertices.len();
        if n < MIN_VERTICES {
            return Err(ColliderError::TooFewVertices(n));
        }
        if let Some(&bad) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(ColliderError::NonFiniteVertex(bad));
        }

        let edges = (0..n)
            .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
            .collect::<Result<Vec<_>, _>>()?;

        for i in 0..n {
            let (a, b, c) = (vertices[i], vertices[(i + 1) % n], vertices[(i + 2) % n]);
            if a.orientation(b, c) == 0.0 {
                return Err(ColliderError::CollinearVertices { index: (i + 1) % n });
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if !adjacent && edges[i].intersects(&edges[j]) {
                    return Err(ColliderError::SelfIntersecting { first: i, second: j });
                }
            }
        }

        Ok(Self { vertices })
    }

    /// All vertices in order
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex at `index`
    pub fn vertex(&self, index: usize) -> Result<Point, ColliderError> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(ColliderError::VertexOutOfRange { index, len: self.vertices.len() })
    }

    /// Edges in order, the last one closing back to vertex 0
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::from_parts(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area by the shoelace formula (positive for counter-clockwise winding)
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice_area: f64 = (0..n)
            .map(|i| {
                let (a, b) = (self.vertices[i], self.vertices[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice_area / 2.0
    }

    /// Area centroid
    ///
    /// Falls back to the vertex mean when the area is numerically zero.
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len();
        let area = self.signed_area();
        if utils::is_near_zero(area) {
            let sum = self.vertices.iter().fold(Vector::ORIGIN, |acc, &v| acc + v);
            return sum * (1.0 / n as f64);
        }

        let (mut cx, mut cy) = (0.0, 0.0);
        for i in 0..n {
            let (a, b) = (self.vertices[i], self.vertices[(i + 1) % n]);
            let cross = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }
        Point::new(cx / (6.0 * area), cy / (6.0 * area))
    }

    /// Moves every vertex by `v`
    pub fn translate(&mut self, v: Vector) {
        for vertex in &mut self.vertices {
            vertex.translate(v);
        }
    }

    /// Rotates counter-clockwise by `degrees` about the centroid
    pub fn rotate(&mut self, degrees: f64) {
        if degrees == 0.0 {
            return;
        }
        let center = self.centroid();
        let rotation = utils::rotation_degrees(degrees);
        for vertex in &mut self.vertices {
            let local: Vec2 = (*vertex - center).into();
            *vertex = center + Point::from(rotation * local);
        }
    }

    /// Scales by `factor` about the centroid
    ///
    /// A zero or non-finite factor would collapse the polygon and is ignored.
    pub fn scale(&mut self, factor: f64) {
        if factor == 0.0 || !factor.is_finite() {
            log::warn!("Ignoring polygon scale by {factor}: it would collapse the polygon");
            return;
        }
        let center = self.centroid();
        for vertex in &mut self.vertices {
            *vertex = center + (*vertex - center) * factor;
        }
    }

    /// Support function: the vertex farthest along `direction`
    ///
    /// Ties resolve to the lowest vertex index.
    pub fn farthest(&self, direction: Vector) -> Point {
        let mut best = self.vertices[0];
        let mut best_dot = best.dot(direction);
        for &vertex in &self.vertices[1..] {
            let dot = vertex.dot(direction);
            if dot > best_dot {
                best = vertex;
                best_dot = dot;
            }
        }
        best
    }

    /// Whether `p` is inside the polygon or on its boundary
    pub fn contains_point(&self, p: Point) -> bool {
        point_in_polygon(&self.vertices, p)
    }

    /// Polygon-circle overlap
    ///
    /// True when the circle's center is inside the polygon or some edge
    /// passes within the radius of the center.
    pub fn overlaps_circle(&self, circle: &CircleCollider) -> bool {
        let center = circle.center();
        if self.contains_point(center) {
            return true;
        }
        self.edges()
            .any(|edge| edge.distance_to(center) <= circle.radius())
    }

    /// Polygon-polygon overlap using the simplex search
    pub fn overlaps_polygon(&self, other: &PolygonCollider) -> bool {
        gjk::polygons_overlap(self, other)
    }
}

/// Point-in-polygon by ray casting with an explicit boundary check
///
/// Points on any edge count as inside. Otherwise a horizontal ray towards
/// `+x` is cast and the crossings of edges straddling `p.y` are counted.
pub fn point_in_polygon(vertices: &[Point], p: Point) -> bool {
    let n = vertices.len();
    let mut crossings = 0;
    for i in 0..n {
        let (a, b) = (vertices[i], vertices[(i + 1) % n]);
        if point_on_segment(a, b, p) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let intersect_x = a.x + (b.x - a.x) * (p.y - a.y) / (b.y - a.y);
            if intersect_x > p.x {
                crossings += 1;
            }
        }
    }
    crossings % 2 == 1
}

/// Distance from `p` to the nearest polygon edge
pub fn distance_to_boundary(vertices: &[Point], p: Point) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| closest_point_on_segment(vertices[i], vertices[(i + 1) % n], p).distance(p))
        .fold(f64::INFINITY, f64::min)
}

impl fmt::Display for PolygonCollider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::primitives::GeometryError;
    use approx::assert_relative_eq;

    fn poly(points: &[(f64, f64)]) -> Result<PolygonCollider, ColliderError> {
        PolygonCollider::new(points.iter().map(|&p| Point::from(p)).collect())
    }

    fn unit_square() -> PolygonCollider {
        poly(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_too_few_vertices() {
        assert_eq!(poly(&[(0.0, 0.0), (1.0, 1.0)]), Err(ColliderError::TooFewVertices(2)));
    }

    #[test]
    fn test_duplicated_vertex_rejected() {
        let err = poly(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap_err();
        assert_eq!(
            err,
            ColliderError::DegenerateEdge(GeometryError::DegenerateSegment(Point::new(1.0, 1.0)))
        );
    }

    #[test]
    fn test_bowtie_rejected() {
        let err = poly(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]).unwrap_err();
        assert_eq!(err, ColliderError::SelfIntersecting { first: 0, second: 2 });
    }

    #[test]
    fn test_collinear_vertices_rejected() {
        let err = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 1.0)]).unwrap_err();
        assert_eq!(err, ColliderError::CollinearVertices { index: 1 });
    }

    #[test]
    fn test_collinear_wraparound_rejected() {
        // Vertices 3, 0, 1 are collinear across the closing edge.
        let err = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0), (-2.0, 0.0)]).unwrap_err();
        assert!(matches!(err, ColliderError::CollinearVertices { .. }));
    }

    #[test]
    fn test_vertex_access() {
        let square = unit_square();
        assert_eq!(square.vertex(2), Ok(Point::new(1.0, 1.0)));
        assert_eq!(
            square.vertex(4),
            Err(ColliderError::VertexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_unit_square_centroid() {
        let c = unit_square().centroid();
        assert_relative_eq!(c.x, 0.5);
        assert_relative_eq!(c.y, 0.5);
    }

    #[test]
    fn test_centroid_independent_of_winding() {
        let cw = unit_square();
        let ccw = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        assert!(cw.signed_area() < 0.0);
        assert!(ccw.signed_area() > 0.0);
        assert_relative_eq!(cw.centroid().x, ccw.centroid().x);
        assert_relative_eq!(cw.centroid().y, ccw.centroid().y);
    }

    #[test]
    fn test_scale_round_trip() {
        let mut shape = poly(&[(0.0, 0.0), (4.0, 1.0), (3.0, 5.0), (-1.0, 3.0)]).unwrap();
        let original = shape.clone();
        shape.scale(2.5);
        shape.scale(1.0 / 2.5);
        for (a, b) in shape.vertices().iter().zip(original.vertices()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_scale_keeps_centroid() {
        let mut square = unit_square();
        square.scale(3.0);
        assert_relative_eq!(square.centroid().x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(square.vertex(0).unwrap().x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(square.signed_area(), -9.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_scale_ignored() {
        let mut square = unit_square();
        square.scale(0.0);
        assert_eq!(square, unit_square());
    }

    #[test]
    fn test_rotate_about_centroid() {
        let mut square = unit_square();
        square.rotate(90.0);
        let c = square.centroid();
        assert_relative_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.5, epsilon = 1e-12);
        // (0, 0) turns a quarter counter-clockwise about (0.5, 0.5) to (1, 0).
        let first = square.vertex(0).unwrap();
        assert_relative_eq!(first.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(first.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_translate() {
        let mut square = unit_square();
        square.translate(Vector::new(2.0, 3.0));
        assert_eq!(square.vertex(0), Ok(Point::new(2.0, 3.0)));
        assert_relative_eq!(square.centroid().x, 2.5);
    }

    #[test]
    fn test_farthest_prefers_lowest_index_on_ties() {
        let square = unit_square();
        // (1, 1) and (1, 0) tie along +x; index 2 comes first.
        assert_eq!(square.farthest(Vector::new(1.0, 0.0)), Point::new(1.0, 1.0));
        assert_eq!(square.farthest(Vector::new(-1.0, 0.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_contains_point() {
        let square = unit_square();
        assert!(square.contains_point(Point::new(0.5, 0.5)));
        assert!(square.contains_point(Point::new(0.0, 0.5)));
        assert!(square.contains_point(Point::new(1.0, 1.0)));
        assert!(!square.contains_point(Point::new(1.5, 0.5)));
        assert!(!square.contains_point(Point::new(-0.1, 0.5)));
    }

    #[test]
    fn test_contains_point_concave() {
        // An L shape: the notch at (1.5, 1.5) is outside.
        let l_shape = poly(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ])
        .unwrap();
        assert!(l_shape.contains_point(Point::new(0.5, 1.5)));
        assert!(!l_shape.contains_point(Point::new(1.5, 1.5)));
    }

    #[test]
    fn test_polygon_circle_overlap() {
        let square = unit_square();
        let inside = CircleCollider::new(Point::new(0.5, 0.5), 0.1).unwrap();
        let touching_edge = CircleCollider::new(Point::new(1.5, 0.5), 0.5).unwrap();
        let near_corner = CircleCollider::new(Point::new(1.5, 1.5), 0.5).unwrap();
        let far = CircleCollider::new(Point::new(5.0, 5.0), 1.0).unwrap();
        assert!(square.overlaps_circle(&inside));
        assert!(square.overlaps_circle(&touching_edge));
        assert!(!square.overlaps_circle(&near_corner));
        assert!(!square.overlaps_circle(&far));
    }

    #[test]
    fn test_distance_to_boundary() {
        let square = unit_square();
        assert_relative_eq!(distance_to_boundary(square.vertices(), Point::new(0.5, 0.25)), 0.25);
        assert_relative_eq!(distance_to_boundary(square.vertices(), Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_display() {
        let triangle = poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        assert_eq!(triangle.to_string(), "(0.00,0.00) (1.00,0.00) (0.00,1.00)");
    }
}
