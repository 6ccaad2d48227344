//! Simplex search over the Minkowski difference of two polygons
//!
//! Grows a simplex of at most three support points towards the origin.
//! The search is capped at [`MAX_ITERATIONS`] and reports no overlap when
//! it runs out, which is adequate for the small convex hitboxes it is used
//! with but not a guarantee for pathological inputs.

use super::polygon::{point_in_polygon, PolygonCollider};
use super::primitives::{point_on_segment, Point, Vector};
use crate::foundation::math::utils;

/// Upper bound on simplex refinements per query
pub const MAX_ITERATIONS: usize = 10;

/// One point of the Minkowski difference `a - b`, extreme along `direction`
pub fn support(a: &PolygonCollider, b: &PolygonCollider, direction: Vector) -> Point {
    a.farthest(direction) - b.farthest(-direction)
}

/// Whether two polygons overlap
pub fn polygons_overlap(a: &PolygonCollider, b: &PolygonCollider) -> bool {
    let mut simplex: Vec<Point> = Vec::with_capacity(3);
    let mut direction = Vector::new(1.0, 0.0);

    for _ in 0..MAX_ITERATIONS {
        let point = support(a, b, direction);

        if simplex.len() >= 3 {
            simplex.remove(0);
        }
        simplex.push(point);
        let to_origin = -simplex[0];

        if point.is_zero() {
            return true;
        }

        let next = match simplex.len() {
            1 => {
                if point.dot(direction) <= 0.0 {
                    return false;
                }
                point.perpendiculars().ok().map(|[first, _]| first)
            }
            2 => match line_case(simplex[0], simplex[1], to_origin) {
                Step::Continue(d) => Some(d),
                Step::Overlap => return true,
                Step::Separated => None,
            },
            _ => match triangle_case(&simplex, to_origin) {
                Step::Continue(d) => Some(d),
                Step::Overlap => return true,
                Step::Separated => None,
            },
        };

        match next {
            Some(d) => direction = d,
            None => return false,
        }
    }

    log::trace!("Simplex search hit the iteration cap without a verdict");
    false
}

enum Step {
    Continue(Vector),
    Overlap,
    Separated,
}

fn line_case(a: Point, b: Point, to_origin: Vector) -> Step {
    if a == b {
        return Step::Separated;
    }
    if point_on_segment(a, b, Point::ORIGIN) {
        return Step::Overlap;
    }
    let Ok(perpendiculars) = (b - a).perpendiculars() else {
        return Step::Separated;
    };
    perpendiculars
        .into_iter()
        .find(|pd| pd.dot(to_origin) > 0.0)
        .map_or(Step::Separated, Step::Continue)
}

fn triangle_case(simplex: &[Point], to_origin: Vector) -> Step {
    if utils::is_near_zero(simplex[0].orientation(simplex[1], simplex[2])) {
        return Step::Separated;
    }
    if point_in_polygon(simplex, Point::ORIGIN) {
        return Step::Overlap;
    }

    let mut best: Option<Vector> = None;
    let mut max = 0.0;
    for i in 0..simplex.len() {
        let edge = simplex[(i + 1) % simplex.len()] - simplex[i];
        let Ok(perpendiculars) = edge.perpendiculars() else {
            continue;
        };
        for pd in perpendiculars {
            let alignment = pd.dot(to_origin);
            if alignment > max {
                max = alignment;
                best = Some(pd);
            }
        }
    }
    best.map_or(Step::Separated, Step::Continue)
}
