//! Geometric primitives: orientation, distance, segment crossing
//!
//! Everything here is built on the orientation sign. No slopes, no division,
//! so vertical and horizontal segments need no special casing.

use std::cmp::Ordering;

use crate::core::types::Point;

/// Twice the signed area of triangle `a`, `b`, `c`
///
/// Cross product of (b - a) and (c - a). Positive when `c` lies to the left
/// of the directed line a→b (counter-clockwise turn), negative for a
/// clockwise turn, zero when the three points are collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    (dx * dx + dy * dy).sqrt()
}

/// Check whether segment (p1, p2) obstructs segment (p3, p4)
///
/// Returns true when the segments cross, or when an endpoint of one segment
/// touches the interior or a non-shared endpoint of the other. Returns false
/// for:
/// - parallel segments, including collinear overlap
/// - contact that happens only at an endpoint both segments share
/// - zero-length segments
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    if p1 == p2 || p3 == p4 {
        return false;
    }

    let d1 = sign(orientation(p3, p4, p1));
    let d2 = sign(orientation(p3, p4, p2));
    let d3 = sign(orientation(p1, p2, p3));
    let d4 = sign(orientation(p1, p2, p4));

    // Collinear: overlapping or disjoint, never blocking
    if d1 == Ordering::Equal && d2 == Ordering::Equal {
        return false;
    }

    if opposite(d1, d2) && opposite(d3, d4) {
        return true;
    }

    touches(d1, p1, p3, p4)
        || touches(d2, p2, p3, p4)
        || touches(d3, p3, p1, p2)
        || touches(d4, p4, p1, p2)
}

/// Check whether `p` lies strictly inside a counter-clockwise convex ring
///
/// Rings with fewer than three vertices have no interior.
pub fn strictly_inside_convex(ring: &[Point], p: Point) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| orientation(ring[i], ring[(i + 1) % n], p) > 0.0)
}

/// `p` is collinear with (a, b), lies within it, and is not one of its endpoints
#[inline]
fn touches(side: Ordering, p: Point, a: Point, b: Point) -> bool {
    side == Ordering::Equal && p != a && p != b && within_bounds(p, a, b)
}

#[inline]
fn within_bounds(p: Point, a: Point, b: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[inline]
fn opposite(a: Ordering, b: Ordering) -> bool {
    matches!(
        (a, b),
        (Ordering::Less, Ordering::Greater) | (Ordering::Greater, Ordering::Less)
    )
}

#[inline]
fn sign(value: f64) -> Ordering {
    value.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_orientation_signs() {
        assert!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)) > 0.0);
        assert!(orientation(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)) < 0.0);
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_orientation_is_twice_area() {
        // Unit right triangle has area 0.5
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)), 1.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(p(0.0, 0.0), p(3.0, 4.0)), 5.0);
        assert_eq!(distance(p(3.0, 4.0), p(0.0, 0.0)), 5.0);
        assert_eq!(distance(p(2.0, 2.0), p(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_crossing_segments() {
        assert!(segments_intersect(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0)));
    }

    #[test]
    fn test_vertical_and_horizontal() {
        // No slope is ever computed, so a vertical segment is just another segment
        assert!(segments_intersect(p(1.0, -1.0), p(1.0, 1.0), p(0.0, 0.0), p(2.0, 0.0)));
        assert!(!segments_intersect(p(1.0, 1.0), p(1.0, 3.0), p(0.0, 0.0), p(2.0, 0.0)));
        assert!(segments_intersect(p(1.0, -1.0), p(1.0, 1.0), p(0.0, -1.0), p(2.0, 1.0)));
    }

    #[test]
    fn test_disjoint_segments() {
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 2.0)));
    }

    #[test]
    fn test_parallel_segments() {
        assert!(!segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 1.0), p(2.0, 1.0)));
    }

    #[test]
    fn test_collinear_overlap_is_not_blocking() {
        assert!(!segments_intersect(p(0.0, 0.0), p(4.0, 4.0), p(1.0, 1.0), p(2.0, 2.0)));
        assert!(!segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
    }

    #[test]
    fn test_shared_endpoint_is_not_blocking() {
        assert!(!segments_intersect(p(0.0, 0.0), p(2.0, 2.0), p(2.0, 2.0), p(4.0, 0.0)));
        assert!(!segments_intersect(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 0.0), p(2.0, 0.0)));
    }

    #[test]
    fn test_touching_a_foreign_vertex_blocks() {
        // The diagonal of a square passes exactly through two of its corners
        assert!(segments_intersect(p(0.0, 0.0), p(6.0, 6.0), p(2.0, 2.0), p(4.0, 2.0)));
        assert!(segments_intersect(p(0.0, 0.0), p(6.0, 6.0), p(4.0, 2.0), p(4.0, 4.0)));
    }

    #[test]
    fn test_t_junction_blocks() {
        assert!(segments_intersect(p(1.0, 0.0), p(1.0, 2.0), p(0.0, 0.0), p(2.0, 0.0)));
    }

    #[test]
    fn test_zero_length_never_intersects() {
        assert!(!segments_intersect(p(1.0, 1.0), p(1.0, 1.0), p(0.0, 0.0), p(2.0, 2.0)));
        assert!(!segments_intersect(p(0.0, 2.0), p(2.0, 0.0), p(1.0, 1.0), p(1.0, 1.0)));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let cases = [
            (p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0)),
            (p(0.0, 0.0), p(6.0, 6.0), p(2.0, 2.0), p(4.0, 2.0)),
            (p(1.0, 0.0), p(1.0, 2.0), p(0.0, 0.0), p(2.0, 0.0)),
            (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 2.0)),
        ];
        for (a, b, c, d) in cases {
            assert_eq!(segments_intersect(a, b, c, d), segments_intersect(c, d, a, b));
            assert_eq!(segments_intersect(a, b, c, d), segments_intersect(b, a, d, c));
        }
    }

    #[test]
    fn test_strictly_inside_convex() {
        let square = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        assert!(strictly_inside_convex(&square, p(2.0, 2.0)));
        assert!(!strictly_inside_convex(&square, p(4.0, 2.0)));
        assert!(!strictly_inside_convex(&square, p(5.0, 2.0)));
        assert!(!strictly_inside_convex(&square[..2], p(2.0, 0.0)));
    }
}
