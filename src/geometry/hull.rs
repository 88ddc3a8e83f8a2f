//! Convex hull reduction (Graham scan)
//!
//! Obstacles are replaced by their convex hulls before the visibility graph
//! is built. Only extreme points survive: collinear boundary points and
//! duplicates are dropped.

use std::cmp::Ordering;

use crate::core::types::Point;
use crate::geometry::kernel::{distance, orientation};

/// Compute the convex hull of a point set
///
/// Returns hull vertices in counter-clockwise order starting from the pivot
/// (lowest y, then lowest x). Inputs with fewer than three points are
/// returned unchanged.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    convex_hull_indices(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Compute the convex hull as indices into `points`
///
/// Same ordering and degenerate handling as [`convex_hull`]. Callers that
/// need to keep vertex identity (rather than coordinates) use this form.
pub fn convex_hull_indices(points: &[Point]) -> Vec<usize> {
    if points.len() < 3 {
        return (0..points.len()).collect();
    }

    let pivot_idx = (0..points.len())
        .min_by(|&a, &b| lowest_first(points[a], points[b]))
        .unwrap_or(0);
    let pivot = points[pivot_idx];

    let mut order: Vec<usize> = (0..points.len()).filter(|&i| i != pivot_idx).collect();
    order.sort_by(|&a, &b| polar_order(pivot, points[a], points[b]));

    let mut stack: Vec<usize> = Vec::with_capacity(points.len());
    stack.push(pivot_idx);

    for idx in order {
        let p = points[idx];
        if stack.last().map(|&top| points[top]) == Some(p) {
            continue;
        }
        while stack.len() >= 2
            && orientation(
                points[stack[stack.len() - 2]],
                points[stack[stack.len() - 1]],
                p,
            ) <= 0.0
        {
            stack.pop();
        }
        stack.push(idx);
    }

    stack
}

/// Check that consecutive triples of a ring all turn counter-clockwise
pub fn is_strictly_convex(ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| orientation(ring[i], ring[(i + 1) % n], ring[(i + 2) % n]) > 0.0)
}

/// Pivot ordering: smallest y, ties broken by smallest x
fn lowest_first(a: Point, b: Point) -> Ordering {
    a.y.partial_cmp(&b.y)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Polar angle around the pivot, closer first on ties
///
/// Every point lies in the half-plane above the pivot (or to its right on
/// the same row), so the orientation sign alone is a total order on angle.
fn polar_order(pivot: Point, a: Point, b: Point) -> Ordering {
    let by_distance = || {
        distance(pivot, a)
            .partial_cmp(&distance(pivot, b))
            .unwrap_or(Ordering::Equal)
    };

    if a == pivot || b == pivot {
        return by_distance();
    }

    let turn = orientation(pivot, a, b);
    if turn > 0.0 {
        Ordering::Less
    } else if turn < 0.0 {
        Ordering::Greater
    } else {
        by_distance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn test_hull_fewer_than_three_unchanged() {
        assert!(convex_hull(&[]).is_empty());

        let one = pts(&[(3.0, 4.0)]);
        assert_eq!(convex_hull(&one), one);

        let two = pts(&[(5.0, 5.0), (1.0, 1.0)]);
        assert_eq!(convex_hull(&two), two);
    }

    #[test]
    fn test_hull_square_with_interior_point() {
        let points = pts(&[(2.0, 2.0), (4.0, 4.0), (3.0, 3.0), (4.0, 2.0), (2.0, 4.0)]);
        let hull = convex_hull(&points);
        assert_eq!(hull, pts(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)]));
    }

    #[test]
    fn test_hull_starts_at_pivot() {
        let points = pts(&[(5.0, 1.0), (0.0, 3.0), (1.0, 1.0), (3.0, 5.0)]);
        let hull = convex_hull(&points);
        // (1,1) and (5,1) tie on y, smaller x wins
        assert_eq!(hull[0], Point::new(1.0, 1.0));
        assert!(is_strictly_convex(&hull));
    }

    #[test]
    fn test_hull_drops_collinear_edge_points() {
        let points = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.5),
            (3.0, 3.0),
            (1.5, 1.5),
            (0.0, 3.0),
            (0.0, 1.0),
            (0.0, 2.0),
        ]);
        let hull = convex_hull(&points);
        assert_eq!(hull, pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]));
    }

    #[test]
    fn test_hull_all_collinear() {
        let points = pts(&[(0.0, 0.0), (2.0, 2.0), (1.0, 1.0), (3.0, 3.0)]);
        let hull = convex_hull(&points);
        assert_eq!(hull, pts(&[(0.0, 0.0), (3.0, 3.0)]));
    }

    #[test]
    fn test_hull_duplicates_removed() {
        let points = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (1.0, 2.0), (0.0, 0.0)]);
        let hull = convex_hull(&points);
        assert_eq!(hull, pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]));
    }

    #[test]
    fn test_hull_all_identical() {
        let points = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(convex_hull(&points), pts(&[(1.0, 1.0)]));
    }

    #[test]
    fn test_hull_indices_track_identity() {
        let points = pts(&[(1.0, 1.0), (0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
        assert_eq!(convex_hull_indices(&points), vec![1, 2, 3]);
    }

    fn point_set() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-50i32..50, -50i32..50), 0..40).prop_map(|coords| {
            coords
                .into_iter()
                .map(|(x, y)| Point::new(x as f64, y as f64))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_hull_is_subset_of_input(points in point_set()) {
            let hull = convex_hull(&points);
            for h in &hull {
                prop_assert!(points.contains(h));
            }
        }

        #[test]
        fn prop_hull_is_convex(points in point_set()) {
            prop_assume!(points.len() >= 3);
            let hull = convex_hull(&points);
            prop_assert!(is_strictly_convex(&hull));
        }

        #[test]
        fn prop_hull_contains_every_input(points in point_set()) {
            prop_assume!(points.len() >= 3);
            let hull = convex_hull(&points);
            prop_assume!(hull.len() >= 3);
            let n = hull.len();
            for p in &points {
                for i in 0..n {
                    prop_assert!(orientation(hull[i], hull[(i + 1) % n], *p) >= 0.0);
                }
            }
        }
    }
}
