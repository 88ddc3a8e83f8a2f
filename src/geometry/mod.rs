//! Computational geometry kernel and convex hull reduction

pub mod hull;
pub mod kernel;

pub use hull::{convex_hull, convex_hull_indices, is_strictly_convex};
pub use kernel::{distance, orientation, segments_intersect, strictly_inside_convex};
