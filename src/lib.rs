//! Sightline - shortest routes across polygonal obstacle maps
//!
//! Obstacles are reduced to convex hulls, every pair of mutually visible
//! vertices is joined in a visibility graph, and A* finds the shortest
//! start-to-goal route over it.

pub mod core;
pub mod geometry;
pub mod graph;
pub mod pathfinding;
pub mod route;
pub mod scene;
