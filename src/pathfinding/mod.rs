//! Shortest-path search over the visibility graph

pub mod astar;

pub use astar::{find_path, path_cost, WeightedGraph};
