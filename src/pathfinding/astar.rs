//! A* search over a weighted graph
//!
//! The heuristic is supplied by the caller. With Euclidean edge weights and
//! straight-line distance to the goal it is admissible and consistent, so
//! the first time the goal leaves the open set its score is optimal.

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::types::VertexId;
use crate::graph::{Edge, VisibilityGraph};

/// What the search needs from a graph
pub trait WeightedGraph {
    /// Outgoing edges of `vertex`
    fn edges(&self, vertex: VertexId) -> &[Edge];
}

impl WeightedGraph for VisibilityGraph {
    fn edges(&self, vertex: VertexId) -> &[Edge] {
        self.neighbors(vertex)
    }
}

/// Node in the A* open set
#[derive(Debug, Clone)]
struct OpenNode {
    vertex: VertexId,
    f_score: OrderedFloat<f64>, // g_score + heuristic
    seq: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap; earlier pushes win ties
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path from `start` to `goal`
///
/// Returns None if the goal is unreachable. `heuristic` estimates the
/// remaining cost from a vertex to `goal`.
pub fn find_path<G, H>(graph: &G, start: VertexId, goal: VertexId, heuristic: H) -> Option<Vec<VertexId>>
where
    G: WeightedGraph + ?Sized,
    H: Fn(VertexId) -> f64,
{
    let mut open_set = BinaryHeap::new();
    let mut came_from: AHashMap<VertexId, VertexId> = AHashMap::new();
    let mut g_scores: AHashMap<VertexId, f64> = AHashMap::new();
    let mut closed_set: AHashSet<VertexId> = AHashSet::new();
    let mut seq = 0u64;

    g_scores.insert(start, 0.0);
    open_set.push(OpenNode {
        vertex: start,
        f_score: OrderedFloat(heuristic(start)),
        seq,
    });

    while let Some(current) = open_set.pop() {
        // Stale entry for a vertex already finalized
        if !closed_set.insert(current.vertex) {
            continue;
        }

        if current.vertex == goal {
            return Some(reconstruct_path(&came_from, goal));
        }

        let current_g = *g_scores.get(&current.vertex).unwrap_or(&f64::INFINITY);

        for edge in graph.edges(current.vertex) {
            if closed_set.contains(&edge.to) {
                continue;
            }

            let tentative_g = current_g + edge.weight;
            let neighbor_g = *g_scores.get(&edge.to).unwrap_or(&f64::INFINITY);

            if tentative_g < neighbor_g {
                came_from.insert(edge.to, current.vertex);
                g_scores.insert(edge.to, tentative_g);

                seq += 1;
                open_set.push(OpenNode {
                    vertex: edge.to,
                    f_score: OrderedFloat(tentative_g + heuristic(edge.to)),
                    seq,
                });
            }
        }
    }

    None // No path found
}

/// Reconstruct path from came_from map
fn reconstruct_path(came_from: &AHashMap<VertexId, VertexId>, mut current: VertexId) -> Vec<VertexId> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Sum of edge weights along `path`
///
/// Returns None if two consecutive vertices are not connected.
pub fn path_cost<G: WeightedGraph + ?Sized>(graph: &G, path: &[VertexId]) -> Option<f64> {
    path.windows(2)
        .map(|pair| {
            graph
                .edges(pair[0])
                .iter()
                .filter(|e| e.to == pair[1])
                .map(|e| e.weight)
                .reduce(f64::min)
        })
        .sum()
}
