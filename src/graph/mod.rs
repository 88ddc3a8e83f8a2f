//! Visibility graph over scene vertices
//!
//! Adjacency lives here, keyed by [`VertexId`], separate from the geometry
//! held by the scene.

pub mod builder;
pub mod dump;

pub use builder::build_visibility_graph;
pub use dump::{parse_graph_dump, write_graph_dump, GraphDump};

use serde::Serialize;

use crate::core::types::VertexId;

/// One visibility edge as seen from its owning vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub to: VertexId,
    /// Euclidean distance between the two endpoints
    pub weight: f64,
}

/// Undirected weighted graph stored as per-vertex adjacency lists
///
/// Every edge is recorded on both endpoints.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl VisibilityGraph {
    /// Graph over `vertex_count` vertices and no edges
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Record an undirected edge on both endpoints
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) {
        debug_assert!(a != b, "self-loops are never visibility edges");
        debug_assert!(weight >= 0.0, "edge weights are distances");
        self.adjacency[a.index()].push(Edge { to: b, weight });
        self.adjacency[b.index()].push(Edge { to: a, weight });
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Edges leaving `vertex`, in insertion order
    pub fn neighbors(&self, vertex: VertexId) -> &[Edge] {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the edge between `a` and `b`, if they see each other
    pub fn weight(&self, a: VertexId, b: VertexId) -> Option<f64> {
        self.neighbors(a).iter().find(|e| e.to == b).map(|e| e.weight)
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.weight(a, b).is_some()
    }
}
