//! All-pairs line-of-sight computation
//!
//! Vertices are start, end and every hull vertex. A pair is connected when
//! the straight segment between them crosses no obstacle edge. Consecutive
//! boundary vertices of one polygon are always connected: that edge is the
//! obstacle's own surface.
//!
//! Obstacles are assumed not to overlap. Boundary edges are therefore never
//! tested against other polygons, even though an intruding polygon could in
//! principle cut one.
//!
//! Cost is O(V² · E) for V vertices and E obstacle edges, with no spatial
//! pruning.

use crate::core::types::{Point, VertexId};
use crate::geometry::kernel::{distance, segments_intersect, strictly_inside_convex};
use crate::graph::VisibilityGraph;
use crate::scene::Scene;

/// Obstacle data the line-of-sight test runs against
struct Obstacles {
    /// Polygon index owning each vertex; `None` for start and end
    owner: Vec<Option<usize>>,
    edges: Vec<(VertexId, VertexId)>,
    rings: Vec<Vec<Point>>,
}

impl Obstacles {
    fn collect(scene: &Scene) -> Self {
        let mut owner = vec![None; scene.vertex_count()];
        let mut edges = Vec::new();
        let mut rings = Vec::new();

        for (idx, polygon) in scene.polygons().iter().enumerate() {
            for &v in polygon.boundary() {
                owner[v.index()] = Some(idx);
            }
            edges.extend(polygon.edges());
            if polygon.len() >= 3 {
                rings.push(scene.ring(polygon));
            }
        }

        Self { owner, edges, rings }
    }

    fn same_polygon(&self, u: VertexId, v: VertexId) -> bool {
        match (self.owner[u.index()], self.owner[v.index()]) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Check whether `u` and `v` can see each other
    fn line_of_sight(&self, scene: &Scene, u: VertexId, v: VertexId) -> bool {
        let pu = scene.point(u);
        let pv = scene.point(v);
        if pu == pv {
            return false;
        }

        let crosses_edge = self.edges.iter().any(|&(a, b)| {
            if a == u || a == v || b == u || b == v {
                return false;
            }
            segments_intersect(pu, pv, scene.point(a), scene.point(b))
        });
        if crosses_edge {
            return false;
        }

        // A segment that crosses no edge can still run through an obstacle's
        // interior when one endpoint lies inside it, e.g. an enclosed goal.
        let mid = pu.midpoint(&pv);
        !self.rings.iter().any(|ring| strictly_inside_convex(ring, mid))
    }
}

/// Build the visibility graph of a hull-reduced scene
pub fn build_visibility_graph(scene: &Scene) -> VisibilityGraph {
    let mut graph = VisibilityGraph::with_vertices(scene.vertex_count());
    let obstacles = Obstacles::collect(scene);

    for polygon in scene.polygons() {
        for (a, b) in polygon.edges() {
            graph.add_edge(a, b, distance(scene.point(a), scene.point(b)));
        }
    }

    let vertices: Vec<VertexId> = scene.graph_vertices().collect();
    let mut pairs_tested = 0usize;
    for (i, &u) in vertices.iter().enumerate() {
        for &v in &vertices[i + 1..] {
            if obstacles.same_polygon(u, v) {
                continue;
            }
            pairs_tested += 1;
            if obstacles.line_of_sight(scene, u, v) {
                graph.add_edge(u, v, distance(scene.point(u), scene.point(v)));
            }
        }
    }

    tracing::debug!(
        "Visibility graph: {} vertices, {} edges from {} tested pairs against {} obstacle edges",
        graph.vertex_count(),
        graph.edge_count(),
        pairs_tested,
        obstacles.edges.len()
    );
    graph
}
