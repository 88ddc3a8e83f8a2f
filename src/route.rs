//! End-to-end route planning
//!
//! Reduce obstacles to hulls, build the visibility graph, search it.

use serde::Serialize;
use std::io::Write;

use crate::core::error::{Result, RouteError};
use crate::core::types::{Point, VertexId};
use crate::geometry::kernel::distance;
use crate::graph::{build_visibility_graph, VisibilityGraph};
use crate::pathfinding::find_path;
use crate::scene::{HullReport, Scene};

/// A route from start to goal
///
/// Empty when the goal cannot be reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    pub vertices: Vec<VertexId>,
    pub points: Vec<Point>,
    pub length: f64,
}

impl Route {
    fn from_vertices(scene: &Scene, vertices: Vec<VertexId>) -> Self {
        let points: Vec<Point> = vertices.iter().map(|&v| scene.point(v)).collect();
        let length = path_length(&points);
        Self { vertices, points, length }
    }

    pub fn is_found(&self) -> bool {
        !self.vertices.is_empty()
    }
}

/// Everything a planning run produced
#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub hulls: HullReport,
    pub graph: VisibilityGraph,
    pub route: Route,
}

/// Search an already built graph for the shortest start-to-goal route
pub fn shortest_route(scene: &Scene, graph: &VisibilityGraph) -> Route {
    let goal = scene.point(scene.end());

    // Coincident start and goal never get an edge between them
    if scene.point(scene.start()) == goal {
        tracing::info!("Start and goal coincide at {}", goal);
        return Route::from_vertices(scene, vec![scene.start()]);
    }

    let heuristic = |v: VertexId| distance(scene.point(v), goal);

    match find_path(graph, scene.start(), scene.end(), heuristic) {
        Some(vertices) => {
            let route = Route::from_vertices(scene, vertices);
            tracing::info!(
                "Route found: {} waypoints, length {:.3}",
                route.points.len(),
                route.length
            );
            route
        }
        None => {
            tracing::info!("Path not found");
            Route::default()
        }
    }
}

/// Run the whole pipeline on a freshly loaded scene
///
/// The scene's obstacles are replaced by their hulls in place.
pub fn plan_route(scene: &mut Scene) -> RoutePlan {
    let hulls = scene.reduce_to_hulls();
    let graph = build_visibility_graph(scene);
    tracing::info!(
        "Visibility graph built: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    let route = shortest_route(scene, &graph);
    RoutePlan { hulls, graph, route }
}

/// Sum of segment lengths along a polyline
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Write a route as a flat `x1 y1 x2 y2 ...` sequence
pub fn write_path<W: Write>(points: &[Point], out: &mut W) -> Result<()> {
    let line = points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{}", line)?;
    Ok(())
}

/// Parse the flat path format back into points
pub fn parse_path(content: &str) -> Result<Vec<Point>> {
    let values = content
        .split_whitespace()
        .map(|t| {
            t.parse::<f64>()
                .map_err(|_| RouteError::parse(1, format!("invalid coordinate {:?}", t)))
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.len() % 2 != 0 {
        return Err(RouteError::parse(
            1,
            format!("odd number of coordinates ({})", values.len()),
        ));
    }
    Ok(values
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

/// Summary of a planning run, emitted as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneStats {
    pub map_size: f64,
    pub polygon_count: usize,
    /// Obstacle vertices after hull reduction
    pub vertex_count: usize,
    pub vertices_dropped: usize,
    pub obstacle_area: f64,
    /// Obstacle area over map area; 0 for a zero-size map
    pub coverage: f64,
    pub edge_count: usize,
    pub path_found: bool,
    pub path_length: f64,
    pub path_vertex_count: usize,
}

impl SceneStats {
    pub fn collect(scene: &Scene, plan: &RoutePlan) -> Self {
        let map_area = scene.map_size() * scene.map_size();
        let obstacle_area = scene.total_obstacle_area();
        Self {
            map_size: scene.map_size(),
            polygon_count: scene.polygons().len(),
            vertex_count: plan.hulls.vertices_after,
            vertices_dropped: plan.hulls.dropped(),
            obstacle_area,
            coverage: if map_area > 0.0 { obstacle_area / map_area } else { 0.0 },
            edge_count: plan.graph.edge_count(),
            path_found: plan.route.is_found(),
            path_length: plan.route.length,
            path_vertex_count: plan.route.vertices.len(),
        }
    }
}
