//! Obstacle scenes: vertex arena, polygons, start and goal
//!
//! A scene owns every vertex in one arena. Polygons and the visibility graph
//! refer to vertices by [`VertexId`], so nothing ever holds an address into
//! the arena. The arena is only rebuilt by [`Scene::reduce_to_hulls`], which
//! runs before any graph exists.

pub mod generator;
pub mod loader;
pub mod writer;

pub use generator::{generate_scene, GeneratorConfig};
pub use loader::{load_scene, parse_scene};
pub use writer::{write_geometry, write_scene};

use crate::core::types::{Point, PolygonId, VertexId};
use crate::geometry::hull::convex_hull_indices;

/// Start vertex, always at the (0, 0) corner
pub const START: VertexId = VertexId(0);
/// Goal vertex, always at the (size, size) corner
pub const END: VertexId = VertexId(1);

/// An obstacle: an identifier plus an ordered boundary of arena vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub id: PolygonId,
    boundary: Vec<VertexId>,
}

impl Polygon {
    pub fn new(id: PolygonId, boundary: Vec<VertexId>) -> Self {
        Self { id, boundary }
    }

    pub fn boundary(&self) -> &[VertexId] {
        &self.boundary
    }

    pub fn len(&self) -> usize {
        self.boundary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// Boundary edges as consecutive vertex pairs, including wraparound
    ///
    /// A two-vertex boundary has a single edge; fewer vertices have none.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        let n = self.boundary.len();
        let count = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        (0..count).map(move |i| (self.boundary[i], self.boundary[(i + 1) % n]))
    }

    /// Area enclosed by the boundary (shoelace formula)
    pub fn area(&self, vertices: &[Point]) -> f64 {
        let n = self.boundary.len();
        if n < 3 {
            return 0.0;
        }
        let twice_area: f64 = (0..n)
            .map(|i| {
                let a = vertices[self.boundary[i].index()];
                let b = vertices[self.boundary[(i + 1) % n].index()];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice_area.abs() / 2.0
    }
}

/// Outcome of hull reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HullReport {
    pub vertices_before: usize,
    pub vertices_after: usize,
}

impl HullReport {
    pub fn dropped(&self) -> usize {
        self.vertices_before - self.vertices_after
    }
}

/// A square map with obstacles, a start and a goal
#[derive(Debug, Clone)]
pub struct Scene {
    map_size: f64,
    vertices: Vec<Point>,
    polygons: Vec<Polygon>,
}

impl Scene {
    /// Create an empty scene; start and goal sit on opposite corners
    pub fn new(map_size: f64) -> Self {
        Self {
            map_size,
            vertices: vec![Point::new(0.0, 0.0), Point::new(map_size, map_size)],
            polygons: Vec::new(),
        }
    }

    /// Add an obstacle; its points are appended to the vertex arena
    pub fn add_polygon(&mut self, id: PolygonId, points: impl IntoIterator<Item = Point>) {
        let boundary = points
            .into_iter()
            .map(|p| {
                let vid = VertexId::new(self.vertices.len());
                self.vertices.push(p);
                vid
            })
            .collect();
        self.polygons.push(Polygon::new(id, boundary));
    }

    pub fn map_size(&self) -> f64 {
        self.map_size
    }

    pub fn start(&self) -> VertexId {
        START
    }

    pub fn end(&self) -> VertexId {
        END
    }

    #[inline]
    pub fn point(&self, id: VertexId) -> Point {
        self.vertices[id.index()]
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Coordinates of a polygon's boundary, in order
    pub fn ring(&self, polygon: &Polygon) -> Vec<Point> {
        polygon.boundary().iter().map(|&v| self.point(v)).collect()
    }

    /// Every vertex participating in the visibility graph: start, end, then
    /// each polygon's boundary in order
    pub fn graph_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        [START, END]
            .into_iter()
            .chain(self.polygons.iter().flat_map(|p| p.boundary().iter().copied()))
    }

    /// Sum of obstacle areas
    pub fn total_obstacle_area(&self) -> f64 {
        self.polygons.iter().map(|p| p.area(&self.vertices)).sum()
    }

    /// Replace every obstacle by its convex hull
    ///
    /// Non-hull vertices are removed from the arena, which is rebuilt
    /// compactly: start and end keep ids 0 and 1, hull vertices follow in
    /// polygon order. Any `VertexId` taken before this call is invalid after
    /// it, so graphs must be built afterwards.
    pub fn reduce_to_hulls(&mut self) -> HullReport {
        let vertices_before = self.vertices.len() - 2;

        let mut arena = vec![self.vertices[START.index()], self.vertices[END.index()]];
        for polygon in &mut self.polygons {
            let ring: Vec<Point> = polygon
                .boundary
                .iter()
                .map(|&v| self.vertices[v.index()])
                .collect();
            let hull = convex_hull_indices(&ring);

            polygon.boundary = hull
                .into_iter()
                .map(|i| {
                    let vid = VertexId::new(arena.len());
                    arena.push(ring[i]);
                    vid
                })
                .collect();
        }
        self.vertices = arena;

        let report = HullReport {
            vertices_before,
            vertices_after: self.vertices.len() - 2,
        };
        tracing::debug!(
            "Hull reduction kept {} of {} obstacle vertices",
            report.vertices_after,
            report.vertices_before
        );
        report
    }
}
