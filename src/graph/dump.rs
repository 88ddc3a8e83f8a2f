//! Visibility graph dump format
//!
//! ```text
//! <edge count of start>
//! x, y, distance        one line per edge
//! <edge count of end>
//! x, y, distance
//! <polygon id>
//! <vertex count>
//! <edge count of vertex 0>
//! x, y, distance
//! ...
//!                       blank line after each polygon
//! ```
//!
//! Neighbors are identified by coordinates only, so the dump is meant for
//! inspection and plotting, not for rebuilding vertex identity.

use std::io::Write;

use crate::core::error::{Result, RouteError};
use crate::core::types::{PolygonId, VertexId};
use crate::graph::VisibilityGraph;
use crate::scene::Scene;

/// One `x, y, distance` line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DumpEntry {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

/// Per-vertex edge blocks of one polygon
#[derive(Debug, Clone, PartialEq)]
pub struct DumpPolygon {
    pub id: PolygonId,
    pub vertices: Vec<Vec<DumpEntry>>,
}

/// In-memory form of a graph dump
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphDump {
    pub start: Vec<DumpEntry>,
    pub end: Vec<DumpEntry>,
    pub polygons: Vec<DumpPolygon>,
}

impl GraphDump {
    /// Capture a built graph in dump order
    pub fn from_graph(scene: &Scene, graph: &VisibilityGraph) -> Self {
        let block = |v: VertexId| -> Vec<DumpEntry> {
            graph
                .neighbors(v)
                .iter()
                .map(|e| {
                    let p = scene.point(e.to);
                    DumpEntry { x: p.x, y: p.y, weight: e.weight }
                })
                .collect()
        };

        Self {
            start: block(scene.start()),
            end: block(scene.end()),
            polygons: scene
                .polygons()
                .iter()
                .map(|polygon| DumpPolygon {
                    id: polygon.id,
                    vertices: polygon.boundary().iter().map(|&v| block(v)).collect(),
                })
                .collect(),
        }
    }

    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        write_block(out, &self.start)?;
        write_block(out, &self.end)?;
        for polygon in &self.polygons {
            writeln!(out, "{}", polygon.id)?;
            writeln!(out, "{}", polygon.vertices.len())?;
            for block in &polygon.vertices {
                write_block(out, block)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Copy with every block sorted, for order-insensitive comparison
    pub fn normalized(&self) -> Self {
        let sort = |block: &Vec<DumpEntry>| {
            let mut block = block.clone();
            block.sort_by(|a, b| {
                a.x.total_cmp(&b.x)
                    .then(a.y.total_cmp(&b.y))
                    .then(a.weight.total_cmp(&b.weight))
            });
            block
        };

        Self {
            start: sort(&self.start),
            end: sort(&self.end),
            polygons: self
                .polygons
                .iter()
                .map(|p| DumpPolygon {
                    id: p.id,
                    vertices: p.vertices.iter().map(sort).collect(),
                })
                .collect(),
        }
    }

    /// Total number of edge lines in the dump
    pub fn entry_count(&self) -> usize {
        self.start.len()
            + self.end.len()
            + self
                .polygons
                .iter()
                .flat_map(|p| p.vertices.iter())
                .map(Vec::len)
                .sum::<usize>()
    }
}

fn write_block<W: Write>(out: &mut W, block: &[DumpEntry]) -> Result<()> {
    writeln!(out, "{}", block.len())?;
    for entry in block {
        writeln!(out, "{}, {}, {}", entry.x, entry.y, entry.weight)?;
    }
    Ok(())
}

/// Write the dump for a built graph
pub fn write_graph_dump<W: Write>(
    scene: &Scene,
    graph: &VisibilityGraph,
    out: &mut W,
) -> Result<()> {
    GraphDump::from_graph(scene, graph).write(out)
}

/// Non-blank lines with their 1-based line numbers
struct Lines<'a> {
    lines: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(content: &'a str) -> Self {
        let lines = content
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();
        Self { lines, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn next_line(&mut self, what: &str) -> Result<(usize, &'a str)> {
        let Some(&entry) = self.lines.get(self.pos) else {
            let line = self.lines.last().map(|&(l, _)| l).unwrap_or(0);
            return Err(RouteError::parse(
                line,
                format!("unexpected end of dump, expected {}", what),
            ));
        };
        self.pos += 1;
        Ok(entry)
    }

    fn next_count(&mut self, what: &str) -> Result<usize> {
        let (line, text) = self.next_line(what)?;
        text.parse()
            .map_err(|_| RouteError::parse(line, format!("expected {}, found {:?}", what, text)))
    }

    fn next_block(&mut self) -> Result<Vec<DumpEntry>> {
        let count = self.next_count("edge count")?;
        (0..count).map(|_| self.next_entry()).collect()
    }

    fn next_entry(&mut self) -> Result<DumpEntry> {
        let (line, text) = self.next_line("edge line")?;
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        let [x, y, weight] = fields.as_slice() else {
            return Err(RouteError::parse(
                line,
                format!("expected `x, y, distance`, found {:?}", text),
            ));
        };
        let number = |field: &str| -> Result<f64> {
            field
                .parse()
                .map_err(|_| RouteError::parse(line, format!("invalid number {:?}", field)))
        };
        Ok(DumpEntry {
            x: number(*x)?,
            y: number(*y)?,
            weight: number(*weight)?,
        })
    }
}

/// Parse a graph dump back into memory
pub fn parse_graph_dump(content: &str) -> Result<GraphDump> {
    let mut lines = Lines::new(content);

    let start = lines.next_block()?;
    let end = lines.next_block()?;

    let mut polygons = Vec::new();
    while !lines.is_done() {
        let (line, text) = lines.next_line("polygon id")?;
        let id: i32 = text
            .parse()
            .map_err(|_| RouteError::parse(line, format!("expected polygon id, found {:?}", text)))?;
        let vertex_count = lines.next_count("vertex count")?;
        let vertices = (0..vertex_count)
            .map(|_| lines.next_block())
            .collect::<Result<Vec<_>>>()?;
        polygons.push(DumpPolygon {
            id: PolygonId(id),
            vertices,
        });
    }

    Ok(GraphDump {
        start,
        end,
        polygons,
    })
}
