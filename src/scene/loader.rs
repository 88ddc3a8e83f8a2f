//! Load scenes from the whitespace-delimited text format
//!
//! ```text
//! mapSize numPolygons
//! polygonId pointCount
//! x y
//! ...
//! ```
//!
//! Line breaks carry no meaning beyond separating tokens; they are tracked
//! only to point diagnostics at the right line.

use std::path::Path;
use std::str::FromStr;

use crate::core::error::{Result, RouteError};
use crate::core::types::{Point, PolygonId};
use crate::scene::Scene;

/// Whitespace token stream that remembers source line numbers
pub(crate) struct Tokens<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(content: &'a str) -> Self {
        let tokens = content
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
            .collect();
        Self { tokens, pos: 0 }
    }

    /// Parse the next token as `T`, naming `what` in any error
    pub(crate) fn next_value<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let Some(&(line, token)) = self.tokens.get(self.pos) else {
            let line = self.tokens.last().map(|&(l, _)| l).unwrap_or(0);
            return Err(RouteError::parse(
                line,
                format!("unexpected end of input, expected {}", what),
            ));
        };
        self.pos += 1;
        token
            .parse()
            .map_err(|_| RouteError::parse(line, format!("expected {}, found {:?}", what, token)))
    }

    pub(crate) fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

/// Parse a scene from text
pub fn parse_scene(content: &str) -> Result<Scene> {
    let mut tokens = Tokens::new(content);

    let map_size: f64 = tokens.next_value("map size")?;
    if !map_size.is_finite() || map_size < 0.0 {
        return Err(RouteError::InvalidScene(format!(
            "map size must be a non-negative number, got {}",
            map_size
        )));
    }
    let polygon_count: usize = tokens.next_value("polygon count")?;

    let mut scene = Scene::new(map_size);
    for _ in 0..polygon_count {
        let id: i32 = tokens.next_value("polygon id")?;
        let point_count: usize = tokens.next_value("point count")?;

        // The declared count is untrusted; never reserve more than the input holds
        let mut points = Vec::with_capacity(point_count.min(tokens.remaining() / 2));
        for _ in 0..point_count {
            let x: f64 = tokens.next_value("x coordinate")?;
            let y: f64 = tokens.next_value("y coordinate")?;
            if !x.is_finite() || !y.is_finite() {
                return Err(RouteError::InvalidScene(format!(
                    "polygon {} has a non-finite vertex ({}, {})",
                    id, x, y
                )));
            }
            points.push(Point::new(x, y));
        }
        scene.add_polygon(PolygonId(id), points);
    }

    if tokens.remaining() > 0 {
        return Err(RouteError::InvalidScene(format!(
            "{} tokens left over after the {} declared polygons",
            tokens.remaining(),
            polygon_count
        )));
    }

    Ok(scene)
}

/// Load a scene file from disk
pub fn load_scene(path: &Path) -> Result<Scene> {
    let content = std::fs::read_to_string(path)?;
    let scene = parse_scene(&content)?;
    tracing::info!(
        "Loaded {:?}: map size {}, {} polygons, {} vertices",
        path,
        scene.map_size(),
        scene.polygons().len(),
        scene.vertex_count() - 2
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_scene() {
        let scene = parse_scene("10 0").unwrap();
        assert_eq!(scene.map_size(), 10.0);
        assert!(scene.polygons().is_empty());
        assert_eq!(scene.point(scene.end()), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_parse_polygons() {
        let content = "6\n2\n\n1\n3\n1 1\n2 1\n1.5 2\n\n2\n2\n4 4\n5 5\n";
        let scene = parse_scene(content).unwrap();

        assert_eq!(scene.polygons().len(), 2);
        let first = &scene.polygons()[0];
        assert_eq!(first.id, PolygonId(1));
        assert_eq!(
            scene.ring(first),
            vec![Point::new(1.0, 1.0), Point::new(2.0, 1.0), Point::new(1.5, 2.0)]
        );
        assert_eq!(scene.polygons()[1].len(), 2);
    }

    #[test]
    fn test_truncated_input_reports_line() {
        let err = parse_scene("10 1\n1 3\n0 0\n1 0\n").unwrap_err();
        match err {
            RouteError::ParseError { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("x coordinate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_token_reports_line() {
        let err = parse_scene("10 1\n1 2\n0 zero\n").unwrap_err();
        assert!(matches!(err, RouteError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_negative_map_size_rejected() {
        let err = parse_scene("-5 0").unwrap_err();
        assert!(matches!(err, RouteError::InvalidScene(_)));
    }

    #[test]
    fn test_negative_polygon_count_rejected() {
        assert!(matches!(
            parse_scene("10 -1").unwrap_err(),
            RouteError::ParseError { line: 1, .. }
        ));
    }

    #[test]
    fn test_oversized_point_count_is_an_error() {
        let err = parse_scene("10 1\n1 999999999999999999\n0 0\n").unwrap_err();
        assert!(matches!(err, RouteError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_surplus_tokens_rejected() {
        let err = parse_scene("10 1\n1 1\n2 2\n3 3\n").unwrap_err();
        assert!(matches!(err, RouteError::InvalidScene(_)));
        assert!(matches!(
            parse_scene("10 0\n1 1 1 1\n").unwrap_err(),
            RouteError::InvalidScene(_)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scene(Path::new("no/such/scene.txt")).unwrap_err();
        assert!(matches!(err, RouteError::IoError(_)));
    }
}
