//! Route planner configuration
//!
//! Controls where the planner writes its artifacts. Every field has a
//! default, so a config file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{Result, RouteError};

/// Configuration for a single planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Directory all artifacts are written into
    pub output_dir: PathBuf,

    /// File receiving the echo of the reduced obstacle geometry
    pub geometry_file: String,

    /// File receiving the visibility graph dump
    ///
    /// Blocks are written for start, then end, then every polygon vertex in
    /// boundary order.
    pub graph_file: String,

    /// File receiving the shortest path as a flat `x y` sequence
    ///
    /// Not created when no path exists.
    pub path_file: String,

    /// Write the geometry echo
    pub write_geometry: bool,

    /// Write the visibility graph dump
    ///
    /// The dump grows with the square of the vertex count, so large random
    /// maps may want this off.
    pub write_graph: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            geometry_file: "hulls.txt".to_string(),
            graph_file: "visibility_graph.txt".to_string(),
            path_file: "shortest_path.txt".to_string(),
            write_geometry: true,
            write_graph: true,
        }
    }
}

impl RouteConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| RouteError::ConfigError(format!("Failed to parse config TOML: {}", e)))
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RouteError::ConfigError(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let names = [
            ("geometry_file", &self.geometry_file),
            ("graph_file", &self.graph_file),
            ("path_file", &self.path_file),
        ];

        for (field, name) in names {
            if name.trim().is_empty() {
                return Err(format!("{} must not be empty", field));
            }
        }

        // Artifacts would overwrite each other
        for (i, (field_a, a)) in names.iter().enumerate() {
            for (field_b, b) in &names[i + 1..] {
                if a == b {
                    return Err(format!(
                        "{} and {} both point at {:?}",
                        field_a, field_b, a
                    ));
                }
            }
        }

        Ok(())
    }

    pub fn geometry_path(&self) -> PathBuf {
        self.output_dir.join(&self.geometry_file)
    }

    pub fn graph_path(&self) -> PathBuf {
        self.output_dir.join(&self.graph_file)
    }

    pub fn path_path(&self) -> PathBuf {
        self.output_dir.join(&self.path_file)
    }
}
