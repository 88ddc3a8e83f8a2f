//! Random scene generation
//!
//! Each obstacle is a cloud of points scattered inside a random circle.
//! Circles never overlap, so the resulting hulls never overlap either.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::core::error::{Result, RouteError};
use crate::core::types::{Point, PolygonId};
use crate::scene::Scene;

/// Configuration for random scenes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest map size (inclusive)
    pub min_map_size: u32,
    /// Largest map size (exclusive)
    pub max_map_size: u32,
    /// Smallest obstacle count (inclusive)
    pub min_polygons: u32,
    /// Largest obstacle count (exclusive)
    pub max_polygons: u32,
    /// Circle radius is drawn from [0, map_size * max_radius_fraction]
    pub max_radius_fraction: f64,
    /// Attempts per obstacle to find a circle clear of the others
    ///
    /// Crowded maps can make placement impossible; generation fails instead
    /// of looping forever.
    pub max_placement_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_map_size: 100,
            max_map_size: 300,
            min_polygons: 1,
            max_polygons: 10,
            max_radius_fraction: 0.5,
            max_placement_attempts: 10_000,
        }
    }
}

impl GeneratorConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.min_map_size == 0 || self.min_map_size >= self.max_map_size {
            return Err(format!(
                "map size range [{}, {}) is empty or starts at zero",
                self.min_map_size, self.max_map_size
            ));
        }
        if self.min_polygons >= self.max_polygons {
            return Err(format!(
                "polygon count range [{}, {}) is empty",
                self.min_polygons, self.max_polygons
            ));
        }
        if !(self.max_radius_fraction > 0.0 && self.max_radius_fraction <= 0.5) {
            return Err(format!(
                "max_radius_fraction ({}) must be in (0, 0.5]",
                self.max_radius_fraction
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err("max_placement_attempts must be positive".into());
        }
        Ok(())
    }
}

/// Circle an obstacle's points are scattered in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Random circle fully inside a `map_size` square
    fn random(rng: &mut impl Rng, map_size: f64, max_radius: f64) -> Self {
        let radius = rng.gen_range(0.0..=max_radius);
        let center = Point::new(
            rng.gen_range(radius..=map_size - radius),
            rng.gen_range(radius..=map_size - radius),
        );
        Self { center, radius }
    }

    pub fn overlaps(&self, other: &Circle) -> bool {
        self.center.distance(&other.center) < self.radius + other.radius
    }

    /// Number of points scattered in this circle: its circumference, rounded down
    pub fn point_count(&self) -> usize {
        (TAU * self.radius) as usize
    }

    fn scatter(&self, rng: &mut impl Rng) -> Vec<Point> {
        (0..self.point_count())
            .map(|_| {
                let theta = rng.gen_range(0.0..TAU);
                let r = rng.gen_range(0.0..=self.radius);
                Point::new(
                    self.center.x + r * theta.cos(),
                    self.center.y + r * theta.sin(),
                )
            })
            .collect()
    }
}

/// Generate a random scene
///
/// Polygon ids are numbered from 1.
pub fn generate_scene(config: &GeneratorConfig, mut rng: ChaCha8Rng) -> Result<Scene> {
    config.validate().map_err(RouteError::InvalidScene)?;

    let map_size = rng.gen_range(config.min_map_size..config.max_map_size) as f64;
    let polygon_count = rng.gen_range(config.min_polygons..config.max_polygons);
    let max_radius = map_size * config.max_radius_fraction;

    let mut circles: Vec<Circle> = Vec::with_capacity(polygon_count as usize);
    for _ in 0..polygon_count {
        let circle = (0..config.max_placement_attempts)
            .map(|_| Circle::random(&mut rng, map_size, max_radius))
            .find(|candidate| !circles.iter().any(|c| c.overlaps(candidate)))
            .ok_or_else(|| {
                RouteError::InvalidScene(format!(
                    "could not place obstacle {} of {} after {} attempts",
                    circles.len() + 1,
                    polygon_count,
                    config.max_placement_attempts
                ))
            })?;
        circles.push(circle);
    }

    let mut scene = Scene::new(map_size);
    for (i, circle) in circles.iter().enumerate() {
        scene.add_polygon(PolygonId(i as i32 + 1), circle.scatter(&mut rng));
    }

    tracing::debug!(
        "Generated map size {} with {} obstacles ({} vertices)",
        map_size,
        polygon_count,
        scene.vertex_count() - 2
    );
    Ok(scene)
}
