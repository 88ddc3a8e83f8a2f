//! Text output for scenes

use std::io::Write;

use crate::core::error::Result;
use crate::scene::Scene;

/// Write a scene in the loader's input format
pub fn write_scene<W: Write>(scene: &Scene, out: &mut W) -> Result<()> {
    writeln!(out, "{}", scene.map_size())?;
    writeln!(out, "{}", scene.polygons().len())?;
    for polygon in scene.polygons() {
        writeln!(out)?;
        writeln!(out, "{}", polygon.id)?;
        writeln!(out, "{}", polygon.len())?;
        for point in scene.ring(polygon) {
            writeln!(out, "{}", point)?;
        }
    }
    Ok(())
}

/// Echo the obstacle geometry: id, vertex count, then one vertex per line
///
/// Each polygon is followed by a blank line.
pub fn write_geometry<W: Write>(scene: &Scene, out: &mut W) -> Result<()> {
    for polygon in scene.polygons() {
        writeln!(out, "{}", polygon.id)?;
        writeln!(out, "{}", polygon.len())?;
        for point in scene.ring(polygon) {
            writeln!(out, "{}", point)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
