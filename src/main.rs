//! Sightline - Entry Point
//!
//! Reads a scene file, plans the shortest route and writes the geometry
//! echo, visibility graph dump and path next to each other.

use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sightline::core::{Result, RouteConfig, RouteError};
use sightline::graph::write_graph_dump;
use sightline::route::{plan_route, write_path, SceneStats};
use sightline::scene::{load_scene, write_geometry};

/// Shortest route from (0, 0) to (size, size) around polygonal obstacles
#[derive(Parser, Debug)]
#[command(name = "sightline")]
#[command(about = "Plan the shortest route across a polygonal obstacle map")]
struct Args {
    /// Scene file: map size, polygon count, then each polygon's points
    scene: PathBuf,

    /// TOML config with output file names and toggles
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for output files (overrides the config)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sightline=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn load_config(args: &Args) -> Result<RouteConfig> {
    let mut config = match &args.config {
        Some(path) => RouteConfig::load(path)?,
        None => RouteConfig::default(),
    };
    if let Some(dir) = &args.out_dir {
        config.output_dir = dir.clone();
    }
    config.validate().map_err(RouteError::ConfigError)?;
    Ok(config)
}

/// Create `path` and fill it through a buffered writer
fn write_file<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut out = BufWriter::new(File::create(path)?);
    fill(&mut out)?;
    out.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    // Input errors stop here, before any file is written
    let mut scene = load_scene(&args.scene)?;
    let plan = plan_route(&mut scene);

    std::fs::create_dir_all(&config.output_dir)?;

    if config.write_geometry {
        let path = config.geometry_path();
        write_file(&path, |out| write_geometry(&scene, out))?;
        tracing::info!("Geometry written to {}", path.display());
    }

    if config.write_graph {
        let path = config.graph_path();
        write_file(&path, |out| write_graph_dump(&scene, &plan.graph, out))?;
        tracing::info!("Visibility graph written to {}", path.display());
    }

    if plan.route.is_found() {
        let path = config.path_path();
        write_file(&path, |out| write_path(&plan.route.points, out))?;
        tracing::info!("Path saved to {}", path.display());
    }

    if args.json {
        let stats = SceneStats::collect(&scene, &plan);
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
