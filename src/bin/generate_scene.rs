//! Random Scene Generator
//!
//! Writes a random obstacle map in the scene file format. The same seed
//! always yields the same map.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use sightline::core::{Result, RouteError};
use sightline::scene::{generate_scene, write_scene, GeneratorConfig};

/// Random scene generator
#[derive(Parser, Debug)]
#[command(name = "generate_scene")]
#[command(about = "Generate a random map of non-overlapping obstacles")]
struct Args {
    /// Random seed for deterministic maps
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// TOML file overriding generator ranges
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sightline=info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn load_config(args: &Args) -> Result<GeneratorConfig> {
    let Some(path) = &args.config else {
        return Ok(GeneratorConfig::default());
    };
    let content = std::fs::read_to_string(path).map_err(|e| {
        RouteError::ConfigError(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    toml::from_str(&content)
        .map_err(|e| RouteError::ConfigError(format!("Failed to parse config TOML: {}", e)))
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let scene = generate_scene(&config, ChaCha8Rng::seed_from_u64(seed))?;

    tracing::info!(
        "Generated scene (seed {}): size {}, {} obstacles",
        seed,
        scene.map_size(),
        scene.polygons().len()
    );

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_scene(&scene, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_scene(&scene, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
