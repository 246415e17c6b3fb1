//! curveloft CLI - build meshes from curves in a scene file
//!
//! Resamples the selected curves to the same point count and writes them out
//! as an edge chain (one curve) or a quad grid (several curves).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod scene;

use config::{Settings, MAX_SEGMENTS, MIN_SEGMENTS};

#[derive(Parser)]
#[command(name = "curveloft")]
#[command(about = "Build meshes from evenly resampled curves", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a mesh from the curves in a scene file
    Mesh {
        /// Input scene (.json)
        input: PathBuf,
        /// Output file (format determined by extension: .json, .obj)
        #[arg(short, long)]
        output: PathBuf,
        /// Spans per curve
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(MIN_SEGMENTS as i64..=MAX_SEGMENTS as i64))]
        segments: Option<u32>,
        /// Close every curve that does not say otherwise
        #[arg(long)]
        cyclic: bool,
        /// Leave curves open, even if the settings file says otherwise
        #[arg(long, conflicts_with = "cyclic")]
        no_cyclic: bool,
        /// Object to use; repeat to select several, in order (default: all)
        #[arg(long = "select", value_name = "NAME")]
        select: Vec<String>,
        /// Settings file (.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Name for the created object
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Display information about a scene file
    Info {
        /// Path to the scene file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Mesh {
            input,
            output,
            segments,
            cyclic,
            no_cyclic,
            select,
            config,
            name,
        } => {
            let settings = match config {
                Some(path) => Settings::load(&path)?,
                None => Settings::default(),
            };
            let cyclic = match (cyclic, no_cyclic) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let settings = settings.with_overrides(segments, cyclic, name)?;
            build_mesh(&input, &output, &select, &settings)?;
        }
        Commands::Info { file } => {
            show_info(&file)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "curveloft=debug"
    } else {
        "curveloft=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn read_scene(path: &Path) -> Result<curveloft_ir::Scene> {
    let json = std::fs::read_to_string(path)?;
    Ok(curveloft_ir::Scene::from_json(&json)?)
}

fn build_mesh(input: &Path, output: &Path, select: &[String], settings: &Settings) -> Result<()> {
    let doc = read_scene(input)?;
    let mesh = scene::build_mesh(&doc, select, settings)?;
    let name = export::write_mesh(&doc, &mesh, &settings.object_name, output)?;

    println!(
        "Wrote '{}' ({} vertices, {} {}) to {}",
        name,
        mesh.vertices.len(),
        mesh.topology.len(),
        if mesh.topology.faces().is_some() {
            "faces"
        } else {
            "edges"
        },
        output.display()
    );
    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    use curveloft_ir::ObjectData;

    let doc = read_scene(path)?;

    println!("File: {}", path.display());
    println!("Version: {}", doc.version);
    println!();
    println!("Objects: {}", doc.objects.len());

    for object in &doc.objects {
        let loc = &object.location;
        match &object.data {
            ObjectData::Curve { points, cyclic } => {
                let closed = cyclic.unwrap_or(false);
                let world = scene::world_points(object).unwrap_or_default();
                println!(
                    "  {} (curve): {} points{}, length {:.4}, at ({}, {}, {})",
                    object.name,
                    points.len(),
                    if closed { ", cyclic" } else { "" },
                    curveloft::arc_length(&world, closed),
                    loc.x,
                    loc.y,
                    loc.z
                );
            }
            ObjectData::Mesh {
                vertices,
                edges,
                faces,
            } => {
                println!(
                    "  {} (mesh): {} vertices, {} edges, {} faces",
                    object.name,
                    vertices.len(),
                    edges.len(),
                    faces.len()
                );
            }
            ObjectData::Empty => {
                println!("  {} (empty) at ({}, {}, {})", object.name, loc.x, loc.y, loc.z);
            }
        }
    }

    Ok(())
}
