//! Polymesh CLI - polygonal mesh import and validation tool.
//!
//! Usage: polymesh <COMMAND> [OPTIONS] <DIR>
//!
//! Run `polymesh --help` for available commands. Set `RUST_LOG=debug` to see
//! marker and face listings while importing.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use polymesh::io;
use polymesh::mesh::PolygonalMesh;
use polymesh::validate::{self, ValidateOptions, EDGE_LENGTH_TOLERANCE};

#[derive(Parser)]
#[command(name = "polymesh")]
#[command(author, version, about = "Polygonal mesh import and validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import and validate a mesh directory
    Check {
        /// Directory holding Cell0Ds.csv, Cell1Ds.csv and Cell2Ds.csv
        dir: PathBuf,

        /// Minimum edge length
        #[arg(short, long, default_value_t = EDGE_LENGTH_TOLERANCE)]
        edge_tolerance: f64,

        /// Minimum triangle area (default: derived from the edge tolerance)
        #[arg(short, long)]
        area_tolerance: Option<f64>,

        /// Report every violation instead of stopping at the first
        #[arg(long)]
        all: bool,
    },

    /// Display mesh contents without validating
    Info {
        /// Directory holding Cell0Ds.csv, Cell1Ds.csv and Cell2Ds.csv
        dir: PathBuf,

        /// List every face with its vertices and edges
        #[arg(long)]
        faces: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check {
            dir,
            edge_tolerance,
            area_tolerance,
            all,
        } => {
            let mut options = ValidateOptions::new(edge_tolerance);
            if let Some(area) = area_tolerance {
                options = options.with_area_tolerance(area);
            }
            cmd_check(&dir, &options, all)?;
        }

        Commands::Info { dir, faces } => {
            cmd_info(&dir, faces)?;
        }
    }

    Ok(())
}

fn cmd_check(
    dir: &Path,
    options: &ValidateOptions,
    all: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mesh = io::import(dir)?;

    println!(
        "Loaded: {} vertices, {} edges, {} faces",
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_faces()
    );
    println!(
        "Tolerances: edge length {:e}, triangle area {:e}",
        options.edge_tolerance, options.area_tolerance
    );

    if all {
        let report = validate::report(&mesh, options);
        print!("{}", report);
        if let Some(first) = report.first() {
            return Err(first.clone().into());
        }
    } else {
        validate::validate_with(&mesh, options)?;
    }

    println!("Mesh is valid ({:.2?})", start.elapsed());
    Ok(())
}

fn cmd_info(dir: &Path, show_faces: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = io::import(dir)?;

    println!("Directory: {}", dir.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Edges: {}", mesh.num_edges());
    println!("Faces: {}", mesh.num_faces());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}) to ({:.3}, {:.3})",
            min.x, min.y, max.x, max.y
        );
    }

    print_face_statistics(&mesh);

    println!("\nVertex markers:");
    for (marker, ids) in mesh.vertex_markers().iter() {
        println!("  {}: {}", marker, join(ids));
    }

    println!("\nEdge markers:");
    for (marker, ids) in mesh.edge_markers().iter() {
        println!("  {}: {}", marker, join(ids));
    }

    if show_faces {
        println!("\nFaces:");
        for (i, face) in mesh.faces().iter().enumerate() {
            println!("  #{} (id {})", i, face.id);
            println!("    vertices: {}", join(&face.vertices));
            println!("    edges:    {}", join(&face.edges));
        }
    }

    Ok(())
}

fn print_face_statistics(mesh: &PolygonalMesh) {
    let triangles = mesh.faces().iter().filter(|f| f.is_triangle()).count();
    println!(
        "Face types: {} triangles, {} other polygons",
        triangles,
        mesh.num_faces() - triangles
    );

    let areas: Vec<f64> = mesh
        .faces()
        .iter()
        .filter_map(|f| mesh.polygon_area(f))
        .collect();
    if !areas.is_empty() {
        let total: f64 = areas.iter().sum();
        let min = areas.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = areas.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        println!("Total area: {:.6}", total);
        println!("Face area range: [{:.6}, {:.6}]", min, max);
    }

    let lengths: Vec<f64> = mesh
        .edges()
        .iter()
        .filter_map(|e| mesh.edge_length(e))
        .collect();
    if !lengths.is_empty() {
        let min = lengths.iter().cloned().fold(f64::INFINITY, f64::min);
        let avg = lengths.iter().sum::<f64>() / lengths.len() as f64;
        println!("Edge length: min={:.6}, avg={:.6}", min, avg);
    }
}

fn join<T: std::fmt::Display>(ids: &[T]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
