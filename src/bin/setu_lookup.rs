//! Command-line lookup of points across two maps.
//!
//! Loads a map description document and transforms points between the
//! robot and reference frames. Validation messages are printed
//! verbatim; bad input or I/O exits with code 1, API misuse with
//! code 2.
//!
//! Usage:
//!   setu-lookup --map maps.yaml --to-ref 341,168
//!   setu-lookup --map maps.yaml --to-robot 433,189 --to-robot 55,20
//!   setu-lookup --map maps.yaml --info --overlay overlay.svg

use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use setu_map::viz::render_overlay;
use setu_map::{Fault, MapTransformer, Point2D};

/// Transform points between a robot map and a reference map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map description file (YAML)
    #[arg(short, long)]
    map: String,

    /// Robot-map point to transform into the reference frame
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    to_ref: Vec<Point2D>,

    /// Reference-map point to transform into the robot frame
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    to_robot: Vec<Point2D>,

    /// Print map names, sizes, triangle count and bounding box
    #[arg(long)]
    info: bool,

    /// Write an SVG overlay of both maps and the triangulation
    #[arg(long, value_name = "FILE")]
    overlay: Option<String>,
}

/// Everything that can go wrong in this binary. Transformer faults
/// keep their input/logic classification; file I/O counts as bad
/// input.
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Map(#[from] setu_map::Error),

    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteOverlay {
        path: String,
        source: std::io::Error,
    },
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Map(err) => match err.fault() {
                Fault::Input => ExitCode::from(1),
                Fault::Logic => ExitCode::from(2),
            },
            CliError::ReadInput { .. } | CliError::WriteOverlay { .. } => ExitCode::from(1),
        }
    }
}

fn parse_point(value: &str) -> Result<Point2D, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("bad X coordinate '{x}'"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("bad Y coordinate '{y}'"))?;
    Ok(Point2D::new(x, y))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            err.exit_code()
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let doc = std::fs::read_to_string(&args.map).map_err(|source| CliError::ReadInput {
        path: args.map.clone(),
        source,
    })?;
    let transformer = MapTransformer::from_yaml(&doc)?;

    if args.info {
        let bb = transformer.bounding_box()?;
        println!(
            "reference map: {} ({} x {})",
            transformer.ref_map_name()?,
            transformer.ref_map_size()?.x,
            transformer.ref_map_size()?.y,
        );
        println!(
            "robot map:     {} ({} x {})",
            transformer.robot_map_name()?,
            transformer.robot_map_size()?.x,
            transformer.robot_map_size()?.y,
        );
        println!(
            "{} correspondence points, {} triangles",
            transformer.ref_map_corr_points()?.len(),
            transformer.triangle_indices()?.len(),
        );
        println!(
            "bounding box: ({}, {}) - ({}, {})",
            bb.min.x, bb.min.y, bb.max.x, bb.max.y
        );
    }

    for &point in &args.to_ref {
        let out = transformer.to_ref(point)?;
        println!("to_ref({}, {}) = ({:.6}, {:.6})", point.x, point.y, out.x, out.y);
    }
    for &point in &args.to_robot {
        let out = transformer.to_robot(point)?;
        println!(
            "to_robot({}, {}) = ({:.6}, {:.6})",
            point.x, point.y, out.x, out.y
        );
    }

    if let Some(path) = &args.overlay {
        let document = render_overlay(&transformer)?;
        svg::save(path, &document).map_err(|source| CliError::WriteOverlay {
            path: path.clone(),
            source,
        })?;
        log::info!("overlay written to {path}");
    }

    Ok(())
}
