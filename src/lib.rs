//! Labelgen: typed constants from image annotations.
//!
//! Labelgen parses the JSON annotation files a labeling tool produces for
//! hand-annotated reference images (UI mockups, floor plans) and renders the
//! shapes as a Python module of typed constants, so coordinates are baked
//! into the codebase instead of re-parsed at runtime.
//!
//! # Modules
//!
//! - [`labels`]: collection of annotation files into a deduplicated,
//!   insertion-ordered shape set, plus typed accessors
//! - [`codegen`]: rendering a collected set into one of four Python dialects
//! - [`error`]: error types for labelgen operations

pub mod codegen;
pub mod error;
pub mod labels;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use codegen::{CollisionPolicy, Dialect, GenerateOptions};
use labels::{DimensionFilter, ShapeKind};

pub use error::LabelgenError;

/// The labelgen CLI application.
#[derive(Parser)]
#[command(name = "labelgen")]
#[command(version, author, about)]
struct Cli {
    /// Directory containing the labeling tool's JSON annotation files.
    labels_dir: PathBuf,

    /// Path of the generated Python module.
    #[arg(short = 'o', long = "output", default_value = "labels.py")]
    output: PathBuf,

    /// Output dialect.
    #[arg(long, value_enum, default_value_t = ModeArg::Full)]
    mode: ModeArg,

    /// Shorthand for `--mode minimal`.
    #[arg(long)]
    minimal: bool,

    /// Only collect files declaring exactly this image width.
    #[arg(long)]
    width: Option<u32>,

    /// Only collect files declaring exactly this image height.
    #[arg(long)]
    height: Option<u32>,

    /// How equal labels of different shape kinds share variable names.
    #[arg(long, value_enum, default_value_t = CollisionArg::LabelText)]
    collisions: CollisionArg,

    /// Render polygons even in dialects that reject them by default.
    #[arg(long)]
    include_polygons: bool,
}

/// CLI spelling of [`Dialect`], decoupled from the core enum.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Full,
    Minimal,
    TypedMap,
    TypedMapWithSource,
}

impl From<ModeArg> for Dialect {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Full => Dialect::Full,
            ModeArg::Minimal => Dialect::Minimal,
            ModeArg::TypedMap => Dialect::TypedMap,
            ModeArg::TypedMapWithSource => Dialect::TypedMapWithSource,
        }
    }
}

/// CLI spelling of [`CollisionPolicy`].
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CollisionArg {
    LabelText,
    KindAndLabel,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::LabelText => CollisionPolicy::LabelText,
            CollisionArg::KindAndLabel => CollisionPolicy::KindAndLabel,
        }
    }
}

/// Run the labelgen CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`. The
/// core stays file-agnostic: collection reads the input directory, and the
/// single output write happens here.
pub fn run() -> Result<(), LabelgenError> {
    let cli = Cli::parse();

    let filter = DimensionFilter {
        width: cli.width,
        height: cli.height,
    };
    let set = labels::collect(&cli.labels_dir, &filter)?;

    let dialect = if cli.minimal {
        Dialect::Minimal
    } else {
        cli.mode.into()
    };
    let mut options =
        GenerateOptions::new(dialect).with_collision_policy(cli.collisions.into());
    if cli.include_polygons {
        options = options.with_supported_kinds(vec![
            ShapeKind::Rectangle,
            ShapeKind::Point,
            ShapeKind::Line,
            ShapeKind::Polygon,
        ]);
    }

    let rendered = codegen::generate(&set, &cli.labels_dir, &options)?;
    fs::write(&cli.output, rendered)?;

    println!(
        "Generated {} label(s) into {}",
        set.len(),
        cli.output.display()
    );
    Ok(())
}
