use crate::utils::parser::{self, Triple};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "MolPack Developers",
    version,
    about = "MolPack CLI - Computes how far a rigid molecule must be translated along an axis before its copy stops overlapping it.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for the contact scan.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the displacement that clears a molecule from its own copy along an axis.
    Displace(DisplaceArgs),
    /// Convert a structure between SDF and XYZ, optionally rotating it first.
    Convert(ConvertArgs),
}

/// Arguments for the `displace` subcommand.
#[derive(Args, Debug)]
pub struct DisplaceArgs {
    // --- Core Arguments ---
    /// Path to the input structure file (SDF, or XYZ by extension).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the molecule and its translated copy to this file (XYZ, or SDF by extension).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Geometry Overrides ---
    /// Rotation in degrees about X, Y and Z, applied as Rz·Ry·Rx before the scan.
    #[arg(
        long,
        value_name = "X,Y,Z",
        value_parser = parser::parse_triple,
        allow_hyphen_values = true
    )]
    pub rotate: Option<Triple>,

    /// Displacement axis. Need not be unit length.
    #[arg(
        long,
        value_name = "X,Y,Z",
        value_parser = parser::parse_triple,
        allow_hyphen_values = true
    )]
    pub direction: Option<Triple>,

    /// Radius table file (TOML, or CSV by extension) replacing the built-in radii.
    #[arg(short = 'r', long, value_name = "PATH")]
    pub radii: Option<PathBuf>,

    // --- Output Options ---
    /// Write only the translated copy instead of the pair.
    #[arg(long, requires = "output")]
    pub copy_only: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S radii.table.Cl=1.75
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input structure file (SDF, or XYZ by extension).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output structure file (XYZ, or SDF by extension).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Rotation in degrees about X, Y and Z, applied as Rz·Ry·Rx.
    #[arg(
        long,
        value_name = "X,Y,Z",
        value_parser = parser::parse_triple,
        allow_hyphen_values = true
    )]
    pub rotate: Option<Triple>,
}
