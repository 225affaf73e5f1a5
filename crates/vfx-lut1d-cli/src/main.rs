//! lut1d - build, inspect and validate 1D LUT transforms

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vfx_lut1d::{BitDepth, HueAdjust, Interpolation, TransformDirection};

mod commands;

#[derive(Parser)]
#[command(name = "lut1d")]
#[command(author, version, about = "Build and validate 1D LUT transforms")]
#[command(long_about = "
Builds an in-memory 1D LUT transform from command-line options and prints
its descriptor or validation result.

Examples:
  lut1d describe --length 3 --direction inverse --set 1=0.51,0.52,0.53
  lut1d describe --half-identity --bit-depth 16f
  lut1d validate --length 1024 --half-domain
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the transform descriptor
    #[command(visible_alias = "d")]
    Describe(DescribeArgs),

    /// Validate the transform
    #[command(visible_alias = "v")]
    Validate(TableArgs),
}

#[derive(Args)]
struct DescribeArgs {
    #[command(flatten)]
    table: TableArgs,

    /// Also validate before printing
    #[arg(long)]
    check: bool,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Number of entries (identity ramp)
    #[arg(short, long, default_value = "2")]
    length: usize,

    /// Index the table by half-float bit patterns
    #[arg(long)]
    half_domain: bool,

    /// Fill with the 65536-entry half-domain identity (overrides --length)
    #[arg(long)]
    half_identity: bool,

    /// Outputs are raw half-float bit patterns
    #[arg(long)]
    raw_halfs: bool,

    /// Direction: forward, inverse
    #[arg(short, long, default_value = "forward")]
    direction: TransformDirection,

    /// Flip the direction given by --direction
    #[arg(long)]
    invert: bool,

    /// Hue adjustment: none, dw3, wypn
    #[arg(long, default_value = "none")]
    hue: HueAdjust,

    #[arg(short, long, default_value = "unknown", help = bit_depth_help())]
    bit_depth: BitDepth,

    /// Interpolation: nearest, linear, best, default, ...
    #[arg(short, long, default_value = "default")]
    interpolation: Interpolation,

    /// Overwrite an entry, INDEX=R,G,B (repeatable)
    #[arg(short, long = "set", value_name = "INDEX=R,G,B")]
    set: Vec<String>,
}

fn bit_depth_help() -> String {
    let tags: Vec<&str> = BitDepth::ALL.iter().map(|d| d.as_str()).collect();
    format!("File output bit depth: {}", tags.join(", "))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Describe(args) => commands::describe::run(args),
        Commands::Validate(args) => commands::validate::run(args),
    }
}
