//! CLI argument definitions for the NPF calculator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "npf",
    version,
    about = "NPF rule calculator - longest exposure before stars trail",
    long_about = "Compute the NPF rule exposure limit for astrophotography.\n\n\
                  Edit sensor size, image width, focal length, f-number and trail\n\
                  tolerance interactively, or compute a single result from flags.\n\n\
                  Every configuration change is logged at info level; pass -v to see it."
)]
pub struct Cli {
    /// Defaults to an interactive session.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Edit the form interactively, re-rendering after every change.
    Session,

    /// Compute the exposure limit for one configuration.
    Compute(ComputeArgs),

    /// List the sensor size and trail type choices.
    Options,
}

/// Raw field values, applied in form order on top of the defaults.
///
/// Values are passed to the calculator as typed: text that is not a number
/// yields `NaN`, and unknown choices are kept as-is.
#[derive(Parser)]
pub struct ComputeArgs {
    /// Sensor size (full, apsc-c, apsc-x, mft).
    #[arg(long = "sensor-size", value_name = "SIZE", allow_hyphen_values = true)]
    pub sensor_size: Option<String>,

    /// Image width in pixels.
    #[arg(long = "pixel-width", value_name = "PX", allow_hyphen_values = true)]
    pub pixel_width: Option<String>,

    /// Actual focal length in millimetres.
    #[arg(long = "focal-length", value_name = "MM", allow_hyphen_values = true)]
    pub focal_length: Option<String>,

    /// Aperture f-number.
    #[arg(long = "f-number", value_name = "N", allow_hyphen_values = true)]
    pub f_number: Option<String>,

    /// Trail tolerance (pin-point, slight, visible).
    #[arg(long = "trail-type", value_name = "TRAIL", allow_hyphen_values = true)]
    pub trail_type: Option<String>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
