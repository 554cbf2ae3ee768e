//! CLI argument parsing for poster-gen.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `commands` module.

use crate::request::Scenario;
use clap::Parser;
use std::path::PathBuf;

/// Generate marketing posters from a few answers using an image model.
///
/// Scenarios:
/// - course: two 9:16 panels stacked into one long poster
/// - event: a single poster in one of three visual styles
/// - product: a single poster, optionally guided by a screenshot
#[derive(Parser, Debug)]
#[command(name = "poster-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Poster scenario to generate.
    #[arg(short = 's', long = "scene", value_enum)]
    pub scene: Scenario,

    /// Write output files into this directory instead of ~/Posters/<scene>/<title>.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<String>,

    /// API key for the image model.
    #[arg(long = "api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Read the poster fields from a JSON file instead of asking.
    ///
    /// Skips the confirmation prompt.
    #[arg(short = 'i', long = "info", value_name = "FILE")]
    pub info: Option<PathBuf>,

    /// Image model identifier.
    #[arg(long = "model", value_name = "NAME")]
    pub model: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
