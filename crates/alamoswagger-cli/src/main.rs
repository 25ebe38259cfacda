//! alamoswagger CLI - Adds ResponseObjectSerializable conformance to
//! swagger-codegen Swift models
//!
//! ```text
//! alamoswagger <INPUT> <OUTPUT> [--force] [--config alamoswagger.toml]
//! ```
//!
//! Every regular file in `INPUT` is converted independently. A file that can't
//! be converted is logged and skipped; only bad arguments or configuration fail
//! the run.

use clap::Parser;
use std::path::PathBuf;

mod config;
mod convert;
mod discover;
mod logging;
mod validate;

#[derive(Parser)]
#[command(name = "alamoswagger")]
#[command(
    author,
    version,
    about = "Add ResponseObjectSerializable protocol conformance to swagger-codegen generated models",
    long_about = None
)]
struct Cli {
    /// The directory which contains the model code
    input: PathBuf,

    /// The directory to output the generated code (must be empty unless --force is given)
    output: PathBuf,

    /// Overwrite files in the output directory
    #[arg(short, long)]
    force: bool,

    /// Path to an alamoswagger.toml configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::Config::from_file(path)?,
        None => config::Config::default(),
    };
    config.validate()?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init_logging(log_level)?;

    validate::validate_paths(&cli.input, &cli.output, cli.force)?;

    convert::run(&cli.input, &cli.output, &config.generator_options())?;

    Ok(())
}
