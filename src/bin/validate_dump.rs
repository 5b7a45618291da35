use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use namefix_tools::logging;
use namefix_tools::validate::{Validator, ValidatorConfig, load_config};

#[derive(Parser)]
#[command(name = "validate-dump")]
#[command(
	author,
	version,
	about = "Check the event dump of the TripT fixture for the expected lines"
)]
struct Cli {
	/// TOML file overriding the fixture, output and executable paths
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Exit with status 1 when an expected line is missing
	#[arg(long)]
	strict: bool,
}

fn main() -> ExitCode {
	logging::init();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let config = match cli.config {
		Some(ref path) => load_config(path).context("Failed to load validator configuration")?,
		None => ValidatorConfig::default(),
	};

	let validator = Validator::new().context("Failed to compile expected patterns")?;
	let validation = validator
		.run(&config)
		.context("Failed to validate event dump")?;
	print!("{}", validation.report());

	// Without --strict a failed check is reported on stdout only.
	if cli.strict && !validation.passed() {
		return Ok(ExitCode::FAILURE);
	}

	Ok(ExitCode::SUCCESS)
}
