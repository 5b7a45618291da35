use anyhow::{Context, Result};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use namefix_tools::logging;
use namefix_tools::names::{
	Comparator, DEFAULT_NAMES_FILE, LineRewriter, SubstitutionTable, rewrite_file,
};

#[derive(Parser)]
#[command(name = "fix-namespace")]
#[command(
	author,
	version,
	about = "Rewrite class names in source files using a list of name substitutions",
	override_usage = "fix-namespace [OPTIONS] <FILES>..."
)]
struct Cli {
	/// Set the list of namespace substitutions
	#[arg(
		long,
		value_name = "PATH",
		default_value = DEFAULT_NAMES_FILE,
		value_parser = OsStringValueParser::new().map(PathBuf::from)
	)]
	names: PathBuf,

	/// Source files to rewrite; each result is written to <FILE>.new
	#[arg(value_name = "FILES")]
	files: Vec<PathBuf>,
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

	if cli.names.as_os_str().len() < 2 {
		return usage_error("Must provide file with list of name substitutions");
	}

	if cli.files.is_empty() {
		return usage_error("Must provide list of file names");
	}

	let table = SubstitutionTable::load(&cli.names).context("Failed to load names file")?;
	tracing::debug!(pairs = table.len(), names = %cli.names.display(), "loaded substitutions");

	let rewriter = LineRewriter::new(&table).context("Failed to compile substitutions")?;
	let comparator = Comparator::detect();

	for source in &cli.files {
		rewrite_file(source, &rewriter, &comparator)
			.with_context(|| format!("Failed to rewrite {}", source.display()))?;
	}

	Ok(ExitCode::SUCCESS)
}

fn usage_error(message: &str) -> Result<ExitCode> {
	Cli::command()
		.print_help()
		.context("Failed to print usage")?;
	println!("{message}");
	Ok(ExitCode::FAILURE)
}
