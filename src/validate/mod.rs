//! Event dump validation.
//!
//! This module handles:
//! - Locating the fixture and output files
//! - Running the dump executable and masking object addresses
//! - Checking the captured dump for the expected lines

pub mod config;
pub mod dump;
pub mod patterns;

pub use config::{ValidatorConfig, load_config, parse_config_str};
pub use dump::DumpCapture;
pub use patterns::{EXPECTED_PATTERNS, ExpectedPatterns, PatternCheck};

use crate::error::Result;

/// Printed when the fixture is not available.
pub const MISSING_INPUT: &str = "MISSING INPUT";

/// Printed as the last line of a failing report.
pub const FAIL_MARKER: &str = "FAIL";

/// Result of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
	/// The fixture is absent; nothing was run.
	MissingInput,

	/// The dump was captured and checked.
	Checked {
		dump: String,
		checks: Vec<PatternCheck>,
	},
}

impl Validation {
	/// True unless an expected pattern was missing.
	///
	/// A missing fixture counts as a pass.
	pub fn passed(&self) -> bool {
		match self {
			Validation::MissingInput => true,
			Validation::Checked { checks, .. } => checks.iter().all(|check| check.found),
		}
	}

	/// Text printed to stdout for this run. Empty for a clean pass.
	pub fn report(&self) -> String {
		let (dump, checks) = match self {
			Validation::MissingInput => return format!("{MISSING_INPUT}\n"),
			Validation::Checked { dump, checks } => (dump, checks),
		};

		let mut out = String::new();
		for check in checks.iter().filter(|check| !check.found) {
			out.push_str(&format!("Pattern not found:  {}\n", check.pattern));
		}

		if !self.passed() {
			let dump = dump.strip_suffix('\n').unwrap_or(dump);
			out.push_str(&format!("{dump}\n\n{FAIL_MARKER}\n"));
		}

		out
	}
}

/// Dump capture and pattern checks, with their regexes compiled once.
#[derive(Debug)]
pub struct Validator {
	capture: DumpCapture,
	patterns: ExpectedPatterns,
}

impl Validator {
	pub fn new() -> Result<Self> {
		Ok(Validator {
			capture: DumpCapture::new()?,
			patterns: ExpectedPatterns::compile()?,
		})
	}

	/// Run the dump against the fixture and check it.
	pub fn run(&self, config: &ValidatorConfig) -> Result<Validation> {
		if !config.input.exists() {
			return Ok(Validation::MissingInput);
		}

		let dump = self.capture.capture(config)?;
		let checks = self.patterns.check(&dump);

		Ok(Validation::Checked { dump, checks })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	const GOOD_DUMP: &str = "\
ND::TND280Event()::event.00251 Run: 251 Event: 1
  ND::TND280RawEvent()::rawevent.00251
   ND::TMidasBank()::TRIPT
Total Events Read: 9
";

	fn checked(dump: &str) -> Validation {
		Validation::Checked {
			dump: dump.to_string(),
			checks: ExpectedPatterns::compile().unwrap().check(dump),
		}
	}

	#[test]
	fn test_missing_input_report() {
		assert!(Validation::MissingInput.passed());
		assert_eq!(Validation::MissingInput.report(), "MISSING INPUT\n");
	}

	#[test]
	fn test_passing_report_is_empty() {
		let validation = checked(GOOD_DUMP);
		assert!(validation.passed());
		assert_eq!(validation.report(), "");
	}

	#[test]
	fn test_failing_report_lists_patterns_and_dump() {
		let dump = GOOD_DUMP.replace("Total Events Read: 9\n", "");
		let validation = checked(&dump);
		assert!(!validation.passed());

		let expected = format!(
			"Pattern not found:  ^Total Events Read: 9$\n{}\n\nFAIL\n",
			dump.trim_end_matches('\n')
		);
		assert_eq!(validation.report(), expected);
	}

	#[test]
	fn test_validator_without_fixture() {
		let temp_dir = tempfile::tempdir().unwrap();
		let config = ValidatorConfig {
			input: temp_dir.path().join("absent.mid.gz"),
			root_output: temp_dir.path().join("out.root"),
			dump_text: temp_dir.path().join("out.dump"),
			dump_executable: PathBuf::from("/nonexistent/dump-event.exe"),
		};

		let validator = Validator::new().unwrap();
		assert_eq!(validator.run(&config).unwrap(), Validation::MissingInput);
		assert!(!config.dump_text.exists());
	}

	#[test]
	fn test_validator_reused_across_runs() {
		let temp_dir = tempfile::tempdir().unwrap();
		let config = ValidatorConfig {
			input: temp_dir.path().join("fixture.mid.gz"),
			root_output: temp_dir.path().join("out.root"),
			dump_text: temp_dir.path().join("out.dump"),
			dump_executable: PathBuf::from("/nonexistent/dump-event.exe"),
		};
		std::fs::write(&config.input, "fixture").unwrap();

		let validator = Validator::new().unwrap();
		let first = validator.run(&config).unwrap();
		let second = validator.run(&config).unwrap();

		assert!(!first.passed());
		assert_eq!(first, second);
		assert!(second.report().ends_with("\n\nFAIL\n"));
	}
}
