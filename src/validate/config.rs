use crate::error::{NamefixError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Fixture the dump executable reads.
pub const DEFAULT_INPUT: &str = "tript-banks-080801.mid.gz";

/// ROOT-style output the dump executable writes.
pub const DEFAULT_ROOT_OUTPUT: &str = "200TripTRawEvent.root";

/// Masked text dump kept for inspection.
pub const DEFAULT_DUMP_TEXT: &str = "200TripTRawEvent.dump";

/// Executable producing the event dump.
pub const DEFAULT_DUMP_EXECUTABLE: &str = "dump-event.exe";

/// File locations used by one validation run.
///
/// Every key is optional in a config file; missing keys keep the defaults.
/// The expected patterns are not part of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ValidatorConfig {
	/// Fixture passed with `-m`.
	pub input: PathBuf,

	/// Output passed with `-o`; removed before each run.
	pub root_output: PathBuf,

	/// Where the masked dump text is written.
	pub dump_text: PathBuf,

	/// Dump program, looked up on PATH when it has no directory part.
	pub dump_executable: PathBuf,
}

impl Default for ValidatorConfig {
	fn default() -> Self {
		ValidatorConfig {
			input: PathBuf::from(DEFAULT_INPUT),
			root_output: PathBuf::from(DEFAULT_ROOT_OUTPUT),
			dump_text: PathBuf::from(DEFAULT_DUMP_TEXT),
			dump_executable: PathBuf::from(DEFAULT_DUMP_EXECUTABLE),
		}
	}
}

impl ValidatorConfig {
	/// Arguments handed to the dump executable.
	pub fn dump_args(&self) -> Vec<String> {
		vec![
			"-a".to_string(),
			"-m".to_string(),
			self.input.to_string_lossy().to_string(),
			"-o".to_string(),
			self.root_output.to_string_lossy().to_string(),
		]
	}
}

/// Parse a validator config file from the given path.
pub fn load_config(path: &Path) -> Result<ValidatorConfig> {
	let content = std::fs::read_to_string(path).map_err(|source| NamefixError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a validator config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<ValidatorConfig> {
	toml::from_str(content).map_err(|source| NamefixError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})
}
