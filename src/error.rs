use std::path::PathBuf;

/// Library-level structured errors for namefix-tools.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The binaries wrap these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum NamefixError {
	#[error("Failed to read names file: {path}")]
	NamesRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read source file: {path}")]
	SourceRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write output file: {path}")]
	OutputWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to remove file: {path}")]
	RemoveFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid regex pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to read dump file: {path}")]
	DumpRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Command execution failed: {command}")]
	CommandFailed {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Command not found: {command}")]
	CommandNotFound { command: String },
}

/// Result type alias using NamefixError.
pub type Result<T> = std::result::Result<T, NamefixError>;
