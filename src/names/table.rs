use crate::error::{NamefixError, Result};
use std::path::Path;
use tracing::debug;

/// Names file used when `--names` is not given.
pub const DEFAULT_NAMES_FILE: &str = "oaEvent.names";

/// One `old new` line from a names file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
	/// The identifier being replaced.
	pub old: String,

	/// The identifier it becomes.
	pub new: String,
}

/// Ordered list of name substitutions.
///
/// Order matters: each line is run through every pair in turn, so a later
/// pair sees the text produced by the earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
	pub pairs: Vec<NamePair>,
}

impl SubstitutionTable {
	/// Load a names file from disk.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| NamefixError::NamesRead {
			path: path.to_path_buf(),
			source,
		})?;

		Ok(Self::parse_str(&content))
	}

	/// Parse names file content.
	///
	/// Lines starting with `#` are comments. Any other line must split into
	/// exactly two whitespace separated tokens or it is skipped.
	pub fn parse_str(content: &str) -> Self {
		let mut pairs = Vec::new();

		for (number, line) in content.lines().enumerate() {
			if line.starts_with('#') {
				continue;
			}

			let tokens: Vec<&str> = line.split_whitespace().collect();
			match tokens.as_slice() {
				[old, new] => pairs.push(NamePair {
					old: (*old).to_string(),
					new: (*new).to_string(),
				}),
				[] => {}
				_ => debug!(
					line = number + 1,
					tokens = tokens.len(),
					"skipping names line without exactly two tokens"
				),
			}
		}

		SubstitutionTable { pairs }
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}
