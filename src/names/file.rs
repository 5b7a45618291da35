use crate::error::{NamefixError, Result};
use crate::exec::{resolve_command, run_diff_quiet};
use crate::names::rewriter::LineRewriter;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How a rewritten candidate is compared with its original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparator {
	/// Shell out to `diff -q`, which reports differing files on stdout.
	Diff(PathBuf),

	/// Compare the bytes directly.
	InProcess,
}

impl Comparator {
	/// Use `diff` from PATH when there is one.
	pub fn detect() -> Self {
		match resolve_command("diff") {
			Some(path) => Comparator::Diff(path),
			None => {
				debug!("no diff on PATH, comparing files in process");
				Comparator::InProcess
			}
		}
	}

	/// Returns true when both files have the same content.
	pub fn identical(&self, original: &Path, candidate: &Path) -> Result<bool> {
		match self {
			Comparator::Diff(diff) => Ok(run_diff_quiet(diff, original, candidate)?.success()),
			Comparator::InProcess => {
				let left = std::fs::read(original).map_err(|source| NamefixError::SourceRead {
					path: original.to_path_buf(),
					source,
				})?;
				let right = std::fs::read(candidate).map_err(|source| NamefixError::SourceRead {
					path: candidate.to_path_buf(),
					source,
				})?;
				Ok(left == right)
			}
		}
	}
}

/// Result of rewriting one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
	/// Content differs; the candidate is kept for review.
	Changed { candidate: PathBuf },

	/// Content is identical; the candidate was removed.
	Unchanged,
}

/// `<path>.new`, appended to the full file name.
pub fn new_path_for(source: &Path) -> PathBuf {
	let mut name = OsString::from(source.as_os_str());
	name.push(".new");
	PathBuf::from(name)
}

/// Rewrite `source` into `<source>.new` and drop the candidate when nothing changed.
///
/// The original file is never modified.
pub fn rewrite_file(
	source: &Path,
	rewriter: &LineRewriter,
	comparator: &Comparator,
) -> Result<FileOutcome> {
	let content = std::fs::read_to_string(source).map_err(|err| NamefixError::SourceRead {
		path: source.to_path_buf(),
		source: err,
	})?;

	let candidate = new_path_for(source);
	let rewritten = rewriter.rewrite_text(&content);
	std::fs::write(&candidate, rewritten).map_err(|source| NamefixError::OutputWrite {
		path: candidate.clone(),
		source,
	})?;

	if comparator.identical(source, &candidate)? {
		std::fs::remove_file(&candidate).map_err(|source| NamefixError::RemoveFailed {
			path: candidate.clone(),
			source,
		})?;
		debug!(file = %source.display(), "unchanged");
		return Ok(FileOutcome::Unchanged);
	}

	info!(file = %candidate.display(), "wrote rewritten candidate");
	Ok(FileOutcome::Changed { candidate })
}
