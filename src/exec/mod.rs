//! Subprocess helpers.
//!
//! This module handles:
//! - Locating executables on PATH
//! - Running `diff -q` with inherited stdio
//! - Running a command and capturing its stdout

use crate::error::{NamefixError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output, Stdio};

/// Map a spawn error to a structured error.
fn spawn_error(program: &Path, source: std::io::Error) -> NamefixError {
	if source.kind() == std::io::ErrorKind::NotFound {
		NamefixError::CommandNotFound {
			command: program.to_string_lossy().to_string(),
		}
	} else {
		NamefixError::CommandFailed {
			command: program.to_string_lossy().to_string(),
			source,
		}
	}
}

/// Run `diff -q <original> <candidate>`.
///
/// Stdout and stderr are inherited, so `diff` prints its own
/// "Files ... differ" note. Exit status 0 means the files are identical.
pub fn run_diff_quiet(diff: &Path, original: &Path, candidate: &Path) -> Result<ExitStatus> {
	Command::new(diff)
		.arg("-q")
		.arg(original)
		.arg(candidate)
		.stdin(Stdio::null())
		.stdout(Stdio::inherit())
		.stderr(Stdio::inherit())
		.status()
		.map_err(|source| spawn_error(diff, source))
}

/// Run a command and capture its stdout; stderr goes to the terminal.
pub fn capture_stdout(program: &Path, args: &[String]) -> Result<Output> {
	Command::new(program)
		.args(args)
		.stdin(Stdio::null())
		.stdout(Stdio::piped())
		.stderr(Stdio::inherit())
		.output()
		.map_err(|source| spawn_error(program, source))
}

/// Resolve a command name to its full path.
///
/// A command containing a path separator is checked as given.
/// Otherwise, searches PATH for the command.
pub fn resolve_command(command: &str) -> Option<PathBuf> {
	let path = Path::new(command);

	if path.components().count() > 1 || path.is_absolute() {
		if path.exists() {
			return Some(path.to_path_buf());
		} else {
			return None;
		}
	}

	if let Some(path_var) = std::env::var_os("PATH") {
		for dir in std::env::split_paths(&path_var) {
			let full_path = dir.join(command);
			if full_path.is_file() {
				return Some(full_path);
			}
		}
	}

	None
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_command_absolute_path() {
		#[cfg(unix)]
		{
			let result = resolve_command("/bin/sh");
			assert_eq!(result, Some(PathBuf::from("/bin/sh")));
		}
	}

	#[test]
	fn test_resolve_command_not_found() {
		assert!(resolve_command("/nonexistent/path/to/binary").is_none());
		assert!(resolve_command("no-such-command-namefix-12345").is_none());
	}

	#[test]
	fn test_resolve_command_from_path() {
		#[cfg(unix)]
		{
			assert!(resolve_command("sh").is_some());
		}
	}

	#[cfg(unix)]
	#[test]
	fn test_capture_stdout() {
		let output = capture_stdout(
			Path::new("/bin/sh"),
			&["-c".to_string(), "echo captured".to_string()],
		)
		.unwrap();
		assert!(output.status.success());
		assert_eq!(String::from_utf8_lossy(&output.stdout), "captured\n");
	}

	#[test]
	fn test_capture_stdout_missing_program() {
		let result = capture_stdout(Path::new("/nonexistent/dump-event.exe"), &[]);
		match result.unwrap_err() {
			NamefixError::CommandNotFound { command } => {
				assert_eq!(command, "/nonexistent/dump-event.exe");
			}
			other => panic!("Expected CommandNotFound error, got {other:?}"),
		}
	}
}
