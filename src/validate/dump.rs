use crate::compile_regex;
use crate::error::{NamefixError, Result};
use crate::exec::capture_stdout;
use crate::validate::config::ValidatorConfig;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

/// Object address annotation such as `(0x7f3a2c10)::`.
const ADDRESS_PATTERN: &str = r"\(0x[0-9a-f]*\)::";

/// Runs the dump program and masks the object addresses in its output.
#[derive(Debug)]
pub struct DumpCapture {
	address: Regex,
}

impl DumpCapture {
	pub fn new() -> Result<Self> {
		Ok(DumpCapture {
			address: compile_regex(ADDRESS_PATTERN)?,
		})
	}

	/// Replace the first address annotation on each line with `()::`.
	///
	/// Addresses differ from run to run; masking them keeps the dump stable
	/// enough to match against.
	pub fn mask_addresses(&self, text: &str) -> String {
		text.split_inclusive('\n')
			.map(|line| self.address.replace(line, "()::"))
			.collect()
	}

	/// Run the dump executable and return the masked text it produced.
	///
	/// The masked text is written to `dump_text` and read back from there.
	/// A dump program that cannot be started or exits non-zero is only
	/// logged; the resulting dump is simply short of the expected lines.
	pub fn capture(&self, config: &ValidatorConfig) -> Result<String> {
		remove_stale(&config.root_output)?;

		let args = config.dump_args();
		let stdout = match capture_stdout(&config.dump_executable, &args) {
			Ok(output) => {
				if !output.status.success() {
					warn!(
						program = %config.dump_executable.display(),
						status = %output.status,
						"dump executable exited unsuccessfully"
					);
				}
				String::from_utf8_lossy(&output.stdout).into_owned()
			}
			Err(err) => {
				warn!(error = %err, "dump executable could not be run");
				String::new()
			}
		};

		let masked = self.mask_addresses(&stdout);
		std::fs::write(&config.dump_text, masked).map_err(|source| NamefixError::OutputWrite {
			path: config.dump_text.clone(),
			source,
		})?;

		std::fs::read_to_string(&config.dump_text).map_err(|source| NamefixError::DumpRead {
			path: config.dump_text.clone(),
			source,
		})
	}
}

/// Remove the output left behind by a previous run.
fn remove_stale(path: &Path) -> Result<()> {
	if path.exists() {
		debug!(file = %path.display(), "removing stale output");
		std::fs::remove_file(path).map_err(|source| NamefixError::RemoveFailed {
			path: path.to_path_buf(),
			source,
		})?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::path::PathBuf;

	fn masker() -> DumpCapture {
		DumpCapture::new().unwrap()
	}

	#[test]
	fn test_mask_addresses() {
		let text = "ND::TND280Event(0x55d1c8a0)::event.00251\nplain line\n";
		assert_eq!(
			masker().mask_addresses(text),
			"ND::TND280Event()::event.00251\nplain line\n"
		);
	}

	#[test]
	fn test_mask_only_first_address_per_line() {
		let text = "A(0xdead)::B(0xbeef)::C\n(0x1)::\n";
		assert_eq!(masker().mask_addresses(text), "A()::B(0xbeef)::C\n()::\n");
	}

	#[test]
	fn test_mask_ignores_uppercase_hex() {
		let text = "A(0xDEAD)::B";
		assert_eq!(masker().mask_addresses(text), text);
	}

	#[cfg(unix)]
	#[test]
	fn test_capture_dump_with_missing_executable() {
		let temp_dir = tempfile::tempdir().unwrap();
		let config = ValidatorConfig {
			input: temp_dir.path().join("fixture.mid.gz"),
			root_output: temp_dir.path().join("out.root"),
			dump_text: temp_dir.path().join("out.dump"),
			dump_executable: PathBuf::from("/nonexistent/dump-event.exe"),
		};
		fs::write(&config.root_output, "stale").unwrap();

		let dump = masker().capture(&config).unwrap();

		assert_eq!(dump, "");
		assert!(!config.root_output.exists());
		assert!(config.dump_text.exists());
	}

	#[cfg(unix)]
	#[test]
	fn test_capture_dump_masks_and_stores_output() {
		let temp_dir = tempfile::tempdir().unwrap();
		let config = ValidatorConfig {
			input: temp_dir.path().join("fixture.mid.gz"),
			root_output: temp_dir.path().join("out.root"),
			dump_text: temp_dir.path().join("out.dump"),
			dump_executable: PathBuf::from("/bin/echo"),
		};

		let dump = masker().capture(&config).unwrap();

		// echo repeats the arguments it was given.
		assert!(dump.starts_with("-a -m "));
		assert!(dump.contains(" -o "));
		assert_eq!(fs::read_to_string(&config.dump_text).unwrap(), dump);
	}
}
