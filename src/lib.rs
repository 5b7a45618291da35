//! Namefix tools - namespace rewriting and event dump validation.
//!
//! This library provides the core functionality behind two small binaries:
//! - `fix-namespace`: rewrites class names in source files from a names file
//! - `validate-dump`: runs an event dump executable on a fixture and checks
//!   the output for expected lines
//!
//! # Example
//!
//! ```no_run
//! use namefix_tools::names::{LineRewriter, SubstitutionTable};
//! use std::path::Path;
//!
//! let table = SubstitutionTable::load(Path::new("oaEvent.names")).unwrap();
//! let rewriter = LineRewriter::new(&table).unwrap();
//!
//! let line = rewriter.rewrite_line("TEvent* event = new TEvent();\n");
//! println!("{line}");
//! ```

pub mod error;
pub mod exec;
pub mod logging;
pub mod names;
pub mod validate;

pub use error::{NamefixError, Result};

use regex::Regex;

/// Compile a regex pattern string.
pub(crate) fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| NamefixError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}
