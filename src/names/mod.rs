//! Class name rewriting for source trees.
//!
//! This module handles:
//! - Names file parsing into an ordered substitution table
//! - Boundary-aware identifier substitution and the `THandle<...*>` fix-up
//! - Writing `.new` candidates and discarding the ones that match the original

pub mod file;
pub mod rewriter;
pub mod table;

pub use file::{Comparator, FileOutcome, new_path_for, rewrite_file};
pub use rewriter::{LineRewriter, NameSubstitution};
pub use table::{DEFAULT_NAMES_FILE, NamePair, SubstitutionTable};
