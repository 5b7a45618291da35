use crate::compile_regex;
use crate::error::Result;
use crate::names::table::{NamePair, SubstitutionTable};
use regex::Regex;

/// `THandle<` followed by greedy content and a leftover `*>`.
const THANDLE_POINTER_PATTERN: &str = r"(THandle<.*)\*>";

/// A compiled `old -> new` identifier substitution.
///
/// Both `old` and `new` are matched and both become `new`, so running the
/// substitution over already rewritten text changes nothing.
#[derive(Debug)]
pub struct NameSubstitution {
	/// The identifier being replaced.
	pub old: String,

	/// The replacement identifier.
	pub new: String,

	/// Literal `old|new` alternation used to find candidate positions.
	candidates: Regex,
}

impl NameSubstitution {
	/// Compile a substitution from a names file pair.
	pub fn new(pair: &NamePair) -> Result<Self> {
		let pattern = format!("{}|{}", regex::escape(&pair.old), regex::escape(&pair.new));
		let candidates = compile_regex(&pattern)?;

		Ok(NameSubstitution {
			old: pair.old.clone(),
			new: pair.new.clone(),
			candidates,
		})
	}

	/// Replace every free-standing `old` or `new` in `line` with `new`.
	///
	/// Boundary characters on either side are left in place, so two
	/// occurrences separated by a single character are both rewritten.
	pub fn apply(&self, line: &str) -> String {
		let mut out = String::with_capacity(line.len());
		let mut copied = 0;
		let mut search = 0;

		while search <= line.len() {
			let Some(found) = self.candidates.find_at(line, search) else {
				break;
			};
			let start = found.start();

			if let Some(len) = self.token_len_at(line, start) {
				out.push_str(&line[copied..start]);
				out.push_str(&self.new);
				copied = start + len;
				search = copied;
			} else {
				search = start + line[start..].chars().next().map_or(1, char::len_utf8);
			}
		}

		out.push_str(&line[copied..]);
		out
	}

	/// Length of the name that stands alone at `start`, trying `old` first.
	fn token_len_at(&self, line: &str, start: usize) -> Option<usize> {
		if !is_leading_boundary(line, start) {
			return None;
		}

		[self.old.as_str(), self.new.as_str()]
			.into_iter()
			.filter(|name| !name.is_empty() && line[start..].starts_with(*name))
			.map(str::len)
			.find(|len| is_trailing_boundary(line, start + len))
	}
}

/// `~` and `:` continue an identifier on the left: destructors and
/// qualified names are never touched.
fn is_leading_boundary(line: &str, start: usize) -> bool {
	line[..start]
		.chars()
		.next_back()
		.is_none_or(|c| !(c.is_ascii_alphanumeric() || matches!(c, '~' | ':' | '_')))
}

fn is_trailing_boundary(line: &str, end: usize) -> bool {
	line[end..]
		.chars()
		.next()
		.is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

/// Line filter applying a full substitution table plus the THandle fix-up.
#[derive(Debug)]
pub struct LineRewriter {
	substitutions: Vec<NameSubstitution>,
	thandle: Regex,
}

impl LineRewriter {
	/// Compile every pair in the table, keeping table order.
	pub fn new(table: &SubstitutionTable) -> Result<Self> {
		let substitutions = table
			.pairs
			.iter()
			.map(NameSubstitution::new)
			.collect::<Result<Vec<_>>>()?;

		Ok(LineRewriter {
			substitutions,
			thandle: compile_regex(THANDLE_POINTER_PATTERN)?,
		})
	}

	/// Rewrite one line, including its line terminator if present.
	///
	/// Preprocessor lines (first character `#`) come back unchanged.
	pub fn rewrite_line(&self, line: &str) -> String {
		if line.starts_with('#') {
			return line.to_string();
		}

		let substituted = self
			.substitutions
			.iter()
			.fold(line.to_string(), |text, sub| sub.apply(&text));

		self.fix_thandle(&substituted)
	}

	/// Rewrite a whole file's content line by line, preserving terminators.
	pub fn rewrite_text(&self, content: &str) -> String {
		content
			.split_inclusive('\n')
			.map(|line| self.rewrite_line(line))
			.collect()
	}

	/// Drop the `*` from a `THandle<...*>` left over from pointer wrappers.
	///
	/// The inner match is greedy, so only the last `*>` after the first
	/// `THandle<` on the line is repaired.
	pub fn fix_thandle(&self, line: &str) -> String {
		self.thandle.replace_all(line, "${1}>").into_owned()
	}
}
