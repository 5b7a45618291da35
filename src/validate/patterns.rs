use crate::error::{NamefixError, Result};
use regex::{Regex, RegexBuilder};

/// Lines a healthy dump of the TripT fixture must contain, in check order.
pub const EXPECTED_PATTERNS: [&str; 4] = [
	r"^ND::TND280Event.+event.00251",
	r"^  ND::TND280RawEvent.+rawevent.00251",
	r"^   ND::TMidasBank",
	r"^Total Events Read: 9$",
];

/// Outcome of searching the dump for one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCheck {
	pub pattern: &'static str,
	pub found: bool,
}

/// The expected patterns, compiled once in multiline mode.
#[derive(Debug)]
pub struct ExpectedPatterns {
	compiled: Vec<(&'static str, Regex)>,
}

impl ExpectedPatterns {
	pub fn compile() -> Result<Self> {
		let compiled = EXPECTED_PATTERNS
			.iter()
			.map(|&pattern| {
				RegexBuilder::new(pattern)
					.multi_line(true)
					.build()
					.map(|regex| (pattern, regex))
					.map_err(|source| NamefixError::InvalidRegex {
						pattern: pattern.to_string(),
						source,
					})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(ExpectedPatterns { compiled })
	}

	/// Search `dump` for every expected pattern.
	///
	/// All patterns are checked; a miss does not stop the later ones.
	pub fn check(&self, dump: &str) -> Vec<PatternCheck> {
		self.compiled
			.iter()
			.map(|(pattern, regex)| PatternCheck {
				pattern: *pattern,
				found: regex.is_match(dump),
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn check_patterns(dump: &str) -> Vec<PatternCheck> {
		ExpectedPatterns::compile().unwrap().check(dump)
	}

	const GOOD_DUMP: &str = "\
ND::TND280Event()::event.00251 Run: 251 Event: 1
  ND::TND280RawEvent()::rawevent.00251
   ND::TMidasBank()::TRIPT
Total Events Read: 9
";

	#[test]
	fn test_all_patterns_found() {
		let checks = check_patterns(GOOD_DUMP);
		assert_eq!(checks.len(), 4);
		assert!(checks.iter().all(|check| check.found));
	}

	#[test]
	fn test_missing_total_line() {
		let dump = GOOD_DUMP.replace("Total Events Read: 9", "Total Events Read: 8");
		let checks = check_patterns(&dump);

		let missing: Vec<_> = checks
			.iter()
			.filter(|check| !check.found)
			.map(|check| check.pattern)
			.collect();
		assert_eq!(missing, vec![r"^Total Events Read: 9$"]);
	}

	#[test]
	fn test_total_line_must_be_exact() {
		let dump = GOOD_DUMP.replace("Total Events Read: 9", "Total Events Read: 90");
		let checks = check_patterns(&dump);
		assert!(!checks[3].found);
	}

	#[test]
	fn test_indentation_matters() {
		let dump = GOOD_DUMP.replace("   ND::TMidasBank", "ND::TMidasBank");
		let checks = check_patterns(&dump);
		assert!(checks[0].found);
		assert!(!checks[2].found);
	}

	#[test]
	fn test_empty_dump_misses_everything() {
		let checks = check_patterns("");
		assert!(checks.iter().all(|check| !check.found));
	}

	#[test]
	fn test_compiled_patterns_are_reusable() {
		let patterns = ExpectedPatterns::compile().unwrap();
		assert!(patterns.check(GOOD_DUMP).iter().all(|check| check.found));
		assert!(patterns.check("").iter().all(|check| !check.found));
		assert!(patterns.check(GOOD_DUMP).iter().all(|check| check.found));
	}
}
