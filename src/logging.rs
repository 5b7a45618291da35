//! Tracing setup shared by both binaries.
//!
//! Log output goes to stderr so that stdout stays reserved for the
//! tools' own reports (`diff` notes, `MISSING INPUT`, `FAIL`).

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact()
		.try_init();
}
