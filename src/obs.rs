//! Optional observability helpers for generator operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `docgen.op` with the `op` (operation) and
//!   `stage` (call site) fields.
//! - Enable `metrics` to increment the `docgen_op_total` counter for every attempt/success/failure,
//!   labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Generator operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
	/// Document rendering.
	Render,
	/// Share token encoding.
	Encode,
	/// Share token decoding.
	Decode,
	/// Version tag fetch for share links.
	VersionFetch,
}
impl OpKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpKind::Render => "render",
			OpKind::Encode => "encode",
			OpKind::Decode => "decode",
			OpKind::VersionFetch => "version_fetch",
		}
	}
}
impl Display for OpKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to a generator operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure surfaced to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
