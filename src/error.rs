//! Crate-level error types shared across the model, renderer, and share codec.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Configuration record failed a presence or shape constraint.
	#[error(transparent)]
	Config(#[from] crate::config::ConfigError),
	/// Share token could not be decoded back into a record.
	#[error(transparent)]
	Share(#[from] crate::share::ShareError),
	/// Version tag could not be fetched for share-link construction.
	#[cfg(feature = "reqwest")]
	#[error(transparent)]
	Version(#[from] crate::share::VersionError),
}
