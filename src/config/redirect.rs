// self
use crate::_prelude::*;

/// Errors emitted when validating redirect URI entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum RedirectUriError {
	/// Redirect URI paths cannot be empty.
	#[error("Redirect URI path cannot be empty.")]
	EmptyPath,
}

/// Matching mode the identity provider applies to a redirect URI.
///
/// Wire representation matches the original form values (`Strict`/`Regex`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirectUriKind {
	#[default]
	/// Exact-match comparison.
	Strict,
	/// Regular-expression comparison.
	Regex,
}
impl RedirectUriKind {
	/// Returns a stable label matching the wire representation.
	pub const fn as_str(self) -> &'static str {
		match self {
			RedirectUriKind::Strict => "Strict",
			RedirectUriKind::Regex => "Regex",
		}
	}
}
impl Display for RedirectUriKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One redirect URI entry: a matching mode plus the path appended to the FQDN.
///
/// Entries are semantically ordered; callers and the share codec must preserve
/// their sequence exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedirectUri {
	/// Matching mode.
	#[serde(rename = "type")]
	pub kind: RedirectUriKind,
	/// Path component, e.g. `/oauth/callback`.
	pub path: String,
}
impl RedirectUri {
	/// Creates a validated redirect URI entry.
	pub fn new(kind: RedirectUriKind, path: impl Into<String>) -> Result<Self, RedirectUriError> {
		let uri = Self::new_unchecked(kind, path);

		uri.validate()?;

		Ok(uri)
	}

	/// Creates an entry without validating the path.
	///
	/// Used by the builder, which defers validation to `build()` so rows can be
	/// collected before the presence gate runs.
	pub fn new_unchecked(kind: RedirectUriKind, path: impl Into<String>) -> Self {
		Self { kind, path: path.into() }
	}

	/// Validates invariants for the entry.
	pub(crate) fn validate(&self) -> Result<(), RedirectUriError> {
		if self.path.trim().is_empty() {
			return Err(RedirectUriError::EmptyPath);
		}

		Ok(())
	}
}
