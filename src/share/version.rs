// self
use crate::{
	_prelude::*,
	obs::{OpKind, OpOutcome, OpSpan, record_op},
};

/// Version tag substituted when the endpoint omits the `version` field.
pub const DEFAULT_VERSION: &str = "1.0";

/// Errors raised while fetching the version tag.
///
/// Version fetching sits outside the pure core: a failure here is reported to
/// the user and never affects previously rendered documents or encoded tokens.
#[derive(Debug, ThisError)]
pub enum VersionError {
	/// Network failure or non-success status from the version endpoint.
	#[error("Network error occurred while fetching the version tag.")]
	Network {
		/// Underlying transport failure.
		#[source]
		source: reqwest::Error,
	},
	/// Endpoint responded but the payload was not the expected JSON shape.
	#[error("Version endpoint returned a malformed payload.")]
	Payload {
		/// Underlying decoding failure.
		#[source]
		source: reqwest::Error,
	},
}

/// Thin wrapper around [`reqwest::Client`] for fetching the generator version
/// tag placed in share links.
#[derive(Clone, Debug, Default)]
pub struct VersionClient(pub reqwest::Client);
impl VersionClient {
	/// Wraps an existing reqwest client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self(client)
	}

	/// Fetches the version tag from a `version.json`-style endpoint.
	///
	/// Expects a `{"version": "..."}` payload; a missing `version` field falls
	/// back to [`DEFAULT_VERSION`], matching the original form's behavior.
	pub async fn fetch(&self, endpoint: &Url) -> Result<String, VersionError> {
		let span = OpSpan::new(OpKind::VersionFetch, "fetch");

		record_op(OpKind::VersionFetch, OpOutcome::Attempt);

		let result = span.instrument(self.fetch_inner(endpoint)).await;

		match &result {
			Ok(_) => record_op(OpKind::VersionFetch, OpOutcome::Success),
			Err(_) => record_op(OpKind::VersionFetch, OpOutcome::Failure),
		}

		result
	}

	async fn fetch_inner(&self, endpoint: &Url) -> Result<String, VersionError> {
		let response = self
			.0
			.get(endpoint.clone())
			.send()
			.await
			.and_then(reqwest::Response::error_for_status)
			.map_err(|e| VersionError::Network { source: e })?;
		let payload: VersionPayload =
			response.json().await.map_err(|e| VersionError::Payload { source: e })?;

		Ok(payload.version.unwrap_or_else(|| DEFAULT_VERSION.to_owned()))
	}
}

/// Expected shape of the `version.json` document; extra fields are ignored.
#[derive(Debug, Deserialize)]
struct VersionPayload {
	version: Option<String>,
}
