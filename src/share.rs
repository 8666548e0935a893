//! Shareable token codec and link helpers.
//!
//! The codec round-trips an [`IntegrationConfig`] through the same
//! base64-encoded JSON payload the original web form embeds in its share links,
//! so tokens minted here restore state in either direction. Key order of the
//! JSON object is not part of the contract; the order of `redirectURIs` and
//! `additionalScopes` is.

/// Share-link composition.
pub mod link;
/// Async version-tag client used when composing share links.
#[cfg(feature = "reqwest")] pub mod version;

pub use link::*;
#[cfg(feature = "reqwest")] pub use version::*;

// crates.io
use base64::{
	Engine as _,
	engine::general_purpose::{STANDARD, STANDARD_NO_PAD},
};
use sha2::{Digest, Sha256};
// self
use crate::{
	_prelude::*,
	config::{
		ConfigError, DeploymentMode, IntegrationConfig, ProviderType, RedirectUri, ScopeList,
		SupportLevel,
	},
	obs::{OpKind, OpOutcome, OpSpan, record_op},
};

/// Errors raised while encoding or decoding share tokens.
///
/// Every decode failure is recoverable; callers treat it as "no prefill data
/// available" and fall back to an empty form.
#[derive(Debug, ThisError)]
pub enum ShareError {
	/// Token text is not valid base64.
	#[error("Share token is not valid base64.")]
	InvalidEncoding(#[from] base64::DecodeError),
	/// Token decoded to bytes that are not a valid configuration payload.
	#[error("Share token payload is malformed.")]
	MalformedPayload(#[source] serde_path_to_error::Error<serde_json::Error>),
	/// Payload parsed but violates a configuration constraint.
	#[error("Share token violates configuration constraints.")]
	InvalidConfig(#[from] ConfigError),
	/// Record could not be serialized into a payload.
	#[error("Configuration could not be serialized.")]
	SerializePayload(#[from] serde_json::Error),
}

/// Opaque, URL-embeddable form of an [`IntegrationConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareToken(String);
impl ShareToken {
	/// Returns the token text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Decodes the token back into a configuration record.
	pub fn decode(&self) -> Result<IntegrationConfig, ShareError> {
		decode(&self.0)
	}

	/// Stable fingerprint of the token text.
	///
	/// A base64 (no padding) SHA-256 digest, safe to log or display where the
	/// token itself would bloat output.
	pub fn fingerprint(&self) -> String {
		let mut hasher = Sha256::new();

		hasher.update(self.0.as_bytes());

		STANDARD_NO_PAD.encode(hasher.finalize())
	}
}
impl From<ShareToken> for String {
	fn from(value: ShareToken) -> Self {
		value.0
	}
}
impl Display for ShareToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Serializes a configuration record into a share token.
///
/// Deterministic: no clock, no randomness; the same record always yields the
/// same token. The derived FQDN is included in the payload for compatibility
/// with links minted by the original form, even though [`decode`] recomputes it.
pub fn encode(config: &IntegrationConfig) -> Result<ShareToken, ShareError> {
	let _guard = OpSpan::new(OpKind::Encode, "encode").entered();

	record_op(OpKind::Encode, OpOutcome::Attempt);

	let wire = WireConfig::from(config);
	let json = serde_json::to_vec(&wire)?;
	let token = ShareToken(STANDARD.encode(json));

	record_op(OpKind::Encode, OpOutcome::Success);

	Ok(token)
}

/// Decodes share token text back into a configuration record.
///
/// Malformed input of any kind (invalid base64, truncated payload, bad JSON,
/// unknown fields, constraint violations) surfaces as a [`ShareError`]; nothing
/// here panics.
pub fn decode(token: &str) -> Result<IntegrationConfig, ShareError> {
	let _guard = OpSpan::new(OpKind::Decode, "decode").entered();

	record_op(OpKind::Decode, OpOutcome::Attempt);

	let result = decode_inner(token);

	match &result {
		Ok(_) => record_op(OpKind::Decode, OpOutcome::Success),
		Err(_) => record_op(OpKind::Decode, OpOutcome::Failure),
	}

	result
}

fn decode_inner(token: &str) -> Result<IntegrationConfig, ShareError> {
	let bytes = STANDARD.decode(token)?;
	let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
	let wire: WireConfig =
		serde_path_to_error::deserialize(&mut deserializer).map_err(ShareError::MalformedPayload)?;

	Ok(IntegrationConfig::try_from(wire)?)
}

/// Wire payload matching the original form's JSON field set exactly.
///
/// This struct is the format-compatibility surface: field names, the `isSaas`
/// flag, the stored `domain` copy, and array orderings must stay as-is for old
/// links to keep working. Unknown fields are rejected at this boundary.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct WireConfig {
	integration_name: String,
	integration_domain: String,
	is_saas: bool,
	domain: String,
	support_level: String,
	description: String,
	web_link: String,
	provider_type: ProviderType,
	is_public_client: bool,
	#[serde(rename = "redirectURIs")]
	redirect_uris: Vec<RedirectUri>,
	additional_scopes: ScopeList,
	subject_mode: String,
}
impl From<&IntegrationConfig> for WireConfig {
	fn from(config: &IntegrationConfig) -> Self {
		Self {
			integration_name: config.integration_name.clone(),
			integration_domain: config.integration_domain.clone(),
			is_saas: config.deployment.is_saas(),
			domain: config.domain(),
			support_level: config.support_level.as_str().to_owned(),
			description: config.description.clone(),
			web_link: config.web_link.clone(),
			provider_type: config.provider_type,
			is_public_client: config.is_public_client,
			redirect_uris: config.redirect_uris.clone(),
			additional_scopes: config.additional_scopes.clone(),
			subject_mode: config.subject_mode.clone().unwrap_or_default(),
		}
	}
}
impl TryFrom<WireConfig> for IntegrationConfig {
	type Error = ConfigError;

	fn try_from(wire: WireConfig) -> Result<Self, Self::Error> {
		let WireConfig {
			integration_name,
			integration_domain,
			is_saas,
			// Compatibility copy only; the derivation from `integrationDomain` +
			// `isSaas` is authoritative, so a stored value never wins.
			domain: _stored_domain,
			support_level,
			description,
			web_link,
			provider_type,
			is_public_client,
			redirect_uris,
			additional_scopes,
			subject_mode,
		} = wire;
		let deployment =
			if is_saas { DeploymentMode::Saas } else { DeploymentMode::SelfHosted };
		let config = IntegrationConfig {
			integration_name,
			integration_domain,
			deployment,
			support_level: SupportLevel::new(support_level)?,
			description,
			web_link,
			provider_type,
			is_public_client,
			redirect_uris,
			additional_scopes,
			subject_mode: if subject_mode.is_empty() { None } else { Some(subject_mode) },
		};

		config.validate()?;

		Ok(config)
	}
}
