//! Integration configuration data structures and helpers shared by the renderer
//! and the share codec.
//!
//! The module exposes the validated record, supporting builder utilities, and the
//! derived-FQDN helper so callers can describe one integration scenario as an
//! explicit, immutable value instead of ambient form state.

/// Builder API for assembling integration configurations.
pub mod builder;
/// Redirect URI entries and their matching modes.
pub mod redirect;
/// Ordered scope list handling.
pub mod scope;

pub use builder::*;
pub use redirect::*;
pub use scope::*;

// self
use crate::_prelude::*;

/// Suffix appended to self-hosted base domains to form the documented FQDN.
pub const SELF_HOSTED_SUFFIX: &str = ".company";

/// Where the integrated application is deployed.
///
/// SaaS deployments supply a complete FQDN; self-hosted ones supply a base name
/// that gets the [`SELF_HOSTED_SUFFIX`] placeholder appended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
	/// Hosted by the vendor; the supplied domain is used verbatim.
	Saas,
	#[default]
	/// Hosted by the operator; the supplied domain is a placeholder base name.
	SelfHosted,
}
impl DeploymentMode {
	/// Returns `true` for vendor-hosted deployments.
	pub const fn is_saas(self) -> bool {
		matches!(self, DeploymentMode::Saas)
	}
}

/// Protocol family of the provider pairing described by the guide.
///
/// The fixed template currently elaborates only the OAuth2/OpenID Connect path;
/// the other variants are carried through the share format untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
	#[default]
	/// OAuth2/OpenID Connect provider.
	Oidc,
	/// SAML provider.
	Saml,
	/// LDAP provider.
	Ldap,
}
impl ProviderType {
	/// Returns a stable label matching the wire representation.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderType::Oidc => "oidc",
			ProviderType::Saml => "saml",
			ProviderType::Ldap => "ldap",
		}
	}
}
impl Display for ProviderType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Support tier placed in the guide's front matter.
///
/// Levels form an open set (`community`, `official`, `vendor`, ...), so the type
/// normalizes case instead of enumerating variants. Input is lowercased on
/// construction; output is always the normalized form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupportLevel(String);
impl SupportLevel {
	/// Creates a normalized support level from case-insensitive input.
	pub fn new(value: impl AsRef<str>) -> Result<Self, ConfigError> {
		let view = value.as_ref().trim();

		if view.is_empty() {
			return Err(ConfigError::EmptySupportLevel);
		}

		Ok(Self(view.to_lowercase()))
	}

	/// Returns the normalized (lowercase) level.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Default for SupportLevel {
	/// Defaults to the `community` tier, matching the form's preselected option.
	fn default() -> Self {
		Self("community".into())
	}
}
impl AsRef<str> for SupportLevel {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<SupportLevel> for String {
	fn from(value: SupportLevel) -> Self {
		value.0
	}
}
impl TryFrom<String> for SupportLevel {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl Display for SupportLevel {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Immutable description of one integration scenario.
///
/// A value is constructed fresh for every render or encode call, either through
/// [`IntegrationConfig::builder`] or by decoding a share token; neither the
/// renderer nor the codec reads any state besides the record handed to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
	/// Display name of the integrated application.
	pub integration_name: String,
	/// Base host or full FQDN supplied by the operator.
	pub integration_domain: String,
	/// Deployment mode controlling FQDN derivation.
	pub deployment: DeploymentMode,
	/// Support tier shown in the guide's front matter.
	pub support_level: SupportLevel,
	/// Free-text description quoted verbatim in the guide.
	pub description: String,
	/// Reference URL or citation attributed under the description.
	pub web_link: String,
	/// Protocol family of the provider pairing.
	pub provider_type: ProviderType,
	/// Public clients record only a client ID; confidential ones also a secret.
	pub is_public_client: bool,
	/// Ordered redirect URI entries; never empty once built.
	pub redirect_uris: Vec<RedirectUri>,
	/// Ordered extra scopes; blank entries are dropped at construction.
	pub additional_scopes: ScopeList,
	/// Optional subject mode rendered as an extra configuration bullet.
	pub subject_mode: Option<String>,
}
impl IntegrationConfig {
	/// Creates a new builder seeded with the two domain-defining fields.
	pub fn builder(
		integration_name: impl Into<String>,
		integration_domain: impl Into<String>,
	) -> IntegrationConfigBuilder {
		IntegrationConfigBuilder::new(integration_name, integration_domain)
	}

	/// Derives the FQDN used throughout the rendered guide.
	///
	/// SaaS deployments use the supplied domain verbatim; self-hosted ones get
	/// the [`SELF_HOSTED_SUFFIX`] placeholder appended. The FQDN is never stored;
	/// callers that persist a copy (the share codec does, for wire compatibility)
	/// must recompute it from these inputs when reading it back.
	pub fn domain(&self) -> String {
		if self.deployment.is_saas() {
			self.integration_domain.clone()
		} else {
			format!("{}{SELF_HOSTED_SUFFIX}", self.integration_domain)
		}
	}

	/// Returns the subject mode if it carries a non-empty value.
	pub fn subject_mode(&self) -> Option<&str> {
		self.subject_mode.as_deref().filter(|mode| !mode.is_empty())
	}
}
