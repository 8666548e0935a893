// self
use crate::{
	_prelude::*,
	config::{
		DeploymentMode, IntegrationConfig, ProviderType, RedirectUri, RedirectUriError,
		RedirectUriKind, ScopeList, SupportLevel,
	},
};

/// Errors raised while constructing or validating integration configurations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ConfigError {
	/// A required text field was empty or whitespace.
	#[error("The {field} field cannot be empty.")]
	EmptyField {
		/// Name of the offending field.
		field: &'static str,
	},
	/// Support level was empty or whitespace.
	#[error("Support level cannot be empty.")]
	EmptySupportLevel,
	/// At least one redirect URI must be supplied.
	#[error("At least one redirect URI is required.")]
	NoRedirectUris,
	/// A redirect URI entry failed validation.
	#[error("Redirect URI is invalid.")]
	InvalidRedirectUri(#[from] RedirectUriError),
}

/// Builder for [`IntegrationConfig`] values.
#[derive(Debug)]
pub struct IntegrationConfigBuilder {
	/// Display name of the integrated application.
	pub integration_name: String,
	/// Base host or full FQDN supplied by the operator.
	pub integration_domain: String,
	/// Deployment mode controlling FQDN derivation.
	pub deployment: DeploymentMode,
	/// Raw support tier; defaults to `community` when left unset.
	pub support_level: Option<String>,
	/// Free-text description of the application.
	pub description: String,
	/// Reference URL or citation for the description.
	pub web_link: String,
	/// Protocol family of the provider pairing.
	pub provider_type: ProviderType,
	/// Public-client flag.
	pub is_public_client: bool,
	/// Ordered redirect URI entries collected so far.
	pub redirect_uris: Vec<RedirectUri>,
	/// Ordered extra scopes collected so far.
	pub additional_scopes: ScopeList,
	/// Optional subject mode.
	pub subject_mode: Option<String>,
}
impl IntegrationConfigBuilder {
	/// Creates a new builder seeded with the two domain-defining fields.
	pub fn new(
		integration_name: impl Into<String>,
		integration_domain: impl Into<String>,
	) -> Self {
		Self {
			integration_name: integration_name.into(),
			integration_domain: integration_domain.into(),
			deployment: DeploymentMode::default(),
			support_level: None,
			description: String::new(),
			web_link: String::new(),
			provider_type: ProviderType::default(),
			is_public_client: false,
			redirect_uris: Vec::new(),
			additional_scopes: ScopeList::default(),
			subject_mode: None,
		}
	}

	/// Sets the deployment mode.
	pub fn deployment(mut self, deployment: DeploymentMode) -> Self {
		self.deployment = deployment;

		self
	}

	/// Sets the support level from case-insensitive input.
	///
	/// Normalization happens in [`build`](Self::build) so callers can chain
	/// setters without intermediate results.
	pub fn support_level(mut self, level: impl Into<String>) -> Self {
		self.support_level = Some(level.into());

		self
	}

	/// Sets the application description.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();

		self
	}

	/// Sets the reference link for the description.
	pub fn web_link(mut self, web_link: impl Into<String>) -> Self {
		self.web_link = web_link.into();

		self
	}

	/// Overrides the provider type.
	pub fn provider_type(mut self, provider_type: ProviderType) -> Self {
		self.provider_type = provider_type;

		self
	}

	/// Marks the client as public (no client secret is issued).
	pub fn public_client(mut self, is_public: bool) -> Self {
		self.is_public_client = is_public;

		self
	}

	/// Appends one redirect URI entry, preserving insertion order.
	pub fn redirect_uri(mut self, kind: RedirectUriKind, path: impl Into<String>) -> Self {
		self.redirect_uris.push(RedirectUri::new_unchecked(kind, path));

		self
	}

	/// Appends multiple redirect URI entries, preserving iterator order.
	pub fn redirect_uris<I>(mut self, uris: I) -> Self
	where
		I: IntoIterator<Item = RedirectUri>,
	{
		self.redirect_uris.extend(uris);

		self
	}

	/// Replaces the scope list, trimming entries and dropping blank ones.
	pub fn additional_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.additional_scopes = ScopeList::new(scopes);

		self
	}

	/// Sets the subject mode; empty input is treated as absent.
	pub fn subject_mode(mut self, mode: impl Into<String>) -> Self {
		let mode = mode.into();

		self.subject_mode = if mode.is_empty() { None } else { Some(mode) };

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<IntegrationConfig, ConfigError> {
		let support_level = match self.support_level {
			Some(raw) => SupportLevel::new(raw)?,
			None => SupportLevel::default(),
		};
		let config = IntegrationConfig {
			integration_name: self.integration_name,
			integration_domain: self.integration_domain,
			deployment: self.deployment,
			support_level,
			description: self.description,
			web_link: self.web_link,
			provider_type: self.provider_type,
			is_public_client: self.is_public_client,
			redirect_uris: self.redirect_uris,
			additional_scopes: self.additional_scopes,
			subject_mode: self.subject_mode,
		};

		config.validate()?;

		Ok(config)
	}
}

impl IntegrationConfig {
	/// Validates invariants for the configuration.
	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		require_non_empty("integration name", &self.integration_name)?;
		require_non_empty("integration domain", &self.integration_domain)?;
		require_non_empty("description", &self.description)?;
		require_non_empty("web link", &self.web_link)?;

		if self.redirect_uris.is_empty() {
			return Err(ConfigError::NoRedirectUris);
		}

		for uri in &self.redirect_uris {
			uri.validate()?;
		}

		Ok(())
	}
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
	if value.trim().is_empty() { Err(ConfigError::EmptyField { field }) } else { Ok(()) }
}
