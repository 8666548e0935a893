//! Pure document renderer mapping an [`IntegrationConfig`] to a Markdown guide.

/// Conditional fragments composed into the fixed template.
pub mod fragment;

pub use fragment::*;

// self
use crate::{
	config::IntegrationConfig,
	obs::{OpKind, OpOutcome, OpSpan, record_op},
};

/// Renders the integration guide for the supplied configuration.
///
/// Deterministic and infallible: the same record always yields byte-identical
/// output, and a record that made it through [`IntegrationConfig::builder`]
/// never fails to render. Field values are inserted verbatim — the renderer does
/// not escape Markdown control characters in user-supplied text. That is an
/// intentional trust boundary (guides are operator-authored), not an oversight.
pub fn render(config: &IntegrationConfig) -> String {
	let _guard = OpSpan::new(OpKind::Render, "render").entered();

	record_op(OpKind::Render, OpOutcome::Attempt);

	let name = &config.integration_name;
	let domain = config.domain();
	let client_note = fragment::client_note(config.is_public_client);
	let redirect = fragment::redirect_fragment(&domain, &config.redirect_uris);
	// The optional bullets reproduce the original generator's stitching exactly,
	// including the blank line left behind when the subject-mode bullet is absent.
	let scopes_bullet = fragment::scopes_fragment(&config.additional_scopes)
		.map(|bullet| format!("- {bullet}\n"))
		.unwrap_or_default();
	let subject_bullet = fragment::subject_mode_fragment(config.subject_mode())
		.map(|bullet| format!("- {bullet}"))
		.unwrap_or_default();
	let document = format!(
		"---
title: Integrate with {name}
sidebar_label: {name}
support_level: {support_level}
---

## What is {name}

> {description}\n> \n> -- {web_link}

## Preparation

The following placeholders are used in this guide:
- `{domain}` is the FQDN of the {name} installation.
- `authentik.company` is the FQDN of the authentik installation.

:::note
This documentation lists only the settings that you need to change from their default values. Be aware that any changes other than those explicitly mentioned in this guide could cause issues accessing your application.
:::

## authentik configuration

To support the integration of {name} with authentik, you need to create an application/provider pair in authentik.

### Create an application and provider in authentik

1. Log in to authentik as an admin, and open the authentik Admin interface.
2. Navigate to **Applications** > **Applications** and click **Create with Provider** to create an application and provider pair. (Alternatively, you can create only an application, without a provider, by clicking **Create**.)

- **Application**: Provide a descriptive name, an optional group for the type of application, the policy engine mode, and optional UI settings.
- **Choose a Provider type**: Select **OAuth2/OpenID Connect** as the provider type.
- **Configure the Provider**: Provide a name (or accept the auto-provided name), choose the authorization flow for this provider, and configure the following required settings:
    - {client_note}
    - {redirect}
{scopes_bullet}{subject_bullet}
- **Configure Bindings** _(optional)_: Create a [binding](/docs/add-secure-apps/flows-stages/bindings/) (policy, group, or user) to manage the listing and access to applications on a user's **My applications** page.

3. Click **Submit** to save the new application and provider.",
		support_level = config.support_level,
		description = config.description,
		web_link = config.web_link,
	);

	record_op(OpKind::Render, OpOutcome::Success);

	document
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::config::{DeploymentMode, RedirectUriKind};

	fn acme_config() -> IntegrationConfig {
		IntegrationConfig::builder("Acme", "acme.example.com")
			.deployment(DeploymentMode::Saas)
			.support_level("community")
			.description("A tool.")
			.web_link("https://acme.example.com")
			.public_client(true)
			.redirect_uri(RedirectUriKind::Strict, "/cb")
			.build()
			.expect("Acme fixture should build successfully.")
	}

	#[test]
	fn render_is_deterministic() {
		let config = acme_config();

		assert_eq!(render(&config), render(&config));
	}

	#[test]
	fn front_matter_carries_name_and_support_level() {
		let document = render(&acme_config());

		assert!(document.starts_with(
			"---\ntitle: Integrate with Acme\nsidebar_label: Acme\nsupport_level: community\n---\n"
		));
	}

	#[test]
	fn optional_bullets_leave_a_blank_line_when_both_are_absent() {
		let document = render(&acme_config());

		assert!(document.contains(
			"    - Set a **Strict** redirect URI to <kbd>https://<em>acme.example.com</em>/cb</kbd>.\n\n- **Configure Bindings**"
		));
	}

	#[test]
	fn user_text_is_not_escaped() {
		let mut config = acme_config();

		config.description = "A *tool* with `backticks`.".into();

		assert!(render(&config).contains("> A *tool* with `backticks`.\n"));
	}
}
