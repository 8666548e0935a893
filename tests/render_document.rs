// self
use integration_docgen::{
	config::{DeploymentMode, IntegrationConfig, RedirectUriKind},
	render::render,
};

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
fn acme_scenario_renders_the_full_guide() {
	let expected = "---
title: Integrate with Acme
sidebar_label: Acme
support_level: community
---

## What is Acme

> A tool.\n> \n> -- https://acme.example.com

## Preparation

The following placeholders are used in this guide:
- `acme.example.com` is the FQDN of the Acme installation.
- `authentik.company` is the FQDN of the authentik installation.

:::note
This documentation lists only the settings that you need to change from their default values. Be aware that any changes other than those explicitly mentioned in this guide could cause issues accessing your application.
:::

## authentik configuration

To support the integration of Acme with authentik, you need to create an application/provider pair in authentik.

### Create an application and provider in authentik

1. Log in to authentik as an admin, and open the authentik Admin interface.
2. Navigate to **Applications** > **Applications** and click **Create with Provider** to create an application and provider pair. (Alternatively, you can create only an application, without a provider, by clicking **Create**.)

- **Application**: Provide a descriptive name, an optional group for the type of application, the policy engine mode, and optional UI settings.
- **Choose a Provider type**: Select **OAuth2/OpenID Connect** as the provider type.
- **Configure the Provider**: Provide a name (or accept the auto-provided name), choose the authorization flow for this provider, and configure the following required settings:
    - Note the **Client ID** value because it will be required later.
    - Set a **Strict** redirect URI to <kbd>https://<em>acme.example.com</em>/cb</kbd>.

- **Configure Bindings** _(optional)_: Create a [binding](/docs/add-secure-apps/flows-stages/bindings/) (policy, group, or user) to manage the listing and access to applications on a user's **My applications** page.

3. Click **Submit** to save the new application and provider.";

	assert_eq!(render(&acme_config()), expected);
}

#[test]
fn render_twice_yields_identical_bytes() {
	let config = acme_config();

	assert_eq!(render(&config), render(&config));
}

#[test]
fn confidential_client_note_mentions_the_secret() {
	let config = IntegrationConfig::builder("Acme", "acme.example.com")
		.deployment(DeploymentMode::Saas)
		.description("A tool.")
		.web_link("https://acme.example.com")
		.public_client(false)
		.redirect_uri(RedirectUriKind::Strict, "/cb")
		.build()
		.expect("Confidential fixture should build successfully.");
	let document = render(&config);

	assert!(document.contains(
		"    - Note the **Client ID** and **Client Secret** values because they will be required later.\n"
	));
	assert!(!document.contains("Note the **Client ID** value because"));
}

#[test]
fn self_hosted_domain_gets_the_placeholder_suffix() {
	let config = IntegrationConfig::builder("Gitea", "gitea")
		.description("A Git forge.")
		.web_link("https://about.gitea.com")
		.redirect_uri(RedirectUriKind::Strict, "/user/oauth2/authentik/callback")
		.build()
		.expect("Self-hosted fixture should build successfully.");
	let document = render(&config);

	assert!(document.contains("- `gitea.company` is the FQDN of the Gitea installation.\n"));
	assert!(document.contains("<kbd>https://<em>gitea.company</em>/user/oauth2/authentik/callback</kbd>"));
}

#[test]
fn multiple_redirect_uris_render_bullets_in_input_order() {
	let config = IntegrationConfig::builder("Acme", "acme.example.com")
		.deployment(DeploymentMode::Saas)
		.description("A tool.")
		.web_link("https://acme.example.com")
		.redirect_uri(RedirectUriKind::Regex, "/cb/.*")
		.redirect_uri(RedirectUriKind::Strict, "/cb")
		.build()
		.expect("Multi-redirect fixture should build successfully.");
	let document = render(&config);

	assert!(document.contains(
		"    - Set the following redirect URIs:\n\
		- **Regex**: <kbd>https://<em>acme.example.com</em>/cb/.*</kbd>\n\
		- **Strict**: <kbd>https://<em>acme.example.com</em>/cb</kbd>\n"
	));
	assert!(!document.contains("Set a **"));
}

#[test]
fn scope_bullet_is_omitted_for_an_empty_list() {
	let document = render(&acme_config());

	assert!(!document.contains("Advanced Protocol Settings"));
}

#[test]
fn single_scope_renders_the_singular_sentence() {
	let config = IntegrationConfig::builder("Acme", "acme.example.com")
		.deployment(DeploymentMode::Saas)
		.description("A tool.")
		.web_link("https://acme.example.com")
		.redirect_uri(RedirectUriKind::Strict, "/cb")
		.additional_scopes(["groups"])
		.build()
		.expect("Single-scope fixture should build successfully.");
	let document = render(&config);

	assert!(document.contains(
		"- Under **Advanced Protocol Settings**, add `groups` to the list of available scopes.\n"
	));
}

#[test]
fn several_scopes_render_a_comma_joined_code_list() {
	let config = IntegrationConfig::builder("Acme", "acme.example.com")
		.deployment(DeploymentMode::Saas)
		.description("A tool.")
		.web_link("https://acme.example.com")
		.redirect_uri(RedirectUriKind::Strict, "/cb")
		.additional_scopes(["groups", "offline_access", "groups"])
		.build()
		.expect("Multi-scope fixture should build successfully.");
	let document = render(&config);

	assert!(document.contains(
		"- Under **Advanced Protocol Settings**, add the following scopes to the list of available scopes: `groups`, `offline_access`, `groups`.\n"
	));
}

#[test]
fn subject_mode_renders_exactly_one_bullet() {
	let config = IntegrationConfig::builder("Acme", "acme.example.com")
		.deployment(DeploymentMode::Saas)
		.description("A tool.")
		.web_link("https://acme.example.com")
		.redirect_uri(RedirectUriKind::Strict, "/cb")
		.subject_mode("based on the User's username")
		.build()
		.expect("Subject-mode fixture should build successfully.");
	let document = render(&config);
	let needle =
		"- Under **Advanced Protocol Settings**, set **Subject mode** to be `based on the User's username`.";

	assert_eq!(document.matches(needle).count(), 1);
	// With only the subject-mode bullet present, no blank line separates it from
	// the Bindings bullet.
	assert!(document.contains(&format!("{needle}\n- **Configure Bindings**")));
}

#[test]
fn scope_bullet_without_subject_mode_keeps_the_trailing_blank_line() {
	let config = IntegrationConfig::builder("Acme", "acme.example.com")
		.deployment(DeploymentMode::Saas)
		.description("A tool.")
		.web_link("https://acme.example.com")
		.redirect_uri(RedirectUriKind::Strict, "/cb")
		.additional_scopes(["groups"])
		.build()
		.expect("Scope-only fixture should build successfully.");
	let document = render(&config);

	assert!(document.contains(
		"- Under **Advanced Protocol Settings**, add `groups` to the list of available scopes.\n\n- **Configure Bindings**"
	));
}
