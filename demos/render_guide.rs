//! Renders a complete integration guide for a self-hosted application and prints
//! the resulting Markdown.

// crates.io
use color_eyre::Result;
// self
use integration_docgen::{
	config::{IntegrationConfig, RedirectUriKind},
	render::render,
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let config = IntegrationConfig::builder("Gitea", "gitea")
		.support_level("community")
		.description("Gitea is a painless, self-hosted Git service.")
		.web_link("https://about.gitea.com")
		.redirect_uri(RedirectUriKind::Strict, "/user/oauth2/authentik/callback")
		.additional_scopes(["groups"])
		.build()?;

	println!("{}", render(&config));

	Ok(())
}
