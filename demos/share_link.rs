//! Demonstrates the full share pipeline: encode a configuration into a token,
//! fetch the version tag from a mocked `version.json` endpoint, and compose the
//! shareable link.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use integration_docgen::{
	config::{DeploymentMode, IntegrationConfig, RedirectUriKind},
	share::{self, VersionClient, share_link},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/version.json");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"version":"1.4"}"#);
		})
		.await;
	let config = IntegrationConfig::builder("Acme", "acme.example.com")
		.deployment(DeploymentMode::Saas)
		.support_level("community")
		.description("A tool.")
		.web_link("https://acme.example.com")
		.public_client(true)
		.redirect_uri(RedirectUriKind::Strict, "/cb")
		.build()?;
	let token = share::encode(&config)?;
	let version = VersionClient::default()
		.fetch(&Url::parse(&server.url("/version.json"))?)
		.await?;
	let base = Url::parse("https://docs.example.com/s.html")?;
	let link = share_link(&base, &version, &token);

	println!("Token fingerprint: {}", token.fingerprint());
	println!("Shareable link: {link}");

	// Restoring form state from the link is the same decode path.
	let restored = token.decode()?;

	assert_eq!(restored, config);

	Ok(())
}
