//! Form-to-document generator for identity-provider integrations—render configuration
//! records into deterministic Markdown guides and round-trip them through shareable
//! URL tokens.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod obs;
pub mod render;
pub mod share;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;
}

pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
