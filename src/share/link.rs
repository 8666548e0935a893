// self
use crate::{_prelude::*, share::ShareToken};

/// Query key carrying the generator version tag.
pub const VERSION_PARAM: &str = "_ver";
/// Query key carrying the encoded configuration token.
pub const TOKEN_PARAM: &str = "data_b64";

/// Composes a shareable link from a base URL, version tag, and token.
///
/// Appends `_ver` and `data_b64` query pairs; the token is percent-encoded by
/// the query serializer, matching the original form's `encodeURIComponent`
/// treatment. Pure: link composition never depends on whether the version tag
/// was fetched successfully or substituted by the caller.
pub fn share_link(base: &Url, version: &str, token: &ShareToken) -> Url {
	let mut url = base.clone();

	url.query_pairs_mut()
		.append_pair(VERSION_PARAM, version)
		.append_pair(TOKEN_PARAM, token.as_str());

	url
}
