//! Conditional template fragments composed by the top-level renderer.
//!
//! Each fragment is computed independently from the piece of the record it
//! depends on, so the branching policy stays testable in isolation.

// self
use crate::config::{RedirectUri, ScopeList};

/// Sentence telling the operator which credentials to record.
///
/// Public clients are never issued a secret, so exactly one of two fixed
/// sentences applies.
pub const fn client_note(is_public_client: bool) -> &'static str {
	if is_public_client {
		"Note the **Client ID** value because it will be required later."
	} else {
		"Note the **Client ID** and **Client Secret** values because they will be required later."
	}
}

/// Redirect URI instruction, switching between singular and bulleted forms.
///
/// One entry renders a single inline sentence; two or more render an intro line
/// followed by one bullet per entry in input order. An empty slice renders
/// nothing; the builder gate keeps that case from ever reaching a real record.
pub fn redirect_fragment(domain: &str, uris: &[RedirectUri]) -> String {
	match uris {
		[] => String::new(),
		[uri] => format!(
			"Set a **{}** redirect URI to <kbd>https://<em>{domain}</em>{}</kbd>.",
			uri.kind, uri.path
		),
		_ => {
			let bullets = uris
				.iter()
				.map(|uri| {
					format!("- **{}**: <kbd>https://<em>{domain}</em>{}</kbd>", uri.kind, uri.path)
				})
				.collect::<Vec<_>>()
				.join("\n");

			format!("Set the following redirect URIs:\n{bullets}")
		},
	}
}

/// Advanced-protocol-settings sentence naming the extra scopes, if any.
///
/// Returns `None` for an empty list so the caller omits the bullet entirely.
pub fn scopes_fragment(scopes: &ScopeList) -> Option<String> {
	match scopes.as_slice() {
		[] => None,
		[scope] => Some(format!(
			"Under **Advanced Protocol Settings**, add `{scope}` to the list of available scopes."
		)),
		many => {
			let list = many.iter().map(|s| format!("`{s}`")).collect::<Vec<_>>().join(", ");

			Some(format!(
				"Under **Advanced Protocol Settings**, add the following scopes to the list of available scopes: {list}."
			))
		},
	}
}

/// Subject-mode sentence, omitted when no mode is configured.
pub fn subject_mode_fragment(mode: Option<&str>) -> Option<String> {
	let mode = mode.filter(|m| !m.is_empty())?;

	Some(format!("Under **Advanced Protocol Settings**, set **Subject mode** to be `{mode}`."))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::config::RedirectUriKind;

	#[test]
	fn client_note_switches_on_client_kind() {
		assert_eq!(
			client_note(true),
			"Note the **Client ID** value because it will be required later."
		);
		assert!(client_note(false).contains("**Client Secret**"));
	}

	#[test]
	fn single_redirect_renders_inline_sentence() {
		let uris = vec![RedirectUri::new_unchecked(RedirectUriKind::Strict, "/cb")];

		assert_eq!(
			redirect_fragment("acme.company", &uris),
			"Set a **Strict** redirect URI to <kbd>https://<em>acme.company</em>/cb</kbd>."
		);
	}

	#[test]
	fn multiple_redirects_render_intro_and_bullets_in_order() {
		let uris = vec![
			RedirectUri::new_unchecked(RedirectUriKind::Strict, "/cb"),
			RedirectUri::new_unchecked(RedirectUriKind::Regex, "/cb/.*"),
		];

		assert_eq!(
			redirect_fragment("acme.company", &uris),
			"Set the following redirect URIs:\n\
			- **Strict**: <kbd>https://<em>acme.company</em>/cb</kbd>\n\
			- **Regex**: <kbd>https://<em>acme.company</em>/cb/.*</kbd>"
		);
	}

	#[test]
	fn scopes_fragment_switches_between_forms() {
		assert_eq!(scopes_fragment(&ScopeList::default()), None);
		assert_eq!(
			scopes_fragment(&ScopeList::new(["groups"])).expect("One scope renders a sentence."),
			"Under **Advanced Protocol Settings**, add `groups` to the list of available scopes."
		);
		assert_eq!(
			scopes_fragment(&ScopeList::new(["groups", "offline_access"]))
				.expect("Several scopes render a list."),
			"Under **Advanced Protocol Settings**, add the following scopes to the list of available scopes: `groups`, `offline_access`."
		);
	}

	#[test]
	fn subject_mode_fragment_omits_empty_values() {
		assert_eq!(subject_mode_fragment(None), None);
		assert_eq!(subject_mode_fragment(Some("")), None);
		assert_eq!(
			subject_mode_fragment(Some("based on the User's username"))
				.expect("Configured mode renders a sentence."),
			"Under **Advanced Protocol Settings**, set **Subject mode** to be `based on the User's username`."
		);
	}
}
