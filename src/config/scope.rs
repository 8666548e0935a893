// std
use std::slice::Iter;
// crates.io
use serde::{Deserializer, Serializer, ser::SerializeSeq};
// self
use crate::_prelude::*;

/// Ordered list of extra OAuth scopes.
///
/// Unlike a scope *set*, entry order is semantic (the guide lists scopes in the
/// order the operator entered them) and duplicates are kept. Entries are trimmed
/// on construction and whitespace-only entries are dropped, so a list handed to
/// the renderer never contains blanks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScopeList(Vec<String>);
impl ScopeList {
	/// Creates a scope list from any iterator, trimming and dropping blanks.
	pub fn new<I, S>(scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let cleaned = scopes
			.into_iter()
			.map(|scope| scope.into().trim().to_owned())
			.filter(|scope| !scope.is_empty())
			.collect();

		Self(cleaned)
	}

	/// Number of scopes, duplicates included.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if no scopes are listed.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over scopes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|s| s.as_str())
	}

	/// Returns the underlying slice of scope strings.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}
}

/// Iterator over scope strings.
pub struct ScopeListIter<'a> {
	inner: Iter<'a, String>,
}
impl<'a> Iterator for ScopeListIter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|s| s.as_str())
	}
}
impl<'a> IntoIterator for &'a ScopeList {
	type IntoIter = ScopeListIter<'a>;
	type Item = &'a str;

	fn into_iter(self) -> Self::IntoIter {
		ScopeListIter { inner: self.0.iter() }
	}
}
impl From<Vec<String>> for ScopeList {
	fn from(value: Vec<String>) -> Self {
		Self::new(value)
	}
}
impl From<ScopeList> for Vec<String> {
	fn from(value: ScopeList) -> Self {
		value.0
	}
}
impl Serialize for ScopeList {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

		for scope in &self.0 {
			seq.serialize_element(scope)?;
		}

		seq.end()
	}
}
impl<'de> Deserialize<'de> for ScopeList {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let values = <Vec<String>>::deserialize(deserializer)?;

		Ok(ScopeList::new(values))
	}
}
