use std::str::FromStr;

use derive_more::Deref;
use derive_more::Display;
use serde::Deserialize;
use serde::Serialize;

use crate::OverrideError;
use crate::OverrideResult;

/// Prefix shared by every ref.
pub const REF_PREFIX: &str = "e0";

/// A per-node identifier, unique within one document.
///
/// Refs are embedded verbatim in markers and runtime keys, so they are
/// restricted to `e0[a-z0-9]+`.
#[derive(
	Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Ref(String);

impl Ref {
	/// Validate and wrap a ref.
	pub fn new(value: impl Into<String>) -> OverrideResult<Self> {
		let value = value.into();
		if is_valid_ref(&value) {
			Ok(Self(value))
		} else {
			Err(OverrideError::MalformedRef(value))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// Check a candidate ref against `e0[a-z0-9]+`.
pub fn is_valid_ref(value: &str) -> bool {
	value.strip_prefix(REF_PREFIX).is_some_and(|rest| {
		!rest.is_empty()
			&& rest
				.bytes()
				.all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit())
	})
}

impl FromStr for Ref {
	type Err = OverrideError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl TryFrom<String> for Ref {
	type Error = OverrideError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<Ref> for String {
	fn from(value: Ref) -> Self {
		value.0
	}
}

impl AsRef<str> for Ref {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
