use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::OverrideError;
use crate::OverrideResult;

/// How an attribute or property becomes runtime-conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum OverrideKind {
	/// The value can be replaced at runtime.
	Update,
	/// The attribute can be removed at runtime.
	Delete,
	/// The value can be replaced or the attribute removed at runtime.
	UpdateDelete,
}

impl OverrideKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Update => "update",
			Self::Delete => "delete",
			Self::UpdateDelete => "update-delete",
		}
	}
}

impl Display for OverrideKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for OverrideKind {
	type Err = OverrideError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"update" => Ok(Self::Update),
			"delete" => Ok(Self::Delete),
			"update-delete" => Ok(Self::UpdateDelete),
			other => Err(OverrideError::UnsupportedOverrideKind(other.to_string())),
		}
	}
}

impl TryFrom<String> for OverrideKind {
	type Error = OverrideError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// What happens to a class token at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ClassAction {
	/// A runtime class token is inserted.
	Create,
	/// A static class token can be suppressed.
	Delete,
}

impl ClassAction {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Create => "create",
			Self::Delete => "delete",
		}
	}
}

impl Display for ClassAction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for ClassAction {
	type Err = OverrideError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"create" => Ok(Self::Create),
			"delete" => Ok(Self::Delete),
			other => Err(OverrideError::UnsupportedClassAction(other.to_string())),
		}
	}
}

impl TryFrom<String> for ClassAction {
	type Error = OverrideError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// The design-time override declaration attached to a single node.
///
/// ```json
/// {
///   "attributes": { "value": "update", "readOnly": "delete" },
///   "tag": true,
///   "inner": true,
///   "classes": { "active": "delete" },
///   "properties": { "label": "update-delete" }
/// }
/// ```
///
/// Empty maps and `false` flags mean "not overridden". Maps iterate in name
/// order so generated output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideSpec {
	/// Attribute name (structural spelling) to override kind.
	pub attributes: BTreeMap<String, OverrideKind>,
	/// Swap the element tag at runtime.
	pub tag: bool,
	/// Swap the component at runtime.
	pub component: bool,
	/// Replace the inner content at runtime.
	pub inner: bool,
	/// Allow the node to be removed at runtime.
	pub unrender: bool,
	/// Class token to class action.
	pub classes: BTreeMap<String, ClassAction>,
	/// Component property name to override kind.
	pub properties: BTreeMap<String, OverrideKind>,
}

impl OverrideSpec {
	/// Parse a spec from its JSON form.
	pub fn from_json(content: &str) -> OverrideResult<Self> {
		serde_json::from_str(content).map_err(|e| OverrideError::SpecParse(e.to_string()))
	}

	/// Returns true if the spec declares nothing.
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
			&& !self.tag
			&& !self.component
			&& !self.inner
			&& !self.unrender
			&& self.classes.is_empty()
			&& self.properties.is_empty()
	}
}
