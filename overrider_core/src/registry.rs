use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::OverrideError;
use crate::OverrideResult;
use crate::Ref;
use crate::codegen::UnrenderWrapper;

/// Static fallback values recorded for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDefaults {
	/// Lowercase tag name before a tag override.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<String>,
	/// Tag name before a component override.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub component: Option<String>,
	/// Set when the node was marked hidden at design time.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub unrender: Option<bool>,
}

/// Generated code fragments recorded for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeCode {
	/// Attribute name to its generated attribute code.
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub attributes: BTreeMap<String, String>,
	/// Raw-content assignment value for an inner override.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inner: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub unrender: Option<UnrenderWrapper>,
	/// Class token to its generated class fragment.
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub classes: BTreeMap<String, String>,
}

/// The per-document side channel shared by both passes.
///
/// The annotator writes entries lazily as overrides are injected. The
/// resolver and the emission stages only read them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideRegistry {
	pub defaults: BTreeMap<Ref, NodeDefaults>,
	pub code: BTreeMap<Ref, NodeCode>,
}

impl OverrideRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.defaults.is_empty() && self.code.is_empty()
	}

	pub fn defaults(&self, reference: &Ref) -> Option<&NodeDefaults> {
		self.defaults.get(reference)
	}

	pub fn code(&self, reference: &Ref) -> Option<&NodeCode> {
		self.code.get(reference)
	}

	/// The defaults entry for `reference`, created if missing.
	pub fn defaults_mut(&mut self, reference: &Ref) -> &mut NodeDefaults {
		self.defaults.entry(reference.clone()).or_default()
	}

	/// The code entry for `reference`, created if missing.
	pub fn code_mut(&mut self, reference: &Ref) -> &mut NodeCode {
		self.code.entry(reference.clone()).or_default()
	}

	/// Generated attribute code, failing when the entry is missing.
	pub fn attribute_code(&self, reference: &Ref, name: &str) -> OverrideResult<&str> {
		self.code(reference)
			.and_then(|code| code.attributes.get(name))
			.map(String::as_str)
			.ok_or_else(|| missing(reference, &format!("attributes.{name}")))
	}

	/// Generated inner code, failing when the entry is missing.
	pub fn inner_code(&self, reference: &Ref) -> OverrideResult<&str> {
		self.code(reference)
			.and_then(|code| code.inner.as_deref())
			.ok_or_else(|| missing(reference, "inner"))
	}

	/// Unrender wrapper, failing when the entry is missing.
	pub fn unrender_wrapper(&self, reference: &Ref) -> OverrideResult<&UnrenderWrapper> {
		self.code(reference)
			.and_then(|code| code.unrender.as_ref())
			.ok_or_else(|| missing(reference, "unrender"))
	}

	/// The defaults map as JSON, used to seed the runtime data object.
	pub fn defaults_json(&self) -> OverrideResult<serde_json::Value> {
		serde_json::to_value(&self.defaults)
			.map_err(|e| OverrideError::RegistryParse(e.to_string()))
	}

	pub fn to_json(&self) -> OverrideResult<String> {
		serde_json::to_string_pretty(self).map_err(|e| OverrideError::RegistryParse(e.to_string()))
	}

	pub fn from_json(content: &str) -> OverrideResult<Self> {
		serde_json::from_str(content).map_err(|e| OverrideError::RegistryParse(e.to_string()))
	}
}

fn missing(reference: &Ref, field: &str) -> OverrideError {
	OverrideError::MissingRegistryEntry {
		reference: reference.to_string(),
		field: field.to_string(),
	}
}
