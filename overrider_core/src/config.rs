use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::OverrideError;
use crate::OverrideResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"overrider.toml",
	".overrider.toml",
	".config/overrider.toml",
];

/// Identifier of the runtime data object read by generated expressions.
pub const DEFAULT_DATA_OBJECT: &str = "d";

/// Runtime helper that decides whether an override value is defined.
pub const DEFAULT_DEFINED_HELPER: &str = "DS.e";

/// Legacy attribute that marks a node as hidden by default.
pub const DEFAULT_UNRENDER_ATTRIBUTE: &str = "data-ss-unrender";

/// Attribute receiving raw inner content in the output grammar.
pub const DEFAULT_RAW_CONTENT_ATTRIBUTE: &str = "dangerouslySetInnerHTML";

/// Control-flow tags reserved by the output grammar. Children of these tags
/// already sit in an expression context.
pub const DEFAULT_CONTROL_FLOW_TAGS: [&str; 4] =
	["desechIf", "desechFor", "desechIfFor", "desechForIf"];

/// Configuration loaded from an `overrider.toml` file.
///
/// Every field is optional and falls back to the defaults expected by the
/// rendering runtime:
///
/// ```toml
/// data_object = "d"
/// defined_helper = "DS.e"
/// control_flow_tags = ["desechIf", "desechFor", "desechIfFor", "desechForIf"]
/// unrender_attribute = "data-ss-unrender"
/// raw_content_attribute = "dangerouslySetInnerHTML"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OverrideConfig {
	/// Identifier of the runtime data object (`d.<key>`).
	pub data_object: String,
	/// Helper called to test whether a runtime value is defined.
	pub defined_helper: String,
	/// Tags whose children must not be wrapped in an extra brace pair.
	/// Compared case-insensitively.
	pub control_flow_tags: Vec<String>,
	/// Legacy attribute that requests the unrender override directly on the
	/// node.
	pub unrender_attribute: String,
	/// Attribute used to inject overridden inner content.
	pub raw_content_attribute: String,
}

impl Default for OverrideConfig {
	fn default() -> Self {
		Self {
			data_object: DEFAULT_DATA_OBJECT.to_string(),
			defined_helper: DEFAULT_DEFINED_HELPER.to_string(),
			control_flow_tags: DEFAULT_CONTROL_FLOW_TAGS
				.iter()
				.map(ToString::to_string)
				.collect(),
			unrender_attribute: DEFAULT_UNRENDER_ATTRIBUTE.to_string(),
			raw_content_attribute: DEFAULT_RAW_CONTENT_ATTRIBUTE.to_string(),
		}
	}
}

impl OverrideConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> OverrideResult<Option<OverrideConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		Self::from_toml(&content).map(Some)
	}

	/// Load the discovered config, or the defaults when none exists.
	pub fn load_or_default(root: &Path) -> OverrideResult<OverrideConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse a config from TOML source.
	pub fn from_toml(content: &str) -> OverrideResult<OverrideConfig> {
		toml::from_str(content).map_err(|e| OverrideError::ConfigParse(e.to_string()))
	}

	/// Returns true if `tag` names one of the configured control-flow tags.
	pub fn is_control_flow_tag(&self, tag: &str) -> bool {
		self.control_flow_tags
			.iter()
			.any(|candidate| candidate.eq_ignore_ascii_case(tag))
	}

	/// The runtime lookup expression for `key`, e.g. `d.e0a1AttrValue`.
	pub fn lookup(&self, key: &str) -> String {
		format!("{}.{key}", self.data_object)
	}

	/// The "defined" predicate applied to `expr`, e.g. `DS.e(d.e0a1Inner)`.
	pub fn defined(&self, expr: &str) -> String {
		format!("{}({expr})", self.defined_helper)
	}
}
