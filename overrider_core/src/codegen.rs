use serde::Deserialize;
use serde::Serialize;

use crate::ClassAction;
use crate::OverrideConfig;
use crate::OverrideKind;
use crate::Ref;
use crate::escape::escape_quoted;

/// Distinguishes the runtime keys of attribute and class overrides so an
/// attribute and a class with the same name never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
	Attribute,
	Class,
}

impl KeyKind {
	pub fn tag(self) -> &'static str {
		match self {
			Self::Attribute => "Attr",
			Self::Class => "Cls",
		}
	}
}

/// Runtime data keys for one overridden name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keys {
	/// Key holding the replacement value.
	pub default: String,
	/// Key holding the deletion flag.
	pub delete: String,
}

/// Start and end fragments wrapped around an unrenderable node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnrenderWrapper {
	pub start: String,
	pub end: String,
}

/// Derive the runtime keys for `name` on the node identified by `reference`.
pub fn keys(reference: &Ref, name: &str, kind: KeyKind) -> Keys {
	let label = pascal_case(name);
	let tag = kind.tag();

	Keys {
		default: format!("{reference}{tag}{label}"),
		delete: format!("{reference}{tag}del{label}"),
	}
}

/// `data-foo` → `DataFoo`, `readOnly` → `ReadOnly`. Hyphens separate words;
/// underscores are kept and other non-identifier characters are dropped.
pub fn pascal_case(name: &str) -> String {
	name.split('-')
		.map(|word| {
			word.chars()
				.filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
				.collect::<String>()
		})
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
				None => String::new(),
			}
		})
		.collect()
}

/// Strip every character outside `[A-Za-z0-9-_]`.
pub fn sanitize_name(name: &str) -> String {
	name.chars()
		.filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '_')
		.collect()
}

/// Generate the attribute (or property) code for one override.
///
/// `value` is the static value before the override; an absent value is
/// treated as empty. `exists` only matters for [`OverrideKind::Update`]: a
/// missing attribute is spread in conditionally, an existing one is always
/// assigned with its static value as fallback.
pub fn attribute_code(
	config: &OverrideConfig,
	reference: &Ref,
	name: &str,
	value: Option<&str>,
	kind: OverrideKind,
	exists: bool,
	sanitize: bool,
) -> String {
	let keys = keys(reference, name, KeyKind::Attribute);
	let value = escape_quoted(value.unwrap_or_default(), '\'');
	let name = if sanitize {
		sanitize_name(name)
	} else {
		name.to_string()
	};

	let lookup = config.lookup(&keys.default);
	let defined = config.defined(&lookup);
	let deleted = config.lookup(&keys.delete);

	match (kind, exists) {
		(OverrideKind::Update, false) => format!("{{...{defined} && {{'{name}': {lookup}}}}}"),
		(OverrideKind::Update, true) => {
			format!("{name}={{{defined} ? {lookup} : '{value}'}}")
		}
		(OverrideKind::Delete, _) => format!("{{...!{deleted} && {{'{name}': '{value}'}}}}"),
		(OverrideKind::UpdateDelete, _) => {
			format!("{{...!{deleted} && {{'{name}': {defined} ? {lookup} : '{value}'}}}}")
		}
	}
}

/// Generate the class string fragment for one class override.
pub fn class_code(
	config: &OverrideConfig,
	reference: &Ref,
	name: &str,
	action: ClassAction,
) -> String {
	let keys = keys(reference, name, KeyKind::Class);

	match action {
		ClassAction::Create => format!("${{{} || ''}}", config.lookup(&keys.default)),
		ClassAction::Delete => {
			let name = escape_quoted(name, '\'');
			format!("${{{} ? '' : '{name}'}}", config.lookup(&keys.delete))
		}
	}
}

/// Generate the raw-content assignment value for an inner-content override.
pub fn inner_code(config: &OverrideConfig, reference: &Ref, default_markup: &str) -> String {
	let lookup = config.lookup(&format!("{reference}Inner"));
	let defined = config.defined(&lookup);
	let default_markup = escape_quoted(default_markup, '`');

	format!("{{{{__html: {defined} ? {lookup} : `{default_markup}`}}}}")
}

/// The tag expression that replaces an overridden tag.
pub fn tag_expression(config: &OverrideConfig, reference: &Ref) -> String {
	config.lookup(&format!("{reference}Tag"))
}

/// The tag expression that replaces an overridden component.
pub fn component_expression(config: &OverrideConfig, reference: &Ref) -> String {
	config.lookup(&format!("{reference}Component"))
}

/// Build the wrapper for an unrenderable node.
///
/// Inside a control-flow parent the expression context already exists, so
/// the wrapper carries no braces of its own.
pub fn unrender_wrapper(
	config: &OverrideConfig,
	reference: &Ref,
	parent_tag: Option<&str>,
) -> UnrenderWrapper {
	let flag = config.lookup(&format!("{reference}Unrender"));

	if parent_tag.is_some_and(|tag| config.is_control_flow_tag(tag)) {
		UnrenderWrapper {
			start: format!("!{flag} && "),
			end: String::new(),
		}
	} else {
		UnrenderWrapper {
			start: format!("{{!{flag} && "),
			end: "}".to_string(),
		}
	}
}
