use crate::Ref;

/// Prefix of the placeholder attribute written for attribute overrides.
pub const ATTRIBUTE_MARKER_PREFIX: &str = "__OVERRIDE_ATTR__";
/// Prefix of the raw-content attribute value written for inner overrides.
pub const INNER_MARKER_PREFIX: &str = "__OVERRIDE_INNER__";
/// Prefix of the wrapper element tag written for unrender overrides.
pub const UNRENDER_MARKER_PREFIX: &str = "__OVERRIDE_UNRENDER__";
/// Shared prefix of every marker. Any occurrence left after resolution is an
/// integrity failure.
pub const MARKER_SENTINEL: &str = "__OVERRIDE_";

/// `__OVERRIDE_ATTR__<ref>__<name>`, serialized as `...=""`.
pub fn attribute_marker(reference: &Ref, name: &str) -> String {
	format!("{ATTRIBUTE_MARKER_PREFIX}{reference}__{name}")
}

/// `__OVERRIDE_INNER__<ref>`
pub fn inner_marker(reference: &Ref) -> String {
	format!("{INNER_MARKER_PREFIX}{reference}")
}

/// `__OVERRIDE_UNRENDER__<ref>`
pub fn unrender_marker_tag(reference: &Ref) -> String {
	format!("{UNRENDER_MARKER_PREFIX}{reference}")
}

/// The three disjoint marker families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerFamily {
	Attribute,
	Inner,
	Unrender,
}

/// A marker found in serialized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
	/// `__OVERRIDE_ATTR__<ref>__<name>=""`
	Attribute { reference: Ref, name: String },
	/// `="__OVERRIDE_INNER__<ref>"`, the value of the raw-content attribute.
	Inner { reference: Ref },
	/// `<__OVERRIDE_UNRENDER__<ref>>`
	UnrenderOpen { reference: Ref },
	/// `</__OVERRIDE_UNRENDER__<ref>>`
	UnrenderClose { reference: Ref },
}

impl Marker {
	pub fn family(&self) -> MarkerFamily {
		match self {
			Self::Attribute { .. } => MarkerFamily::Attribute,
			Self::Inner { .. } => MarkerFamily::Inner,
			Self::UnrenderOpen { .. } | Self::UnrenderClose { .. } => MarkerFamily::Unrender,
		}
	}

	pub fn reference(&self) -> &Ref {
		match self {
			Self::Attribute { reference, .. }
			| Self::Inner { reference }
			| Self::UnrenderOpen { reference }
			| Self::UnrenderClose { reference } => reference,
		}
	}
}
