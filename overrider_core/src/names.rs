use crate::markup::MarkupTree;

/// Markup spelling paired with its structural (DOM property) spelling.
///
/// Override specs always name attributes by their structural spelling
/// (`readOnly`, `defaultChecked`), while the tree may still carry the markup
/// spelling (`readonly`, `checked`).
pub const ATTRIBUTE_NAME_TABLE: [(&str, &str); 24] = [
	("accept-charset", "acceptCharset"),
	("accesskey", "accessKey"),
	("autocomplete", "autoComplete"),
	("autofocus", "autoFocus"),
	("autoplay", "autoPlay"),
	("checked", "defaultChecked"),
	("class", "className"),
	("colspan", "colSpan"),
	("contenteditable", "contentEditable"),
	("crossorigin", "crossOrigin"),
	("datetime", "dateTime"),
	("enctype", "encType"),
	("for", "htmlFor"),
	("formaction", "formAction"),
	("http-equiv", "httpEquiv"),
	("maxlength", "maxLength"),
	("minlength", "minLength"),
	("novalidate", "noValidate"),
	("readonly", "readOnly"),
	("rowspan", "rowSpan"),
	("selected", "defaultSelected"),
	("spellcheck", "spellCheck"),
	("srcset", "srcSet"),
	("tabindex", "tabIndex"),
];

/// The markup spelling for a structural attribute name, if the two differ.
pub fn markup_name(structural: &str) -> Option<&'static str> {
	ATTRIBUTE_NAME_TABLE
		.iter()
		.find(|(_, candidate)| *candidate == structural)
		.map(|(markup, _)| *markup)
}

/// The structural spelling for a markup attribute name, if the two differ.
pub fn structural_name(markup: &str) -> Option<&'static str> {
	ATTRIBUTE_NAME_TABLE
		.iter()
		.find(|(candidate, _)| *candidate == markup)
		.map(|(_, structural)| *structural)
}

/// Returns true if the attribute is present under either spelling.
pub fn attribute_exists<T: MarkupTree>(tree: &T, node: T::Node, name: &str) -> bool {
	tree.has_attribute(node, name)
		|| markup_name(name).is_some_and(|markup| tree.has_attribute(node, markup))
}

/// The attribute value, preferring the markup spelling when it is present.
pub fn attribute_value<'t, T: MarkupTree>(
	tree: &'t T,
	node: T::Node,
	name: &str,
) -> Option<&'t str> {
	markup_name(name)
		.and_then(|markup| tree.attribute(node, markup))
		.or_else(|| tree.attribute(node, name))
}

/// Remove the attribute under both spellings.
pub fn remove_attribute<T: MarkupTree>(tree: &mut T, node: T::Node, name: &str) {
	tree.remove_attribute(node, name);
	if let Some(markup) = markup_name(name) {
		tree.remove_attribute(node, markup);
	}
}
