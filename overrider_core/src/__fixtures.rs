use crate::OverrideConfig;
use crate::OverrideSpec;
use crate::Ref;
use crate::markup::Document;
use crate::markup::NodeId;

pub fn reference(value: &str) -> Ref {
	Ref::new(value).unwrap_or_else(|e| panic!("invalid fixture ref `{value}`: {e}"))
}

pub fn spec(json: &str) -> OverrideSpec {
	OverrideSpec::from_json(json).unwrap_or_else(|e| panic!("invalid fixture spec: {e}"))
}

pub fn config() -> OverrideConfig {
	OverrideConfig::default()
}

/// `<div><input type="text" value="hi"/></div>`
pub fn input_document() -> (Document, NodeId) {
	let mut doc = Document::new();
	let root = doc.element(None, "div", &[]);
	let input = doc.element(Some(root), "input", &[("type", "text"), ("value", "hi")]);
	(doc, input)
}

/// `<{parent}><section>Hi</section></{parent}>`
pub fn section_document(parent: &str) -> (Document, NodeId) {
	let mut doc = Document::new();
	let root = doc.element(None, parent, &[]);
	let section = doc.element(Some(root), "section", &[]);
	doc.text(section, "Hi");
	(doc, section)
}

/// `<main><a class="link" href="/home">Home</a></main>`
pub fn link_document() -> (Document, NodeId) {
	let mut doc = Document::new();
	let root = doc.element(None, "main", &[]);
	let link = doc.element(Some(root), "a", &[("class", "link"), ("href", "/home")]);
	doc.text(link, "Home");
	(doc, link)
}
