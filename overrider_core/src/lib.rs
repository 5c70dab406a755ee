//! `overrider_core` turns design-time override declarations into
//! runtime-conditional JSX. Overrides say which attributes, tags, components,
//! inner content, visibility, classes and properties of a node should be
//! decided at render time by a runtime data object (`d`).
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markup tree + OverrideSpec per node
//!   → Annotator (pass 1: mutates nodes, writes markers, fills the registry)
//!   → Serializer (external: tree → text, markers survive verbatim)
//!   → Resolver (pass 2: lexes markers, substitutes generated code)
//!   → Emission stages (class and property overrides against resolved code)
//! ```
//!
//! ## Modules
//!
//! - [`annotator`]: Pass 1. Injects attribute, tag, component, inner and unrender overrides into a node.
//! - [`resolver`]: Pass 2. Resolves attribute, inner and unrender markers in serialized text.
//! - [`stages`]: Class and property overrides applied during code emission.
//! - [`markup`]: The [`markup::MarkupTree`] API and an arena-backed reference [`markup::Document`].
//! - [`names`]: Bidirectional table between markup and structural attribute spellings.
//! - [`markers`]: The marker grammar shared by both passes.
//! - [`config`]: Configuration loading from `overrider.toml`.
//!
//! ## Key Types
//!
//! - [`Ref`]: A validated per-node identifier (`e0[a-z0-9]+`).
//! - [`OverrideSpec`]: The override declaration attached to a node.
//! - [`OverrideRegistry`]: Defaults and generated code keyed by ref, shared by both passes.
//! - [`Compilation`]: A single document compilation that enforces annotate-then-resolve ordering.
//! - [`ResolvedDocument`]: Resolved code plus the registry for emission and packaging.
//!
//! ## Quick Start
//!
//! ```rust
//! use overrider_core::markup::Document;
//! use overrider_core::Compilation;
//! use overrider_core::OverrideConfig;
//! use overrider_core::OverrideSpec;
//! use overrider_core::Ref;
//!
//! let mut doc = Document::new();
//! let root = doc.element(None, "div", &[]);
//! let input = doc.element(Some(root), "input", &[("type", "text"), ("value", "hi")]);
//!
//! let reference = Ref::new("e0a1")?;
//! let spec = OverrideSpec::from_json(r#"{ "attributes": { "value": "update" } }"#)?;
//!
//! let mut compilation = Compilation::new(OverrideConfig::default());
//! compilation.annotate(&mut doc, input, &reference, &spec);
//! let resolved = compilation.resolve(&doc.to_markup())?;
//!
//! assert_eq!(
//! 	resolved.code,
//! 	"<div><input type=\"text\" value={DS.e(d.e0a1AttrValue) ? d.e0a1AttrValue : 'hi'}/></div>"
//! );
//! # Ok::<(), overrider_core::OverrideError>(())
//! ```

pub use annotator::inject_overrides;
pub use codegen::*;
pub use compilation::*;
pub use config::*;
pub use error::*;
pub use overrides::*;
pub use reference::*;
pub use registry::*;
pub use resolver::*;

pub mod annotator;
mod codegen;
mod compilation;
pub mod config;
#[allow(unused_assignments)]
mod error;
pub mod escape;
pub(crate) mod lexer;
pub mod markers;
pub mod markup;
pub mod names;
mod overrides;
mod reference;
mod registry;
pub mod resolver;
pub mod stages;

#[cfg(test)]
mod __fixtures;
