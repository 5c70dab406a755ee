use logos::Logos;

use crate::Ref;
use crate::markers::ATTRIBUTE_MARKER_PREFIX;
use crate::markers::INNER_MARKER_PREFIX;
use crate::markers::Marker;
use crate::markers::UNRENDER_MARKER_PREFIX;

/// Raw tokens produced by logos for flat tokenization of serialized markup.
/// Anything that is not a marker is plain text.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[regex(r#"__OVERRIDE_ATTR__e0[a-z0-9]+__[^=\s"'<>/]+="""#)]
	Attribute,
	#[regex(r#"="__OVERRIDE_INNER__e0[a-z0-9]+""#)]
	Inner,
	#[regex(r"<__OVERRIDE_UNRENDER__e0[a-z0-9]+>")]
	UnrenderOpen,
	#[regex(r"</__OVERRIDE_UNRENDER__e0[a-z0-9]+>")]
	UnrenderClose,
	#[regex(r"[^_<=]+")]
	Text,
}

/// A slice of serialized text: either plain text or a recognized marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
	Text(&'a str),
	Marker { marker: Marker, source: &'a str },
}

impl<'a> Segment<'a> {
	/// The exact source text of the segment.
	pub fn source(&self) -> &'a str {
		match self {
			Segment::Text(source) | Segment::Marker { source, .. } => source,
		}
	}
}

/// Split `source` into text and marker segments. Concatenating every
/// segment's source reproduces the input.
pub fn tokenize(source: &str) -> Vec<Segment<'_>> {
	let mut segments = Vec::new();
	let mut text_start = 0;

	for (result, span) in RawToken::lexer(source).spanned() {
		let slice = &source[span.clone()];
		let marker = match result {
			Ok(RawToken::Attribute) => parse_attribute(slice),
			Ok(RawToken::Inner) => parse_inner(slice),
			Ok(RawToken::UnrenderOpen) => parse_unrender(slice, "<"),
			Ok(RawToken::UnrenderClose) => parse_unrender(slice, "</"),
			// Unrecognized bytes are plain text.
			Ok(RawToken::Text) | Err(()) => None,
		};

		let Some(marker) = marker else {
			continue;
		};

		if text_start < span.start {
			segments.push(Segment::Text(&source[text_start..span.start]));
		}
		segments.push(Segment::Marker {
			marker,
			source: slice,
		});
		text_start = span.end;
	}

	if text_start < source.len() {
		segments.push(Segment::Text(&source[text_start..]));
	}

	segments
}

fn parse_attribute(slice: &str) -> Option<Marker> {
	let rest = slice
		.strip_prefix(ATTRIBUTE_MARKER_PREFIX)?
		.strip_suffix("=\"\"")?;
	let (reference, name) = rest.split_once("__")?;

	Some(Marker::Attribute {
		reference: Ref::new(reference).ok()?,
		name: name.to_string(),
	})
}

fn parse_inner(slice: &str) -> Option<Marker> {
	let reference = slice
		.strip_prefix("=\"")?
		.strip_prefix(INNER_MARKER_PREFIX)?
		.strip_suffix('"')?;

	Some(Marker::Inner {
		reference: Ref::new(reference).ok()?,
	})
}

fn parse_unrender(slice: &str, open: &str) -> Option<Marker> {
	let reference = slice
		.strip_prefix(open)?
		.strip_prefix(UNRENDER_MARKER_PREFIX)?
		.strip_suffix('>')?;
	let reference = Ref::new(reference).ok()?;

	Some(if open == "<" {
		Marker::UnrenderOpen { reference }
	} else {
		Marker::UnrenderClose { reference }
	})
}
