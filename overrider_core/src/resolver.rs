use std::collections::BTreeSet;

use crate::OverrideError;
use crate::OverrideRegistry;
use crate::OverrideResult;
use crate::Ref;
use crate::lexer::Segment;
use crate::lexer::tokenize;
use crate::markers::MARKER_SENTINEL;
use crate::markers::Marker;
use crate::markers::MarkerFamily;

/// Resolve every marker in fully serialized `text` using `registry`.
///
/// Runs the attribute, inner and unrender substitutions, then fails if any
/// marker text survived. Registry entries that no marker consumed are
/// reported as warnings since their nodes may have been dropped before
/// serialization.
pub fn resolve_markers(text: &str, registry: &OverrideRegistry) -> OverrideResult<String> {
	let mut consumed = BTreeSet::new();

	let text = substitute(text, registry, MarkerFamily::Attribute, &mut consumed)?;
	let text = substitute(&text, registry, MarkerFamily::Inner, &mut consumed)?;
	let text = substitute(&text, registry, MarkerFamily::Unrender, &mut consumed)?;

	ensure_resolved(&text)?;

	for reference in registry.code.keys() {
		if !consumed.contains(reference) {
			tracing::warn!(
				reference = %reference,
				"override entry was not consumed by any marker"
			);
		}
	}

	tracing::debug!(nodes = consumed.len(), "resolved override markers");
	Ok(text)
}

/// Replace `__OVERRIDE_ATTR__<ref>__<name>=""` with the generated attribute
/// code.
pub fn resolve_attribute_markers(
	text: &str,
	registry: &OverrideRegistry,
) -> OverrideResult<String> {
	substitute(text, registry, MarkerFamily::Attribute, &mut BTreeSet::new())
}

/// Replace the raw-content marker value with the generated inner code.
pub fn resolve_inner_markers(
	text: &str,
	registry: &OverrideRegistry,
) -> OverrideResult<String> {
	substitute(text, registry, MarkerFamily::Inner, &mut BTreeSet::new())
}

/// Replace the wrapper open and close tags with the unrender fragments.
pub fn resolve_unrender_markers(
	text: &str,
	registry: &OverrideRegistry,
) -> OverrideResult<String> {
	substitute(text, registry, MarkerFamily::Unrender, &mut BTreeSet::new())
}

/// Fail if any marker text is still present.
pub fn ensure_resolved(text: &str) -> OverrideResult<()> {
	let Some(start) = text.find(MARKER_SENTINEL) else {
		return Ok(());
	};

	let end = text[start..]
		.find(|ch: char| ch.is_whitespace() || matches!(ch, '"' | '>' | '='))
		.map_or(text.len(), |offset| start + offset);

	Err(OverrideError::UnresolvedMarker {
		marker: text[start..end].to_string(),
	})
}

fn substitute(
	text: &str,
	registry: &OverrideRegistry,
	family: MarkerFamily,
	consumed: &mut BTreeSet<Ref>,
) -> OverrideResult<String> {
	let mut result = String::with_capacity(text.len());

	for segment in tokenize(text) {
		let marker = match &segment {
			Segment::Marker { marker, .. } if marker.family() == family => marker,
			_ => {
				result.push_str(segment.source());
				continue;
			}
		};

		let replacement = match marker {
			Marker::Attribute { reference, name } => registry.attribute_code(reference, name)?,
			Marker::Inner { reference } => {
				result.push('=');
				registry.inner_code(reference)?
			}
			Marker::UnrenderOpen { reference } => {
				registry.unrender_wrapper(reference)?.start.as_str()
			}
			Marker::UnrenderClose { reference } => {
				registry.unrender_wrapper(reference)?.end.as_str()
			}
		};

		tracing::trace!(marker = segment.source(), "substituting override marker");
		result.push_str(replacement);
		consumed.insert(marker.reference().clone());
	}

	Ok(result)
}
