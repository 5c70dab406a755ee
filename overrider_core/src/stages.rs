use crate::OverrideConfig;
use crate::OverrideSpec;
use crate::Ref;
use crate::codegen;

/// Override a property that already exists on a component.
///
/// Returns `None` when no override is declared for `name`. Property names are
/// always sanitized since they end up in generated identifiers.
pub fn override_existing_property(
	config: &OverrideConfig,
	reference: &Ref,
	name: &str,
	value: Option<&str>,
	spec: &OverrideSpec,
) -> Option<String> {
	let kind = spec.properties.get(name)?;
	Some(codegen::attribute_code(
		config, reference, name, value, *kind, true, true,
	))
}

/// Append code for every declared property override that is not among
/// `existing`, so properties missing from the static markup can be added at
/// runtime.
pub fn override_new_properties(
	config: &OverrideConfig,
	reference: &Ref,
	existing: &[&str],
	spec: &OverrideSpec,
	output: &mut Vec<String>,
) {
	for (name, kind) in &spec.properties {
		if existing.contains(&name.as_str()) {
			continue;
		}

		output.push(codegen::attribute_code(
			config, reference, name, None, *kind, false, true,
		));
	}
}

/// Generate the class fragments for every class override and drop the
/// overridden tokens from the static class list.
pub fn override_classes(
	config: &OverrideConfig,
	reference: &Ref,
	static_classes: &mut Vec<String>,
	spec: &OverrideSpec,
) -> Vec<String> {
	let mut fragments = Vec::with_capacity(spec.classes.len());

	for (name, action) in &spec.classes {
		fragments.push(codegen::class_code(config, reference, name, *action));
		static_classes.retain(|class| class != name);
	}

	fragments
}
