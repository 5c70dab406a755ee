use crate::OverrideConfig;
use crate::OverrideKind;
use crate::OverrideRegistry;
use crate::OverrideSpec;
use crate::Ref;
use crate::codegen;
use crate::markers;
use crate::markup::MarkupTree;
use crate::names;

/// Inject every override declared in `spec` into `node`.
///
/// Attributes go first, then tag, component, inner content and unrender, in
/// that order. Each step is a no-op when its part of the spec is absent. The
/// node is mutated in place and `registry` gains entries for `reference`.
pub fn inject_overrides<T: MarkupTree>(
	tree: &mut T,
	node: T::Node,
	reference: &Ref,
	spec: &OverrideSpec,
	registry: &mut OverrideRegistry,
	config: &OverrideConfig,
) {
	tracing::debug!(reference = %reference, "injecting overrides");

	inject_attributes(tree, node, reference, spec, registry, config);
	inject_tag(tree, node, reference, spec, registry, config);
	inject_component(tree, node, reference, spec, registry, config);
	inject_inner(tree, node, reference, spec, registry, config);
	inject_unrender(tree, node, reference, spec, registry, config);
}

pub fn inject_attributes<T: MarkupTree>(
	tree: &mut T,
	node: T::Node,
	reference: &Ref,
	spec: &OverrideSpec,
	registry: &mut OverrideRegistry,
	config: &OverrideConfig,
) {
	for (name, kind) in &spec.attributes {
		inject_attribute(tree, node, reference, name, *kind, registry, config);
	}
}

/// Replace one attribute with its marker. `name` uses the structural
/// spelling.
pub fn inject_attribute<T: MarkupTree>(
	tree: &mut T,
	node: T::Node,
	reference: &Ref,
	name: &str,
	kind: OverrideKind,
	registry: &mut OverrideRegistry,
	config: &OverrideConfig,
) {
	let exists = names::attribute_exists(tree, node, name);
	let value = names::attribute_value(tree, node, name);
	let code = codegen::attribute_code(config, reference, name, value, kind, exists, false);

	tracing::trace!(
		reference = %reference,
		attribute = name,
		%kind,
		exists,
		"attribute override"
	);
	registry
		.code_mut(reference)
		.attributes
		.insert(name.to_string(), code);

	names::remove_attribute(tree, node, name);
	tree.set_attribute(node, &markers::attribute_marker(reference, name), "");
}

pub fn inject_tag<T: MarkupTree>(
	tree: &mut T,
	node: T::Node,
	reference: &Ref,
	spec: &OverrideSpec,
	registry: &mut OverrideRegistry,
	config: &OverrideConfig,
) {
	if !spec.tag {
		return;
	}

	registry.defaults_mut(reference).tag = Some(tree.tag(node).to_ascii_lowercase());
	tree.set_tag(node, &codegen::tag_expression(config, reference));
}

/// Swap a component for another one at runtime.
pub fn inject_component<T: MarkupTree>(
	tree: &mut T,
	node: T::Node,
	reference: &Ref,
	spec: &OverrideSpec,
	registry: &mut OverrideRegistry,
	config: &OverrideConfig,
) {
	if !spec.component {
		return;
	}

	registry.defaults_mut(reference).component = Some(tree.tag(node).to_string());
	tree.set_tag(node, &codegen::component_expression(config, reference));
}

pub fn inject_inner<T: MarkupTree>(
	tree: &mut T,
	node: T::Node,
	reference: &Ref,
	spec: &OverrideSpec,
	registry: &mut OverrideRegistry,
	config: &OverrideConfig,
) {
	if !spec.inner {
		return;
	}

	let default_markup = tree.inner_markup(node);
	registry.code_mut(reference).inner =
		Some(codegen::inner_code(config, reference, &default_markup));

	tree.clear_inner(node);
	tree.set_attribute(
		node,
		&config.raw_content_attribute,
		&markers::inner_marker(reference),
	);
}

/// Wrap the node so it can be removed at runtime.
///
/// Runs for an explicit `unrender` override and for nodes carrying the legacy
/// unrender attribute. Only the legacy attribute records a hidden default.
pub fn inject_unrender<T: MarkupTree>(
	tree: &mut T,
	node: T::Node,
	reference: &Ref,
	spec: &OverrideSpec,
	registry: &mut OverrideRegistry,
	config: &OverrideConfig,
) {
	let legacy = tree.has_attribute(node, &config.unrender_attribute);
	if !spec.unrender && !legacy {
		return;
	}

	if legacy {
		tree.remove_attribute(node, &config.unrender_attribute);
		registry.defaults_mut(reference).unrender = Some(true);
	}

	let parent_tag = tree.parent(node).map(|parent| tree.tag(parent).to_string());
	registry.code_mut(reference).unrender = Some(codegen::unrender_wrapper(
		config,
		reference,
		parent_tag.as_deref(),
	));

	tree.wrap(node, &markers::unrender_marker_tag(reference));
}
