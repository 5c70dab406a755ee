use crate::OverrideConfig;
use crate::OverrideRegistry;
use crate::OverrideResult;
use crate::OverrideSpec;
use crate::Ref;
use crate::annotator::inject_overrides;
use crate::markup::MarkupTree;
use crate::resolver::resolve_markers;
use crate::stages;

/// One document compilation.
///
/// Nodes are annotated while the session is open. [`Compilation::resolve`]
/// consumes the session, so no node can be annotated once resolution has
/// started.
#[derive(Debug, Clone, Default)]
pub struct Compilation {
	config: OverrideConfig,
	registry: OverrideRegistry,
}

impl Compilation {
	pub fn new(config: OverrideConfig) -> Self {
		Self {
			config,
			registry: OverrideRegistry::new(),
		}
	}

	pub fn config(&self) -> &OverrideConfig {
		&self.config
	}

	pub fn registry(&self) -> &OverrideRegistry {
		&self.registry
	}

	/// Run the annotation pass for one overridden node.
	pub fn annotate<T: MarkupTree>(
		&mut self,
		tree: &mut T,
		node: T::Node,
		reference: &Ref,
		spec: &OverrideSpec,
	) {
		inject_overrides(tree, node, reference, spec, &mut self.registry, &self.config);
	}

	/// Resolve the serialized document and close the session.
	pub fn resolve(self, text: &str) -> OverrideResult<ResolvedDocument> {
		let code = resolve_markers(text, &self.registry)?;

		Ok(ResolvedDocument {
			code,
			config: self.config,
			registry: self.registry,
		})
	}
}

/// The output of a compilation, ready for code emission and packaging.
#[derive(Debug, Clone)]
pub struct ResolvedDocument {
	/// The resolved code with every marker substituted.
	pub code: String,
	pub config: OverrideConfig,
	pub registry: OverrideRegistry,
}

impl ResolvedDocument {
	pub fn override_existing_property(
		&self,
		reference: &Ref,
		name: &str,
		value: Option<&str>,
		spec: &OverrideSpec,
	) -> Option<String> {
		stages::override_existing_property(&self.config, reference, name, value, spec)
	}

	pub fn override_new_properties(
		&self,
		reference: &Ref,
		existing: &[&str],
		spec: &OverrideSpec,
		output: &mut Vec<String>,
	) {
		stages::override_new_properties(&self.config, reference, existing, spec, output);
	}

	/// Generate class fragments and record them for `reference`.
	pub fn override_classes(
		&mut self,
		reference: &Ref,
		static_classes: &mut Vec<String>,
		spec: &OverrideSpec,
	) -> Vec<String> {
		let fragments = stages::override_classes(&self.config, reference, static_classes, spec);

		if !fragments.is_empty() {
			let code = self.registry.code_mut(reference);
			for (name, fragment) in spec.classes.keys().zip(&fragments) {
				code.classes.insert(name.clone(), fragment.clone());
			}
		}

		fragments
	}
}
