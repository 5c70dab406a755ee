use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum OverrideError {
	#[error(transparent)]
	#[diagnostic(code(overrider::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(overrider::config_parse),
		help("check that overrider.toml is valid TOML")
	)]
	ConfigParse(String),

	#[error("failed to parse override registry: {0}")]
	#[diagnostic(
		code(overrider::registry_parse),
		help("the registry must be the JSON written by `OverrideRegistry::to_json`")
	)]
	RegistryParse(String),

	#[error("failed to parse override spec: {0}")]
	#[diagnostic(code(overrider::spec_parse))]
	SpecParse(String),

	#[error("unsupported override kind: `{0}`")]
	#[diagnostic(
		code(overrider::unsupported_override_kind),
		help("supported kinds: update, delete, update-delete")
	)]
	UnsupportedOverrideKind(String),

	#[error("unsupported class action: `{0}`")]
	#[diagnostic(
		code(overrider::unsupported_class_action),
		help("supported class actions: create, delete")
	)]
	UnsupportedClassAction(String),

	#[error("malformed ref: `{0}`")]
	#[diagnostic(
		code(overrider::malformed_ref),
		help("refs start with `e0` followed by lowercase letters or digits, e.g. `e0a1b2`")
	)]
	MalformedRef(String),

	#[error("unresolved override marker `{marker}` left in output")]
	#[diagnostic(
		code(overrider::unresolved_marker),
		help("every marker must be produced by the annotator for a well-formed ref")
	)]
	UnresolvedMarker { marker: String },

	#[error("no registry entry `{field}` for ref `{reference}`")]
	#[diagnostic(
		code(overrider::missing_registry_entry),
		help("annotate every node before resolving the serialized document")
	)]
	MissingRegistryEntry { reference: String, field: String },
}

pub type OverrideResult<T> = Result<T, OverrideError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
