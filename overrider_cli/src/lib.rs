use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Resolve override markers in serialized markup into runtime-conditional JSX.",
	long_about = "overrider is the second pass of the override pipeline. The annotation pass \
	              writes `__OVERRIDE_*` markers into markup and records generated code in a \
	              registry. This tool reads the serialized markup and the registry and \
	              substitutes every marker.\n\nQuick start:\n  overrider resolve page.html \
	              --registry page.registry.json\n  overrider keys e0a1 value"
)]
pub struct OverriderCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root used for `overrider.toml` discovery.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Resolve every override marker in a serialized document.
	///
	/// Reads the document produced by the annotation pass together with the
	/// JSON registry written alongside it. Exits with status 2 when a marker
	/// has no registry entry or when marker text survives resolution.
	Resolve {
		/// The serialized markup containing override markers.
		input: PathBuf,

		/// The JSON registry recorded during annotation.
		#[arg(long, short)]
		registry: PathBuf,

		/// Write the resolved code to this file instead of stdout.
		#[arg(long, short)]
		output: Option<PathBuf>,
	},
	/// Print the runtime data keys used for an overridden name.
	///
	/// Shows the value key and the deletion key together with the lookup
	/// expression generated for each.
	Keys {
		/// The node ref, e.g. `e0a1`.
		reference: String,

		/// The attribute, property or class name.
		name: String,

		/// Derive class keys instead of attribute keys.
		#[arg(long, default_value_t = false)]
		class: bool,
	},
}
