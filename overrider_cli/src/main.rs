use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use overrider_cli::Commands;
use overrider_cli::OverriderCli;
use overrider_core::KeyKind;
use overrider_core::OverrideConfig;
use overrider_core::OverrideError;
use overrider_core::OverrideRegistry;
use overrider_core::Ref;
use overrider_core::keys;
use overrider_core::resolve_markers;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = OverriderCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	let result = match &args.command {
		Some(Commands::Resolve {
			input,
			registry,
			output,
		}) => run_resolve(&args, input, registry, output.as_deref()),
		Some(Commands::Keys {
			reference,
			name,
			class,
		}) => run_keys(&args, reference, name, *class),
		None => {
			eprintln!("No subcommand specified. Run `overrider --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<OverrideError>() {
			Ok(override_err) => {
				let report: miette::Report = (*override_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Logs go to stderr so resolved code on stdout stays clean. `RUST_LOG`
/// overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();
}

fn resolve_root(args: &OverriderCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &OverriderCli) -> Result<OverrideConfig, OverrideError> {
	let root = resolve_root(args);
	let config = OverrideConfig::load_or_default(&root)?;

	match OverrideConfig::resolve_path(&root) {
		Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
		None => tracing::debug!(root = %root.display(), "no config file found, using defaults"),
	}

	Ok(config)
}

fn run_resolve(
	args: &OverriderCli,
	input: &Path,
	registry_path: &Path,
	output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
	// Fail early on an invalid project config.
	load_config(args)?;

	let text = std::fs::read_to_string(input).map_err(OverrideError::from)?;
	let registry_json = std::fs::read_to_string(registry_path).map_err(OverrideError::from)?;
	let registry = OverrideRegistry::from_json(&registry_json)?;

	tracing::debug!(
		input = %input.display(),
		nodes = registry.code.len(),
		"resolving override markers"
	);

	let code = resolve_markers(&text, &registry)?;

	match output {
		Some(path) => {
			std::fs::write(path, &code).map_err(OverrideError::from)?;
			println!(
				"{} {} -> {}",
				colored!("resolved", green),
				input.display(),
				path.display()
			);
		}
		None => {
			print!("{code}");
			if !code.ends_with('\n') {
				println!();
			}
		}
	}

	Ok(())
}

fn run_keys(
	args: &OverriderCli,
	reference: &str,
	name: &str,
	class: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let reference = Ref::new(reference)?;
	let kind = if class {
		KeyKind::Class
	} else {
		KeyKind::Attribute
	};
	let keys = keys(&reference, name, kind);

	println!("{}", colored!(format!("{reference} {name}"), bold));
	println!("{:<8} {:<28} {}", "default", keys.default, config.lookup(&keys.default));
	println!("{:<8} {:<28} {}", "delete", keys.delete, config.lookup(&keys.delete));

	Ok(())
}
