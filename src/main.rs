use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use detour_cli::profile::{
	parse_profile_file, parse_profile_str, render_profile, write_profile_file,
};
use detour_cli::rewrite::Rewriter;
use detour_cli::settings::{
	LoadedSettings, SETTINGS_FILE_NAME, SettingsSource, find_settings_file,
	generate_init_template, load_settings, parse_settings_file, user_settings_path,
};

#[derive(Parser)]
#[command(name = "detour")]
#[command(
	author,
	version,
	about = "CLI tool for pruning junk nodes and rerouting rules in Clash proxy profiles"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Profile to rewrite ("-" reads from stdin)
	#[arg(value_name = "INPUT")]
	input: Option<PathBuf>,

	/// Write the rewritten profile to this path instead of stdout
	#[arg(short, long, value_name = "PATH", conflicts_with = "in_place")]
	output: Option<PathBuf>,

	/// Rewrite INPUT in place
	#[arg(short, long, requires = "input")]
	in_place: bool,

	/// Load settings from this file instead of discovering one
	#[arg(short, long, value_name = "PATH")]
	settings: Option<PathBuf>,

	/// Create a template .detour.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .detour.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Settings management commands
	Settings {
		#[command(subcommand)]
		action: SettingsAction,
	},
}

#[derive(Subcommand)]
enum SettingsAction {
	/// Display the effective settings and where they came from
	Show,
	/// Check the discovered settings file for errors without rewriting anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Settings { action } => match action {
				SettingsAction::Show => handle_settings_show(cli.settings.as_deref()),
				SettingsAction::Validate => handle_settings_validate(cli.settings.as_deref()),
			},
		};
	}

	// Handle profile rewriting
	if let Some(ref input) = cli.input {
		return handle_rewrite(
			input,
			cli.output.as_deref(),
			cli.in_place,
			cli.settings.as_deref(),
		);
	}

	// No input specified - this shouldn't happen due to arg_required_else_help
	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let settings_path = PathBuf::from(SETTINGS_FILE_NAME);

	if settings_path.exists() && !force {
		anyhow::bail!("{SETTINGS_FILE_NAME} already exists. Use --force to overwrite.");
	}

	let template = generate_init_template();
	std::fs::write(&settings_path, template)
		.with_context(|| format!("Failed to write {}", settings_path.display()))?;

	println!("Created {SETTINGS_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_rewrite(
	input: &Path,
	output: Option<&Path>,
	in_place: bool,
	settings_path: Option<&Path>,
) -> Result<ExitCode> {
	let from_stdin = input == Path::new("-");
	if in_place && from_stdin {
		anyhow::bail!("--in-place requires a file input, not stdin");
	}

	let loaded = resolve_settings(settings_path)?;
	let rewriter =
		Rewriter::new(&loaded.settings).context("Failed to compile rewrite settings")?;

	let profile = if from_stdin {
		let mut content = String::new();
		std::io::stdin()
			.read_to_string(&mut content)
			.context("Failed to read profile from stdin")?;
		parse_profile_str(&content, Path::new("<stdin>"))?
	} else {
		parse_profile_file(input)?
	};

	let rewritten = rewriter.rewrite(profile);

	if in_place {
		write_profile_file(&rewritten, input)?;
	} else if let Some(path) = output {
		write_profile_file(&rewritten, path)?;
	} else {
		print!("{}", render_profile(&rewritten)?);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_settings_show(explicit: Option<&Path>) -> Result<ExitCode> {
	let loaded = resolve_settings(explicit)?;

	match &loaded.source {
		SettingsSource::File(path) => println!("# Source: {}", path.display()),
		SettingsSource::Defaults => println!("# Source: built-in defaults"),
	}
	println!();

	let rendered =
		toml::to_string_pretty(&loaded.settings).context("Failed to render settings")?;
	print!("{rendered}");

	// Show user settings path
	if let Ok(user_path) = user_settings_path() {
		println!();
		println!("User settings path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_settings_validate(explicit: Option<&Path>) -> Result<ExitCode> {
	let discovered = match explicit {
		Some(path) => Some(path.to_path_buf()),
		None => {
			let cwd = std::env::current_dir().context("Failed to get current directory")?;
			find_settings_file(&cwd)?
		}
	};

	let Some(path) = discovered else {
		println!("No settings file found; built-in defaults apply.");
		return Ok(ExitCode::SUCCESS);
	};

	match parse_settings_file(&path) {
		Ok(settings) => {
			println!(
				"{} is valid ({} block keywords, {} direct domains, {} special domains)",
				path.display(),
				settings.block_keywords.len(),
				settings.direct_domains.len(),
				settings.special_domains.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Settings error: {e}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn resolve_settings(explicit: Option<&Path>) -> Result<LoadedSettings> {
	if let Some(path) = explicit {
		let settings = parse_settings_file(path)
			.with_context(|| format!("Failed to load settings from {}", path.display()))?;
		return Ok(LoadedSettings {
			settings,
			source: SettingsSource::File(path.to_path_buf()),
		});
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_settings(&cwd).context("Failed to load settings")
}
