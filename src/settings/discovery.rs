use crate::error::{DetourError, Result};
use crate::settings::parser::parse_settings_file;
use crate::settings::types::Settings;
use std::path::{Path, PathBuf};

/// File name looked up during discovery, both in ancestor directories and
/// in the user's home directory.
pub const SETTINGS_FILE_NAME: &str = ".detour.toml";

/// Where the effective settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
	/// Loaded from this file.
	File(PathBuf),

	/// No settings file was found; built-in defaults apply.
	Defaults,
}

/// Settings together with their provenance, for display.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
	pub settings: Settings,
	pub source: SettingsSource,
}

/// Find the nearest settings file.
///
/// The lookup order is:
/// 1. `.detour.toml` in `start_dir`, then in each ancestor directory
/// 2. `~/.detour.toml`
///
/// The first file found wins whole; there is no merging across files.
pub fn find_settings_file(start_dir: &Path) -> Result<Option<PathBuf>> {
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let candidate = current_dir.join(SETTINGS_FILE_NAME);
		if candidate.exists() {
			return Ok(Some(candidate));
		}

		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	let user_path = user_settings_path()?;
	if user_path.exists() {
		return Ok(Some(user_path));
	}

	Ok(None)
}

/// Discover and load settings, falling back to the built-in defaults when
/// no file exists.
pub fn load_settings(start_dir: &Path) -> Result<LoadedSettings> {
	match find_settings_file(start_dir)? {
		Some(path) => {
			let settings = parse_settings_file(&path)?;
			Ok(LoadedSettings {
				settings,
				source: SettingsSource::File(path),
			})
		}
		None => Ok(LoadedSettings {
			settings: Settings::default(),
			source: SettingsSource::Defaults,
		}),
	}
}

/// Get the path to the user's settings file.
pub fn user_settings_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(DetourError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(SETTINGS_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_find_settings_file_in_start_dir() {
		let temp_dir = tempfile::tempdir().unwrap();
		let settings_path = temp_dir.path().join(SETTINGS_FILE_NAME);
		std::fs::write(&settings_path, "").unwrap();

		let found = find_settings_file(temp_dir.path()).unwrap();
		assert_eq!(found, Some(settings_path));
	}

	#[test]
	fn test_find_settings_file_in_ancestor() {
		let temp_dir = tempfile::tempdir().unwrap();
		let settings_path = temp_dir.path().join(SETTINGS_FILE_NAME);
		std::fs::write(&settings_path, "").unwrap();

		let nested = temp_dir.path().join("a").join("b");
		std::fs::create_dir_all(&nested).unwrap();

		let found = find_settings_file(&nested).unwrap();
		assert_eq!(found, Some(settings_path));
	}

	#[test]
	fn test_nearest_file_wins() {
		let temp_dir = tempfile::tempdir().unwrap();
		std::fs::write(temp_dir.path().join(SETTINGS_FILE_NAME), "").unwrap();

		let nested = temp_dir.path().join("project");
		std::fs::create_dir_all(&nested).unwrap();
		let near_path = nested.join(SETTINGS_FILE_NAME);
		std::fs::write(&near_path, "").unwrap();

		let found = find_settings_file(&nested).unwrap();
		assert_eq!(found, Some(near_path));
	}

	#[test]
	fn test_load_settings_reads_discovered_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let settings_path = temp_dir.path().join(SETTINGS_FILE_NAME);
		std::fs::write(&settings_path, "general-group-name = \"Auto\"\n").unwrap();

		let loaded = load_settings(temp_dir.path()).unwrap();
		assert_eq!(loaded.settings.general_group_name, "Auto");
		assert_eq!(loaded.source, SettingsSource::File(settings_path));
	}

	#[test]
	fn test_user_settings_path() {
		let path = user_settings_path();
		assert!(path.is_ok());
		assert!(path.unwrap().ends_with(SETTINGS_FILE_NAME));
	}
}
