//! Settings loading and parsing for detour.
//!
//! This module handles:
//! - TOML settings file parsing and validation
//! - Nearest-file discovery with a per-user fallback
//! - The `--init` settings template

pub mod discovery;
pub mod parser;
pub mod template;
pub mod types;

pub use discovery::{
	LoadedSettings, SETTINGS_FILE_NAME, SettingsSource, find_settings_file, load_settings,
	user_settings_path,
};
pub use parser::{parse_settings_file, parse_settings_str};
pub use template::generate_init_template;
pub use types::Settings;
