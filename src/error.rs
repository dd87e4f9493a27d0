use std::path::PathBuf;

/// Library-level structured errors for detour.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum DetourError {
	#[error("Failed to read profile: {path}")]
	ProfileReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse profile: {path}")]
	ProfileParseError {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Failed to render profile as YAML")]
	ProfileRenderError {
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Failed to write profile: {path}")]
	ProfileWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read settings file: {path}")]
	SettingsReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings file: {path}")]
	SettingsParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Setting `{field}` must not be empty")]
	EmptySetting { field: &'static str },

	#[error("Setting `{field}` must not contain empty entries")]
	EmptySettingEntry { field: &'static str },

	#[error("Invalid group match token: {token}")]
	InvalidMatchToken {
		token: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using DetourError.
pub type Result<T> = std::result::Result<T, DetourError>;
