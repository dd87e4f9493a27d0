use crate::error::{DetourError, Result};
use crate::profile::types::Profile;
use std::path::Path;

/// Parse a profile from the given path.
pub fn parse_profile_file(path: &Path) -> Result<Profile> {
	let content = std::fs::read_to_string(path).map_err(|source| DetourError::ProfileReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_profile_str(&content, path)
}

/// Parse a profile from a string (the path is only used in error reporting).
pub fn parse_profile_str(content: &str, path: &Path) -> Result<Profile> {
	serde_yaml::from_str(content).map_err(|source| DetourError::ProfileParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// Render a profile back to YAML.
pub fn render_profile(profile: &Profile) -> Result<String> {
	serde_yaml::to_string(profile).map_err(|source| DetourError::ProfileRenderError { source })
}

/// Render and write a profile to the given path.
pub fn write_profile_file(profile: &Profile, path: &Path) -> Result<()> {
	let rendered = render_profile(profile)?;

	std::fs::write(path, rendered).map_err(|source| DetourError::ProfileWriteError {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_mapping() {
		let path = PathBuf::from("profile.yaml");
		let profile = parse_profile_str("{}", &path).unwrap();

		assert!(profile.proxies.is_empty());
		assert!(profile.proxy_groups.is_empty());
		assert!(profile.rules.is_empty());
		assert!(profile.extra.is_empty());
	}

	#[test]
	fn test_parse_basic_profile() {
		let content = r#"
proxies:
  - name: HK-01
    type: ss
    server: hk.example.com
    port: 443
proxy-groups:
  - name: 手动选择
    type: select
    proxies:
      - HK-01
rules:
  - DOMAIN-SUFFIX,example.com,DIRECT
  - MATCH,手动选择
"#;
		let path = PathBuf::from("profile.yaml");
		let profile = parse_profile_str(content, &path).unwrap();

		assert_eq!(profile.proxies.len(), 1);
		assert_eq!(profile.proxies[0].name.as_deref(), Some("HK-01"));
		assert_eq!(profile.proxy_groups.len(), 1);
		assert_eq!(
			profile.proxy_groups[0].proxies,
			Some(vec!["HK-01".to_string()])
		);
		assert_eq!(profile.rules.len(), 2);
	}

	#[test]
	fn test_parse_invalid_yaml() {
		let path = PathBuf::from("profile.yaml");
		let result = parse_profile_str("proxies: [unclosed", &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			DetourError::ProfileParseError { path, .. } => {
				assert_eq!(path, PathBuf::from("profile.yaml"));
			}
			_ => panic!("Expected ProfileParseError"),
		}
	}

	#[test]
	fn test_unknown_fields_round_trip() {
		let content = r#"
port: 7890
mode: rule
proxies:
  - name: HK-01
    type: ss
    cipher: aes-128-gcm
dns:
  enable: true
"#;
		let path = PathBuf::from("profile.yaml");
		let profile = parse_profile_str(content, &path).unwrap();

		// Top-level passthrough
		assert_eq!(profile.extra.len(), 3);
		// Proxy-level passthrough
		assert_eq!(profile.proxies[0].extra.len(), 2);

		let rendered = render_profile(&profile).unwrap();
		let reparsed = parse_profile_str(&rendered, &path).unwrap();

		assert_eq!(reparsed.extra, profile.extra);
		assert_eq!(reparsed.proxies[0].extra, profile.proxies[0].extra);
	}

	#[test]
	fn test_absent_group_fields_stay_absent() {
		let content = r#"
proxy-groups:
  - name: 手动选择
    type: select
    proxies:
      - HK-01
"#;
		let path = PathBuf::from("profile.yaml");
		let profile = parse_profile_str(content, &path).unwrap();

		let group = &profile.proxy_groups[0];
		assert!(group.url.is_none());
		assert!(group.interval.is_none());
		assert!(group.tolerance.is_none());

		let rendered = render_profile(&profile).unwrap();
		assert!(!rendered.contains("url"));
		assert!(!rendered.contains("interval"));
		assert!(!rendered.contains("tolerance"));
	}

	#[test]
	fn test_absent_member_list_distinct_from_empty() {
		let content = r#"
proxy-groups:
  - name: providers-only
    type: select
  - name: empty
    type: select
    proxies: []
"#;
		let path = PathBuf::from("profile.yaml");
		let profile = parse_profile_str(content, &path).unwrap();

		assert_eq!(profile.proxy_groups[0].proxies, None);
		assert_eq!(profile.proxy_groups[1].proxies, Some(vec![]));
	}

	#[test]
	fn test_render_normalizes_absent_collections() {
		let path = PathBuf::from("profile.yaml");
		let profile = parse_profile_str("port: 7890", &path).unwrap();
		let rendered = render_profile(&profile).unwrap();

		assert!(rendered.contains("proxies: []"));
		assert!(rendered.contains("proxy-groups: []"));
		assert!(rendered.contains("rules: []"));
	}
}
