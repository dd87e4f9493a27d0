use serde::{Deserialize, Serialize};

/// User-tunable rewrite settings, sourced from a `.detour.toml` file.
///
/// Every field has a built-in default, so a missing file or an empty file
/// behaves like the stock configuration. The nearest discovered file wins
/// whole; fields are not merged across files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
	/// Proxy and group-member names containing any of these substrings are
	/// removed (case-sensitive).
	pub block_keywords: Vec<String>,

	/// Substrings selecting nodes for the special/media group.
	pub special_region_keywords: Vec<String>,

	/// Name of the special/media auto group the rewriter builds.
	pub special_group_name: String,

	/// Name of the airport's general auto group, created when no existing
	/// group is recognized.
	pub general_group_name: String,

	/// Domain suffixes routed straight to DIRECT.
	pub direct_domains: Vec<String>,

	/// Domain suffixes pinned to the special group.
	pub special_domains: Vec<String>,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			block_keywords: strings(&[
				"专线X5倍率",
				"到期",
				"剩余流量",
				"重置",
				"官网",
				"如果是",
				"套餐",
			]),
			special_region_keywords: strings(&[
				"新加坡", "日本", "美国", "US", "JP", "SG", "Taiwan", "TW", "HK",
			]),
			special_group_name: "🚀 专用/媒体自动".to_string(),
			general_group_name: "自动选择".to_string(),
			direct_domains: strings(&[
				"baidu.com",
				"qq.com",
				"163.com",
				"taobao.com",
				"jd.com",
				"cn",
				"microsoft.com",
				"apple.com",
			]),
			special_domains: strings(&[
				"google.com",
				"gstatic.com",
				"googleapis.com",
				"youtu.be",
				"youtube.com",
				"openai.com",
				"chatgpt.com",
				"auth0.com",
				"oaistatic.com",
				"microsoftedge.com",
				"anthropic.com",
				"claude.ai",
				"netflix.com",
				"nflxvideo.net",
				"disney.com",
				"spotify.com",
				"dmm.co.jp",
				"nicovideo.jp",
				"shopee.sg",
				"lazada.sg",
			]),
		}
	}
}

impl Settings {
	/// Reject entries that would match every name or produce unusable
	/// groups. An empty keyword is a substring of everything and would
	/// strip the whole proxy list.
	pub fn validate(&self) -> Result<(), crate::error::DetourError> {
		let list_fields = [
			("block-keywords", &self.block_keywords),
			("special-region-keywords", &self.special_region_keywords),
			("direct-domains", &self.direct_domains),
			("special-domains", &self.special_domains),
		];

		for (field, list) in list_fields {
			if list.iter().any(|entry| entry.is_empty()) {
				return Err(crate::error::DetourError::EmptySettingEntry { field });
			}
		}

		if self.general_group_name.is_empty() {
			return Err(crate::error::DetourError::EmptySetting {
				field: "general-group-name",
			});
		}

		if self.special_group_name.is_empty() {
			return Err(crate::error::DetourError::EmptySetting {
				field: "special-group-name",
			});
		}

		Ok(())
	}
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::DetourError;

	#[test]
	fn test_defaults_are_valid() {
		assert!(Settings::default().validate().is_ok());
	}

	#[test]
	fn test_empty_keyword_entry_rejected() {
		let settings = Settings {
			block_keywords: strings(&["到期", ""]),
			..Default::default()
		};

		match settings.validate().unwrap_err() {
			DetourError::EmptySettingEntry { field } => assert_eq!(field, "block-keywords"),
			_ => panic!("Expected EmptySettingEntry error"),
		}
	}

	#[test]
	fn test_empty_group_name_rejected() {
		let settings = Settings {
			general_group_name: String::new(),
			..Default::default()
		};

		match settings.validate().unwrap_err() {
			DetourError::EmptySetting { field } => assert_eq!(field, "general-group-name"),
			_ => panic!("Expected EmptySetting error"),
		}
	}
}
