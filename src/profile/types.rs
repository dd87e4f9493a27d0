use serde::{Deserialize, Serialize};

/// A Clash-style profile document.
///
/// Only the three collections the rewriter touches are modeled. Everything
/// else - ports, DNS blocks, tun settings, whatever the airport shipped -
/// lands in `extra` and is written back verbatim. Collections absent on
/// input deserialize as empty and are always present on output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
	#[serde(default)]
	pub proxies: Vec<Proxy>,

	#[serde(rename = "proxy-groups", default)]
	pub proxy_groups: Vec<ProxyGroup>,

	#[serde(default)]
	pub rules: Vec<String>,

	#[serde(flatten)]
	pub extra: serde_yaml::Mapping,
}

/// A single upstream proxy entry.
///
/// Clash requires a name, but a nameless entry is tolerated: it never
/// matches any keyword and contributes no name to computed member lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Proxy {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,

	#[serde(flatten)]
	pub extra: serde_yaml::Mapping,
}

/// A selection policy over proxy names.
///
/// Member names reference proxies by value; a dangling name is not an
/// error. Fields absent on input stay absent on output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyGroup {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,

	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub group_type: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub interval: Option<u64>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tolerance: Option<u64>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub proxies: Option<Vec<String>>,

	#[serde(flatten)]
	pub extra: serde_yaml::Mapping,
}

impl Profile {
	/// Names of all named proxies, in list order.
	pub fn proxy_names(&self) -> Vec<String> {
		self.proxies.iter().filter_map(|p| p.name.clone()).collect()
	}
}

impl ProxyGroup {
	/// Check whether this group carries the given name.
	pub fn is_named(&self, name: &str) -> bool {
		self.name.as_deref() == Some(name)
	}
}
