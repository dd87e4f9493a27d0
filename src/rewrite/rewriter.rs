use crate::error::Result;
use crate::profile::{Profile, ProxyGroup};
use crate::rewrite::matcher::{AutoGroupDetector, KeywordMatcher};
use crate::settings::Settings;

/// Probe endpoint written into every url-test group the rewriter touches.
pub const PROBE_URL: &str = "http://www.gstatic.com/generate_204";

/// Probe interval for the general auto group, in seconds.
pub const GENERAL_INTERVAL: u64 = 3600;

/// Probe interval for the special/media group, in seconds.
pub const SPECIAL_INTERVAL: u64 = 300;

/// Latency tolerance for both groups, in milliseconds.
pub const TOLERANCE: u64 = 50;

const GROUP_TYPE_URL_TEST: &str = "url-test";

/// The compiled profile rewriter.
///
/// Construction compiles the auto-group match tokens so pattern errors
/// surface before any document is touched; [`Rewriter::rewrite`] itself is
/// total and never fails.
#[derive(Debug)]
pub struct Rewriter {
	block: KeywordMatcher,
	region: KeywordMatcher,
	auto_group: AutoGroupDetector,
	general_group_name: String,
	special_group_name: String,
	direct_domains: Vec<String>,
	special_domains: Vec<String>,
}

impl Rewriter {
	pub fn new(settings: &Settings) -> Result<Self> {
		Ok(Rewriter {
			block: KeywordMatcher::new(&settings.block_keywords),
			region: KeywordMatcher::new(&settings.special_region_keywords),
			auto_group: AutoGroupDetector::new(&settings.general_group_name)?,
			general_group_name: settings.general_group_name.clone(),
			special_group_name: settings.special_group_name.clone(),
			direct_domains: settings.direct_domains.clone(),
			special_domains: settings.special_domains.clone(),
		})
	}

	/// Rewrite a profile: purify the node lists, retune or create the
	/// general auto group, rebuild the special/media group, and prepend
	/// routing rules.
	///
	/// Consumes the profile and returns the rewritten value.
	pub fn rewrite(&self, mut profile: Profile) -> Profile {
		self.purify(&mut profile);

		let surviving = profile.proxy_names();
		if surviving.is_empty() {
			// Groups referencing nonexistent nodes would break the client,
			// so stop after purification.
			return profile;
		}

		self.ensure_general_group(&mut profile, &surviving);
		let special_nodes = self.rebuild_special_group(&mut profile, &surviving);
		self.inject_rules(&mut profile, !special_nodes.is_empty());

		profile
	}

	/// Stage 1: drop blocklisted proxies and filter every group's member
	/// list. Groups with an absent or empty member list are left untouched.
	fn purify(&self, profile: &mut Profile) {
		profile.proxies.retain(|p| match p.name.as_deref() {
			Some(name) => !self.block.matches(name),
			None => true,
		});

		for group in &mut profile.proxy_groups {
			if let Some(ref mut members) = group.proxies {
				members.retain(|name| !self.block.matches(name));
			}
		}
	}

	/// Stage 2: retune the airport's stock auto group in place, or insert a
	/// fresh one at the front holding every surviving node.
	fn ensure_general_group(&self, profile: &mut Profile, surviving: &[String]) {
		let existing = profile
			.proxy_groups
			.iter_mut()
			.find(|g| g.name.as_deref().is_some_and(|n| self.auto_group.matches(n)));

		match existing {
			Some(group) => {
				// Membership stays whatever the airport configured; only the
				// probe parameters change.
				group.interval = Some(GENERAL_INTERVAL);
				group.url = Some(PROBE_URL.to_string());
			}
			None => {
				let group = self.build_group(
					&self.general_group_name,
					GENERAL_INTERVAL,
					surviving.to_vec(),
				);
				profile.proxy_groups.insert(0, group);
			}
		}
	}

	/// Stage 3: select region-matching nodes and rebuild the special group
	/// from scratch. With no matching nodes the stage is skipped entirely -
	/// a stale special group from an earlier run is left in place.
	fn rebuild_special_group(&self, profile: &mut Profile, surviving: &[String]) -> Vec<String> {
		let special_nodes: Vec<String> = surviving
			.iter()
			.filter(|name| self.region.matches(name))
			.cloned()
			.collect();

		if special_nodes.is_empty() {
			return special_nodes;
		}

		profile
			.proxy_groups
			.retain(|g| !g.is_named(&self.special_group_name));

		let group = self.build_group(
			&self.special_group_name,
			SPECIAL_INTERVAL,
			special_nodes.clone(),
		);
		profile.proxy_groups.insert(0, group);

		special_nodes
	}

	/// Stage 4: prepend direct-domain rules, then special-domain rules when
	/// the special group exists, ahead of the original rules.
	fn inject_rules(&self, profile: &mut Profile, include_special: bool) {
		let mut injected: Vec<String> = self
			.direct_domains
			.iter()
			.map(|domain| format!("DOMAIN-SUFFIX,{},DIRECT", domain))
			.collect();

		if include_special {
			injected.extend(
				self.special_domains
					.iter()
					.map(|domain| format!("DOMAIN-SUFFIX,{},{}", domain, self.special_group_name)),
			);
		}

		if injected.is_empty() {
			return;
		}

		injected.append(&mut profile.rules);
		profile.rules = injected;
	}

	fn build_group(&self, name: &str, interval: u64, members: Vec<String>) -> ProxyGroup {
		ProxyGroup {
			name: Some(name.to_string()),
			group_type: Some(GROUP_TYPE_URL_TEST.to_string()),
			url: Some(PROBE_URL.to_string()),
			interval: Some(interval),
			tolerance: Some(TOLERANCE),
			proxies: Some(members),
			extra: serde_yaml::Mapping::new(),
		}
	}
}
