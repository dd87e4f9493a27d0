use crate::error::{DetourError, Result};
use regex::{Regex, RegexBuilder};

/// Tokens that identify an airport's stock auto-select group, matched
/// case-insensitively and unanchored. Kept as an ordered list so a match
/// can be attributed to a single token.
const AUTO_GROUP_TOKENS: &[&str] = &["自动", "auto", "urltest"];

/// Case-sensitive substring matcher over a keyword list.
///
/// Used for both the blocklist and the special-region selection: a name
/// matches when any keyword occurs anywhere in it.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
	keywords: Vec<String>,
}

impl KeywordMatcher {
	pub fn new(keywords: &[String]) -> Self {
		KeywordMatcher {
			keywords: keywords.to_vec(),
		}
	}

	/// Check whether `name` contains any configured keyword.
	pub fn matches(&self, name: &str) -> bool {
		self.keywords.iter().any(|k| name.contains(k.as_str()))
	}
}

/// Recognizes an existing general auto-select group, either by its exact
/// configured name or by one of the [`AUTO_GROUP_TOKENS`].
#[derive(Debug)]
pub struct AutoGroupDetector {
	exact_name: String,
	token_patterns: Vec<Regex>,
}

impl AutoGroupDetector {
	pub fn new(exact_name: &str) -> Result<Self> {
		let token_patterns = AUTO_GROUP_TOKENS
			.iter()
			.map(|token| compile_token(token))
			.collect::<Result<Vec<_>>>()?;

		Ok(AutoGroupDetector {
			exact_name: exact_name.to_string(),
			token_patterns,
		})
	}

	/// Check whether a group name identifies the general auto group.
	pub fn matches(&self, name: &str) -> bool {
		name == self.exact_name || self.token_patterns.iter().any(|p| p.is_match(name))
	}
}

/// Compile one literal token into an unanchored, case-insensitive pattern.
fn compile_token(token: &str) -> Result<Regex> {
	RegexBuilder::new(&regex::escape(token))
		.case_insensitive(true)
		.build()
		.map_err(|source| DetourError::InvalidMatchToken {
			token: token.to_string(),
			source,
		})
}
