//! Profile rewriting for detour.
//!
//! This module handles:
//! - Blocklist and region keyword matching
//! - Recognition of an existing auto-select group by name token
//! - The four-stage rewrite: purify, general group, special group, rule
//!   injection

pub mod matcher;
pub mod rewriter;

pub use matcher::{AutoGroupDetector, KeywordMatcher};
pub use rewriter::{GENERAL_INTERVAL, PROBE_URL, Rewriter, SPECIAL_INTERVAL, TOLERANCE};
