//! Detour - CLI tool for pruning junk nodes and rerouting rules in Clash
//! proxy profiles.
//!
//! This library provides the core functionality for detour, including:
//! - Profile document parsing with verbatim passthrough of unmodeled fields
//! - Blocklist and region keyword matching
//! - The four-stage profile rewrite (purify, general group, special group,
//!   rule injection)
//! - Settings file parsing, validation, and discovery
//!
//! # Example
//!
//! ```
//! use detour_cli::profile::parse_profile_str;
//! use detour_cli::rewrite::Rewriter;
//! use detour_cli::settings::Settings;
//! use std::path::Path;
//!
//! let profile = parse_profile_str(
//!     "proxies:\n  - name: JP-01\n    type: ss\n",
//!     Path::new("profile.yaml"),
//! )
//! .unwrap();
//!
//! let rewriter = Rewriter::new(&Settings::default()).unwrap();
//! let rewritten = rewriter.rewrite(profile);
//! assert!(rewritten.rules[0].ends_with(",DIRECT"));
//! ```

pub mod error;
pub mod profile;
pub mod rewrite;
pub mod settings;

pub use error::{DetourError, Result};
