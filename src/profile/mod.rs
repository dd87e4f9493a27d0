//! Profile document handling for detour.
//!
//! This module handles:
//! - Typed access to the `proxies`, `proxy-groups`, and `rules` collections
//! - Verbatim passthrough of every other document field
//! - YAML parsing and rendering

pub mod parser;
pub mod types;

pub use parser::{parse_profile_file, parse_profile_str, render_profile, write_profile_file};
pub use types::{Profile, Proxy, ProxyGroup};
