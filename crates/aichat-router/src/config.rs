//! Router Configuration
//!
//! Loaded from environment variables at runtime (host) or at compile time
//! (browser build).

use crate::error::{Result, RouteError};
use crate::location::Base;
use crate::table::{MatchOptions, RouteTable};

/// Deployment base, e.g. `/app/`
pub const BASE_URL_VAR: &str = "AICHAT_BASE_URL";

/// `false` lets `/chat/` match `/chat`
pub const STRICT_VAR: &str = "AICHAT_STRICT_ROUTES";

/// `false` lets `/CHAT` match `/chat`
pub const SENSITIVE_VAR: &str = "AICHAT_SENSITIVE_ROUTES";

/// Every variable the router reads, for both the host and the browser build
pub const VARS: [&str; 3] = [BASE_URL_VAR, STRICT_VAR, SENSITIVE_VAR];

/// Router configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Deployment base
    pub base: Base,

    /// Path comparison rules
    pub options: MatchOptions,
}

impl RouterConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = MatchOptions::default();

        let base = lookup(BASE_URL_VAR).map_or_else(Base::root, |raw| Base::new(&raw));
        let strict = lookup(STRICT_VAR)
            .map(|raw| parse_flag(STRICT_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.strict);
        let sensitive = lookup(SENSITIVE_VAR)
            .map(|raw| parse_flag(SENSITIVE_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.sensitive);

        Ok(Self {
            base,
            options: MatchOptions { strict, sensitive },
        })
    }

    /// Settings baked in at compile time, for the WASM frontend. Parsed with
    /// the same rules as `from_env` so host and client match alike.
    pub fn from_build_env() -> Result<Self> {
        Self::from_lookup(|key| build_value(key).flatten().map(str::to_string))
    }

    /// The app's route table under these options
    pub fn table(&self) -> RouteTable {
        RouteTable::standard_with(self.options)
    }
}

/// Compile-time value of a router variable. The outer `None` means the key
/// is not a router variable at all.
fn build_value(key: &str) -> Option<Option<&'static str>> {
    match key {
        BASE_URL_VAR => Some(option_env!("AICHAT_BASE_URL")),
        STRICT_VAR => Some(option_env!("AICHAT_STRICT_ROUTES")),
        SENSITIVE_VAR => Some(option_env!("AICHAT_SENSITIVE_ROUTES")),
        _ => None,
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(RouteError::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
