//! Runtime options for the trace pipeline.

use serde::Deserialize;

/// Environment variable consulted by [`TraceConfig::from_env`].
pub const COMPLETE_ENABLED_ENV: &str = "CALLTRACE_COMPLETE_ENABLED";

/// Options controlling what the trace manager emits.
///
/// Hosts can embed this in their own configuration files (it derives
/// `Deserialize` with per-field defaults), build it in code, or pick it up
/// from the environment with [`TraceConfig::from_env`].
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    /// Whether the non-error completion line is emitted. Error records and the
    /// root banners are emitted regardless of this flag.
    #[serde(default = "default_complete_enabled")]
    pub complete_enabled: bool,
}

fn default_complete_enabled() -> bool {
    true
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            complete_enabled: default_complete_enabled(),
        }
    }
}

impl TraceConfig {
    /// Reads options from the environment, falling back to the defaults.
    ///
    /// `CALLTRACE_COMPLETE_ENABLED=false` (or `0`, or `off`) suppresses the
    /// non-error completion line; anything else leaves it on.
    pub fn from_env() -> Self {
        let complete_enabled = std::env::var(COMPLETE_ENABLED_ENV)
            .map(|value| !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "off"))
            .unwrap_or(true);
        Self { complete_enabled }
    }
}
