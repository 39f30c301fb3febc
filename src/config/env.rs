//! Environment variable processing for runtime configuration overrides.
//!
//! Env var prefix: `SDKCONFIG_SELECT_`
//!
//! - `SDKCONFIG_SELECT_TARGET` — override the build target identifier
//! - `SDKCONFIG_SELECT_VERBOSE` — enable verbose output (1/true/yes)
//!
//! In addition, `PIOENV` — the environment name PlatformIO exports to
//! build hooks — is read as the lowest-priority target source, so the
//! tool works unconfigured inside a PlatformIO build.

use super::Config;

const PREFIX: &str = "SDKCONFIG_SELECT_";

/// Name of the PlatformIO environment variable carrying the target.
pub const PIOENV: &str = "PIOENV";

/// Read the build target from `PIOENV`, if set.
pub fn get_pio_env_target() -> Option<String> {
    std::env::var(PIOENV).ok().filter(|s| !s.is_empty())
}

/// Apply individual env var overrides to a config.
///
/// Each override is applied only if the env var is set and non-empty.
pub fn apply_env_overrides(config: &mut Config) {
    if let Some(val) = env_str("TARGET") {
        config.target = Some(val);
    }

    if let Some(val) = env_bool("VERBOSE") {
        config.verbose = val;
    }
}

// --- helpers ---

fn env_str(suffix: &str) -> Option<String> {
    std::env::var(format!("{PREFIX}{suffix}"))
        .ok()
        .filter(|s| !s.is_empty())
}

fn env_bool(suffix: &str) -> Option<bool> {
    env_str(suffix).map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
}
