//! Configuration types and loading from a standalone TOML file plus
//! `SDKCONFIG_SELECT_*` environment variables.

use serde::{Deserialize, Serialize};

pub mod env;
mod loader;
pub use loader::ConfigLoader;

/// Default per-target filename prefix.
pub const DEFAULT_PREFIX: &str = "sdkconfig.defaults.";

/// Default canonical filename read by the downstream build stage.
pub const DEFAULT_CANONICAL: &str = "sdkconfig.defaults";

/// Complete configuration for the defaults selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Build target identifier, when fixed in the config file rather
    /// than supplied by the environment.
    #[serde(default)]
    pub target: Option<String>,

    /// Per-target filename prefix; the target is appended to this.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Canonical filename the per-target file is installed as.
    #[serde(default = "default_canonical")]
    pub canonical: String,

    /// Enable verbose output (show resolved paths).
    #[serde(default)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: None,
            prefix: default_prefix(),
            canonical: default_canonical(),
            verbose: false,
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_canonical() -> String {
    DEFAULT_CANONICAL.to_string()
}
