use super::Config;
use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Conventional name of the standalone config file.
pub const CONFIG_FILE_NAME: &str = "sdkconfig-select.toml";

/// Configuration loader that supports multiple sources.
pub struct ConfigLoader {
    /// Project directory searched for the conventional config file.
    project_dir: Option<PathBuf>,
    /// Path to an explicit standalone config file.
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            project_dir: None,
            config_file: None,
        }
    }

    /// Set the project directory.
    ///
    /// When no explicit config file is given, `sdkconfig-select.toml` in
    /// this directory is loaded if it exists.
    pub fn project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    /// Set an explicit standalone configuration file path.
    ///
    /// Unlike the conventional file, an explicit path must exist.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Load configuration from all enabled sources.
    ///
    /// Priority (later sources override earlier):
    /// 1. Default values
    /// 2. Standalone TOML file (explicit, or conventional in the project dir)
    /// 3. Env var overrides (`SDKCONFIG_SELECT_*`)
    /// 4. `PIOENV`, as the target of last resort only
    pub fn load(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(ref config_path) = self.config_file {
            config = self.load_toml_file(config_path)?;
        } else if let Some(ref dir) = self.project_dir {
            let conventional = dir.join(CONFIG_FILE_NAME);
            if conventional.is_file() {
                config = self.load_toml_file(&conventional)?;
            }
        }

        super::env::apply_env_overrides(&mut config);

        if config.target.is_none() {
            config.target = super::env::get_pio_env_target();
        }

        Ok(config)
    }

    /// Load configuration from a standalone TOML file.
    fn load_toml_file(&self, path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read config file {}: {}", path.display(), e))
        })?;

        Ok(toml::from_str(&content)?)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
