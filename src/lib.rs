//! sdkconfig-select: install the per-target `sdkconfig.defaults` file for
//! ESP-IDF/PlatformIO builds.
//!
//! ESP-IDF projects that build for several hardware targets keep one
//! defaults file per target (`sdkconfig.defaults.esp32`,
//! `sdkconfig.defaults.esp32c3`, ...), but the build system only reads the
//! single canonical `sdkconfig.defaults`. This crate is the pre-build hook
//! that bridges the two: given the active build target it copies the
//! matching per-target file over the canonical path, and fails the build
//! when no such file exists.
//!
//! # Quick Start
//!
//! ```no_run
//! use sdkconfig_select::selector;
//!
//! # fn main() -> sdkconfig_select::Result<()> {
//! selector(".", "esp32").install()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The file naming can be adjusted through an optional standalone TOML
//! file (`sdkconfig-select.toml` by convention) and `SDKCONFIG_SELECT_*`
//! environment variables:
//!
//! ```toml
//! target = "esp32"
//! prefix = "sdkconfig.defaults."
//! canonical = "sdkconfig.defaults"
//! verbose = true
//! ```
//!
//! The target itself resolves from, in priority order: an explicit CLI
//! argument, `SDKCONFIG_SELECT_TARGET`, the config file, and finally
//! `PIOENV` (the environment name PlatformIO exports to build hooks).
//!
//! # Build failure semantics
//!
//! The library never exits the process. A missing defaults file surfaces
//! as [`Error::MissingDefaults`], which the `sdkconfig-select` binary maps
//! to a one-line diagnostic and a non-zero exit status so the enclosing
//! build aborts before later stages read a stale canonical file.

pub mod config;
pub mod core;
pub mod util;

// Re-export commonly used types
pub use crate::core::{DefaultsSelector, Error, Result};
pub use config::{Config, ConfigLoader};

/// Create a selector for a project directory and build target.
///
/// Uses the default file naming (`sdkconfig.defaults.<target>` →
/// `sdkconfig.defaults`). For custom naming, build a [`Config`] and use
/// [`DefaultsSelector::new`].
///
/// # Example
///
/// ```no_run
/// use sdkconfig_select::selector;
///
/// # fn main() -> sdkconfig_select::Result<()> {
/// selector("/path/to/project", "esp32c3").install()?;
/// # Ok(())
/// # }
/// ```
pub fn selector(
    project_dir: impl Into<std::path::PathBuf>,
    target: impl Into<String>,
) -> DefaultsSelector {
    DefaultsSelector::with_defaults(project_dir, target)
}
