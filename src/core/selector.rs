//! Selection and installation of the per-target defaults file.

use crate::config::Config;
use crate::core::error::{Error, Result};
use crate::util::fs::{copy_file, is_regular_file};
use std::path::PathBuf;

/// Resolves the per-target defaults file and installs it at the canonical
/// path the downstream build stage reads.
///
/// One selector is built per build invocation; [`install`](Self::install)
/// is the single operation it exposes.
pub struct DefaultsSelector {
    /// Project directory holding the defaults files.
    project_dir: PathBuf,

    /// Build target identifier (PlatformIO environment name).
    target: String,

    /// File naming and verbosity settings.
    config: Config,
}

impl DefaultsSelector {
    /// Create a selector with explicit configuration.
    pub fn new(
        project_dir: impl Into<PathBuf>,
        target: impl Into<String>,
        config: Config,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            target: target.into(),
            config,
        }
    }

    /// Create a selector with the default file naming.
    pub fn with_defaults(project_dir: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        Self::new(project_dir, target, Config::default())
    }

    /// The build target this selector resolves for.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Name of the per-target defaults file, e.g. `sdkconfig.defaults.esp32`.
    pub fn defaults_name(&self) -> String {
        format!("{}{}", self.config.prefix, self.target)
    }

    /// Full path of the per-target defaults file.
    pub fn defaults_path(&self) -> PathBuf {
        self.project_dir.join(self.defaults_name())
    }

    /// Full path of the canonical defaults file.
    pub fn canonical_path(&self) -> PathBuf {
        self.project_dir.join(&self.config.canonical)
    }

    /// Install the per-target defaults file at the canonical path.
    ///
    /// Copies the full byte content of `<prefix><target>` over the
    /// canonical file, overwriting any prior content. Fails with
    /// [`Error::MissingDefaults`] when no regular file exists for the
    /// target; the canonical file is left untouched in that case.
    pub fn install(&self) -> Result<()> {
        let source = self.defaults_path();
        if !is_regular_file(&source) {
            return Err(Error::MissingDefaults(source));
        }

        println!("Copying {}", self.defaults_name());

        let dest = self.canonical_path();
        if self.config.verbose {
            println!("Installing {} -> {}", source.display(), dest.display());
        }

        copy_file(&source, &dest)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_computation() {
        let sel = DefaultsSelector::with_defaults("/proj", "esp32");
        assert_eq!(
            sel.defaults_path(),
            PathBuf::from("/proj/sdkconfig.defaults.esp32")
        );
        assert_eq!(sel.canonical_path(), PathBuf::from("/proj/sdkconfig.defaults"));
    }

    #[test]
    fn test_custom_naming() {
        let config = Config {
            prefix: "defaults/".to_string(),
            canonical: "active.defaults".to_string(),
            ..Config::default()
        };
        let sel = DefaultsSelector::new("/proj", "esp32s3", config);
        assert_eq!(sel.defaults_path(), PathBuf::from("/proj/defaults/esp32s3"));
        assert_eq!(sel.canonical_path(), PathBuf::from("/proj/active.defaults"));
    }

    #[test]
    fn test_install_copies_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sdkconfig.defaults.esp32"), "CONFIG_FOO=1\n").unwrap();

        let sel = DefaultsSelector::with_defaults(dir.path(), "esp32");
        sel.install().unwrap();

        let installed = std::fs::read_to_string(dir.path().join("sdkconfig.defaults")).unwrap();
        assert_eq!(installed, "CONFIG_FOO=1\n");
    }

    #[test]
    fn test_install_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let sel = DefaultsSelector::with_defaults(dir.path(), "esp32c3");
        let err = sel.install().unwrap_err();
        assert!(matches!(err, Error::MissingDefaults(_)));
        assert!(err.to_string().contains("sdkconfig.defaults.esp32c3 does not exist"));

        // No partial copy
        assert!(!dir.path().join("sdkconfig.defaults").exists());
    }

    #[test]
    fn test_install_missing_file_preserves_existing_canonical() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sdkconfig.defaults"), "OLD").unwrap();

        let sel = DefaultsSelector::with_defaults(dir.path(), "esp32c6");
        assert!(sel.install().is_err());

        let content = std::fs::read_to_string(dir.path().join("sdkconfig.defaults")).unwrap();
        assert_eq!(content, "OLD");
    }

    #[test]
    fn test_directory_does_not_count_as_defaults_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sdkconfig.defaults.esp32")).unwrap();

        let sel = DefaultsSelector::with_defaults(dir.path(), "esp32");
        let err = sel.install().unwrap_err();
        assert!(matches!(err, Error::MissingDefaults(_)));
    }

    #[test]
    fn test_empty_target_reports_missing() {
        let dir = tempfile::tempdir().unwrap();

        let sel = DefaultsSelector::with_defaults(dir.path(), "");
        let err = sel.install().unwrap_err();
        assert!(err.to_string().contains("sdkconfig.defaults. does not exist"));
    }
}
