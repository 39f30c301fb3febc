use std::path::PathBuf;

/// Result type alias for sdkconfig-select operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sdkconfig-select.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The per-target defaults file is absent.
    ///
    /// Fatal for the enclosing build: continuing without target-specific
    /// defaults would silently build with the wrong configuration. The
    /// message format matches what firmware build logs grep for.
    #[error("{} does not exist", .0.display())]
    MissingDefaults(PathBuf),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a missing-defaults error.
    pub fn missing_defaults(path: impl Into<PathBuf>) -> Self {
        Error::MissingDefaults(path.into())
    }
}
