//! Error types for profile loading and emission.

use std::path::PathBuf;

use thiserror::Error;
use tftcfg_core::{ProfileError, SetupError};

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while loading or emitting a profile.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Profile file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Generated file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Profile could not be serialized to TOML.
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `preset = ...` names no known preset.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// Required key missing from a profile without a preset.
    #[error("missing '{0}' (required when no preset is given)")]
    Missing(&'static str),

    /// Setup header could not be parsed.
    #[error("invalid setup header: {0}")]
    Setup(SetupError),

    /// Profile failed validation.
    #[error("invalid profile: {0}")]
    Profile(ProfileError),

    /// Error while loading a specific profile file
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        source: Box<BuildError>,
    },

    /// `OUT_DIR` not set (not running inside a build script).
    #[error("OUT_DIR is not set")]
    NoOutDir,
}

impl From<ProfileError> for BuildError {
    fn from(e: ProfileError) -> Self {
        BuildError::Profile(e)
    }
}

impl From<SetupError> for BuildError {
    fn from(e: SetupError) -> Self {
        match e {
            SetupError::Profile(e) => BuildError::Profile(e),
            e => BuildError::Setup(e),
        }
    }
}
