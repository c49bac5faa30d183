//! Motion error types

use atom_animation::{AnimatedProperty, TransitionKind};
use std::path::PathBuf;
use thiserror::Error;

/// Programmer errors raised while configuring or building motions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// A config for this property is already registered on the motion
    #[error("motion config for `{0}` is already registered")]
    DuplicateConfig(AnimatedProperty),

    /// The transition kind cannot carry the configured values
    #[error("transition kind {kind:?} cannot animate the values configured for `{property}`")]
    KindMismatch {
        property: AnimatedProperty,
        kind: TransitionKind,
    },

    /// Start or end value was never provided, not even by a pre-build hook
    #[error("motion config for `{property}` has no {endpoint} value")]
    MissingValue {
        property: AnimatedProperty,
        endpoint: &'static str,
    },

    /// The motion target cannot animate this property
    #[error("motion target does not support animating `{0}`")]
    UnsupportedProperty(AnimatedProperty),

    /// No preset is registered under this name
    #[error("unknown motion preset `{0}`")]
    UnknownPreset(String),
}

/// Result type for motion operations
pub type Result<T> = std::result::Result<T, MotionError>;

/// Errors raised while loading [`MotionSettings`](crate::MotionSettings)
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read the settings file
    #[error("failed to read motion settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings document
    #[error("failed to parse motion settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize settings
    #[error("failed to serialize motion settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
