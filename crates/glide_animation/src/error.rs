//! Animation error types

use std::path::PathBuf;
use thiserror::Error;

/// Rejected node description
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptionError {
    /// No duration was given
    #[error("{node}: duration is required")]
    MissingDuration { node: &'static str },

    /// Duration is negative, NaN or infinite
    #[error("{node}: invalid duration {seconds}s")]
    InvalidDuration { node: &'static str, seconds: f32 },

    /// A required target was not given
    #[error("{node}: `{property}` is required")]
    MissingTarget {
        node: &'static str,
        property: &'static str,
    },

    /// A target lies outside its allowed range
    #[error("{node}: `{property}` = {value} is outside [{min}, {max}]")]
    OutOfRange {
        node: &'static str,
        property: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// An inset target has a negative side
    #[error("{node}: `{property}` must not be negative")]
    Negative {
        node: &'static str,
        property: &'static str,
    },

    /// Mutually exclusive targets were given together
    #[error("{node}: cannot set {properties} together")]
    Conflicting {
        node: &'static str,
        properties: &'static str,
    },

    /// Box constraints with min above max or a negative bound
    #[error("{node}: constraints are not normalized")]
    InvalidConstraints { node: &'static str },

    /// Decoration that cannot be painted as declared
    #[error("{node}: `{property}` cannot combine a circle shape with a border radius")]
    InvalidDecoration {
        node: &'static str,
        property: &'static str,
    },
}

/// Result type for building node descriptions
pub type Result<T> = std::result::Result<T, DescriptionError>;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for the schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A key holds a value outside its allowed range
    #[error("Invalid config value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}
