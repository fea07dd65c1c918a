//! Error types for enemy configuration and definition loading.

use thiserror::Error;

/// Contract violations caught when an enemy controller is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A value was NaN or infinite.
    #[error("Config field '{field}' must be finite")]
    NotFinite { field: &'static str },

    /// A range or duration was below zero.
    #[error("Config field '{field}' must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// Enemies must spawn alive.
    #[error("max_health must be positive, got {0}")]
    NonPositiveHealth(f32),

    /// Attack range reaching past detection range makes Walking and
    /// Attacking flip every tick.
    #[error("attack_range ({attack_range}) exceeds detection_range ({detection_range})")]
    AttackRangeExceedsDetection {
        attack_range: f32,
        detection_range: f32,
    },
}

/// Errors that can occur when loading zombie definition files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The file parsed but describes an enemy that can't be built.
    #[error("Invalid definition in '{path}': {source}")]
    InvalidDefinition {
        path: String,
        #[source]
        source: ConfigError,
    },
}
