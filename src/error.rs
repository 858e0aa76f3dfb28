//! Error types surfaced by configuration, validation, and note naming.

use thiserror::Error;

/// Everything that can stop a diagram from being laid out.
#[derive(Debug, Error)]
pub enum FretboardError {
    /// A fingering entry points outside the fretboard or carries a bad fret.
    /// `index` is the entry's position in the fingering list.
    #[error("invalid fingering entry {index}: {reason}")]
    InvalidFingering { index: usize, reason: String },

    /// The fretboard dimensions cannot produce a diagram.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Note names were requested but the tuning does not cover every string.
    #[error("note names need a tuning for {strings} strings, got {tuning}")]
    MissingTuning { strings: usize, tuning: usize },

    /// A tuning entry is not a recognizable pitch name.
    #[error("unknown pitch name '{0}'")]
    UnknownPitch(String),

    /// Malformed JSON options.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FretboardError>;
