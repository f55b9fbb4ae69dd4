use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the commits analyser.
#[derive(Error, Debug)]
pub enum AnalyserError {
    /// An input file could not be opened or read from disk.
    #[error("could not open file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row did not match the expected layout. `line` is 1-based and counts
    /// the header.
    #[error("malformed row at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// A commit row referenced a committer id missing from the identities.
    #[error("Unknown committer id: {0}")]
    UnknownCommitter(String),

    /// A query named a developer that is not part of the aggregate.
    #[error("Unknown developer: {0}")]
    UnknownDeveloper(String),

    /// A query named a feature outside the scheme's catalog.
    #[error("Unknown feature {feature:?} for scheme {scheme}")]
    UnknownFeature { feature: String, scheme: String },

    /// A scheme name is not one of the three fixed schemes.
    #[error("Unknown classification scheme: {0}")]
    UnknownScheme(String),

    /// A max-finder query ran over an aggregate without developers.
    #[error("No developers loaded")]
    EmptyAggregate,

    /// The aggregate could not be serialized.
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnalyserError {
    /// Shorthand for a [`AnalyserError::Format`] error.
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        AnalyserError::Format {
            line,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the analyser crates.
pub type Result<T> = std::result::Result<T, AnalyserError>;
