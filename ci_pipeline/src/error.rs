//! Errors raised while evaluating or shaping a compiled pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid regular expression {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("secret engine {0:?} is not supported")]
    InvalidEngine(String),

    #[error("invalid secret path {0:?}")]
    InvalidPath(String),

    #[error("secret org {found:?} does not match {expected:?}")]
    InvalidOrg { found: String, expected: String },

    #[error("secret repo {found:?} does not match {expected:?}")]
    InvalidRepo { found: String, expected: String },

    #[error("invalid volume {0:?}: expected source[:destination[:mode]]")]
    InvalidVolume(String),

    #[error("invalid ulimit {0:?}: expected name=soft[:hard]")]
    InvalidUlimit(String),

    #[error("invalid port {0:?}: expected [host:]container[/protocol]")]
    InvalidPort(String),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
