//! Error types.

use thiserror::Error;

/// Errors surfaced to the caller of a run.
///
/// Every failure is local to one run; nothing in the crate aborts the
/// process on bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowshopError {
    /// Non-positive job/machine count or a malformed processing-time matrix.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// The requested algorithm name is not one of the recognised names.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A parameter value could not be interpreted (wrong type, unknown
    /// label, non-finite number).
    #[error("invalid parameter `{key}`: {reason}")]
    InvalidParameter { key: String, reason: String },

    /// An instance provider has no mapping for the requested name.
    #[error("instance not found: {0}")]
    InstanceNotFound(String),
}

impl FlowshopError {
    pub(crate) fn invalid_parameter(key: &str, reason: impl Into<String>) -> Self {
        FlowshopError::InvalidParameter {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FlowshopError>;
