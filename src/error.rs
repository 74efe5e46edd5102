//! Error types for index construction and cluster lookups.

use crate::marker::ClusterId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClusterError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClusterError {
    /// A point handed to `build` has a non-finite or out-of-range coordinate.
    #[error("Invalid point at index {index}: {reason}")]
    InvalidPoint { index: usize, reason: String },

    /// The id is unknown to this index, usually because it came from an
    /// earlier build.
    #[error("Cluster not found: {0}")]
    ClusterNotFound(ClusterId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
