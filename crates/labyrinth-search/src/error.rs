//! Search and sink errors.

use labyrinth_core::{ConfigError, TopologyError};
use std::error::Error;
use std::fmt;

/// A [`ResultSink`](crate::ResultSink) could not store a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkError {
    /// Writing the result failed.
    Write {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { reason } => write!(f, "failed to write result: {reason}"),
        }
    }
}

impl Error for SinkError {}

/// Errors that stop a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The configuration was rejected before searching.
    Config(ConfigError),
    /// A walked path violated a grid invariant.
    Topology(TopologyError),
    /// The result sink failed.
    Sink(SinkError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Topology(e) => write!(f, "topology: {e}"),
            Self::Sink(e) => write!(f, "sink: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Topology(e) => Some(e),
            Self::Sink(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<TopologyError> for SearchError {
    fn from(e: TopologyError) -> Self {
        Self::Topology(e)
    }
}

impl From<SinkError> for SearchError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}
