//! Error types for the sync pipeline

use std::fmt;

use jobpulse_client::ClientError;
use jobpulse_core::CoreError;
use thiserror::Error;

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Step of a table reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Read,
    Delete,
    Create,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Read => "read",
            Phase::Delete => "delete",
            Phase::Create => "create",
        };
        f.write_str(name)
    }
}

/// Errors raised while publishing to the table store
#[derive(Debug, Error)]
pub enum SyncError {
    /// A store request failed; nothing already written is rolled back
    #[error("Failed to {phase} records in table {table}: {source}")]
    Store {
        table: String,
        phase: Phase,
        #[source]
        source: ClientError,
    },

    /// A report row could not be encoded for the store
    #[error(transparent)]
    Record(#[from] CoreError),

    /// Missing or out-of-range configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SyncError {
    pub(crate) fn store(table: &str, phase: Phase) -> impl FnOnce(ClientError) -> Self + '_ {
        move |source| Self::Store {
            table: table.to_string(),
            phase,
            source,
        }
    }

    /// Phase in which a store request failed
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Store { phase, .. } => Some(*phase),
            Self::Record(_) | Self::Config(_) => None,
        }
    }
}
