//! Data Transfer Objects for the remote tables
//!
//! Each DTO is one row of a managed table, with fields renamed to the exact
//! column names of that table. DTOs are built from the domain types and
//! reports and flattened to a JSON field map before being handed to a table
//! store.

pub mod company;
pub mod function;
pub mod job;
pub mod pooling;
pub mod snapshot;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CoreError, Result};

pub use company::CompanyRecord;
pub use function::FunctionRecord;
pub use job::JobRecord;
pub use pooling::PoolingRecord;
pub use snapshot::{DEFAULT_SNAPSHOT_NOTES, SnapshotRecord};

/// Column name to value map of a single table row
pub type Fields = Map<String, Value>;

/// A row that can be written to a remote table
pub trait TableRecord: Serialize {
    /// Flatten the record into its column map
    fn to_fields(&self) -> Result<Fields> {
        match serde_json::to_value(self).map_err(|e| CoreError::Record(e.to_string()))? {
            Value::Object(fields) => Ok(fields),
            other => Err(CoreError::Record(format!(
                "expected a column map, got {}",
                other
            ))),
        }
    }
}

impl TableRecord for JobRecord {}
impl TableRecord for FunctionRecord {}
impl TableRecord for CompanyRecord {}
impl TableRecord for SnapshotRecord {}
impl TableRecord for PoolingRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Bare(u32);

    impl TableRecord for Bare {}

    #[derive(Serialize)]
    struct Keyed {
        cells: HashMap<(u8, u8), u8>,
    }

    impl TableRecord for Keyed {}

    #[test]
    fn test_non_map_record_is_an_error() {
        let err = Bare(7).to_fields().unwrap_err();
        assert!(matches!(err, CoreError::Record(_)));
    }

    #[test]
    fn test_unserializable_record_is_an_error() {
        let record = Keyed {
            cells: HashMap::from([((0, 1), 2)]),
        };
        assert!(matches!(record.to_fields(), Err(CoreError::Record(_))));
    }
}
