//! Jobpulse Sync
//!
//! Publishes a classified dataset to the remote analytics tables.
//!
//! # Architecture
//!
//! - **Store**: the [`TableStore`] seam, implemented by the Airtable client
//!   and by [`InMemoryStore`]
//! - **Pipeline**: destroy-then-recreate reconciliation of one table, in
//!   paced batches
//! - **Publisher**: computes the reports and syncs every managed table in a
//!   fixed order, one run at a time
//!
//! Everything runs sequentially; the only waits are the pauses between
//! write batches.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod publish;
pub mod store;

pub use config::{SyncConfig, Table, TableIds};
pub use error::{Phase, Result, SyncError};
pub use pipeline::{SyncMode, SyncOutcome, SyncPipeline};
pub use publish::{PublishReport, Publisher};
pub use store::{InMemoryStore, TableStore};
