//! Core domain types
//!
//! This module contains the entities that flow through the pipeline: raw
//! postings from the board, the canonical categories they are tagged with,
//! and the classified postings that feed the aggregator and the sync.

pub mod category;
pub mod classified;
pub mod posting;

pub use category::{FunctionCategory, RemoteStatus, SeniorityLevel};
pub use classified::ClassifiedPosting;
pub use posting::{DecodedPostings, Posting, decode_postings};
