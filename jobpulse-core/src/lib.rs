//! Jobpulse Core
//!
//! Core types and logic for the Jobpulse job-board analytics pipeline.
//!
//! This crate contains:
//! - Domain types: postings, canonical categories, classified postings
//! - Classifier: ordered title rules for function and seniority
//! - Normalizer: upstream department labels to canonical categories
//! - Reports: function, company, snapshot and cross-posting aggregates
//! - DTOs: rows of the remote analytics tables
//! - Dataset: the CSV file between scrape and sync
//!
//! Nothing here performs network I/O.

pub mod classify;
pub mod dataset;
pub mod domain;
pub mod dto;
pub mod error;
pub mod normalize;
pub mod report;

pub use classify::classify_title;
pub use error::{CoreError, Result};
pub use normalize::CategoryNormalizer;
