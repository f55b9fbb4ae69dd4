//! Data ingestion and query layer for the commits analyser.
//!
//! Responsible for reading the commits and identities exports, building the
//! per-developer aggregate, and answering queries over it.

pub mod aggregator;
pub mod analysis;
pub mod identities;
pub mod query;
pub mod reader;

pub use analyser_core as core;
