//! Core types for the commits analyser.
//!
//! Holds the error taxonomy, the fixed classification schemes and their
//! feature catalog, the per-developer [`models::Aggregate`], the chart payload
//! handed to the presentation layer, and the command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{AnalyserError, Result};
pub use models::{Aggregate, ChartData, IdentityMap, Scheme, SchemeCounts};
