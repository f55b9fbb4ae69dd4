//! Committer identity loading.
//!
//! Turns the identities export (`committer_id,developer_name`) into an
//! [`IdentityMap`] and seeds an all-zero [`Aggregate`] entry per developer.

use analyser_core::error::{AnalyserError, Result};
use analyser_core::models::{Aggregate, IdentityMap};
use tracing::{debug, info};

use crate::reader::data_rows;

/// Parse identity rows into an id → name map and a zero-seeded aggregate.
///
/// The first row is a header and is discarded. Each data row needs at least
/// two comma-separated fields; extra fields are ignored. A repeated id keeps
/// the last name seen. A repeated name is re-seeded to zero, which is
/// harmless since no commits have been counted yet.
pub fn load_identities<I, S>(rows: I) -> Result<(IdentityMap, Aggregate)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut identities = IdentityMap::new();
    let mut aggregate = Aggregate::new();

    for (line, row) in data_rows(rows) {
        let row = row.as_ref();
        let mut fields = row.split(',');
        let (Some(id), Some(name)) = (fields.next(), fields.next()) else {
            return Err(AnalyserError::format(
                line,
                "expected at least 2 fields (committer_id,developer_name)",
            ));
        };

        if let Some(previous) = identities.insert(id, name) {
            debug!("Committer id {id} remapped from {previous} to {name}");
        }
        aggregate.seed_developer(name);
    }

    info!(
        "Loaded {} committer ids for {} developers",
        identities.len(),
        aggregate.len()
    );

    Ok((identities, aggregate))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
