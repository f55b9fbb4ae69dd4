//! Commit aggregation into per-developer scheme counts.
//!
//! Each commit row carries one count vector per classification scheme. The
//! aggregator resolves the committer to a developer name and adds the vectors
//! position-wise into that developer's [`SchemeCounts`].

use analyser_core::error::{AnalyserError, Result};
use analyser_core::models::{Aggregate, IdentityMap, Scheme, SchemeCounts};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::reader::data_rows;

/// Number of comma-separated fields in a commit row.
pub const COMMIT_FIELDS: usize = 16;

const SWM_RANGE: std::ops::Range<usize> = 1..4;
const NFR_RANGE: std::ops::Range<usize> = 4..10;
const SOFT_EVOL_RANGE: std::ops::Range<usize> = 10..14;
const COMMITTER_FIELD: usize = 14;
const MESSAGE_FIELD: usize = 15;

// ── CommitRecord ──────────────────────────────────────────────────────────────

/// One parsed row of the commits file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub commit_id: String,
    /// Classification counts, one vector per scheme.
    pub counts: SchemeCounts,
    pub committer_id: String,
    /// Free-text commit message; may contain commas.
    pub message: String,
}

impl CommitRecord {
    /// Parse a single commit row.
    ///
    /// The row is split on the first fifteen commas only, so the message
    /// (always last) keeps any commas of its own. `line` is used for error
    /// reporting.
    pub fn parse(line: usize, row: &str) -> Result<Self> {
        let fields: Vec<&str> = row.splitn(COMMIT_FIELDS, ',').collect();
        if fields.len() < COMMIT_FIELDS {
            return Err(AnalyserError::format(
                line,
                format!(
                    "expected {} fields, found {}",
                    COMMIT_FIELDS,
                    fields.len()
                ),
            ));
        }

        let mut counts = SchemeCounts::default();
        parse_counts(line, &fields[SWM_RANGE], &mut counts.swm)?;
        parse_counts(line, &fields[NFR_RANGE], &mut counts.nfr)?;
        parse_counts(line, &fields[SOFT_EVOL_RANGE], &mut counts.soft_evol)?;

        Ok(Self {
            commit_id: fields[0].to_string(),
            counts,
            committer_id: fields[COMMITTER_FIELD].to_string(),
            message: fields[MESSAGE_FIELD].to_string(),
        })
    }
}

/// Parse a segment of count fields into `out`. Surrounding whitespace is
/// tolerated; anything that is not a non-negative integer is rejected.
fn parse_counts(line: usize, fields: &[&str], out: &mut [u64]) -> Result<()> {
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = field.trim().parse::<u64>().map_err(|_| {
            AnalyserError::format(
                line,
                format!("count field {field:?} is not a non-negative integer"),
            )
        })?;
    }
    Ok(())
}

// ── aggregate_commits ─────────────────────────────────────────────────────────

/// Add every commit row into `aggregate`, keyed by the committer's developer
/// name.
///
/// The first row is a header and is discarded. Commit ids are not
/// deduplicated, so feeding the same rows twice doubles every count.
///
/// All rows are parsed, resolved and summed before any count is applied: on a
/// [`AnalyserError::Format`] (including a count overflow) or
/// [`AnalyserError::UnknownCommitter`] failure the aggregate is left exactly
/// as it was.
pub fn aggregate_commits<I, S>(
    rows: I,
    identities: &IdentityMap,
    aggregate: &mut Aggregate,
) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Running totals per touched developer, swapped in only once every row
    // has been checked.
    let mut pending: IndexMap<&str, SchemeCounts> = IndexMap::new();
    let mut applied = 0;

    for (line, row) in data_rows(rows) {
        let record = CommitRecord::parse(line, row.as_ref())?;
        let name = identities
            .resolve(&record.committer_id)
            .ok_or_else(|| AnalyserError::UnknownCommitter(record.committer_id.clone()))?;
        let Some(current) = aggregate.get(name) else {
            // Only reachable when the caller pairs an identity map with an
            // aggregate it did not seed.
            return Err(AnalyserError::UnknownDeveloper(name.to_string()));
        };
        let totals = pending.entry(name).or_insert_with(|| current.clone());
        for scheme in Scheme::ALL {
            if !totals.try_add(scheme, record.counts.counts(scheme)) {
                return Err(AnalyserError::format(line, "count overflow"));
            }
        }
        debug!("Commit {} attributed to {}", record.commit_id, name);
        applied += 1;
    }

    for (name, totals) in pending {
        if let Some(target) = aggregate.get_mut(name) {
            *target = totals;
        }
    }

    info!(
        "Aggregated {} commits across {} developers",
        applied,
        aggregate.len()
    );

    Ok(applied)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
