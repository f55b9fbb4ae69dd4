//! Load pipeline for the commits analyser.
//!
//! Reads both input files, builds the identity map and the aggregate, and
//! derives per-developer totals for the summary view.

use std::path::Path;

use analyser_core::error::Result;
use analyser_core::models::{Aggregate, IdentityMap, Scheme};
use serde::Serialize;
use tracing::info;

use crate::aggregator::aggregate_commits;
use crate::identities::load_identities;
use crate::query::QueryEngine;
use crate::reader::read_lines;

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Result of the load phase. Read-only from here on.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub identities: IdentityMap,
    pub aggregate: Aggregate,
    /// Number of commit rows applied to the aggregate.
    pub commits_loaded: usize,
}

impl Dataset {
    /// Query engine over this dataset's aggregate.
    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.aggregate)
    }
}

/// Run the full load phase.
///
/// 1. Read the commits file, then the identities file (argument order).
/// 2. Build the identity map and seed the aggregate.
/// 3. Aggregate every commit row.
///
/// Both files are read before any parsing, so a missing second file is
/// reported before a malformed first one.
pub fn load_dataset(commits_path: &Path, identities_path: &Path) -> Result<Dataset> {
    let commit_rows = read_lines(commits_path)?;
    let identity_rows = read_lines(identities_path)?;

    let (identities, mut aggregate) = load_identities(&identity_rows)?;
    let commits_loaded = aggregate_commits(&commit_rows, &identities, &mut aggregate)?;

    info!(
        "Loaded {} commits from {} for {} developers",
        commits_loaded,
        commits_path.display(),
        aggregate.len()
    );

    Ok(Dataset {
        identities,
        aggregate,
        commits_loaded,
    })
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Per-scheme commit totals for one developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperTotals {
    pub developer: String,
    pub swm: u64,
    pub nfr: u64,
    pub soft_evol: u64,
}

impl DeveloperTotals {
    /// Total for `scheme`.
    pub fn get(&self, scheme: Scheme) -> u64 {
        match scheme {
            Scheme::SwmTasks => self.swm,
            Scheme::NfrLabeling => self.nfr,
            Scheme::SoftEvolTasks => self.soft_evol,
        }
    }
}

/// One [`DeveloperTotals`] row per developer, in aggregate order.
pub fn summarize(aggregate: &Aggregate) -> Vec<DeveloperTotals> {
    aggregate
        .iter()
        .map(|(name, counts)| DeveloperTotals {
            developer: name.to_string(),
            swm: counts.total(Scheme::SwmTasks),
            nfr: counts.total(Scheme::NfrLabeling),
            soft_evol: counts.total(Scheme::SoftEvolTasks),
        })
        .collect()
}

/// Column totals across all rows, saturating at `u64::MAX`.
pub fn grand_totals(rows: &[DeveloperTotals]) -> DeveloperTotals {
    rows.iter().fold(
        DeveloperTotals {
            developer: "TOTAL".to_string(),
            swm: 0,
            nfr: 0,
            soft_evol: 0,
        },
        |mut acc, row| {
            acc.swm = acc.swm.saturating_add(row.swm);
            acc.nfr = acc.nfr.saturating_add(row.nfr);
            acc.soft_evol = acc.soft_evol.saturating_add(row.soft_evol);
            acc
        },
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
