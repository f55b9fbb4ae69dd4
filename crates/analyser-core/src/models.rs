use crate::error::{AnalyserError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── Scheme ────────────────────────────────────────────────────────────────────

/// The three fixed commit classification schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scheme {
    /// Swanson's maintenance tasks.
    #[serde(rename = "SwM tasks")]
    SwmTasks,
    /// Non-functional requirement labels.
    #[serde(rename = "NFR Labeling")]
    NfrLabeling,
    /// Software evolution tasks.
    #[serde(rename = "SoftEvol tasks")]
    SoftEvolTasks,
}

const SWM_FEATURES: [&str; 3] = ["Adaptive Tasks", "Corrective Tasks", "Perfective Tasks"];

const NFR_FEATURES: [&str; 6] = [
    "Maintainability",
    "Usability",
    "Functionality",
    "Reliability",
    "Efficiency",
    "Portability",
];

const SOFT_EVOL_FEATURES: [&str; 4] = [
    "Forward Engineering",
    "Re-Engineering",
    "Corrective",
    "Code Management",
];

impl Scheme {
    /// All schemes in column order of the commits file.
    pub const ALL: [Scheme; 3] = [Scheme::SwmTasks, Scheme::NfrLabeling, Scheme::SoftEvolTasks];

    /// Aggregation key, e.g. `"SwM tasks"`.
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::SwmTasks => "SwM tasks",
            Scheme::NfrLabeling => "NFR Labeling",
            Scheme::SoftEvolTasks => "SoftEvol tasks",
        }
    }

    /// Long name shown in the interactive scheme picker.
    pub fn title(&self) -> &'static str {
        match self {
            Scheme::SwmTasks => "Swanson's Maintenance Tasks",
            Scheme::NfrLabeling => "NFR Labeling",
            Scheme::SoftEvolTasks => "Software Evolution Tasks",
        }
    }

    /// Feature labels, parallel-indexed with the scheme's count vector.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Scheme::SwmTasks => &SWM_FEATURES,
            Scheme::NfrLabeling => &NFR_FEATURES,
            Scheme::SoftEvolTasks => &SOFT_EVOL_FEATURES,
        }
    }

    /// Number of features (and counts) in this scheme.
    pub fn feature_count(&self) -> usize {
        self.features().len()
    }

    /// Position of `feature` in the catalog, matched exactly.
    pub fn feature_index(&self, feature: &str) -> Option<usize> {
        self.features().iter().position(|f| *f == feature)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = AnalyserError;

    /// Accepts the aggregation keys (`"SwM tasks"`, `"NFR Labeling"`,
    /// `"SoftEvol tasks"`).
    fn from_str(value: &str) -> Result<Self> {
        Scheme::ALL
            .into_iter()
            .find(|s| s.name() == value)
            .ok_or_else(|| AnalyserError::UnknownScheme(value.to_string()))
    }
}

// ── SchemeCounts ──────────────────────────────────────────────────────────────

/// Per-developer count vectors, one fixed-length vector per scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemeCounts {
    #[serde(rename = "SwM tasks")]
    pub swm: [u64; 3],
    #[serde(rename = "NFR Labeling")]
    pub nfr: [u64; 6],
    #[serde(rename = "SoftEvol tasks")]
    pub soft_evol: [u64; 4],
}

impl SchemeCounts {
    /// The count vector for `scheme`, in catalog order.
    pub fn counts(&self, scheme: Scheme) -> &[u64] {
        match scheme {
            Scheme::SwmTasks => &self.swm,
            Scheme::NfrLabeling => &self.nfr,
            Scheme::SoftEvolTasks => &self.soft_evol,
        }
    }

    fn counts_mut(&mut self, scheme: Scheme) -> &mut [u64] {
        match scheme {
            Scheme::SwmTasks => &mut self.swm,
            Scheme::NfrLabeling => &mut self.nfr,
            Scheme::SoftEvolTasks => &mut self.soft_evol,
        }
    }

    /// Add `values` position-wise into the vector for `scheme`.
    ///
    /// Returns `false` and leaves the vector untouched if any slot would
    /// overflow. Extra values beyond the scheme length are ignored.
    pub fn try_add(&mut self, scheme: Scheme, values: &[u64]) -> bool {
        let slots = self.counts_mut(scheme);
        let mut sums = Vec::with_capacity(slots.len());
        for (slot, value) in slots.iter().zip(values) {
            match slot.checked_add(*value) {
                Some(sum) => sums.push(sum),
                None => return false,
            }
        }
        for (slot, sum) in slots.iter_mut().zip(sums) {
            *slot = sum;
        }
        true
    }

    /// Sum of the vector for `scheme`, saturating at `u64::MAX`.
    pub fn total(&self, scheme: Scheme) -> u64 {
        self.counts(scheme)
            .iter()
            .fold(0u64, |acc, n| acc.saturating_add(*n))
    }
}

// ── IdentityMap ───────────────────────────────────────────────────────────────

/// Committer id → developer name mapping read from the identities file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdentityMap {
    names: IndexMap<String, String>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id → name`, returning the previous name for a repeated id.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.names.insert(id.into(), name.into())
    }

    /// Developer name for a committer id.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ── Aggregate ─────────────────────────────────────────────────────────────────

/// Developer name → [`SchemeCounts`], iterated in insertion order.
///
/// Insertion order decides tie-breaks in max-finder queries, so the map must
/// stay ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Aggregate {
    developers: IndexMap<String, SchemeCounts>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset `name` to all-zero vectors, appending it if it is new.
    ///
    /// A name seen before keeps its original position.
    pub fn seed_developer(&mut self, name: impl Into<String>) {
        self.developers.insert(name.into(), SchemeCounts::default());
    }

    pub fn get(&self, name: &str) -> Option<&SchemeCounts> {
        self.developers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SchemeCounts> {
        self.developers.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.developers.contains_key(name)
    }

    /// Developer names in insertion order.
    pub fn developers(&self) -> impl Iterator<Item = &str> {
        self.developers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemeCounts)> {
        self.developers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.developers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.developers.is_empty()
    }
}

// ── ChartData ─────────────────────────────────────────────────────────────────

/// A bar chart request handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    /// Bar labels (features or developers).
    pub labels: Vec<String>,
    /// Bar heights, parallel to `labels`.
    pub values: Vec<u64>,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub title: String,
}

impl ChartData {
    /// Largest bar value, `0` for an empty chart.
    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
