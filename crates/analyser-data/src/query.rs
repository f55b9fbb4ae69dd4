//! Read-only queries over a built [`Aggregate`].
//!
//! The engine answers three shapes of question: one developer's counts for a
//! scheme, one feature's count for every developer, and which developer has
//! the most commits for a feature. It also packages the first two as
//! [`ChartData`] for the presentation layer.

use analyser_core::error::{AnalyserError, Result};
use analyser_core::models::{Aggregate, ChartData, Scheme};
use indexmap::IndexMap;

/// Query engine borrowing an immutable aggregate snapshot.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    aggregate: &'a Aggregate,
}

impl<'a> QueryEngine<'a> {
    pub fn new(aggregate: &'a Aggregate) -> Self {
        Self { aggregate }
    }

    /// Developer names in aggregate order.
    pub fn developers(&self) -> impl Iterator<Item = &'a str> {
        self.aggregate.developers()
    }

    /// Feature labels and count vector for `name` under `scheme`, both in
    /// catalog order.
    pub fn developer_vector(
        &self,
        name: &str,
        scheme: Scheme,
    ) -> Result<(&'static [&'static str], &'a [u64])> {
        let counts = self
            .aggregate
            .get(name)
            .ok_or_else(|| AnalyserError::UnknownDeveloper(name.to_string()))?;
        Ok((scheme.features(), counts.counts(scheme)))
    }

    /// Count of `feature` for every developer, in aggregate order.
    pub fn feature_across_developers(
        &self,
        feature: &str,
        scheme: Scheme,
    ) -> Result<IndexMap<&'a str, u64>> {
        let index = feature_index(feature, scheme)?;
        Ok(self
            .aggregate
            .iter()
            .map(|(name, counts)| (name, counts.counts(scheme)[index]))
            .collect())
    }

    /// Developer with the highest count for `feature`.
    ///
    /// On a tie the developer that comes first in aggregate order wins.
    pub fn argmax_developer(&self, feature: &str, scheme: Scheme) -> Result<&'a str> {
        let per_developer = self.feature_across_developers(feature, scheme)?;

        let mut best: Option<(&'a str, u64)> = None;
        for (name, count) in per_developer {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((name, count)),
            }
        }

        best.map(|(name, _)| name)
            .ok_or(AnalyserError::EmptyAggregate)
    }

    // ── Chart builders ────────────────────────────────────────────────────────

    /// Bar chart of one developer's counts across the scheme's features.
    pub fn developer_chart(&self, name: &str, scheme: Scheme) -> Result<ChartData> {
        let (labels, counts) = self.developer_vector(name, scheme)?;
        Ok(ChartData {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: counts.to_vec(),
            x_axis_title: "Features".to_string(),
            y_axis_title: "Commits".to_string(),
            title: format!("Commits by {name} for {scheme}"),
        })
    }

    /// Bar chart of one feature's count for every developer.
    pub fn feature_chart(&self, feature: &str, scheme: Scheme) -> Result<ChartData> {
        let per_developer = self.feature_across_developers(feature, scheme)?;
        let (labels, values): (Vec<String>, Vec<u64>) = per_developer
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .unzip();
        Ok(ChartData {
            labels,
            values,
            x_axis_title: "Developers".to_string(),
            y_axis_title: "Commits".to_string(),
            title: format!("Commits for {feature}"),
        })
    }
}

fn feature_index(feature: &str, scheme: Scheme) -> Result<usize> {
    scheme
        .feature_index(feature)
        .ok_or_else(|| AnalyserError::UnknownFeature {
            feature: feature.to_string(),
            scheme: scheme.name().to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
