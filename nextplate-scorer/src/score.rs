//! Score normaliser: min-max scaling, weighted score and center join.
//!
//! Normalisation bounds come from the rows passed in, so scores are only
//! comparable within a single query.

use geo::Coord;
use nextplate_core::{Dataset, ScoreWeights};
use serde::Serialize;

use crate::aggregate::ClusterMetrics;
use crate::error::ScoreError;
use crate::normalise::MinMaxScaler;

/// Per-cluster metrics rescaled onto `[0, 1]` across the scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalisedMetrics {
    /// Normalised baseline competitor count.
    pub competitors: f64,
    /// Normalised direct-competitor count, when a sub-category is selected.
    pub direct_competitors: Option<f64>,
    /// Normalised mean review count.
    pub mean_review_count: f64,
    /// Normalised mean rating.
    pub mean_rating: f64,
}

/// A cluster with its metrics, normalised metrics, score and center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCluster {
    /// Raw merged metrics.
    #[serde(flatten)]
    pub metrics: ClusterMetrics,
    /// Metrics scaled across the scope.
    pub normalised: NormalisedMetrics,
    /// Weighted desirability in `[0, 1]`; higher is better.
    pub score: f64,
    /// Cluster center (`x = longitude`, `y = latitude`).
    pub center: Coord<f64>,
}

/// Min-max scale every metric column across `metrics`.
///
/// The result is index-aligned with the input.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "restaurant counts are far below 2^52"
)]
pub fn normalise_metrics(metrics: &[ClusterMetrics], scaler: &MinMaxScaler) -> Vec<NormalisedMetrics> {
    let column = |f: &dyn Fn(&ClusterMetrics) -> f64| -> Vec<f64> { metrics.iter().map(f).collect() };

    let competitors = scaler.normalise(&column(&|m| m.competitors as f64));
    let reviews = scaler.normalise(&column(&|m| m.mean_review_count));
    let ratings = scaler.normalise(&column(&|m| m.mean_rating));
    let direct = scaler.normalise(&column(&|m| {
        m.direct_competitors.as_ref().map_or(0.0, |d| d.count as f64)
    }));

    metrics
        .iter()
        .zip(competitors)
        .zip(reviews)
        .zip(ratings)
        .zip(direct)
        .map(
            |((((row, competitors), mean_review_count), mean_rating), direct)| NormalisedMetrics {
                competitors,
                direct_competitors: row.direct_competitors.as_ref().map(|_| direct),
                mean_review_count,
                mean_rating,
            },
        )
        .collect()
}

/// Combine normalised metrics into a single desirability score.
///
/// Fewer competitors, more reviews and a lower mean rating all raise the
/// score. When a direct-competitor column is present it is weighted by the
/// competition weight a second time.
///
/// # Errors
/// Returns [`ScoreError::InvalidWeights`] when every weight is zero.
#[expect(
    clippy::float_arithmetic,
    reason = "the score is a weighted mean of normalised floats"
)]
pub fn weighted_score(normalised: &NormalisedMetrics, weights: ScoreWeights) -> Result<f64, ScoreError> {
    if weights.is_zero() {
        return Err(ScoreError::InvalidWeights);
    }
    let wc = f64::from(weights.competition());
    let wp = f64::from(weights.popularity());
    let ws = f64::from(weights.satisfaction());

    let mut numerator = wc * (1.0 - normalised.competitors)
        + wp * normalised.mean_review_count
        + ws * (1.0 - normalised.mean_rating);
    let mut denominator = wc + wp + ws;
    if let Some(direct) = normalised.direct_competitors {
        numerator += wc * (1.0 - direct);
        denominator += wc;
    }
    Ok(numerator / denominator)
}

/// Normalise, score and locate every cluster in `metrics`.
///
/// Rows keep their input order.
///
/// # Errors
/// Returns [`ScoreError::InvalidWeights`] when every weight is zero, even for
/// an empty scope, and [`ScoreError::MissingClusterCenter`] when a cluster has
/// no center in `dataset`.
pub fn score_clusters(
    metrics: Vec<ClusterMetrics>,
    weights: ScoreWeights,
    scaler: &MinMaxScaler,
    dataset: &Dataset,
) -> Result<Vec<ScoredCluster>, ScoreError> {
    if weights.is_zero() {
        return Err(ScoreError::InvalidWeights);
    }
    let normalised = normalise_metrics(&metrics, scaler);
    metrics
        .into_iter()
        .zip(normalised)
        .map(|(row, normalised)| {
            let score = weighted_score(&normalised, weights)?;
            let center = dataset
                .cluster_center(&row.key.cluster)
                .ok_or_else(|| ScoreError::MissingClusterCenter {
                    cluster: row.key.cluster.clone(),
                    district: row.key.district.clone(),
                })?
                .location;
            Ok(ScoredCluster {
                metrics: row,
                normalised,
                score,
                center,
            })
        })
        .collect()
}
