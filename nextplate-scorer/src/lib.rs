//! Cluster scoring for restaurant location recommendations.
//!
//! The pipeline runs per request over an in-memory
//! [`Dataset`](nextplate_core::Dataset):
//! 1. [`filter_restaurants`] applies the district, macro-category and
//!    sub-category selectors.
//! 2. [`merge_scope`] aggregates restaurants per `(district, cluster)`, once
//!    as a baseline ignoring the sub-category and once for direct
//!    competitors, and left-joins the two.
//! 3. [`score_clusters`] min-max normalises every metric column across the
//!    scope, combines them with caller weights and attaches cluster centers.
//! 4. [`pick_locations`] keeps the best and worst clusters.
//!
//! [`LocationRecommender`] wires the stages together.

#![forbid(unsafe_code)]

mod aggregate;
mod error;
mod filter;
mod normalise;
mod pick;
mod recommender;
mod score;

pub use aggregate::{
    ClusterAggregate, ClusterMetrics, CompetitorCount, DirectCompetitors, aggregate_clusters,
    merge_scope,
};
pub use error::ScoreError;
pub use filter::{filter_restaurants, matches_selection};
pub use normalise::MinMaxScaler;
pub use pick::{LocationPick, PickLimits, RankedCluster, pick_locations};
pub use recommender::{LocationRecommender, Recommendation};
pub use score::{NormalisedMetrics, ScoredCluster, normalise_metrics, score_clusters, weighted_score};
