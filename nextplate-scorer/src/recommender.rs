//! Request-time pipeline: filter, aggregate, score and pick.

use log::{debug, info};
use nextplate_core::{Dataset, Restaurant, ScoreWeights, Selection};
use serde::Serialize;

use crate::aggregate::merge_scope;
use crate::error::ScoreError;
use crate::filter::filter_restaurants;
use crate::normalise::MinMaxScaler;
use crate::pick::{LocationPick, PickLimits, RankedCluster, pick_locations};
use crate::score::{ScoredCluster, score_clusters};

/// Everything a presentation layer needs for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    /// Restaurants matching the full selection, for thematic overlays.
    pub filtered: Vec<&'a Restaurant>,
    /// Most desirable clusters, best first.
    pub best: Vec<RankedCluster>,
    /// Least desirable clusters, worst first.
    pub worst: Vec<RankedCluster>,
}

/// Ranks clusters of a dataset against caller selections and weights.
///
/// The recommender holds no per-request state; each call recomputes the
/// pipeline from the dataset.
///
/// # Examples
/// ```
/// use nextplate_core::test_support::{MemorySource, RestaurantBuilder};
/// use nextplate_core::{DatasetSource, ScoreWeights, Selection};
/// use nextplate_scorer::LocationRecommender;
///
/// let dataset = MemorySource::with_restaurants([
///     RestaurantBuilder::new("p1").cluster("a").reviews(10).build(),
///     RestaurantBuilder::new("p2").cluster("b").reviews(90).build(),
/// ])
/// .load()
/// .expect("dataset");
///
/// let recommender = LocationRecommender::new(&dataset);
/// let result = recommender
///     .recommend(&Selection::all(), ScoreWeights::default())
///     .expect("recommendation");
/// assert_eq!(result.best.first().map(|r| r.cluster.metrics.key.cluster.as_str()), Some("b"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocationRecommender<'a> {
    dataset: &'a Dataset,
    scaler: MinMaxScaler,
    limits: PickLimits,
}

impl<'a> LocationRecommender<'a> {
    /// Build a recommender with the default scaler and pick limits.
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            scaler: MinMaxScaler::default(),
            limits: PickLimits::default(),
        }
    }

    /// Replace the scaler used for normalisation.
    #[must_use]
    pub const fn with_scaler(mut self, scaler: MinMaxScaler) -> Self {
        self.scaler = scaler;
        self
    }

    /// Replace the best/worst list lengths.
    #[must_use]
    pub const fn with_limits(mut self, limits: PickLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Restaurants matching every selector, in dataset order.
    ///
    /// # Errors
    /// Returns [`ScoreError::Selection`] when the selection names an unknown
    /// district or category.
    pub fn filtered(&self, selection: &Selection) -> Result<Vec<&'a Restaurant>, ScoreError> {
        self.dataset.validate_selection(selection)?;
        Ok(filter_restaurants(self.dataset.restaurants(), selection))
    }

    /// Score every cluster in scope, in aggregate order.
    ///
    /// # Errors
    /// Returns [`ScoreError::Selection`] for an invalid selection,
    /// [`ScoreError::InvalidWeights`] when every weight is zero and
    /// [`ScoreError::MissingClusterCenter`] when a scored cluster has no
    /// center.
    pub fn score(
        &self,
        selection: &Selection,
        weights: ScoreWeights,
    ) -> Result<Vec<ScoredCluster>, ScoreError> {
        self.dataset.validate_selection(selection)?;
        if weights.is_zero() {
            return Err(ScoreError::InvalidWeights);
        }
        let merged = merge_scope(self.dataset.restaurants(), selection);
        debug!("scoring {} clusters", merged.len());
        score_clusters(merged, weights, &self.scaler, self.dataset)
    }

    /// Run the full pipeline and pick the best and worst clusters.
    ///
    /// # Errors
    /// Propagates every error of [`Self::score`].
    pub fn recommend(
        &self,
        selection: &Selection,
        weights: ScoreWeights,
    ) -> Result<Recommendation<'a>, ScoreError> {
        let scored = self.score(selection, weights)?;
        let limit = self.limits.for_scope(selection.is_city_wide());
        let LocationPick { best, worst } = pick_locations(&scored, limit);
        let filtered = filter_restaurants(self.dataset.restaurants(), selection);
        info!(
            "recommended {} best and {} worst clusters from {} restaurants",
            best.len(),
            worst.len(),
            filtered.len()
        );
        Ok(Recommendation {
            filtered,
            best,
            worst,
        })
    }
}
