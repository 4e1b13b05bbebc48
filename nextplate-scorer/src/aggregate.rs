//! Cluster aggregator: per-cluster counts and means over a restaurant subset.
//!
//! [`aggregate_clusters`] groups one filtered subset by `(district, cluster)`.
//! [`merge_scope`] runs it twice, once as the baseline that ignores the
//! sub-category and once for direct competitors, then left-joins the direct
//! counts onto the baseline so clusters without direct competitors carry a
//! zero count instead of disappearing.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use nextplate_core::{ClusterKey, Restaurant, Selection, Selector};
use serde::Serialize;

use crate::filter::matches_selection;

/// Restaurant count for a cluster, tagged with the scope it was counted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum CompetitorCount {
    /// Every restaurant matching the district and macro-category selectors.
    Baseline {
        /// Number of restaurants.
        count: usize,
    },
    /// Restaurants matching the selected sub-category specifically.
    DirectCompetitor {
        /// The sub-category as selected.
        tag: String,
        /// Number of restaurants.
        count: usize,
    },
}

impl CompetitorCount {
    /// Number of restaurants counted.
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            Self::Baseline { count } | Self::DirectCompetitor { count, .. } => *count,
        }
    }

    /// Legacy column label, e.g. `all_restaurants` or `thai_restaurants`.
    #[must_use]
    pub fn column_label(&self) -> String {
        match self {
            Self::Baseline { .. } => "all_restaurants".to_owned(),
            Self::DirectCompetitor { tag, .. } => format!("{}_restaurants", tag.to_lowercase()),
        }
    }
}

/// Count and mean statistics for one cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterAggregate {
    /// Grouping key.
    pub key: ClusterKey,
    /// Matching restaurants in the cluster.
    pub restaurants: CompetitorCount,
    /// Mean review count of the matching restaurants.
    pub mean_review_count: f64,
    /// Mean rating of the matching restaurants.
    pub mean_rating: f64,
}

#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    review_total: u64,
    rating_total: f64,
}

impl Accumulator {
    #[expect(
        clippy::float_arithmetic,
        reason = "rating totals are accumulated for the mean"
    )]
    fn push(&mut self, restaurant: &Restaurant) {
        self.count += 1;
        self.review_total += u64::from(restaurant.review_count);
        self.rating_total += restaurant.rating;
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "means divide float totals by group sizes far below 2^52"
    )]
    fn means(&self) -> (f64, f64) {
        let size = self.count as f64;
        (self.review_total as f64 / size, self.rating_total / size)
    }
}

/// Group the restaurants matching `selection` by cluster.
///
/// One row is returned per `(district, cluster)` pair with at least one
/// matching restaurant; clusters with no match are absent rather than
/// zero-filled. Rows are ordered by district, then cluster id. The count is
/// tagged [`CompetitorCount::DirectCompetitor`] when `selection` carries a
/// sub-category and [`CompetitorCount::Baseline`] otherwise.
pub fn aggregate_clusters<'a, I>(restaurants: I, selection: &Selection) -> Vec<ClusterAggregate>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let mut groups: BTreeMap<ClusterKey, Accumulator> = BTreeMap::new();
    for restaurant in restaurants {
        if matches_selection(restaurant, selection) {
            groups.entry(restaurant.cluster_key()).or_default().push(restaurant);
        }
    }

    groups
        .into_iter()
        .map(|(key, totals)| {
            let (mean_review_count, mean_rating) = totals.means();
            let restaurants = match &selection.sub_category {
                Selector::All => CompetitorCount::Baseline {
                    count: totals.count,
                },
                Selector::Only(tag) => CompetitorCount::DirectCompetitor {
                    tag: tag.clone(),
                    count: totals.count,
                },
            };
            ClusterAggregate {
                key,
                restaurants,
                mean_review_count,
                mean_rating,
            }
        })
        .collect()
}

/// Direct-competitor count attached to a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectCompetitors {
    /// The sub-category as selected.
    pub tag: String,
    /// Restaurants in the cluster matching the sub-category.
    pub count: usize,
}

/// Baseline statistics merged with the optional direct-competitor count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterMetrics {
    /// Grouping key.
    pub key: ClusterKey,
    /// Restaurants in the cluster ignoring the sub-category.
    pub competitors: usize,
    /// Present exactly when a sub-category is selected.
    pub direct_competitors: Option<DirectCompetitors>,
    /// Baseline mean review count.
    pub mean_review_count: f64,
    /// Baseline mean rating.
    pub mean_rating: f64,
}

/// Build the merged per-cluster table for a selection.
///
/// The baseline aggregate applies the district and macro-category selectors
/// only. When a sub-category is selected, a second aggregate counts direct
/// competitors and is left-joined onto the baseline; baseline clusters
/// without direct competitors get a count of zero. If no restaurant in the
/// baseline scope matches the sub-category at all, the scope is empty and
/// no rows are returned.
#[must_use]
pub fn merge_scope(restaurants: &[Restaurant], selection: &Selection) -> Vec<ClusterMetrics> {
    let baseline = aggregate_clusters(restaurants, &selection.without_sub_category());
    debug!("baseline aggregate covers {} clusters", baseline.len());

    let Selector::Only(tag) = &selection.sub_category else {
        return baseline.into_iter().map(without_direct).collect();
    };

    let direct: HashMap<ClusterKey, usize> = aggregate_clusters(restaurants, selection)
        .into_iter()
        .map(|aggregate| (aggregate.key, aggregate.restaurants.count()))
        .collect();
    debug!("'{tag}' direct competitors present in {} clusters", direct.len());
    if direct.is_empty() {
        return Vec::new();
    }

    baseline
        .into_iter()
        .map(|aggregate| {
            let count = direct.get(&aggregate.key).copied().unwrap_or(0);
            ClusterMetrics {
                direct_competitors: Some(DirectCompetitors {
                    tag: tag.clone(),
                    count,
                }),
                ..without_direct(aggregate)
            }
        })
        .collect()
}

fn without_direct(aggregate: ClusterAggregate) -> ClusterMetrics {
    ClusterMetrics {
        competitors: aggregate.restaurants.count(),
        key: aggregate.key,
        direct_competitors: None,
        mean_review_count: aggregate.mean_review_count,
        mean_rating: aggregate.mean_rating,
    }
}
