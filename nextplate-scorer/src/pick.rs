//! Location picker: best and worst clusters for a scope.

use std::cmp::Ordering;

use serde::Serialize;

use crate::score::ScoredCluster;

/// How many clusters each list holds, by scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickLimits {
    /// List length when every district is in scope.
    pub city_wide: usize,
    /// List length when a single district is selected.
    pub district: usize,
}

impl Default for PickLimits {
    fn default() -> Self {
        Self {
            city_wide: 5,
            district: 1,
        }
    }
}

impl PickLimits {
    /// List length for a city-wide or single-district scope.
    #[must_use]
    pub const fn for_scope(self, city_wide: bool) -> usize {
        if city_wide { self.city_wide } else { self.district }
    }
}

/// A scored cluster with its 1-based position in a ranked list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCluster {
    /// Position in the list, starting at 1.
    pub rank: usize,
    /// The ranked cluster.
    #[serde(flatten)]
    pub cluster: ScoredCluster,
}

/// Best and worst clusters for a scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationPick {
    /// Highest scores first.
    pub best: Vec<RankedCluster>,
    /// Lowest scores first.
    pub worst: Vec<RankedCluster>,
}

/// Select the top `limit` and bottom `limit` clusters by score.
///
/// Sorting is stable, so equal scores keep their input order in both lists.
/// Fewer than `limit` rows simply yields shorter lists.
#[must_use]
pub fn pick_locations(scored: &[ScoredCluster], limit: usize) -> LocationPick {
    let best = ranked(scored, limit, |a, b| b.score.total_cmp(&a.score));
    let worst = ranked(scored, limit, |a, b| a.score.total_cmp(&b.score));
    LocationPick { best, worst }
}

fn ranked<F>(scored: &[ScoredCluster], limit: usize, order: F) -> Vec<RankedCluster>
where
    F: FnMut(&&ScoredCluster, &&ScoredCluster) -> Ordering,
{
    let mut sorted: Vec<&ScoredCluster> = scored.iter().collect();
    sorted.sort_by(order);
    sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, cluster)| RankedCluster {
            rank: idx + 1,
            cluster: cluster.clone(),
        })
        .collect()
}
