//! Popup text for restaurants and ranked clusters.

use nextplate_core::Restaurant;
use nextplate_scorer::RankedCluster;

use crate::feature::Popup;

/// Popup shown on a restaurant marker.
///
/// The rating is shown as recorded, keeping a trailing `.0` on whole values.
#[must_use]
pub fn restaurant_popup(restaurant: &Restaurant) -> Popup {
    let price = restaurant
        .price_level
        .and_then(|level| level.label())
        .unwrap_or("-");
    Popup::new(restaurant.name.clone())
        .row("Price Level", price)
        .row("Review Score", format!("{:?}", restaurant.rating))
        .row("# of Reviews", restaurant.review_count.to_string())
}

/// Popup shown on a ranked cluster outline.
///
/// `heading` is `"Best"` or `"Worst"`. The competitor line appends the
/// direct-competitor count when a sub-category was selected. The mean review
/// count is truncated rather than rounded.
#[must_use]
pub fn cluster_popup(ranked: &RankedCluster, heading: &str) -> Popup {
    let metrics = &ranked.cluster.metrics;
    let competitors = metrics.direct_competitors.as_ref().map_or_else(
        || metrics.competitors.to_string(),
        |direct| format!("{} ({} Direct)", metrics.competitors, direct.count),
    );
    Popup::new(format!("#{} {heading} Location", ranked.rank))
        .row("District", metrics.key.district.to_string())
        .row("Competitors", competitors)
        .row("Avg. Review Score", format!("{:.1}", metrics.mean_rating))
        .row("Avg. # of Reviews", metrics.mean_review_count.trunc().to_string())
}
