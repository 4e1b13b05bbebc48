//! Map overlay records for restaurant location recommendations.
//!
//! Rendering is left to an external map component. This crate turns a
//! [`Recommendation`] into renderer-neutral [`MapFeature`] records: pins and
//! circles for the filtered restaurants on four thematic layers, convex-hull
//! outlines for the best and worst clusters, the initial [`MapView`] and a
//! sentence describing the scope.

#![forbid(unsafe_code)]

mod band;
mod error;
mod feature;
mod layers;
mod popup;
mod view;

use log::debug;
use nextplate_core::{Dataset, Selection};
use nextplate_scorer::Recommendation;
use serde::Serialize;

pub use band::{PriceBand, RatingBand, ReviewBand};
pub use error::OverlayError;
pub use feature::{Colour, FeatureGeometry, Layer, MapFeature, Popup, PopupRow, Style};
pub use layers::{
    Ranking, cluster_outline, location_layer, overview_layer, price_level_layer,
    review_count_layer, review_score_layer,
};
pub use popup::{cluster_popup, restaurant_popup};
pub use view::{MapView, describe_scope};

/// Every overlay for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlays {
    /// Initial viewport.
    pub view: MapView,
    /// Scope sentence, e.g. `"all Thai restaurants in Champel"`.
    pub description: String,
    /// Pins for every filtered restaurant.
    pub overview: Vec<MapFeature>,
    /// Filtered restaurants grouped by price band.
    pub price_level: Vec<MapFeature>,
    /// Filtered restaurants grouped by rating band.
    pub review_score: Vec<MapFeature>,
    /// Filtered restaurants grouped by review-count band.
    pub review_count: Vec<MapFeature>,
    /// Outlines of the best clusters.
    pub best_locations: Vec<MapFeature>,
    /// Outlines of the worst clusters.
    pub worst_locations: Vec<MapFeature>,
}

impl Overlays {
    /// Build every layer for `recommendation`.
    ///
    /// # Errors
    /// Returns [`OverlayError`] when no map view can be derived for the
    /// selected scope.
    pub fn build(
        dataset: &Dataset,
        selection: &Selection,
        recommendation: &Recommendation<'_>,
        city: &str,
    ) -> Result<Self, OverlayError> {
        let view = MapView::for_scope(dataset, selection)?;
        let filtered = recommendation.filtered.as_slice();
        let overlays = Self {
            view,
            description: describe_scope(selection, city),
            overview: overview_layer(filtered),
            price_level: price_level_layer(filtered),
            review_score: review_score_layer(filtered),
            review_count: review_count_layer(filtered),
            best_locations: location_layer(dataset, &recommendation.best, Ranking::Best),
            worst_locations: location_layer(dataset, &recommendation.worst, Ranking::Worst),
        };
        debug!(
            "built overlays: {} markers, {} best and {} worst outlines",
            overlays.overview.len(),
            overlays.best_locations.len(),
            overlays.worst_locations.len()
        );
        Ok(overlays)
    }
}
