//! Thematic layers built from filtered restaurants and ranked clusters.

use std::collections::HashSet;

use geo::{ConvexHull, MultiPoint, Point, Polygon};
use log::debug;
use nextplate_core::{ClusterId, Dataset, Restaurant};
use nextplate_scorer::RankedCluster;

use crate::band::{PriceBand, RatingBand, ReviewBand};
use crate::feature::{Colour, FeatureGeometry, Layer, MapFeature, Style};
use crate::popup::{cluster_popup, restaurant_popup};

/// Whether a location layer outlines the best or the worst clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Highest scores.
    Best,
    /// Lowest scores.
    Worst,
}

impl Ranking {
    const fn layer(self) -> Layer {
        match self {
            Self::Best => Layer::BestLocations,
            Self::Worst => Layer::WorstLocations,
        }
    }

    const fn heading(self) -> &'static str {
        match self {
            Self::Best => "Best",
            Self::Worst => "Worst",
        }
    }

    const fn colour(self) -> Colour {
        match self {
            Self::Best => Colour::Green,
            Self::Worst => Colour::Red,
        }
    }
}

fn marker(restaurant: &Restaurant, layer: Layer, style: Style) -> MapFeature {
    MapFeature {
        layer,
        geometry: FeatureGeometry::Point(Point::from(restaurant.location)),
        style,
        popup: restaurant_popup(restaurant),
    }
}

/// One pin per restaurant.
#[must_use]
pub fn overview_layer(restaurants: &[&Restaurant]) -> Vec<MapFeature> {
    restaurants
        .iter()
        .map(|restaurant| marker(restaurant, Layer::Overview, Style::MARKER))
        .collect()
}

/// Outlined circles coloured by price band; restaurants without a price
/// level are left off the layer.
#[must_use]
pub fn price_level_layer(restaurants: &[&Restaurant]) -> Vec<MapFeature> {
    restaurants
        .iter()
        .filter_map(|restaurant| {
            PriceBand::classify(restaurant.price_level).map(|band| {
                marker(
                    restaurant,
                    Layer::PriceLevel(band),
                    Style::outline(band.colour()),
                )
            })
        })
        .collect()
}

/// Outlined circles coloured by rating band.
#[must_use]
pub fn review_score_layer(restaurants: &[&Restaurant]) -> Vec<MapFeature> {
    restaurants
        .iter()
        .map(|restaurant| {
            let band = RatingBand::classify(restaurant.rating);
            marker(restaurant, Layer::ReviewScore(band), Style::outline(band.colour()))
        })
        .collect()
}

/// Filled circles coloured by review-count band.
#[must_use]
pub fn review_count_layer(restaurants: &[&Restaurant]) -> Vec<MapFeature> {
    restaurants
        .iter()
        .map(|restaurant| {
            let band = ReviewBand::classify(restaurant.review_count);
            marker(restaurant, Layer::ReviewCount(band), Style::filled(band.colour()))
        })
        .collect()
}

/// Convex hull around every restaurant of `cluster`, regardless of filters.
///
/// Returns `None` when the cluster has fewer than three distinct locations.
#[must_use]
pub fn cluster_outline(dataset: &Dataset, cluster: &ClusterId) -> Option<Polygon<f64>> {
    let mut seen = HashSet::new();
    let points: Vec<Point<f64>> = dataset
        .restaurants_in_cluster(cluster)
        .filter(|restaurant| {
            seen.insert((
                restaurant.location.x.to_bits(),
                restaurant.location.y.to_bits(),
            ))
        })
        .map(|restaurant| Point::from(restaurant.location))
        .collect();
    if points.len() < 3 {
        debug!("cluster {cluster} has {} distinct locations; no outline", points.len());
        return None;
    }
    Some(MultiPoint::new(points).convex_hull())
}

/// Filled outlines for ranked clusters, in rank order.
///
/// Clusters too small to outline are skipped.
#[must_use]
pub fn location_layer(dataset: &Dataset, ranked: &[RankedCluster], ranking: Ranking) -> Vec<MapFeature> {
    ranked
        .iter()
        .filter_map(|entry| {
            cluster_outline(dataset, &entry.cluster.metrics.key.cluster).map(|hull| MapFeature {
                layer: ranking.layer(),
                geometry: FeatureGeometry::Polygon(hull),
                style: Style::filled(ranking.colour()),
                popup: cluster_popup(entry, ranking.heading()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextplate_core::test_support::{MemorySource, RestaurantBuilder};
    use nextplate_core::{DatasetSource, PriceLevel};
    use rstest::{fixture, rstest};

    #[fixture]
    fn restaurants() -> Vec<Restaurant> {
        vec![
            RestaurantBuilder::new("p1")
                .price_level(PriceLevel::Cheap)
                .rating(3.5)
                .reviews(10)
                .build(),
            RestaurantBuilder::new("p2")
                .price_level(PriceLevel::Expensive)
                .rating(4.5)
                .reviews(300)
                .build(),
            RestaurantBuilder::new("p3").rating(4.0).reviews(150).build(),
        ]
    }

    #[rstest]
    fn price_layer_skips_unknown_levels(restaurants: Vec<Restaurant>) {
        let refs: Vec<&Restaurant> = restaurants.iter().collect();
        let layers: Vec<Layer> = price_level_layer(&refs).into_iter().map(|f| f.layer).collect();
        assert_eq!(
            layers,
            [
                Layer::PriceLevel(PriceBand::Cheap),
                Layer::PriceLevel(PriceBand::Expensive)
            ]
        );
    }

    #[rstest]
    fn review_layers_band_every_restaurant(restaurants: Vec<Restaurant>) {
        let refs: Vec<&Restaurant> = restaurants.iter().collect();
        let scores: Vec<Layer> = review_score_layer(&refs).into_iter().map(|f| f.layer).collect();
        assert_eq!(
            scores,
            [
                Layer::ReviewScore(RatingBand::Low),
                Layer::ReviewScore(RatingBand::High),
                Layer::ReviewScore(RatingBand::Average)
            ]
        );
        let counts = review_count_layer(&refs);
        assert_eq!(counts.len(), 3);
        assert!(counts.iter().all(|f| f.style.filled));
        assert_eq!(overview_layer(&refs).len(), 3);
    }

    #[rstest]
    fn outline_needs_three_distinct_points() {
        let dataset = MemorySource::with_restaurants([
            RestaurantBuilder::new("p1").cluster("a").at(6.0, 46.0).build(),
            RestaurantBuilder::new("p2").cluster("a").at(6.0, 46.0).build(),
            RestaurantBuilder::new("p3").cluster("a").at(6.1, 46.0).build(),
            RestaurantBuilder::new("p4").cluster("b").at(6.0, 46.0).build(),
            RestaurantBuilder::new("p5").cluster("b").at(6.1, 46.0).build(),
            RestaurantBuilder::new("p6").cluster("b").at(6.0, 46.1).build(),
        ])
        .load()
        .expect("dataset");

        assert!(cluster_outline(&dataset, &ClusterId::new("a")).is_none());
        let hull = cluster_outline(&dataset, &ClusterId::new("b")).expect("outline");
        assert_eq!(hull.exterior().0.len(), 4);
    }
}
