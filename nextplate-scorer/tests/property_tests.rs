//! Property-based tests for the scoring pipeline.
//!
//! # Invariants tested
//!
//! - **Bounded normalisation:** scaled values always lie in `[0, 1]`.
//! - **Determinism:** aggregating the same scope twice gives the same rows.
//! - **Count conservation:** baseline counts sum to the filtered row count.
//! - **N-selection:** city-wide picks hold `min(5, clusters)` rows, district
//!   picks hold one.
//! - **Competition monotonicity:** raising the competition weight never
//!   shrinks the lead of a less crowded cluster.

use std::collections::HashSet;

use nextplate_core::test_support::{MemorySource, RestaurantBuilder};
use nextplate_core::{DatasetSource, District, Restaurant, ScoreWeights, Selection};
use nextplate_scorer::{
    LocationRecommender, MinMaxScaler, NormalisedMetrics, aggregate_clusters, filter_restaurants,
    weighted_score,
};
use proptest::prelude::*;

const DISTRICTS: [&str; 3] = ["Champel", "Plainpalais", "Eaux-Vives"];
const CATEGORIES: [(&str, &str); 3] = [
    ("European", "Italian"),
    ("European", "French"),
    ("Asian", "Thai"),
];

/// One restaurant as `(cluster index, category index, reviews, rating)`.
fn restaurant_strategy() -> impl Strategy<Value = (usize, usize, u32, f64)> {
    (0_usize..8, 0_usize..CATEGORIES.len(), 0_u32..5_000, 1.0_f64..=5.0)
}

fn build(rows: &[(usize, usize, u32, f64)]) -> Vec<Restaurant> {
    rows.iter()
        .enumerate()
        .map(|(idx, &(cluster, category, reviews, rating))| {
            let (macro_category, tag) = CATEGORIES[category];
            RestaurantBuilder::new(&format!("p{idx}"))
                .cluster(&format!("c{cluster}"))
                .district(DISTRICTS[cluster % DISTRICTS.len()])
                .macro_category(macro_category)
                .category_tag(tag)
                .reviews(reviews)
                .rating(rating)
                .build()
        })
        .collect()
}

fn selection_strategy() -> impl Strategy<Value = Selection> {
    prop_oneof![
        Just(Selection::all()),
        Just(Selection::all().with_category("European")),
        Just(Selection::all().with_category("Asian")),
        Just(
            Selection::all()
                .with_category("European")
                .with_sub_category("Italian")
        ),
        Just(Selection::all().with_district(District::new("Champel"))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every normalised value lies in `[0, 1]`.
    #[test]
    fn normalised_values_are_bounded(
        values in prop::collection::vec(-1.0e6_f64..1.0e6, 0..40),
        fallback in -2.0_f64..2.0,
    ) {
        let scaled = MinMaxScaler::with_fallback(fallback).normalise(&values);
        prop_assert_eq!(scaled.len(), values.len());
        for value in scaled {
            prop_assert!((0.0..=1.0).contains(&value), "out of range: {}", value);
        }
    }

    /// Property: aggregation is a pure function of its inputs.
    #[test]
    fn aggregation_is_deterministic(
        rows in prop::collection::vec(restaurant_strategy(), 0..60),
        selection in selection_strategy(),
    ) {
        let restaurants = build(&rows);
        let first = aggregate_clusters(&restaurants, &selection);
        let second = aggregate_clusters(&restaurants, &selection);
        prop_assert_eq!(first, second);
    }

    /// Property: baseline counts add up to the filtered subset size.
    #[test]
    fn baseline_counts_are_conserved(
        rows in prop::collection::vec(restaurant_strategy(), 0..60),
        selection in selection_strategy(),
    ) {
        let restaurants = build(&rows);
        let baseline = selection.without_sub_category();
        let total: usize = aggregate_clusters(&restaurants, &baseline)
            .iter()
            .map(|aggregate| aggregate.restaurants.count())
            .sum();
        prop_assert_eq!(total, filter_restaurants(&restaurants, &baseline).len());
    }

    /// Property: pick lists hold `min(limit, clusters)` rows.
    #[test]
    fn pick_lists_have_expected_length(
        rows in prop::collection::vec(restaurant_strategy(), 1..60),
        city_wide in any::<bool>(),
    ) {
        let restaurants = build(&rows);
        let selection = match restaurants.first() {
            Some(first) if !city_wide => Selection::all().with_district(first.district.clone()),
            _ => Selection::all(),
        };
        let clusters: HashSet<_> = filter_restaurants(&restaurants, &selection)
            .into_iter()
            .map(|restaurant| restaurant.cluster.clone())
            .collect();
        let dataset = MemorySource::with_restaurants(restaurants)
            .load()
            .expect("dataset");
        let result = LocationRecommender::new(&dataset)
            .recommend(&selection, ScoreWeights::default())
            .expect("recommendation");

        let limit = if selection.is_city_wide() { 5 } else { 1 };
        let expected = clusters.len().min(limit);
        prop_assert_eq!(result.best.len(), expected);
        prop_assert_eq!(result.worst.len(), expected);
    }

    /// Property: a higher competition weight never narrows the lead of the
    /// less crowded of two otherwise identical clusters, with or without a
    /// direct-competitor column.
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    #[test]
    fn competition_weight_is_monotone(
        crowded in 0.0_f64..=1.0,
        gap in 0.0_f64..=1.0,
        reviews in 0.0_f64..=1.0,
        rating in 0.0_f64..=1.0,
        direct in proptest::option::of((0.0_f64..=1.0, 0.0_f64..=1.0)),
        competition in 0_u8..4,
        popularity in 0_u8..=4,
        satisfaction in 0_u8..=4,
    ) {
        prop_assume!(competition + popularity + satisfaction > 0);
        let quiet = (crowded - gap).max(0.0);
        let quiet_direct =
            direct.map(|(crowded_direct, direct_gap)| (crowded_direct - direct_gap).max(0.0));
        let crowded_direct = direct.map(|(crowded_direct, _)| crowded_direct);
        let metrics = |competitors, direct_competitors| NormalisedMetrics {
            competitors,
            direct_competitors,
            mean_review_count: reviews,
            mean_rating: rating,
        };
        let lead = |wc| {
            let weights = ScoreWeights::new(wc, popularity, satisfaction).expect("weights");
            let quiet_score =
                weighted_score(&metrics(quiet, quiet_direct), weights).expect("score");
            let crowded_score =
                weighted_score(&metrics(crowded, crowded_direct), weights).expect("score");
            quiet_score - crowded_score
        };
        prop_assert!(lead(competition + 1) >= lead(competition) - 1e-12);
    }
}
