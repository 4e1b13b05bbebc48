//! Behavioural coverage for building map overlays from a recommendation.

use std::cell::RefCell;

use geo::Coord;
use nextplate_core::test_support::{MemorySource, RestaurantBuilder};
use nextplate_core::{Dataset, DatasetSource, District, DistrictInfo, ScoreWeights, Selection};
use nextplate_overlay::{FeatureGeometry, OverlayError, Overlays};
use nextplate_scorer::LocationRecommender;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Dataset under test.
#[fixture]
pub fn dataset() -> RefCell<Option<Dataset>> {
    RefCell::new(None)
}

/// Captures the built overlays or the error.
#[fixture]
pub fn overlays() -> RefCell<Option<Result<Overlays, OverlayError>>> {
    RefCell::new(None)
}

fn district(name: &str, lng: f64, lat: f64, zoom: f64) -> DistrictInfo {
    DistrictInfo {
        district: District::new(name),
        location: Coord { x: lng, y: lat },
        zoom,
    }
}

#[given("two clusters of three restaurants each with a city view")]
fn two_clusters(dataset: &RefCell<Option<Dataset>>) {
    let corners = [(0.0, 0.0), (0.01, 0.0), (0.0, 0.01)];
    let mut restaurants = Vec::new();
    for (cluster, district_name, lng0, reviews) in [("a", "Champel", 6.15, 20), ("b", "Cité-Centre", 6.14, 400)] {
        for (idx, (dx, dy)) in corners.iter().enumerate() {
            restaurants.push(
                RestaurantBuilder::new(&format!("{cluster}{idx}"))
                    .cluster(cluster)
                    .district(district_name)
                    .macro_category("European")
                    .category_tag("Italian")
                    .reviews(reviews)
                    .at(lng0 + dx, 46.2 + dy)
                    .build(),
            );
        }
    }
    let source = MemorySource::with_restaurants(restaurants).districts(vec![
        district("All", 6.143, 46.204, 13.4),
        district("Champel", 6.155, 46.19, 14.4),
        district("Cité-Centre", 6.145, 46.2, 15.4),
    ]);
    let loaded = source
        .load()
        .unwrap_or_else(|err| panic!("load in-memory dataset: {err}"));
    *dataset.borrow_mut() = Some(loaded);
}

fn build(
    dataset: &RefCell<Option<Dataset>>,
    overlays: &RefCell<Option<Result<Overlays, OverlayError>>>,
    selection: &Selection,
) {
    let binding = dataset.borrow();
    let loaded = binding
        .as_ref()
        .unwrap_or_else(|| panic!("dataset must be initialised"));
    let recommendation = LocationRecommender::new(loaded)
        .recommend(selection, ScoreWeights::default())
        .unwrap_or_else(|err| panic!("recommendation: {err}"));
    *overlays.borrow_mut() = Some(Overlays::build(loaded, selection, &recommendation, "Geneva"));
}

#[when("I build overlays for the whole city")]
fn build_city(
    dataset: &RefCell<Option<Dataset>>,
    overlays: &RefCell<Option<Result<Overlays, OverlayError>>>,
) {
    build(dataset, overlays, &Selection::all());
}

#[when("I build overlays for Italian food in Champel")]
fn build_champel(
    dataset: &RefCell<Option<Dataset>>,
    overlays: &RefCell<Option<Result<Overlays, OverlayError>>>,
) {
    let selection = Selection::all()
        .with_district(District::new("Champel"))
        .with_category("European")
        .with_sub_category("Italian");
    build(dataset, overlays, &selection);
}

fn built(overlays: &RefCell<Option<Result<Overlays, OverlayError>>>) -> Overlays {
    match overlays.borrow().as_ref() {
        Some(Ok(built)) => built.clone(),
        other => panic!("expected overlays, got {other:?}"),
    }
}

#[then("the scope describes all restaurants in Geneva")]
fn city_description(overlays: &RefCell<Option<Result<Overlays, OverlayError>>>) {
    assert_eq!(built(overlays).description, "all restaurants in Geneva");
}

#[then("the scope describes all Italian restaurants in Champel")]
fn champel_description(overlays: &RefCell<Option<Result<Overlays, OverlayError>>>) {
    assert_eq!(built(overlays).description, "all Italian restaurants in Champel");
}

#[then("every restaurant appears on the overview layer")]
fn overview_has_everyone(overlays: &RefCell<Option<Result<Overlays, OverlayError>>>) {
    assert_eq!(built(overlays).overview.len(), 6);
}

#[then("each ranked cluster has an outline")]
fn outlines_present(overlays: &RefCell<Option<Result<Overlays, OverlayError>>>) {
    let result = built(overlays);
    assert_eq!(result.best_locations.len(), 2);
    assert_eq!(result.worst_locations.len(), 2);
    assert!(
        result
            .best_locations
            .iter()
            .all(|feature| matches!(feature.geometry, FeatureGeometry::Polygon(_)))
    );
    let top = result.best_locations.first().map(|f| f.popup.title.clone());
    assert_eq!(top.as_deref(), Some("#1 Best Location"));
}

#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
#[then("the map opens at zoom 14.4")]
fn district_zoom(overlays: &RefCell<Option<Result<Overlays, OverlayError>>>) {
    let view = built(overlays).view;
    assert!((view.zoom - 14.4).abs() < f64::EPSILON);
    assert_eq!(view.center, Coord { x: 6.155, y: 46.19 });
}

#[scenario(path = "tests/features/overlays.feature", index = 0)]
fn city_wide_overlays(
    dataset: RefCell<Option<Dataset>>,
    overlays: RefCell<Option<Result<Overlays, OverlayError>>>,
) {
    let _ = (dataset, overlays);
}

#[scenario(path = "tests/features/overlays.feature", index = 1)]
fn district_overlays(
    dataset: RefCell<Option<Dataset>>,
    overlays: RefCell<Option<Result<Overlays, OverlayError>>>,
) {
    let _ = (dataset, overlays);
}
