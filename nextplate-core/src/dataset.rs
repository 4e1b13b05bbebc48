//! The read-only dataset handle shared by every pipeline run.
//!
//! A [`Dataset`] is built once at start-up from the three source tables and
//! then passed by reference into each request. It never changes after
//! construction, so concurrent readers need no synchronisation.

use std::collections::{HashMap, HashSet};

use log::info;
use thiserror::Error;

use crate::{
    ClusterCenter, ClusterId, District, DistrictInfo, Restaurant, Selection, SelectionError,
    Selector, Taxonomy,
};

/// Errors raised when the source tables violate dataset invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Two restaurants share an identifier.
    #[error("restaurant id '{0}' appears more than once")]
    DuplicateRestaurant(String),
    /// A cluster id is used in more than one district.
    #[error("cluster '{cluster}' is assigned to both '{first}' and '{second}'")]
    ConflictingClusterDistrict {
        /// Offending cluster.
        cluster: ClusterId,
        /// District seen first.
        first: District,
        /// Conflicting district.
        second: District,
    },
    /// The cluster-center table lists a cluster twice.
    #[error("cluster '{0}' has more than one center")]
    DuplicateClusterCenter(ClusterId),
}

/// Supplies a [`Dataset`], typically by reading files.
///
/// This is the seam to the data-loading collaborator: the scoring pipeline
/// only ever sees the resulting [`Dataset`].
pub trait DatasetSource {
    /// Error raised while loading.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and validate the dataset.
    ///
    /// # Errors
    /// Implementations report I/O, decoding and invariant failures.
    fn load(&self) -> Result<Dataset, Self::Error>;
}

/// Restaurants, cluster centers, district metadata and the category taxonomy.
#[derive(Debug, Clone)]
pub struct Dataset {
    restaurants: Vec<Restaurant>,
    centers: HashMap<ClusterId, ClusterCenter>,
    districts: Vec<DistrictInfo>,
    known_districts: HashSet<District>,
    taxonomy: Taxonomy,
}

impl Dataset {
    /// Validate the source tables and build the handle.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when restaurant ids repeat, a cluster spans
    /// two districts, or a cluster has two centers.
    pub fn new(
        restaurants: Vec<Restaurant>,
        centers: Vec<ClusterCenter>,
        districts: Vec<DistrictInfo>,
        taxonomy: Taxonomy,
    ) -> Result<Self, DatasetError> {
        let mut ids = HashSet::with_capacity(restaurants.len());
        let mut cluster_districts: HashMap<&ClusterId, &District> = HashMap::new();
        for restaurant in &restaurants {
            if !ids.insert(restaurant.id.as_str()) {
                return Err(DatasetError::DuplicateRestaurant(restaurant.id.clone()));
            }
            let first = *cluster_districts
                .entry(&restaurant.cluster)
                .or_insert(&restaurant.district);
            if first != &restaurant.district {
                return Err(DatasetError::ConflictingClusterDistrict {
                    cluster: restaurant.cluster.clone(),
                    first: first.clone(),
                    second: restaurant.district.clone(),
                });
            }
        }

        let mut center_map = HashMap::with_capacity(centers.len());
        for center in centers {
            let cluster = center.cluster.clone();
            if center_map.insert(cluster.clone(), center).is_some() {
                return Err(DatasetError::DuplicateClusterCenter(cluster));
            }
        }

        let known_districts = districts
            .iter()
            .filter(|info| !info.is_city_wide())
            .map(|info| info.district.clone())
            .chain(restaurants.iter().map(|r| r.district.clone()))
            .collect();

        info!(
            "dataset ready: {} restaurants, {} clusters with centers, {} districts",
            restaurants.len(),
            center_map.len(),
            districts.len()
        );

        Ok(Self {
            restaurants,
            centers: center_map,
            districts,
            known_districts,
            taxonomy,
        })
    }

    /// All restaurants in source order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Restaurants belonging to `cluster`, regardless of any selection.
    pub fn restaurants_in_cluster<'a>(
        &'a self,
        cluster: &'a ClusterId,
    ) -> impl Iterator<Item = &'a Restaurant> + 'a {
        self.restaurants
            .iter()
            .filter(move |restaurant| &restaurant.cluster == cluster)
    }

    /// Look up the representative coordinate of a cluster.
    #[must_use]
    pub fn cluster_center(&self, cluster: &ClusterId) -> Option<&ClusterCenter> {
        self.centers.get(cluster)
    }

    /// District metadata rows, including any city-wide `All` row.
    #[must_use]
    pub fn districts(&self) -> &[DistrictInfo] {
        &self.districts
    }

    /// Metadata for one district.
    #[must_use]
    pub fn district_info(&self, district: &District) -> Option<&DistrictInfo> {
        self.districts.iter().find(|info| &info.district == district)
    }

    /// The city-wide metadata row, if the district table provides one.
    #[must_use]
    pub fn city_view(&self) -> Option<&DistrictInfo> {
        self.districts.iter().find(|info| info.is_city_wide())
    }

    /// Category taxonomy used for selection validation.
    #[must_use]
    pub const fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Report whether `district` appears in the district table or the data.
    #[must_use]
    pub fn knows_district(&self, district: &District) -> bool {
        self.known_districts.contains(district)
    }

    /// Reject selections naming unknown districts or categories.
    ///
    /// # Errors
    /// Returns [`SelectionError`] for unknown districts and for category
    /// pairs the taxonomy rejects.
    pub fn validate_selection(&self, selection: &Selection) -> Result<(), SelectionError> {
        if let Selector::Only(district) = &selection.district
            && !self.knows_district(district)
        {
            return Err(SelectionError::UnknownDistrict(district.to_string()));
        }
        self.taxonomy
            .validate(&selection.category, &selection.sub_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RestaurantBuilder;
    use geo::Coord;
    use rstest::rstest;

    fn center(cluster: &str) -> ClusterCenter {
        ClusterCenter {
            cluster: ClusterId::new(cluster),
            location: Coord { x: 6.1, y: 46.2 },
        }
    }

    #[rstest]
    fn rejects_duplicate_restaurant_ids() {
        let restaurants = vec![
            RestaurantBuilder::new("p1").build(),
            RestaurantBuilder::new("p1").build(),
        ];
        let err = Dataset::new(restaurants, Vec::new(), Vec::new(), Taxonomy::geneva())
            .expect_err("duplicate ids");
        assert_eq!(err, DatasetError::DuplicateRestaurant("p1".into()));
    }

    #[rstest]
    fn rejects_cluster_spanning_two_districts() {
        let restaurants = vec![
            RestaurantBuilder::new("p1")
                .district("Champel")
                .cluster("c1")
                .build(),
            RestaurantBuilder::new("p2")
                .district("Cité-Centre")
                .cluster("c1")
                .build(),
        ];
        let err = Dataset::new(restaurants, Vec::new(), Vec::new(), Taxonomy::geneva())
            .expect_err("conflicting districts");
        assert!(matches!(
            err,
            DatasetError::ConflictingClusterDistrict { .. }
        ));
    }

    #[rstest]
    fn rejects_duplicate_centers() {
        let err = Dataset::new(
            Vec::new(),
            vec![center("c1"), center("c1")],
            Vec::new(),
            Taxonomy::geneva(),
        )
        .expect_err("duplicate centers");
        assert_eq!(err, DatasetError::DuplicateClusterCenter(ClusterId::new("c1")));
    }

    #[rstest]
    fn validates_districts_against_data() {
        let restaurants = vec![RestaurantBuilder::new("p1").district("Champel").build()];
        let dataset = Dataset::new(restaurants, Vec::new(), Vec::new(), Taxonomy::geneva())
            .expect("valid dataset");

        let known = Selection::all().with_district(District::new("Champel"));
        assert_eq!(dataset.validate_selection(&known), Ok(()));

        let unknown = Selection::all().with_district(District::new("Atlantis"));
        assert_eq!(
            dataset.validate_selection(&unknown),
            Err(SelectionError::UnknownDistrict("Atlantis".into()))
        );
    }

    #[rstest]
    fn keeps_the_taxonomy_it_was_built_with() {
        let taxonomy = Taxonomy::new().with_single_cuisine("Seafood");
        let dataset = Dataset::new(Vec::new(), Vec::new(), Vec::new(), taxonomy.clone())
            .expect("valid dataset");
        assert_eq!(dataset.taxonomy(), &taxonomy);

        let seafood = Selection::all()
            .with_category("Seafood")
            .with_sub_category("Seafood");
        assert_eq!(dataset.validate_selection(&seafood), Ok(()));
        let asian = Selection::all().with_category("Asian");
        assert_eq!(
            dataset.validate_selection(&asian),
            Err(SelectionError::UnknownCategory("Asian".into()))
        );
    }

    #[rstest]
    fn city_view_is_the_all_row() {
        let districts = vec![
            DistrictInfo {
                district: District::new("Champel"),
                location: Coord { x: 6.15, y: 46.19 },
                zoom: 14.4,
            },
            DistrictInfo {
                district: District::new("All"),
                location: Coord { x: 6.14, y: 46.2 },
                zoom: 13.4,
            },
        ];
        let dataset = Dataset::new(Vec::new(), Vec::new(), districts, Taxonomy::geneva())
            .expect("valid dataset");
        let view = dataset.city_view().expect("city row");
        assert!((view.zoom - 13.4).abs() < f64::EPSILON);
        assert!(!dataset.knows_district(&District::new("All")));
    }
}
