//! Builders and in-memory sources for unit and behaviour tests.

use geo::Coord;

use crate::{
    ClusterCenter, ClusterId, Dataset, DatasetError, DatasetSource, District, DistrictInfo,
    PriceLevel, Restaurant, Taxonomy,
};

/// Fluent builder for [`Restaurant`] values with sensible defaults.
///
/// Defaults: named after the id, unknown price, no reviews, rating `4.0`,
/// district `Champel`, cluster `c1`, empty categories.
#[derive(Debug, Clone)]
pub struct RestaurantBuilder {
    restaurant: Restaurant,
}

impl RestaurantBuilder {
    /// Start a builder for the given identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            restaurant: Restaurant {
                id: id.to_owned(),
                name: id.to_owned(),
                price_level: None,
                review_count: 0,
                rating: 4.0,
                location: Coord { x: 6.14, y: 46.2 },
                primary_category: "restaurant".to_owned(),
                category_tag: String::new(),
                macro_category: String::new(),
                district: District::new("Champel"),
                cluster: ClusterId::new("c1"),
            },
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.restaurant.name = name.to_owned();
        self
    }

    /// Set the price level.
    #[must_use]
    pub const fn price_level(mut self, level: PriceLevel) -> Self {
        self.restaurant.price_level = Some(level);
        self
    }

    /// Set the review count.
    #[must_use]
    pub const fn reviews(mut self, count: u32) -> Self {
        self.restaurant.review_count = count;
        self
    }

    /// Set the average rating.
    #[must_use]
    pub const fn rating(mut self, rating: f64) -> Self {
        self.restaurant.rating = rating;
        self
    }

    /// Set the location from longitude and latitude.
    #[must_use]
    pub const fn at(mut self, lng: f64, lat: f64) -> Self {
        self.restaurant.location = Coord { x: lng, y: lat };
        self
    }

    /// Set the free-text category tag.
    #[must_use]
    pub fn category_tag(mut self, tag: &str) -> Self {
        self.restaurant.category_tag = tag.to_owned();
        self
    }

    /// Set the macro category.
    #[must_use]
    pub fn macro_category(mut self, category: &str) -> Self {
        self.restaurant.macro_category = category.to_owned();
        self
    }

    /// Set the district.
    #[must_use]
    pub fn district(mut self, district: &str) -> Self {
        self.restaurant.district = District::new(district);
        self
    }

    /// Set the cluster.
    #[must_use]
    pub fn cluster(mut self, cluster: &str) -> Self {
        self.restaurant.cluster = ClusterId::new(cluster);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Restaurant {
        self.restaurant
    }
}

/// Build a cluster center at the given longitude/latitude.
#[must_use]
pub fn center(cluster: &str, lng: f64, lat: f64) -> ClusterCenter {
    ClusterCenter {
        cluster: ClusterId::new(cluster),
        location: Coord { x: lng, y: lat },
    }
}

/// In-memory [`DatasetSource`] used in tests.
///
/// When no centers are supplied explicitly, one is synthesised for every
/// cluster present in the restaurants so scoring never trips over missing
/// reference data.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    restaurants: Vec<Restaurant>,
    centers: Option<Vec<ClusterCenter>>,
    districts: Vec<DistrictInfo>,
}

impl MemorySource {
    /// Create a source from a set of restaurants.
    pub fn with_restaurants<I>(restaurants: I) -> Self
    where
        I: IntoIterator<Item = Restaurant>,
    {
        Self {
            restaurants: restaurants.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Use an explicit cluster-center table.
    #[must_use]
    pub fn centers(mut self, centers: Vec<ClusterCenter>) -> Self {
        self.centers = Some(centers);
        self
    }

    /// Use an explicit district table.
    #[must_use]
    pub fn districts(mut self, districts: Vec<DistrictInfo>) -> Self {
        self.districts = districts;
        self
    }

    fn synthesised_centers(&self) -> Vec<ClusterCenter> {
        let mut centers: Vec<ClusterCenter> = Vec::new();
        for restaurant in &self.restaurants {
            if centers.iter().all(|c| c.cluster != restaurant.cluster) {
                centers.push(ClusterCenter {
                    cluster: restaurant.cluster.clone(),
                    location: restaurant.location,
                });
            }
        }
        centers
    }
}

impl DatasetSource for MemorySource {
    type Error = DatasetError;

    fn load(&self) -> Result<Dataset, Self::Error> {
        let centers = self
            .centers
            .clone()
            .unwrap_or_else(|| self.synthesised_centers());
        Dataset::new(
            self.restaurants.clone(),
            centers,
            self.districts.clone(),
            Taxonomy::geneva(),
        )
    }
}
