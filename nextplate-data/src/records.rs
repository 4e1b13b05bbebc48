//! Transport records for the three CSV tables.
//!
//! Rows decode into these DTOs first and are then mapped into domain values
//! in one pass, so column names and lenient numeric encodings stay out of
//! `nextplate-core`.

use geo::Coord;
use nextplate_core::{
    ClusterCenter, ClusterId, DEFAULT_CITY_ZOOM, DEFAULT_DISTRICT_ZOOM, District, DistrictInfo,
    PriceLevel, Restaurant,
};
use serde::Deserialize;

use crate::RowError;

#[derive(Debug, Deserialize)]
pub(crate) struct RestaurantRecord {
    #[serde(rename = "place_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "price_level_combined", default)]
    price_level: Option<f64>,
    #[serde(rename = "user_ratings_total", default)]
    review_count: Option<f64>,
    #[serde(rename = "combined_rating", default)]
    rating: Option<f64>,
    #[serde(rename = "geometry.location.lat")]
    lat: f64,
    #[serde(rename = "geometry.location.lng")]
    lng: f64,
    #[serde(rename = "main_category", default)]
    primary_category: String,
    #[serde(rename = "combined_main_category", default)]
    category_tag: String,
    #[serde(rename = "combined_main_category_2", default)]
    macro_category: String,
    district: String,
    district_cluster: String,
}

impl RestaurantRecord {
    pub(crate) fn into_domain(self) -> Result<Restaurant, RowError> {
        let location = coordinate(self.lng, self.lat)?;
        let price_level = self.price_level.map(price_level).transpose()?;
        let review_count = self.review_count.map_or(Ok(0), review_count)?;
        let rating = match self.rating {
            Some(value) if value.is_finite() => value,
            Some(value) => return Err(RowError::InvalidRating(value)),
            None => return Err(RowError::MissingRating),
        };
        if self.district.trim().is_empty() {
            return Err(RowError::MissingDistrict);
        }
        if self.district_cluster.trim().is_empty() {
            return Err(RowError::MissingCluster);
        }
        Ok(Restaurant {
            id: self.id,
            name: self.name,
            price_level,
            review_count,
            rating,
            location,
            primary_category: self.primary_category,
            category_tag: self.category_tag,
            macro_category: self.macro_category,
            district: District::new(self.district),
            cluster: ClusterId::new(self.district_cluster),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClusterCenterRecord {
    district_cluster: String,
    #[serde(alias = "cluster_lat")]
    lat: f64,
    #[serde(alias = "cluster_lng")]
    lng: f64,
}

impl ClusterCenterRecord {
    pub(crate) fn into_domain(self) -> Result<ClusterCenter, RowError> {
        Ok(ClusterCenter {
            cluster: ClusterId::new(self.district_cluster),
            location: coordinate(self.lng, self.lat)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DistrictRecord {
    district: String,
    district_lat: f64,
    district_lng: f64,
    #[serde(default)]
    zoom: Option<f64>,
}

impl DistrictRecord {
    pub(crate) fn into_domain(self) -> Result<DistrictInfo, RowError> {
        let location = coordinate(self.district_lng, self.district_lat)?;
        let district = District::new(self.district);
        let fallback = if district.as_str() == nextplate_core::ALL {
            DEFAULT_CITY_ZOOM
        } else {
            DEFAULT_DISTRICT_ZOOM
        };
        let zoom = match self.zoom {
            Some(value) if value.is_finite() && value > 0.0 => value,
            Some(value) => return Err(RowError::InvalidZoom(value)),
            None => fallback,
        };
        Ok(DistrictInfo {
            district,
            location,
            zoom,
        })
    }
}

fn coordinate(lng: f64, lat: f64) -> Result<Coord<f64>, RowError> {
    if lng.is_finite() && lat.is_finite() {
        Ok(Coord { x: lng, y: lat })
    } else {
        Err(RowError::NonFiniteCoordinate { lng, lat })
    }
}

/// Interpret a whole number stored as a float, e.g. `"123.0"`.
fn whole_number(value: f64) -> Option<u32> {
    let in_range = value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX);
    if !in_range || value.fract() != 0.0 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is a non-negative whole number within u32 range"
    )]
    let whole = value as u32;
    Some(whole)
}

fn review_count(value: f64) -> Result<u32, RowError> {
    whole_number(value).ok_or(RowError::InvalidReviewCount(value))
}

fn price_level(value: f64) -> Result<PriceLevel, RowError> {
    whole_number(value)
        .and_then(|level| u8::try_from(level).ok())
        .and_then(|level| PriceLevel::try_from(level).ok())
        .ok_or(RowError::InvalidPriceLevel(value))
}
