//! Initial map viewport and the scope sentence shown under each map.

use geo::{Centroid, Coord, MultiPoint, Point};
use log::debug;
use nextplate_core::{DEFAULT_CITY_ZOOM, Dataset, Selection, Selector};
use serde::Serialize;

use crate::error::OverlayError;

/// Where the map opens and how far it is zoomed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    /// Map center (`x = longitude`, `y = latitude`).
    pub center: Coord<f64>,
    /// Zoom hint.
    pub zoom: f64,
}

impl MapView {
    /// Viewport for the district selected in `selection`.
    ///
    /// A single district opens on its row of the district table. The
    /// city-wide scope uses the city row when the table has one, then the
    /// centroid of the district rows, then the centroid of all restaurants,
    /// zoomed to [`DEFAULT_CITY_ZOOM`].
    ///
    /// # Errors
    /// Returns [`OverlayError::MissingDistrictView`] when the selected
    /// district has no row, and [`OverlayError::EmptyGeography`] when the
    /// city-wide scope has nothing to centre on.
    pub fn for_scope(dataset: &Dataset, selection: &Selection) -> Result<Self, OverlayError> {
        if let Selector::Only(district) = &selection.district {
            return dataset
                .district_info(district)
                .map(|info| Self {
                    center: info.location,
                    zoom: info.zoom,
                })
                .ok_or_else(|| OverlayError::MissingDistrictView(district.clone()));
        }
        if let Some(city) = dataset.city_view() {
            return Ok(Self {
                center: city.location,
                zoom: city.zoom,
            });
        }

        debug!("no city-wide view row; centring on the data instead");
        let districts: MultiPoint<f64> = dataset
            .districts()
            .iter()
            .map(|info| Point::from(info.location))
            .collect();
        let center = districts
            .centroid()
            .or_else(|| {
                dataset
                    .restaurants()
                    .iter()
                    .map(|restaurant| Point::from(restaurant.location))
                    .collect::<MultiPoint<f64>>()
                    .centroid()
            })
            .ok_or(OverlayError::EmptyGeography)?;
        Ok(Self {
            center: center.into(),
            zoom: DEFAULT_CITY_ZOOM,
        })
    }
}

/// Describe the current scope, e.g. `"all Thai restaurants in Champel"`.
///
/// The most specific category selector wins; `city` names the place when
/// every district is in scope.
///
/// # Examples
/// ```
/// use nextplate_core::{District, Selection};
/// use nextplate_overlay::describe_scope;
///
/// assert_eq!(describe_scope(&Selection::all(), "Geneva"), "all restaurants in Geneva");
/// let thai = Selection::all()
///     .with_district(District::new("Champel"))
///     .with_category("Asian")
///     .with_sub_category("Thai");
/// assert_eq!(describe_scope(&thai, "Geneva"), "all Thai restaurants in Champel");
/// ```
#[must_use]
pub fn describe_scope(selection: &Selection, city: &str) -> String {
    let place = selection
        .district
        .as_option()
        .map_or(city, |district| district.as_str());
    let cuisine = selection
        .sub_category
        .as_option()
        .or_else(|| selection.category.as_option());
    match cuisine {
        Some(cuisine) => format!("all {cuisine} restaurants in {place}"),
        None => format!("all restaurants in {place}"),
    }
}
