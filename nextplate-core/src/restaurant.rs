//! Restaurant records as supplied by the data-loading collaborator.

use geo::Coord;

use crate::{ClusterId, ClusterKey, District};

/// Ordinal price level reported for a restaurant.
///
/// # Examples
/// ```
/// use nextplate_core::PriceLevel;
///
/// let level = PriceLevel::try_from(3_u8).expect("valid level");
/// assert_eq!(level, PriceLevel::Medium);
/// assert_eq!(level.label(), Some("Medium"));
/// assert_eq!(PriceLevel::Inexpensive.label(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum PriceLevel {
    /// Level 1.
    Inexpensive,
    /// Level 2.
    Cheap,
    /// Level 3.
    Medium,
    /// Level 4.
    Expensive,
}

impl PriceLevel {
    /// Return the numeric level in `1..=4`.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Inexpensive => 1,
            Self::Cheap => 2,
            Self::Medium => 3,
            Self::Expensive => 4,
        }
    }

    /// Display label used in popups. Level 1 has no label of its own.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Inexpensive => None,
            Self::Cheap => Some("Cheap"),
            Self::Medium => Some("Medium"),
            Self::Expensive => Some("Expensive"),
        }
    }
}

/// Raised when a numeric price level falls outside `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("price level {0} is outside 1..=4")]
pub struct PriceLevelError(pub u8);

impl TryFrom<u8> for PriceLevel {
    type Error = PriceLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Inexpensive),
            2 => Ok(Self::Cheap),
            3 => Ok(Self::Medium),
            4 => Ok(Self::Expensive),
            other => Err(PriceLevelError(other)),
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.as_u8()
    }
}

/// A single existing restaurant.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Every
/// restaurant belongs to exactly one district and one district cluster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restaurant {
    /// Unique place identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price level, when known.
    pub price_level: Option<PriceLevel>,
    /// Number of reviews left for the place.
    pub review_count: u32,
    /// Average rating, typically `1.0..=5.0`.
    pub rating: f64,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Primary category reported by the source listing.
    pub primary_category: String,
    /// Free-text category tag; may list several cuisines.
    pub category_tag: String,
    /// Macro category such as `European` or `Fast Food`.
    pub macro_category: String,
    /// District the restaurant sits in.
    pub district: District,
    /// Cluster within the district.
    pub cluster: ClusterId,
}

impl Restaurant {
    /// Return the `(district, cluster)` grouping key.
    #[must_use]
    pub fn cluster_key(&self) -> ClusterKey {
        ClusterKey::new(self.district.clone(), self.cluster.clone())
    }

    /// Report whether the category tag mentions `sub_category`.
    ///
    /// Matching is a case-sensitive substring search, so a tag such as
    /// `"Italian, Pizza"` matches both `Italian` and `Pizza` but not `pizza`.
    #[must_use]
    pub fn matches_sub_category(&self, sub_category: &str) -> bool {
        self.category_tag.contains(sub_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, PriceLevel::Inexpensive)]
    #[case(2, PriceLevel::Cheap)]
    #[case(3, PriceLevel::Medium)]
    #[case(4, PriceLevel::Expensive)]
    fn price_level_round_trips_numeric_value(#[case] raw: u8, #[case] expected: PriceLevel) {
        let level = PriceLevel::try_from(raw).expect("valid level");
        assert_eq!(level, expected);
        assert_eq!(level.as_u8(), raw);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn price_level_rejects_out_of_range(#[case] raw: u8) {
        assert_eq!(PriceLevel::try_from(raw), Err(PriceLevelError(raw)));
    }

    #[rstest]
    #[case("Italian", true)]
    #[case("Pizza", true)]
    #[case("pizza", false)]
    #[case("Thai", false)]
    fn sub_category_matching_is_case_sensitive_substring(
        #[case] sub_category: &str,
        #[case] expected: bool,
    ) {
        let restaurant = Restaurant {
            id: "p1".into(),
            name: "Da Mario".into(),
            price_level: None,
            review_count: 0,
            rating: 4.0,
            location: Coord { x: 6.14, y: 46.2 },
            primary_category: "restaurant".into(),
            category_tag: "Italian, Pizza".into(),
            macro_category: "European".into(),
            district: District::new("Champel"),
            cluster: ClusterId::new("Champel_1"),
        };
        assert_eq!(restaurant.matches_sub_category(sub_category), expected);
    }
}
