//! Districts, district clusters and their representative coordinates.
//!
//! A district is a fixed top-level zone of the city. Each district is split
//! into clusters, the unit over which locations are scored and ranked. Both
//! identifiers are data-driven, so they are modelled as validated string
//! newtypes rather than closed enums; [`Dataset`](crate::Dataset) checks
//! selections against the districts it knows about.

use std::fmt;

use geo::Coord;

/// Zoom hint for a district view when the data does not supply one.
pub const DEFAULT_DISTRICT_ZOOM: f64 = 15.0;
/// Zoom hint for the city-wide view when the data does not supply one.
pub const DEFAULT_CITY_ZOOM: f64 = 13.4;

/// Name of a city district.
///
/// # Examples
/// ```
/// use nextplate_core::District;
///
/// let district = District::new("Champel");
/// assert_eq!(district.as_str(), "Champel");
/// assert_eq!(district.to_string(), "Champel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct District(String);

impl District {
    /// Wrap a district name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the district name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a cluster of restaurants inside a district.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClusterId(String);

impl ClusterId {
    /// Wrap a cluster identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `(district, cluster)` grouping key.
///
/// Ordering is by district first, then cluster, which gives aggregates a
/// deterministic row order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterKey {
    /// Owning district.
    pub district: District,
    /// Cluster within the district.
    pub cluster: ClusterId,
}

impl ClusterKey {
    /// Build a key from its parts.
    #[must_use]
    pub const fn new(district: District, cluster: ClusterId) -> Self {
        Self { district, cluster }
    }
}

/// Representative coordinate of a cluster, used to place ranked results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterCenter {
    /// Cluster the center belongs to.
    pub cluster: ClusterId,
    /// Center coordinate (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
}

/// Metadata for a district: a representative coordinate and a zoom hint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistrictInfo {
    /// District name. The sentinel `All` denotes the city-wide view.
    pub district: District,
    /// Representative coordinate (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Default map zoom for the district.
    pub zoom: f64,
}

impl DistrictInfo {
    /// Report whether this row describes the whole city rather than a district.
    #[must_use]
    pub fn is_city_wide(&self) -> bool {
        self.district.as_str() == crate::ALL
    }
}
