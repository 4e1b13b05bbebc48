//! CSV loading for the nextplate datasets.
//!
//! Responsibilities:
//! - Decode the restaurant, cluster-center and district tables.
//! - Map transport rows into `nextplate-core` domain values, reporting the
//!   table and 1-based row number of any invalid row.
//! - Assemble a validated [`Dataset`] through the [`DatasetSource`] trait.
//!
//! Boundaries:
//! - Do not encode scoring rules (they live in `nextplate-scorer`).
//! - Load once at start-up; the resulting dataset is shared read-only.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use nextplate_core::DatasetSource;
//! use nextplate_data::{CsvDatasetSource, DatasetPaths};
//!
//! let source = CsvDatasetSource::new(DatasetPaths::in_dir(Utf8Path::new("data")));
//! let dataset = source.load().expect("load dataset");
//! assert!(!dataset.restaurants().is_empty());
//! ```

#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use nextplate_core::{
    ClusterCenter, Dataset, DatasetError, DatasetSource, DistrictInfo, Restaurant, Taxonomy,
};
use nextplate_fs::open_utf8_file;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod records;

use records::{ClusterCenterRecord, DistrictRecord, RestaurantRecord};

/// Default file name of the restaurant table.
pub const RESTAURANTS_FILE: &str = "restaurants.csv";
/// Default file name of the cluster-center table.
pub const CLUSTER_CENTERS_FILE: &str = "cluster_centers.csv";
/// Default file name of the district table.
pub const DISTRICTS_FILE: &str = "districts.csv";

/// Reasons a decoded row cannot become a domain value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RowError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinate ({lng}, {lat}) is not finite")]
    NonFiniteCoordinate {
        /// Longitude as read.
        lng: f64,
        /// Latitude as read.
        lat: f64,
    },
    /// Price level was not a whole number in `1..=4`.
    #[error("price level {0} is not a whole number in 1..=4")]
    InvalidPriceLevel(f64),
    /// Review count was negative, fractional or too large.
    #[error("review count {0} is not a non-negative whole number")]
    InvalidReviewCount(f64),
    /// The rating column was empty.
    #[error("rating is missing")]
    MissingRating,
    /// The rating was NaN or infinite.
    #[error("rating {0} is not finite")]
    InvalidRating(f64),
    /// The district column was empty.
    #[error("district is missing")]
    MissingDistrict,
    /// The cluster column was empty.
    #[error("district cluster is missing")]
    MissingCluster,
    /// The zoom hint was not a positive finite number.
    #[error("zoom {0} is not a positive number")]
    InvalidZoom(f64),
}

/// Errors raised while loading the CSV tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening a table failed.
    #[error("failed to open {table} table at {path}")]
    Open {
        /// Table name.
        table: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// CSV decoding failed.
    #[error("failed to decode {table} table at {path}")]
    Decode {
        /// Table name.
        table: &'static str,
        /// Table path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A decoded row violates the domain rules.
    #[error("invalid row {row} in {table} table: {reason}")]
    InvalidRow {
        /// Table name.
        table: &'static str,
        /// 1-based data row number, excluding the header.
        row: usize,
        /// What was wrong with the row.
        reason: RowError,
    },
    /// The assembled tables violate dataset invariants.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Locations of the three source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Restaurant table.
    pub restaurants: Utf8PathBuf,
    /// Cluster-center table.
    pub cluster_centers: Utf8PathBuf,
    /// District metadata table.
    pub districts: Utf8PathBuf,
}

impl DatasetPaths {
    /// Use the default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self {
            restaurants: dir.join(RESTAURANTS_FILE),
            cluster_centers: dir.join(CLUSTER_CENTERS_FILE),
            districts: dir.join(DISTRICTS_FILE),
        }
    }
}

/// [`DatasetSource`] reading the three tables from CSV files.
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    paths: DatasetPaths,
    taxonomy: Taxonomy,
}

impl CsvDatasetSource {
    /// Read the given paths using the Geneva taxonomy.
    #[must_use]
    pub fn new(paths: DatasetPaths) -> Self {
        Self::with_taxonomy(paths, Taxonomy::geneva())
    }

    /// Read the given paths using a custom taxonomy.
    #[must_use]
    pub const fn with_taxonomy(paths: DatasetPaths, taxonomy: Taxonomy) -> Self {
        Self { paths, taxonomy }
    }

    /// Paths this source reads from.
    #[must_use]
    pub const fn paths(&self) -> &DatasetPaths {
        &self.paths
    }
}

impl DatasetSource for CsvDatasetSource {
    type Error = DataError;

    fn load(&self) -> Result<Dataset, Self::Error> {
        let restaurants = load_restaurants(&self.paths.restaurants)?;
        let centers = load_cluster_centers(&self.paths.cluster_centers)?;
        let districts = load_districts(&self.paths.districts)?;
        info!(
            "loaded {} restaurants, {} cluster centers and {} districts",
            restaurants.len(),
            centers.len(),
            districts.len()
        );
        Ok(Dataset::new(
            restaurants,
            centers,
            districts,
            self.taxonomy.clone(),
        )?)
    }
}

/// Load the restaurant table.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened or decoded, or a row
/// carries invalid values.
pub fn load_restaurants(path: &Utf8Path) -> Result<Vec<Restaurant>, DataError> {
    read_table(path, "restaurants", RestaurantRecord::into_domain)
}

/// Load the cluster-center table.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened or decoded, or a row
/// carries a non-finite coordinate.
pub fn load_cluster_centers(path: &Utf8Path) -> Result<Vec<ClusterCenter>, DataError> {
    read_table(path, "cluster centers", ClusterCenterRecord::into_domain)
}

/// Load the district metadata table.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened or decoded, or a row
/// carries invalid values.
pub fn load_districts(path: &Utf8Path) -> Result<Vec<DistrictInfo>, DataError> {
    read_table(path, "districts", DistrictRecord::into_domain)
}

fn read_table<R, T>(
    path: &Utf8Path,
    table: &'static str,
    into_domain: impl Fn(R) -> Result<T, RowError>,
) -> Result<Vec<T>, DataError>
where
    R: DeserializeOwned,
{
    let file = open_utf8_file(path).map_err(|source| DataError::Open {
        table,
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    let mut rows = Vec::new();
    for (index, decoded) in reader.deserialize::<R>().enumerate() {
        let record = decoded.map_err(|source| DataError::Decode {
            table,
            path: path.to_path_buf(),
            source,
        })?;
        let row = into_domain(record).map_err(|reason| DataError::InvalidRow {
            table,
            row: index + 1,
            reason,
        })?;
        rows.push(row);
    }
    debug!("read {} rows from {table} table at {path}", rows.len());
    Ok(rows)
}
