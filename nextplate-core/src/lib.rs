//! Core domain types for the nextplate location recommender.
//!
//! The crate models the raw inputs of a recommendation request: existing
//! restaurants, the district/cluster geography they sit in, the caller's
//! selectors and preference weights, and the read-only [`Dataset`] handle
//! that ties the tables together. Constructors validate their inputs and
//! return `Result` so invalid data is surfaced before it reaches scoring.
//!
//! # Examples
//!
//! ```
//! use nextplate_core::{District, Selection, Taxonomy};
//!
//! let selection = Selection::all()
//!     .with_district(District::new("Champel"))
//!     .with_category("Asian")
//!     .with_sub_category("Thai");
//! assert!(Taxonomy::geneva()
//!     .validate(&selection.category, &selection.sub_category)
//!     .is_ok());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dataset;
pub mod geography;
pub mod preference;
pub mod restaurant;
pub mod selection;
pub mod taxonomy;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use dataset::{Dataset, DatasetError, DatasetSource};
pub use geography::{
    ClusterCenter, ClusterId, ClusterKey, DEFAULT_CITY_ZOOM, DEFAULT_DISTRICT_ZOOM, District,
    DistrictInfo,
};
pub use preference::{MAX_WEIGHT, ParsePreferenceError, PreferenceLevel, ScoreWeights, WeightError};
pub use restaurant::{PriceLevel, PriceLevelError, Restaurant};
pub use selection::{ALL, Selection, SelectionError, Selector};
pub use taxonomy::{Taxonomy, TaxonomyEntry};
