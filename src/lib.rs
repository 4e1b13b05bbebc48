//! Facade crate for the nextplate restaurant location recommender.
//!
//! This crate re-exports the core domain types and the scoring pipeline, and
//! exposes map overlay construction behind the `overlay` feature flag.

#![forbid(unsafe_code)]

pub use nextplate_core::{
    ALL, ClusterCenter, ClusterId, ClusterKey, Dataset, DatasetError, DatasetSource, District,
    DistrictInfo, PreferenceLevel, PriceLevel, Restaurant, ScoreWeights, Selection,
    SelectionError, Selector, Taxonomy,
};

pub use nextplate_scorer::{
    LocationPick, LocationRecommender, MinMaxScaler, PickLimits, RankedCluster, Recommendation,
    ScoreError, ScoredCluster,
};

#[cfg(feature = "overlay")]
pub use nextplate_overlay::{MapFeature, MapView, OverlayError, Overlays, describe_scope};
