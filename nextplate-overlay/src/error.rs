//! Errors raised while assembling overlays.

use nextplate_core::District;
use thiserror::Error;

/// Errors raised while assembling map overlays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// The selected district has no row in the district table.
    #[error("district '{0}' has no map view")]
    MissingDistrictView(District),
    /// Neither districts nor restaurants give a point to centre the map on.
    #[error("dataset has no coordinates to centre the map on")]
    EmptyGeography,
}
