//! Error types raised by the scoring pipeline.
#![forbid(unsafe_code)]

use nextplate_core::{ClusterId, District, SelectionError};
use thiserror::Error;

/// Errors raised while scoring and ranking clusters.
///
/// An empty scope is not an error: it yields empty best/worst lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The selection names a district or category the dataset does not know.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// The weights leave the score denominator at zero.
    #[error("score weights must not all be zero")]
    InvalidWeights,
    /// A scored cluster has no entry in the cluster-center table.
    #[error("cluster '{cluster}' in district '{district}' has no cluster center")]
    MissingClusterCenter {
        /// Cluster without a center.
        cluster: ClusterId,
        /// District owning the cluster.
        district: District,
    },
}
