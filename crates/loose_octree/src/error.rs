//! Error types for octree mutations.

use thiserror::Error;

/// Errors returned by octree insertion.
///
/// Query operations never fail: an empty result is a valid outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OctreeError {
  /// The object lies so far outside the tree that growing toward it hit the
  /// configured ceiling. The object was not inserted.
  #[error("object not inserted: still outside the tree after {attempts} growth attempts")]
  GrowthLimitExceeded {
    /// Number of times the root was grown before giving up.
    attempts: u32,
  },

  /// The shape has a NaN or infinite coordinate and can never fit a node.
  #[error("object not inserted: shape has non-finite coordinates")]
  NonFiniteShape,
}
