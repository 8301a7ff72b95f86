//! Diagnostic side channel for configuration corrections and insertion
//! failures.
//!
//! The octree never logs through a global. It reports to the
//! [`DiagnosticSink`] it was built with. The default sink is `TracingSink`
//! when the `tracing` feature is enabled and [`NullSink`] otherwise.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
  /// Input was corrected and the operation continued.
  Warning,
  /// An operation failed.
  Error,
}

/// Event reported through a [`DiagnosticSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
  /// `min_node_size` was larger than `initial_size`.
  MinNodeSizeClamped {
    /// Requested minimum node size.
    requested: f32,
    /// Value actually used.
    clamped_to: f32,
  },
  /// `min_node_size` was zero, negative or not finite.
  InvalidMinNodeSize {
    /// Requested minimum node size.
    requested: f32,
    /// Value actually used.
    replaced_with: f32,
  },
  /// `initial_size` was zero, negative or not finite.
  InvalidInitialSize {
    /// Requested initial size.
    requested: f32,
    /// Value actually used.
    replaced_with: f32,
  },
  /// `looseness` was outside `[1, 2]`.
  LoosenessClamped {
    /// Requested looseness.
    requested: f32,
    /// Value actually used.
    clamped_to: f32,
  },
  /// `node_capacity` was zero.
  NodeCapacityRaised {
    /// Value actually used.
    raised_to: usize,
  },
  /// Growing toward an object did not bring it inside the tree.
  GrowthLimitExceeded {
    /// Number of growth steps performed.
    attempts: u32,
  },
}

impl Diagnostic {
  /// Severity of this event.
  pub fn severity(&self) -> Severity {
    match self {
      Diagnostic::GrowthLimitExceeded { .. } => Severity::Error,
      _ => Severity::Warning,
    }
  }
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Diagnostic::MinNodeSizeClamped {
        requested,
        clamped_to,
      } => write!(
        f,
        "minimum node size {requested} exceeds initial size, clamped to {clamped_to}"
      ),
      Diagnostic::InvalidMinNodeSize {
        requested,
        replaced_with,
      } => write!(
        f,
        "minimum node size {requested} is not positive, using {replaced_with}"
      ),
      Diagnostic::InvalidInitialSize {
        requested,
        replaced_with,
      } => write!(
        f,
        "initial size {requested} is not positive, using {replaced_with}"
      ),
      Diagnostic::LoosenessClamped {
        requested,
        clamped_to,
      } => write!(
        f,
        "looseness {requested} outside [1, 2], clamped to {clamped_to}"
      ),
      Diagnostic::NodeCapacityRaised { raised_to } => {
        write!(f, "node capacity must be at least 1, using {raised_to}")
      }
      Diagnostic::GrowthLimitExceeded { attempts } => write!(
        f,
        "aborted add: object still outside the tree after {attempts} growth attempts"
      ),
    }
  }
}

/// Receiver for [`Diagnostic`] events.
pub trait DiagnosticSink: Send + Sync {
  /// Handle one event.
  fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
  F: Fn(&Diagnostic) + Send + Sync,
{
  fn report(&self, diagnostic: &Diagnostic) {
    self(diagnostic)
  }
}

/// Forwards diagnostics to `tracing` at warn/error level.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagnosticSink for TracingSink {
  fn report(&self, diagnostic: &Diagnostic) {
    match diagnostic.severity() {
      Severity::Warning => tracing::warn!(target: "loose_octree", kind = ?diagnostic, "{diagnostic}"),
      Severity::Error => tracing::error!(target: "loose_octree", kind = ?diagnostic, "{diagnostic}"),
    }
  }
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
  fn report(&self, _diagnostic: &Diagnostic) {}
}
