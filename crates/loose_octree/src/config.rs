//! OctreeConfig - construction parameters and tuning constants.

use glam::Vec3;

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Entries a leaf holds before it tries to split.
pub const DEFAULT_NODE_CAPACITY: usize = 8;

/// Growth steps attempted for a single insertion before giving up.
pub const DEFAULT_MAX_GROWTH_ATTEMPTS: u32 = 20;

/// Node regions are not expanded by default.
pub const DEFAULT_LOOSENESS: f32 = 1.0;

/// Allowed looseness range.
pub const LOOSENESS_RANGE: (f32, f32) = (1.0, 2.0);

/// Configuration for an octree.
///
/// Values are sanitized when the tree is built; every correction is
/// reported to the tree's diagnostic sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeConfig {
  /// Side length of the root node at construction. The tree never shrinks
  /// below this.
  pub initial_size: f32,

  /// Center of the root node at construction.
  pub initial_center: Vec3,

  /// Nodes are never split into children smaller than this.
  pub min_node_size: f32,

  /// Multiplier applied to each node's side length to get the region it
  /// accepts objects into. 1.0 = exact octants, up to 2.0.
  pub looseness: f32,

  /// Entries a leaf holds before it splits (unless at `min_node_size`).
  pub node_capacity: usize,

  /// Growth steps per insertion before the insertion fails.
  pub max_growth_attempts: u32,
}

impl OctreeConfig {
  /// Config with the given extent and default tuning.
  pub fn new(initial_size: f32, initial_center: Vec3, min_node_size: f32) -> Self {
    Self {
      initial_size,
      initial_center,
      min_node_size,
      ..Self::default()
    }
  }

  /// Set node looseness.
  pub fn with_looseness(mut self, looseness: f32) -> Self {
    self.looseness = looseness;
    self
  }

  /// Set per-node entry capacity.
  pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
    self.node_capacity = node_capacity;
    self
  }

  /// Set the growth ceiling.
  pub fn with_max_growth_attempts(mut self, max_growth_attempts: u32) -> Self {
    self.max_growth_attempts = max_growth_attempts;
    self
  }

  /// Side length of a node's loose region.
  #[inline]
  pub fn loose_length(&self, base_length: f32) -> f32 {
    self.looseness * base_length
  }

  /// Correct out-of-range values, reporting each correction to `sink`.
  pub(crate) fn sanitized(mut self, sink: &dyn DiagnosticSink) -> Self {
    if !(self.initial_size.is_finite() && self.initial_size > 0.0) {
      let replaced_with = Self::default().initial_size;
      sink.report(&Diagnostic::InvalidInitialSize {
        requested: self.initial_size,
        replaced_with,
      });
      self.initial_size = replaced_with;
    }

    if !(self.min_node_size.is_finite() && self.min_node_size > 0.0) {
      sink.report(&Diagnostic::InvalidMinNodeSize {
        requested: self.min_node_size,
        replaced_with: self.initial_size,
      });
      self.min_node_size = self.initial_size;
    } else if self.min_node_size > self.initial_size {
      sink.report(&Diagnostic::MinNodeSizeClamped {
        requested: self.min_node_size,
        clamped_to: self.initial_size,
      });
      self.min_node_size = self.initial_size;
    }

    let (lo, hi) = LOOSENESS_RANGE;
    if !(lo..=hi).contains(&self.looseness) {
      let clamped_to = if !self.looseness.is_finite() {
        DEFAULT_LOOSENESS
      } else {
        self.looseness.clamp(lo, hi)
      };
      sink.report(&Diagnostic::LoosenessClamped {
        requested: self.looseness,
        clamped_to,
      });
      self.looseness = clamped_to;
    }

    if self.node_capacity == 0 {
      sink.report(&Diagnostic::NodeCapacityRaised { raised_to: 1 });
      self.node_capacity = 1;
    }

    self
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      initial_size: 1.0,
      initial_center: Vec3::ZERO,
      min_node_size: 1.0,
      looseness: DEFAULT_LOOSENESS,
      node_capacity: DEFAULT_NODE_CAPACITY,
      max_growth_attempts: DEFAULT_MAX_GROWTH_ATTEMPTS,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
