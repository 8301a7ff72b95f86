//! Octree - the root object shared by both variants.
//!
//! Owns the root [`Node`] and replaces it when the tree has to grow toward
//! an object outside its bounds, or can shrink after a removal.

use std::fmt;

use glam::Vec3;

use crate::config::OctreeConfig;
#[cfg(not(feature = "tracing"))]
use crate::diagnostics::NullSink;
#[cfg(feature = "tracing")]
use crate::diagnostics::TracingSink;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::OctreeError;
use crate::geometry::Aabb;
use crate::node::{Entry, Node};
use crate::octant::{growth_sign, Octant};
use crate::shape::Shape;

/// Dynamic octree over objects of type `T` placed by shapes of type `S`.
///
/// Use the [`BoundsOctree`](crate::BoundsOctree) and
/// [`PointOctree`](crate::PointOctree) aliases.
pub struct Octree<T, S> {
  pub(crate) root: Node<T, S>,
  pub(crate) config: OctreeConfig,
  count: usize,
  sink: Box<dyn DiagnosticSink>,
}

impl<T, S: Shape> Octree<T, S> {
  /// Build a tree from `config` with the default diagnostic sink.
  ///
  /// Diagnostics go to `tracing` with the `tracing` feature and are dropped
  /// without it.
  pub fn from_config(config: OctreeConfig) -> Self {
    #[cfg(feature = "tracing")]
    let sink = TracingSink;
    #[cfg(not(feature = "tracing"))]
    let sink = NullSink;
    Self::from_config_with_sink(config, sink)
  }

  /// Build a tree from `config` with a custom diagnostic sink.
  ///
  /// Out-of-range config values are corrected and reported to `sink`
  /// before the tree exists.
  pub fn from_config_with_sink(config: OctreeConfig, sink: impl DiagnosticSink + 'static) -> Self {
    let config = config.sanitized(&sink);
    Self {
      root: Node::new(config.initial_center, config.initial_size, &config),
      config,
      count: 0,
      sink: Box::new(sink),
    }
  }

  /// Insert `object` placed by `shape`.
  ///
  /// Grows the tree toward the shape until it fits, at most
  /// `max_growth_attempts` times. On failure the object is not inserted;
  /// any growth that already happened is kept.
  pub fn add(&mut self, object: T, shape: S) -> Result<(), OctreeError> {
    if !shape.is_finite() {
      return Err(OctreeError::NonFiniteShape);
    }

    let mut attempts = 0;
    while !self.root.can_hold(&shape) {
      if attempts >= self.config.max_growth_attempts {
        self.sink.report(&Diagnostic::GrowthLimitExceeded { attempts });
        return Err(OctreeError::GrowthLimitExceeded { attempts });
      }
      self.grow(shape.center() - self.root.center);
      attempts += 1;
    }

    self.root.insert(Entry { object, shape }, &self.config);
    self.count += 1;
    Ok(())
  }

  /// Remove `object`, searching the whole tree.
  ///
  /// Returns whether an entry was removed. Only the first matching entry is
  /// removed.
  pub fn remove(&mut self, object: &T) -> bool
  where
    T: PartialEq,
  {
    let removed = self.root.remove(object, &self.config);
    if removed {
      self.count -= 1;
      self.shrink();
    }
    removed
  }

  /// Remove `object`, using the shape it was inserted with to skip regions
  /// that cannot contain it.
  pub fn remove_at(&mut self, object: &T, shape: S) -> bool
  where
    T: PartialEq,
  {
    let removed = self.root.remove_at(object, &shape, &self.config);
    if removed {
      self.count -= 1;
      self.shrink();
    }
    removed
  }

  /// Number of objects in the tree.
  pub fn count(&self) -> usize {
    self.count
  }

  /// Check if the tree holds no objects.
  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Region currently covered by the root node.
  pub fn max_bounds(&self) -> Aabb {
    self.root.bounds
  }

  /// Sanitized configuration the tree was built with.
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Current root node.
  pub fn root(&self) -> &Node<T, S> {
    &self.root
  }

  /// Total nodes in the tree.
  pub fn node_count(&self) -> usize {
    self.root.node_count()
  }

  /// Levels in the tree (1 when the root is a leaf).
  pub fn depth(&self) -> usize {
    self.root.depth()
  }

  /// Append every object to `out`, in no particular order.
  pub fn get_all(&self, out: &mut Vec<T>)
  where
    T: Clone,
  {
    out.reserve(self.count);
    self.root.collect_all(out);
  }

  /// Every object in a new vector.
  pub fn all(&self) -> Vec<T>
  where
    T: Clone,
  {
    let mut out = Vec::with_capacity(self.count);
    self.root.collect_all(&mut out);
    out
  }

  /// Double the root size toward `direction`.
  ///
  /// The old root, if it holds anything, becomes the child of the new root
  /// on the side opposite `direction`; the other seven children are empty.
  fn grow(&mut self, direction: Vec3) {
    let sign = growth_sign(direction);
    let half = self.root.base_length * 0.5;
    let new_length = self.root.base_length * 2.0;
    let new_center = self.root.center + sign * half;

    let new_root = Node::new(new_center, new_length, &self.config);
    let old_root = std::mem::replace(&mut self.root, new_root);
    let old_length = old_root.base_length;

    if old_root.has_any_entries() {
      let slot = Octant::containing(new_center, old_root.center);
      let config = &self.config;
      let mut children: Box<[Node<T, S>; 8]> = Box::new(std::array::from_fn(|i| {
        Node::new(
          Octant::from_index(i).child_center(new_center, new_length),
          old_length,
          config,
        )
      }));
      children[slot.index()] = old_root;
      self.root.set_children(children);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
      target: "loose_octree",
      old_length,
      new_length,
      center = ?new_center,
      "grew octree root"
    );
  }

  /// Try once to replace the root with a smaller one, never going below the
  /// initial size.
  fn shrink(&mut self) {
    #[cfg(feature = "tracing")]
    let before = self.root.base_length;
    if self.root.shrink(self.config.initial_size, &self.config) {
      #[cfg(feature = "tracing")]
      tracing::debug!(
        target: "loose_octree",
        old_length = before,
        new_length = self.root.base_length,
        center = ?self.root.center,
        "shrank octree root"
      );
    }
  }
}

impl<T, S: Shape> fmt::Debug for Octree<T, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Octree")
      .field("count", &self.count)
      .field("max_bounds", &self.root.bounds)
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
#[path = "octree_test.rs"]
mod octree_test;
