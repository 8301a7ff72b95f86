//! Node - one region of the octree with its local entries and optional
//! eight children.
//!
//! Every entry stored in a node fits entirely inside that node's loose
//! bounds. Queries rely on this to prune whole subtrees.

use glam::Vec3;
use smallvec::SmallVec;

use crate::config::OctreeConfig;
use crate::geometry::Aabb;
use crate::octant::Octant;
use crate::shape::Shape;

/// Entries stored inline before a node's list spills to the heap.
pub const INLINE_ENTRIES: usize = 8;

/// An object handle paired with the shape it was inserted with.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T, S> {
  /// Caller's object handle.
  pub object: T,
  /// Box or point the object was inserted with.
  pub shape: S,
}

/// Octree node.
///
/// A leaf holds only entries. A split node owns exactly eight children, one
/// per [`Octant`], and keeps the entries that do not fit inside the child
/// their center maps to.
#[derive(Clone, Debug)]
pub struct Node<T, S> {
  pub(crate) center: Vec3,
  pub(crate) base_length: f32,
  pub(crate) bounds: Aabb,
  pub(crate) entries: SmallVec<[Entry<T, S>; INLINE_ENTRIES]>,
  pub(crate) children: Option<Box<[Node<T, S>; 8]>>,
}

impl<T, S: Shape> Node<T, S> {
  /// Create an empty leaf.
  pub(crate) fn new(center: Vec3, base_length: f32, config: &OctreeConfig) -> Self {
    Self {
      center,
      base_length,
      bounds: Aabb::cube(center, config.loose_length(base_length)),
      entries: SmallVec::new(),
      children: None,
    }
  }

  /// Center of the node.
  pub fn center(&self) -> Vec3 {
    self.center
  }

  /// Side length of the node's exact cube.
  pub fn base_length(&self) -> f32 {
    self.base_length
  }

  /// Loose region objects are accepted into.
  pub fn bounds(&self) -> Aabb {
    self.bounds
  }

  /// Entries stored directly at this node.
  pub fn entries(&self) -> &[Entry<T, S>] {
    &self.entries
  }

  /// Child nodes, indexed by [`Octant::index`].
  pub fn children(&self) -> Option<&[Node<T, S>; 8]> {
    self.children.as_deref()
  }

  /// Check if this node has no children.
  pub fn is_leaf(&self) -> bool {
    self.children.is_none()
  }

  pub(crate) fn iter_children(&self) -> impl Iterator<Item = &Node<T, S>> {
    self.children.as_deref().into_iter().flatten()
  }

  /// Loose bounds a child in `octant` has (or would have).
  pub(crate) fn child_bounds(&self, octant: Octant, config: &OctreeConfig) -> Aabb {
    Aabb::cube(
      octant.child_center(self.center, self.base_length),
      config.loose_length(self.base_length * 0.5),
    )
  }

  /// Check if `shape` fits inside this node's bounds.
  #[inline]
  pub(crate) fn can_hold(&self, shape: &S) -> bool {
    shape.fits_within(&self.bounds)
  }

  /// Check if this node or any descendant holds an entry.
  pub(crate) fn has_any_entries(&self) -> bool {
    !self.entries.is_empty() || self.iter_children().any(Node::has_any_entries)
  }

  /// Entries in this subtree.
  pub(crate) fn entry_count(&self) -> usize {
    self.entries.len() + self.iter_children().map(Node::entry_count).sum::<usize>()
  }

  /// Nodes in this subtree, this one included.
  pub(crate) fn node_count(&self) -> usize {
    1 + self.iter_children().map(Node::node_count).sum::<usize>()
  }

  /// Levels in this subtree (a leaf has depth 1).
  pub(crate) fn depth(&self) -> usize {
    1 + self.iter_children().map(Node::depth).max().unwrap_or(0)
  }

  /// Append every object in this subtree.
  pub(crate) fn collect_all(&self, out: &mut Vec<T>)
  where
    T: Clone,
  {
    out.extend(self.entries.iter().map(|e| e.object.clone()));
    for child in self.iter_children() {
      child.collect_all(out);
    }
  }

  /// Replace this node's children.
  pub(crate) fn set_children(&mut self, children: Box<[Node<T, S>; 8]>) {
    self.children = Some(children);
  }

  /// Insert an entry that is known to fit this node's bounds.
  ///
  /// A leaf below capacity, or one whose children would be smaller than the
  /// minimum node size, stores the entry locally. Otherwise the leaf splits
  /// and the entry goes to the child its center maps to, if it fits there.
  pub(crate) fn insert(&mut self, entry: Entry<T, S>, config: &OctreeConfig) {
    debug_assert!(self.can_hold(&entry.shape), "entry must fit node bounds");

    if self.children.is_none() {
      if self.entries.len() < config.node_capacity || self.base_length * 0.5 < config.min_node_size {
        self.entries.push(entry);
        return;
      }
      self.split(config);
    }

    let octant = Octant::containing(self.center, entry.shape.center());
    match self.children.as_deref_mut() {
      Some(children) if children[octant.index()].can_hold(&entry.shape) => {
        children[octant.index()].insert(entry, config)
      }
      _ => self.entries.push(entry),
    }
  }

  /// Create the eight children and push down every entry that fits one.
  fn split(&mut self, config: &OctreeConfig) {
    let center = self.center;
    let base_length = self.base_length;
    let mut children: Box<[Node<T, S>; 8]> = Box::new(std::array::from_fn(|i| {
      Node::new(
        Octant::from_index(i).child_center(center, base_length),
        base_length * 0.5,
        config,
      )
    }));

    for entry in std::mem::take(&mut self.entries) {
      let child = &mut children[Octant::containing(center, entry.shape.center()).index()];
      if child.can_hold(&entry.shape) {
        child.insert(entry, config);
      } else {
        self.entries.push(entry);
      }
    }

    self.children = Some(children);
  }

  /// Remove the first entry holding `object`, searching the whole subtree.
  pub(crate) fn remove(&mut self, object: &T, config: &OctreeConfig) -> bool
  where
    T: PartialEq,
  {
    let removed = if let Some(pos) = self.entries.iter().position(|e| e.object == *object) {
      self.entries.remove(pos);
      true
    } else {
      self
        .children
        .as_deref_mut()
        .is_some_and(|children| children.iter_mut().any(|c| c.remove(object, config)))
    };

    if removed {
      self.merge_if_possible(config);
    }
    removed
  }

  /// Remove `object`, only visiting nodes whose bounds could hold `shape`.
  pub(crate) fn remove_at(&mut self, object: &T, shape: &S, config: &OctreeConfig) -> bool
  where
    T: PartialEq,
  {
    if !self.can_hold(shape) {
      return false;
    }

    let removed = if let Some(pos) = self.entries.iter().position(|e| e.object == *object) {
      self.entries.remove(pos);
      true
    } else {
      self.children.as_deref_mut().is_some_and(|children| {
        children
          .iter_mut()
          .any(|c| c.remove_at(object, shape, config))
      })
    };

    if removed {
      self.merge_if_possible(config);
    }
    removed
  }

  /// Collapse the children back into this node if they are all leaves and
  /// their entries, plus this node's, fit within capacity.
  fn merge_if_possible(&mut self, config: &OctreeConfig) {
    let Some(children) = self.children.as_deref() else {
      return;
    };

    let mut total = self.entries.len();
    for child in children {
      if !child.is_leaf() {
        return;
      }
      total += child.entries.len();
    }
    if total > config.node_capacity {
      return;
    }

    if let Some(children) = self.children.take() {
      let children = *children;
      for child in children {
        self.entries.extend(child.entries);
      }
    }
  }

  /// Try to make this subtree's root smaller.
  ///
  /// Succeeds when the node is at least twice `min_length` and every entry
  /// in the subtree falls in one octant: either all local entries fit that
  /// octant's child region and at most that child holds entries. A leaf is
  /// halved around the octant; a split node is replaced by the child.
  ///
  /// Returns whether the node changed.
  pub(crate) fn shrink(&mut self, min_length: f32, config: &OctreeConfig) -> bool {
    if self.base_length < 2.0 * min_length || !self.has_any_entries() {
      return false;
    }

    let mut best: Option<Octant> = None;
    for entry in &self.entries {
      let octant = Octant::containing(self.center, entry.shape.center());
      if best.is_some_and(|b| b != octant) {
        return false;
      }
      if !entry.shape.fits_within(&self.child_bounds(octant, config)) {
        return false;
      }
      best = Some(octant);
    }

    if let Some(children) = self.children.as_deref() {
      let mut occupied = Octant::ALL
        .into_iter()
        .filter(|octant| children[octant.index()].has_any_entries());
      if let Some(octant) = occupied.next() {
        if occupied.next().is_some() || best.is_some_and(|b| b != octant) {
          return false;
        }
        best = Some(octant);
      }
    }

    let Some(best) = best else {
      return false;
    };

    match self.children.take() {
      None => {
        self.center = best.child_center(self.center, self.base_length);
        self.base_length *= 0.5;
        self.bounds = Aabb::cube(self.center, config.loose_length(self.base_length));
      }
      Some(children) => {
        let children: Box<[Node<T, S>]> = children;
        let mut child = children.into_vec().swap_remove(best.index());
        for entry in std::mem::take(&mut self.entries) {
          child.insert(entry, config);
        }
        *self = child;
      }
    }
    true
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
