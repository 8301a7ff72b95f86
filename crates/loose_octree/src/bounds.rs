//! Bounding-volume octree: objects placed by an [`Aabb`].
//!
//! Nodes are visited when their loose bounds intersect the query box, or
//! when the slab test against them hits within the query distance. Entries
//! in a visited node are then tested one by one with the same predicate.

use glam::Vec3;

use crate::config::OctreeConfig;
use crate::geometry::{intersect_ray, Aabb, Ray};
use crate::node::Node;
use crate::octree::Octree;

/// Octree of objects with axis-aligned bounds.
pub type BoundsOctree<T> = Octree<T, Aabb>;

/// Check if `ray` enters `aabb` no farther than `max_distance`.
#[inline]
fn ray_hits_within(ray: &Ray, aabb: &Aabb, max_distance: f32) -> bool {
  intersect_ray(ray, aabb).is_some_and(|distance| distance <= max_distance)
}

impl<T> Node<T, Aabb> {
  pub(crate) fn is_colliding(&self, query: &Aabb) -> bool {
    if !self.bounds.intersects(query) {
      return false;
    }
    self.entries.iter().any(|e| e.shape.intersects(query))
      || self.iter_children().any(|c| c.is_colliding(query))
  }

  pub(crate) fn is_colliding_ray(&self, ray: &Ray, max_distance: f32) -> bool {
    if !ray_hits_within(ray, &self.bounds, max_distance) {
      return false;
    }
    self
      .entries
      .iter()
      .any(|e| ray_hits_within(ray, &e.shape, max_distance))
      || self
        .iter_children()
        .any(|c| c.is_colliding_ray(ray, max_distance))
  }

  pub(crate) fn get_colliding(&self, query: &Aabb, out: &mut Vec<T>)
  where
    T: Clone,
  {
    if !self.bounds.intersects(query) {
      return;
    }
    out.extend(
      self
        .entries
        .iter()
        .filter(|e| e.shape.intersects(query))
        .map(|e| e.object.clone()),
    );
    for child in self.iter_children() {
      child.get_colliding(query, out);
    }
  }

  pub(crate) fn get_colliding_ray(&self, ray: &Ray, max_distance: f32, out: &mut Vec<T>)
  where
    T: Clone,
  {
    if !ray_hits_within(ray, &self.bounds, max_distance) {
      return;
    }
    out.extend(
      self
        .entries
        .iter()
        .filter(|e| ray_hits_within(ray, &e.shape, max_distance))
        .map(|e| e.object.clone()),
    );
    for child in self.iter_children() {
      child.get_colliding_ray(ray, max_distance, out);
    }
  }
}

impl<T> Octree<T, Aabb> {
  /// Create a bounds octree.
  ///
  /// `looseness` in `[1, 2]` scales every node's accepting region; values
  /// above 1 keep objects straddling octant boundaries deeper in the tree.
  pub fn new(initial_size: f32, initial_center: Vec3, min_node_size: f32, looseness: f32) -> Self {
    Self::from_config(
      OctreeConfig::new(initial_size, initial_center, min_node_size).with_looseness(looseness),
    )
  }

  /// Check if any object's bounds intersect `query`.
  pub fn is_colliding(&self, query: &Aabb) -> bool {
    self.root.is_colliding(query)
  }

  /// Check if `ray` hits any object's bounds within `max_distance`.
  pub fn is_colliding_ray(&self, ray: &Ray, max_distance: f32) -> bool {
    self.root.is_colliding_ray(ray, max_distance)
  }

  /// Append every object whose bounds intersect `query` to `out`.
  ///
  /// `out` is not cleared first.
  pub fn get_colliding(&self, out: &mut Vec<T>, query: &Aabb)
  where
    T: Clone,
  {
    self.root.get_colliding(query, out);
  }

  /// Append every object whose bounds `ray` hits within `max_distance`.
  ///
  /// Pass `f32::INFINITY` for an unbounded ray. `out` is not cleared first.
  pub fn get_colliding_ray(&self, out: &mut Vec<T>, ray: &Ray, max_distance: f32)
  where
    T: Clone,
  {
    self.root.get_colliding_ray(ray, max_distance, out);
  }
}

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;
