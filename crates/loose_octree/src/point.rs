//! Point octree: objects placed by a single coordinate.
//!
//! Entries carry no box, so pruning works on node regions grown by the
//! query distance. Accepted entries are then checked with an exact squared
//! distance.

use glam::Vec3;

use crate::config::OctreeConfig;
use crate::geometry::{intersect_ray_with_margin, Ray};
use crate::node::Node;
use crate::octree::Octree;

/// Octree of objects at points.
pub type PointOctree<T> = Octree<T, Vec3>;

impl<T> Node<T, Vec3> {
  pub(crate) fn get_nearby(&self, point: Vec3, max_distance: f32, out: &mut Vec<T>)
  where
    T: Clone,
  {
    if !self.bounds.contains_with_margin(point, max_distance) {
      return;
    }
    let max_sq = max_distance * max_distance;
    out.extend(
      self
        .entries
        .iter()
        .filter(|e| (e.shape - point).length_squared() <= max_sq)
        .map(|e| e.object.clone()),
    );
    for child in self.iter_children() {
      child.get_nearby(point, max_distance, out);
    }
  }

  pub(crate) fn get_nearby_ray(&self, ray: &Ray, max_distance: f32, out: &mut Vec<T>)
  where
    T: Clone,
  {
    // Growing the box is coarser than a true distance check but cheap.
    if intersect_ray_with_margin(ray, &self.bounds, max_distance).is_none() {
      return;
    }
    let max_sq = max_distance * max_distance;
    out.extend(
      self
        .entries
        .iter()
        .filter(|e| ray.distance_squared_to_point(e.shape) <= max_sq)
        .map(|e| e.object.clone()),
    );
    for child in self.iter_children() {
      child.get_nearby_ray(ray, max_distance, out);
    }
  }

  /// Best-first search. `best` holds the closest entry so far and its
  /// squared distance; nothing farther than `max_sq` is accepted.
  fn nearest_into<'a>(&'a self, point: Vec3, max_sq: f32, best: &mut Option<(&'a T, f32)>) {
    let bound = |best: &Option<(&'a T, f32)>| best.map_or(max_sq, |(_, best_sq)| best_sq);
    if self.bounds.distance_squared_to_point(point) > bound(&*best) {
      return;
    }

    for entry in &self.entries {
      let distance_sq = (entry.shape - point).length_squared();
      let accept = match best {
        Some((_, best_sq)) => distance_sq < *best_sq,
        None => distance_sq <= max_sq,
      };
      if accept {
        *best = Some((&entry.object, distance_sq));
      }
    }

    let Some(children) = self.children.as_deref() else {
      return;
    };
    let mut order: [(f32, usize); 8] =
      std::array::from_fn(|i| (children[i].bounds.distance_squared_to_point(point), i));
    order.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

    for (bounds_sq, i) in order {
      if bounds_sq > bound(&*best) {
        break;
      }
      children[i].nearest_into(point, max_sq, best);
    }
  }
}

impl<T> Octree<T, Vec3> {
  /// Create a point octree.
  pub fn new(initial_size: f32, initial_center: Vec3, min_node_size: f32) -> Self {
    Self::from_config(OctreeConfig::new(initial_size, initial_center, min_node_size))
  }

  /// Append every object within `max_distance` of `point` to `out`.
  ///
  /// `out` is not cleared first.
  pub fn get_nearby(&self, point: Vec3, max_distance: f32, out: &mut Vec<T>)
  where
    T: Clone,
  {
    // Negative and NaN radii match nothing.
    if !(max_distance >= 0.0) {
      return;
    }
    self.root.get_nearby(point, max_distance, out);
  }

  /// Append every object within `max_distance` of `ray` to `out`.
  ///
  /// Distance is measured to the half-line, so objects behind the origin
  /// are measured to the origin. `out` is not cleared first.
  pub fn get_nearby_ray(&self, ray: &Ray, max_distance: f32, out: &mut Vec<T>)
  where
    T: Clone,
  {
    if !(max_distance >= 0.0) {
      return;
    }
    self.root.get_nearby_ray(ray, max_distance, out);
  }

  /// Closest object to `point` and its distance, or `None` when empty.
  ///
  /// Ties go to the first candidate found.
  pub fn nearest(&self, point: Vec3) -> Option<(&T, f32)> {
    self.nearest_within(point, f32::INFINITY)
  }

  /// Closest object to `point` no farther than `max_distance`, and its
  /// distance.
  ///
  /// Subtrees beyond `max_distance` are never visited. Negative and NaN
  /// limits match nothing.
  pub fn nearest_within(&self, point: Vec3, max_distance: f32) -> Option<(&T, f32)> {
    if !(max_distance >= 0.0) {
      return None;
    }
    let mut best = None;
    self.root.nearest_into(point, max_distance * max_distance, &mut best);
    best.map(|(object, distance_sq)| (object, distance_sq.sqrt()))
  }
}

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;
