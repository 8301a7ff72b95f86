//! Test utilities: seeded random workloads, brute-force references and a
//! recording diagnostic sink.

use std::sync::{Arc, Mutex};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::geometry::{intersect_ray, Aabb, Ray};
use crate::node::Node;
use crate::octant::Octant;
use crate::shape::Shape;

// =============================================================================
// Random workloads
// =============================================================================

/// Deterministic RNG for reproducible workloads.
pub fn rng(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}

/// Uniform point in the cube `[-half_extent, half_extent]^3`.
pub fn random_point(rng: &mut StdRng, half_extent: f32) -> Vec3 {
  Vec3::new(
    rng.random_range(-half_extent..=half_extent),
    rng.random_range(-half_extent..=half_extent),
    rng.random_range(-half_extent..=half_extent),
  )
}

/// Uniformly distributed unit vector.
pub fn random_direction(rng: &mut StdRng) -> Vec3 {
  loop {
    let v = random_point(rng, 1.0);
    let len_sq = v.length_squared();
    if len_sq > 1e-4 && len_sq <= 1.0 {
      return v / len_sq.sqrt();
    }
  }
}

/// Box centred in `[-half_extent, half_extent]^3` with each side up to
/// `max_size`.
pub fn random_box(rng: &mut StdRng, half_extent: f32, max_size: f32) -> Aabb {
  let center = random_point(rng, half_extent);
  let size = Vec3::new(
    rng.random_range(0.0..max_size),
    rng.random_range(0.0..max_size),
    rng.random_range(0.0..max_size),
  );
  Aabb::from_size(center, size)
}

// =============================================================================
// Brute-force references
// =============================================================================

/// Ids of every box hit by `ray` within `max_distance`, scanning all boxes.
pub fn brute_force_ray(boxes: &[(u32, Aabb)], ray: &Ray, max_distance: f32) -> Vec<u32> {
  boxes
    .iter()
    .filter(|(_, aabb)| intersect_ray(ray, aabb).is_some_and(|d| d <= max_distance))
    .map(|(id, _)| *id)
    .collect()
}

/// Ids of every point within `max_distance` of `center`.
pub fn brute_force_radius(points: &[(u32, Vec3)], center: Vec3, max_distance: f32) -> Vec<u32> {
  points
    .iter()
    .filter(|(_, p)| (*p - center).length_squared() <= max_distance * max_distance)
    .map(|(id, _)| *id)
    .collect()
}

/// Sort ids so traversal order does not matter in comparisons.
pub fn sorted(mut ids: Vec<u32>) -> Vec<u32> {
  ids.sort_unstable();
  ids
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Sink that records every diagnostic. Clones share the same log.
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Diagnostic>>>);

impl Recorder {
  /// Drain recorded diagnostics.
  pub fn take(&self) -> Vec<Diagnostic> {
    std::mem::take(&mut *self.0.lock().unwrap())
  }
}

impl DiagnosticSink for Recorder {
  fn report(&self, diagnostic: &Diagnostic) {
    self.0.lock().unwrap().push(diagnostic.clone());
  }
}

// =============================================================================
// Structural invariants
// =============================================================================

/// Assert every entry fits its node and every split halves the side length.
pub fn assert_node_invariants<T, S: Shape>(node: &Node<T, S>) {
  for entry in node.entries() {
    assert!(
      entry.shape.fits_within(&node.bounds()),
      "entry {:?} outside node bounds {:?}",
      entry.shape,
      node.bounds()
    );
  }
  if let Some(children) = node.children() {
    for (i, child) in children.iter().enumerate() {
      assert_eq!(
        child.base_length(),
        node.base_length() * 0.5,
        "child {} side length must be half its parent",
        i
      );
      assert_eq!(
        Octant::containing(node.center(), child.center()).index(),
        i,
        "child {} sits in the wrong octant",
        i
      );
      assert_node_invariants(child);
    }
  }
}
