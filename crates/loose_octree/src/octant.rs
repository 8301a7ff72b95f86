//! Octant indexing shared by both octree variants.
//!
//! Octant: 0-7 where bits represent +X, +Y, +Z offsets:
//! - bit 0: X offset (0 = negative side, 1 = positive side)
//! - bit 1: Y offset
//! - bit 2: Z offset
//!
//! A position exactly on a splitting plane belongs to the negative side.

use glam::Vec3;

/// One of the eight children of a node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Octant(u8);

impl Octant {
  /// All octants in index order.
  pub const ALL: [Octant; 8] = [
    Octant(0),
    Octant(1),
    Octant(2),
    Octant(3),
    Octant(4),
    Octant(5),
    Octant(6),
    Octant(7),
  ];

  /// Octant from an index in `0..8`.
  ///
  /// # Panics
  /// Debug-asserts the index is below 8.
  #[inline]
  pub fn from_index(index: usize) -> Self {
    debug_assert!(index < 8, "octant index must be < 8");
    Self(index as u8)
  }

  /// Octant of `center` that `position` falls into.
  #[inline]
  pub fn containing(center: Vec3, position: Vec3) -> Self {
    let x = (position.x > center.x) as u8;
    let y = (position.y > center.y) as u8;
    let z = (position.z > center.z) as u8;
    Self(x | (y << 1) | (z << 2))
  }

  /// Index in `0..8`, usable with a child array.
  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }

  /// Per-axis sign (-1 or +1) pointing from the parent center toward this
  /// octant.
  #[inline]
  pub fn sign(self) -> Vec3 {
    let axis = |bit: u8| if self.0 & bit != 0 { 1.0 } else { -1.0 };
    Vec3::new(axis(1), axis(2), axis(4))
  }

  /// Center of this octant's child for a parent at `center` with side
  /// length `base_length`.
  #[inline]
  pub fn child_center(self, center: Vec3, base_length: f32) -> Vec3 {
    center + self.sign() * (base_length * 0.25)
  }
}

/// Per-axis sign used when growing toward `direction`.
///
/// Zero counts as positive, so growth always picks a definite octant.
#[inline]
pub fn growth_sign(direction: Vec3) -> Vec3 {
  let axis = |v: f32| if v >= 0.0 { 1.0 } else { -1.0 };
  Vec3::new(axis(direction.x), axis(direction.y), axis(direction.z))
}
