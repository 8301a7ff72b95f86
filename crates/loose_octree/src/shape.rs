//! Payload geometry carried by octree entries.

use std::fmt::Debug;

use glam::Vec3;

use crate::geometry::Aabb;

/// Geometry an entry is placed by.
///
/// Implemented for [`Aabb`] (bounds octree) and [`Vec3`] (point octree).
pub trait Shape: Copy + Debug {
  /// Position used to choose a child octant.
  fn center(&self) -> Vec3;

  /// Check if the whole shape lies inside `region`.
  fn fits_within(&self, region: &Aabb) -> bool;

  /// Check that every coordinate is finite.
  fn is_finite(&self) -> bool;
}

impl Shape for Aabb {
  #[inline]
  fn center(&self) -> Vec3 {
    self.center
  }

  #[inline]
  fn fits_within(&self, region: &Aabb) -> bool {
    region.contains_aabb(self)
  }

  #[inline]
  fn is_finite(&self) -> bool {
    Aabb::is_finite(self)
  }
}

impl Shape for Vec3 {
  #[inline]
  fn center(&self) -> Vec3 {
    *self
  }

  #[inline]
  fn fits_within(&self, region: &Aabb) -> bool {
    region.contains(*self)
  }

  #[inline]
  fn is_finite(&self) -> bool {
    Vec3::is_finite(*self)
  }
}
