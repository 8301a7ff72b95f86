//! Ray type and the slab ray/box intersection test.

use glam::Vec3;

use super::Aabb;

/// Half-line starting at `origin` and extending along `direction`.
///
/// The direction is not required to be unit length. Distances returned by
/// [`intersect_ray`] are in units of `direction`, so callers comparing them
/// against a world-space limit should pass a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
  /// Start point.
  pub origin: Vec3,
  /// Direction of travel.
  pub direction: Vec3,
}

impl Ray {
  /// Create a ray from origin and direction.
  pub fn new(origin: Vec3, direction: Vec3) -> Self {
    Self { origin, direction }
  }

  /// Same ray with a unit-length direction (zero stays zero).
  pub fn normalized(&self) -> Self {
    Self {
      origin: self.origin,
      direction: self.direction.normalize_or_zero(),
    }
  }

  /// Point at parameter `t` along the ray.
  #[inline]
  pub fn point_at(&self, t: f32) -> Vec3 {
    self.origin + self.direction * t
  }

  /// Squared distance from `point` to the closest point on the ray.
  ///
  /// Points behind the origin measure to the origin. A zero direction
  /// degenerates to the distance from the origin.
  #[inline]
  pub fn distance_squared_to_point(&self, point: Vec3) -> f32 {
    let to_point = point - self.origin;
    let len_sq = self.direction.length_squared();
    if len_sq == 0.0 {
      return to_point.length_squared();
    }
    let t = (to_point.dot(self.direction) / len_sq).max(0.0);
    (point - self.point_at(t)).length_squared()
  }

  /// Check that origin and direction are finite.
  #[inline]
  pub fn is_finite(&self) -> bool {
    self.origin.is_finite() && self.direction.is_finite()
  }
}

/// Slab test: distance along `ray` at which it enters `aabb`.
///
/// Returns `None` when the box is entirely behind the origin or the ray
/// misses it. The returned distance is negative when the origin is inside
/// the box.
///
/// Division by a zero direction component is intentional: the resulting
/// infinities make that axis either never constrain the interval (origin
/// between the planes) or reject it outright (origin outside). A ray lying
/// exactly in one of the planes yields `0 * inf = NaN`; that axis is treated
/// as non-constraining, consistent with [`Aabb::contains`] being inclusive.
#[inline]
pub fn intersect_ray(ray: &Ray, aabb: &Aabb) -> Option<f32> {
  let dir_frac = ray.direction.recip();
  let t1 = (aabb.min() - ray.origin) * dir_frac;
  let t2 = (aabb.max() - ray.origin) * dir_frac;

  let mut t_min = f32::NEG_INFINITY;
  let mut t_max = f32::INFINITY;
  for axis in 0..3 {
    let (a, b) = (t1[axis], t2[axis]);
    if a.is_nan() || b.is_nan() {
      continue;
    }
    t_min = t_min.max(a.min(b));
    t_max = t_max.min(a.max(b));
  }

  // Box is behind the ray
  if t_max < 0.0 {
    return None;
  }
  // Slabs do not overlap. t_min is only +inf for a zero direction with the
  // origin outside the box.
  if t_min > t_max || t_min == f32::INFINITY {
    return None;
  }
  Some(t_min)
}

/// [`intersect_ray`] against `aabb` grown by `margin` on every axis.
///
/// Answers "does the ray pass within roughly `margin` of the box" without
/// testing individual contents.
#[inline]
pub fn intersect_ray_with_margin(ray: &Ray, aabb: &Aabb, margin: f32) -> Option<f32> {
  intersect_ray(ray, &aabb.expanded(margin))
}

#[cfg(test)]
#[path = "ray_test.rs"]
mod ray_test;
