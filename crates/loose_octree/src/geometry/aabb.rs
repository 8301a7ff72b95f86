//! Axis-aligned bounding box stored as center and half-extents.

use glam::Vec3;

use super::ray::{intersect_ray, Ray};

/// Axis-aligned bounding box.
///
/// Stored as center + half-extents; `min`/`max` are derived on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
	/// Center of the box.
	pub center: Vec3,
	/// Half-size on each axis. Components are non-negative.
	pub extents: Vec3,
}

impl Aabb {
	/// Create a box from its center and half-extents.
	///
	/// # Panics
	/// Debug-asserts that all extents are >= 0.
	pub fn new(center: Vec3, extents: Vec3) -> Self {
		debug_assert!(
			extents.x >= 0.0 && extents.y >= 0.0 && extents.z >= 0.0,
			"AABB extents must be >= 0 on all axes"
		);
		Self { center, extents }
	}

	/// Create a box from its center and full size.
	pub fn from_size(center: Vec3, size: Vec3) -> Self {
		Self::new(center, size * 0.5)
	}

	/// Create a cube of the given side length.
	pub fn cube(center: Vec3, side_length: f32) -> Self {
		Self::new(center, Vec3::splat(side_length * 0.5))
	}

	/// Create a box from min and max corners.
	pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self {
			center: (min + max) * 0.5,
			extents: (max - min) * 0.5,
		}
	}

	/// Minimum corner (inclusive).
	#[inline]
	pub fn min(&self) -> Vec3 {
		self.center - self.extents
	}

	/// Maximum corner (inclusive).
	#[inline]
	pub fn max(&self) -> Vec3 {
		self.center + self.extents
	}

	/// Full size of the box (twice the extents).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.extents * 2.0
	}

	/// Copy of this box with every extent grown by `margin`.
	#[inline]
	pub fn expanded(&self, margin: f32) -> Self {
		Self {
			center: self.center,
			extents: self.extents + Vec3::splat(margin),
		}
	}

	/// Check if this box contains a point (boundary inclusive).
	#[inline]
	pub fn contains(&self, point: Vec3) -> bool {
		let min = self.min();
		let max = self.max();
		point.x >= min.x
			&& point.x <= max.x
			&& point.y >= min.y
			&& point.y <= max.y
			&& point.z >= min.z
			&& point.z <= max.z
	}

	/// Check if a point lies inside this box after growing it by `margin` on
	/// every axis.
	///
	/// Used to decide whether a radius query around `point` can reach
	/// anything inside the box.
	#[inline]
	pub fn contains_with_margin(&self, point: Vec3, margin: f32) -> bool {
		self.expanded(margin).contains(point)
	}

	/// Check if `other` lies entirely inside this box.
	#[inline]
	pub fn contains_aabb(&self, other: &Aabb) -> bool {
		self.contains(other.min()) && self.contains(other.max())
	}

	/// Check if this box overlaps another.
	///
	/// Boxes that only touch at a face, edge or corner count as overlapping.
	#[inline]
	pub fn intersects(&self, other: &Aabb) -> bool {
		let (a_min, a_max) = (self.min(), self.max());
		let (b_min, b_max) = (other.min(), other.max());
		a_min.x <= b_max.x
			&& a_max.x >= b_min.x
			&& a_min.y <= b_max.y
			&& a_max.y >= b_min.y
			&& a_min.z <= b_max.z
			&& a_max.z >= b_min.z
	}

	/// Distance along `ray` to the entry point of this box, or `None` on a
	/// miss. See [`intersect_ray`].
	#[inline]
	pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
		intersect_ray(ray, self)
	}

	/// Closest point inside the box to `point`.
	#[inline]
	pub fn closest_point(&self, point: Vec3) -> Vec3 {
		point.clamp(self.min(), self.max())
	}

	/// Squared distance from `point` to the box (0 when inside).
	#[inline]
	pub fn distance_squared_to_point(&self, point: Vec3) -> f32 {
		(self.closest_point(point) - point).length_squared()
	}

	/// Check that center and extents are finite.
	#[inline]
	pub fn is_finite(&self) -> bool {
		self.center.is_finite() && self.extents.is_finite()
	}
}
