//! Geometry primitives shared by both octree variants.
//!
//! - [`Aabb`]: axis-aligned box stored as center + half-extents
//! - [`Ray`]: origin + direction, with the slab intersection test

pub mod aabb;
pub mod ray;

pub use aabb::Aabb;
pub use ray::{intersect_ray, intersect_ray_with_margin, Ray};
