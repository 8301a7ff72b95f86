//! loose_octree - dynamic loose octrees for 3-D spatial queries
//!
//! Two variants share one node and root implementation:
//!
//! - [`BoundsOctree`]: objects carry an axis-aligned box; box and ray
//!   collision queries
//! - [`PointOctree`]: objects carry a coordinate; radius, ray-distance and
//!   nearest-neighbour queries
//!
//! Neither needs a fixed world bound. Inserting outside the current root
//! grows the tree by re-rooting outward, and removals let it shrink back
//! toward its initial size.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use loose_octree::{Aabb, BoundsOctree, Ray};
//!
//! let mut tree = BoundsOctree::new(16.0, Vec3::ZERO, 1.0, 1.25);
//! tree.add("crate", Aabb::cube(Vec3::new(4.0, 0.0, 0.0), 1.0)).unwrap();
//! tree.add("barrel", Aabb::cube(Vec3::new(0.0, 4.0, 0.0), 1.0)).unwrap();
//!
//! let mut hits = Vec::new();
//! tree.get_colliding_ray(&mut hits, &Ray::new(Vec3::ZERO, Vec3::X), f32::INFINITY);
//! assert_eq!(hits, vec!["crate"]);
//! ```
//!
//! # Diagnostics
//!
//! Configuration corrections and failed insertions are reported through a
//! [`DiagnosticSink`]. With the `tracing` feature the default sink forwards
//! them to `tracing` (installing a subscriber is left to the application);
//! without it they are dropped unless a sink is passed to
//! [`Octree::from_config_with_sink`].

pub mod bounds;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod node;
pub mod octant;
pub mod octree;
pub mod point;
pub mod shape;

// Re-exports
pub use bounds::BoundsOctree;
pub use config::{OctreeConfig, DEFAULT_MAX_GROWTH_ATTEMPTS, DEFAULT_NODE_CAPACITY};
#[cfg(feature = "tracing")]
pub use diagnostics::TracingSink;
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, Severity};
pub use error::OctreeError;
pub use geometry::{intersect_ray, intersect_ray_with_margin, Aabb, Ray};
pub use node::{Entry, Node};
pub use octant::Octant;
pub use octree::Octree;
pub use point::PointOctree;
pub use shape::Shape;

#[cfg(test)]
pub(crate) mod test_utils;
