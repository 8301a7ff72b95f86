use approx::assert_relative_eq;

use super::*;

fn unit_box_at(center: Vec3) -> Aabb {
  Aabb::cube(center, 2.0)
}

// =========================================================================
// Slab test
// =========================================================================

/// Ray pointing straight at a box reports the near face distance.
#[test]
fn test_hit_in_front() {
  let ray = Ray::new(Vec3::ZERO, Vec3::X);
  let hit = intersect_ray(&ray, &unit_box_at(Vec3::new(5.0, 0.0, 0.0)));
  assert_relative_eq!(hit.expect("ray should hit"), 4.0);
}

/// Box entirely behind the origin is a miss (t_max < 0).
#[test]
fn test_miss_behind() {
  let ray = Ray::new(Vec3::ZERO, Vec3::X);
  assert!(intersect_ray(&ray, &unit_box_at(Vec3::new(-5.0, 0.0, 0.0))).is_none());
}

/// Ray passing beside the box is a miss (t_min > t_max).
#[test]
fn test_miss_beside() {
  let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0).normalize());
  assert!(intersect_ray(&ray, &unit_box_at(Vec3::new(5.0, 0.0, 0.0))).is_none());
}

/// Origin inside the box hits with a negative entry distance.
#[test]
fn test_origin_inside() {
  let ray = Ray::new(Vec3::ZERO, Vec3::Y);
  let hit = intersect_ray(&ray, &unit_box_at(Vec3::ZERO)).expect("origin is inside");
  assert_relative_eq!(hit, -1.0);
}

/// Axis-parallel ray: zero direction components produce infinities that
/// must not constrain the interval when the origin is between the planes.
#[test]
fn test_axis_parallel_inside_slab() {
  let ray = Ray::new(Vec3::new(-10.0, 0.5, -0.5), Vec3::X);
  let hit = intersect_ray(&ray, &unit_box_at(Vec3::ZERO));
  assert_relative_eq!(hit.expect("parallel ray inside slabs"), 9.0);
}

/// Axis-parallel ray outside the slab on a parallel axis never hits.
#[test]
fn test_axis_parallel_outside_slab() {
  let ray = Ray::new(Vec3::new(-10.0, 1.5, 0.0), Vec3::X);
  assert!(intersect_ray(&ray, &unit_box_at(Vec3::ZERO)).is_none());

  let ray = Ray::new(Vec3::new(-10.0, -1.5, 0.0), Vec3::X);
  assert!(intersect_ray(&ray, &unit_box_at(Vec3::ZERO)).is_none());
}

/// Ray lying exactly in a face plane counts as a hit (inclusive bounds).
#[test]
fn test_axis_parallel_on_face_plane() {
  let ray = Ray::new(Vec3::new(-10.0, 1.0, 0.0), Vec3::X);
  let hit = intersect_ray(&ray, &unit_box_at(Vec3::ZERO));
  assert_relative_eq!(hit.expect("ray grazes the +Y face"), 9.0);
}

/// Negative zero direction still behaves as parallel.
#[test]
fn test_negative_zero_direction() {
  let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(-0.0, 0.0, -1.0));
  let hit = intersect_ray(&ray, &unit_box_at(Vec3::ZERO));
  assert_relative_eq!(hit.expect("ray travels down -Z"), 9.0);
}

/// A zero direction only hits when the origin is inside.
#[test]
fn test_zero_direction() {
  let outside = Ray::new(Vec3::new(0.0, -5.0, 0.0), Vec3::ZERO);
  assert!(intersect_ray(&outside, &unit_box_at(Vec3::ZERO)).is_none());

  let inside = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO);
  assert!(intersect_ray(&inside, &unit_box_at(Vec3::ZERO)).is_some());
}

/// Distances scale with the direction length.
#[test]
fn test_distance_in_direction_units() {
  let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
  let hit = intersect_ray(&ray, &unit_box_at(Vec3::new(5.0, 0.0, 0.0)));
  assert_relative_eq!(hit.expect("ray should hit"), 2.0);
}

/// Margin variant catches rays passing close to the box.
#[test]
fn test_margin_variant() {
  let ray = Ray::new(Vec3::new(-10.0, 1.5, 0.0), Vec3::X);
  let aabb = unit_box_at(Vec3::ZERO);
  assert!(intersect_ray(&ray, &aabb).is_none());
  assert!(intersect_ray_with_margin(&ray, &aabb, 0.25).is_none());
  let hit = intersect_ray_with_margin(&ray, &aabb, 0.5);
  assert_relative_eq!(hit.expect("ray within margin"), 8.5);
}

// =========================================================================
// Point distance
// =========================================================================

#[test]
fn test_distance_to_point_beside_ray() {
  let ray = Ray::new(Vec3::ZERO, Vec3::X);
  assert_relative_eq!(ray.distance_squared_to_point(Vec3::new(5.0, 3.0, 4.0)), 25.0);
}

/// Points behind the origin measure to the origin, not to the infinite line.
#[test]
fn test_distance_to_point_behind_origin() {
  let ray = Ray::new(Vec3::ZERO, Vec3::X);
  assert_relative_eq!(ray.distance_squared_to_point(Vec3::new(-3.0, 4.0, 0.0)), 25.0);
}

/// Unnormalized direction gives the same distance.
#[test]
fn test_distance_independent_of_direction_length() {
  let a = Ray::new(Vec3::ONE, Vec3::new(0.0, 0.0, 10.0));
  let b = a.normalized();
  let point = Vec3::new(3.0, -2.0, 7.0);
  assert_relative_eq!(
    a.distance_squared_to_point(point),
    b.distance_squared_to_point(point),
    epsilon = 1e-4
  );
}

#[test]
fn test_zero_direction_measures_to_origin() {
  let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
  assert_relative_eq!(ray.distance_squared_to_point(Vec3::new(1.0, 1.0, 3.0)), 4.0);
}

#[test]
fn test_point_at() {
  let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 2.0, 0.0));
  assert_eq!(ray.point_at(1.5), Vec3::new(1.0, 5.0, 3.0));
}

#[test]
fn test_normalized() {
  let ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 3.0, 4.0)).normalized();
  assert_eq!(ray.origin, Vec3::ONE);
  assert_relative_eq!(ray.direction.length(), 1.0);
  assert_relative_eq!(ray.direction.z, 0.8);

  let zero = Ray::new(Vec3::ONE, Vec3::ZERO).normalized();
  assert_eq!(zero.direction, Vec3::ZERO);
}

/// Normalizing makes slab distances world-space lengths.
#[test]
fn test_normalized_distance_is_world_space() {
  let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)).normalized();
  let hit = intersect_ray(&ray, &unit_box_at(Vec3::new(5.0, 0.0, 0.0)));
  assert_relative_eq!(hit.expect("ray should hit"), 4.0);
}

#[test]
fn test_is_finite() {
  assert!(Ray::new(Vec3::ZERO, Vec3::X).is_finite());
  assert!(!Ray::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X).is_finite());
  assert!(!Ray::new(Vec3::ZERO, Vec3::new(0.0, f32::INFINITY, 0.0)).is_finite());
}
