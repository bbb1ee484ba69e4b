//! Math utilities shared by the selection and move tools.

use glam::Vec3;

/// Far cap for cursor rays, in world units. Grazing-angle intersections far
/// beyond the scene are treated as misses instead of producing huge jumps.
pub const MAX_RAY_DISTANCE: f32 = 10_000.0;

/// Ray-plane intersection.
///
/// Returns the distance `t` along the ray, or `None` when the ray is
/// parallel to the plane or the plane lies behind the ray origin.
pub fn ray_plane_intersection(
    ray_origin: Vec3,
    ray_direction: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let denom = plane_normal.dot(ray_direction);

    if denom.abs() < 1e-6 {
        return None; // Ray is parallel to plane
    }

    let t = (plane_point - ray_origin).dot(plane_normal) / denom;

    if t >= 0.0 {
        Some(t)
    } else {
        None // Intersection behind ray origin
    }
}

/// Ray-plane intersection returning the hit point, with [`MAX_RAY_DISTANCE`]
/// applied.
pub fn ray_plane_point(
    ray_origin: Vec3,
    ray_direction: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<Vec3> {
    let t = ray_plane_intersection(ray_origin, ray_direction, plane_point, plane_normal)?;
    if t > MAX_RAY_DISTANCE {
        return None;
    }
    Some(ray_origin + ray_direction * t)
}

/// Arithmetic mean of a set of points. Zero for empty input.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().copied().sum::<Vec3>() / points.len() as f32
}
