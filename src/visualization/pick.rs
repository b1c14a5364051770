//! Pointer picking against node bounding spheres.
//!
//! The pure intersection math lives here; the click system builds the world
//! ray from the cursor via the camera and maps the winning index back to a
//! node id.

use bevy::math::Vec3;

/// A pick ray in world space. `direction` must be normalized.
#[derive(Debug, Clone, Copy)]
pub struct PickRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// A candidate bounding sphere.
#[derive(Debug, Clone, Copy)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Index of the nearest sphere hit by `ray`, or `None` on a miss.
///
/// A sphere counts as hit when the ray passes within its radius in front of
/// the origin. Equal-distance ties resolve to the earliest candidate in
/// iteration order; that ordering is not semantic.
pub fn pick(ray: PickRay, spheres: &[BoundingSphere]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, sphere) in spheres.iter().enumerate() {
        let to_center = sphere.center - ray.origin;
        let t = to_center.dot(ray.direction);
        if t <= 0.0 {
            continue;
        }
        let closest = ray.origin + ray.direction * t;
        if (closest - sphere.center).length() > sphere.radius {
            continue;
        }
        if best.map_or(true, |(_, best_t)| t < best_t) {
            best = Some((idx, t));
        }
    }
    best.map(|(idx, _)| idx)
}
