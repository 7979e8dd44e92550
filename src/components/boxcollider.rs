use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Axis-aligned box collider centered on the entity position (plus `offset`).
///
/// Used both for ground geometry probed by the ground sensor and for trigger
/// volumes (finish line, obstacles) overlapped by actors.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec3,
    pub offset: Vec3,
}

impl BoxCollider {
    /// Create a BoxCollider with given full extents.
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            size: Vec3::new(width, height, depth),
            offset: Vec3::ZERO,
        }
    }

    /// Modify BoxCollider with given offset from the entity position.
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec3) -> (Vec3, Vec3) {
        let center = position + self.offset;
        let half = self.size.abs() * 0.5;
        (center - half, center + half)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec3, other: &Self, other_position: Vec3) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x
            && max_a.x > min_b.x
            && min_a.y < max_b.y
            && max_a.y > min_b.y
            && min_a.z < max_b.z
            && max_a.z > min_b.z
    }

    /// Sphere vs AABB test (closest point distance).
    pub fn intersects_sphere(&self, position: Vec3, center: Vec3, radius: f32) -> bool {
        let (min, max) = self.aabb(position);
        let closest = center.clamp(min, max);
        closest.distance_squared(center) <= radius * radius
    }

    /// Cast a ray straight down from `origin` up to `max_distance`.
    ///
    /// Returns the distance to the top face of the box, or `0.0` when the
    /// origin is already inside it.
    pub fn raycast_down(&self, position: Vec3, origin: Vec3, max_distance: f32) -> Option<f32> {
        let (min, max) = self.aabb(position);
        if origin.x < min.x || origin.x > max.x || origin.z < min.z || origin.z > max.z {
            return None;
        }
        if origin.y < min.y {
            return None;
        }
        let distance = (origin.y - max.y).max(0.0);
        (distance <= max_distance).then_some(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_is_centered_on_position_plus_offset() {
        let collider = BoxCollider::new(2.0, 4.0, 6.0).with_offset(Vec3::new(1.0, 0.0, 0.0));
        let (min, max) = collider.aabb(Vec3::ZERO);
        assert_eq!(min, Vec3::new(0.0, -2.0, -3.0));
        assert_eq!(max, Vec3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn negative_size_is_normalized() {
        let collider = BoxCollider::new(-2.0, 2.0, 2.0);
        let (min, max) = collider.aabb(Vec3::ZERO);
        assert_eq!(min.x, -1.0);
        assert_eq!(max.x, 1.0);
    }

    #[test]
    fn overlaps_requires_all_three_axes() {
        let a = BoxCollider::new(1.0, 1.0, 1.0);
        let b = BoxCollider::new(1.0, 1.0, 1.0);
        assert!(a.overlaps(Vec3::ZERO, &b, Vec3::new(0.5, 0.5, 0.5)));
        assert!(!a.overlaps(Vec3::ZERO, &b, Vec3::new(0.5, 0.5, 2.0)));
    }

    #[test]
    fn sphere_touching_top_face_intersects() {
        let ground = BoxCollider::new(10.0, 1.0, 10.0);
        // top face at y = 0.5
        assert!(ground.intersects_sphere(Vec3::ZERO, Vec3::new(0.0, 0.9, 0.0), 0.5));
        assert!(!ground.intersects_sphere(Vec3::ZERO, Vec3::new(0.0, 1.1, 0.0), 0.5));
    }

    #[test]
    fn raycast_down_hits_top_face_within_range() {
        let ground = BoxCollider::new(10.0, 1.0, 10.0);
        assert_eq!(
            ground.raycast_down(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), 1.0),
            Some(0.5)
        );
        assert_eq!(
            ground.raycast_down(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), 1.0),
            None
        );
        assert_eq!(
            ground.raycast_down(Vec3::ZERO, Vec3::new(6.0, 1.0, 0.0), 1.0),
            None
        );
    }

    #[test]
    fn raycast_down_from_inside_returns_zero() {
        let ground = BoxCollider::new(10.0, 1.0, 10.0);
        assert_eq!(
            ground.raycast_down(Vec3::ZERO, Vec3::new(0.0, 0.2, 0.0), 1.0),
            Some(0.0)
        );
    }
}
