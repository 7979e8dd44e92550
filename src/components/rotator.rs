use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Force scale of rotating platforms.
pub const PUSH_FORCE_SCALE: f32 = 250.0;

/// Spin axis of a rotating obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    /// Decode an axis index as authored in level data (0 = X, 1 = Y, 2 = Z).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(RotationAxis::X),
            1 => Some(RotationAxis::Y),
            2 => Some(RotationAxis::Z),
            _ => None,
        }
    }

    /// World direction an actor is pushed along when standing on a platform
    /// spinning around this axis.
    pub fn push_direction(self) -> Vec3 {
        match self {
            RotationAxis::X => Vec3::Y,
            RotationAxis::Y => Vec3::Z,
            RotationAxis::Z => Vec3::X,
        }
    }
}

/// A rotating obstacle. `axis` is `None` when the authored axis is unknown,
/// in which case it pushes nothing.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Rotator {
    pub axis: Option<RotationAxis>,
    /// Spin direction, `1` or `-1`.
    pub direction: i32,
    pub speed: f32,
}

impl Rotator {
    pub fn new(axis: RotationAxis, direction: i32, speed: f32) -> Self {
        Self {
            axis: Some(axis),
            direction,
            speed,
        }
    }

    /// Continuous force applied to a body standing on this rotator for one tick.
    pub fn push_force(&self, dt: f32) -> Vec3 {
        let Some(axis) = self.axis else {
            return Vec3::ZERO;
        };
        axis.push_direction() * self.speed * PUSH_FORCE_SCALE * -(self.direction as f32) * dt
    }
}
