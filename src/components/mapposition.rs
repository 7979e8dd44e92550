use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space position (origin) of an entity.
///
/// The `z` axis is the forward track axis; race progress is read from it.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec3,
}

impl MapPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }

    pub fn from_vec(pos: Vec3) -> Self {
        Self { pos }
    }

    /// Progress along the race track.
    pub fn progress(&self) -> f32 {
        self.pos.z
    }
}
