//! Trigger volumes overlapped by actors.
//!
//! A trigger is an entity with a [`BoxCollider`](super::boxcollider::BoxCollider),
//! a [`MapPosition`](super::mapposition::MapPosition) and one of the tags
//! below. [`trigger_detector`](crate::systems::collision::trigger_detector)
//! turns the first tick of an overlap into the matching event.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// End of the race track.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct FinishLine;

/// An obstacle that knocks actors back on contact.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub impulse: Vec3,
    /// Base stun duration in seconds.
    pub stun_duration: f32,
}

impl Obstacle {
    pub fn new(impulse: Vec3, stun_duration: f32) -> Self {
        Self {
            impulse,
            stun_duration,
        }
    }
}
