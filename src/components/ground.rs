//! Ground contact components.
//!
//! Ground geometry is any entity with a [`GroundSurface`] tag plus a
//! [`BoxCollider`](super::boxcollider::BoxCollider) and a
//! [`MapPosition`](super::mapposition::MapPosition). Surfaces belonging to a
//! rotating obstacle additionally carry [`RotatingPlatform`], pointing at the
//! entity that owns the [`Rotator`](super::rotator::Rotator).
//!
//! Actors carry a [`GroundProbe`] (sensor shape) and a [`GroundContact`]
//! refreshed every fixed tick by
//! [`ground_sensor_system`](crate::systems::ground::ground_sensor_system).

use bevy_ecs::prelude::{Component, Entity};

use crate::components::rotator::Rotator;

/// Tag for ground geometry.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct GroundSurface;

/// Tag for a ground surface that belongs to a rotating obstacle.
#[derive(Component, Clone, Copy, Debug)]
pub struct RotatingPlatform {
    /// Entity holding the [`Rotator`].
    pub rotator: Entity,
}

/// Sensor shape of an actor.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct GroundProbe {
    /// Radius of the support sphere around the actor origin.
    pub check_radius: f32,
    /// Length of the downward push-zone probe.
    pub ray_length: f32,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            check_radius: 0.5,
            ray_length: 1.0,
        }
    }
}

/// Rotating obstacle the actor is currently standing on.
///
/// Only exists while the downward probe hits the platform; rebuilt every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PushBinding {
    pub platform: Entity,
    pub rotator: Rotator,
}

/// Result of the last ground query for an actor.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct GroundContact {
    pub grounded: bool,
    pub push: Option<PushBinding>,
}
