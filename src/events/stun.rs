//! Impact and damage events.
use bevy_ecs::prelude::*;
use glam::Vec3;

/// An actor was hit.
///
/// The actor becomes `Suspended`, receives `impulse` and is checked for
/// recovery `duration + recovery_padding` seconds later. A second impact
/// before that check supersedes the first one.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ImpactEvent {
    pub entity: Entity,
    pub impulse: Vec3,
    /// Base stun duration in seconds. Non-positive values mean "check on the
    /// next poll".
    pub duration: f32,
}

/// Remove health from an actor.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEvent {
    pub entity: Entity,
    pub amount: i32,
}

/// An actor's health reached zero.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefeatedEvent {
    pub entity: Entity,
}
