//! Trigger contact events.
//!
//! The [`trigger_detector`](crate::systems::collision::trigger_detector)
//! emits a [`TriggerEnterEvent`] on the first fixed tick an actor overlaps a
//! trigger volume. [`observe_trigger_enter`](crate::systems::collision::observe_trigger_enter)
//! translates it into the race events below, depending on what the trigger is.
use bevy_ecs::prelude::*;

/// An actor started overlapping a trigger volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEnterEvent {
    pub actor: Entity,
    pub trigger: Entity,
}
