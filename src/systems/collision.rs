//! Trigger detection.
//!
//! Actors carry a [`TriggerContacts`] set with the triggers they overlapped
//! last tick, so only the entering tick of an overlap produces a
//! [`TriggerEnterEvent`]. The observer then maps the trigger kind onto the
//! race events.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashSet;

use crate::components::actor::TriggerContacts;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::trigger::{FinishLine, Obstacle};
use crate::events::collision::TriggerEnterEvent;
use crate::events::race::FinishLineEvent;
use crate::events::stun::ImpactEvent;

type TriggerFilter = Or<(With<FinishLine>, With<Obstacle>)>;

pub fn trigger_detector(
    mut actors: Query<(Entity, &MapPosition, &BoxCollider, &mut TriggerContacts)>,
    triggers: Query<(Entity, &MapPosition, &BoxCollider), TriggerFilter>,
    mut commands: Commands,
) {
    for (actor, position, collider, mut contacts) in actors.iter_mut() {
        let touching: FxHashSet<Entity> = triggers
            .iter()
            .filter(|(_, trigger_pos, trigger_collider)| {
                collider.overlaps(position.pos, trigger_collider, trigger_pos.pos)
            })
            .map(|(trigger, _, _)| trigger)
            .collect();

        for trigger in touching.iter().copied() {
            if !contacts.touching.contains(&trigger) {
                commands.trigger(TriggerEnterEvent { actor, trigger });
            }
        }
        if contacts.touching != touching {
            contacts.touching = touching;
        }
    }
}

/// Route a trigger contact to the matching race event.
pub fn observe_trigger_enter(
    trigger: On<TriggerEnterEvent>,
    finish_lines: Query<(), With<FinishLine>>,
    obstacles: Query<&Obstacle>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if finish_lines.contains(event.trigger) {
        debug!("{:?} reached the finish line", event.actor);
        commands.trigger(FinishLineEvent { entity: event.actor });
    } else if let Ok(obstacle) = obstacles.get(event.trigger) {
        debug!("{:?} hit obstacle {:?}", event.actor, event.trigger);
        commands.trigger(ImpactEvent {
            entity: event.actor,
            impulse: obstacle.impulse,
            duration: obstacle.stun_duration,
        });
    }
}
