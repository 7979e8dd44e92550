//! Stun and recovery.
//!
//! An [`ImpactEvent`] suspends the actor, applies the impulse and schedules a
//! recovery check keyed to a fresh stun generation. When the check fires it
//! only acts if that generation is still current, so a later impact (or a
//! restart) silently supersedes an earlier pending check.
//!
//! At the check:
//! - grounded player: back to `Moving` (or `Idle` if it may no longer play)
//! - grounded AI: `Idle`, kinematic again, agent re-enabled
//! - airborne: stays `Suspended` and the check is re-armed after
//!   `recheck_interval`

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info};

use crate::components::actor::{ActorClass, ControlState, Controllable};
use crate::components::agent::NavAgent;
use crate::components::animation::{AnimationState, Animator};
use crate::components::ground::GroundContact;
use crate::components::locomotion::Locomotion;
use crate::components::rigidbody::RigidBody;
use crate::components::stun::{Health, Stun};
use crate::events::animation::AnimationCmd;
use crate::events::stun::{DamageEvent, DefeatedEvent, ImpactEvent};
use crate::events::timer::RecoveryCheckEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scheduler::{Scheduler, TaskKind};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::set_animation_state;

pub fn observe_impact(
    trigger: On<ImpactEvent>,
    mut actors: Query<(
        &ActorClass,
        &mut ControlState,
        &mut Stun,
        &mut RigidBody,
        Option<&mut Locomotion>,
        Option<&mut NavAgent>,
        Option<&mut Animator>,
    )>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut scheduler: ResMut<Scheduler>,
    mut anim_cmds: MessageWriter<AnimationCmd>,
) {
    let event = *trigger.event();
    let Ok((class, mut state, mut stun, mut body, locomotion, agent, animator)) =
        actors.get_mut(event.entity)
    else {
        debug!("impact on {:?} ignored: not an actor", event.entity);
        return;
    };

    match class {
        ActorClass::Player => {
            body.velocity = event.impulse;
            if let Some(mut locomotion) = locomotion {
                locomotion.residual_push = event.impulse;
            }
        }
        ActorClass::Ai => {
            if let Some(mut agent) = agent {
                agent.disable();
            }
            body.kinematic = false;
            body.apply_impulse(event.impulse * config.ai_impulse_scale);
        }
    }
    body.unfreeze();

    *state = ControlState::Suspended;
    let generation = stun.bump();

    let delay = if event.duration > 0.0 {
        event.duration + config.recovery_padding
    } else {
        0.0
    };
    let fire_at = scheduler.schedule(
        time.elapsed,
        delay,
        TaskKind::StunRecovery {
            entity: event.entity,
            generation,
        },
    );
    debug!(
        "{:?} stunned (generation {}), recovery check at {:.3}",
        event.entity, generation, fire_at
    );

    if let Some(mut animator) = animator
        && animator.state == AnimationState::Moving
    {
        set_animation_state(event.entity, &mut animator, AnimationState::Idle, &mut anim_cmds);
    }
}

pub fn observe_recovery_check(
    trigger: On<RecoveryCheckEvent>,
    mut actors: Query<(
        &ActorClass,
        &mut ControlState,
        &Stun,
        &GroundContact,
        &mut RigidBody,
        Option<&Controllable>,
        Option<&mut NavAgent>,
    )>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut scheduler: ResMut<Scheduler>,
) {
    let event = *trigger.event();
    let Ok((class, mut state, stun, contact, mut body, controllable, agent)) =
        actors.get_mut(event.entity)
    else {
        debug!("recovery check for missing actor {:?}", event.entity);
        return;
    };
    if !stun.is_current(event.generation) {
        debug!(
            "stale recovery check for {:?} (generation {}, current {})",
            event.entity, event.generation, stun.generation
        );
        return;
    }
    if *state != ControlState::Suspended {
        debug!("recovery check for {:?} but it is {:?}", event.entity, *state);
        return;
    }

    if !contact.grounded {
        body.kinematic = false;
        if let Some(mut agent) = agent {
            agent.disable();
        }
        scheduler.schedule(
            time.elapsed,
            config.recheck_interval,
            TaskKind::StunRecovery {
                entity: event.entity,
                generation: event.generation,
            },
        );
        debug!("{:?} still airborne, re-checking recovery", event.entity);
        return;
    }

    match class {
        ActorClass::Player => {
            let active = controllable.is_none_or(|c| c.active);
            *state = if active {
                ControlState::Moving
            } else {
                ControlState::Idle
            };
        }
        ActorClass::Ai => {
            *state = ControlState::Idle;
            body.kinematic = true;
            body.velocity = Vec3::ZERO;
            if let Some(mut agent) = agent {
                agent.enable();
            }
        }
    }
    info!("{:?} recovered -> {:?}", event.entity, *state);
}

/// Apply damage. A depleted player regains movement, which also
/// invalidates any pending recovery check.
pub fn observe_damage(
    trigger: On<DamageEvent>,
    mut actors: Query<(
        &mut Health,
        Option<&ActorClass>,
        Option<&mut ControlState>,
        Option<&mut Stun>,
        Option<&mut RigidBody>,
        Option<&Controllable>,
    )>,
    mut commands: Commands,
) {
    let event = *trigger.event();
    let Ok((mut health, class, state, stun, body, controllable)) = actors.get_mut(event.entity)
    else {
        return;
    };
    health.current -= event.amount;
    if !health.is_depleted() {
        return;
    }

    let playable = class == Some(&ActorClass::Player) && controllable.is_none_or(|c| c.active);
    if playable && let Some(mut state) = state {
        if let Some(mut stun) = stun {
            stun.bump();
        }
        if let Some(mut body) = body {
            body.unfreeze();
        }
        *state = ControlState::Moving;
    }
    info!("{:?} defeated", event.entity);
    commands.trigger(DefeatedEvent {
        entity: event.entity,
    });
}
