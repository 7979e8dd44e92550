//! AI racers.
//!
//! AI racers steer through a [`NavAgent`], a straight-line stand-in for a
//! navigation mesh agent. They only run while the race is started and their
//! agent is enabled; impacts and the finish line disable the agent.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info};

use crate::components::actor::{ActorClass, ControlState, SpawnPoint};
use crate::components::agent::{AiRunner, NavAgent};
use crate::components::animation::{AnimationState, Animator};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::stun::Stun;
use crate::events::animation::AnimationCmd;
use crate::events::race::RestartAiEvent;
use crate::events::timer::AiResumeEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::LevelState;
use crate::resources::scheduler::{Scheduler, TaskKind};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::set_animation_state;

/// Point running AI racers at their target. The first time a racer runs it
/// switches to the `Moving` animation.
pub fn ai_controller_system(
    mut query: Query<(Entity, &mut AiRunner, &mut NavAgent, Option<&mut Animator>)>,
    level: Res<LevelState>,
    mut anim_cmds: MessageWriter<AnimationCmd>,
) {
    if !level.race_started {
        return;
    }
    for (entity, mut runner, mut agent, animator) in query.iter_mut() {
        if !agent.enabled {
            continue;
        }
        if agent.destination != Some(runner.target) {
            agent.set_destination(runner.target);
        }
        if !runner.started {
            runner.started = true;
            if let Some(mut animator) = animator {
                set_animation_state(entity, &mut animator, AnimationState::Moving, &mut anim_cmds);
            }
        }
    }
}

/// Drive kinematic AI bodies from their agent. Dynamic (knocked back) bodies
/// are left to the integrator.
pub fn agent_follow_system(
    mut query: Query<(&MapPosition, &NavAgent, &mut RigidBody)>,
    level: Res<LevelState>,
) {
    for (position, agent, mut body) in query.iter_mut() {
        if !body.kinematic {
            continue;
        }
        let velocity = if level.race_started {
            agent.steering_velocity(position.pos)
        } else {
            Vec3::ZERO
        };
        if body.velocity != velocity {
            body.velocity = velocity;
        }
    }
}

pub fn observe_restart_ai(
    trigger: On<RestartAiEvent>,
    mut query: Query<(
        &ActorClass,
        &mut ControlState,
        &mut Stun,
        &mut NavAgent,
        &mut RigidBody,
        &mut MapPosition,
        &SpawnPoint,
        Option<&mut Animator>,
    )>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut scheduler: ResMut<Scheduler>,
    mut anim_cmds: MessageWriter<AnimationCmd>,
) {
    let entity = trigger.event().entity;
    let Ok((class, mut state, mut stun, mut agent, mut body, mut position, spawn, animator)) =
        query.get_mut(entity)
    else {
        return;
    };
    if *class != ActorClass::Ai {
        return;
    }
    if let Some(mut animator) = animator {
        set_animation_state(entity, &mut animator, AnimationState::Idle, &mut anim_cmds);
    }
    *state = ControlState::Idle;
    agent.disable();
    body.clear();
    body.kinematic = true;
    position.pos = spawn.pos;
    let generation = stun.bump();
    scheduler.schedule(
        time.elapsed,
        config.ai_restart_time,
        TaskKind::AiResume { entity, generation },
    );
    info!("AI {:?} restarted", entity);
}

pub fn observe_ai_resume(
    trigger: On<AiResumeEvent>,
    mut query: Query<(&Stun, &mut NavAgent, Option<&mut Animator>)>,
    mut anim_cmds: MessageWriter<AnimationCmd>,
) {
    let event = *trigger.event();
    let Ok((stun, mut agent, animator)) = query.get_mut(event.entity) else {
        return;
    };
    if !stun.is_current(event.generation) {
        debug!("stale AI resume for {:?}", event.entity);
        return;
    }
    agent.enable();
    if let Some(mut animator) = animator {
        set_animation_state(event.entity, &mut animator, AnimationState::Moving, &mut anim_cmds);
    }
}
