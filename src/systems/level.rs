//! Level flow.
//!
//! Finish-line handling, level advance and the controlled actor's restart.
//! [`LevelState`] is only written from here and from the race start observer.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info, warn};

use crate::components::actor::{ActorClass, ControlState, Controllable, SpawnPoint};
use crate::components::agent::NavAgent;
use crate::components::animation::{AnimationState, Animator};
use crate::components::camera::CameraFollow;
use crate::components::group::{Active, LevelAssets};
use crate::components::locomotion::Locomotion;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::stun::Stun;
use crate::components::tween::TweenPosition;
use crate::events::animation::AnimationCmd;
use crate::events::race::{
    ConsumePaintEvent, FinishLevelEvent, FinishLineEvent, PlayerStopEvent, RestartPlayerEvent,
    ShowWinEvent,
};
use crate::resources::finish::{FinishStage, FinishTimeline};
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::{LevelPhase, LevelState};
use crate::resources::levelcatalog::LevelCatalog;
use crate::resources::race::RaceRoster;
use crate::resources::scheduler::{Scheduler, TaskKind};
use crate::resources::ui::{UiPanels, UiPhase};
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::set_animation_state;

/// Apply the phase of the current level: panel visibility, and for sorting
/// levels a fresh "race not started" state.
pub fn apply_level_properties(
    level: &mut LevelState,
    catalog: &LevelCatalog,
    ui: &mut UiPanels,
    signals: &mut WorldSignals,
) {
    level.phase = catalog.phase_for(level.current);
    match level.phase {
        LevelPhase::Painting => ui.show_painting(),
        LevelPhase::Sorting => {
            ui.show_sorting();
            level.race_started = false;
            signals.clear_flag("race_started");
        }
    }
    signals.set_integer("level", level.current as i32);
    signals.set_scalar("paint_energy", level.paint_energy);
}

pub fn observe_finish_line(
    trigger: On<FinishLineEvent>,
    mut actors: Query<(
        &ActorClass,
        &mut ControlState,
        &mut Stun,
        &mut RigidBody,
        Option<&mut Controllable>,
        Option<&mut NavAgent>,
        Option<&mut Animator>,
    )>,
    roster: Res<RaceRoster>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut timeline: ResMut<FinishTimeline>,
    mut scheduler: ResMut<Scheduler>,
    mut anim_cmds: MessageWriter<AnimationCmd>,
) {
    let entity = trigger.event().entity;
    let Ok((class, mut state, mut stun, mut body, controllable, agent, animator)) =
        actors.get_mut(entity)
    else {
        return;
    };

    if *class == ActorClass::Ai {
        *state = ControlState::Idle;
        if let Some(mut agent) = agent {
            agent.disable();
        }
        if let Some(mut animator) = animator {
            set_animation_state(entity, &mut animator, AnimationState::Idle, &mut anim_cmds);
        }
        debug!("AI {:?} finished", entity);
        return;
    }
    if roster.controlled != Some(entity) {
        return;
    }

    if let Some(mut controllable) = controllable {
        controllable.active = false;
    }
    *state = ControlState::Idle;
    stun.bump();
    body.velocity = Vec3::ZERO;
    body.freeze();
    if let Some(mut animator) = animator {
        set_animation_state(entity, &mut animator, AnimationState::Win, &mut anim_cmds);
    }

    let stage_duration = config.camera_time;
    match timeline.start(config.paint_point, stage_duration) {
        Some(sequence) => {
            scheduler.schedule(
                time.elapsed,
                stage_duration,
                TaskKind::FinishStage {
                    sequence,
                    stage: FinishStage::CameraMove,
                },
            );
            info!("player finished, finish timeline {} started", sequence);
        }
        None => warn!("finish timeline already running, ignoring new finish"),
    }
}

pub fn observe_finish_level(
    _trigger: On<FinishLevelEvent>,
    mut level: ResMut<LevelState>,
    catalog: Res<LevelCatalog>,
    mut ui: ResMut<UiPanels>,
    mut signals: ResMut<WorldSignals>,
    mut timeline: ResMut<FinishTimeline>,
    mut assets: Query<(&LevelAssets, &mut Active)>,
    mut commands: Commands,
) {
    let step = level.advance();
    info!(
        "level {} -> {}{}",
        step.from,
        step.to,
        if step.wrapped { " (cycle reset)" } else { "" }
    );
    apply_level_properties(&mut level, &catalog, &mut ui, &mut signals);

    for (group, mut active) in assets.iter_mut() {
        let visible = group.level == level.current;
        if active.0 != visible {
            active.0 = visible;
        }
    }

    if let Some(sequence) = timeline.cancel() {
        debug!("finish timeline {} cancelled by level change", sequence);
    }
    commands.trigger(RestartPlayerEvent);
}

pub fn observe_restart_player(
    _trigger: On<RestartPlayerEvent>,
    roster: Res<RaceRoster>,
    level: Res<LevelState>,
    catalog: Res<LevelCatalog>,
    mut ui: ResMut<UiPanels>,
    mut players: Query<(
        &mut ControlState,
        &mut Stun,
        &mut RigidBody,
        &mut MapPosition,
        Option<&mut Locomotion>,
        Option<&mut Controllable>,
        Option<&mut SpawnPoint>,
        Option<&mut Animator>,
    )>,
    mut cameras: Query<(Entity, &mut CameraFollow)>,
    mut anim_cmds: MessageWriter<AnimationCmd>,
    mut commands: Commands,
) {
    let Some(player) = roster.controlled else {
        return;
    };
    let Ok((
        mut state,
        mut stun,
        mut body,
        mut position,
        locomotion,
        controllable,
        spawn,
        animator,
    )) = players.get_mut(player)
    else {
        return;
    };

    let spawn_pos = catalog
        .get(level.current)
        .map(|def| def.spawn)
        .or(spawn.as_ref().map(|s| s.pos))
        .unwrap_or(position.pos);

    *state = ControlState::Idle;
    stun.bump();
    body.clear();
    body.freeze();
    position.pos = spawn_pos;
    if let Some(mut spawn) = spawn {
        spawn.pos = spawn_pos;
    }
    if let Some(mut locomotion) = locomotion {
        locomotion.residual_push = Vec3::ZERO;
    }
    if let Some(mut controllable) = controllable {
        controllable.active = true;
    }
    if let Some(mut animator) = animator {
        set_animation_state(player, &mut animator, AnimationState::Idle, &mut anim_cmds);
    }

    for (camera, mut follow) in cameras.iter_mut() {
        follow.enabled = true;
        commands.entity(camera).remove::<TweenPosition>();
    }
    ui.phase = UiPhase::Begin;
    info!("player restarted at {:?}", spawn_pos);
}

pub fn observe_player_stop(
    _trigger: On<PlayerStopEvent>,
    roster: Res<RaceRoster>,
    mut players: Query<(&mut ControlState, &mut Stun, &mut RigidBody, &mut Controllable)>,
) {
    let Some(player) = roster.controlled else {
        return;
    };
    if let Ok((mut state, mut stun, mut body, mut controllable)) = players.get_mut(player) {
        controllable.active = false;
        *state = ControlState::Idle;
        stun.bump();
        body.velocity = Vec3::ZERO;
        body.freeze();
    }
}

pub fn observe_show_win(_trigger: On<ShowWinEvent>, mut ui: ResMut<UiPanels>) {
    ui.phase = UiPhase::Win;
}

pub fn observe_consume_paint(
    trigger: On<ConsumePaintEvent>,
    mut level: ResMut<LevelState>,
    mut signals: ResMut<WorldSignals>,
) {
    let consumed = level.consume_paint(trigger.event().amount);
    if consumed > 0.0 {
        signals.set_scalar("paint_energy", level.paint_energy);
    }
}
