//! World construction.
//!
//! [`build_world`] inserts the race resources and registers every observer.
//! The spawn helpers then place racers and track pieces, and
//! [`finalize_world`] checks that the collaborators the race needs are
//! present before applying the first level.
//!
//! ```ignore
//! let mut world = build_world(config, catalog)?;
//! let spawn = world.resource::<LevelCatalog>().levels[0].spawn;
//! spawn_player(&mut world, spawn);
//! spawn_ground(&mut world, Vec3::new(0.0, -0.5, 50.0), Vec3::new(10.0, 1.0, 120.0));
//! finalize_world(&mut world)?;
//! let mut sim = Simulation::new(world);
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;

use crate::components::actor::{
    ActorClass, ControlState, Controllable, SpawnPoint, SwerveInput, TriggerContacts,
};
use crate::components::agent::{AiRunner, NavAgent};
use crate::components::animation::Animator;
use crate::components::boxcollider::BoxCollider;
use crate::components::camera::CameraFollow;
use crate::components::ground::{GroundContact, GroundProbe, GroundSurface, RotatingPlatform};
use crate::components::group::{Active, Group, LevelAssets};
use crate::components::locomotion::Locomotion;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotator::Rotator;
use crate::components::stun::{Health, Stun};
use crate::components::trigger::{FinishLine, Obstacle};
use crate::error::SetupError;
use crate::events::animation::AnimationCmd;
use crate::resources::finish::FinishTimeline;
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::LevelState;
use crate::resources::levelcatalog::LevelCatalog;
use crate::resources::race::RaceRoster;
use crate::resources::scheduler::Scheduler;
use crate::resources::ui::UiPanels;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::ai::{observe_ai_resume, observe_restart_ai};
use crate::systems::collision::observe_trigger_enter;
use crate::systems::finish::observe_finish_stage;
use crate::systems::level::{
    apply_level_properties, observe_consume_paint, observe_finish_level, observe_finish_line,
    observe_player_stop, observe_restart_player, observe_show_win,
};
use crate::systems::race::observe_activate_movement;
use crate::systems::stun::{observe_damage, observe_impact, observe_recovery_check};

/// Size of a racer's trigger collider.
const ACTOR_SIZE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Create a world with every race resource and observer in place.
pub fn build_world(config: GameConfig, catalog: LevelCatalog) -> Result<World, SetupError> {
    catalog.validate()?;

    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_fixed_hz(config.fixed_hz));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(Scheduler::default());
    world.insert_resource(LevelState::new(catalog.len(), config.paint_energy));
    world.insert_resource(RaceRoster::default());
    world.insert_resource(UiPanels::default());
    world.insert_resource(FinishTimeline::default());
    world.insert_resource(Messages::<AnimationCmd>::default());

    world.spawn(Observer::new(observe_trigger_enter));
    world.spawn(Observer::new(observe_impact));
    world.spawn(Observer::new(observe_recovery_check));
    world.spawn(Observer::new(observe_damage));
    world.spawn(Observer::new(observe_activate_movement));
    world.spawn(Observer::new(observe_finish_line));
    world.spawn(Observer::new(observe_finish_level));
    world.spawn(Observer::new(observe_restart_player));
    world.spawn(Observer::new(observe_player_stop));
    world.spawn(Observer::new(observe_show_win));
    world.spawn(Observer::new(observe_consume_paint));
    world.spawn(Observer::new(observe_finish_stage));
    world.spawn(Observer::new(observe_restart_ai));
    world.spawn(Observer::new(observe_ai_resume));

    for (index, def) in catalog.levels.iter().enumerate() {
        world.spawn((
            Group::new(def.asset_group.clone()),
            LevelAssets { level: index + 1 },
            Active(index == 0),
        ));
    }
    world.spawn((Group::new(config.stage_group.clone()), Active(false)));

    let first_spawn = catalog.levels[0].spawn;
    let follow = CameraFollow::new(config.camera_offset, config.camera_follow_time);
    world.spawn((
        Group::new("camera"),
        MapPosition::from_vec(follow.desired_position(first_spawn)),
        follow,
    ));

    world.insert_resource(config);
    world.insert_resource(catalog);
    // Ensure observers are registered before anything triggers.
    world.flush();
    Ok(world)
}

/// Check required collaborators and apply the first level.
pub fn finalize_world(world: &mut World) -> Result<(), SetupError> {
    let controlled = world.resource::<RaceRoster>().controlled;
    match controlled {
        Some(e) if world.get::<ControlState>(e).is_some() => {}
        _ => return Err(SetupError::MissingCollaborator("controlled actor")),
    }

    let mut cameras = world.query_filtered::<(), With<CameraFollow>>();
    if cameras.iter(world).next().is_none() {
        return Err(SetupError::MissingCollaborator("camera"));
    }

    let stage_group = world.resource::<GameConfig>().stage_group.clone();
    let mut groups = world.query::<&Group>();
    if !groups.iter(world).any(|g| g.name() == stage_group) {
        return Err(SetupError::MissingCollaborator("stage group"));
    }

    let catalog = world.resource::<LevelCatalog>().clone();
    let mut level = world.resource::<LevelState>().clone();
    let mut ui = world.resource::<UiPanels>().clone();
    let mut signals = world.resource::<WorldSignals>().clone();
    apply_level_properties(&mut level, &catalog, &mut ui, &mut signals);
    info!(
        "world ready: {} levels, starting at level {} ({:?})",
        level.level_count, level.current, level.phase
    );
    world.insert_resource(level);
    world.insert_resource(ui);
    world.insert_resource(signals);
    Ok(())
}

/// Spawn the player-controlled racer and register it as the controlled actor.
///
/// The racer starts idle and frozen until an
/// [`ActivateMovementEvent`](crate::events::race::ActivateMovementEvent).
pub fn spawn_player(world: &mut World, position: Vec3) -> Entity {
    let config = world.resource::<GameConfig>().clone();
    let mut body = RigidBody::new();
    body.freeze();
    let entity = world
        .spawn((
            Group::new("player"),
            ActorClass::Player,
            ControlState::Idle,
            Controllable::default(),
            SwerveInput::default(),
            MapPosition::from_vec(position),
            body,
            BoxCollider::new(ACTOR_SIZE.x, ACTOR_SIZE.y, ACTOR_SIZE.z),
            Locomotion::new(
                config.forward_speed,
                config.swerve_speed,
                config.max_swerve,
                config.gravity,
            ),
        ))
        .insert((
            GroundProbe {
                check_radius: config.ground_check_radius,
                ray_length: config.ground_ray_length,
            },
            GroundContact::default(),
            SpawnPoint { pos: position },
            Stun::default(),
            Animator::default(),
            TriggerContacts::default(),
        ))
        .id();

    let mut roster = world.resource_mut::<RaceRoster>();
    roster.push(entity);
    roster.controlled = Some(entity);
    entity
}

/// Spawn an AI racer running toward `target`.
pub fn spawn_ai(world: &mut World, position: Vec3, target: Vec3) -> Entity {
    let config = world.resource::<GameConfig>().clone();
    let entity = world
        .spawn((
            Group::new("ai"),
            ActorClass::Ai,
            ControlState::Idle,
            MapPosition::from_vec(position),
            RigidBody::new()
                .with_mass(config.ai_mass)
                .with_kinematic(true),
            BoxCollider::new(ACTOR_SIZE.x, ACTOR_SIZE.y, ACTOR_SIZE.z),
            NavAgent::new(config.agent_speed),
            AiRunner::new(target),
            GroundProbe {
                check_radius: config.ground_check_radius,
                ray_length: config.ground_ray_length,
            },
            GroundContact::default(),
        ))
        .insert((
            SpawnPoint { pos: position },
            Stun::default(),
            Animator::default(),
            TriggerContacts::default(),
        ))
        .id();
    world.resource_mut::<RaceRoster>().push(entity);
    entity
}

/// Give an actor health so it can take [`DamageEvent`](crate::events::stun::DamageEvent)s.
pub fn make_damageable(world: &mut World, entity: Entity, health: i32) {
    world.entity_mut(entity).insert(Health::new(health));
}

pub fn spawn_ground(world: &mut World, center: Vec3, size: Vec3) -> Entity {
    world
        .spawn((
            Group::new("ground"),
            GroundSurface,
            MapPosition::from_vec(center),
            BoxCollider::new(size.x, size.y, size.z),
        ))
        .id()
}

/// Spawn a rotating obstacle and the walkable platform it spins. Returns the
/// platform.
pub fn spawn_rotating_platform(
    world: &mut World,
    center: Vec3,
    size: Vec3,
    rotator: Rotator,
) -> Entity {
    let rotator = world
        .spawn((Group::new("rotator"), MapPosition::from_vec(center), rotator))
        .id();
    world
        .spawn((
            Group::new("rotating_platform"),
            GroundSurface,
            RotatingPlatform { rotator },
            MapPosition::from_vec(center),
            BoxCollider::new(size.x, size.y, size.z),
        ))
        .id()
}

pub fn spawn_finish_line(world: &mut World, center: Vec3, size: Vec3) -> Entity {
    world
        .spawn((
            Group::new("finish"),
            FinishLine,
            MapPosition::from_vec(center),
            BoxCollider::new(size.x, size.y, size.z),
        ))
        .id()
}

pub fn spawn_obstacle(world: &mut World, center: Vec3, size: Vec3, obstacle: Obstacle) -> Entity {
    world
        .spawn((
            Group::new("obstacle"),
            obstacle,
            MapPosition::from_vec(center),
            BoxCollider::new(size.x, size.y, size.z),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_fails_setup() {
        let result = build_world(GameConfig::new(), LevelCatalog { levels: vec![] });
        assert!(matches!(result, Err(SetupError::EmptyCatalog)));
    }

    #[test]
    fn finalize_requires_controlled_actor() {
        let mut world = build_world(GameConfig::new(), LevelCatalog::default()).unwrap();
        assert!(matches!(
            finalize_world(&mut world),
            Err(SetupError::MissingCollaborator("controlled actor"))
        ));
        spawn_player(&mut world, Vec3::ZERO);
        assert!(finalize_world(&mut world).is_ok());
    }

    #[test]
    fn finalize_requires_camera() {
        let mut world = build_world(GameConfig::new(), LevelCatalog::default()).unwrap();
        spawn_player(&mut world, Vec3::ZERO);
        let mut cameras = world.query_filtered::<Entity, With<CameraFollow>>();
        let camera = cameras.iter(&world).next().unwrap();
        world.despawn(camera);
        assert!(matches!(
            finalize_world(&mut world),
            Err(SetupError::MissingCollaborator("camera"))
        ));
    }

    #[test]
    fn level_asset_groups_follow_catalog() {
        let world_catalog = LevelCatalog::default();
        let mut world = build_world(GameConfig::new(), world_catalog).unwrap();
        let mut q = world.query::<(&LevelAssets, &Active)>();
        let mut groups: Vec<(usize, bool)> = q.iter(&world).map(|(l, a)| (l.level, a.0)).collect();
        groups.sort();
        assert_eq!(groups, vec![(1, true), (2, false)]);
    }
}
