//! Core actor components.
//!
//! Every racer (player-controlled or computer-controlled) carries a
//! [`ControlState`], an [`ActorClass`] and a [`SpawnPoint`]. Player actors
//! additionally carry [`Controllable`] and [`SwerveInput`]; AI actors carry a
//! [`NavAgent`](super::agent::NavAgent).
//!
//! # Control state edges
//!
//! - `Idle -> Moving` on an activate-movement request
//! - `Idle | Moving | Suspended -> Suspended` on an impact
//! - `Suspended -> Moving` (player) or `Idle` (AI) on a grounded recovery check
//! - any state `-> Idle` on finish-line contact or restart
//! - `Idle | Suspended -> Moving` when a player still allowed to play runs
//!   out of health

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;
use rustc_hash::FxHashSet;

/// Locomotion control state of an actor.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    #[default]
    Idle,
    Moving,
    Suspended,
}

/// Which recovery and impulse policy applies to an actor.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorClass {
    /// The player-controlled racer. Recovers into `Moving`.
    Player,
    /// A computer-controlled racer. Recovers into `Idle` with its agent re-enabled.
    Ai,
}

/// Whether the player may currently start moving.
///
/// Cleared at the finish line and by an explicit stop, set again on restart.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controllable {
    pub active: bool,
}

impl Default for Controllable {
    fn default() -> Self {
        Self { active: true }
    }
}

/// Horizontal swerve input from the input collaborator, in `[-1, 1]`-ish units.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct SwerveInput {
    pub move_factor_x: f32,
}

/// Where an actor returns on restart.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SpawnPoint {
    pub pos: Vec3,
}

/// Track of which trigger volumes an actor currently overlaps, so that
/// enter events fire once per contact.
#[derive(Component, Clone, Debug, Default)]
pub struct TriggerContacts {
    pub touching: FxHashSet<Entity>,
}
