//! Race start and ranking.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::actor::{ControlState, Controllable};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::race::ActivateMovementEvent;
use crate::resources::level::LevelState;
use crate::resources::race::RaceRoster;
use crate::resources::ui::{UiPanels, UiPhase};
use crate::resources::worldsignals::WorldSignals;

/// Re-sort the roster by track progress and publish the controlled actor's
/// rank. Dormant outside sorting levels.
pub fn race_ranking_system(
    mut roster: ResMut<RaceRoster>,
    positions: Query<&MapPosition>,
    level: Res<LevelState>,
    mut ui: ResMut<UiPanels>,
    mut signals: ResMut<WorldSignals>,
) {
    if !level.is_sorting() {
        return;
    }
    if roster.entries.iter().any(|e| !positions.contains(*e)) {
        roster.retain(|e| positions.contains(*e));
    }
    roster.sort_by_progress(|e| {
        positions
            .get(e)
            .map(MapPosition::progress)
            .unwrap_or(f32::NEG_INFINITY)
    });

    if let Some(rank) = roster.controlled_rank() {
        ui.set_rank(rank);
        if signals.get_integer("rank") != Some(rank as i32) {
            signals.set_integer("rank", rank as i32);
        }
    }
}

/// Start the controlled actor. Ignored unless it is idle and still allowed to
/// play.
pub fn observe_activate_movement(
    _trigger: On<ActivateMovementEvent>,
    roster: Res<RaceRoster>,
    mut actors: Query<(&mut ControlState, &Controllable, &mut RigidBody)>,
    mut level: ResMut<LevelState>,
    mut ui: ResMut<UiPanels>,
    mut signals: ResMut<WorldSignals>,
) {
    let Some(player) = roster.controlled else {
        return;
    };
    let Ok((mut state, controllable, mut body)) = actors.get_mut(player) else {
        return;
    };
    if *state != ControlState::Idle || !controllable.active {
        debug!(
            "activate movement ignored: {:?}, active={}",
            *state, controllable.active
        );
        return;
    }
    *state = ControlState::Moving;
    body.unfreeze();
    level.race_started = true;
    signals.set_flag("race_started");
    ui.phase = UiPhase::Gameplay;
    info!("race started");
}
