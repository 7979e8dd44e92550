//! Camera follow.
use bevy_ecs::prelude::*;

use crate::components::camera::CameraFollow;
use crate::components::mapposition::MapPosition;
use crate::resources::race::RaceRoster;
use crate::resources::worldtime::WorldTime;

/// Ease enabled follow cameras toward the controlled actor.
pub fn camera_follow_system(
    mut cameras: Query<(&mut MapPosition, &CameraFollow)>,
    targets: Query<&MapPosition, Without<CameraFollow>>,
    roster: Res<RaceRoster>,
    time: Res<WorldTime>,
) {
    let Some(target) = roster.controlled.and_then(|e| targets.get(e).ok()) else {
        return;
    };
    for (mut position, follow) in cameras.iter_mut() {
        if !follow.enabled {
            continue;
        }
        let desired = follow.desired_position(target.pos);
        let t = (follow.follow_time * time.delta).clamp(0.0, 1.0);
        position.pos = position.pos.lerp(desired, t);
    }
}
