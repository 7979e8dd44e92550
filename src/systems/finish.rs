//! Finish timeline stages.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::camera::CameraFollow;
use crate::components::group::{Active, Group};
use crate::components::mapposition::MapPosition;
use crate::components::tween::TweenPosition;
use crate::events::race::{FinishLevelEvent, FinishTimelineCompleted};
use crate::events::timer::FinishStageEvent;
use crate::resources::finish::{FinishStage, FinishTimeline};
use crate::resources::gameconfig::GameConfig;
use crate::resources::scheduler::{Scheduler, TaskKind};
use crate::resources::worldtime::WorldTime;

pub fn observe_finish_stage(
    trigger: On<FinishStageEvent>,
    mut timeline: ResMut<FinishTimeline>,
    mut scheduler: ResMut<Scheduler>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut cameras: Query<(Entity, &MapPosition, &mut CameraFollow)>,
    mut groups: Query<(&Group, &mut Active)>,
    mut commands: Commands,
) {
    let event = *trigger.event();
    let Some(active) = timeline.current(event.sequence, event.stage) else {
        debug!(
            "stale finish stage {:?} for timeline {}",
            event.stage, event.sequence
        );
        return;
    };

    match event.stage {
        FinishStage::CameraMove => {
            for (camera, position, mut follow) in cameras.iter_mut() {
                follow.enabled = false;
                commands.entity(camera).insert(
                    TweenPosition::new(position.pos, active.destination, active.stage_duration)
                        .with_easing(config.camera_easing),
                );
            }
            timeline.advance_stage(FinishStage::ActivateStage);
            scheduler.schedule(
                time.elapsed,
                active.stage_duration,
                TaskKind::FinishStage {
                    sequence: active.sequence,
                    stage: FinishStage::ActivateStage,
                },
            );
        }
        FinishStage::ActivateStage => {
            for (group, mut enabled) in groups.iter_mut() {
                if group.name() == config.stage_group {
                    enabled.0 = true;
                }
            }
            timeline.complete(active.sequence);
            info!("finish timeline {} completed", active.sequence);
            commands.trigger(FinishTimelineCompleted {
                sequence: active.sequence,
            });
            if config.auto_finish_level {
                commands.trigger(FinishLevelEvent);
            }
        }
    }
}
