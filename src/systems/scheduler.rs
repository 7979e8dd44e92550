//! Scheduled-callback dispatch.
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::timer::{AiResumeEvent, FinishStageEvent, RecoveryCheckEvent};
use crate::resources::scheduler::{Scheduler, TaskKind};
use crate::resources::worldtime::WorldTime;

/// Fire every task due at the current time.
///
/// Each due task becomes its timer event. Whether the event still means
/// anything is up to its observer, which compares the carried token against
/// the owner's current one.
pub fn poll_scheduler(
    mut scheduler: ResMut<Scheduler>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for task in scheduler.drain_due(time.elapsed) {
        trace!("scheduler: {:?} due at {:.3}", task.kind, task.fire_at);
        match task.kind {
            TaskKind::StunRecovery { entity, generation } => {
                commands.trigger(RecoveryCheckEvent { entity, generation });
            }
            TaskKind::AiResume { entity, generation } => {
                commands.trigger(AiResumeEvent { entity, generation });
            }
            TaskKind::FinishStage { sequence, stage } => {
                commands.trigger(FinishStageEvent { sequence, stage });
            }
        }
    }
}
