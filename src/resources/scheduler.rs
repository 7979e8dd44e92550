//! Scheduled-callback table.
//!
//! Every timed operation of the race core (stun recovery checks, AI restart
//! delays, finish timeline stages) is an entry in the [`Scheduler`] resource.
//! Entries carry the owner and the generation or sequence token that was
//! current when they were scheduled. There is no cancel API: a task whose
//! token went stale in the meantime is dispatched anyway and its observer
//! ignores it.
//!
//! [`poll_scheduler`](crate::systems::scheduler::poll_scheduler) drains due
//! entries once per frame.

use bevy_ecs::prelude::{Entity, Resource};
use smallvec::SmallVec;

use crate::resources::finish::FinishStage;

/// Smallest delay a task can be scheduled with. Non-positive delays are
/// raised to this so they fire on the next poll rather than the current one.
pub const MIN_DELAY: f32 = 1.0e-4;

/// What a scheduled task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Stun recovery decision for `entity`, valid while its stun generation
    /// still equals `generation`.
    StunRecovery { entity: Entity, generation: u64 },
    /// Re-enable a restarted AI racer.
    AiResume { entity: Entity, generation: u64 },
    /// Next stage of the finish timeline identified by `sequence`.
    FinishStage { sequence: u64, stage: FinishStage },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTask {
    pub fire_at: f32,
    pub kind: TaskKind,
}

/// Pending timed tasks ordered by insertion.
#[derive(Resource, Debug, Default, Clone)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Schedule `kind` to fire `delay` seconds after `now`.
    pub fn schedule(&mut self, now: f32, delay: f32, kind: TaskKind) -> f32 {
        let delay = if delay > 0.0 { delay } else { MIN_DELAY };
        let fire_at = now + delay;
        self.tasks.push(ScheduledTask { fire_at, kind });
        fire_at
    }

    /// Remove and return every task due at `now`, earliest first. Tasks due at
    /// the same instant keep their scheduling order.
    pub fn drain_due(&mut self, now: f32) -> SmallVec<[ScheduledTask; 4]> {
        let mut due: SmallVec<[ScheduledTask; 4]> = SmallVec::new();
        self.tasks.retain(|task| {
            if task.fire_at <= now {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at));
        due
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn non_positive_delay_is_raised_to_minimum() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut scheduler = Scheduler::default();
        let kind = TaskKind::StunRecovery {
            entity: e,
            generation: 1,
        };
        assert_eq!(scheduler.schedule(1.0, 0.0, kind), 1.0 + MIN_DELAY);
        assert_eq!(scheduler.schedule(1.0, -3.0, kind), 1.0 + MIN_DELAY);
        assert!(scheduler.drain_due(1.0).is_empty());
        assert_eq!(scheduler.drain_due(1.0 + MIN_DELAY).len(), 2);
    }

    #[test]
    fn drain_returns_due_tasks_in_fire_order() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut scheduler = Scheduler::default();
        scheduler.schedule(0.0, 3.0, TaskKind::StunRecovery { entity: a, generation: 1 });
        scheduler.schedule(0.0, 1.0, TaskKind::StunRecovery { entity: b, generation: 1 });
        scheduler.schedule(0.0, 5.0, TaskKind::AiResume { entity: a, generation: 1 });

        let due = scheduler.drain_due(4.0);
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].kind, TaskKind::StunRecovery { entity: b, generation: 1 });
        assert_eq!(due[1].kind, TaskKind::StunRecovery { entity: a, generation: 1 });
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn simultaneous_tasks_keep_insertion_order() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(0.0, 1.0, TaskKind::FinishStage { sequence: 1, stage: FinishStage::CameraMove });
        scheduler.schedule(0.0, 1.0, TaskKind::FinishStage { sequence: 2, stage: FinishStage::CameraMove });
        let due = scheduler.drain_due(1.0);
        assert!(matches!(due[0].kind, TaskKind::FinishStage { sequence: 1, .. }));
        assert!(matches!(due[1].kind, TaskKind::FinishStage { sequence: 2, .. }));
    }
}
