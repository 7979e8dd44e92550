//! Timer expiration events.
//!
//! [`poll_scheduler`](crate::systems::scheduler::poll_scheduler) turns each
//! due [`TaskKind`](crate::resources::scheduler::TaskKind) into one of these
//! events. The token they carry is compared against the owner's current one
//! by the observer; a mismatch means the task was superseded and it is
//! dropped.
//!
//! # Related
//!
//! - [`crate::resources::scheduler::Scheduler`] – the callback table
//! - [`crate::systems::stun::observe_recovery_check`]
//! - [`crate::systems::ai::observe_ai_resume`]
//! - [`crate::systems::finish::observe_finish_stage`]

use bevy_ecs::prelude::*;

use crate::resources::finish::FinishStage;

/// Time to decide whether a stunned actor recovers.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryCheckEvent {
    pub entity: Entity,
    /// Stun generation at scheduling time.
    pub generation: u64,
}

/// A restarted AI racer may run again.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiResumeEvent {
    pub entity: Entity,
    pub generation: u64,
}

/// A finish timeline stage is due.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishStageEvent {
    pub sequence: u64,
    pub stage: FinishStage,
}
