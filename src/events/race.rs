//! Race flow events.
//!
//! Input, level scripts and the finish timeline drive the race through these
//! events; observers in [`crate::systems::race`] and [`crate::systems::level`]
//! react to them.
use bevy_ecs::prelude::*;

/// The player asked the controlled actor to start running.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ActivateMovementEvent;

/// An actor crossed the finish line.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishLineEvent {
    pub entity: Entity,
}

/// Advance to the next level and restart the controlled actor.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct FinishLevelEvent;

/// The finish timeline ran its last stage.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishTimelineCompleted {
    pub sequence: u64,
}

/// Put the controlled actor back at its spawn point, idle and waiting for
/// [`ActivateMovementEvent`].
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RestartPlayerEvent;

/// Spend paint energy during a painting level.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ConsumePaintEvent {
    pub amount: f32,
}

/// Stop the controlled actor where it is.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlayerStopEvent;

/// Switch the UI to its win screen.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ShowWinEvent;

/// Send an AI racer back to its start and let it run again after a delay.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartAiEvent {
    pub entity: Entity,
}
