//! Finish timeline state.
//!
//! The timeline runs once per level completion:
//!
//! 1. wait `stage_duration`
//! 2. move the camera to `destination` over `stage_duration`
//! 3. wait `stage_duration`
//! 4. activate the stage group
//!
//! Stages are scheduler tasks keyed by the timeline's sequence number.
//! Cancelling clears the active timeline, which turns any stage still in the
//! scheduler into a no-op.

use bevy_ecs::prelude::Resource;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishStage {
    CameraMove,
    ActivateStage,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTimeline {
    pub sequence: u64,
    pub destination: Vec3,
    pub stage_duration: f32,
    /// Stage that fires next.
    pub stage: FinishStage,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct FinishTimeline {
    next_sequence: u64,
    pub active: Option<ActiveTimeline>,
}

impl FinishTimeline {
    /// Start a timeline. Returns its sequence number, or `None` when one is
    /// already in flight.
    pub fn start(&mut self, destination: Vec3, stage_duration: f32) -> Option<u64> {
        if self.active.is_some() {
            return None;
        }
        self.next_sequence += 1;
        let sequence = self.next_sequence;
        self.active = Some(ActiveTimeline {
            sequence,
            destination,
            stage_duration,
            stage: FinishStage::CameraMove,
        });
        Some(sequence)
    }

    /// Returns the active timeline if `sequence` is still the one in flight
    /// and `stage` is the stage it is waiting for.
    pub fn current(&self, sequence: u64, stage: FinishStage) -> Option<ActiveTimeline> {
        self.active
            .filter(|active| active.sequence == sequence && active.stage == stage)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn advance_stage(&mut self, stage: FinishStage) {
        if let Some(active) = self.active.as_mut() {
            active.stage = stage;
        }
    }

    /// Abandon the timeline in flight, if any.
    pub fn cancel(&mut self) -> Option<u64> {
        self.active.take().map(|active| active.sequence)
    }

    /// Mark the timeline finished.
    pub fn complete(&mut self, sequence: u64) -> bool {
        match self.active {
            Some(active) if active.sequence == sequence => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_start_is_rejected_while_running() {
        let mut timeline = FinishTimeline::default();
        let first = timeline.start(Vec3::ONE, 2.0);
        assert!(first.is_some());
        assert_eq!(timeline.start(Vec3::ZERO, 1.0), None);
        assert_eq!(timeline.active.unwrap().destination, Vec3::ONE);
    }

    #[test]
    fn cancel_invalidates_sequence() {
        let mut timeline = FinishTimeline::default();
        let seq = timeline.start(Vec3::ONE, 2.0).unwrap();
        assert_eq!(timeline.cancel(), Some(seq));
        assert!(timeline.current(seq, FinishStage::CameraMove).is_none());

        let next = timeline.start(Vec3::ONE, 2.0).unwrap();
        assert_ne!(seq, next);
        assert!(!timeline.complete(seq));
        assert!(timeline.complete(next));
        assert!(!timeline.is_running());
    }

    #[test]
    fn current_requires_matching_stage() {
        let mut timeline = FinishTimeline::default();
        let seq = timeline.start(Vec3::ONE, 2.0).unwrap();
        assert!(timeline.current(seq, FinishStage::ActivateStage).is_none());
        timeline.advance_stage(FinishStage::ActivateStage);
        assert!(timeline.current(seq, FinishStage::ActivateStage).is_some());
    }
}
