//! Level progression state.
//!
//! A level is either a painting level, where the player spends a depletable
//! paint resource, or a sorting level, where racers are ranked by track
//! progress. [`LevelState`] tracks the current 1-based level index, its
//! phase and the paint energy. It is only mutated by the level observers in
//! [`crate::systems::level`].

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelPhase {
    #[default]
    Painting,
    Sorting,
}

/// Outcome of [`LevelState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelAdvance {
    pub from: usize,
    pub to: usize,
    /// True when the cycle wrapped back to level 1.
    pub wrapped: bool,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelState {
    /// Current level, 1-based.
    pub current: usize,
    pub level_count: usize,
    pub phase: LevelPhase,
    pub paint_energy: f32,
    pub default_paint_energy: f32,
    /// Racers only run once the controlled actor has started.
    pub race_started: bool,
}

impl LevelState {
    /// `level_count` below 1 is treated as a single level.
    pub fn new(level_count: usize, default_paint_energy: f32) -> Self {
        Self {
            current: 1,
            level_count: level_count.max(1),
            phase: LevelPhase::Painting,
            paint_energy: default_paint_energy,
            default_paint_energy,
            race_started: false,
        }
    }

    /// Clamp an arbitrary level index into `1..=level_count`.
    pub fn normalize_index(&self, index: usize) -> usize {
        index.clamp(1, self.level_count)
    }

    /// Move to the next level, wrapping after the last one. Paint energy is
    /// reset to its default exactly when the cycle wraps.
    pub fn advance(&mut self) -> LevelAdvance {
        let from = self.normalize_index(self.current);
        let wrapped = from >= self.level_count;
        let to = if wrapped { 1 } else { from + 1 };
        if wrapped {
            self.paint_energy = self.default_paint_energy;
        }
        self.current = to;
        LevelAdvance { from, to, wrapped }
    }

    /// Spend paint energy. Only honored during a painting level; the energy
    /// never drops below zero. Returns the amount actually consumed.
    pub fn consume_paint(&mut self, amount: f32) -> f32 {
        if self.phase != LevelPhase::Painting || amount <= 0.0 {
            return 0.0;
        }
        let consumed = amount.min(self.paint_energy);
        self.paint_energy -= consumed;
        consumed
    }

    pub fn is_sorting(&self) -> bool {
        self.phase == LevelPhase::Sorting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_below_last_level_keeps_paint_energy() {
        let mut level = LevelState::new(3, 100.0);
        level.paint_energy = 40.0;
        let step = level.advance();
        assert_eq!(step, LevelAdvance { from: 1, to: 2, wrapped: false });
        assert_eq!(level.paint_energy, 40.0);
    }

    #[test]
    fn advance_past_last_level_wraps_and_resets_once() {
        let mut level = LevelState::new(2, 100.0);
        level.current = 2;
        level.paint_energy = 12.0;
        let step = level.advance();
        assert!(step.wrapped);
        assert_eq!(level.current, 1);
        assert_eq!(level.paint_energy, 100.0);

        level.paint_energy = 50.0;
        let step = level.advance();
        assert!(!step.wrapped);
        assert_eq!(level.current, 2);
        assert_eq!(level.paint_energy, 50.0);
    }

    #[test]
    fn single_level_always_wraps() {
        let mut level = LevelState::new(0, 100.0);
        assert_eq!(level.level_count, 1);
        assert!(level.advance().wrapped);
        assert_eq!(level.current, 1);
    }

    #[test]
    fn out_of_range_index_is_clamped() {
        let level = LevelState::new(2, 100.0);
        assert_eq!(level.normalize_index(9), 2);
        assert_eq!(level.normalize_index(0), 1);

        let mut level = LevelState::new(2, 100.0);
        level.current = 9;
        assert_eq!(level.advance(), LevelAdvance { from: 2, to: 1, wrapped: true });
    }

    #[test]
    fn paint_is_only_consumed_while_painting() {
        let mut level = LevelState::new(2, 100.0);
        assert_eq!(level.consume_paint(30.0), 30.0);
        assert_eq!(level.consume_paint(500.0), 70.0);
        assert_eq!(level.paint_energy, 0.0);

        level.paint_energy = 10.0;
        level.phase = LevelPhase::Sorting;
        assert_eq!(level.consume_paint(5.0), 0.0);
        assert_eq!(level.paint_energy, 10.0);
    }
}
