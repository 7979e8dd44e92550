//! Published race signals.
//!
//! [`WorldSignals`] is a flat key/value board read by consumers (HUD, audio,
//! analytics) that should not depend on the race resources directly.
//!
//! Keys written by the race core:
//! - `rank` (integer): rank of the controlled actor while racing
//! - `level` (integer): current 1-based level index
//! - `paint_energy` (scalar): remaining painting resource
//! - `race_started` (flag): racers are allowed to run

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    pub scalars: FxHashMap<String, f32>,
    pub integers: FxHashMap<String, i32>,
    /// A key being present means the flag is set.
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }

    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }

    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_presence_based() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("race_started"));
        signals.set_flag("race_started");
        signals.set_flag("race_started");
        assert!(signals.has_flag("race_started"));
        signals.clear_flag("race_started");
        assert!(!signals.has_flag("race_started"));
    }

    #[test]
    fn numeric_signals_overwrite() {
        let mut signals = WorldSignals::default();
        signals.set_integer("rank", 3);
        signals.set_integer("rank", 1);
        signals.set_scalar("paint_energy", 42.5);
        assert_eq!(signals.get_integer("rank"), Some(1));
        assert_eq!(signals.get_scalar("paint_energy"), Some(42.5));
        assert_eq!(signals.get_integer("level"), None);
    }
}
