use bevy_ecs::prelude::Component;

/// Stun bookkeeping of an actor.
///
/// `generation` only grows. Every impact, finish or restart bumps it, and a
/// scheduled recovery check only acts when the generation it captured is
/// still current.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stun {
    pub generation: u64,
}

impl Stun {
    /// Invalidate every pending check and return the new generation.
    pub fn bump(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Health pool. When it is depleted a player racer breaks out of any stun.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_invalidates_previous_generation() {
        let mut stun = Stun::default();
        let first = stun.bump();
        assert!(stun.is_current(first));
        let second = stun.bump();
        assert!(!stun.is_current(first));
        assert!(stun.is_current(second));
    }
}
