use std::cmp::Ordering;

use bevy_ecs::prelude::{Entity, Resource};

/// Racers ordered by track progress.
///
/// Only [`race_ranking_system`](crate::systems::race::race_ranking_system)
/// reorders the roster; everyone else reads it. After a sort the racer with
/// the greatest progress sits at the end, so `rank = len - index` and that
/// racer has rank 1.
#[derive(Resource, Debug, Default, Clone)]
pub struct RaceRoster {
    pub entries: Vec<Entity>,
    /// The player-controlled actor whose rank is published.
    pub controlled: Option<Entity>,
}

impl RaceRoster {
    pub fn push(&mut self, entity: Entity) {
        if !self.entries.contains(&entity) {
            self.entries.push(entity);
        }
    }

    /// Sort ascending by progress. Equal progress keeps the current relative
    /// order; `-0.0` and `0.0` count as equal and NaN compares equal to
    /// everything.
    pub fn sort_by_progress(&mut self, mut progress: impl FnMut(Entity) -> f32) {
        self.entries.sort_by(|a, b| {
            progress(*a)
                .partial_cmp(&progress(*b))
                .unwrap_or(Ordering::Equal)
        });
    }

    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.entries.iter().position(|e| *e == entity)
    }

    pub fn rank_of(&self, entity: Entity) -> Option<usize> {
        self.index_of(entity).map(|index| self.entries.len() - index)
    }

    pub fn controlled_rank(&self) -> Option<usize> {
        self.controlled.and_then(|e| self.rank_of(e))
    }

    /// Drop racers that no longer exist.
    pub fn retain(&mut self, keep: impl FnMut(&Entity) -> bool) {
        self.entries.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;
    use rustc_hash::FxHashMap;

    fn spawn_n(world: &mut World, n: usize) -> Vec<Entity> {
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn rank_is_count_minus_index() {
        let mut world = World::new();
        let racers = spawn_n(&mut world, 4);
        let progress: FxHashMap<Entity, f32> =
            racers.iter().copied().zip([3.0, 1.0, 4.0, 2.0]).collect();

        let mut roster = RaceRoster::default();
        racers.iter().for_each(|e| roster.push(*e));
        roster.sort_by_progress(|e| progress[&e]);

        assert_eq!(roster.rank_of(racers[2]), Some(1));
        assert_eq!(roster.rank_of(racers[0]), Some(2));
        assert_eq!(roster.rank_of(racers[3]), Some(3));
        assert_eq!(roster.rank_of(racers[1]), Some(4));
    }

    #[test]
    fn equal_progress_keeps_insertion_order_across_sorts() {
        let mut world = World::new();
        let racers = spawn_n(&mut world, 5);
        let mut roster = RaceRoster::default();
        racers.iter().for_each(|e| roster.push(*e));

        for _ in 0..10 {
            roster.sort_by_progress(|_| 7.5);
            assert_eq!(roster.entries, racers);
        }

        // Signed zeros are equal progress too.
        let mut roster = RaceRoster::default();
        roster.push(racers[0]);
        roster.push(racers[1]);
        let zeros: FxHashMap<Entity, f32> =
            [(racers[0], 0.0), (racers[1], -0.0)].into_iter().collect();
        for _ in 0..10 {
            roster.sort_by_progress(|e| zeros[&e]);
            assert_eq!(roster.entries, vec![racers[0], racers[1]]);
        }
    }

    #[test]
    fn duplicate_push_is_ignored() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut roster = RaceRoster::default();
        roster.push(e);
        roster.push(e);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.controlled_rank(), None);
    }
}
