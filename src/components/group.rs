use bevy_ecs::prelude::Component;

/// Tag component for grouping entities by name (level asset groups, the
/// painting stage group, ...).
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Whether a group root is currently enabled in the scene.
///
/// The visibility of level asset groups and the activation of the
/// next-stage group are both expressed with this flag; rendering reads it.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Active(pub bool);

/// Marks a group root as the asset group of a level (1-based index).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelAssets {
    pub level: usize,
}
