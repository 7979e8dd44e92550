use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Animation signal consumed by the external animation collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    #[default]
    Idle,
    Moving,
    Win,
}

/// Current animation signal of an actor.
///
/// Written through [`crate::systems::animation::set_animation_state`], which
/// only emits an [`AnimationCmd`](crate::events::animation::AnimationCmd) when
/// the state actually changes.
#[derive(Debug, Clone, Copy, Default, Component, PartialEq, Eq)]
pub struct Animator {
    pub state: AnimationState,
}
