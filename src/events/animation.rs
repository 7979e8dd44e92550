use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::components::animation::AnimationState;

/// Sent to the animation collaborator when an actor's animation state changes.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCmd {
    pub entity: Entity,
    pub state: AnimationState,
}
