//! Animation signal plumbing.
//!
//! The race core never plays animations. It records the desired
//! [`AnimationState`] on each actor's [`Animator`] and writes an
//! [`AnimationCmd`] message whenever that state changes, so the consumer sees
//! one message per transition rather than one per tick.

use bevy_ecs::prelude::*;

use crate::components::animation::{AnimationState, Animator};
use crate::events::animation::AnimationCmd;

/// Set an actor's animation state, writing an [`AnimationCmd`] only when it
/// changes. Returns whether a message was written.
pub fn set_animation_state(
    entity: Entity,
    animator: &mut Animator,
    state: AnimationState,
    writer: &mut MessageWriter<AnimationCmd>,
) -> bool {
    if animator.state == state {
        return false;
    }
    animator.state = state;
    writer.write(AnimationCmd { entity, state });
    true
}

/// Rotate the [`AnimationCmd`] double buffer once per frame.
pub fn update_animation_cmds(mut msgs: ResMut<Messages<AnimationCmd>>) {
    msgs.update();
}
