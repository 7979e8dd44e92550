//! Push zones.
//!
//! While the ground sensor reports a [`PushBinding`](crate::components::ground::PushBinding),
//! the actor carries a continuous `"push"` force derived from the rotating
//! platform. The force is removed the first tick the binding disappears.

use bevy_ecs::prelude::*;

use crate::components::ground::GroundContact;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub const PUSH_FORCE: &str = "push";

pub fn push_zone_system(
    mut query: Query<(&GroundContact, &mut RigidBody)>,
    time: Res<WorldTime>,
) {
    let dt = time.fixed_delta;
    for (contact, mut body) in query.iter_mut() {
        match contact.push {
            Some(binding) => body.add_force(PUSH_FORCE, binding.rotator.push_force(dt)),
            None => {
                if body.get_force(PUSH_FORCE).is_some() {
                    body.remove_force(PUSH_FORCE);
                }
            }
        }
    }
}
