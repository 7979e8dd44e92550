use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate one fixed tick.
///
/// Frozen bodies do not move. Dynamic bodies accumulate their forces
/// into velocity first; kinematic bodies move at whatever velocity they were
/// given.
pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    let dt = time.fixed_delta;
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        if !rigidbody.kinematic {
            let accel = rigidbody.total_acceleration();
            if accel != Vec3::ZERO {
                rigidbody.velocity += accel * dt;
            }
        }
        let delta = rigidbody.velocity * dt;
        if delta != Vec3::ZERO {
            position.pos += delta;
        }
    }
}
