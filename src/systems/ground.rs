//! Ground sensing.
//!
//! Runs first in every fixed tick. For each actor with a [`GroundProbe`] it
//! answers two questions and stores the answers in [`GroundContact`]:
//!
//! - is the actor supported: a sphere of `check_radius` around its origin
//!   overlaps any [`GroundSurface`]
//! - is it standing on a rotating platform: the nearest surface hit by a
//!   downward ray of `ray_length` is a [`RotatingPlatform`]
//!
//! The push binding is rebuilt from scratch every tick. A miss clears it.
//!
//! [`ground_support_system`] stands in for collision response: actors do not
//! sink through ground surfaces.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::ground::{
    GroundContact, GroundProbe, GroundSurface, PushBinding, RotatingPlatform,
};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotator::Rotator;

pub fn ground_sensor_system(
    mut actors: Query<(&MapPosition, &GroundProbe, &mut GroundContact)>,
    surfaces: Query<
        (Entity, &MapPosition, &BoxCollider, Option<&RotatingPlatform>),
        With<GroundSurface>,
    >,
    rotators: Query<&Rotator>,
) {
    for (position, probe, mut contact) in actors.iter_mut() {
        let origin = position.pos;

        let grounded = surfaces.iter().any(|(_, surface_pos, collider, _)| {
            collider.intersects_sphere(surface_pos.pos, origin, probe.check_radius)
        });

        let mut nearest: Option<(f32, Entity, Option<&RotatingPlatform>)> = None;
        for (entity, surface_pos, collider, platform) in surfaces.iter() {
            if let Some(distance) = collider.raycast_down(surface_pos.pos, origin, probe.ray_length)
                && nearest.is_none_or(|(best, _, _)| distance < best)
            {
                nearest = Some((distance, entity, platform));
            }
        }

        let push = nearest.and_then(|(_, entity, platform)| {
            let platform = platform?;
            let rotator = rotators.get(platform.rotator).ok()?;
            Some(PushBinding {
                platform: entity,
                rotator: *rotator,
            })
        });

        if contact.grounded != grounded || contact.push != push {
            contact.grounded = grounded;
            contact.push = push;
        }
    }
}

/// Keep actors from sinking into ground surfaces.
///
/// Runs after integration. An actor whose collider bottom ended up below the
/// top of a surface it stands over is lifted back onto it and loses its
/// downward velocity.
pub fn ground_support_system(
    mut actors: Query<(&mut MapPosition, &BoxCollider, &mut RigidBody), With<GroundProbe>>,
    surfaces: Query<(&MapPosition, &BoxCollider), (With<GroundSurface>, Without<GroundProbe>)>,
) {
    for (mut position, collider, mut body) in actors.iter_mut() {
        let (actor_min, _) = collider.aabb(position.pos);
        let rest_offset = collider.size.y.abs() * 0.5 - collider.offset.y;
        let origin = position.pos;

        let support = surfaces
            .iter()
            .filter_map(|(surface_pos, surface)| {
                let (min, max) = surface.aabb(surface_pos.pos);
                let over = origin.x >= min.x
                    && origin.x <= max.x
                    && origin.z >= min.z
                    && origin.z <= max.z;
                (over && origin.y > min.y && actor_min.y < max.y).then_some(max.y)
            })
            .reduce(f32::max);

        if let Some(top) = support {
            position.pos.y = top + rest_offset;
            if body.velocity.y < 0.0 {
                body.velocity.y = 0.0;
            }
        }
    }
}
