//! Per-tick locomotion.
//!
//! [`locomotion_system`] turns each racer's control state into a velocity:
//!
//! - `Idle`: the residual push from the last impact (zero after a restart)
//! - `Moving`: swerve input, fall gravity and forward speed, forward speed
//!   only while grounded
//! - `Suspended`: untouched; the impact impulse and [`stun_gravity_system`]
//!   drive the body
//!
//! Both systems run after the ground sensor in the fixed schedule.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::actor::{ControlState, SwerveInput};
use crate::components::animation::{AnimationState, Animator};
use crate::components::ground::GroundContact;
use crate::components::locomotion::{Locomotion, fall_gravity};
use crate::components::rigidbody::RigidBody;
use crate::events::animation::AnimationCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::set_animation_state;

pub const STUN_GRAVITY_FORCE: &str = "stun_gravity";

pub fn locomotion_system(
    mut query: Query<(
        Entity,
        &ControlState,
        &GroundContact,
        &mut Locomotion,
        &mut RigidBody,
        Option<&SwerveInput>,
        Option<&mut Animator>,
    )>,
    time: Res<WorldTime>,
    mut anim_cmds: MessageWriter<AnimationCmd>,
) {
    let dt = time.fixed_delta;
    for (entity, state, contact, mut locomotion, mut body, input, animator) in query.iter_mut() {
        locomotion.set_grounded(contact.grounded);

        let move_x = input.map(|i| i.move_factor_x).unwrap_or(0.0);
        if let Some(velocity) = locomotion.velocity_for(*state, move_x, dt) {
            body.velocity = velocity;
        }

        let Some(mut animator) = animator else {
            continue;
        };
        let desired = match state {
            ControlState::Moving => AnimationState::Moving,
            ControlState::Idle | ControlState::Suspended => AnimationState::Idle,
        };
        // Win is held until the racer moves again.
        if animator.state == AnimationState::Win && desired != AnimationState::Moving {
            continue;
        }
        if animator.state != desired {
            set_animation_state(entity, &mut animator, desired, &mut anim_cmds);
        }
    }
}

/// Extra fall acceleration on stunned racers while airborne.
pub fn stun_gravity_system(
    mut query: Query<(
        &ControlState,
        &GroundContact,
        &mut RigidBody,
        Option<&Locomotion>,
    )>,
    config: Res<GameConfig>,
) {
    for (state, contact, mut body, locomotion) in query.iter_mut() {
        if *state == ControlState::Suspended {
            let amount = locomotion
                .map(|l| l.gravity_amount)
                .unwrap_or(config.gravity);
            let g = fall_gravity(contact.grounded, amount);
            body.add_force(STUN_GRAVITY_FORCE, Vec3::new(0.0, -g, 0.0));
        } else if body.get_force(STUN_GRAVITY_FORCE).is_some() {
            body.remove_force(STUN_GRAVITY_FORCE);
        }
    }
}
