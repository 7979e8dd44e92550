//! Per-actor locomotion tuning and the velocity rules of each control state.
//!
//! The [`Locomotion`] component holds the swerve/forward/gravity tuning of a
//! player racer plus the residual push left behind by the last impact. The
//! [`locomotion_system`](crate::systems::locomotion::locomotion_system) calls
//! [`Locomotion::velocity_for`] every fixed tick.

use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::components::actor::ControlState;

/// Multiplier applied to the fall acceleration while airborne.
pub const FALL_GRAVITY_MULTIPLIER: f32 = 75.0;

/// Fall acceleration for a given ground state: zero while grounded.
pub fn fall_gravity(grounded: bool, gravity_amount: f32) -> f32 {
    if grounded {
        0.0
    } else {
        gravity_amount * FALL_GRAVITY_MULTIPLIER
    }
}

/// Locomotion tuning and derived per-tick state.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Locomotion {
    /// Forward speed while grounded.
    pub forward_speed_amount: f32,
    /// Lateral speed factor applied to the swerve input.
    pub swerve_speed: f32,
    /// Absolute bound on the lateral velocity.
    pub max_swerve: f32,
    /// Base fall acceleration (scaled by [`FALL_GRAVITY_MULTIPLIER`] while airborne).
    pub gravity_amount: f32,
    /// Current fall acceleration, refreshed from ground contact.
    pub gravity: f32,
    /// 1.0 while grounded, 0.0 while airborne.
    pub forward_factor: f32,
    /// Push direction times push force left by the last impact.
    pub residual_push: Vec3,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self::new(10.0, 0.5, 1.0, 9.8)
    }
}

impl Locomotion {
    pub fn new(
        forward_speed_amount: f32,
        swerve_speed: f32,
        max_swerve: f32,
        gravity_amount: f32,
    ) -> Self {
        Self {
            forward_speed_amount,
            swerve_speed,
            max_swerve,
            gravity_amount,
            gravity: 0.0,
            forward_factor: 1.0,
            residual_push: Vec3::ZERO,
        }
    }

    /// Refresh gravity and forward factor from the sensed ground contact.
    pub fn set_grounded(&mut self, grounded: bool) {
        self.gravity = fall_gravity(grounded, self.gravity_amount);
        self.forward_factor = if grounded { 1.0 } else { 0.0 };
    }

    /// Velocity while `Moving`.
    pub fn moving_velocity(&self, move_factor_x: f32, dt: f32) -> Vec3 {
        let max = self.max_swerve.abs();
        let swerve = (dt * self.swerve_speed * move_factor_x).clamp(-max, max);
        Vec3::new(
            swerve,
            -self.gravity * dt,
            self.forward_factor * self.forward_speed_amount * dt,
        )
    }

    /// Velocity this controller produces for the given state, or `None` when
    /// the state is driven externally (`Suspended`).
    pub fn velocity_for(&self, state: ControlState, move_factor_x: f32, dt: f32) -> Option<Vec3> {
        match state {
            ControlState::Idle => Some(self.residual_push),
            ControlState::Moving => Some(self.moving_velocity(move_factor_x, dt)),
            ControlState::Suspended => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;
    const DT: f32 = 0.02;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn fall_gravity_is_zero_on_ground() {
        assert_eq!(fall_gravity(true, 9.8), 0.0);
        assert!((fall_gravity(false, 9.8) - 735.0).abs() < 1e-3);
    }

    #[test]
    fn grounded_moving_velocity_goes_forward() {
        let mut loco = Locomotion::default();
        loco.set_grounded(true);
        let v = loco.moving_velocity(0.0, DT);
        assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, 10.0 * DT)));
    }

    #[test]
    fn airborne_moving_velocity_falls_and_stops_forward() {
        let mut loco = Locomotion::default();
        loco.set_grounded(false);
        let v = loco.moving_velocity(0.0, DT);
        assert_eq!(v.z, 0.0);
        assert!((v.y + 9.8 * 75.0 * DT).abs() < 1e-3);
    }

    #[test]
    fn swerve_is_clamped() {
        let mut loco = Locomotion::default();
        loco.set_grounded(true);
        let v = loco.moving_velocity(10_000.0, DT);
        assert_eq!(v.x, 1.0);
        let v = loco.moving_velocity(-10_000.0, DT);
        assert_eq!(v.x, -1.0);
        let v = loco.moving_velocity(20.0, DT);
        assert!((v.x - 20.0 * 0.5 * DT).abs() < EPSILON);
    }

    #[test]
    fn idle_velocity_is_residual_push() {
        let mut loco = Locomotion::default();
        assert_eq!(loco.velocity_for(ControlState::Idle, 1.0, DT), Some(Vec3::ZERO));
        loco.residual_push = Vec3::new(0.0, 0.0, -3.0);
        assert_eq!(
            loco.velocity_for(ControlState::Idle, 1.0, DT),
            Some(Vec3::new(0.0, 0.0, -3.0))
        );
    }

    #[test]
    fn suspended_is_driven_externally() {
        let loco = Locomotion::default();
        assert_eq!(loco.velocity_for(ControlState::Suspended, 1.0, DT), None);
    }
}
