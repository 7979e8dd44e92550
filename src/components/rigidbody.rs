//! Racer body: velocity, mass and named continuous forces.
//!
//! Forces are keyed by name so the system that owns one (push zones, stun
//! gravity) can rewrite or drop it every tick without touching the others.
//!
//! Two flags control how [`movement`](crate::systems::movement::movement)
//! treats the body:
//! - `frozen`: the body does not move at all (movement disabled)
//! - `kinematic`: forces are ignored and only velocity is integrated, as for
//!   an AI racer steered by its agent

use bevy_ecs::prelude::Component;
use glam::Vec3;
use rustc_hash::FxHashMap;

#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// World units per second.
    pub velocity: Vec3,
    /// Continuous accelerations by name, summed every tick.
    pub forces: FxHashMap<String, Vec3>,
    pub mass: f32,
    pub frozen: bool,
    pub kinematic: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// At rest, unit mass, no forces.
    pub fn new() -> Self {
        Self {
            velocity: Vec3::ZERO,
            forces: FxHashMap::default(),
            mass: 1.0,
            frozen: false,
            kinematic: false,
        }
    }

    /// Non-positive masses fall back to 1.0.
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = if mass > 0.0 { mass } else { 1.0 };
        self
    }

    pub fn with_kinematic(mut self, kinematic: bool) -> Self {
        self.kinematic = kinematic;
        self
    }

    /// Set a named force, replacing any previous value under that name.
    pub fn add_force(&mut self, name: &str, value: Vec3) {
        match self.forces.get_mut(name) {
            Some(force) => *force = value,
            None => {
                self.forces.insert(name.to_owned(), value);
            }
        }
    }

    pub fn remove_force(&mut self, name: &str) {
        self.forces.remove(name);
    }

    pub fn get_force(&self, name: &str) -> Option<Vec3> {
        self.forces.get(name).copied()
    }

    pub fn total_acceleration(&self) -> Vec3 {
        self.forces.values().copied().sum()
    }

    /// `velocity += impulse / mass`.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse / self.mass;
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Drop all velocity and forces.
    pub fn clear(&mut self) {
        self.velocity = Vec3::ZERO;
        self.forces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn new_body_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec3::ZERO);
        assert!(rb.forces.is_empty());
        assert_eq!(rb.mass, 1.0);
        assert!(!rb.frozen && !rb.kinematic);
    }

    #[test]
    fn with_mass_rejects_non_positive() {
        assert_eq!(RigidBody::new().with_mass(0.0).mass, 1.0);
        assert_eq!(RigidBody::new().with_mass(-3.0).mass, 1.0);
        assert_eq!(RigidBody::new().with_mass(1000.0).mass, 1000.0);
    }

    #[test]
    fn named_force_is_replaced_not_stacked() {
        let mut rb = RigidBody::new();
        rb.add_force("push", Vec3::new(0.0, 0.0, 1.0));
        rb.add_force("push", Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(rb.forces.len(), 1);
        assert_eq!(rb.get_force("push"), Some(Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn total_acceleration_sums_forces() {
        let mut rb = RigidBody::new();
        rb.add_force("stun_gravity", Vec3::new(0.0, -10.0, 0.0));
        rb.add_force("push", Vec3::new(5.0, 0.0, 0.0));
        assert!(vec_approx_eq(
            rb.total_acceleration(),
            Vec3::new(5.0, -10.0, 0.0)
        ));
        rb.remove_force("push");
        rb.remove_force("missing");
        assert!(vec_approx_eq(
            rb.total_acceleration(),
            Vec3::new(0.0, -10.0, 0.0)
        ));
    }

    #[test]
    fn impulse_respects_mass() {
        let mut rb = RigidBody::new().with_mass(1000.0);
        rb.apply_impulse(Vec3::new(0.0, 5000.0, 0.0));
        assert!(vec_approx_eq(rb.velocity, Vec3::new(0.0, 5.0, 0.0)));
    }

    #[test]
    fn clear_drops_motion_but_keeps_flags() {
        let mut rb = RigidBody::new().with_kinematic(true);
        rb.velocity = Vec3::ONE;
        rb.add_force("push", Vec3::X);
        rb.freeze();
        rb.clear();
        assert_eq!(rb.velocity, Vec3::ZERO);
        assert!(rb.forces.is_empty());
        assert!(rb.frozen && rb.kinematic);
    }
}
