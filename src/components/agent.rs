//! Navigation agent of AI racers.
//!
//! Pathfinding itself is an external collaborator; this component only
//! exposes the capability the race logic needs: set a destination and
//! enable/disable following. The stand-in follower in
//! [`crate::systems::ai::agent_follow_system`] walks straight toward the
//! destination.

use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct NavAgent {
    pub enabled: bool,
    pub destination: Option<Vec3>,
    /// Travel speed in world units per second.
    pub speed: f32,
    /// Distance under which the destination counts as reached.
    pub stopping_distance: f32,
}

impl NavAgent {
    pub fn new(speed: f32) -> Self {
        Self {
            enabled: true,
            destination: None,
            speed,
            stopping_distance: 0.1,
        }
    }

    pub fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Velocity that moves `from` toward the destination, zero when disabled,
    /// without a destination, or already there.
    pub fn steering_velocity(&self, from: Vec3) -> Vec3 {
        if !self.enabled {
            return Vec3::ZERO;
        }
        let Some(destination) = self.destination else {
            return Vec3::ZERO;
        };
        let to_target = destination - from;
        if to_target.length() <= self.stopping_distance {
            return Vec3::ZERO;
        }
        to_target.normalize_or_zero() * self.speed
    }
}

/// AI race behaviour: where to run to, and whether the run animation has
/// already been started.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct AiRunner {
    pub target: Vec3,
    pub started: bool,
}

impl AiRunner {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            started: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_agent_does_not_steer() {
        let mut agent = NavAgent::new(4.0);
        agent.set_destination(Vec3::new(0.0, 0.0, 10.0));
        agent.disable();
        assert_eq!(agent.steering_velocity(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn agent_steers_toward_destination_at_speed() {
        let mut agent = NavAgent::new(4.0);
        agent.set_destination(Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(agent.steering_velocity(Vec3::ZERO), Vec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn agent_stops_at_destination() {
        let mut agent = NavAgent::new(4.0);
        agent.set_destination(Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(
            agent.steering_velocity(Vec3::new(0.0, 0.0, 9.95)),
            Vec3::ZERO
        );
    }
}
