use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Camera rig that follows the controlled actor along the track.
///
/// While `enabled`, the rig eases toward `(0, offset.y, target.z + offset.z)`
/// every frame. The finish timeline disables it for its camera move; a level
/// restart enables it again.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CameraFollow {
    pub offset: Vec3,
    /// Lerp rate per second.
    pub follow_time: f32,
    pub enabled: bool,
}

impl CameraFollow {
    pub fn new(offset: Vec3, follow_time: f32) -> Self {
        Self {
            offset,
            follow_time,
            enabled: true,
        }
    }

    /// Point the rig wants to sit at for a target position.
    pub fn desired_position(&self, target: Vec3) -> Vec3 {
        Vec3::new(0.0, self.offset.y, target.z + self.offset.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desired_position_ignores_lateral_and_vertical_target_motion() {
        let follow = CameraFollow::new(Vec3::new(3.0, 8.0, -10.0), 10.0);
        assert_eq!(
            follow.desired_position(Vec3::new(5.0, -2.0, 20.0)),
            Vec3::new(0.0, 8.0, 10.0)
        );
    }
}
