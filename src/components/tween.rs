//! One-shot position tweens.
//!
//! A [`TweenPosition`] carries an entity's
//! [`MapPosition`](super::mapposition::MapPosition) from `from` to `to` over
//! `duration` seconds and then stops. The finish timeline moves the camera
//! with it. The update lives in [`crate::systems::tween`].

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Shape of the interpolation curve over normalized time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
}

impl Easing {
    /// Parse the configuration name of an easing (`linear`, `quad_in`,
    /// `quad_out`, `quad_in_out`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "quad_in" => Some(Easing::QuadIn),
            "quad_out" => Some(Easing::QuadOut),
            "quad_in_out" => Some(Easing::QuadInOut),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadIn => "quad_in",
            Easing::QuadOut => "quad_out",
            Easing::QuadInOut => "quad_in_out",
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    pub from: Vec3,
    pub to: Vec3,
    /// Seconds.
    pub duration: f32,
    pub easing: Easing,
    /// Cleared once the tween reaches `to`.
    pub playing: bool,
    /// Seconds since the tween started.
    pub time: f32,
}

impl TweenPosition {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_names_round_trip() {
        for e in [Easing::Linear, Easing::QuadIn, Easing::QuadOut, Easing::QuadInOut] {
            assert_eq!(Easing::from_name(e.name()), Some(e));
        }
        assert_eq!(Easing::from_name(" Quad_Out "), Some(Easing::QuadOut));
        assert_eq!(Easing::from_name("elastic"), None);
    }
}
