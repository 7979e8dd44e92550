//! Swerve race library.
//!
//! Locomotion, stun recovery, push zones and race progression for a
//! swerve-style racing game, built on bevy_ecs. Exposes the components,
//! resources, systems and events for the headless runner and integration
//! tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod simulation;
pub mod systems;
