//! ECS components for entities.
//!
//! Submodules overview:
//! - [`actor`] – control state, actor class and per-racer input/spawn data
//! - [`agent`] – navigation agent and AI runner target
//! - [`animation`] – animation state signal
//! - [`boxcollider`] – axis-aligned 3D box with sphere and ray queries
//! - [`camera`] – camera follow rig
//! - [`ground`] – ground surfaces, probes and sensed contact
//! - [`group`] – named groups, activation and level asset ownership
//! - [`locomotion`] – swerve/forward/gravity tuning and per-state velocity
//! - [`mapposition`] – world-space position; `z` is track progress
//! - [`rigidbody`] – velocity, named acceleration forces and impulses
//! - [`rotator`] – rotating obstacles and their push force
//! - [`stun`] – stun generation token and health
//! - [`trigger`] – finish line and obstacle trigger volumes
//! - [`tween`] – one-shot position interpolation

pub mod actor;
pub mod agent;
pub mod animation;
pub mod boxcollider;
pub mod camera;
pub mod ground;
pub mod group;
pub mod locomotion;
pub mod mapposition;
pub mod rigidbody;
pub mod rotator;
pub mod stun;
pub mod trigger;
pub mod tween;
