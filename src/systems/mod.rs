//! Race systems and observers.
//!
//! Fixed-tick systems (in order): [`ground`] sensing, [`push`],
//! [`locomotion`] and stun gravity, [`ai`] steering, [`movement`], [`ground`]
//! support, [`collision`] triggers.
//!
//! Frame systems: [`scheduler`] polling, [`ai`] control, [`race`] ranking,
//! [`camera`] follow, [`tween`], [`animation`] message rotation.
//!
//! Submodules overview
//! - [`ai`] – AI destination, agent steering and restart
//! - [`animation`] – animation state changes as messages
//! - [`camera`] – camera follow
//! - [`collision`] – trigger enter detection and routing
//! - [`finish`] – finish timeline stages
//! - [`ground`] – ground sensing and push bindings
//! - [`level`] – finish line, level advance, restart
//! - [`locomotion`] – control state to velocity, stun gravity
//! - [`movement`] – integrate forces and velocities
//! - [`push`] – rotating platform push force
//! - [`race`] – race start and ranking
//! - [`scheduler`] – dispatch due timed callbacks
//! - [`stun`] – impacts, recovery checks, damage
//! - [`time`] – update simulation time
//! - [`tween`] – position tweens

pub mod ai;
pub mod animation;
pub mod camera;
pub mod collision;
pub mod finish;
pub mod ground;
pub mod level;
pub mod locomotion;
pub mod movement;
pub mod push;
pub mod race;
pub mod scheduler;
pub mod stun;
pub mod time;
pub mod tween;
