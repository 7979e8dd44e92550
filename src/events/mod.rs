//! Event types exchanged across systems.
//!
//! Events are triggered on observers (`commands.trigger`) and handled
//! immediately. Outbound notifications for external collaborators are
//! [`Message`](bevy_ecs::message::Message)s instead, buffered until the
//! consumer drains them.
//!
//! Submodules:
//! - [`animation`] – animation state changes for the animation collaborator
//! - [`collision`] – actor/trigger contact notifications
//! - [`race`] – start, finish line, level advance and restart requests
//! - [`stun`] – impacts and damage
//! - [`timer`] – scheduler callbacks carrying their generation/sequence token
pub mod animation;
pub mod collision;
pub mod race;
pub mod stun;
pub mod timer;
