//! ECS resources made available to systems.
//!
//! Overview
//! - `finish` – the in-flight finish timeline, if any
//! - `gameconfig` – tuning loaded from `config.ini`
//! - `level` – current level, its phase and the paint energy
//! - `levelcatalog` – per-level spawn and asset configuration
//! - `race` – racers ordered by progress and the controlled actor
//! - `scheduler` – timed callbacks keyed by generation/sequence tokens
//! - `ui` – what the UI layer should display
//! - `worldsignals` – key/value signals for external consumers
//! - `worldtime` – simulation time, frame delta and physics tick length
pub mod finish;
pub mod gameconfig;
pub mod level;
pub mod levelcatalog;
pub mod race;
pub mod scheduler;
pub mod ui;
pub mod worldsignals;
pub mod worldtime;
