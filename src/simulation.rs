//! Frame and fixed-tick driver.
//!
//! A [`Simulation`] owns the world and two schedules:
//!
//! - the fixed schedule runs once per physics tick (`1 / fixed_hz` seconds),
//!   sensing ground before anything consumes it
//! - the frame schedule runs once per [`Simulation::advance`] call and handles
//!   timers, AI steering, ranking and the camera
//!
//! Frame time is accumulated and spent in whole physics ticks, at most
//! `max_substeps` per frame. Any backlog beyond that is dropped.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::ai::{agent_follow_system, ai_controller_system};
use crate::systems::animation::update_animation_cmds;
use crate::systems::camera::camera_follow_system;
use crate::systems::collision::trigger_detector;
use crate::systems::ground::{ground_sensor_system, ground_support_system};
use crate::systems::locomotion::{locomotion_system, stun_gravity_system};
use crate::systems::movement::movement;
use crate::systems::push::push_zone_system;
use crate::systems::race::race_ranking_system;
use crate::systems::scheduler::poll_scheduler;
use crate::systems::time::update_world_time;
use crate::systems::tween::tween_mapposition_system;

/// Tolerance when comparing the accumulator against the tick length.
const TICK_EPSILON: f32 = 1.0e-6;

pub fn fixed_schedule() -> Schedule {
    let mut fixed = Schedule::default();
    fixed.add_systems(
        (
            ground_sensor_system,
            push_zone_system,
            locomotion_system,
            stun_gravity_system,
            agent_follow_system,
            movement,
            ground_support_system,
            trigger_detector,
        )
            .chain(),
    );
    fixed
}

pub fn frame_schedule() -> Schedule {
    let mut frame = Schedule::default();
    frame.add_systems(
        (
            poll_scheduler,
            ai_controller_system,
            race_ranking_system,
            camera_follow_system,
            tween_mapposition_system,
            update_animation_cmds,
        )
            .chain(),
    );
    frame
}

pub struct Simulation {
    pub world: World,
    fixed: Schedule,
    frame: Schedule,
    accumulator: f32,
}

impl Simulation {
    pub fn new(world: World) -> Self {
        Self {
            world,
            fixed: fixed_schedule(),
            frame: frame_schedule(),
            accumulator: 0.0,
        }
    }

    /// Advance by one frame of `dt` seconds. Returns the number of physics
    /// ticks that ran.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let scaled = update_world_time(&mut self.world, dt);
        self.accumulator += scaled;

        let fixed_dt = self.world.resource::<WorldTime>().fixed_delta;
        let max_substeps = self.world.resource::<GameConfig>().max_substeps.max(1);
        let mut ticks = 0;
        while self.accumulator + TICK_EPSILON >= fixed_dt && ticks < max_substeps {
            self.fixed.run(&mut self.world);
            self.accumulator -= fixed_dt;
            ticks += 1;
        }
        if self.accumulator + TICK_EPSILON >= fixed_dt {
            debug!(
                "dropping {:.3}s of simulation backlog",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        self.accumulator = self.accumulator.max(0.0);

        self.frame.run(&mut self.world);
        self.world.clear_trackers();
        ticks
    }

    /// Run frames of `dt` until `seconds` of simulated time have passed.
    ///
    /// Returns without running anything when the scaled step is not positive,
    /// and stops early if a frame fails to move the clock forward.
    pub fn run_for(&mut self, seconds: f32, dt: f32) {
        let step = dt * self.world.resource::<WorldTime>().time_scale;
        if step.is_nan() || step <= 0.0 {
            warn!("run_for ignored: frame step {step} is not positive");
            return;
        }
        let target = self.elapsed() + seconds;
        while self.elapsed() + TICK_EPSILON < target {
            let before = self.elapsed();
            self.advance(dt);
            if self.elapsed() <= before {
                warn!("run_for stalled at {before:.3}s: step {step} is below clock precision");
                break;
            }
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.world.resource::<WorldTime>().elapsed
    }
}
