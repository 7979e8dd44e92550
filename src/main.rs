//! Swerve race headless runner.
//!
//! Builds a short track with a rotating platform, an obstacle and a finish
//! line, then plays a scripted cycle through the level catalog. The painting
//! level spends some paint and advances. The sorting level starts the race
//! with randomly swerving input and ends with the finish timeline. Ranks and
//! phase transitions are logged.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --ai 3 --seconds 20 --seed 7
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec3;
use log::{error, info, warn};

use swerverace::components::actor::SwerveInput;
use swerverace::components::mapposition::MapPosition;
use swerverace::components::rotator::{RotationAxis, Rotator};
use swerverace::components::trigger::Obstacle;
use swerverace::error::SetupError;
use swerverace::events::race::{
    ActivateMovementEvent, ConsumePaintEvent, FinishLevelEvent, ShowWinEvent,
};
use swerverace::game::{
    build_world, finalize_world, spawn_ai, spawn_finish_line, spawn_ground, spawn_obstacle,
    spawn_player, spawn_rotating_platform,
};
use swerverace::resources::finish::FinishTimeline;
use swerverace::resources::gameconfig::GameConfig;
use swerverace::resources::level::{LevelPhase, LevelState};
use swerverace::resources::levelcatalog::LevelCatalog;
use swerverace::resources::race::RaceRoster;
use swerverace::resources::ui::UiPanels;
use swerverace::simulation::Simulation;

/// Swerve race headless runner
#[derive(Parser)]
#[command(version, about = "Runs a scripted swerve race without rendering")]
struct Cli {
    /// INI configuration file (defaults are used if it cannot be read).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON level catalog (built-in two-level catalog if omitted).
    #[arg(long, value_name = "PATH")]
    levels: Option<PathBuf>,

    /// Simulated seconds to run before giving up on the race.
    #[arg(long, default_value_t = 40.0)]
    seconds: f32,

    /// Number of AI racers.
    #[arg(long, default_value_t = 3)]
    ai: usize,

    /// Seed for the swerve input.
    #[arg(long)]
    seed: Option<u64>,

    /// Length of the track from spawn to finish line.
    #[arg(long, default_value_t = 4.0)]
    track_length: f32,

    /// Frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0, value_parser = parse_positive_seconds)]
    dt: f32,
}

fn parse_positive_seconds(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} is not a positive number of seconds"))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SetupError> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using default configuration");
    }
    let catalog = match &cli.levels {
        Some(path) => LevelCatalog::load(path)?,
        None => LevelCatalog::default(),
    };

    let mut world = build_world(config, catalog)?;
    let spawn = world.resource::<LevelCatalog>().levels[0].spawn;
    let finish_z = spawn.z + cli.track_length.max(1.0);
    build_track(&mut world, spawn, finish_z);
    let player = spawn_player(&mut world, spawn);
    for i in 0..cli.ai {
        let lane = (i as f32 + 1.0) * if i % 2 == 0 { 1.5 } else { -1.5 };
        let start = Vec3::new(lane, spawn.y, spawn.z);
        spawn_ai(&mut world, start, Vec3::new(lane, spawn.y, finish_z + 2.0));
    }
    finalize_world(&mut world)?;

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut sim = Simulation::new(world);
    let levels = sim.world.resource::<LevelState>().level_count;

    for _ in 0..levels {
        let (current, phase) = {
            let level = sim.world.resource::<LevelState>();
            (level.current, level.phase)
        };
        match phase {
            LevelPhase::Painting => play_painting_level(&mut sim, cli.dt),
            LevelPhase::Sorting => play_race(&mut sim, player, &mut rng, cli),
        }
        // With auto_finish_level the timeline already advanced the level.
        if sim.world.resource::<LevelState>().current == current {
            sim.world.trigger(FinishLevelEvent);
            sim.world.flush();
        }
    }

    let level = sim.world.resource::<LevelState>();
    info!(
        "cycle complete: back at level {}, paint energy {}",
        level.current, level.paint_energy
    );
    Ok(())
}

fn build_track(world: &mut World, spawn: Vec3, finish_z: f32) {
    let length = finish_z - spawn.z + 10.0;
    let ground_center = Vec3::new(0.0, spawn.y - 1.0, spawn.z + length / 2.0 - 2.0);
    spawn_ground(world, ground_center, Vec3::new(12.0, 1.0, length));

    let platform_z = spawn.z + (finish_z - spawn.z) * 0.3;
    spawn_rotating_platform(
        world,
        Vec3::new(0.0, spawn.y - 0.9, platform_z),
        Vec3::new(4.0, 1.0, 1.0),
        Rotator::new(RotationAxis::Z, 1, 0.2),
    );
    spawn_obstacle(
        world,
        Vec3::new(0.0, spawn.y, spawn.z + (finish_z - spawn.z) * 0.6),
        Vec3::new(1.0, 1.0, 0.2),
        Obstacle::new(Vec3::new(0.0, 2.0, -1.0), 0.5),
    );
    spawn_finish_line(
        world,
        Vec3::new(0.0, spawn.y, finish_z),
        Vec3::new(12.0, 2.0, 0.5),
    );
}

fn play_painting_level(sim: &mut Simulation, dt: f32) {
    for _ in 0..5 {
        sim.world.trigger(ConsumePaintEvent { amount: 12.5 });
        sim.world.flush();
        sim.run_for(0.5, dt);
    }
    let energy = sim.world.resource::<LevelState>().paint_energy;
    info!("painting level done, {} paint left", energy);
}

fn play_race(sim: &mut Simulation, player: Entity, rng: &mut fastrand::Rng, cli: &Cli) {
    sim.world.trigger(ActivateMovementEvent);
    sim.world.flush();

    let mut next_report = 1.0;
    let mut timeline_seen = false;
    let start = sim.elapsed();
    while sim.elapsed() - start < cli.seconds {
        if let Some(mut input) = sim.world.get_mut::<SwerveInput>(player) {
            input.move_factor_x = rng.f32() * 2.0 - 1.0;
        }
        sim.advance(cli.dt);

        let running = sim.world.resource::<FinishTimeline>().is_running();
        if running {
            timeline_seen = true;
        } else if timeline_seen {
            sim.world.trigger(ShowWinEvent);
            sim.world.flush();
            break;
        }

        if sim.elapsed() - start >= next_report {
            next_report += 1.0;
            let rank = &sim.world.resource::<UiPanels>().rank_text;
            let racers = sim.world.resource::<RaceRoster>().len();
            let z = sim
                .world
                .get::<MapPosition>(player)
                .map(|p| p.progress())
                .unwrap_or_default();
            info!("t={:.1}s player z={:.2} rank {}/{}", sim.elapsed(), z, rank, racers);
        }
    }
    if !timeline_seen {
        warn!("race timed out before the player finished");
    }
}
