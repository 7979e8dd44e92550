//! Game configuration resource.
//!
//! Tuning for locomotion, stun recovery, the race flow and the camera,
//! loaded from an INI configuration file. Missing values keep their
//! defaults, so an empty or partial file is valid.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! fixed_hz = 50
//! max_substeps = 8
//!
//! [movement]
//! forward_speed = 10
//! swerve_speed = 0.5
//! max_swerve = 1
//! gravity = 9.8
//! ground_check_radius = 0.5
//! ground_ray_length = 1
//!
//! [stun]
//! recovery_padding = 1
//! recheck_interval = 0.25
//! ai_impulse_scale = 5000
//! ai_mass = 1000
//!
//! [race]
//! paint_energy = 100
//! camera_time = 2
//! paint_point = 0, 12, 40
//! stage_group = painter
//! auto_finish_level = false
//!
//! [camera]
//! offset = 0, 8, -10
//! follow_time = 10
//! easing = linear
//!
//! [ai]
//! agent_speed = 5
//! restart_time = 1
//! ```

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec3;
use log::{info, warn};

use crate::components::tween::Easing;
use crate::error::SetupError;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Physics tick rate in Hz.
    pub fixed_hz: f32,
    /// Upper bound on physics ticks run per frame.
    pub max_substeps: u32,

    pub forward_speed: f32,
    pub swerve_speed: f32,
    pub max_swerve: f32,
    pub gravity: f32,
    pub ground_check_radius: f32,
    pub ground_ray_length: f32,

    /// Added to the base stun duration before the recovery check.
    pub recovery_padding: f32,
    /// Delay before re-checking an actor that was airborne at its recovery check.
    pub recheck_interval: f32,
    /// Impulse multiplier for AI racers.
    pub ai_impulse_scale: f32,
    pub ai_mass: f32,

    /// Paint energy granted at the start of a cycle.
    pub paint_energy: f32,
    /// Stage duration of the finish timeline.
    pub camera_time: f32,
    /// Camera destination of the finish timeline.
    pub paint_point: Vec3,
    /// Group activated at the end of the finish timeline.
    pub stage_group: String,
    /// Advance the level as soon as the finish timeline completes.
    pub auto_finish_level: bool,

    pub camera_offset: Vec3,
    pub camera_follow_time: f32,
    /// Easing of the finish timeline camera move.
    pub camera_easing: Easing,

    pub agent_speed: f32,
    /// Delay before a restarted AI racer starts running again.
    pub ai_restart_time: f32,

    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            fixed_hz: 50.0,
            max_substeps: 8,
            forward_speed: 10.0,
            swerve_speed: 0.5,
            max_swerve: 1.0,
            gravity: 9.8,
            ground_check_radius: 0.5,
            ground_ray_length: 1.0,
            recovery_padding: 1.0,
            recheck_interval: 0.25,
            ai_impulse_scale: 5000.0,
            ai_mass: 1000.0,
            paint_energy: 100.0,
            camera_time: 2.0,
            paint_point: Vec3::new(0.0, 12.0, 40.0),
            stage_group: "painter".to_string(),
            auto_finish_level: false,
            camera_offset: Vec3::new(0.0, 8.0, -10.0),
            camera_follow_time: 10.0,
            camera_easing: Easing::Linear,
            agent_speed: 5.0,
            ai_restart_time: 1.0,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), SetupError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(SetupError::Config)?;
        self.apply_ini(&config);
        info!(
            "Loaded config {:?}: {} Hz, forward={}, camera_time={}, stage_group={}",
            self.config_path, self.fixed_hz, self.forward_speed, self.camera_time, self.stage_group
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), SetupError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(SetupError::Config)?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [simulation] section
        read_f32(config, "simulation", "fixed_hz", &mut self.fixed_hz);
        if let Some(substeps) = config.getuint("simulation", "max_substeps").ok().flatten() {
            self.max_substeps = substeps.max(1) as u32;
        }

        // [movement] section
        read_f32(config, "movement", "forward_speed", &mut self.forward_speed);
        read_f32(config, "movement", "swerve_speed", &mut self.swerve_speed);
        read_f32(config, "movement", "max_swerve", &mut self.max_swerve);
        read_f32(config, "movement", "gravity", &mut self.gravity);
        read_f32(config, "movement", "ground_check_radius", &mut self.ground_check_radius);
        read_f32(config, "movement", "ground_ray_length", &mut self.ground_ray_length);

        // [stun] section
        read_f32(config, "stun", "recovery_padding", &mut self.recovery_padding);
        read_f32(config, "stun", "recheck_interval", &mut self.recheck_interval);
        read_f32(config, "stun", "ai_impulse_scale", &mut self.ai_impulse_scale);
        read_f32(config, "stun", "ai_mass", &mut self.ai_mass);

        // [race] section
        read_f32(config, "race", "paint_energy", &mut self.paint_energy);
        read_f32(config, "race", "camera_time", &mut self.camera_time);
        read_vec3(config, "race", "paint_point", &mut self.paint_point);
        if let Some(group) = config.get("race", "stage_group") {
            self.stage_group = group;
        }
        if let Some(auto) = config.getbool("race", "auto_finish_level").ok().flatten() {
            self.auto_finish_level = auto;
        }

        // [camera] section
        read_vec3(config, "camera", "offset", &mut self.camera_offset);
        read_f32(config, "camera", "follow_time", &mut self.camera_follow_time);
        if let Some(name) = config.get("camera", "easing") {
            match Easing::from_name(&name) {
                Some(easing) => self.camera_easing = easing,
                None => warn!("Ignoring [camera] easing: unknown easing {:?}", name),
            }
        }

        // [ai] section
        read_f32(config, "ai", "agent_speed", &mut self.agent_speed);
        read_f32(config, "ai", "restart_time", &mut self.ai_restart_time);
    }

    /// Save configuration to the INI file at `config_path`.
    pub fn save_to_file(&self) -> Result<(), SetupError> {
        self.save_to(&self.config_path)
    }

    fn save_to(&self, path: &Path) -> Result<(), SetupError> {
        let mut config = Ini::new();
        let fmt_vec = |v: Vec3| Some(format!("{}, {}, {}", v.x, v.y, v.z));

        config.set("simulation", "fixed_hz", Some(self.fixed_hz.to_string()));
        config.set("simulation", "max_substeps", Some(self.max_substeps.to_string()));

        config.set("movement", "forward_speed", Some(self.forward_speed.to_string()));
        config.set("movement", "swerve_speed", Some(self.swerve_speed.to_string()));
        config.set("movement", "max_swerve", Some(self.max_swerve.to_string()));
        config.set("movement", "gravity", Some(self.gravity.to_string()));
        config.set("movement", "ground_check_radius", Some(self.ground_check_radius.to_string()));
        config.set("movement", "ground_ray_length", Some(self.ground_ray_length.to_string()));

        config.set("stun", "recovery_padding", Some(self.recovery_padding.to_string()));
        config.set("stun", "recheck_interval", Some(self.recheck_interval.to_string()));
        config.set("stun", "ai_impulse_scale", Some(self.ai_impulse_scale.to_string()));
        config.set("stun", "ai_mass", Some(self.ai_mass.to_string()));

        config.set("race", "paint_energy", Some(self.paint_energy.to_string()));
        config.set("race", "camera_time", Some(self.camera_time.to_string()));
        config.set("race", "paint_point", fmt_vec(self.paint_point));
        config.set("race", "stage_group", Some(self.stage_group.clone()));
        config.set("race", "auto_finish_level", Some(self.auto_finish_level.to_string()));

        config.set("camera", "offset", fmt_vec(self.camera_offset));
        config.set("camera", "follow_time", Some(self.camera_follow_time.to_string()));
        config.set("camera", "easing", Some(self.camera_easing.name().to_string()));

        config.set("ai", "agent_speed", Some(self.agent_speed.to_string()));
        config.set("ai", "restart_time", Some(self.ai_restart_time.to_string()));

        config
            .write(path)
            .map_err(|e| SetupError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        info!("Saved config to {:?}", path);
        Ok(())
    }
}

fn read_f32(config: &Ini, section: &str, key: &str, target: &mut f32) {
    match config.getfloat(section, key) {
        Ok(Some(value)) => *target = value as f32,
        Ok(None) => {}
        Err(e) => warn!("Ignoring [{}] {}: {}", section, key, e),
    }
}

fn read_vec3(config: &Ini, section: &str, key: &str, target: &mut Vec3) {
    let Some(raw) = config.get(section, key) else {
        return;
    };
    match parse_vec3(&raw) {
        Some(v) => *target = v,
        None => warn!("Ignoring [{}] {}: expected `x, y, z`, got {:?}", section, key, raw),
    }
}

/// Parse `"x, y, z"`.
pub fn parse_vec3(raw: &str) -> Option<Vec3> {
    let parts: Vec<f32> = raw
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [x, y, z] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let config = GameConfig::new();
        assert_eq!(config.forward_speed, 10.0);
        assert_eq!(config.swerve_speed, 0.5);
        assert_eq!(config.max_swerve, 1.0);
        assert_eq!(config.gravity, 9.8);
        assert_eq!(config.recovery_padding, 1.0);
        assert_eq!(config.paint_energy, 100.0);
        assert_eq!(config.camera_time, 2.0);
        assert!(!config.auto_finish_level);
    }

    #[test]
    fn partial_ini_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[movement]\nforward_speed = 12.5\n\n[race]\nauto_finish_level = true\npaint_point = 1, 2, 3\n")
            .unwrap();
        assert_eq!(config.forward_speed, 12.5);
        assert_eq!(config.swerve_speed, 0.5);
        assert!(config.auto_finish_level);
        assert_eq!(config.paint_point, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn malformed_values_are_ignored() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[movement]\ngravity = heavy\n[camera]\noffset = 1, 2\n")
            .unwrap();
        assert_eq!(config.gravity, 9.8);
        assert_eq!(config.camera_offset, Vec3::new(0.0, 8.0, -10.0));
    }

    #[test]
    fn camera_easing_is_read_by_name() {
        let mut config = GameConfig::new();
        config.load_from_str("[camera]\neasing = quad_in_out\n").unwrap();
        assert_eq!(config.camera_easing, Easing::QuadInOut);
        config.load_from_str("[camera]\neasing = bounce\n").unwrap();
        assert_eq!(config.camera_easing, Easing::QuadInOut);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/dir/config.ini");
        assert!(matches!(config.load_from_file(), Err(SetupError::Config(_))));
    }

    #[test]
    fn parse_vec3_accepts_whitespace() {
        assert_eq!(parse_vec3(" 1 ,2,  -3.5 "), Some(Vec3::new(1.0, 2.0, -3.5)));
        assert_eq!(parse_vec3("1,2,3,4"), None);
        assert_eq!(parse_vec3("a,b,c"), None);
    }
}
