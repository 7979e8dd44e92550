use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// `elapsed` and `delta` advance once per frame (variable rate); `fixed_delta`
/// is the duration of one physics tick and never changes at runtime.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub fixed_delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            fixed_delta: 1.0 / 50.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Fixed tick rate in Hz. Non-positive rates fall back to 50 Hz.
    pub fn with_fixed_hz(mut self, hz: f32) -> Self {
        self.fixed_delta = if hz > 0.0 { 1.0 / hz } else { 1.0 / 50.0 };
        self
    }
}
