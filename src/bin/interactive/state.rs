use vertical_launch::core::kinematics::{SimulationParameters, Trajectory, compute_trajectory};
use vertical_launch::core::playback::PlaybackController;

use crate::constants::{
    DEFAULT_GRAVITY_MPS2, DEFAULT_INITIAL_HEIGHT_M, DEFAULT_TOTAL_TIME_S, TOTAL_TIME_MIN_S,
};

pub(crate) struct AppRuntime {
    pub(crate) initial_height_m: f32,
    pub(crate) total_time_s: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) playback_speed: f32,
    pub(crate) trajectory: Trajectory,
    pub(crate) playback: PlaybackController,
    pub(crate) tick_accumulator: f32,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let initial_height_m = DEFAULT_INITIAL_HEIGHT_M;
        let total_time_s = DEFAULT_TOTAL_TIME_S;
        let gravity_mps2 = DEFAULT_GRAVITY_MPS2;
        let trajectory = compute_trajectory(params_of(
            initial_height_m,
            total_time_s,
            gravity_mps2,
        ));
        let playback = PlaybackController::new(trajectory.len());
        Self {
            initial_height_m,
            total_time_s,
            gravity_mps2,
            playback_speed: 1.0,
            trajectory,
            playback,
            tick_accumulator: 0.0,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn params(&self) -> SimulationParameters {
        params_of(self.initial_height_m, self.total_time_s, self.gravity_mps2)
    }

    /// A parameter edit invalidates the derived trajectory and restarts
    /// playback from frame zero.
    pub(crate) fn recompute(&mut self) {
        self.total_time_s = self.total_time_s.max(TOTAL_TIME_MIN_S);
        self.trajectory = compute_trajectory(self.params());
        self.playback = PlaybackController::new(self.trajectory.len());
        self.tick_accumulator = 0.0;
        self.status_line = "Parameters changed".to_string();
    }
}

fn params_of(initial_height_m: f32, total_time_s: f32, gravity_mps2: f32) -> SimulationParameters {
    SimulationParameters {
        initial_height_m: initial_height_m as f64,
        total_time_s: total_time_s as f64,
        gravity_mps2: gravity_mps2 as f64,
    }
}
