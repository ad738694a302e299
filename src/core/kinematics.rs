pub const STANDARD_GRAVITY_MPS2: f64 = 9.81;

/// Sample count per trajectory. Tuning knob for animation smoothness,
/// not a physical quantity.
pub const TRAJECTORY_SAMPLES: usize = 150;

#[derive(Clone, Copy, Debug)]
pub struct SimulationParameters {
    pub initial_height_m: f64,
    pub total_time_s: f64,
    pub gravity_mps2: f64,
}

impl SimulationParameters {
    pub fn is_degenerate(&self) -> bool {
        !self.initial_height_m.is_finite()
            || !self.total_time_s.is_finite()
            || !self.gravity_mps2.is_finite()
            || self.total_time_s <= 0.0
            || self.gravity_mps2 <= 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub initial_velocity_mps: f64,
    pub max_height_m: f64,
    pub times_s: Vec<f64>,
    pub heights_m: Vec<f64>,
    pub velocities_mps: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.times_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times_s.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// (time, height, velocity) at `index`, clamped into range.
    pub fn sample(&self, index: usize) -> (f64, f64, f64) {
        if self.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        let i = index.min(self.last_index());
        (self.times_s[i], self.heights_m[i], self.velocities_mps[i])
    }
}

pub fn initial_velocity_mps(params: SimulationParameters) -> f64 {
    if params.is_degenerate() {
        return 0.0;
    }
    let t = params.total_time_s;
    ((0.5 * params.gravity_mps2 * t * t) - params.initial_height_m) / t
}

pub fn height_at_time(params: SimulationParameters, v0_mps: f64, time_s: f64) -> f64 {
    params.initial_height_m + (v0_mps * time_s)
        - (0.5 * params.gravity_mps2 * time_s * time_s)
}

pub fn velocity_at_time(params: SimulationParameters, v0_mps: f64, time_s: f64) -> f64 {
    v0_mps - (params.gravity_mps2 * time_s)
}

/// Closed-form trajectory over `[0, total_time_s]`, sampled at
/// `TRAJECTORY_SAMPLES` equally spaced times including both endpoints.
///
/// Degenerate inputs (non-positive time or gravity, non-finite values) fall
/// back to a resting trajectory at the initial height instead of failing.
/// Heights are stored raw, without any ground clamp; flooring at zero is a
/// display concern.
pub fn compute_trajectory(params: SimulationParameters) -> Trajectory {
    let samples = TRAJECTORY_SAMPLES;

    if params.is_degenerate() {
        let rest_height = if params.initial_height_m.is_finite() {
            params.initial_height_m
        } else {
            0.0
        };
        return Trajectory {
            initial_velocity_mps: 0.0,
            max_height_m: rest_height,
            times_s: vec![0.0; samples],
            heights_m: vec![rest_height; samples],
            velocities_mps: vec![0.0; samples],
        };
    }

    let v0 = initial_velocity_mps(params);
    let mut times_s = Vec::with_capacity(samples);
    let mut heights_m = Vec::with_capacity(samples);
    let mut velocities_mps = Vec::with_capacity(samples);

    for i in 0..samples {
        let t = (i as f64 * params.total_time_s) / (samples - 1) as f64;
        times_s.push(t);
        heights_m.push(height_at_time(params, v0, t));
        velocities_mps.push(velocity_at_time(params, v0, t));
    }

    Trajectory {
        initial_velocity_mps: v0,
        max_height_m: params.initial_height_m + (v0 * v0) / (2.0 * params.gravity_mps2),
        times_s,
        heights_m,
        velocities_mps,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    Initial,
    Rising,
    Apex,
    Falling,
    Final,
}

impl MotionPhase {
    pub fn label(self) -> &'static str {
        match self {
            MotionPhase::Initial => "Initial",
            MotionPhase::Rising => "Rising",
            MotionPhase::Apex => "Apex",
            MotionPhase::Falling => "Falling",
            MotionPhase::Final => "Final",
        }
    }
}

/// Index of the sample nearest the apex, when the velocity actually crosses
/// zero strictly inside the run. A throw that only falls (or only rises) has
/// no interior apex.
pub fn apex_index(trajectory: &Trajectory) -> Option<usize> {
    let first = *trajectory.velocities_mps.first()?;
    let last = *trajectory.velocities_mps.last()?;
    if first <= 0.0 || last >= 0.0 {
        return None;
    }

    let mut best = 0usize;
    let mut best_abs = f64::INFINITY;
    for (i, v) in trajectory.velocities_mps.iter().enumerate() {
        if v.abs() < best_abs {
            best_abs = v.abs();
            best = i;
        }
    }
    Some(best)
}

pub fn phase_at(trajectory: &Trajectory, index: usize) -> MotionPhase {
    if trajectory.is_empty() {
        return MotionPhase::Initial;
    }
    let last = trajectory.last_index();
    let i = index.min(last);

    if i == 0 {
        MotionPhase::Initial
    } else if i == last {
        MotionPhase::Final
    } else if apex_index(trajectory) == Some(i) {
        MotionPhase::Apex
    } else if trajectory.velocities_mps[i] > 0.0 {
        MotionPhase::Rising
    } else {
        MotionPhase::Falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn scenario_a() -> SimulationParameters {
        SimulationParameters {
            initial_height_m: 55.0,
            total_time_s: 10.0,
            gravity_mps2: 9.81,
        }
    }

    #[test]
    fn covers_full_time_span_with_fixed_sample_count() {
        let trajectory = compute_trajectory(scenario_a());

        assert_eq!(trajectory.len(), TRAJECTORY_SAMPLES);
        assert_eq!(trajectory.heights_m.len(), TRAJECTORY_SAMPLES);
        assert_eq!(trajectory.velocities_mps.len(), TRAJECTORY_SAMPLES);
        assert_close(trajectory.times_s[0], 0.0, 1e-12);
        assert_close(trajectory.times_s[TRAJECTORY_SAMPLES - 1], 10.0, 1e-9);
    }

    #[test]
    fn derives_velocity_and_max_height_for_tower_launch() {
        let trajectory = compute_trajectory(scenario_a());

        // v0 = (0.5 * 9.81 * 100 - 55) / 10
        assert_close(trajectory.initial_velocity_mps, 43.545, 1e-9);
        assert_close(trajectory.max_height_m, 151.6446, 1e-3);
    }

    #[test]
    fn symmetric_throw_from_ground() {
        let trajectory = compute_trajectory(SimulationParameters {
            initial_height_m: 0.0,
            total_time_s: 2.0,
            gravity_mps2: 9.81,
        });

        assert_close(trajectory.initial_velocity_mps, 9.81, 1e-9);
        assert_close(trajectory.heights_m[0], 0.0, 1e-12);
        // Thrown and caught at the same height after T seconds.
        assert_close(trajectory.heights_m[TRAJECTORY_SAMPLES - 1], 0.0, 1e-9);
    }

    #[test]
    fn velocity_is_strictly_decreasing() {
        let trajectory = compute_trajectory(scenario_a());
        for pair in trajectory.velocities_mps.windows(2) {
            assert!(pair[1] < pair[0], "velocity must decrease: {pair:?}");
        }
    }

    #[test]
    fn height_near_apex_matches_max_height() {
        let trajectory = compute_trajectory(scenario_a());
        let apex = apex_index(&trajectory).expect("apex should fall inside the run");

        // Sample spacing is T / (N - 1), so the nearest sample sits within
        // half a step of the true apex.
        let half_step = 0.5 * 10.0 / (TRAJECTORY_SAMPLES - 1) as f64;
        let g = 9.81;
        let height_slack = 0.5 * g * half_step * half_step;

        assert_close(
            trajectory.heights_m[apex],
            trajectory.max_height_m,
            height_slack + 1e-9,
        );
        assert_close(trajectory.velocities_mps[apex], 0.0, g * half_step + 1e-9);
    }

    #[test]
    fn identical_parameters_yield_identical_trajectories() {
        let a = compute_trajectory(scenario_a());
        let b = compute_trajectory(scenario_a());
        assert_eq!(a, b);
    }

    #[test]
    fn derived_velocity_lands_exactly_at_ground() {
        // v0 is chosen so the flight ends at y=0 after exactly T seconds,
        // even when the implied launch is a downward shove.
        let trajectory = compute_trajectory(SimulationParameters {
            initial_height_m: 500.0,
            total_time_s: 2.0,
            gravity_mps2: 9.81,
        });
        assert!(trajectory.initial_velocity_mps < 0.0);
        assert_close(trajectory.heights_m[TRAJECTORY_SAMPLES - 1], 0.0, 1e-9);
    }

    #[test]
    fn degenerate_time_falls_back_to_rest() {
        let trajectory = compute_trajectory(SimulationParameters {
            initial_height_m: 55.0,
            total_time_s: 0.0,
            gravity_mps2: 9.81,
        });

        assert_eq!(trajectory.len(), TRAJECTORY_SAMPLES);
        assert_close(trajectory.initial_velocity_mps, 0.0, 1e-12);
        assert_close(trajectory.max_height_m, 55.0, 1e-12);
        assert!(trajectory.heights_m.iter().all(|&h| h == 55.0));
        assert!(trajectory.velocities_mps.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn degenerate_gravity_falls_back_to_rest() {
        let trajectory = compute_trajectory(SimulationParameters {
            initial_height_m: 12.0,
            total_time_s: 10.0,
            gravity_mps2: 0.0,
        });
        assert_close(trajectory.max_height_m, 12.0, 1e-12);
        assert_close(trajectory.initial_velocity_mps, 0.0, 1e-12);
    }

    #[test]
    fn non_finite_inputs_do_not_panic() {
        let trajectory = compute_trajectory(SimulationParameters {
            initial_height_m: f64::NAN,
            total_time_s: f64::INFINITY,
            gravity_mps2: 9.81,
        });
        assert_eq!(trajectory.len(), TRAJECTORY_SAMPLES);
        assert!(trajectory.heights_m.iter().all(|h| h.is_finite()));
    }

    #[test]
    fn labels_run_from_initial_through_apex_to_final() {
        let trajectory = compute_trajectory(scenario_a());
        let apex = apex_index(&trajectory).expect("apex inside the run");
        let last = trajectory.last_index();

        assert_eq!(phase_at(&trajectory, 0), MotionPhase::Initial);
        assert_eq!(phase_at(&trajectory, 1), MotionPhase::Rising);
        assert_eq!(phase_at(&trajectory, apex), MotionPhase::Apex);
        assert_eq!(phase_at(&trajectory, apex + 1), MotionPhase::Falling);
        assert_eq!(phase_at(&trajectory, last), MotionPhase::Final);
        // Out-of-range indexes clamp to the final sample.
        assert_eq!(phase_at(&trajectory, last + 50), MotionPhase::Final);
    }

    #[test]
    fn falling_only_release_has_no_apex() {
        // v0 < 0: dropped with a downward shove, never rises.
        let trajectory = compute_trajectory(SimulationParameters {
            initial_height_m: 500.0,
            total_time_s: 2.0,
            gravity_mps2: 9.81,
        });
        assert_eq!(apex_index(&trajectory), None);
        assert_eq!(phase_at(&trajectory, 5), MotionPhase::Falling);
    }
}
