use vertical_launch::core::playback::PlaybackMode;

use crate::constants::{MAX_FRAME_DT_S, PLAYBACK_TICKS_PER_SECOND};
use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    let toggled_start = actions.toggle && state.playback.mode() != PlaybackMode::Playing;
    let toggled_pause = actions.toggle && state.playback.mode() == PlaybackMode::Playing;

    if actions.start || toggled_start {
        state.playback.start();
        state.status_line = "Playing".to_string();
    }

    if actions.pause || toggled_pause {
        state.playback.pause();
        if state.playback.mode() == PlaybackMode::Paused {
            state.status_line = "Paused".to_string();
        }
    }

    if actions.reset {
        state.playback.reset();
        state.tick_accumulator = 0.0;
        state.status_line = "Reset".to_string();
    }
}

/// Converts wall-clock frame time into whole playback ticks so animation
/// speed does not depend on the display refresh rate.
pub(crate) fn advance_playback(state: &mut AppRuntime, frame_dt: f32) {
    if state.playback.mode() != PlaybackMode::Playing {
        return;
    }

    let dt = frame_dt.min(MAX_FRAME_DT_S);
    state.tick_accumulator += dt * state.playback_speed * PLAYBACK_TICKS_PER_SECOND;
    while state.tick_accumulator >= 1.0 {
        state.tick_accumulator -= 1.0;
        state.playback.tick();
        if state.playback.mode() != PlaybackMode::Playing {
            state.tick_accumulator = 0.0;
            state.status_line = "Finished".to_string();
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_between_playing_and_paused() {
        let mut state = AppRuntime::new();
        let toggle = FrameActions {
            toggle: true,
            ..Default::default()
        };

        apply_actions(&mut state, toggle);
        assert_eq!(state.playback.mode(), PlaybackMode::Playing);

        apply_actions(&mut state, toggle);
        assert_eq!(state.playback.mode(), PlaybackMode::Paused);

        apply_actions(&mut state, toggle);
        assert_eq!(state.playback.mode(), PlaybackMode::Playing);
    }

    #[test]
    fn reset_wins_over_other_actions_in_the_same_frame() {
        let mut state = AppRuntime::new();
        apply_actions(
            &mut state,
            FrameActions {
                start: true,
                reset: true,
                ..Default::default()
            },
        );
        assert_eq!(state.playback.mode(), PlaybackMode::Stopped);
        assert_eq!(state.playback.frame_index(), 0);
    }

    #[test]
    fn playback_advances_with_accumulated_frame_time() {
        let mut state = AppRuntime::new();
        state.playback.start();

        // 10 frames at 60 Hz and 1x speed: 10 * (25/60) = ~4 ticks.
        for _ in 0..10 {
            advance_playback(&mut state, 1.0 / 60.0);
        }
        assert_eq!(state.playback.frame_index(), 4);
    }

    #[test]
    fn long_run_finishes_on_the_last_frame() {
        let mut state = AppRuntime::new();
        state.playback.start();
        for _ in 0..10_000 {
            advance_playback(&mut state, 1.0 / 60.0);
        }
        assert_eq!(state.playback.mode(), PlaybackMode::Stopped);
        assert_eq!(
            state.playback.frame_index(),
            state.trajectory.last_index()
        );
        assert_eq!(state.status_line, "Finished");
    }

    #[test]
    fn paused_playback_ignores_frame_time() {
        let mut state = AppRuntime::new();
        state.playback.start();
        advance_playback(&mut state, 1.0);
        let index = state.playback.frame_index();

        apply_actions(
            &mut state,
            FrameActions {
                pause: true,
                ..Default::default()
            },
        );
        advance_playback(&mut state, 5.0);
        assert_eq!(state.playback.frame_index(), index);
    }
}
