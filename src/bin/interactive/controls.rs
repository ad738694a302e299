use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    GRAVITY_MAX_MPS2, GRAVITY_MIN_MPS2, INITIAL_HEIGHT_MAX_M, INITIAL_HEIGHT_MIN_M,
    PLAYBACK_SPEED_MAX, PLAYBACK_SPEED_MIN, TOTAL_TIME_MAX_S, TOTAL_TIME_MIN_S,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) start: bool,
    pub(crate) pause: bool,
    pub(crate) toggle: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            start: self.start || other.start,
            pause: self.pause || other.pause,
            toggle: self.toggle || other.toggle,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        start: false,
        pause: false,
        toggle: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(340.0, 300.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Initial height (m)",
                INITIAL_HEIGHT_MIN_M..INITIAL_HEIGHT_MAX_M,
                &mut state.initial_height_m,
            );
            ui.slider(
                hash!(),
                "Total time (s)",
                TOTAL_TIME_MIN_S..TOTAL_TIME_MAX_S,
                &mut state.total_time_s,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                GRAVITY_MIN_MPS2..GRAVITY_MAX_MPS2,
                &mut state.gravity_mps2,
            );
            ui.slider(
                hash!(),
                "Playback speed",
                PLAYBACK_SPEED_MIN..PLAYBACK_SPEED_MAX,
                &mut state.playback_speed,
            );
            ui.separator();
            if ui.button(None, "Start / Resume (Space)") {
                actions.start = true;
            }
            if ui.button(None, "Pause (Space)") {
                actions.pause = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            ui.separator();
            ui.label(None, &format!("Mode: {}", state.playback.mode().label()));
            let status = state.status_line.clone();
            ui.label(None, &status);
        });

    actions
}
