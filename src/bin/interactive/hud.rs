use macroquad::prelude::*;

use vertical_launch::core::kinematics::phase_at;

use crate::constants::{SUBTITLE_Y, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);

    draw_ui_text(
        "Vertical Launch Simulator",
        left,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    draw_ui_text(
        &format!(
            "y0 = {:.1} m | T = {:.1} s | g = {:.2} m/s^2 | v0 = {:.2} m/s | apex {:.2} m",
            state.initial_height_m,
            state.total_time_s,
            state.gravity_mps2,
            state.trajectory.initial_velocity_mps,
            state.trajectory.max_height_m,
        ),
        left,
        SUBTITLE_Y,
        22,
        DARKGRAY,
        font,
    );

    let index = state.playback.frame_index();
    let (t, y, v) = state.trajectory.sample(index);
    let phase = phase_at(&state.trajectory, index);
    draw_ui_text(
        &format!(
            "t = {:.2} s | height = {:.2} m | velocity = {:.2} m/s | {}",
            t,
            y.max(0.0),
            v,
            phase.label()
        ),
        left,
        screen_h - 46.0,
        24,
        header_color,
        font,
    );
    draw_ui_text(
        &format!(
            "Frame {}/{} | Mode: {} | Space start/pause | R reset",
            index + 1,
            state.playback.frame_count(),
            state.playback.mode().label()
        ),
        left,
        screen_h - 16.0,
        20,
        BLUE,
        font,
    );
}
