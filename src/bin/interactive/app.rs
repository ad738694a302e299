use macroquad::prelude::*;

use vertical_launch::core::window::{height_axis_max_f32, padded_axis_range_f32};

use crate::constants::{
    BACKGROUND_COLOR, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES,
    OUTER_MARGIN, PANEL_GAP, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{Panel, draw_position_panel, draw_velocity_panel};
use crate::runner::{advance_playback, apply_actions};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Vertical Launch Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            println!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let params_before = (
            state.initial_height_m,
            state.total_time_s,
            state.gravity_mps2,
        );
        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        let params_after = (
            state.initial_height_m,
            state.total_time_s,
            state.gravity_mps2,
        );
        if params_before != params_after {
            state.recompute();
        }

        apply_actions(&mut state, actions);
        advance_playback(&mut state, frame_dt);

        // The position column sits left of the wider velocity chart.
        let plot_top = TOP_MARGIN;
        let plot_bottom = screen_h - BOTTOM_MARGIN;
        let usable_w = screen_w - (2.0 * OUTER_MARGIN) - PANEL_GAP;
        let position_panel = Panel {
            left: OUTER_MARGIN,
            right: OUTER_MARGIN + usable_w * 0.32,
            top: plot_top,
            bottom: plot_bottom,
        };
        let velocity_panel = Panel {
            left: position_panel.right + PANEL_GAP,
            right: screen_w - OUTER_MARGIN,
            top: plot_top,
            bottom: plot_bottom,
        };

        let height_axis_max = height_axis_max_f32(
            state
                .trajectory
                .max_height_m
                .max(state.initial_height_m as f64) as f32,
        );
        let (raw_v_min, raw_v_max) = velocity_extremes(&state);
        let velocity_axis = padded_axis_range_f32(raw_v_min, raw_v_max);

        clear_background(BACKGROUND_COLOR);
        let frame_index = state.playback.frame_index();
        draw_position_panel(
            position_panel,
            &state.trajectory,
            frame_index,
            height_axis_max,
            ui_font.as_ref(),
        );
        draw_velocity_panel(
            velocity_panel,
            &state.trajectory,
            frame_index,
            velocity_axis,
            ui_font.as_ref(),
        );
        draw_hud(&state, OUTER_MARGIN, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}

fn velocity_extremes(state: &AppRuntime) -> (f32, f32) {
    // Velocity is linear in time, so the extremes sit at the endpoints.
    let first = state.trajectory.velocities_mps[0] as f32;
    let last = state.trajectory.velocities_mps[state.trajectory.last_index()] as f32;
    (first.min(last), first.max(last))
}
