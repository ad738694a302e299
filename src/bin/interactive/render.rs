use macroquad::prelude::*;

use vertical_launch::core::kinematics::Trajectory;

use crate::constants::{
    GRID_COLOR, MARKER_COLOR, TRAIL_COLOR, VELOCITY_COLOR, VELOCITY_REMAINDER_COLOR, X_GRID_LINES,
    Y_GRID_LINES,
};

#[derive(Clone, Copy)]
pub(crate) struct Panel {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl Panel {
    pub(crate) fn x_at(&self, frac: f32) -> f32 {
        self.left + frac.clamp(0.0, 1.0) * (self.right - self.left)
    }

    pub(crate) fn y_at(&self, frac: f32) -> f32 {
        self.bottom - frac.clamp(0.0, 1.0) * (self.bottom - self.top)
    }
}

fn format_axis_value(value: f32, axis_span: f32) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_panel_frame(panel: Panel, title: &str, font: Option<&Font>) {
    for i in 0..=X_GRID_LINES {
        let x = panel.x_at(i as f32 / X_GRID_LINES as f32);
        draw_line(x, panel.top, x, panel.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let y = panel.y_at(i as f32 / Y_GRID_LINES as f32);
        draw_line(panel.left, y, panel.right, y, 1.0, GRID_COLOR);
    }
    draw_line(panel.left, panel.bottom, panel.right, panel.bottom, 2.0, DARKGRAY);
    draw_line(panel.left, panel.top, panel.left, panel.bottom, 2.0, DARKGRAY);
    draw_ui_text(title, panel.left + 8.0, panel.top - 12.0, 22, DARKGRAY, font);
}

fn draw_vertical_axis_labels(
    panel: Panel,
    axis_min: f32,
    axis_max: f32,
    font: Option<&Font>,
) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;
    let span = axis_max - axis_min;

    for i in 0..=Y_GRID_LINES {
        let frac = i as f32 / Y_GRID_LINES as f32;
        let y = panel.y_at(frac);
        let value = axis_min + frac * span;
        let label = format_axis_value(value, span.abs());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (panel.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }
}

fn draw_time_axis_labels(panel: Panel, total_time_s: f32, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let frac = i as f32 / X_GRID_LINES as f32;
        let x = panel.x_at(frac);
        let label = format_axis_value(frac * total_time_s, total_time_s);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            panel.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Time (s)",
        panel.right - 76.0,
        panel.bottom + 46.0,
        18,
        label_color,
        font,
    );
}

/// Vertical-motion panel: one marker column, the object at its current
/// (display-clamped) height, and a dotted trail of the path so far.
pub(crate) fn draw_position_panel(
    panel: Panel,
    trajectory: &Trajectory,
    frame_index: usize,
    height_axis_max: f32,
    font: Option<&Font>,
) {
    draw_panel_frame(panel, "Vertical motion", font);
    draw_vertical_axis_labels(panel, 0.0, height_axis_max, font);
    draw_ui_text(
        "Height (m)",
        panel.left + 8.0,
        panel.top + 18.0,
        16,
        Color::from_rgba(105, 113, 124, 255),
        font,
    );

    let column_x = panel.x_at(0.5);
    let height_frac = |height_m: f64| -> f32 {
        (height_m.max(0.0) as f32 / height_axis_max.max(1.0)).min(1.0)
    };

    // Dotted trail, every other sample up to the current frame.
    let last = frame_index.min(trajectory.last_index());
    for i in (0..=last).step_by(2) {
        let y = panel.y_at(height_frac(trajectory.heights_m[i]));
        draw_circle(column_x, y, 2.0, TRAIL_COLOR);
    }

    let marker_y = panel.y_at(height_frac(trajectory.heights_m[last]));
    draw_circle(column_x, marker_y, 9.0, MARKER_COLOR);
    draw_circle_lines(column_x, marker_y, 9.0, 2.0, MAROON);
}

/// Velocity-vs-time panel: faint full curve, solid curve up to the current
/// frame, marker on the current sample, zero line for the sign change.
pub(crate) fn draw_velocity_panel(
    panel: Panel,
    trajectory: &Trajectory,
    frame_index: usize,
    velocity_axis: (f32, f32),
    font: Option<&Font>,
) {
    draw_panel_frame(panel, "Velocity vs time", font);
    let (v_min, v_max) = velocity_axis;
    draw_vertical_axis_labels(panel, v_min, v_max, font);
    let total_time_s = trajectory.times_s[trajectory.last_index()].max(1e-9) as f32;
    draw_time_axis_labels(panel, total_time_s, font);
    draw_ui_text(
        "Velocity (m/s)",
        panel.left + 8.0,
        panel.top + 18.0,
        16,
        Color::from_rgba(105, 113, 124, 255),
        font,
    );

    let span = (v_max - v_min).max(1e-6);
    let point_at = |i: usize| -> Vec2 {
        let t_frac = (trajectory.times_s[i] as f32) / total_time_s;
        let v_frac = ((trajectory.velocities_mps[i] as f32) - v_min) / span;
        vec2(panel.x_at(t_frac), panel.y_at(v_frac))
    };

    if v_min < 0.0 && v_max > 0.0 {
        let zero_y = panel.y_at(-v_min / span);
        draw_line(panel.left, zero_y, panel.right, zero_y, 1.0, GRAY);
    }

    let last = frame_index.min(trajectory.last_index());
    draw_polyline(&point_at, 0, trajectory.last_index(), 1.5, VELOCITY_REMAINDER_COLOR);
    draw_polyline(&point_at, 0, last, 3.0, VELOCITY_COLOR);

    let marker = point_at(last);
    draw_circle(marker.x, marker.y, 6.0, VELOCITY_COLOR);
    draw_circle_lines(marker.x, marker.y, 6.0, 2.0, DARKBLUE);
}

fn draw_polyline(
    point_at: &impl Fn(usize) -> Vec2,
    from: usize,
    to: usize,
    thickness: f32,
    color: Color,
) {
    if to <= from {
        return;
    }
    let mut prev = point_at(from);
    for i in (from + 1)..=to {
        let cur = point_at(i);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}
