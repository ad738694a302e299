use plotters::coord::Shift;
use plotters::prelude::*;

use vertical_launch::core::kinematics::Trajectory;
use vertical_launch::core::window::{height_axis_max_f64, padded_axis_range_f64};

const CHART_WIDTH_PX: u32 = 1280;
const CHART_HEIGHT_PX: u32 = 620;

/// Renders the height and velocity charts side by side into a PNG.
///
/// Heights are floored at zero here; the stored trajectory stays raw.
pub fn render_charts_png(trajectory: &Trajectory, path: &str) -> Result<(), String> {
    if trajectory.is_empty() {
        return Err("Cannot chart an empty trajectory.".to_string());
    }

    let root = BitMapBackend::new(path, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Could not prepare chart canvas: {e}"))?;

    let (height_area, velocity_area) = root.split_horizontally((CHART_WIDTH_PX / 2) as i32);
    draw_height_chart(&height_area, trajectory)?;
    draw_velocity_chart(&velocity_area, trajectory)?;

    root.present()
        .map_err(|e| format!("Could not write chart to '{path}': {e}"))?;
    Ok(())
}

fn draw_height_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    trajectory: &Trajectory,
) -> Result<(), String> {
    let t_max = trajectory.times_s[trajectory.last_index()].max(1e-9);
    let y_max = height_axis_max_f64(trajectory.max_height_m);

    let mut chart = ChartBuilder::on(area)
        .caption("Height vs Time", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..t_max, 0.0..y_max)
        .map_err(|e| format!("Could not lay out height chart: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| format!("Could not draw height chart mesh: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            trajectory
                .times_s
                .iter()
                .zip(trajectory.heights_m.iter())
                .map(|(&t, &y)| (t, y.max(0.0))),
            &RED,
        ))
        .map_err(|e| format!("Could not draw height series: {e}"))?;

    Ok(())
}

fn draw_velocity_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    trajectory: &Trajectory,
) -> Result<(), String> {
    let t_max = trajectory.times_s[trajectory.last_index()].max(1e-9);
    let raw_min = trajectory
        .velocities_mps
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let raw_max = trajectory
        .velocities_mps
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let (v_min, v_max) = padded_axis_range_f64(raw_min, raw_max);

    let mut chart = ChartBuilder::on(area)
        .caption("Velocity vs Time", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..t_max, v_min..v_max)
        .map_err(|e| format!("Could not lay out velocity chart: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Velocity (m/s)")
        .draw()
        .map_err(|e| format!("Could not draw velocity chart mesh: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            trajectory
                .times_s
                .iter()
                .zip(trajectory.velocities_mps.iter())
                .map(|(&t, &v)| (t, v)),
            &BLUE,
        ))
        .map_err(|e| format!("Could not draw velocity series: {e}"))?;

    Ok(())
}
