use std::env;
use std::io::{self, Write};

use vertical_launch::core::kinematics::{
    SimulationParameters, Trajectory, compute_trajectory, phase_at,
};

mod chart;

const TABLE_ROWS: usize = 11;

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 55 or 9.81)."),
        }
    }
}

fn get_params_from_user() -> Result<SimulationParameters, String> {
    Ok(SimulationParameters {
        initial_height_m: read_f64("Initial height (m): ")?,
        total_time_s: read_f64("Total flight time (s): ")?,
        gravity_mps2: read_f64("Gravity (m/s^2): ")?,
    })
}

fn get_params_from_args(args: &[String]) -> Result<SimulationParameters, String> {
    if args.len() != 3 {
        return Err(
            "Expected exactly 3 arguments: <initial_height_m> <total_time_s> <gravity_mps2>."
                .to_string(),
        );
    }

    Ok(SimulationParameters {
        initial_height_m: parse_f64(&args[0], "initial height")?,
        total_time_s: parse_f64(&args[1], "total time")?,
        gravity_mps2: parse_f64(&args[2], "gravity")?,
    })
}

fn default_chart_path() -> String {
    format!(
        "vertical_launch_{}.png",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Pulls an optional `--png [file.png]` out of the argument list, leaving the
/// positional arguments behind.
fn extract_png_option(args: &mut Vec<String>) -> Option<String> {
    let pos = args.iter().position(|a| a == "--png")?;
    args.remove(pos);
    if pos < args.len() && args[pos].ends_with(".png") {
        Some(args.remove(pos))
    } else {
        Some(default_chart_path())
    }
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <initial_height_m> <total_time_s> <gravity_mps2> [--png [file.png]]");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 55 10 9.81");
    println!("  {program} 55 10 9.81 --png charts.png");
}

fn print_report(params: SimulationParameters, trajectory: &Trajectory) {
    if params.is_degenerate() {
        println!(
            "Note: degenerate inputs (need total time > 0 and gravity > 0); \
             showing the resting fallback."
        );
    }

    println!(
        "Initial velocity: {:.4} m/s",
        trajectory.initial_velocity_mps
    );
    println!("Maximum height:   {:.4} m", trajectory.max_height_m);

    let apex_time = if params.is_degenerate() {
        None
    } else {
        let t = trajectory.initial_velocity_mps / params.gravity_mps2;
        (0.0..=params.total_time_s).contains(&t).then_some(t)
    };
    match apex_time {
        Some(t) => println!("Apex time:        {t:.4} s"),
        None => println!("Apex time:        - (apex outside the flight window)"),
    }

    println!();
    println!(
        "{:>10}  {:>12}  {:>14}  {}",
        "time (s)", "height (m)", "velocity (m/s)", "phase"
    );
    let last = trajectory.last_index();
    let stride = (last / (TABLE_ROWS - 1)).max(1);
    let mut i = 0;
    loop {
        let (t, y, v) = trajectory.sample(i);
        println!(
            "{t:>10.3}  {y:>12.3}  {v:>14.3}  {}",
            phase_at(trajectory, i).label()
        );
        if i == last {
            break;
        }
        i = (i + stride).min(last);
    }
}

fn run() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let png_path = extract_png_option(&mut args);
    let params = if args.len() == 1 {
        get_params_from_user()?
    } else {
        get_params_from_args(&args[1..])?
    };

    let trajectory = compute_trajectory(params);
    print_report(params, &trajectory);

    if let Some(path) = png_path {
        chart::render_charts_png(&trajectory, &path)?;
        println!("\nCharts written to {path}");
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
