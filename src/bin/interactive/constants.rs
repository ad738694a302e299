use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const TITLE_Y: f32 = 44.0;
pub const SUBTITLE_Y: f32 = 74.0;

pub const OUTER_MARGIN: f32 = 90.0;
pub const TOP_MARGIN: f32 = 130.0;
pub const BOTTOM_MARGIN: f32 = 110.0;
pub const PANEL_GAP: f32 = 110.0;
pub const X_GRID_LINES: usize = 8;
pub const Y_GRID_LINES: usize = 8;

pub const BACKGROUND_COLOR: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const MARKER_COLOR: Color = Color::new(0.96, 0.23, 0.23, 1.0);
pub const TRAIL_COLOR: Color = Color::new(0.96, 0.23, 0.23, 0.55);
pub const VELOCITY_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const VELOCITY_REMAINDER_COLOR: Color = Color::new(0.21, 0.48, 0.96, 0.25);

// One playback tick per 40 ms at 1x speed, the frame duration the animation
// is tuned for.
pub const PLAYBACK_TICKS_PER_SECOND: f32 = 25.0;
pub const MAX_FRAME_DT_S: f32 = 0.25;

pub const DEFAULT_INITIAL_HEIGHT_M: f32 = 55.0;
pub const DEFAULT_TOTAL_TIME_S: f32 = 10.0;
pub const DEFAULT_GRAVITY_MPS2: f32 = 9.81;

pub const INITIAL_HEIGHT_MIN_M: f32 = 0.0;
pub const INITIAL_HEIGHT_MAX_M: f32 = 200.0;
pub const TOTAL_TIME_MIN_S: f32 = 0.5;
pub const TOTAL_TIME_MAX_S: f32 = 60.0;
pub const GRAVITY_MIN_MPS2: f32 = 1.0;
pub const GRAVITY_MAX_MPS2: f32 = 20.0;
pub const PLAYBACK_SPEED_MIN: f32 = 0.25;
pub const PLAYBACK_SPEED_MAX: f32 = 4.0;
