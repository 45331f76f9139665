use std::time::Duration;

pub const MAP_WIDTH: usize = 14;
pub const MAP_HEIGHT: usize = 8;

/// Pixels per map cell in the top-down view; world units are map units
/// scaled by this.
pub const MAP_SCALE: usize = 40;

pub const VIEWPORT_WIDTH: usize = MAP_WIDTH * MAP_SCALE;
pub const VIEWPORT_HEIGHT: usize = MAP_HEIGHT * MAP_SCALE;

// top-down view | first-person view, side by side
pub const SCREEN_WIDTH: usize = 2 * VIEWPORT_WIDTH;
pub const SCREEN_HEIGHT: usize = VIEWPORT_HEIGHT;

/// First screen column of the first-person half.
pub const FIRST_PERSON_OFFSET: usize = VIEWPORT_WIDTH;

pub const PLAYER_SIZE: usize = 1 + MAP_SCALE / 5;

pub const RAY_MAX_DIST: f32 = 10.0 * MAP_SCALE as f32;
pub const RAY_STEP: f32 = 0.01 * MAP_SCALE as f32;

/// Lower bound for the corrected-distance divisor in the wall projection.
pub const MIN_WALL_DIST: f32 = 1e-4;

pub const FOV: f32 = std::f32::consts::FRAC_PI_2;

// map units per frame / radians per frame
pub const MOVE_SPEED: f32 = 0.1;
pub const TURN_SPEED: f32 = 0.1;

pub const FRAME_BUDGET: Duration = Duration::from_millis(1000 / 30);
