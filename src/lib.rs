//! Breakout - a single-screen arcade brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game loop state machine)
//! - `audio`: Procedural PCM sound synthesis and fire-and-forget playback
//! - `renderer`: wgpu rendering of rectangles and bitmap text
//! - `platform`: Keyboard adapter and frame pacing
//! - `settings`: User configuration loaded from JSON

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, Silent, SoundBank, SoundEffect, SoundPlayer};
pub use error::BreakoutError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas size in logical pixels
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Target frame rate; one simulation step per frame
    pub const FPS: u32 = 60;
    pub const WINDOW_TITLE: &str = "BREAKOUT";

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Paddle centre sits 30px above the bottom edge
    pub const PADDLE_Y: f32 = SCREEN_HEIGHT - 30.0;
    /// Pixels per frame while a direction key is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults (the ball is a square)
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_HALF_SIZE: f32 = BALL_SIZE / 2.0;
    /// Base speed in pixels per frame
    pub const BALL_SPEED: f32 = 4.0;
    /// Added to the speed multiplier on every paddle hit
    pub const SPEED_INCREMENT: f32 = 0.02;
    pub const MAX_SPEED_MULTIPLIER: f32 = 2.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 58.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 2.0;
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_ORIGIN_X: f32 = 5.0;
    pub const BRICK_ORIGIN_Y: f32 = 50.0;

    pub const STARTING_LIVES: u8 = 3;
}
