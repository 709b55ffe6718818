//! Game state and core simulation types
//!
//! Everything the game loop mutates lives here. Randomness comes only from the
//! seeded generator held by `GameState`, so a run is reproducible from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{SoundEffect, SoundPlayer};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives, waiting for restart
    GameOver,
    /// Every brick destroyed, waiting for restart
    GameWon,
}

impl GamePhase {
    /// Terminal phases only leave through an explicit restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::GameWon)
    }
}

/// The ball. Position is its centre.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scales `vel` when moving; grows on paddle hits
    pub speed_multiplier: f32,
}

impl Ball {
    /// A ball at the screen centre heading down, horizontal direction picked by `rng`
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            speed_multiplier: 1.0,
        };
        ball.reset(rng);
        ball
    }

    /// Put the ball back at the centre with a fresh direction
    pub fn reset(&mut self, rng: &mut impl Rng) {
        let dx = if rng.random_bool(0.5) {
            -BALL_SPEED
        } else {
            BALL_SPEED
        };
        self.pos = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        self.vel = Vec2::new(dx, BALL_SPEED);
        self.speed_multiplier = 1.0;
    }

    /// Advance one frame and bounce off the side and top walls.
    ///
    /// A wall contact flips the matching velocity component once and pins the
    /// ball onto the margin so the next frame moves it back into the field.
    /// The bottom edge is open.
    pub fn update(&mut self, sfx: &dyn SoundPlayer) {
        self.pos += self.vel * self.speed_multiplier;

        let min_x = BALL_HALF_SIZE;
        let max_x = SCREEN_WIDTH - BALL_HALF_SIZE;
        if self.pos.x <= min_x || self.pos.x >= max_x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(min_x, max_x);
            sfx.play(SoundEffect::Wall);
        }

        if self.pos.y <= BALL_HALF_SIZE {
            self.vel.y = -self.vel.y;
            self.pos.y = BALL_HALF_SIZE;
            sfx.play(SoundEffect::Wall);
        }
    }

    /// Axis-aligned bounds as (min, max) corners
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::splat(BALL_HALF_SIZE);
        (self.pos - half, self.pos + half)
    }

    /// True once the ball has fallen past the bottom edge
    pub fn is_lost(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }
}

/// The player's paddle. `x` is its centre; the vertical position is fixed.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: SCREEN_WIDTH / 2.0,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Move by the paddle speed for each held direction, staying on screen
    pub fn update(&mut self, left: bool, right: bool) {
        if left {
            self.x -= PADDLE_SPEED;
        }
        if right {
            self.x += PADDLE_SPEED;
        }
        let half = self.half_width();
        self.x = self.x.clamp(half, SCREEN_WIDTH - half);
    }
}

/// Pitch bucket for the brick-break sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    High,
    Mid,
    Low,
}

impl Pitch {
    pub fn sound(&self) -> SoundEffect {
        match self {
            Pitch::High => SoundEffect::BrickHigh,
            Pitch::Mid => SoundEffect::BrickMid,
            Pitch::Low => SoundEffect::BrickLow,
        }
    }
}

/// Brick category: colour, score value and break pitch travel together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickTier {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    /// Fallback for rows past the end of the palette
    Purple,
}

/// Tier per row, top to bottom
pub const ROW_PALETTE: [BrickTier; 10] = [
    BrickTier::Red,
    BrickTier::Red,
    BrickTier::Orange,
    BrickTier::Orange,
    BrickTier::Yellow,
    BrickTier::Yellow,
    BrickTier::Green,
    BrickTier::Green,
    BrickTier::Blue,
    BrickTier::Blue,
];

impl BrickTier {
    /// Tier for a grid row; rows beyond the palette get `Purple`
    pub fn for_row(row: usize) -> Self {
        ROW_PALETTE.get(row).copied().unwrap_or(BrickTier::Purple)
    }

    /// sRGB fill colour
    pub fn color(&self) -> [u8; 3] {
        match self {
            BrickTier::Red => [255, 0, 0],
            BrickTier::Orange => [255, 165, 0],
            BrickTier::Yellow => [255, 255, 0],
            BrickTier::Green => [0, 255, 0],
            BrickTier::Blue => [0, 100, 255],
            BrickTier::Purple => [128, 0, 128],
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            BrickTier::Red => 7,
            BrickTier::Orange => 5,
            BrickTier::Yellow => 3,
            BrickTier::Green => 2,
            BrickTier::Blue | BrickTier::Purple => 1,
        }
    }

    pub fn pitch(&self) -> Pitch {
        match self {
            BrickTier::Red | BrickTier::Orange => Pitch::High,
            BrickTier::Yellow | BrickTier::Green => Pitch::Mid,
            BrickTier::Blue | BrickTier::Purple => Pitch::Low,
        }
    }
}

/// A brick. `pos` is its top-left corner.
#[derive(Debug, Clone)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    pub tier: BrickTier,
    pub alive: bool,
}

impl Brick {
    pub fn new(pos: Vec2, tier: BrickTier) -> Self {
        Self {
            pos,
            size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            tier,
            alive: true,
        }
    }
}

/// Build the full grid in row-major order
pub fn create_bricks() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        let tier = BrickTier::for_row(row);
        for col in 0..BRICK_COLS {
            let x = col as f32 * (BRICK_WIDTH + BRICK_GAP) + BRICK_ORIGIN_X;
            let y = row as f32 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_ORIGIN_Y;
            bricks.push(Brick::new(Vec2::new(x, y), tier));
        }
    }
    bricks
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major; collision scans rely on this order
    pub bricks: Vec<Brick>,
    /// Frames simulated while playing
    pub frame: u64,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            lives: STARTING_LIVES,
            ball,
            paddle: Paddle::default(),
            bricks: create_bricks(),
            frame: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_game_won(&self) -> bool {
        self.phase == GamePhase::GameWon
    }

    pub fn bricks_alive(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// Recentre the ball after a lost life
    pub fn reset_ball(&mut self) {
        self.ball.reset(&mut self.rng);
    }

    /// Full reset after game over or a cleared board. The paddle stays put.
    pub fn restart(&mut self) {
        self.ball.reset(&mut self.rng);
        self.bricks = create_bricks();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::Playing;
    }
}
