//! Fixed-step frame update
//!
//! One call advances the game by exactly one frame.

use super::collision::{brick_collision, paddle_collision};
use super::state::{GamePhase, GameState};
use crate::audio::{SoundEffect, SoundPlayer};
use crate::platform::InputEvent;

/// Input for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left direction held this frame
    pub left: bool,
    /// Right direction held this frame
    pub right: bool,
    /// Restart request (only honoured once the game has ended)
    pub confirm: bool,
}

impl TickInput {
    /// Fold the frame's input events. `Quit` is handled by the window loop.
    pub fn from_events(events: &[InputEvent]) -> Self {
        let mut input = Self::default();
        for event in events {
            match event {
                InputEvent::MoveLeft => input.left = true,
                InputEvent::MoveRight => input.right = true,
                InputEvent::Confirm => input.confirm = true,
                InputEvent::Quit => {}
            }
        }
        input
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, sfx: &dyn SoundPlayer) {
    if state.phase.is_terminal() {
        if input.confirm {
            state.restart();
            log::info!("Restarted (seed {})", state.seed);
        }
        return;
    }

    state.frame += 1;

    state.ball.update(sfx);
    state.paddle.update(input.left, input.right);

    // A paddle hit ends collision checks for this frame
    if !paddle_collision(&mut state.ball, &state.paddle, sfx) {
        state.score += brick_collision(&mut state.ball, &mut state.bricks, sfx);
    }

    if state.ball.is_lost() {
        state.lives = state.lives.saturating_sub(1);
        sfx.play(SoundEffect::Lose);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over with score {}", state.score);
        } else {
            log::debug!("Ball lost, {} lives left", state.lives);
            state.reset_ball();
        }
    }

    if state.phase == GamePhase::Playing && state.bricks.iter().all(|b| !b.alive) {
        state.phase = GamePhase::GameWon;
        sfx.play(SoundEffect::Win);
        log::info!("Board cleared with score {}", state.score);
    }
}
