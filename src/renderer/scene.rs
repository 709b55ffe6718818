//! Frame composition: game state to screen-space vertices

use glam::Vec2;

use super::shapes::{outline, rect};
use super::text::{GLYPH_HEIGHT, text, text_centered};
use super::vertex::{Vertex, colors};
use crate::consts::{BALL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GamePhase, GameState};

const SCORE_POS: Vec2 = Vec2::new(10.0, 10.0);
const SCORE_SCALE: f32 = 3.0;
const LIVES_POS: Vec2 = Vec2::new(SCREEN_WIDTH - 100.0, 10.0);
const LIVES_SCALE: f32 = 2.0;
const BANNER_SCALE: f32 = 4.0;
const PROMPT_SCALE: f32 = 2.0;
const FPS_SCALE: f32 = 2.0;

/// Everything drawn for one frame, back to front.
///
/// `fps` is drawn in the bottom-left corner when present.
pub fn build(state: &GameState, fps: Option<u32>) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(4096);

    let ball_size = Vec2::splat(BALL_SIZE);
    vertices.extend(rect(state.ball.pos - ball_size / 2.0, ball_size, colors::BALL));

    let paddle = &state.paddle;
    vertices.extend(rect(
        Vec2::new(paddle.x - paddle.half_width(), paddle.y - paddle.height / 2.0),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    ));

    for brick in state.bricks.iter().filter(|b| b.alive) {
        vertices.extend(rect(brick.pos, brick.size, colors::rgb(brick.tier.color())));
        vertices.extend(outline(brick.pos, brick.size, 1.0, colors::BRICK_OUTLINE));
    }

    vertices.extend(text(
        &format!("{:04}", state.score),
        SCORE_POS,
        SCORE_SCALE,
        colors::WHITE,
    ));
    vertices.extend(text(
        &format!("BALLS: {}", state.lives),
        LIVES_POS,
        LIVES_SCALE,
        colors::WHITE,
    ));

    let banner = match state.phase {
        GamePhase::Playing => None,
        GamePhase::GameOver => Some(("GAME OVER", colors::GAME_OVER)),
        GamePhase::GameWon => Some(("YOU WIN!", colors::YOU_WIN)),
    };
    if let Some((message, color)) = banner {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        vertices.extend(text_centered(
            message,
            center - Vec2::new(0.0, 20.0),
            BANNER_SCALE,
            color,
        ));
        vertices.extend(text_centered(
            "PRESS SPACE TO PLAY AGAIN",
            center + Vec2::new(0.0, 20.0),
            PROMPT_SCALE,
            colors::WHITE,
        ));
    }

    if let Some(fps) = fps {
        let height = GLYPH_HEIGHT as f32 * FPS_SCALE;
        vertices.extend(text(
            &format!("FPS: {}", fps),
            Vec2::new(10.0, SCREEN_HEIGHT - 10.0 - height),
            FPS_SCALE,
            colors::FPS,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::text::measure;

    fn has_color(vertices: &[Vertex], color: [f32; 4]) -> bool {
        vertices.iter().any(|v| v.color == color)
    }

    fn text_len(s: &str, scale: f32) -> usize {
        text(s, Vec2::ZERO, scale, colors::WHITE).len()
    }

    #[test]
    fn test_ball_is_drawn_first() {
        let state = GameState::new(1);
        let v = build(&state, None);
        let ball = &v[..6];
        assert!(ball.iter().all(|v| v.color == colors::BALL));
        assert!(ball.iter().any(|v| v.position == [296.0, 196.0]));
        assert!(ball.iter().any(|v| v.position == [304.0, 204.0]));
    }

    #[test]
    fn test_paddle_is_centred_on_its_position() {
        let state = GameState::new(1);
        let paddle = &build(&state, None)[6..12];
        assert!(paddle.iter().all(|v| v.color == colors::PADDLE));
        assert!(paddle.iter().any(|v| v.position == [260.0, 365.0]));
        assert!(paddle.iter().any(|v| v.position == [340.0, 375.0]));
    }

    #[test]
    fn test_only_live_bricks_are_drawn() {
        let mut state = GameState::new(1);
        let full = build(&state, None).len();
        state.bricks[0].alive = false;
        let fewer = build(&state, None).len();
        // Fill plus four border strips
        assert_eq!(full - fewer, 6 + 24);

        for brick in state.bricks.iter_mut().filter(|b| b.tier.points() == 7) {
            brick.alive = false;
        }
        assert!(!has_color(&build(&state, None), colors::rgb([255, 0, 0])));
    }

    #[test]
    fn test_hud_text() {
        let state = GameState::new(1);
        let hud = text_len("0000", SCORE_SCALE) + text_len("BALLS: 3", LIVES_SCALE);
        let shapes = 6 + 6 + 60 * 30;
        assert_eq!(build(&state, None).len(), shapes + hud);
    }

    #[test]
    fn test_lives_fit_on_screen() {
        let width = measure("BALLS: 3", LIVES_SCALE).x;
        assert!(LIVES_POS.x + width <= SCREEN_WIDTH);
    }

    #[test]
    fn test_banners_follow_phase() {
        let mut state = GameState::new(1);
        let playing = build(&state, None).len();
        let prompt = text_len("PRESS SPACE TO PLAY AGAIN", PROMPT_SCALE);

        state.phase = GamePhase::GameOver;
        let over = build(&state, None);
        assert_eq!(
            over.len() - playing,
            text_len("GAME OVER", BANNER_SCALE) + prompt
        );

        state.phase = GamePhase::GameWon;
        let won = build(&state, None);
        assert_eq!(won.len() - playing, text_len("YOU WIN!", BANNER_SCALE) + prompt);
    }

    #[test]
    fn test_banner_colors() {
        let mut state = GameState::new(1);
        // Red and green bricks share the banner colors
        for brick in &mut state.bricks {
            brick.alive = false;
        }

        state.phase = GamePhase::GameOver;
        let over = build(&state, None);
        assert!(has_color(&over, colors::GAME_OVER));
        assert!(!has_color(&over, colors::YOU_WIN));

        state.phase = GamePhase::GameWon;
        let won = build(&state, None);
        assert!(has_color(&won, colors::YOU_WIN));
        assert!(!has_color(&won, colors::GAME_OVER));
    }

    #[test]
    fn test_fps_readout_is_optional() {
        let state = GameState::new(1);
        assert!(!has_color(&build(&state, None), colors::FPS));

        let v = build(&state, Some(60));
        let fps: Vec<_> = v.iter().filter(|v| v.color == colors::FPS).collect();
        assert_eq!(fps.len(), text_len("FPS: 60", FPS_SCALE));
        assert!(fps.iter().all(|v| v.position[1] <= SCREEN_HEIGHT - 10.0));
        assert!(fps.iter().all(|v| v.position[0] >= 10.0));
    }
}
