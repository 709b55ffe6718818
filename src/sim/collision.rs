//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is a square, the paddle and bricks are
//! rectangles. Edges touching counts as overlap.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};
use crate::audio::{SoundEffect, SoundPlayer};
use crate::consts::*;

/// Inclusive overlap test between two boxes given as (min, max) corners
#[inline]
pub fn boxes_overlap(a: (Vec2, Vec2), b: (Vec2, Vec2)) -> bool {
    a.1.x >= b.0.x && a.0.x <= b.1.x && a.1.y >= b.0.y && a.0.y <= b.1.y
}

/// Bounce the ball off the paddle.
///
/// The ball must overlap the paddle's vertical band and its centre must lie
/// within the paddle's horizontal extent. The outgoing horizontal speed is
/// proportional to how far from the paddle centre the ball landed; the ball
/// always leaves upward. Returns whether the paddle was hit.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle, sfx: &dyn SoundPlayer) -> bool {
    let half_w = paddle.half_width();
    let half_h = paddle.height / 2.0;

    let in_band = ball.pos.y + BALL_HALF_SIZE >= paddle.y - half_h
        && ball.pos.y - BALL_HALF_SIZE <= paddle.y + half_h;
    let in_span = ball.pos.x >= paddle.x - half_w && ball.pos.x <= paddle.x + half_w;
    if !(in_band && in_span) {
        return false;
    }

    // -1 at the left edge, 0 at the centre, 1 at the right edge
    let hit_pos = (ball.pos.x - paddle.x) / half_w;
    ball.vel.x = BALL_SPEED * hit_pos;
    ball.vel.y = -ball.vel.y.abs();
    ball.speed_multiplier = (ball.speed_multiplier + SPEED_INCREMENT).min(MAX_SPEED_MULTIPLIER);

    sfx.play(SoundEffect::Paddle);
    true
}

/// Break the first live brick the ball overlaps, in row-major order.
///
/// Only the vertical velocity is reflected, whichever face was struck. At most
/// one brick is destroyed per call. Returns the points earned (0 on a miss).
pub fn brick_collision(ball: &mut Ball, bricks: &mut [Brick], sfx: &dyn SoundPlayer) -> u32 {
    let ball_box = ball.bounds();

    let Some(brick) = bricks
        .iter_mut()
        .filter(|b| b.alive)
        .find(|b| boxes_overlap(ball_box, (b.pos, b.pos + b.size)))
    else {
        return 0;
    };

    brick.alive = false;
    ball.vel.y = -ball.vel.y;
    sfx.play(brick.tier.pitch().sound());
    brick.tier.points()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingPlayer;
    use crate::sim::state::{BrickTier, create_bricks};

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel,
            speed_multiplier: 1.0,
        }
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let sfx = RecordingPlayer::default();
        let paddle = Paddle::default();
        let mut ball = ball_at(paddle.x, paddle.y - 6.0, Vec2::new(3.0, 4.0));

        assert!(paddle_collision(&mut ball, &paddle, &sfx));
        assert_eq!(ball.vel.x, 0.0);
        assert_eq!(ball.vel.y, -4.0);
        assert_eq!(sfx.played(), vec![SoundEffect::Paddle]);
    }

    #[test]
    fn test_paddle_edge_hits_angle_outward() {
        let sfx = RecordingPlayer::default();
        let paddle = Paddle::default();

        let mut ball = ball_at(paddle.x + 40.0, paddle.y, Vec2::new(-4.0, 4.0));
        assert!(paddle_collision(&mut ball, &paddle, &sfx));
        assert_eq!(ball.vel.x, BALL_SPEED);

        let mut ball = ball_at(paddle.x - 20.0, paddle.y, Vec2::new(4.0, 4.0));
        assert!(paddle_collision(&mut ball, &paddle, &sfx));
        assert_eq!(ball.vel.x, -BALL_SPEED / 2.0);
    }

    #[test]
    fn test_paddle_always_sends_ball_up() {
        let sfx = RecordingPlayer::default();
        let paddle = Paddle::default();
        // Already moving up (e.g. caught inside the paddle band)
        let mut ball = ball_at(paddle.x, paddle.y, Vec2::new(0.0, -4.0));
        assert!(paddle_collision(&mut ball, &paddle, &sfx));
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn test_paddle_miss() {
        let sfx = RecordingPlayer::default();
        let paddle = Paddle::default();

        // Horizontally outside
        let mut ball = ball_at(paddle.x + 41.0, paddle.y, Vec2::new(0.0, 4.0));
        assert!(!paddle_collision(&mut ball, &paddle, &sfx));

        // Above the band: bottom edge at 364, band starts at 365
        let mut ball = ball_at(paddle.x, 360.0, Vec2::new(0.0, 4.0));
        assert!(!paddle_collision(&mut ball, &paddle, &sfx));
        assert_eq!(ball.vel.y, 4.0);
        assert!(sfx.played().is_empty());
    }

    #[test]
    fn test_speed_multiplier_caps() {
        let sfx = RecordingPlayer::default();
        let paddle = Paddle::default();
        let mut ball = ball_at(paddle.x, paddle.y, Vec2::new(0.0, 4.0));

        paddle_collision(&mut ball, &paddle, &sfx);
        assert!((ball.speed_multiplier - 1.02).abs() < 1e-6);

        for _ in 0..100 {
            paddle_collision(&mut ball, &paddle, &sfx);
        }
        assert_eq!(ball.speed_multiplier, MAX_SPEED_MULTIPLIER);
    }

    #[test]
    fn test_brick_hit_scores_and_reflects() {
        let sfx = RecordingPlayer::default();
        let mut bricks = create_bricks();
        // Inside the first red brick
        let mut ball = ball_at(20.0, 60.0, Vec2::new(4.0, -4.0));

        let points = brick_collision(&mut ball, &mut bricks, &sfx);

        assert_eq!(points, 7);
        assert!(!bricks[0].alive);
        assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(sfx.played(), vec![SoundEffect::BrickHigh]);
    }

    #[test]
    fn test_brick_hit_only_first_overlap() {
        let sfx = RecordingPlayer::default();
        let mut bricks = create_bricks();
        // Straddling the gap between the first two bricks of row 0
        let mut ball = ball_at(64.0, 60.0, Vec2::new(0.0, -4.0));

        let points = brick_collision(&mut ball, &mut bricks, &sfx);

        assert_eq!(points, 7);
        assert!(!bricks[0].alive);
        assert!(bricks[1].alive);
        assert_eq!(bricks.iter().filter(|b| !b.alive).count(), 1);
    }

    #[test]
    fn test_dead_bricks_are_skipped() {
        let sfx = RecordingPlayer::default();
        let mut bricks = create_bricks();
        bricks[0].alive = false;
        let mut ball = ball_at(20.0, 60.0, Vec2::new(0.0, -4.0));

        assert_eq!(brick_collision(&mut ball, &mut bricks, &sfx), 0);
        assert_eq!(ball.vel.y, -4.0);
        assert!(sfx.played().is_empty());
    }

    #[test]
    fn test_side_hit_still_reflects_vertically() {
        let sfx = RecordingPlayer::default();
        let mut bricks = vec![Brick::new(Vec2::new(100.0, 100.0), BrickTier::Green)];
        // Touching the left face while moving right
        let mut ball = ball_at(96.0, 110.0, Vec2::new(4.0, 2.0));

        assert_eq!(brick_collision(&mut ball, &mut bricks, &sfx), 2);
        assert_eq!(ball.vel, Vec2::new(4.0, -2.0));
        assert_eq!(sfx.played(), vec![SoundEffect::BrickMid]);
    }

    #[test]
    fn test_tier_sounds() {
        let cases = [
            (BrickTier::Orange, SoundEffect::BrickHigh, 5),
            (BrickTier::Yellow, SoundEffect::BrickMid, 3),
            (BrickTier::Blue, SoundEffect::BrickLow, 1),
            (BrickTier::Purple, SoundEffect::BrickLow, 1),
        ];
        for (tier, effect, value) in cases {
            let sfx = RecordingPlayer::default();
            let mut bricks = vec![Brick::new(Vec2::new(0.0, 0.0), tier)];
            let mut ball = ball_at(10.0, 10.0, Vec2::new(0.0, -4.0));
            assert_eq!(brick_collision(&mut ball, &mut bricks, &sfx), value);
            assert_eq!(sfx.played(), vec![effect]);
        }
    }

    #[test]
    fn test_boxes_overlap_inclusive() {
        let a = (Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(boxes_overlap(a, (Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0))));
        assert!(!boxes_overlap(a, (Vec2::new(10.1, 0.0), Vec2::new(20.0, 10.0))));
    }
}
