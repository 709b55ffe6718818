//! Platform abstraction layer
//!
//! Handles the boundary between the window system and the game:
//! - Keyboard events → `InputEvent`
//! - Frame pacing at a fixed rate
//! - FPS measurement

use std::time::{Duration, Instant};

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Discrete input the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    /// Restart after the game has ended
    Confirm,
    Quit,
}

/// Tracks key state between frames.
///
/// Direction keys are held: they produce an event every frame while down.
/// Confirm and Quit fire once per press.
#[derive(Debug, Default)]
pub struct Keyboard {
    left_held: bool,
    right_held: bool,
    confirm: bool,
    quit: bool,
}

impl Keyboard {
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        let pressed = state == ElementState::Pressed;
        match key {
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            KeyCode::Space if pressed && !repeat => self.confirm = true,
            KeyCode::Escape if pressed => self.quit = true,
            _ => {}
        }
    }

    /// Window close request
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Keys are lost on focus change; forget held directions
    pub fn release_all(&mut self) {
        self.left_held = false;
        self.right_held = false;
    }

    /// Events for the coming frame. One-shot events are consumed.
    pub fn frame_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::with_capacity(4);
        if self.left_held {
            events.push(InputEvent::MoveLeft);
        }
        if self.right_held {
            events.push(InputEvent::MoveRight);
        }
        if std::mem::take(&mut self.confirm) {
            events.push(InputEvent::Confirm);
        }
        if std::mem::take(&mut self.quit) {
            events.push(InputEvent::Quit);
        }
        events
    }
}

/// Fixed-rate frame deadlines
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            next: now,
        }
    }

    /// When the next frame is due
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Returns true if a frame is due and schedules the following one.
    /// After a stall the schedule restarts from `now` instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.frame;
        if self.next <= now {
            self.next = now + self.frame;
        }
        true
    }
}

/// Frames-per-second over one-second windows
#[derive(Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
    fps: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: 0,
            window_start: now,
            fps: 0,
        }
    }

    /// Count a frame. Returns the new reading when a window closes.
    pub fn frame(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        self.fps = (self.frames as f64 / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_repeat_every_frame() {
        let mut keys = Keyboard::default();
        keys.handle_key(KeyCode::ArrowLeft, ElementState::Pressed, false);

        assert_eq!(keys.frame_events(), vec![InputEvent::MoveLeft]);
        assert_eq!(keys.frame_events(), vec![InputEvent::MoveLeft]);

        keys.handle_key(KeyCode::ArrowLeft, ElementState::Released, false);
        assert!(keys.frame_events().is_empty());
    }

    #[test]
    fn test_confirm_fires_once() {
        let mut keys = Keyboard::default();
        keys.handle_key(KeyCode::Space, ElementState::Pressed, false);
        keys.handle_key(KeyCode::Space, ElementState::Pressed, true);

        assert_eq!(keys.frame_events(), vec![InputEvent::Confirm]);
        assert!(keys.frame_events().is_empty());
    }

    #[test]
    fn test_quit_sources() {
        let mut keys = Keyboard::default();
        keys.request_quit();
        assert_eq!(keys.frame_events(), vec![InputEvent::Quit]);

        keys.handle_key(KeyCode::Escape, ElementState::Pressed, false);
        assert_eq!(keys.frame_events(), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_both_directions_and_release_all() {
        let mut keys = Keyboard::default();
        keys.handle_key(KeyCode::ArrowLeft, ElementState::Pressed, false);
        keys.handle_key(KeyCode::ArrowRight, ElementState::Pressed, false);
        keys.handle_key(KeyCode::KeyA, ElementState::Pressed, false);
        assert_eq!(
            keys.frame_events(),
            vec![InputEvent::MoveLeft, InputEvent::MoveRight]
        );

        keys.release_all();
        assert!(keys.frame_events().is_empty());
    }

    #[test]
    fn test_pacer_waits_for_deadline() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(60, start);

        assert!(pacer.poll(start));
        assert!(!pacer.poll(start));
        assert!(!pacer.poll(start + Duration::from_millis(10)));
        assert!(pacer.poll(start + Duration::from_millis(17)));
    }

    #[test]
    fn test_pacer_does_not_burst_after_stall() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(60, start);
        assert!(pacer.poll(start));

        let late = start + Duration::from_secs(1);
        assert!(pacer.poll(late));
        assert!(!pacer.poll(late));
        assert!(pacer.deadline() > late);
    }

    #[test]
    fn test_fps_counter() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        for i in 1..60 {
            assert_eq!(counter.frame(start + Duration::from_millis(i * 16)), None);
        }
        assert_eq!(counter.frame(start + Duration::from_secs(1)), Some(60));
        assert_eq!(counter.fps(), 60);
    }
}
