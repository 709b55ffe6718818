//! Breakout entry point
//!
//! Opens the window, wires keyboard, audio and GPU to the simulation and runs
//! one tick plus one render per frame at a fixed 60 Hz.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use breakout::consts::{FPS, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use breakout::platform::{FpsCounter, FramePacer, InputEvent, Keyboard};
use breakout::renderer::{RenderState, scene};
use breakout::sim::{GameState, TickInput, tick};
use breakout::{AudioManager, BreakoutError, Settings, SoundBank};

/// Window plus the GPU state drawing into it
struct Graphics {
    window: Arc<Window>,
    render_state: RenderState,
}

struct Game {
    settings: Settings,
    state: GameState,
    audio: AudioManager,
    keyboard: Keyboard,
    pacer: FramePacer,
    fps: FpsCounter,
    graphics: Option<Graphics>,
    /// Fatal error raised inside the event loop
    error: Option<BreakoutError>,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);

        let audio = AudioManager::new(SoundBank::synthesize(seed), &settings);
        log::info!("Audio available: {}", audio.is_available());

        let now = Instant::now();
        Self {
            settings,
            state: GameState::new(seed),
            audio,
            keyboard: Keyboard::default(),
            pacer: FramePacer::new(FPS, now),
            fps: FpsCounter::new(now),
            graphics: None,
            error: None,
        }
    }

    fn create_graphics(event_loop: &ActiveEventLoop) -> Result<Graphics, BreakoutError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);
        let render_state = pollster::block_on(RenderState::new(window.clone()))?;
        Ok(Graphics {
            window,
            render_state,
        })
    }

    /// Run one simulation step. Returns false once the player asked to quit.
    fn update(&mut self) -> bool {
        let events = self.keyboard.frame_events();
        if events.contains(&InputEvent::Quit) {
            return false;
        }
        tick(&mut self.state, &TickInput::from_events(&events), &self.audio);
        true
    }

    /// Render the current frame
    fn render(&mut self) {
        if let Some(fps) = self.fps.frame(Instant::now()) {
            log::debug!("FPS: {}", fps);
        }
        let fps = self.settings.show_fps.then(|| self.fps.fps());
        let vertices = scene::build(&self.state, fps);

        let Some(graphics) = &mut self.graphics else {
            return;
        };
        let render_state = &mut graphics.render_state;
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                let (width, height) = render_state.size;
                render_state.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match Self::create_graphics(event_loop) {
            Ok(graphics) => self.graphics = Some(graphics),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.keyboard.request_quit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    self.keyboard.handle_key(key_code, event.state, event.repeat);
                }
            }
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(graphics) = &mut self.graphics {
                    graphics.render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.pacer.poll(Instant::now()) {
            if !self.update() {
                log::info!("Quit requested");
                event_loop.exit();
                return;
            }
            if let Some(graphics) = &self.graphics {
                graphics.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}

fn run() -> Result<(), BreakoutError> {
    let settings = Settings::load();
    let event_loop = EventLoop::new()?;
    let mut game = Game::new(settings);
    event_loop.run_app(&mut game)?;
    match game.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
