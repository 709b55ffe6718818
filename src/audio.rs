//! Audio system using rodio
//!
//! Procedurally generated sound effects - no external files needed!
//! Every effect is synthesized once at startup into a `SoundBank` of 16-bit
//! stereo PCM; playback afterwards is fire-and-forget.

use std::f64::consts::TAU;
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::settings::Settings;

/// Output sample rate in Hz
pub const SAMPLE_RATE: u32 = 22050;
/// Interleaved channels per frame
pub const CHANNELS: u16 = 2;
/// Every effect plays at this volume before the master volume is applied
pub const EFFECT_VOLUME: f32 = 0.3;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits paddle
    Paddle,
    /// Ball hits a side or the top wall
    Wall,
    /// Red or orange brick breaks
    BrickHigh,
    /// Yellow or green brick breaks
    BrickMid,
    /// Any other brick breaks
    BrickLow,
    /// Ball falls past the paddle
    Lose,
    /// Board cleared
    Win,
}

impl SoundEffect {
    pub const COUNT: usize = 7;

    pub const ALL: [SoundEffect; Self::COUNT] = [
        SoundEffect::Paddle,
        SoundEffect::Wall,
        SoundEffect::BrickHigh,
        SoundEffect::BrickMid,
        SoundEffect::BrickLow,
        SoundEffect::Lose,
        SoundEffect::Win,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Paddle => "paddle",
            SoundEffect::Wall => "wall",
            SoundEffect::BrickHigh => "brick_high",
            SoundEffect::BrickMid => "brick_mid",
            SoundEffect::BrickLow => "brick_low",
            SoundEffect::Lose => "lose",
            SoundEffect::Win => "win",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Anything that can play a sound effect.
///
/// The simulation only sees this trait, so it runs the same with real audio,
/// with no audio, or under test.
pub trait SoundPlayer {
    fn play(&self, effect: SoundEffect);
}

/// Player that discards every effect
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&self, _effect: SoundEffect) {}
}

/// A finished effect: interleaved stereo i16 samples
#[derive(Debug, Clone)]
pub struct Pcm {
    samples: Arc<[i16]>,
}

impl Pcm {
    /// Duplicate each mono sample onto both channels
    fn from_mono(mono: impl IntoIterator<Item = i16>) -> Self {
        let samples: Vec<i16> = mono.into_iter().flat_map(|s| [s, s]).collect();
        Self {
            samples: samples.into(),
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Number of stereo frames
    pub fn frames(&self) -> usize {
        self.samples.len() / CHANNELS as usize
    }
}

/// Waveform generators. Noise comes from a seeded PCG stream.
pub struct Synthesizer {
    rng: Pcg32,
    sample_rate: u32,
}

impl Synthesizer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            sample_rate: SAMPLE_RATE,
        }
    }

    fn frames_for_ms(&self, duration_ms: u32) -> usize {
        (self.sample_rate * duration_ms / 1000) as usize
    }

    /// Sine beep with a little random crunch on every sample
    pub fn beep(&mut self, frequency: f32, duration_ms: u32) -> Pcm {
        let n = self.frames_for_ms(duration_ms);
        let sample_rate = self.sample_rate as f64;
        let rng = &mut self.rng;
        Pcm::from_mono((0..n).map(|i| {
            let t = i as f64 / sample_rate;
            let tone = (16000.0 * (TAU * frequency as f64 * t).sin()) as i32;
            let crunch = rng.random_range(-1000..=1000);
            (tone + crunch).clamp(i16::MIN as i32, i16::MAX as i32) as i16
        }))
    }

    /// 200ms noise burst fading linearly to silence
    pub fn explosion(&mut self) -> Pcm {
        let n = self.frames_for_ms(200);
        let last = n.saturating_sub(1).max(1) as f32;
        let rng = &mut self.rng;
        Pcm::from_mono((0..n).map(|i| {
            let envelope = 1.0 - i as f32 / last;
            let noise = rng.random_range(-20000i32..=20000) as f32;
            (noise * envelope) as i16
        }))
    }

    /// 500ms tone gliding from 200Hz up to 800Hz
    pub fn powerup_sweep(&self) -> Pcm {
        let n = self.frames_for_ms(500);
        let last = n.saturating_sub(1).max(1) as f64;
        let sample_rate = self.sample_rate as f64;
        let mut phase = 0.0f64;
        Pcm::from_mono((0..n).map(|i| {
            let sample = (10000.0 * phase.sin()) as i16;
            let frequency = 200.0 + 600.0 * i as f64 / last;
            phase = (phase + TAU * frequency / sample_rate) % TAU;
            sample
        }))
    }
}

/// Every effect, synthesized once and never modified
#[derive(Debug, Clone)]
pub struct SoundBank {
    buffers: [Pcm; SoundEffect::COUNT],
}

impl SoundBank {
    pub fn synthesize(seed: u64) -> Self {
        let mut synth = Synthesizer::new(seed);
        let buffers = SoundEffect::ALL.map(|effect| match effect {
            SoundEffect::Paddle => synth.beep(400.0, 30),
            SoundEffect::Wall => synth.beep(200.0, 20),
            SoundEffect::BrickHigh => synth.beep(800.0, 40),
            SoundEffect::BrickMid => synth.beep(500.0, 40),
            SoundEffect::BrickLow => synth.beep(300.0, 40),
            SoundEffect::Lose => synth.explosion(),
            SoundEffect::Win => synth.powerup_sweep(),
        });
        Self { buffers }
    }

    pub fn get(&self, effect: SoundEffect) -> &Pcm {
        &self.buffers[effect.index()]
    }
}

/// Open output device. The stream must outlive every sink.
struct Output {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Audio manager for the game
pub struct AudioManager {
    output: Option<Output>,
    bank: SoundBank,
    master_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(bank: SoundBank, settings: &Settings) -> Self {
        // No device (headless box, broken driver) just means no sound
        let output = match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Output {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                log::warn!("Failed to open audio output ({}) - audio disabled", e);
                None
            }
        };
        let mut manager = Self {
            output,
            bank,
            master_volume: 1.0,
            muted: settings.muted,
        };
        manager.set_master_volume(settings.master_volume);
        manager
    }

    pub fn is_available(&self) -> bool {
        self.output.is_some()
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            EFFECT_VOLUME * self.master_volume
        }
    }
}

impl SoundPlayer for AudioManager {
    fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(output) = &self.output else { return };

        match Sink::try_new(&output.handle) {
            Ok(sink) => {
                let pcm = self.bank.get(effect);
                sink.set_volume(vol);
                sink.append(SamplesBuffer::new(
                    CHANNELS,
                    SAMPLE_RATE,
                    pcm.samples().to_vec(),
                ));
                sink.detach();
            }
            Err(e) => log::warn!("Could not play {}: {}", effect.name(), e),
        }
    }
}
