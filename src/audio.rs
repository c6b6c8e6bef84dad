//! Sound cues. Playback problems are never allowed to reach the game.

use enum_map::{Enum, EnumMap};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum Cue {
    Move,
    GameOver,
}

impl Cue {
    /// Playback volume in `0.0..=1.0`.
    pub fn volume(&self) -> f32 {
        match self {
            Cue::Move => 0.15,
            Cue::GameOver => 0.35,
        }
    }
}

pub trait Audio {
    fn play(&mut self, cue: Cue) -> Result<(), String>;
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl Audio for NullAudio {
    fn play(&mut self, _cue: Cue) -> Result<(), String> {
        Ok(())
    }
}

/// Front for an [`Audio`] backend that swallows every failure.
pub struct Jukebox {
    backend: Box<dyn Audio>,
    muted: bool,
    played: EnumMap<Cue, usize>,
}

impl Jukebox {
    pub fn new(backend: Box<dyn Audio>) -> Self {
        Self {
            backend,
            muted: false,
            played: EnumMap::default(),
        }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(NullAudio))
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }

        self.played[cue] += 1;

        if let Err(e) = self.backend.play(cue) {
            debug!("Could not play {:?} cue: {}", cue, e);
        }
    }

    /// How many times `cue` was requested while unmuted.
    pub fn played(&self, cue: Cue) -> usize {
        self.played[cue]
    }
}

#[cfg(feature = "sdl2")]
pub use tone::ToneAudio;

#[cfg(feature = "sdl2")]
mod tone {
    use super::{Audio, Cue};
    use enum_map::EnumMap;
    use sdl2::audio::{AudioQueue, AudioSpecDesired};

    const SAMPLE_RATE: i32 = 44_100;

    /// Synthesised sine cues on an SDL audio queue.
    pub struct ToneAudio {
        queue: AudioQueue<i16>,
        samples: EnumMap<Cue, Vec<i16>>,
    }

    impl ToneAudio {
        pub fn new(context: &sdl2::Sdl) -> Result<Self, String> {
            let audio = context.audio()?;
            let desired = AudioSpecDesired {
                freq: Some(SAMPLE_RATE),
                channels: Some(1),
                samples: None,
            };

            let queue = audio.open_queue::<i16, _>(None, &desired)?;
            queue.resume();

            let samples = EnumMap::from_fn(|cue| match cue {
                Cue::Move => tone(660.0, 0.06, cue.volume()),
                Cue::GameOver => tone(220.0, 0.5, cue.volume()),
            });

            Ok(Self { queue, samples })
        }
    }

    impl Audio for ToneAudio {
        fn play(&mut self, cue: Cue) -> Result<(), String> {
            // restart rather than stack cues
            self.queue.clear();
            self.queue.queue_audio(&self.samples[cue])
        }
    }

    fn tone(frequency: f32, seconds: f32, volume: f32) -> Vec<i16> {
        let count = (SAMPLE_RATE as f32 * seconds) as usize;
        let amplitude = i16::MAX as f32 * volume;

        (0..count)
            .map(|i| {
                let t = i as f32 / SAMPLE_RATE as f32;
                let fade = 1.0 - i as f32 / count as f32;
                ((t * frequency * std::f32::consts::TAU).sin() * amplitude * fade) as i16
            })
            .collect()
    }
}
