use crate::audio::Jukebox;
use crate::cli::AppConfig;
use crate::engine::GridEngine;
use crate::render::console_renderer::ConsoleRenderer;
use crate::render::{GameEvent, Renderer};
use crate::score::{FileStore, ScoreStore, Scoreboard};
use crate::session::Session;

#[cfg(feature = "sdl2")]
use crate::audio::ToneAudio;
#[cfg(feature = "sdl2")]
use crate::render::sdl_renderer::{SdlConfig, SdlRenderer};

#[cfg(feature = "image")]
use crate::render::image_renderer::ImageRenderer;

use log::{info, warn};
use std::io;
use std::time::Duration;

pub type BoxedRenderer = Box<dyn Renderer<Error = String>>;

/// Wait between input polls when no command is pending
const IDLE: Duration = Duration::from_millis(10);

pub struct GameApp {
    config: AppConfig,
}

impl GameApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let engine = match self.config.seed {
            Some(seed) => {
                info!("Using seed: {}", seed);
                GridEngine::with_seed(seed)
            }
            None => GridEngine::new(),
        };

        let scoreboard = Scoreboard::new(FileStore::new(self.config.best_file.clone()));
        let (renderers, mut jukebox) = self.create_renderers()?;

        jukebox.set_muted(self.config.mute);

        let mut session = Session::new(engine, scoreboard, jukebox);

        run_session(&mut session, renderers)?;

        info!("Final score {}", session.engine().score());
        Ok(())
    }

    fn create_renderers(&self) -> Result<(Vec<BoxedRenderer>, Jukebox), Box<dyn std::error::Error>> {
        let mut renderers: Vec<BoxedRenderer> = Vec::new();
        let mut jukebox = Jukebox::silent();

        // Add SDL2 renderer if requested
        #[cfg(feature = "sdl2")]
        if self.config.renderer.visual {
            let sdl_config = SdlConfig {
                window_size: self.config.renderer.window_size,
                vsync: self.config.renderer.vsync,
                fullscreen: self.config.renderer.fullscreen,
            };

            let sdl_renderer = SdlRenderer::new(&sdl_config)?;

            match ToneAudio::new(sdl_renderer.context()) {
                Ok(audio) => jukebox = Jukebox::new(Box::new(audio)),
                Err(e) => warn!("Sound disabled: {}", e),
            }

            renderers.push(Box::new(sdl_renderer));
        }

        // Fall back to the terminal
        if renderers.is_empty() {
            let stdin = io::stdin();
            renderers.push(Box::new(ConsoleRenderer::new(stdin.lock(), io::stdout())));
        }

        // Add image renderer if a snapshot path is specified
        #[cfg(feature = "image")]
        if let Some(snapshot) = &self.config.renderer.snapshot {
            let mut image_renderer = ImageRenderer::new(snapshot.clone());

            if let Some(font) = &self.config.renderer.font {
                image_renderer = image_renderer.with_font(font)?;
            }

            renderers.push(Box::new(image_renderer));
        }

        Ok((renderers, jukebox))
    }
}

/// Drives `session` until a renderer or the player asks to stop.
///
/// Commands are taken from the first renderer that has one, so inputs are
/// handled strictly one at a time.
pub fn run_session<S: ScoreStore>(
    session: &mut Session<S>,
    mut renderers: Vec<BoxedRenderer>,
) -> Result<(), String> {
    for renderer in &mut renderers {
        renderer.initialize(&session.view())?;
        renderer.handle_event(&GameEvent::Started)?;
    }

    loop {
        // Check if any renderer wants to quit
        if renderers.iter_mut().any(|r| r.should_quit()) {
            break;
        }

        let command = renderers.iter_mut().find_map(|r| r.poll_input());

        let command = match command {
            Some(command) => command,
            None => {
                std::thread::sleep(IDLE);
                continue;
            }
        };

        let events = session.handle(command);

        if session.quit_requested() {
            break;
        }

        for event in &events {
            for renderer in &mut renderers {
                renderer.handle_event(event)?;
            }
        }

        let view = session.view();

        for renderer in &mut renderers {
            renderer.update(&view)?;
        }
    }

    // Finalize all renderers
    for renderer in &mut renderers {
        if let Err(e) = renderer.finalize(&session.view()) {
            warn!("{}", e);
        }
    }

    Ok(())
}
