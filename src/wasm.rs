//! Browser build: a `Game` handle for the page's event listeners, plus the
//! `localStorage` best score and `<audio>` cues it uses.

use enum_map::EnumMap;
use wasm_bindgen::prelude::*;
use web_sys::{console, HtmlAudioElement, Storage};

use crate::audio::{Audio, Cue, Jukebox};
use crate::engine::GridEngine;
use crate::input::{key_command, Command, Swipe};
use crate::render::canvas_renderer::CanvasRenderer;
use crate::render::{GameEvent, Renderer};
use crate::score::{ScoreStore, Scoreboard};
use crate::session::Session;

const BEST_KEY: &str = "best2048";

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Best score under the `best2048` key of `window.localStorage`
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());

        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for LocalStorageStore {
    fn get(&self) -> Result<Option<u64>, String> {
        let storage = self.storage.as_ref().ok_or("localStorage unavailable")?;
        let raw = storage
            .get_item(BEST_KEY)
            .map_err(|e| format!("{:?}", e))?;

        match raw {
            None => Ok(None),
            Some(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| format!("invalid stored best {:?}: {}", raw, e)),
        }
    }

    fn set(&mut self, value: u64) -> Result<(), String> {
        let storage = self.storage.as_ref().ok_or("localStorage unavailable")?;

        storage
            .set_item(BEST_KEY, &value.to_string())
            .map_err(|e| format!("{:?}", e))
    }
}

/// Cues from `sounds/move.mp3` and `sounds/game-over.wav`
pub struct WebAudio {
    elements: EnumMap<Cue, Option<HtmlAudioElement>>,
    ignore_rejection: Closure<dyn FnMut(JsValue)>,
}

impl WebAudio {
    pub fn new() -> Self {
        let elements = EnumMap::from_fn(|cue| {
            let source = match cue {
                Cue::Move => "sounds/move.mp3",
                Cue::GameOver => "sounds/game-over.wav",
            };

            let element = HtmlAudioElement::new_with_src(source).ok()?;
            element.set_volume(cue.volume() as f64);
            Some(element)
        });

        let ignore_rejection = Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>);

        Self {
            elements,
            ignore_rejection,
        }
    }
}

impl Default for WebAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio for WebAudio {
    fn play(&mut self, cue: Cue) -> Result<(), String> {
        let element = self.elements[cue]
            .as_ref()
            .ok_or_else(|| format!("no audio element for {:?}", cue))?;

        element.pause().map_err(|e| format!("{:?}", e))?;
        element.set_current_time(0.0);

        let playing: js_sys::Promise = element.play().map_err(|e| format!("{:?}", e))?;

        // blocked autoplay rejects asynchronously
        let _ = playing.catch(&self.ignore_rejection);

        Ok(())
    }
}

/// A game bound to a page. The page forwards key and touch events here.
#[wasm_bindgen]
pub struct Game {
    session: Session<LocalStorageStore>,
    renderer: Option<CanvasRenderer>,
    swipe: Option<Swipe>,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Game {
        init_panic_hook();

        let engine = match seed {
            Some(seed) => GridEngine::with_seed(seed),
            None => GridEngine::new(),
        };

        let scoreboard = Scoreboard::new(LocalStorageStore::new());
        let jukebox = Jukebox::new(Box::new(WebAudio::new()));

        Game {
            session: Session::new(engine, scoreboard, jukebox),
            renderer: None,
            swipe: None,
        }
    }

    /// Attach the canvas with the given element id and draw the board.
    #[wasm_bindgen]
    pub fn attach(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        let mut renderer = CanvasRenderer::new(canvas_id)?;

        renderer.initialize(&self.session.view())?;
        renderer.handle_event(&GameEvent::Started)?;

        self.renderer = Some(renderer);
        Ok(())
    }

    /// Handle a `KeyboardEvent.key`. Returns whether the key was used.
    #[wasm_bindgen]
    pub fn key(&mut self, name: &str) -> Result<bool, JsValue> {
        match key_command(name) {
            Some(Command::Quit) | None => Ok(false),
            Some(command) => {
                self.dispatch(command)?;
                Ok(true)
            }
        }
    }

    #[wasm_bindgen]
    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.swipe = Some(Swipe::start(x, y));
    }

    /// Finish a swipe. Returns whether it was read as a move.
    #[wasm_bindgen]
    pub fn touch_end(&mut self, x: f64, y: f64) -> Result<bool, JsValue> {
        let direction = self.swipe.take().and_then(|swipe| swipe.finish(x, y));

        match direction {
            Some(direction) => {
                self.dispatch(Command::Move(direction))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[wasm_bindgen]
    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.dispatch(Command::Restart)
    }

    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(renderer) = &mut self.renderer {
            renderer.update(&self.session.view())?;
        }

        Ok(())
    }

    #[wasm_bindgen]
    pub fn score(&self) -> u64 {
        self.session.engine().score()
    }

    #[wasm_bindgen]
    pub fn best(&self) -> u64 {
        self.session.scoreboard().best()
    }

    #[wasm_bindgen]
    pub fn is_over(&self) -> bool {
        self.session.engine().is_terminal()
    }

    /// The 16 cells in row-major order, 0 for empty.
    #[wasm_bindgen]
    pub fn cells(&self) -> Vec<u32> {
        self.session.engine().grid().cells().to_vec()
    }
}

impl Game {
    fn dispatch(&mut self, command: Command) -> Result<(), JsValue> {
        let events = self.session.handle(command);

        if events.contains(&GameEvent::GameOver) {
            console::log_1(&format!("Game over with score {}", self.score()).into());
        }

        if let Some(renderer) = &mut self.renderer {
            for event in &events {
                renderer.handle_event(event)?;
            }

            renderer.update(&self.session.view())?;
        }

        Ok(())
    }
}
