pub mod console_renderer;
pub mod events;
pub mod glyph;
pub mod palette;

#[cfg(feature = "sdl2")]
pub mod sdl_renderer;

#[cfg(feature = "image")]
pub mod image_renderer;

#[cfg(feature = "wasm")]
pub mod canvas_renderer;

pub use events::GameEvent;

use crate::engine::GridEngine;
use crate::grid::Grid;
use crate::input::Command;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub grid: &'a Grid<u32>,
    pub score: u64,
    pub best: u64,
    pub game_over: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(engine: &'a GridEngine, best: u64) -> Self {
        Self {
            grid: engine.grid(),
            score: engine.score(),
            best,
            game_over: engine.is_terminal(),
        }
    }
}

/// Core trait for presenting the game and collecting player input
pub trait Renderer {
    type Error;

    /// Prepare the output with the starting board
    fn initialize(&mut self, view: &BoardView) -> Result<(), Self::Error>;

    /// Handle an event from the game loop
    fn handle_event(&mut self, event: &GameEvent) -> Result<(), Self::Error>;

    /// Redraw with the current state
    fn update(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        let _ = view;
        Ok(())
    }

    /// Next player command, if this renderer is also an input source
    fn poll_input(&mut self) -> Option<Command> {
        None
    }

    /// Check if the user wants to quit (for interactive renderers)
    fn should_quit(&mut self) -> bool {
        false
    }

    /// Final state before the program exits (e.g., save to file)
    fn finalize(&mut self, view: &BoardView) -> Result<(), Self::Error>;
}
