//! A 4x4 sliding-tile merge puzzle.
//!
//! [`engine::GridEngine`] holds all of the game logic: it slides and merges
//! tiles, keeps the score and spots the end of the game. Everything else
//! (renderers, input mapping, sound cues, the best-score store) is glue that
//! [`session::Session`] wires together for the terminal, SDL and browser
//! front ends.
//!
//! ```
//! use twenty48::engine::GridEngine;
//! use twenty48::grid::Direction;
//!
//! let mut engine = GridEngine::with_seed(7);
//! assert_eq!(engine.tile_count(), 2);
//!
//! let outcome = engine.apply_move(Direction::Left);
//! if !outcome.effective {
//!     assert_eq!(engine.score(), 0);
//! }
//! ```

pub mod audio;
pub mod engine;
pub mod grid;
pub mod input;
pub mod line;
pub mod render;
pub mod score;
pub mod session;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "wasm")]
pub mod wasm;
