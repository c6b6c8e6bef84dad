//! One player's game: the engine plus its best score and sound cues.

use log::info;

use crate::audio::{Cue, Jukebox};
use crate::engine::GridEngine;
use crate::input::Command;
use crate::render::{BoardView, GameEvent};
use crate::score::{ScoreStore, Scoreboard};

pub struct Session<S: ScoreStore> {
    engine: GridEngine,
    scoreboard: Scoreboard<S>,
    jukebox: Jukebox,
    quit: bool,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(engine: GridEngine, scoreboard: Scoreboard<S>, jukebox: Jukebox) -> Self {
        Self {
            engine,
            scoreboard,
            jukebox,
            quit: false,
        }
    }

    /// Runs one command to completion and reports what happened.
    pub fn handle(&mut self, command: Command) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match command {
            Command::Move(direction) => {
                let outcome = self.engine.apply_move(direction);

                if !outcome.effective {
                    return events;
                }

                self.jukebox.play(Cue::Move);

                if self.scoreboard.record(self.engine.score()) {
                    events.push(GameEvent::NewBest(self.scoreboard.best()));
                }

                events.push(GameEvent::Moved {
                    score_delta: outcome.score_delta,
                });

                if self.engine.is_terminal() {
                    info!(
                        "Game over with score {} (max tile {})",
                        self.engine.score(),
                        self.engine.max_tile()
                    );

                    self.jukebox.play(Cue::GameOver);
                    events.push(GameEvent::GameOver);
                }
            }
            Command::Restart => {
                self.engine.initialize();
                events.push(GameEvent::Restarted);
            }
            Command::Quit => {
                self.quit = true;
            }
        }

        events
    }

    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.engine, self.scoreboard.best())
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn scoreboard(&self) -> &Scoreboard<S> {
        &self.scoreboard
    }

    pub fn jukebox(&self) -> &Jukebox {
        &self.jukebox
    }
}
