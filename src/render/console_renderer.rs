use super::{BoardView, GameEvent, Renderer};
use crate::input::{console_command, Command};

use log::debug;
use std::io::{BufRead, Write};

/// Text renderer that also reads commands, one per line
pub struct ConsoleRenderer<R: BufRead, W: Write> {
    input: R,
    output: W,
    should_quit: bool,
}

impl<R: BufRead, W: Write> ConsoleRenderer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            should_quit: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn draw(&mut self, view: &BoardView) -> Result<(), String> {
        let mut text = format!("Score: {}  Best: {}\n", view.score, view.best);

        for y in 0..view.grid.height() {
            for x in 0..view.grid.width() {
                match view.grid.get(x, y) {
                    Some(&value) if value != 0 => text.push_str(&format!("{:>6}", value)),
                    _ => text.push_str(&format!("{:>6}", ".")),
                }
            }

            text.push('\n');
        }

        if view.game_over {
            text.push_str("Game over! Type r to play again.\n");
        }

        self.write(&text)
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| e.to_string())
    }
}

impl<R: BufRead, W: Write> Renderer for ConsoleRenderer<R, W> {
    type Error = String;

    fn initialize(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.write("Move with w/a/s/d (or h/j/k/l), r restarts, q quits.\n")?;
        self.draw(view)
    }

    fn handle_event(&mut self, event: &GameEvent) -> Result<(), Self::Error> {
        match event {
            GameEvent::NewBest(best) => self.write(&format!("New best: {}\n", best)),
            GameEvent::Restarted => self.write("New game.\n"),
            _ => Ok(()),
        }
    }

    fn update(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.draw(view)
    }

    fn poll_input(&mut self) -> Option<Command> {
        loop {
            let mut line = String::new();

            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    self.should_quit = true;
                    return None;
                }
                Ok(_) => {}
            }

            match console_command(&line) {
                Some(command) => return Some(command),
                None => debug!("Ignoring input {:?}", line.trim()),
            }
        }
    }

    fn should_quit(&mut self) -> bool {
        self.should_quit
    }

    fn finalize(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.write(&format!("Final score: {}  Best: {}\n", view.score, view.best))
    }
}
