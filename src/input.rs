use crate::grid::Direction;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Maps a browser-style key name (`KeyboardEvent.key`) to a command.
pub fn key_command(name: &str) -> Option<Command> {
    match name {
        "ArrowUp" => Some(Command::Move(Direction::Up)),
        "ArrowDown" => Some(Command::Move(Direction::Down)),
        "ArrowLeft" => Some(Command::Move(Direction::Left)),
        "ArrowRight" => Some(Command::Move(Direction::Right)),
        "r" | "R" => Some(Command::Restart),
        "Escape" => Some(Command::Quit),
        _ => None,
    }
}

/// Maps a line typed at the console to a command.
pub fn console_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "w" | "k" | "up" => Some(Command::Move(Direction::Up)),
        "s" | "j" | "down" => Some(Command::Move(Direction::Down)),
        "a" | "h" | "left" => Some(Command::Move(Direction::Left)),
        "d" | "l" | "right" => Some(Command::Move(Direction::Right)),
        "r" | "restart" => Some(Command::Restart),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// A touch or drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    start: (f64, f64),
}

impl Swipe {
    pub fn start(x: f64, y: f64) -> Self {
        Self { start: (x, y) }
    }

    /// Classifies the gesture ending at `(x, y)`.
    ///
    /// The axis with the larger displacement decides, ties go to the vertical
    /// axis. Screen coordinates grow downward. A gesture that did not move at
    /// all is not a swipe.
    pub fn finish(self, x: f64, y: f64) -> Option<Direction> {
        let dx = x - self.start.0;
        let dy = y - self.start.1;

        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        if dx.abs() > dy.abs() {
            Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
        }
    }
}
