use std::fmt;

use enum_map::EnumMap;
use log::{debug, trace};
use rand::{thread_rng, Rng, RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::grid::{Direction, Grid};
use crate::line::{merge_left, Line, Orientation, SIDE};

/// Chance that a spawned tile is a 2 rather than a 4.
const TWO_PROBABILITY: f64 = 0.9;

pub type Position = (usize, usize);

/// Result of [`GridEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one tile moved or merged, and a new tile was placed.
    pub effective: bool,
    pub score_delta: u64,
}

/// Owns the 4x4 board and the running score.
pub struct GridEngine {
    grid: Grid<u32>,
    score: u64,
    rng: Box<dyn RngCore>,
}

impl GridEngine {
    /// A freshly initialized game using a thread-seeded random source.
    pub fn new() -> Self {
        let rng = XorShiftRng::from_rng(thread_rng()).unwrap_or_else(|_| XorShiftRng::seed_from_u64(0));

        Self::with_rng(Box::new(rng))
    }

    /// A freshly initialized game whose tile placement is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Box::new(XorShiftRng::seed_from_u64(seed)))
    }

    fn with_rng(rng: Box<dyn RngCore>) -> Self {
        let mut engine = Self {
            grid: empty_grid(),
            score: 0,
            rng,
        };

        engine.initialize();
        engine
    }

    /// Adopts an existing board, e.g. for tests or tooling.
    ///
    /// The board must be 4x4 and every occupied cell must hold a power of two
    /// no smaller than 2.
    pub fn from_grid(grid: Grid<u32>, score: u64, seed: u64) -> Result<Self, String> {
        if grid.width() != SIDE || grid.height() != SIDE {
            return Err(format!(
                "board must be {}x{}, got {}x{}",
                SIDE,
                SIDE,
                grid.width(),
                grid.height()
            ));
        }

        if let Some((x, y, value)) = grid
            .iter()
            .find(|&(_, _, &v)| v != 0 && (v < 2 || !v.is_power_of_two()))
        {
            return Err(format!("invalid tile {} at ({}, {})", value, x, y));
        }

        Ok(Self {
            grid,
            score,
            rng: Box::new(XorShiftRng::seed_from_u64(seed)),
        })
    }

    /// Clears the board and score, then places two random tiles.
    pub fn initialize(&mut self) {
        self.grid = empty_grid();
        self.score = 0;

        self.spawn_tile();
        self.spawn_tile();

        debug!("New game started");
    }

    /// Slides every tile toward `direction`.
    ///
    /// When nothing moves the board and score are left untouched and the
    /// outcome is not effective. Otherwise the score grows by the merged
    /// values and one new tile is placed.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let (grid, score_delta) = match self.slide(direction) {
            Some(result) => result,
            None => return MoveOutcome::default(),
        };

        self.grid = grid;
        self.score += score_delta;
        self.spawn_tile();

        debug!(
            "Moved {}: +{} (score {})",
            direction.name(),
            score_delta,
            self.score
        );

        MoveOutcome {
            effective: true,
            score_delta,
        }
    }

    /// The board after sliding toward `direction`, without placing a new
    /// tile. `None` when no line would change.
    pub fn slide(&self, direction: Direction) -> Option<(Grid<u32>, u64)> {
        let orientation = Orientation::for_direction(direction);
        let mut grid = self.grid.clone();
        let mut gained = 0;
        let mut changed = false;

        for index in 0..SIDE {
            let before = self.read_line(orientation, index);
            let (after, delta) = merge_left(before);

            if after != before {
                changed = true;
                gained += delta;

                for (offset, value) in after.into_iter().enumerate() {
                    let (x, y) = orientation.cell(index, offset);

                    if let Some(cell) = grid.get_mut(x, y) {
                        *cell = value;
                    }
                }
            }
        }

        changed.then_some((grid, gained))
    }

    fn read_line(&self, orientation: Orientation, index: usize) -> Line {
        let mut line = [0; SIDE];

        for (offset, slot) in line.iter_mut().enumerate() {
            let (x, y) = orientation.cell(index, offset);
            *slot = self.grid.get(x, y).copied().unwrap_or(0);
        }

        line
    }

    /// True when the board is full and no two adjacent tiles match.
    ///
    /// Only the right and lower neighbour of each cell are compared; every
    /// adjacent pair is the right or lower pair of exactly one cell.
    pub fn is_terminal(&self) -> bool {
        if self.grid.iter().any(|(_, _, &value)| value == 0) {
            return false;
        }

        !self.grid.iter().any(|(x, y, value)| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .any(|direction| self.grid.get_neighbor(x, y, direction) == Some(value))
        })
    }

    /// Directions that would currently change the board.
    pub fn legal_moves(&self) -> EnumMap<Direction, bool> {
        EnumMap::from_fn(|direction| self.slide(direction).is_some())
    }

    pub fn grid(&self) -> &Grid<u32> {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.grid.cells().iter().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.cells().iter().copied().max().unwrap_or(0)
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.grid
            .iter()
            .filter(|&(_, _, &value)| value == 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    fn spawn_tile(&mut self) -> Option<Position> {
        let empty = self.empty_cells();

        if empty.is_empty() {
            return None;
        }

        let (x, y) = empty[self.rng.gen_range(0..empty.len())];
        let value = if self.rng.gen_bool(TWO_PROBABILITY) { 2 } else { 4 };

        self.grid.set(x, y, value).ok()?;

        trace!("Spawned {} at ({}, {})", value, x, y);

        Some((x, y))
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                match self.grid.get(x, y) {
                    Some(&value) if value != 0 => write!(f, "{:>6}", value)?,
                    _ => write!(f, "{:>6}", ".")?,
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

fn empty_grid() -> Grid<u32> {
    Grid::new(SIDE, SIDE, &mut |_, _| 0)
}
