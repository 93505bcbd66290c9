use crate::config::{BASE_TICK_MS, GRID};
use crate::grid::{Cell, Heading};

pub const START_SNAKE: [Cell; 3] = [Cell::new(10, 12), Cell::new(9, 12), Cell::new(8, 12)];
pub const START_FOOD: Cell = Cell::new(16, 12);

// Draws before food placement gives up on sampling and scans for a free cell.
const MAX_FOOD_DRAWS: usize = (GRID * GRID * 8) as usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Ended,
}

/// One run of the game. A restart replaces it wholesale.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Head first, tail last.
    pub snake: Vec<Cell>,
    pub heading: Heading,
    pub pending: Heading,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
    pub tick_ms: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let mut state = Self::unplaced();
        state.place_food();
        state
    }

    /// Fresh state with the food at its fixed starting cell.
    pub fn unplaced() -> Self {
        Self {
            snake: START_SNAKE.to_vec(),
            heading: Heading::Right,
            pending: Heading::Right,
            food: START_FOOD,
            score: 0,
            phase: Phase::Running,
            tick_ms: BASE_TICK_MS,
        }
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Queues a turn for the next step. A reversal of the committed heading is
    /// refused.
    pub fn request_heading(&mut self, heading: Heading) -> bool {
        if heading == self.heading.opposite() {
            return false;
        }
        self.pending = heading;
        true
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Ended => Phase::Ended,
        };
    }

    /// Moves the food to a random cell not covered by the snake.
    pub fn place_food(&mut self) {
        for _ in 0..MAX_FOOD_DRAWS {
            let candidate = Cell::new(
                macroquad::rand::gen_range(0, GRID),
                macroquad::rand::gen_range(0, GRID),
            );
            if !self.occupies(candidate) {
                self.food = candidate;
                return;
            }
        }
        if let Some(free) = Cell::all().find(|c| !self.occupies(*c)) {
            self.food = free;
        }
    }

    /// Speed relative to the base interval, rounded to one decimal.
    pub fn speed_multiplier(&self) -> f64 {
        (BASE_TICK_MS as f64 / self.tick_ms as f64 * 10.0).round() / 10.0
    }
}
