use std::collections::VecDeque;

use crate::input::Intent;
use crate::render::{self, HudLabels, Layout};
use crate::state::GameState;
use crate::step::{StepOutcome, step};
use crate::storage::{BestScore, ScoreStore};
use crate::ticker::Ticker;

/// Owns everything the game mutates: the current run, the best score, and
/// the tick source.
pub struct App {
    pub state: GameState,
    pub best: BestScore,
    pub ticker: Ticker,
    intents: VecDeque<Intent>,
    quit: bool,
}

impl App {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        Self::with_state(GameState::new(), store)
    }

    pub fn with_state(state: GameState, store: Box<dyn ScoreStore>) -> Self {
        let ticker = Ticker::new(state.tick_ms);
        Self {
            state,
            best: BestScore::load(store),
            ticker,
            intents: VecDeque::new(),
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push_back(intent);
    }

    /// Applies queued intents, then runs whatever steps are due after `dt_ms`.
    pub fn update(&mut self, dt_ms: f64) {
        while let Some(intent) = self.intents.pop_front() {
            self.apply(intent);
        }
        for _ in 0..self.ticker.advance(dt_ms) {
            if self.tick() {
                // New period; the remaining due ticks belonged to the old one.
                break;
            }
        }
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Turn(heading) => {
                self.state.request_heading(heading);
            }
            Intent::TogglePause => {
                self.state.toggle_pause();
                log::debug!("pause toggled: paused={}", self.state.paused());
            }
            Intent::Restart => self.restart(),
            Intent::Quit => self.quit = true,
        }
    }

    pub fn restart(&mut self) {
        log::info!("restart (previous score {})", self.state.score);
        self.state = GameState::new();
        self.ticker.rearm(self.state.tick_ms);
    }

    /// Runs one step. Returns true when the ticker was re-armed.
    pub fn tick(&mut self) -> bool {
        match step(&mut self.state) {
            StepOutcome::Ate { sped_up: true } => {
                log::info!("speed up: {} ms per step at score {}", self.state.tick_ms, self.state.score);
                self.ticker.rearm(self.state.tick_ms);
                true
            }
            StepOutcome::Collided { score } => {
                log::info!("game over with score {score}");
                if self.best.record(score) {
                    log::info!("new best score: {score}");
                }
                false
            }
            StepOutcome::Ate { sped_up: false } | StepOutcome::Moved | StepOutcome::Idle => false,
        }
    }

    pub fn hud(&self) -> HudLabels {
        HudLabels::new(&self.state, self.best.value())
    }

    pub fn draw(&self, layout: &Layout) {
        render::clear();
        render::paint(&render::compose(&self.state), layout);
        render::paint_hud(&self.hud(), self.state.paused(), layout);
    }
}
