use crate::config::{MIN_TICK_MS, SPEED_UP_EVERY, TICK_DECREMENT_MS};
use crate::state::{GameState, Phase};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Paused or ended; nothing changed.
    Idle,
    Moved,
    /// Food eaten. `sped_up` means the tick interval shrank and the loop
    /// driver has to be re-armed.
    Ate { sped_up: bool },
    /// Head ran into the body. The snake is left as it was before the move.
    Collided { score: u32 },
}

/// Advances the game by one cell.
pub fn step(state: &mut GameState) -> StepOutcome {
    if state.phase != Phase::Running {
        return StepOutcome::Idle;
    }

    state.heading = state.pending;
    let new_head = state.head().stepped(state.heading);

    // The tail hasn't moved yet, so its current cell counts as body.
    if state.occupies(new_head) {
        state.phase = Phase::Ended;
        return StepOutcome::Collided { score: state.score };
    }

    state.snake.insert(0, new_head);

    if new_head == state.food {
        state.score += 1;
        let sped_up = speed_up(state);
        state.place_food();
        StepOutcome::Ate { sped_up }
    } else {
        state.snake.pop();
        StepOutcome::Moved
    }
}

fn speed_up(state: &mut GameState) -> bool {
    if state.score == 0 || state.score % SPEED_UP_EVERY != 0 {
        return false;
    }
    match state.tick_ms.checked_sub(TICK_DECREMENT_MS) {
        Some(next) if next >= MIN_TICK_MS => {
            state.tick_ms = next;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::{BASE_TICK_MS, GRID};
    use crate::grid::{Cell, Heading};
    use crate::state::START_FOOD;

    fn scenario() -> GameState {
        GameState::unplaced()
    }

    fn assert_no_duplicates(state: &GameState) {
        let unique: HashSet<Cell> = state.snake.iter().copied().collect();
        assert_eq!(unique.len(), state.snake.len());
    }

    #[test]
    fn plain_move() {
        let mut state = scenario();
        assert_eq!(step(&mut state), StepOutcome::Moved);
        assert_eq!(
            state.snake,
            vec![Cell::new(11, 12), Cell::new(10, 12), Cell::new(9, 12)]
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.food, START_FOOD);
    }

    #[test]
    fn eating_grows_and_scores() {
        macroquad::rand::srand(3);
        let mut state = scenario();
        state.food = Cell::new(11, 12);
        assert_eq!(step(&mut state), StepOutcome::Ate { sped_up: false });
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.head(), Cell::new(11, 12));
        assert_eq!(*state.snake.last().unwrap(), Cell::new(8, 12));
        assert_eq!(state.score, 1);
        assert!(!state.occupies(state.food));
    }

    #[test]
    fn wraps_across_right_edge() {
        let mut state = scenario();
        state.snake = vec![Cell::new(GRID - 1, 4), Cell::new(GRID - 2, 4), Cell::new(GRID - 3, 4)];
        step(&mut state);
        assert_eq!(state.head(), Cell::new(0, 4));
    }

    #[test]
    fn wraps_across_top_edge() {
        let mut state = scenario();
        state.snake = vec![Cell::new(6, 0), Cell::new(6, 1), Cell::new(6, 2)];
        state.heading = Heading::Up;
        state.pending = Heading::Up;
        step(&mut state);
        assert_eq!(state.head(), Cell::new(6, GRID - 1));
    }

    #[test]
    fn pending_heading_is_committed() {
        let mut state = scenario();
        state.request_heading(Heading::Down);
        step(&mut state);
        assert_eq!(state.heading, Heading::Down);
        assert_eq!(state.head(), Cell::new(10, 13));
    }

    #[test]
    fn refused_reversal_keeps_heading() {
        let mut state = scenario();
        state.snake = vec![Cell::new(5, 10), Cell::new(5, 11), Cell::new(5, 12)];
        state.heading = Heading::Up;
        state.pending = Heading::Up;
        state.request_heading(Heading::Down);
        step(&mut state);
        assert_eq!(state.heading, Heading::Up);
        assert_eq!(state.head(), Cell::new(5, 9));
    }

    #[test]
    fn collision_with_body_ends_game() {
        let mut state = scenario();
        // Turning down from (5,5) lands on (5,6), mid-body.
        state.snake = vec![
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
            Cell::new(4, 6),
        ];
        state.heading = Heading::Left;
        state.pending = Heading::Down;
        state.score = 4;
        let before = state.snake.clone();
        assert_eq!(step(&mut state), StepOutcome::Collided { score: 4 });
        assert!(state.ended());
        assert_eq!(state.snake, before);
    }

    #[test]
    fn tail_cell_counts_as_body() {
        let mut state = scenario();
        // 2x2 loop: head (5,5) moving down lands on the tail at (5,6).
        state.snake = vec![Cell::new(5, 5), Cell::new(6, 5), Cell::new(6, 6), Cell::new(5, 6)];
        state.heading = Heading::Left;
        state.pending = Heading::Down;
        assert!(matches!(step(&mut state), StepOutcome::Collided { .. }));
    }

    #[test]
    fn idle_when_not_running() {
        let mut state = scenario();
        state.toggle_pause();
        let before = state.snake.clone();
        assert_eq!(step(&mut state), StepOutcome::Idle);
        assert_eq!(state.snake, before);

        state.phase = Phase::Ended;
        assert_eq!(step(&mut state), StepOutcome::Idle);
        assert_eq!(state.snake, before);
    }

    #[test]
    fn speeds_up_on_multiples_of_five() {
        let mut state = scenario();
        state.score = 4;
        state.food = Cell::new(11, 12);
        assert_eq!(step(&mut state), StepOutcome::Ate { sped_up: true });
        assert_eq!(state.score, 5);
        assert_eq!(state.tick_ms, BASE_TICK_MS - TICK_DECREMENT_MS);

        state.food = state.head().stepped(state.heading);
        assert_eq!(step(&mut state), StepOutcome::Ate { sped_up: false });
        assert_eq!(state.tick_ms, BASE_TICK_MS - TICK_DECREMENT_MS);
    }

    #[test]
    fn interval_never_drops_below_floor() {
        macroquad::rand::srand(5);
        let mut state = scenario();
        // Eat on every step: fill row 12, then turn down column 7.
        let mut intervals = vec![state.tick_ms];
        for _ in 0..40 {
            state.food = state.head().stepped(state.heading);
            if state.occupies(state.food) {
                state.request_heading(Heading::Down);
                state.food = state.head().stepped(Heading::Down);
            }
            let outcome = step(&mut state);
            assert!(matches!(outcome, StepOutcome::Ate { .. }), "{outcome:?}");
            if let StepOutcome::Ate { sped_up: true } = outcome {
                assert_eq!(state.score % SPEED_UP_EVERY, 0);
            }
            intervals.push(state.tick_ms);
            assert_no_duplicates(&state);
        }
        assert!(intervals.windows(2).all(|w| w[1] == w[0] || w[0] - w[1] == TICK_DECREMENT_MS));
        assert!(intervals.iter().all(|ms| *ms >= MIN_TICK_MS));
        assert_eq!(state.tick_ms, 60);
    }

    #[test]
    fn long_random_walk_keeps_invariants() {
        macroquad::rand::srand(99);
        let mut state = scenario();
        let turns = [Heading::Up, Heading::Left, Heading::Down, Heading::Right];
        for i in 0..2000 {
            if i % 7 == 0 {
                state.request_heading(turns[macroquad::rand::gen_range(0, 4)]);
            }
            match step(&mut state) {
                StepOutcome::Collided { .. } => break,
                StepOutcome::Ate { .. } => assert!(!state.occupies(state.food)),
                _ => {}
            }
            assert_no_duplicates(&state);
            assert!(state.snake.iter().all(|c| c.in_bounds()));
        }
    }
}
