pub use input::{Action, HeldKeys, MenuKey};
pub use snake::Snake;
pub use state::{GameState, Step};

use log::{debug, info, warn};
use num_integer::Integer;
use rand::{rngs::ThreadRng, thread_rng, Rng};

use crate::basic::Board;

mod food;
mod input;
mod snake;
mod state;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mode {
    Start,
    Playing,
    Paused,
    GameOver,
    Exited,
}

/// How the game evolves over time, independent of the graphics
#[derive(Copy, Clone, Debug)]
pub struct Rules {
    /// A spawn is attempted every `food_frequency` ticks
    pub food_frequency: u64,
    pub max_food: usize,
}

/// What happened during a call to [`Game::tick`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tick {
    /// Not in play, nothing happened
    Idle,
    /// The exit key was held
    Exited,
    Stepped(Step),
}

/// Owns the round state and drives the mode machine:
/// Start -> Playing <-> Paused, Playing -> GameOver -> Playing,
/// anything -> Exited
pub struct Game<R: Rng = ThreadRng> {
    state: GameState,
    mode: Mode,
    rules: Rules,
    /// Counts ticks for the whole session, restarts included
    frame: u64,
    rng: R,
}

impl Game {
    pub fn new(board: Board, rules: Rules) -> Self {
        Self::with_rng(board, rules, thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(board: Board, rules: Rules, rng: R) -> Self {
        Self {
            state: GameState::new(board, rules.max_food),
            mode: Mode::Start,
            rules,
            frame: 0,
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            info!("{:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// The window is closing, valid from every mode
    pub fn quit(&mut self) {
        self.set_mode(Mode::Exited);
    }

    /// React to a released key outside of play, returns the new mode
    pub fn key_released(&mut self, key: MenuKey) -> Mode {
        match (self.mode, key) {
            (Mode::Start, MenuKey::Start) | (Mode::Paused, MenuKey::Continue) => {
                self.set_mode(Mode::Playing)
            }
            (Mode::GameOver, MenuKey::NewGame) => {
                self.state.reset();
                self.set_mode(Mode::Playing);
            }
            (Mode::GameOver, MenuKey::Exit) => self.set_mode(Mode::Exited),
            _ => {}
        }
        self.mode
    }

    /// One step of play: spawn food when due, apply the highest
    /// priority held key, resolve movement
    pub fn tick(&mut self, held: &HeldKeys) -> Tick {
        if self.mode != Mode::Playing {
            return Tick::Idle;
        }

        if Integer::is_multiple_of(&self.frame, &self.rules.food_frequency)
            && !self.state.food().is_full()
        {
            match self.state.spawn_food(&mut self.rng) {
                Some(cell) => debug!("food at ({}, {})", cell.x, cell.y),
                None => warn!("no free cell left for food"),
            }
        }

        let mut pause = false;
        match held.action() {
            Some(Action::Exit) => {
                self.set_mode(Mode::Exited);
                return Tick::Exited;
            }
            Some(Action::Pause) => pause = true,
            Some(Action::Turn(dir)) => {
                self.state.turn(dir);
            }
            None => {}
        }

        let step = self.state.advance();
        match step {
            Step::Crashed => {
                info!("game over, score {}", self.state.score());
                self.set_mode(Mode::GameOver);
            }
            Step::Ate(cell) => {
                debug!("ate ({}, {}), score {}", cell.x, cell.y, self.state.score())
            }
            Step::Moved => {}
        }
        // a crash on the same tick takes precedence
        if pause && self.mode == Mode::Playing {
            self.set_mode(Mode::Paused);
        }

        self.frame += 1;
        Tick::Stepped(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Cell, Dir};
    use rand::{rngs::StdRng, SeedableRng};

    const BOARD: Board = Board { width: 1000, height: 600, pitch: 10 };
    const RULES: Rules = Rules { food_frequency: 29, max_food: 5 };
    // max_food of 0 keeps the board free of random food
    const NO_FOOD: Rules = Rules { food_frequency: 29, max_food: 0 };

    fn game(rules: Rules) -> Game<StdRng> {
        Game::with_rng(BOARD, rules, StdRng::seed_from_u64(42))
    }

    fn playing(rules: Rules) -> Game<StdRng> {
        let mut game = game(rules);
        assert_eq!(game.key_released(MenuKey::Start), Mode::Playing);
        game
    }

    fn held_up() -> HeldKeys {
        HeldKeys { up: true, ..HeldKeys::default() }
    }

    #[test]
    fn start_screen_waits_for_start_key() {
        let mut game = game(RULES);
        assert_eq!(game.mode(), Mode::Start);
        assert_eq!(game.tick(&held_up()), Tick::Idle);
        assert_eq!(game.key_released(MenuKey::Continue), Mode::Start);
        assert_eq!(game.key_released(MenuKey::NewGame), Mode::Start);
        assert_eq!(game.key_released(MenuKey::Start), Mode::Playing);
        assert_eq!(game.frame(), 0);
    }

    #[test]
    fn quit_from_every_mode() {
        let mut game = game(RULES);
        game.quit();
        assert_eq!(game.mode(), Mode::Exited);

        let mut game = playing(RULES);
        game.quit();
        assert_eq!(game.tick(&HeldKeys::default()), Tick::Idle);
        assert_eq!(game.mode(), Mode::Exited);

        let mut game = playing(NO_FOOD);
        game.tick(&HeldKeys { pause: true, ..HeldKeys::default() });
        assert_eq!(game.mode(), Mode::Paused);
        game.quit();
        assert_eq!(game.mode(), Mode::Exited);

        let mut game = playing(NO_FOOD);
        crash(&mut game);
        assert_eq!(game.mode(), Mode::GameOver);
        game.quit();
        assert_eq!(game.mode(), Mode::Exited);
        assert_eq!(game.key_released(MenuKey::NewGame), Mode::Exited);
    }

    #[test]
    fn single_tick_without_input() {
        let mut game = playing(NO_FOOD);
        assert_eq!(game.tick(&HeldKeys::default()), Tick::Stepped(Step::Moved));
        let cells: Vec<_> = game.state().snake().cells().copied().collect();
        assert_eq!(cells, vec![Cell::new(500, 290)]);
        assert_eq!(game.frame(), 1);
    }

    #[test]
    fn opposite_key_is_ignored() {
        let mut game = playing(NO_FOOD);
        game.tick(&HeldKeys { down: true, ..HeldKeys::default() });
        assert_eq!(game.state().snake().dir(), Dir::U);
        assert_eq!(game.state().snake().head(), Cell::new(500, 290));
    }

    #[test]
    fn turn_applies_before_the_move() {
        let mut game = playing(NO_FOOD);
        game.tick(&HeldKeys { left: true, ..HeldKeys::default() });
        assert_eq!(game.state().snake().dir(), Dir::L);
        assert_eq!(game.state().snake().head(), Cell::new(490, 300));
    }

    #[test]
    fn only_the_first_held_key_counts() {
        let mut game = playing(NO_FOOD);
        // up has priority over left and is rejected, left is never looked at
        game.tick(&HeldKeys { up: true, left: true, ..HeldKeys::default() });
        assert_eq!(game.state().snake().dir(), Dir::U);
    }

    #[test]
    fn pause_still_finishes_the_tick() {
        let mut game = playing(NO_FOOD);
        let pause = HeldKeys { pause: true, up: true, ..HeldKeys::default() };
        assert_eq!(game.tick(&pause), Tick::Stepped(Step::Moved));
        assert_eq!(game.mode(), Mode::Paused);
        assert_eq!(game.frame(), 1);

        assert_eq!(game.tick(&HeldKeys::default()), Tick::Idle);
        assert_eq!(game.key_released(MenuKey::Start), Mode::Paused);
        assert_eq!(game.key_released(MenuKey::Continue), Mode::Playing);
        assert_eq!(game.state().snake().head(), Cell::new(500, 290));
    }

    #[test]
    fn exit_key_ends_the_session() {
        let mut game = playing(NO_FOOD);
        let keys = HeldKeys { exit: true, pause: true, ..HeldKeys::default() };
        assert_eq!(game.tick(&keys), Tick::Exited);
        assert_eq!(game.mode(), Mode::Exited);
        assert_eq!(game.state().snake().head(), Cell::new(500, 300));
    }

    fn crash(game: &mut Game<StdRng>) {
        game.state = GameState::with_snake(BOARD, 0, Snake::new(Cell::new(0, 0), Dir::L));
        assert_eq!(game.tick(&HeldKeys::default()), Tick::Stepped(Step::Crashed));
    }

    #[test]
    fn leaving_the_board_is_game_over() {
        let mut game = playing(NO_FOOD);
        crash(&mut game);
        assert_eq!(game.mode(), Mode::GameOver);
        assert_eq!(game.frame(), 1);
        assert_eq!(game.tick(&HeldKeys::default()), Tick::Idle);
    }

    #[test]
    fn game_over_wins_over_pause() {
        let mut game = playing(NO_FOOD);
        game.state = GameState::with_snake(BOARD, 0, Snake::new(Cell::new(0, 0), Dir::U));
        let keys = HeldKeys { pause: true, ..HeldKeys::default() };
        assert_eq!(game.tick(&keys), Tick::Stepped(Step::Crashed));
        assert_eq!(game.mode(), Mode::GameOver);
    }

    #[test]
    fn new_game_resets_the_round() {
        let mut game = playing(RULES);
        for _ in 0..3 {
            game.tick(&HeldKeys::default());
        }
        crash(&mut game);
        let frame = game.frame();

        assert_eq!(game.key_released(MenuKey::Continue), Mode::GameOver);
        assert_eq!(game.key_released(MenuKey::NewGame), Mode::Playing);
        let state = game.state();
        assert_eq!(state.snake().cells().copied().collect::<Vec<_>>(), vec![Cell::new(500, 300)]);
        assert_eq!(state.snake().dir(), Dir::L);
        assert!(state.food().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(game.frame(), frame);
    }

    #[test]
    fn new_game_keeps_the_last_direction() {
        let mut game = playing(NO_FOOD);
        game.state = GameState::with_snake(BOARD, 0, Snake::new(Cell::new(0, 300), Dir::U));
        game.tick(&HeldKeys { left: true, ..HeldKeys::default() });
        assert_eq!(game.mode(), Mode::GameOver);

        assert_eq!(game.key_released(MenuKey::NewGame), Mode::Playing);
        assert_eq!(game.state().snake().head(), Cell::new(500, 300));
        assert_eq!(game.state().snake().dir(), Dir::L);

        assert_eq!(game.tick(&HeldKeys::default()), Tick::Stepped(Step::Moved));
        assert_eq!(game.state().snake().head(), Cell::new(490, 300));
    }

    #[test]
    fn exit_key_after_game_over() {
        let mut game = playing(NO_FOOD);
        crash(&mut game);
        assert_eq!(game.key_released(MenuKey::Exit), Mode::Exited);
    }

    #[test]
    fn food_spawns_on_schedule() {
        let mut game = playing(RULES);
        // snake stays alive by circling a 2x2 square
        let circle = [Dir::L, Dir::D, Dir::R, Dir::U];
        let mut counts = vec![];
        for i in 0..(29 * 4 + 1) {
            let dir = circle[i % 4];
            let keys = HeldKeys {
                up: dir == Dir::U,
                down: dir == Dir::D,
                left: dir == Dir::L,
                right: dir == Dir::R,
                ..HeldKeys::default()
            };
            game.tick(&keys);
            assert_eq!(game.mode(), Mode::Playing);
            counts.push(game.state().food().len() + game.state().score() as usize);
        }
        // attempts at frames 0, 29, 58, 87 and 116
        assert_eq!(counts[0], 1);
        assert_eq!(counts[28], 1);
        assert_eq!(counts[29], 2);
        assert_eq!(counts[57], 2);
        assert_eq!(counts[58], 3);
        assert_eq!(counts[116], 5);
    }

    #[test]
    fn food_never_exceeds_max_nor_lands_on_the_snake() {
        let rules = Rules { food_frequency: 1, max_food: 5 };
        let mut game = playing(rules);
        let circle = [Dir::L, Dir::D, Dir::R, Dir::U];
        for i in 0..200 {
            let dir = circle[(i / 3) % 4];
            let keys = HeldKeys {
                up: dir == Dir::U,
                down: dir == Dir::D,
                left: dir == Dir::L,
                right: dir == Dir::R,
                ..HeldKeys::default()
            };
            game.tick(&keys);
            let state = game.state();
            assert!(state.food().len() <= 5);
            for &cell in state.food().cells() {
                assert!(!state.snake().occupies(cell));
            }
            if game.mode() != Mode::Playing {
                break;
            }
        }
    }
}
