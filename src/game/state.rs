use rand::Rng;

use crate::basic::{Board, Cell, Dir};
use crate::game::{food::FoodSet, snake::Snake};

/// Result of resolving one movement step
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Step {
    Moved,
    Ate(Cell),
    Crashed,
}

/// Everything that describes a single round: the snake, the food on
/// the board and the score
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    snake: Snake,
    food: FoodSet,
    score: u32,
}

impl GameState {
    pub const START_DIR: Dir = Dir::U;

    pub fn new(board: Board, max_food: usize) -> Self {
        Self {
            board,
            snake: Snake::new(board.center(), Self::START_DIR),
            food: FoodSet::new(max_food),
            score: 0,
        }
    }

    #[cfg(test)]
    pub fn with_snake(board: Board, max_food: usize, snake: Snake) -> Self {
        Self { snake, ..Self::new(board, max_food) }
    }

    /// Back to a single cell in the center, no food, no score. The
    /// direction of travel carries over from the previous round.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.board.center(), self.snake.dir());
        self.food.clear();
        self.score = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &FoodSet {
        &self.food
    }

    #[cfg(test)]
    pub fn food_mut(&mut self) -> &mut FoodSet {
        &mut self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn spawn_food(&mut self, rng: &mut impl Rng) -> Option<Cell> {
        self.food.spawn(&self.board, &self.snake, rng)
    }

    pub fn turn(&mut self, dir: Dir) -> bool {
        self.snake.turn(dir)
    }

    /// Move the snake one step in its current direction. Eating is
    /// checked first, then collisions against the body as it is
    /// before the move and against the playfield bounds.
    pub fn advance(&mut self) -> Step {
        let next = self.snake.next_head(self.board.pitch);

        if self.food.take(next) {
            self.snake.grow_to(next);
            self.score += 1;
            Step::Ate(next)
        } else if self.snake.hits_body(next) || !self.board.contains(next) {
            Step::Crashed
        } else {
            self.snake.slide_to(next);
            Step::Moved
        }
    }
}
