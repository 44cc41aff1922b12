use itertools::Itertools;
use rand::Rng;

use crate::basic::{Board, Cell};
use crate::game::snake::Snake;

/// Food cells currently on the board, never more than `max`
#[derive(Clone, Debug)]
pub struct FoodSet {
    cells: Vec<Cell>,
    max: usize,
}

impl FoodSet {
    pub fn new(max: usize) -> Self {
        Self { cells: Vec::with_capacity(max), max }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.max
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Place food at `cell` if there is room and the cell is free of food
    pub fn place(&mut self, cell: Cell) -> bool {
        if self.is_full() || self.contains(cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    /// Remove the food at `cell`, returns whether there was any
    pub fn take(&mut self, cell: Cell) -> bool {
        match self.cells.iter().position(|&c| c == cell) {
            Some(idx) => {
                self.cells.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Pick random cells until one is free of both snake and food and
    /// place food there. Returns None if the set is full or no free
    /// cell is left.
    pub fn spawn(&mut self, board: &Board, snake: &Snake, rng: &mut impl Rng) -> Option<Cell> {
        if self.is_full() {
            return None;
        }
        // all snake cells lie inside the food region
        if snake.len() + self.len() >= board.food_cell_count() {
            return None;
        }

        let cell = loop {
            let candidate = board.random_food_cell(rng);
            if !snake.occupies(candidate) && self.place(candidate) {
                break candidate;
            }
        };
        debug_assert!(self.cells.iter().all_unique());
        Some(cell)
    }
}
