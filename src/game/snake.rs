use std::collections::{HashSet, VecDeque};

use crate::basic::{Cell, Dir};

/// Ordered body, head first, with a set mirroring the occupied cells
/// for constant-time collision checks
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
    dir: Dir,
}

impl Snake {
    pub fn new(start: Cell, dir: Dir) -> Self {
        Self::from_cells([start], dir)
    }

    /// Build a snake from its cells, head first
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, dir: Dir) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one cell");
        let occupied: HashSet<Cell> = body.iter().copied().collect();
        assert_eq!(occupied.len(), body.len(), "snake cells overlap");
        Self { body, occupied, dir }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Whether `cell` hits any segment other than the head
    pub fn hits_body(&self, cell: Cell) -> bool {
        cell != self.head() && self.occupies(cell)
    }

    pub fn next_head(&self, pitch: i32) -> Cell {
        self.head() + self.dir.offset(pitch)
    }

    /// Change direction unless `new_dir` lies on the current axis of
    /// travel, returns whether the direction changed
    pub fn turn(&mut self, new_dir: Dir) -> bool {
        if new_dir.axis() == self.dir.axis() {
            return false;
        }
        self.dir = new_dir;
        true
    }

    /// Prepend `new_head` keeping the tail, the snake grows by one
    pub fn grow_to(&mut self, new_head: Cell) {
        debug_assert!(!self.occupies(new_head));
        self.body.push_front(new_head);
        self.occupied.insert(new_head);
    }

    /// Drop the tail and prepend `new_head`, a single cell snake
    /// simply moves in place
    pub fn slide_to(&mut self, new_head: Cell) {
        if let Some(tail) = self.body.pop_back() {
            self.occupied.remove(&tail);
        }
        debug_assert!(!self.occupies(new_head));
        self.body.push_front(new_head);
        self.occupied.insert(new_head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use Dir::*;

    fn cells(snake: &Snake) -> Vec<(i32, i32)> {
        snake.cells().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new(Cell::new(500, 300), U);
        assert!(!snake.turn(D));
        assert_eq!(snake.dir(), U);
        assert!(!snake.turn(U));
        assert!(snake.turn(L));
        assert_eq!(snake.dir(), L);
        assert!(!snake.turn(R));
        assert!(snake.turn(D));
        assert_eq!(snake.dir(), D);
    }

    #[test]
    fn slide_keeps_length() {
        let mut snake = Snake::from_cells(
            [Cell::new(50, 50), Cell::new(50, 60), Cell::new(50, 70)],
            U,
        );
        let next = snake.next_head(10);
        snake.slide_to(next);
        assert_eq!(snake.len(), 3);
        assert_eq!(cells(&snake), vec![(50, 40), (50, 50), (50, 60)]);
        assert!(!snake.occupies(Cell::new(50, 70)));
        assert!(snake.cells().all_unique());
    }

    #[test]
    fn single_cell_slides_in_place() {
        let mut snake = Snake::new(Cell::new(0, 0), R);
        snake.slide_to(snake.next_head(10));
        assert_eq!(cells(&snake), vec![(10, 0)]);
        assert!(!snake.occupies(Cell::new(0, 0)));
    }

    #[test]
    fn grow_prepends() {
        let mut snake = Snake::new(Cell::new(500, 300), U);
        snake.grow_to(Cell::new(500, 290));
        assert_eq!(cells(&snake), vec![(500, 290), (500, 300)]);
        assert_eq!(snake.head(), Cell::new(500, 290));
    }

    #[test]
    fn body_hits_exclude_head() {
        let snake = Snake::from_cells([Cell::new(20, 20), Cell::new(20, 30)], U);
        assert!(!snake.hits_body(Cell::new(20, 20)));
        assert!(snake.hits_body(Cell::new(20, 30)));
        assert!(!snake.hits_body(Cell::new(30, 30)));
    }
}
