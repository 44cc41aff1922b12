use rand::Rng;

use crate::basic::Cell;

/// Pixel dimensions of the playfield and the grid pitch
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub pitch: i32,
}

impl Board {
    /// Center of the playfield, snapped down to the grid
    pub fn center(&self) -> Cell {
        Cell {
            x: self.width / 2 / self.pitch * self.pitch,
            y: self.height / 2 / self.pitch * self.pitch,
        }
    }

    /// Whether a cell lies fully inside the playfield (bounds inclusive)
    pub fn contains(&self, cell: Cell) -> bool {
        (0..=self.width - self.pitch).contains(&cell.x)
            && (0..=self.height - self.pitch).contains(&cell.y)
    }

    // the horizontal range includes x == width while the vertical
    // range stops one row short of the bottom edge, both intentional
    fn food_columns(&self) -> i32 {
        self.width / self.pitch + 1
    }

    fn food_rows(&self) -> i32 {
        self.height / self.pitch
    }

    /// Number of distinct cells `random_food_cell` can produce
    pub fn food_cell_count(&self) -> usize {
        (self.food_columns() * self.food_rows()) as usize
    }

    pub fn random_food_cell(&self, rng: &mut impl Rng) -> Cell {
        Cell {
            x: rng.gen_range(0..self.food_columns()) * self.pitch,
            y: rng.gen_range(0..self.food_rows()) * self.pitch,
        }
    }
}
