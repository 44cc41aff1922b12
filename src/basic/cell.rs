/// Top-left pixel of a grid cell, a multiple of the board pitch
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Add, Sub)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

