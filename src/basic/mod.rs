pub use board::Board;
pub use cell::Cell;
pub use dir::{Axis, Dir};

mod board;
mod cell;
mod dir;
