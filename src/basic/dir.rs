use std::ops::Neg;

use crate::basic::Cell;
use Dir::*;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    /// Displacement of one grid step in this direction
    pub fn offset(self, pitch: i32) -> Cell {
        match self {
            U => Cell::new(0, -pitch),
            D => Cell::new(0, pitch),
            L => Cell::new(-pitch, 0),
            R => Cell::new(pitch, 0),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            U | D => Axis::Vertical,
            L | R => Axis::Horizontal,
        }
    }
}

#[test]
fn test_dir_neg_and_axis() {
    for dir in [U, D, L, R] {
        assert_eq!(-(-dir), dir);
        assert_ne!(-dir, dir);
        assert_eq!((-dir).axis(), dir.axis());
        assert_eq!(dir.offset(10) + (-dir).offset(10), Cell::new(0, 0));
    }
    assert_eq!(U.offset(10), Cell::new(0, -10));
    assert_eq!(R.offset(7), Cell::new(7, 0));
}
