/// A (row, col) position on a toroidal board.
///
/// Coordinates handed out by the crate are always normalised into
/// `[0, height) x [0, width)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shifts by `(dy, dx)` and wraps around a `height x width` torus.
    pub fn wrapping_offset(self, (dy, dx): (isize, isize), height: usize, width: usize) -> Self {
        Self {
            row: wrap(self.row as isize + dy, height),
            col: wrap(self.col as isize + dx, width),
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

pub(crate) fn wrap(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}
