use std::{
    fmt::{Display, Write},
    ops::{Index, IndexMut},
    str::FromStr,
};

use itertools::Itertools;

use crate::{
    coord::{Coord, wrap},
    error::{Error, Result},
};

/// A fixed-size binary board whose edges wrap around (a torus).
///
/// Cells are stored row-major. Every accessor normalises its coordinates
/// modulo the board dimensions, so lookups never go out of range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead `height x width` grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![false; height * width],
        })
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Grid::new(width, height)?;
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(Error::RaggedPattern {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            grid.cells[row * width..(row + 1) * width].copy_from_slice(&cells);
        }
        Ok(grid)
    }

    /// Returns `(height, width)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: isize, col: isize) -> bool {
        self.cells[self.offset(row, col)]
    }

    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        let i = self.offset(row, col);
        self.cells[i] = alive;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .positions(|&alive| alive)
            .map(move |i| Coord::new(i / self.width, i % self.width))
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let width = self.width;
        (0..self.height).cartesian_product(0..width).map(Coord::from)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Copies `pattern` into the top-left corner of a dead
    /// `board_size x board_size` grid.
    pub fn embed(pattern: &Grid, board_size: usize) -> Result<Self> {
        let (height, width) = pattern.dimensions();
        if height > board_size || width > board_size {
            return Err(Error::PatternTooLarge {
                height,
                width,
                board_size,
            });
        }
        let mut grid = Grid::new(board_size, board_size)?;
        for (row, cells) in pattern.rows().enumerate() {
            let start = row * board_size;
            grid.cells[start..start + width].copy_from_slice(cells);
        }
        Ok(grid)
    }

    fn offset(&self, row: isize, col: isize) -> usize {
        wrap(row, self.height) * self.width + wrap(col, self.width)
    }
}

impl Index<Coord> for Grid {
    type Output = bool;

    fn index(&self, Coord { row, col }: Coord) -> &bool {
        &self.cells[(row % self.height) * self.width + col % self.width]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, Coord { row, col }: Coord) -> &mut bool {
        &mut self.cells[(row % self.height) * self.width + col % self.width]
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses rows of `o` (alive) and `.` (dead). Leading and trailing
    /// whitespace on each line and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = vec![];
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = line
                .chars()
                .map(|c| match c {
                    'o' => Ok(true),
                    '.' => Ok(false),
                    _ => Err(Error::InvalidGridText(format!("unexpected character {c:?}"))),
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Grid::from_rows(rows)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &alive in row {
                f.write_char(if alive { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(Error::EmptyGrid { height: 3, width: 0 })
        ));
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::from_str("").is_err());
    }

    #[test]
    fn test_access_wraps() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(-1, -1, true);
        assert!(grid.get(2, 3));
        assert!(grid.get(5, 7));
        assert!(grid[Coord::new(2, 3)]);
        grid.set(3, 4, true);
        assert!(grid.get(0, 0));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_text_round_trip() {
        let text = "
            .o..
            ..o.
            ooo.
        ";
        let grid = Grid::from_str(text).unwrap();
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.to_string(), ".o..\n..o.\nooo.");
        assert_eq!(
            grid.alive_cells().collect_vec(),
            [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)].map(Coord::from)
        );
    }

    #[test]
    fn test_text_errors() {
        assert!(matches!(
            Grid::from_str("o.\nx."),
            Err(Error::InvalidGridText(_))
        ));
        assert!(matches!(
            Grid::from_str("o.\no.o"),
            Err(Error::RaggedPattern { row: 1, expected: 2, found: 3 })
        ));
    }

    #[test]
    fn test_embed_top_left() {
        let pattern = Grid::from_str("oo\no.").unwrap();
        let grid = Grid::embed(&pattern, 3).unwrap();
        assert_eq!(grid.to_string(), "oo.\no..\n...");
        assert!(matches!(
            Grid::embed(&pattern, 1),
            Err(Error::PatternTooLarge { board_size: 1, .. })
        ));
    }
}
