use std::fmt::Display;

use crate::{coord::Coord, fate::Fate, grid::Grid, neighbourhood::Neighbourhood};

/// A neighbourhood paired with a fate rule: everything needed to advance a
/// grid by one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rule {
    pub neighbourhood: Neighbourhood,
    pub fate: Fate,
}

impl Rule {
    pub fn new(neighbourhood: Neighbourhood, fate: Fate) -> Self {
        Self {
            neighbourhood,
            fate,
        }
    }

    /// Computes the next generation of `grid` as a new grid.
    ///
    /// Every cell is derived from `grid` alone, so updates are simultaneous
    /// and `grid` is left untouched.
    pub fn step(&self, grid: &Grid) -> Grid {
        let mut next = grid.clone();
        for coord in grid.coords() {
            let count = self.live_neighbours(grid, coord);
            next[coord] = self.fate.next_state(grid[coord], count);
        }
        next
    }

    pub fn live_neighbours(&self, grid: &Grid, coord: Coord) -> usize {
        let (height, width) = grid.dimensions();
        self.neighbourhood
            .neighbours(coord, height, width)
            .into_iter()
            .filter(|&n| grid[n])
            .count()
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.neighbourhood, self.fate)
    }
}

/// One generation transition of `grid` under the given rules.
pub fn step(grid: &Grid, neighbourhood: Neighbourhood, fate: Fate) -> Grid {
    Rule::new(neighbourhood, fate).step(grid)
}
