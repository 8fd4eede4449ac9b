use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::{
    coord::Coord,
    error::{Error, Result},
};

/// Which cells around a cell count as its neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Neighbourhood {
    /// The eight cells touching a cell, diagonals included.
    #[default]
    Moore,
    /// Cells one and two steps away along each axis.
    ///
    /// This is wider than the textbook radius-1 Von Neumann neighbourhood:
    /// offsets of both 1 and 2 are included on each axis.
    VonNeumann,
}

impl Neighbourhood {
    /// Coordinates to inspect around `coord` on a `height x width` torus.
    ///
    /// Moore always yields exactly eight coordinates, even when a tiny board
    /// makes some of them coincide. Von Neumann drops such duplicates, so it
    /// yields at most eight.
    pub fn neighbours(self, coord: Coord, height: usize, width: usize) -> Vec<Coord> {
        match self {
            Neighbourhood::Moore => (-1..=1)
                .cartesian_product(-1..=1)
                .filter(|&d| d != (0, 0))
                .map(|d| coord.wrapping_offset(d, height, width))
                .collect(),
            Neighbourhood::VonNeumann => (-2..=2)
                .cartesian_product(-2..=2)
                .filter(|&(dy, dx): &(isize, isize)| (dy == 0) != (dx == 0))
                .map(|d| coord.wrapping_offset(d, height, width))
                .unique()
                .collect(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Neighbourhood::Moore => "Moore",
            Neighbourhood::VonNeumann => "Von_Neumann",
        }
    }
}

impl FromStr for Neighbourhood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalise_identifier(s).as_str() {
            "moore" => Ok(Neighbourhood::Moore),
            "vonneumann" => Ok(Neighbourhood::VonNeumann),
            _ => Err(Error::UnknownNeighbourhood(s.to_owned())),
        }
    }
}

impl Display for Neighbourhood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases and strips separators so `Von_Neumann`, `von-neumann` and
/// `vonneumann` compare equal.
pub(crate) fn normalise_identifier(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
