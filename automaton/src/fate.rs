use std::{fmt::Display, str::FromStr};

use crate::{
    error::{Error, Result},
    neighbourhood::normalise_identifier,
};

/// Decides whether a cell is alive in the next generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Fate {
    /// B3/S23.
    #[default]
    GameOfLife,
    /// B3678/S34678.
    DayAndNight,
}

impl Fate {
    pub fn next_state(self, alive: bool, neighbours: usize) -> bool {
        match self {
            Fate::GameOfLife => matches!((alive, neighbours), (true, 2 | 3) | (false, 3)),
            Fate::DayAndNight => {
                matches!((alive, neighbours), (true, 3 | 4 | 6..=8) | (false, 3 | 6..=8))
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Fate::GameOfLife => "game_of_life",
            Fate::DayAndNight => "day_and_night",
        }
    }
}

impl FromStr for Fate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalise_identifier(s).as_str() {
            "gameoflife" | "life" | "b3/s23" => Ok(Fate::GameOfLife),
            "dayandnight" | "b3678/s34678" => Ok(Fate::DayAndNight),
            _ => Err(Error::UnknownFate(s.to_owned())),
        }
    }
}

impl Display for Fate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
