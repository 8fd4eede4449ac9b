use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    engine::Rule,
    error::{Error, Result},
    fate::Fate,
    neighbourhood::Neighbourhood,
    pattern::InitialState,
};

/// Simulate binary cellular automata on a wrapping board.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Neighbourhood rule: Moore or Von_Neumann
    #[arg(short = 'n', long, default_value = "Moore")]
    pub rule_neighbour: String,

    /// Cell fate rule: game_of_life or day_and_night
    #[arg(short = 'c', long, default_value = "game_of_life")]
    pub rule_cell: String,

    /// Side length of the square board
    #[arg(short, long, default_value_t = 50)]
    pub size: usize,

    /// Milliseconds between generations
    #[arg(short, long, default_value_t = 100)]
    pub refresh_rate: u64,

    /// Pattern file to start from instead of a random soup
    #[arg(short, long)]
    pub pattern: Option<PathBuf>,

    /// Probability that a cell of the random soup starts dead
    #[arg(short, long, default_value_t = 0.5)]
    pub dead_probability: f64,

    /// Seed for the random soup
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many generations
    #[arg(short, long)]
    pub generations: Option<usize>,

    /// Pixels per cell in the window viewer
    #[arg(short, long, default_value_t = 10)]
    pub magnification: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rule: Rule,
    pub initial: InitialState,
    pub refresh: Duration,
    pub generations: Option<usize>,
    pub magnification: usize,
}

impl Args {
    /// Resolves rule names and validates values before anything runs.
    pub fn config(&self) -> Result<Config> {
        let neighbourhood: Neighbourhood = self.rule_neighbour.parse()?;
        let fate: Fate = self.rule_cell.parse()?;
        if self.size == 0 {
            return Err(Error::InvalidConfig("board size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.dead_probability) {
            return Err(Error::InvalidConfig(format!(
                "dead probability must be within [0, 1], got {}",
                self.dead_probability
            )));
        }
        if self.magnification == 0 {
            return Err(Error::InvalidConfig("magnification must be positive".into()));
        }
        let initial = match &self.pattern {
            Some(path) => InitialState::Pattern {
                path: path.clone(),
                size: self.size,
            },
            None => InitialState::Random {
                size: self.size,
                dead_probability: self.dead_probability,
                seed: self.seed,
            },
        };
        Ok(Config {
            rule: Rule::new(neighbourhood, fate),
            initial,
            refresh: Duration::from_millis(self.refresh_rate),
            generations: self.generations,
            magnification: self.magnification,
        })
    }
}
