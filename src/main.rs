use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use automaton::{Flow, Grid, Render, Simulation, config::Args};
use clap::Parser;

/// Prints each generation to a terminal, redrawing in place.
struct Terminal<W> {
    out: W,
    refresh: Duration,
    generations: Option<usize>,
}

impl<W: Write> Terminal<W> {
    fn draw(&mut self, generation: usize, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "\x1b[2J\x1b[H{grid}")?;
        writeln!(
            self.out,
            "generation {generation}  population {}",
            grid.population()
        )?;
        self.out.flush()
    }
}

impl<W: Write> Render for Terminal<W> {
    fn render(&mut self, generation: usize, grid: &Grid) -> Flow {
        if let Err(e) = self.draw(generation, grid) {
            log::warn!("stopping, cannot write to terminal: {e}");
            return Flow::Quit;
        }
        if self.generations.is_some_and(|limit| generation >= limit) {
            return Flow::Quit;
        }
        thread::sleep(self.refresh);
        Flow::Continue
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().config()?;
    log::info!("rule {} starting from {:?}", config.rule, config.initial);
    let grid = config
        .initial
        .build()
        .context("failed to build the initial board")?;

    let mut terminal = Terminal {
        out: io::stdout().lock(),
        refresh: config.refresh,
        generations: config.generations,
    };
    Simulation::new(grid, config.rule).run(&mut terminal);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use automaton::Rule;

    use super::*;

    #[test]
    fn test_stops_at_generation_limit() {
        let grid = Grid::from_str(".....\n..o..\n..o..\n..o..\n.....").unwrap();
        let mut terminal = Terminal {
            out: Vec::new(),
            refresh: Duration::ZERO,
            generations: Some(3),
        };
        let steps = Simulation::new(grid, Rule::default()).run(&mut terminal);
        assert_eq!(steps, 3);
        let text = String::from_utf8(terminal.out).unwrap();
        assert!(text.contains(".....\n.....\n.ooo.\n.....\n....."));
        assert!(text.ends_with("generation 3  population 3\n"));
    }
}
