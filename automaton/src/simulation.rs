use crate::{engine::Rule, grid::Grid};

/// What a render sink wants the loop to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Receives every generation as it is produced.
pub trait Render {
    fn render(&mut self, generation: usize, grid: &Grid) -> Flow;
}

impl<F> Render for F
where
    F: FnMut(usize, &Grid) -> Flow,
{
    fn render(&mut self, generation: usize, grid: &Grid) -> Flow {
        self(generation, grid)
    }
}

#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    rule: Rule,
    generation: usize,
}

impl Simulation {
    pub fn new(grid: Grid, rule: Rule) -> Self {
        Self {
            grid,
            rule,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn step(&mut self) -> &Grid {
        self.grid = self.rule.step(&self.grid);
        self.generation += 1;
        log::debug!(
            "generation {}: population {}",
            self.generation,
            self.grid.population()
        );
        &self.grid
    }

    /// Renders the current generation, then keeps stepping and rendering
    /// until the sink asks to quit. Returns the number of steps taken.
    pub fn run(&mut self, sink: &mut impl Render) -> usize {
        let start = self.generation;
        while sink.render(self.generation, &self.grid) == Flow::Continue {
            self.step();
        }
        log::info!("stopped at generation {}", self.generation);
        self.generation - start
    }
}
