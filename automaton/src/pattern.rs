use std::{fs, path::{Path, PathBuf}};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::{Error, Result},
    grid::Grid,
};

/// Where the first generation comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum InitialState {
    /// A random soup; each cell is dead with probability `dead_probability`.
    Random {
        size: usize,
        dead_probability: f64,
        seed: Option<u64>,
    },
    /// A pattern file padded with dead cells to a `size x size` board.
    Pattern { path: PathBuf, size: usize },
}

impl InitialState {
    pub fn build(&self) -> Result<Grid> {
        let grid = match self {
            InitialState::Random {
                size,
                dead_probability,
                seed: Some(seed),
            } => random_state(*size, *size, *dead_probability, &mut StdRng::seed_from_u64(*seed))?,
            InitialState::Random {
                size,
                dead_probability,
                seed: None,
            } => random_state(*size, *size, *dead_probability, &mut rand::thread_rng())?,
            InitialState::Pattern { path, size } => load_pattern(path, *size)?,
        };
        log::info!(
            "initial {}x{} board with population {}",
            grid.height(),
            grid.width(),
            grid.population()
        );
        Ok(grid)
    }
}

/// A `height x width` grid where each cell is independently alive with
/// probability `1 - dead_probability`.
pub fn random_state(
    width: usize,
    height: usize,
    dead_probability: f64,
    rng: &mut impl Rng,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&dead_probability) {
        return Err(Error::InvalidConfig(format!(
            "dead probability must be within [0, 1], got {dead_probability}"
        )));
    }
    let mut grid = Grid::new(width, height)?;
    for coord in grid.coords() {
        grid[coord] = rng.r#gen::<f64>() >= dead_probability;
    }
    Ok(grid)
}

/// Parses a whitespace-delimited numeric matrix. Nonzero values are alive.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_pattern(text: &str) -> Result<Grid> {
    let mut rows = vec![];
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));
    for (row, line) in lines.enumerate() {
        let cells = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| match token.parse::<f64>() {
                Ok(value) if !value.is_nan() => Ok(value != 0.0),
                _ => Err(Error::InvalidCell {
                    row,
                    col,
                    token: token.to_owned(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(cells);
    }
    if rows.is_empty() {
        return Err(Error::EmptyPattern);
    }
    Grid::from_rows(rows)
}

/// Reads a pattern file and pads it to a `board_size x board_size` board,
/// pattern in the top-left corner.
pub fn load_pattern(path: impl AsRef<Path>, board_size: usize) -> Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    let pattern = parse_pattern(&text)?;
    log::debug!(
        "loaded {}x{} pattern from {}",
        pattern.height(),
        pattern.width(),
        path.display()
    );
    Grid::embed(&pattern, board_size)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn pattern_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_block_into_corner() {
        let file = pattern_file("1 1\n1 1\n");
        let grid = load_pattern(file.path(), 5).unwrap();
        assert_eq!(grid.dimensions(), (5, 5));
        assert_eq!(grid.population(), 4);
        let expected = "
            oo...
            oo...
            .....
            .....
            .....
        ";
        assert_eq!(grid, expected.parse().unwrap());
    }

    #[test]
    fn test_load_float_matrix() {
        // The format numpy.savetxt writes.
        let file = pattern_file("0.000000000000000000e+00 1.000000000000000000e+00\n1.0 0\n");
        let grid = load_pattern(file.path(), 3).unwrap();
        assert_eq!(grid.to_string(), ".o.\no..\n...");
    }

    #[test]
    fn test_pattern_too_large() {
        let file = pattern_file("1 0 1\n0 1 0\n");
        assert!(matches!(
            load_pattern(file.path(), 2),
            Err(Error::PatternTooLarge {
                height: 2,
                width: 3,
                board_size: 2
            })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_pattern("\n# nothing\n"), Err(Error::EmptyPattern)));
        assert!(matches!(
            parse_pattern("1 0\n0 x"),
            Err(Error::InvalidCell { row: 1, col: 1, .. })
        ));
        assert!(matches!(
            parse_pattern("1 0\n0"),
            Err(Error::RaggedPattern { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(load_pattern(&path, 5), Err(Error::Io { .. })));
    }

    #[test]
    fn test_random_state_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let all_alive = random_state(6, 4, 0.0, &mut rng).unwrap();
        assert_eq!(all_alive.dimensions(), (4, 6));
        assert_eq!(all_alive.population(), 24);
        // Draws are in [0, 1), so nothing reaches a threshold of 1.
        let all_dead = random_state(6, 4, 1.0, &mut rng).unwrap();
        assert_eq!(all_dead.population(), 0);
    }

    #[test]
    fn test_random_state_density() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = random_state(100, 100, 0.75, &mut rng).unwrap();
        let population = grid.population();
        assert!((2000..3000).contains(&population), "{population}");
    }

    #[test]
    fn test_random_state_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            random_state(3, 3, 1.5, &mut rng),
            Err(Error::InvalidConfig(_))
        ));
        assert!(random_state(3, 3, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_seeded_initial_state_is_reproducible() {
        let state = InitialState::Random {
            size: 20,
            dead_probability: 0.5,
            seed: Some(1234),
        };
        assert_eq!(state.build().unwrap(), state.build().unwrap());
    }
}
