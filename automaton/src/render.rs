use egui::Rgba;

use crate::grid::Grid;

#[derive(Clone, Copy)]
pub struct Settings {
    pub magnification: usize,
    pub dead_rgba: Rgba,
    pub alive_rgba: Rgba,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            magnification: 10,
            dead_rgba: Rgba::BLACK,
            alive_rgba: Rgba::WHITE,
        }
    }
}

impl Grid {
    /// Nearest-neighbour upscale: each cell becomes a square block of
    /// `magnification` pixels per side. Returns `[width, height]` in pixels
    /// alongside the row-major pixels.
    pub fn render(&self, settings: Settings) -> ([usize; 2], Vec<Rgba>) {
        let m = settings.magnification;
        let size = [self.width() * m, self.height() * m];
        let mut pixels = Vec::with_capacity(size[0] * size[1]);
        for row in self.rows() {
            let line: Vec<Rgba> = row
                .iter()
                .flat_map(|&alive| {
                    let rgba = if alive {
                        settings.alive_rgba
                    } else {
                        settings.dead_rgba
                    };
                    std::iter::repeat_n(rgba, m)
                })
                .collect();
            for _ in 0..m {
                pixels.extend_from_slice(&line);
            }
        }
        (size, pixels)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_magnified_blocks() {
        let grid = Grid::from_str("o..\n.o.").unwrap();
        let settings = Settings {
            magnification: 2,
            ..Default::default()
        };
        let ([width, height], pixels) = grid.render(settings);
        assert_eq!((width, height), (6, 4));
        assert_eq!(pixels.len(), 24);
        let alive = |y: usize, x: usize| pixels[y * width + x] == settings.alive_rgba;
        for (y, x) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (3, 3)] {
            assert!(alive(y, x), "({y}, {x})");
        }
        for (y, x) in [(0, 2), (1, 5), (2, 0), (3, 5)] {
            assert!(!alive(y, x), "({y}, {x})");
        }
    }
}
