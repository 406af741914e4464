//! Grid generation from a [`NoiseConfig`].
//!
//! Every cell's passability is an independent function of its coordinate,
//! so cells are evaluated in parallel with rayon and the grid is assembled
//! once all workers have finished.

use std::time::Instant;

use log::debug;
use rayon::prelude::*;
use tilepath_core::{Grid, Point, Range};

use crate::config::NoiseConfig;
use crate::noise::OctaveNoise;

/// Terrain generator: a noise configuration plus the iso value that splits
/// free terrain from walls.
#[derive(Debug, Clone)]
pub struct TerrainGen {
    config: NoiseConfig,
    iso_value: f32,
    field: Option<OctaveNoise>,
}

impl TerrainGen {
    /// Create a generator. Noise tables are built here, once, unless the
    /// configuration is flat.
    pub fn new(config: NoiseConfig, iso_value: f32) -> Self {
        let field = (!config.is_flat()).then(|| OctaveNoise::new(&config));
        Self {
            config,
            iso_value,
            field,
        }
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn iso_value(&self) -> f32 {
        self.iso_value
    }

    /// Passability of a single coordinate.
    pub fn passability_at(&self, p: Point) -> u8 {
        match &self.field {
            Some(field) => self.config.passability(field.get(p), self.iso_value),
            None => tilepath_core::MAX_PASSABILITY,
        }
    }

    /// Build a grid of `size`.
    ///
    /// A flat configuration short-circuits to a fully passable grid without
    /// sampling any noise.
    pub fn generate(&self, size: Point) -> Grid {
        let Some(field) = &self.field else {
            debug!("flat terrain {}x{}", size.x, size.y);
            return Grid::new(size);
        };

        let started = Instant::now();
        let bounds = Range::from_size(size);
        let width = bounds.width().max(1) as usize;
        let values: Vec<u8> = (0..bounds.len())
            .into_par_iter()
            .map(|i| {
                let p = Point::new((i % width) as i32, (i / width) as i32);
                self.config.passability(field.get(p), self.iso_value)
            })
            .collect();

        let grid = Grid::from_fn(size, |p| values[p.x as usize + p.y as usize * width]);
        debug!(
            "generated terrain {}x{} (seed {}, {} passable) in {:?}",
            size.x,
            size.y,
            self.config.seed,
            grid.passable_count(),
            started.elapsed()
        );
        grid
    }
}

/// Build a grid of `size` from `config`, thresholded at `iso_value`.
pub fn generate(size: Point, config: &NoiseConfig, iso_value: f32) -> Grid {
    TerrainGen::new(*config, iso_value).generate(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PassabilityMode;

    #[test]
    fn flat_config_is_fully_passable() {
        let g = generate(Point::new(16, 9), &NoiseConfig::flat(), 0.0);
        assert_eq!(g.size(), Point::new(16, 9));
        assert_eq!(g.passable_count(), 16 * 9);
    }

    #[test]
    fn generation_is_deterministic() {
        let config = NoiseConfig {
            seed: 77,
            ..NoiseConfig::default()
        };
        let a = generate(Point::new(40, 30), &config, 0.0);
        let b = generate(Point::new(40, 30), &config, 0.0);
        assert_eq!(a.passability_map(), b.passability_map());
    }

    #[test]
    fn parallel_matches_per_cell_evaluation() {
        let config = NoiseConfig {
            seed: 5,
            mode: PassabilityMode::Smooth,
            ..NoiseConfig::default()
        };
        let tg = TerrainGen::new(config, 0.05);
        let g = tg.generate(Point::new(23, 17));
        for c in &g {
            assert_eq!(c.passability(), tg.passability_at(c.position()));
        }
    }

    #[test]
    fn black_white_mix_at_zero_iso() {
        let config = NoiseConfig {
            seed: 11,
            frequency: 0.15,
            ..NoiseConfig::default()
        };
        let g = generate(Point::new(64, 64), &config, 0.0);
        let passable = g.passable_count();
        assert!(passable > 0 && passable < g.len());
        for c in &g {
            assert!(c.passability() == 0 || c.passability() == 100);
        }
    }

    #[test]
    fn iso_value_extremes() {
        let config = NoiseConfig {
            seed: 3,
            ..NoiseConfig::default()
        };
        let open = generate(Point::new(20, 20), &config, 100.0);
        assert_eq!(open.passable_count(), 400);
        let closed = generate(Point::new(20, 20), &config, -100.0);
        assert_eq!(closed.passable_count(), 0);
    }
}
