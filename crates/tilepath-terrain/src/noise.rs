//! Multi-octave noise field built on [`Perlin`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath_core::Point;

use crate::config::NoiseConfig;
use crate::perlin::Perlin;

/// Half-width of the random per-octave input offset. Large enough that
/// octaves sample unrelated regions of the lattice.
pub const OFFSET_RANGE: f32 = 1000.0;

const OFFSET_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// A deterministic scalar field: the sum of `octave_count` Perlin layers.
///
/// Layer `i` samples `perlin(p * frequency_i + offset_i) * amplitude_i`,
/// where frequency and amplitude accumulate the per-octave multipliers and
/// each offset is drawn once from the seed. Tables and offsets are built at
/// construction, so [`OctaveNoise::get`] is a pure function and can be
/// shared across threads.
#[derive(Clone, Debug)]
pub struct OctaveNoise {
    perlin: Perlin,
    octaves: Vec<Octave>,
}

#[derive(Clone, Copy, Debug)]
struct Octave {
    frequency: f32,
    amplitude: f32,
    offset: [f32; 2],
}

impl OctaveNoise {
    pub fn new(config: &NoiseConfig) -> Self {
        let perlin = Perlin::new(config.seed);
        // Separate stream from the Perlin tables, which draw from the raw seed.
        let mut rng = StdRng::seed_from_u64(u64::from(config.seed) ^ OFFSET_STREAM);
        let mut frequency = config.frequency;
        let mut amplitude = config.amplitude;
        let octaves = (0..config.octave_count)
            .map(|_| {
                let offset = [
                    rng.random_range(-1.0f32..1.0) * OFFSET_RANGE,
                    rng.random_range(-1.0f32..1.0) * OFFSET_RANGE,
                ];
                let octave = Octave {
                    frequency,
                    amplitude,
                    offset,
                };
                frequency *= config.octave_frequency;
                amplitude *= config.octave_amplitude;
                octave
            })
            .collect();
        Self { perlin, octaves }
    }

    /// Number of layers summed per sample.
    pub fn octave_count(&self) -> usize {
        self.octaves.len()
    }

    /// Field value at a grid coordinate.
    pub fn get(&self, p: Point) -> f32 {
        self.sample(p.x as f32, p.y as f32)
    }

    /// Field value at an arbitrary coordinate.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        self.octaves
            .iter()
            .map(|o| {
                let nx = x * o.frequency + o.offset[0];
                let ny = y * o.frequency + o.offset[1];
                self.perlin.noise(nx, ny) * o.amplitude
            })
            .sum()
    }
}
