//! Terrain generation for tilepath grids.
//!
//! - [`Perlin`]: the classic seeded 2D gradient-noise primitive.
//! - [`OctaveNoise`]: several Perlin layers summed with accumulating
//!   frequency and amplitude.
//! - [`NoiseConfig`] / [`PassabilityMode`]: the serializable configuration
//!   and the mapping from raw noise to a 0–100 passability weight.
//! - [`TerrainGen`]: builds a [`Grid`](tilepath_core::Grid), evaluating cells
//!   in parallel.

pub mod config;
pub mod mapgen;
pub mod noise;
pub mod perlin;

pub use config::{ConfigError, NoiseConfig, PassabilityMode};
pub use mapgen::{TerrainGen, generate};
pub use noise::OctaveNoise;
pub use perlin::Perlin;
