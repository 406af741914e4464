//! Resumable best-first search over weighted tile grids.
//!
//! A [`SearchEngine`] runs A* or Dijkstra over a [`tilepath_core::Grid`]
//! either to completion ([`SearchEngine::calculate_path`]) or one
//! expansion at a time ([`SearchEngine::init`] then [`SearchEngine::step`]),
//! exposing the frontier, the settled set and the best partial path
//! between steps so a search can be visualized as it runs.
//!
//! Behaviour is chosen by the [`CostModel`] the engine is built with:
//!
//! | Model | Neighbours | Move cost | Estimate |
//! |---|---|---|---|
//! | [`Octile`] | 8 | passability-weighted 1000 / 1414 | octile × multiplier |
//! | [`Cardinal`] | 4 | passability-weighted 1000 | Manhattan × 1000 × multiplier |
//! | [`UnitCost`] | 4 | 1 | Manhattan |
//! | [`Uninformed<M>`] | as `M` | as `M` | 0 (Dijkstra) |
//!
//! [`Pathfinder`] wraps one engine per [`Algorithm`] behind a single type
//! for callers that pick the variant at runtime.
//!
//! Frontier ties are broken by lower `h`, then by the most recent insertion,
//! so identical inputs always expand cells in the same order.

mod cost;
mod distance;
mod engine;
mod frontier;
mod neighbors;
mod path;
mod selector;
mod traits;

pub use cost::{Cardinal, Octile, UnitCost, Uninformed, weighted_cost};
pub use distance::{DIAGONAL_COST, STEP_COST, manhattan, octile};
pub use engine::{SearchEngine, SearchState};
pub use frontier::SetCells;
pub use neighbors::{ALL, CARDINAL, Topology};
pub use selector::{Algorithm, Pathfinder, SearchConfig, UnknownAlgorithm};
pub use traits::CostModel;
