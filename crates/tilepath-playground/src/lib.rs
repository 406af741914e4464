//! Headless playground for stepwise pathfinding over noise terrain.
//!
//! Generates a grid from a [`PlaygroundConfig`], then repeatedly routes a
//! "player" between random passable cells. Each [`Session::tick`] does one
//! unit of work, and [`Session::display_buffer`] reports what every cell
//! should look like, so any front end (or the bundled `tilepath` binary,
//! which prints ASCII frames) can drive and draw it.

mod config;
mod display;
mod session;

pub use config::{PlaygroundConfig, PlaygroundError};
pub use display::{TileState, render_ascii};
pub use session::{MAX_END_ATTEMPTS, MAX_START_ATTEMPTS, Session, TickEvent};
