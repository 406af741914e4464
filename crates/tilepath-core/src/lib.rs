//! **tilepath-core**: grid and geometry types shared by the *tilepath*
//! crates.
//!
//! This crate provides the integer geometry primitives, the [`Cell`] record
//! that carries both terrain passability and per-cell search state, and the
//! row-major [`Grid`] that owns those cells.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, MAX_PASSABILITY};
pub use geom::{Point, Range};
pub use grid::Grid;
