//! Per-cell display states and a plain-text rendering of them.

use serde::{Deserialize, Serialize};

/// What a renderer should draw for one cell.
///
/// The discriminants are the codes written into the display buffer and
/// are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum TileState {
    Impassable = 1,
    Passable = 2,
    Player = 3,
    End = 4,
    Path = 5,
    Open = 6,
    Closed = 7,
}

impl TileState {
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn glyph(self) -> char {
        match self {
            TileState::Impassable => '#',
            TileState::Passable => '.',
            TileState::Player => '@',
            TileState::End => 'E',
            TileState::Path => '*',
            TileState::Open => 'o',
            TileState::Closed => 'x',
        }
    }
}

/// Render a row-major buffer of `width` columns as text, top row first.
///
/// Row `y = 0` is the bottom line, so "up" (+y) points up on screen.
pub fn render_ascii(states: &[TileState], width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut out = String::with_capacity(states.len() + states.len() / width);
    for row in states.chunks(width).rev() {
        out.extend(row.iter().map(|s| s.glyph()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(TileState::Impassable.code(), 1);
        assert_eq!(TileState::Passable.code(), 2);
        assert_eq!(TileState::Closed.code(), 7);
    }

    #[test]
    fn renders_top_row_first() {
        use TileState::*;
        let states = [Player, Passable, Impassable, Path, Open, End];
        assert_eq!(render_ascii(&states, 3), "*oE\n@.#\n");
        assert_eq!(render_ascii(&states, 0), "");
    }
}
