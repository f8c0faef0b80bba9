//! Input events delivered to the game

use crate::game::grid::Coord;

/// What the player pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A tile on the board
    Tile(Coord),
    /// The reset control
    Reset,
    /// The exit control
    Exit,
    /// Anywhere else
    Outside,
}

impl Activation {
    /// The tile pointed at, if any
    pub fn coord(&self) -> Option<Coord> {
        match self {
            Activation::Tile(coord) => Some(*coord),
            _ => None,
        }
    }
}
