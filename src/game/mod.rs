//! Game logic: the board, dice, tile selection, scoring, word list

pub mod grid;
pub mod lexicon;
pub mod scoring;
pub mod selection;

use grid::TILE_COUNT;
use rand::prelude::*;

/// Faces on each die
pub const FACES: usize = 6;

/// The sixteen dice. Each board uses every die exactly once.
/// "QU" sits on a single face and is played as one tile.
pub const DICE: [[&str; FACES]; TILE_COUNT] = [
    ["A", "A", "C", "I", "O", "T"],
    ["T", "Y", "A", "B", "I", "L"],
    ["J", "M", "O", "QU", "A", "B"],
    ["A", "C", "D", "E", "M", "P"],
    ["A", "C", "E", "L", "S", "R"],
    ["A", "D", "E", "N", "V", "Z"],
    ["A", "H", "M", "O", "R", "S"],
    ["B", "F", "I", "O", "R", "X"],
    ["D", "E", "N", "O", "S", "W"],
    ["D", "K", "N", "O", "T", "U"],
    ["E", "E", "F", "H", "I", "Y"],
    ["E", "G", "I", "N", "T", "V"],
    ["E", "G", "K", "L", "U", "Y"],
    ["E", "H", "I", "N", "P", "S"],
    ["E", "L", "P", "S", "T", "U"],
    ["G", "I", "L", "R", "U", "W"],
];

/// The face one die landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    /// Index into [`DICE`]
    pub die: usize,
    pub face: &'static str,
}

/// Shuffle the dice across the board and roll each one.
///
/// The result is row-major: entry `row * 4 + col` is the die placed at
/// `(col, row)`.
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R) -> [Roll; TILE_COUNT] {
    let mut order: [usize; TILE_COUNT] = std::array::from_fn(|i| i);
    order.shuffle(rng);

    order.map(|die| Roll {
        die,
        face: DICE[die][rng.random_range(0..FACES)],
    })
}
