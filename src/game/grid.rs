//! The 4×4 board of lettered tiles
//!
//! Tiles are plain data: a fixed coordinate, a letter that changes on every
//! shake, and a highlight tag that the selection logic drives.

use super::{roll_dice, Roll};
use rand::Rng;
use std::fmt;

/// Number of columns and rows on the board
pub const GRID_SIZE: usize = 4;

/// Total number of tiles on the board
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A position on the board, always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    /// Bounds-checked constructor.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        if col < GRID_SIZE && row < GRID_SIZE {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Index into the row-major tile array
    pub fn index(&self) -> usize {
        self.row() * GRID_SIZE + self.col()
    }

    /// Eight-directional adjacency. A coordinate is never adjacent to itself.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        let col_diff = (self.col as i8 - other.col as i8).abs();
        let row_diff = (self.row as i8 - other.row as i8).abs();

        col_diff <= 1 && row_diff <= 1 && (col_diff + row_diff > 0)
    }

    /// Every coordinate on the board, row by row
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..TILE_COUNT).map(|i| Coord {
            col: (i % GRID_SIZE) as u8,
            row: (i / GRID_SIZE) as u8,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Visual state of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Neutral,
    /// Last tile of the path
    Active,
    /// Any earlier tile of the path
    Previous,
}

impl Highlight {
    pub fn label(&self) -> &'static str {
        match self {
            Highlight::Neutral => "neutral",
            Highlight::Active => "active",
            Highlight::Previous => "previous",
        }
    }
}

/// One cell of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    coord: Coord,
    letter: String,
    highlight: Highlight,
}

impl Tile {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            letter: String::new(),
            highlight: Highlight::Neutral,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The displayed letter (one or two uppercase characters)
    pub fn letter(&self) -> &str {
        &self.letter
    }

    pub fn set_letter(&mut self, letter: &str) {
        self.letter = letter.to_uppercase();
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = highlight;
    }
}

/// The fixed 4×4 board. Exactly one tile per coordinate, stored row-major.
#[derive(Debug, Clone)]
pub struct TileGrid {
    tiles: Vec<Tile>,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TileGrid {
    /// An unshaken board with blank letters
    pub fn new() -> Self {
        Self {
            tiles: Coord::all().map(Tile::new).collect(),
        }
    }

    /// Build a board from 16 letters given row by row (mostly for tests).
    pub fn from_letters(letters: [&str; TILE_COUNT]) -> Self {
        let mut grid = Self::new();
        for (tile, letter) in grid.tiles.iter_mut().zip(letters) {
            tile.set_letter(letter);
        }
        grid
    }

    /// Bounds-checked lookup
    pub fn tile_at(&self, col: usize, row: usize) -> Option<&Tile> {
        Coord::new(col, row).map(|coord| self.tile(coord))
    }

    pub fn tile(&self, coord: Coord) -> &Tile {
        &self.tiles[coord.index()]
    }

    pub fn tile_mut(&mut self, coord: Coord) -> &mut Tile {
        &mut self.tiles[coord.index()]
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn letter(&self, coord: Coord) -> &str {
        self.tile(coord).letter()
    }

    /// True iff the tiles are distinct and touch, diagonals included.
    pub fn adjacent(a: &Tile, b: &Tile) -> bool {
        a.coord.is_adjacent(&b.coord)
    }

    /// Set every tile back to neutral without touching letters.
    pub fn clear_highlights(&mut self) {
        for tile in &mut self.tiles {
            tile.highlight = Highlight::Neutral;
        }
    }

    /// Reshake the dice using the thread-local RNG.
    pub fn shake(&mut self) -> [Roll; TILE_COUNT] {
        self.shake_with_rng(&mut rand::rng())
    }

    /// Reshake the dice using a specific RNG (for testing/seeding).
    ///
    /// Returns the rolls in row-major order so callers can see which die
    /// landed where.
    pub fn shake_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> [Roll; TILE_COUNT] {
        let rolls = roll_dice(rng);
        for (tile, roll) in self.tiles.iter_mut().zip(rolls.iter()) {
            tile.set_letter(roll.face);
        }
        tracing::debug!(board = %self, "shook the dice");
        rolls
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(GRID_SIZE) {
            for tile in row {
                write!(f, "[{}:{}] ", tile.letter, tile.highlight.label())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
