//! Screen geometry shared by rendering and mouse hit-testing

use crate::app::Activation;
use crate::game::grid::{Coord, GRID_SIZE, TILE_COUNT};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Tile cell size in terminal columns/rows (including its border)
pub const TILE_WIDTH: u16 = 7;
pub const TILE_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = TILE_WIDTH * GRID_SIZE as u16;
const BOARD_HEIGHT: u16 = TILE_HEIGHT * GRID_SIZE as u16;
const RESET_WIDTH: u16 = 11;
const EXIT_WIDTH: u16 = 10;

/// Where everything sits on screen for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub title: Rect,
    pub score: Rect,
    /// Row-major, indexed by [`Coord::index`]
    pub tiles: [Rect; TILE_COUNT],
    pub partial_word: Rect,
    pub reset: Rect,
    pub exit: Rect,
    pub found_words: Rect,
    pub footer: Rect,
}

impl BoardLayout {
    pub fn new(area: Rect) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .margin(1)
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BOARD_WIDTH), // Board column
                Constraint::Length(2),           // Gutter
                Constraint::Min(0),              // Found words
            ])
            .split(outer[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Title
                Constraint::Length(1),            // Score
                Constraint::Length(1),            // Spacer
                Constraint::Length(BOARD_HEIGHT), // Tiles
                Constraint::Length(1),            // Spacer
                Constraint::Length(1),            // Partial word
                Constraint::Length(1),            // Spacer
                Constraint::Length(1),            // Buttons
                Constraint::Min(0),               // Remaining space
            ])
            .split(columns[0]);

        let board = rows[3];
        let tiles = std::array::from_fn(|i| {
            let col = (i % GRID_SIZE) as u16;
            let row = (i / GRID_SIZE) as u16;
            Rect::new(
                board.x + col * TILE_WIDTH,
                board.y + row * TILE_HEIGHT,
                TILE_WIDTH,
                TILE_HEIGHT,
            )
            .intersection(board)
        });

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(RESET_WIDTH),
                Constraint::Length(2),
                Constraint::Length(EXIT_WIDTH),
                Constraint::Min(0),
            ])
            .split(rows[7]);

        Self {
            title: rows[0],
            score: rows[1],
            tiles,
            partial_word: rows[5],
            reset: buttons[0],
            exit: buttons[2],
            found_words: columns[2],
            footer: outer[1],
        }
    }

    pub fn tile(&self, coord: Coord) -> Rect {
        self.tiles[coord.index()]
    }

    /// Resolve a click at a terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Activation {
        let pos = Position::new(column, row);

        if let Some(coord) = Coord::all().find(|c| self.tile(*c).contains(pos)) {
            return Activation::Tile(coord);
        }
        if self.reset.contains(pos) {
            return Activation::Reset;
        }
        if self.exit.contains(pos) {
            return Activation::Exit;
        }
        Activation::Outside
    }
}
