//! Boggle: find words on a 4×4 board of letter dice
//!
//! Point at adjacent tiles to spell a word, then point at the last tile again
//! to submit it. New words in the word list score by length.

pub mod app;
pub mod config;
pub mod game;
pub mod tui;
