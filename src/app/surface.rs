//! Display surface the game writes to
//!
//! The game never talks to a renderer directly. It sets text and tile
//! highlights through [`Surface`]; the terminal UI reads them back out of
//! [`Panels`] each frame.

use crate::game::grid::{Coord, Highlight, TILE_COUNT};

/// Text areas and per-tile highlights shown to the player
pub trait Surface {
    /// The word being built (lower text area)
    fn set_partial_word(&mut self, text: &str);
    fn partial_word(&self) -> &str;

    /// Found words, newline-separated (side text area)
    fn set_found_words_text(&mut self, text: &str);
    fn found_words_text(&self) -> &str;

    /// Running score (upper text area)
    fn set_score_text(&mut self, text: &str);
    fn score_text(&self) -> &str;

    fn set_highlight(&mut self, at: Coord, state: Highlight);
    fn highlight(&self, at: Coord) -> Highlight;

    /// Clear every text area and highlight.
    fn clear(&mut self) {
        self.set_partial_word("");
        self.set_found_words_text("");
        self.set_score_text("");
        for coord in Coord::all() {
            self.set_highlight(coord, Highlight::Neutral);
        }
    }
}

/// In-memory surface backing the terminal UI
#[derive(Debug, Clone, Default)]
pub struct Panels {
    partial_word: String,
    found_words: String,
    score: String,
    highlights: [Highlight; TILE_COUNT],
}

impl Panels {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for Panels {
    fn set_partial_word(&mut self, text: &str) {
        self.partial_word = text.to_string();
    }

    fn partial_word(&self) -> &str {
        &self.partial_word
    }

    fn set_found_words_text(&mut self, text: &str) {
        self.found_words = text.to_string();
    }

    fn found_words_text(&self) -> &str {
        &self.found_words
    }

    fn set_score_text(&mut self, text: &str) {
        self.score = text.to_string();
    }

    fn score_text(&self) -> &str {
        &self.score
    }

    fn set_highlight(&mut self, at: Coord, state: Highlight) {
        self.highlights[at.index()] = state;
    }

    fn highlight(&self, at: Coord) -> Highlight {
        self.highlights[at.index()]
    }
}
