//! Game session state
//!
//! Takes one activation at a time, runs it through the selection tracker and
//! applies the result: highlights, the partial word, found words and score.

use super::input::Activation;
use super::surface::{Panels, Surface};
use crate::game::grid::{Coord, Highlight, TileGrid};
use crate::game::lexicon::Lexicon;
use crate::game::scoring::score_word;
use crate::game::selection::{SelectionTracker, Step};
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::ops::ControlFlow;

/// A word the player found, with its point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub points: u32,
}

/// One game of Boggle on one board
pub struct Game<S: Surface = Panels> {
    grid: TileGrid,
    lexicon: Lexicon,
    tracker: SelectionTracker,
    /// Found words in discovery order
    found_words: Vec<FoundWord>,
    /// Canonical set of found words, for duplicate checks
    found_set: HashSet<String>,
    score: u32,
    surface: S,
    rng: StdRng,
}

impl<S: Surface> Game<S> {
    /// Start a game on a freshly shaken board.
    pub fn new(lexicon: Lexicon, surface: S, mut rng: StdRng) -> Self {
        let mut grid = TileGrid::new();
        grid.shake_with_rng(&mut rng);
        Self::with_grid(grid, lexicon, surface, rng)
    }

    /// Start a game on a given board (for testing/fixed layouts).
    pub fn with_grid(grid: TileGrid, lexicon: Lexicon, mut surface: S, rng: StdRng) -> Self {
        surface.clear();
        Self {
            grid,
            lexicon,
            tracker: SelectionTracker::new(),
            found_words: Vec::new(),
            found_set: HashSet::new(),
            score: 0,
            surface,
            rng,
        }
    }

    /// Handle one activation. Breaks when the player asks to exit.
    pub fn handle(&mut self, activation: Activation) -> ControlFlow<()> {
        match activation {
            Activation::Exit => {
                tracing::info!(score = self.score, words = self.found_words.len(), "exit requested");
                return ControlFlow::Break(());
            }
            Activation::Reset => self.reset(),
            other => self.select(other.coord()),
        }
        ControlFlow::Continue(())
    }

    /// Point at a tile, or outside the board with `None`.
    pub fn select(&mut self, target: Option<Coord>) {
        match self.tracker.activate(target, &self.grid) {
            Step::Ignored => {}
            Step::Started(at) => {
                self.paint(at, Highlight::Active);
                let letter = self.grid.letter(at).to_string();
                self.surface.set_partial_word(&letter);
            }
            Step::Extended { from, to } => {
                self.paint(from, Highlight::Previous);
                self.paint(to, Highlight::Active);
                let partial = format!("{}{}", self.surface.partial_word(), self.grid.letter(to));
                self.surface.set_partial_word(&partial);
            }
            Step::Committed { word } => {
                self.commit(word);
                self.clear_selection();
            }
            Step::Aborted(reason) => {
                tracing::debug!(?reason, "selection aborted");
                self.clear_selection();
            }
        }
    }

    /// Record a word if it is valid and new. Returns the points awarded.
    fn commit(&mut self, word: String) -> Option<u32> {
        if !self.lexicon.contains(&word) {
            tracing::debug!(%word, "not in word list");
            return None;
        }
        if self.found_set.contains(&word) {
            tracing::debug!(%word, "already found");
            return None;
        }

        let points = score_word(&word);
        self.score += points;

        let text = match self.surface.found_words_text() {
            "" => word.clone(),
            existing => format!("{}\n{}", existing, word),
        };
        self.surface.set_found_words_text(&text);
        self.surface.set_score_text(&self.score.to_string());

        tracing::info!(%word, points, score = self.score, "found word");
        self.found_set.insert(word.clone());
        self.found_words.push(FoundWord { word, points });
        Some(points)
    }

    /// Reshake the board and start over. Path, highlights, text, found
    /// words and score are all cleared before the next event is handled.
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.grid.clear_highlights();
        self.surface.clear();
        self.found_words.clear();
        self.found_set.clear();
        self.score = 0;
        self.grid.shake_with_rng(&mut self.rng);
        tracing::info!("board reset");
    }

    fn clear_selection(&mut self) {
        self.tracker.clear();
        self.grid.clear_highlights();
        for coord in Coord::all() {
            self.surface.set_highlight(coord, Highlight::Neutral);
        }
        self.surface.set_partial_word("");
    }

    fn paint(&mut self, at: Coord, highlight: Highlight) {
        self.grid.tile_mut(at).set_highlight(highlight);
        self.surface.set_highlight(at, highlight);
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn found_words(&self) -> &[FoundWord] {
        &self.found_words
    }

    pub fn has_found(&self, word: &str) -> bool {
        self.found_set.contains(word)
    }
}
