//! Tile selection state machine
//!
//! Tracks the path of tiles the player is pointing at and decides, for each
//! activation, which of five rules applies. Rules are checked in this order:
//!
//! 1. Start: the path is empty, so the tile begins a new word
//! 2. Commit: the tile is the last one in the path (tapped twice)
//! 3. Reselect: the tile is somewhere earlier in the path
//! 4. Extend: the tile touches the last one in the path
//! 5. Invalid: anything else, including pointing outside the board
//!
//! The tracker only owns the path. Highlights, the word list and scoring are
//! applied by the caller based on the returned [`Step`].

use super::grid::{Coord, TileGrid};

/// Whether a word is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Building,
}

/// Which rule an activation falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Start,
    Commit,
    Reselect,
    Extend,
    Invalid,
    /// Pointing outside the board with nothing selected
    Idle,
}

/// Why a path was dropped without committing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Tapped a tile already in the path that isn't the last one
    Reselected,
    /// Tapped a tile that doesn't touch the last one
    NotAdjacent,
    /// Tapped outside the board
    OutsideGrid,
}

/// Outcome of one activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing selected and nothing to select
    Ignored,
    /// First tile of a new path
    Started(Coord),
    /// Path grew by one tile
    Extended { from: Coord, to: Coord },
    /// Last tile tapped again; the spelled word is handed back and the path is cleared
    Committed { word: String },
    /// Path cleared without a commit attempt
    Aborted(AbortReason),
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    path: Vec<Coord>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        if self.path.is_empty() {
            SelectionState::Idle
        } else {
            SelectionState::Building
        }
    }

    /// Selected tiles in selection order
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn last(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.path.contains(&coord)
    }

    /// Letters of the path in order
    pub fn word(&self, grid: &TileGrid) -> String {
        self.path.iter().map(|&c| grid.letter(c)).collect()
    }

    /// Drop the current path.
    pub fn clear(&mut self) {
        self.path.clear();
    }

    /// Decide which rule applies to an activation without changing anything.
    pub fn rule_for(&self, target: Option<Coord>) -> Rule {
        let Some(last) = self.last() else {
            return match target {
                Some(_) => Rule::Start,
                None => Rule::Idle,
            };
        };

        match target {
            Some(t) if t == last => Rule::Commit,
            Some(t) if self.contains(t) => Rule::Reselect,
            Some(t) if t.is_adjacent(&last) => Rule::Extend,
            _ => Rule::Invalid,
        }
    }

    /// Apply one activation. `None` means the player pointed outside the board.
    pub fn activate(&mut self, target: Option<Coord>, grid: &TileGrid) -> Step {
        let step = match (self.rule_for(target), target) {
            (Rule::Idle, _) => Step::Ignored,
            (Rule::Start, Some(t)) => {
                self.path.push(t);
                Step::Started(t)
            }
            (Rule::Commit, _) => {
                let word = self.word(grid);
                self.clear();
                Step::Committed { word }
            }
            (Rule::Reselect, _) => {
                self.clear();
                Step::Aborted(AbortReason::Reselected)
            }
            (Rule::Extend, Some(t)) => {
                let from = self.path[self.path.len() - 1];
                self.path.push(t);
                Step::Extended { from, to: t }
            }
            (_, Some(_)) => {
                self.clear();
                Step::Aborted(AbortReason::NotAdjacent)
            }
            (_, None) => {
                self.clear();
                Step::Aborted(AbortReason::OutsideGrid)
            }
        };

        tracing::debug!(?target, ?step, path_len = self.path.len(), "selection step");
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(col: usize, row: usize) -> Coord {
        Coord::new(col, row).unwrap()
    }

    fn grid() -> TileGrid {
        TileGrid::from_letters([
            "A", "B", "C", "D", //
            "E", "F", "G", "H", //
            "I", "J", "K", "L", //
            "M", "N", "O", "QU",
        ])
    }

    #[test]
    fn test_starts_idle() {
        let tracker = SelectionTracker::new();
        assert_eq!(tracker.state(), SelectionState::Idle);
        assert!(tracker.path().is_empty());
    }

    #[test]
    fn test_outside_when_idle_is_ignored() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.activate(None, &grid), Step::Ignored);
        assert_eq!(tracker.state(), SelectionState::Idle);
    }

    #[test]
    fn test_start() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.activate(Some(c(0, 0)), &grid), Step::Started(c(0, 0)));
        assert_eq!(tracker.state(), SelectionState::Building);
        assert_eq!(tracker.path(), &[c(0, 0)]);
    }

    #[test]
    fn test_extend_grows_by_one_each_time() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        // A snake through every tile, each step adjacent and new
        let walk = [
            c(0, 0), c(1, 0), c(2, 0), c(3, 0),
            c(3, 1), c(2, 1), c(1, 1), c(0, 1),
            c(0, 2), c(1, 2), c(2, 2), c(3, 2),
            c(3, 3), c(2, 3), c(1, 3), c(0, 3),
        ];
        for (i, &coord) in walk.iter().enumerate() {
            tracker.activate(Some(coord), &grid);
            assert_eq!(tracker.path().len(), i + 1);
        }
        assert_eq!(tracker.word(&grid), "ABCDHGFEIJKLQUONM");
    }

    #[test]
    fn test_extend_reports_previous_last() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        tracker.activate(Some(c(0, 0)), &grid);
        assert_eq!(
            tracker.activate(Some(c(1, 1)), &grid),
            Step::Extended { from: c(0, 0), to: c(1, 1) }
        );
    }

    #[test]
    fn test_commit_returns_word_and_clears() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        tracker.activate(Some(c(0, 0)), &grid);
        tracker.activate(Some(c(0, 1)), &grid);
        let step = tracker.activate(Some(c(0, 1)), &grid);
        assert_eq!(step, Step::Committed { word: "AE".to_string() });
        assert_eq!(tracker.state(), SelectionState::Idle);
    }

    #[test]
    fn test_single_tile_double_tap_commits() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        tracker.activate(Some(c(3, 3)), &grid);
        let step = tracker.activate(Some(c(3, 3)), &grid);
        assert_eq!(step, Step::Committed { word: "QU".to_string() });
    }

    #[test]
    fn test_reselect_earlier_tile_aborts() {
        // Tap A, tap B, tap A: abort rather than spelling ABA
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        tracker.activate(Some(c(0, 0)), &grid);
        tracker.activate(Some(c(1, 0)), &grid);
        assert_eq!(tracker.rule_for(Some(c(0, 0))), Rule::Reselect);
        assert_eq!(
            tracker.activate(Some(c(0, 0)), &grid),
            Step::Aborted(AbortReason::Reselected)
        );
        assert!(tracker.path().is_empty());
    }

    #[test]
    fn test_non_adjacent_aborts() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        tracker.activate(Some(c(0, 0)), &grid);
        tracker.activate(Some(c(1, 0)), &grid);
        tracker.activate(Some(c(2, 0)), &grid);
        assert_eq!(
            tracker.activate(Some(c(0, 3)), &grid),
            Step::Aborted(AbortReason::NotAdjacent)
        );
        assert!(tracker.path().is_empty());
    }

    #[test]
    fn test_outside_while_building_aborts() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        tracker.activate(Some(c(2, 2)), &grid);
        assert_eq!(tracker.activate(None, &grid), Step::Aborted(AbortReason::OutsideGrid));
        assert_eq!(tracker.state(), SelectionState::Idle);
    }

    #[test]
    fn test_after_abort_next_tap_starts_fresh() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        tracker.activate(Some(c(0, 0)), &grid);
        tracker.activate(Some(c(3, 3)), &grid);
        assert_eq!(tracker.activate(Some(c(3, 3)), &grid), Step::Started(c(3, 3)));
    }

    #[test]
    fn test_rule_precedence() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.rule_for(None), Rule::Idle);
        assert_eq!(tracker.rule_for(Some(c(1, 1))), Rule::Start);

        tracker.activate(Some(c(1, 1)), &grid);
        tracker.activate(Some(c(2, 2)), &grid);

        // (1,1) touches (2,2) but is already in the path, so reselect wins over extend
        assert_eq!(tracker.rule_for(Some(c(1, 1))), Rule::Reselect);
        assert_eq!(tracker.rule_for(Some(c(2, 2))), Rule::Commit);
        assert_eq!(tracker.rule_for(Some(c(3, 3))), Rule::Extend);
        assert_eq!(tracker.rule_for(Some(c(0, 0))), Rule::Invalid);
        assert_eq!(tracker.rule_for(None), Rule::Invalid);
    }

    #[test]
    fn test_path_stays_connected_and_unique() {
        let grid = grid();
        let mut tracker = SelectionTracker::new();
        let taps = [c(1, 1), c(2, 1), c(1, 1), c(0, 0), c(1, 0), c(2, 1), c(3, 2), c(3, 2)];
        for &t in &taps {
            tracker.activate(Some(t), &grid);
            let path = tracker.path();
            for pair in path.windows(2) {
                assert!(pair[0].is_adjacent(&pair[1]));
            }
            let unique: std::collections::HashSet<_> = path.iter().collect();
            assert_eq!(unique.len(), path.len());
        }
    }
}
