//! Word list for validating committed words
//!
//! Loaded once at startup from a newline-delimited file.
//! Words are stored trimmed and uppercased; lookup is O(1).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the word list.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The set of valid words
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load the word list from a file, one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon = Self::parse(&content);
        tracing::info!(path = %path.display(), words = lexicon.len(), "loaded word list");
        Ok(lexicon)
    }

    /// Build from newline-delimited text. Blank lines are skipped.
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Exact membership. Callers pass the word uppercased, as assembled from tiles.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("boggle-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_parse_trims_and_uppercases() {
        let lexicon = Lexicon::parse("cat\n  Dog \r\nQUIT\n");
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("CAT"));
        assert!(lexicon.contains("DOG"));
        assert!(lexicon.contains("QUIT"));
        assert!(!lexicon.contains("cat"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let lexicon = Lexicon::parse("\n\ncat\n   \n");
        assert_eq!(lexicon.len(), 1);
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn test_duplicates_collapse() {
        let lexicon = Lexicon::from_words(["tea", "TEA", "Tea "]);
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("TEST"));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("words.txt");
        std::fs::write(&path, "apple\nbanana\n").unwrap();

        let lexicon = Lexicon::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("APPLE"));
        assert!(lexicon.contains("BANANA"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = temp_path("does-not-exist.txt");
        let err = Lexicon::load(&path).unwrap_err();
        match &err {
            LexiconError::Read { path: p, .. } => assert_eq!(p, &path),
        }
        assert!(err.to_string().contains("does-not-exist.txt"));
    }
}
