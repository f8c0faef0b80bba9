//! Points awarded per word

/// Points for a newly found word of `length` letters.
///
/// Words shorter than three letters are accepted but earn nothing.
pub fn score_for(length: usize) -> u32 {
    match length {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 4,
        _ => 11,
    }
}

/// Points for a word as spelled. "QU" counts as two letters.
pub fn score_word(word: &str) -> u32 {
    score_for(word.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_table() {
        assert_eq!(score_for(0), 0);
        assert_eq!(score_for(1), 0);
        assert_eq!(score_for(2), 0);
        assert_eq!(score_for(3), 1);
        assert_eq!(score_for(4), 1);
        assert_eq!(score_for(5), 2);
        assert_eq!(score_for(6), 3);
        assert_eq!(score_for(7), 4);
        assert_eq!(score_for(8), 11);
        assert_eq!(score_for(9), 11);
        assert_eq!(score_for(16), 11);
    }

    #[test]
    fn test_score_word_counts_letters() {
        assert_eq!(score_word("AB"), 0);
        assert_eq!(score_word("CAT"), 1);
        assert_eq!(score_word("QUIT"), 1);
        assert_eq!(score_word("QUEEN"), 2);
        assert_eq!(score_word("QUOTED"), 3);
    }
}
