//! Progress module - score, level and best-score arithmetic
//!
//! The level is always derived from the score, never incremented by hand,
//! so the two cannot drift apart. Level-ups grant extra trash uses; that
//! bookkeeping lives in the session, which is the only score mutator.

use just_divide_types::LEVEL_SCORE_STEP;

/// Level derived from a score: one level per [`LEVEL_SCORE_STEP`] points,
/// starting at level 1.
pub fn derive_level(score: u32) -> u32 {
    score / LEVEL_SCORE_STEP + 1
}

/// The new best score, if the current score beats the recorded one.
///
/// The caller persists the returned value; this module never touches
/// storage.
pub fn updated_best(score: u32, best: u32) -> Option<u32> {
    (score > best).then_some(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_derivation() {
        assert_eq!(derive_level(0), 1);
        assert_eq!(derive_level(9), 1);
        assert_eq!(derive_level(10), 2);
        assert_eq!(derive_level(19), 2);
        assert_eq!(derive_level(20), 3);
        assert_eq!(derive_level(105), 11);
    }

    #[test]
    fn test_best_only_moves_up() {
        assert_eq!(updated_best(10, 5), Some(10));
        assert_eq!(updated_best(5, 5), None);
        assert_eq!(updated_best(4, 5), None);
        assert_eq!(updated_best(1, 0), Some(1));
    }
}
