//! Score-driven difficulty levels.
//!
//! Every simulation carries parallel per-level tables plus a list of score
//! thresholds. The ladder only climbs, one level per score update, and stops
//! at the last table entry.

use crate::types::{DIFFICULTY_LEVELS, DIFFICULTY_THRESHOLDS};

/// Monotonic level index driven by score thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyLadder {
    thresholds: [u32; DIFFICULTY_THRESHOLDS],
    level: usize,
    /// None once the top level is reached.
    next_threshold: Option<u32>,
}

impl DifficultyLadder {
    pub fn new(thresholds: [u32; DIFFICULTY_THRESHOLDS]) -> Self {
        Self {
            thresholds,
            level: 0,
            next_threshold: thresholds.first().copied(),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn max_level(&self) -> usize {
        DIFFICULTY_LEVELS - 1
    }

    pub fn next_threshold(&self) -> Option<u32> {
        self.next_threshold
    }

    /// Re-evaluate after a score change. Returns true when the level went up.
    ///
    /// At most one level is gained per call, so a level is never skipped.
    pub fn update(&mut self, score: u32) -> bool {
        let Some(threshold) = self.next_threshold else {
            return false;
        };
        if score < threshold {
            return false;
        }
        self.level += 1;
        self.next_threshold = self.thresholds.get(self.level).copied();
        true
    }

    /// Pick this level's entry from a per-level table.
    pub fn pick<T: Copy>(&self, table: &[T; DIFFICULTY_LEVELS]) -> T {
        table[self.level.min(DIFFICULTY_LEVELS - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_with_first_threshold() {
        let ladder = DifficultyLadder::new([5, 15, 30]);
        assert_eq!(ladder.level(), 0);
        assert_eq!(ladder.next_threshold(), Some(5));
    }

    #[test]
    fn climbs_at_each_threshold() {
        let mut ladder = DifficultyLadder::new([5, 15, 30]);
        let mut levels = Vec::new();
        for score in 0..=40 {
            ladder.update(score);
            levels.push(ladder.level());
        }
        assert_eq!(levels[4], 0);
        assert_eq!(levels[5], 1);
        assert_eq!(levels[14], 1);
        assert_eq!(levels[15], 2);
        assert_eq!(levels[30], 3);
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn never_skips_a_level() {
        let mut ladder = DifficultyLadder::new([5, 15, 30]);
        assert!(ladder.update(100));
        assert_eq!(ladder.level(), 1);
        assert!(ladder.update(100));
        assert_eq!(ladder.level(), 2);
    }

    #[test]
    fn sentinel_after_max_level() {
        let mut ladder = DifficultyLadder::new([1, 2, 3]);
        for score in 1..=3 {
            ladder.update(score);
        }
        assert_eq!(ladder.level(), ladder.max_level());
        assert_eq!(ladder.next_threshold(), None);
        for score in 4..1000 {
            assert!(!ladder.update(score));
        }
        assert_eq!(ladder.level(), 3);
        assert_eq!(ladder.next_threshold(), None);
    }

    #[test]
    fn pick_indexes_table_by_level() {
        let mut ladder = DifficultyLadder::new([1, 2, 3]);
        let table = [10, 20, 30, 40];
        assert_eq!(ladder.pick(&table), 10);
        ladder.update(1);
        assert_eq!(ladder.pick(&table), 20);
    }
}
