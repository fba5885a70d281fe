use serde::{Deserialize, Serialize};

/// Best score reached across sessions.
///
/// Serializes as a bare integer, so a stored high score is just its decimal
/// digits.
///
/// # Example
///
/// ```
/// use slide2048_engine::HighScore;
///
/// let mut high_score = HighScore::new(100);
/// assert!(!high_score.observe(80));
/// assert!(high_score.observe(120));
/// assert_eq!(high_score.value(), 120);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HighScore(u64);

impl HighScore {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Raises the high score to `score` if it is exceeded.
    ///
    /// Returns `true` if the high score changed.
    pub fn observe(&mut self, score: u64) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_decreases() {
        let mut high_score = HighScore::default();
        let mut max = 0;
        for score in [0, 4, 16, 8, 0, 32, 32, 12] {
            let changed = high_score.observe(score);
            assert_eq!(changed, score > max);
            max = max.max(score);
            assert_eq!(high_score.value(), max);
        }
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&HighScore::new(2048)).unwrap(), "2048");
        let high_score: HighScore = serde_json::from_str("512").unwrap();
        assert_eq!(high_score, HighScore::new(512));
        assert!(serde_json::from_str::<HighScore>("\"abc\"").is_err());
        assert!(serde_json::from_str::<HighScore>("-3").is_err());
    }
}
