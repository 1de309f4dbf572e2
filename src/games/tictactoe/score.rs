//! Session score totals.

use super::{Mark, Outcome};
use serde::{Deserialize, Serialize};

/// Wins per mark plus draws, accumulated across rounds.
///
/// Serialized as `{"X": n, "O": n, "draws": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Score {
    /// Rounds won by [`Mark::First`].
    #[serde(rename = "X", default)]
    first_wins: u32,
    /// Rounds won by [`Mark::Second`].
    #[serde(rename = "O", default)]
    second_wins: u32,
    /// Rounds drawn.
    #[serde(default)]
    draws: u32,
}

impl Score {
    /// Creates a score with the given totals.
    pub fn new(first_wins: u32, second_wins: u32, draws: u32) -> Self {
        Self {
            first_wins,
            second_wins,
            draws,
        }
    }

    /// Wins credited to `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::First => self.first_wins,
            Mark::Second => self.second_wins,
        }
    }

    /// Number of rounds recorded.
    pub fn rounds(&self) -> u64 {
        u64::from(self.first_wins) + u64::from(self.second_wins) + u64::from(self.draws)
    }

    /// Credits one finished round.
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(Mark::First) => self.first_wins = self.first_wins.saturating_add(1),
            Some(Mark::Second) => self.second_wins = self.second_wins.saturating_add(1),
            None => self.draws = self.draws.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_draw() {
        let mut score = Score::default();
        score.record(&Outcome::Draw);
        assert_eq!(score, Score::new(0, 0, 1));
        assert_eq!(score.rounds(), 1);
    }

    #[test]
    fn test_record_format_matches_stored_layout() {
        let score = Score::new(3, 1, 2);
        let json = serde_json::to_value(score).unwrap();
        assert_eq!(json, serde_json::json!({"X": 3, "O": 1, "draws": 2}));
    }

    #[test]
    fn test_rounds_at_counter_limit() {
        let score: Score = serde_json::from_str(r#"{"X": 4294967295, "O": 1, "draws": 0}"#).unwrap();
        assert_eq!(score.rounds(), u64::from(u32::MAX) + 1);

        let mut full = Score::new(u32::MAX, u32::MAX, u32::MAX);
        full.record(&Outcome::Draw);
        assert_eq!(full.rounds(), 3 * u64::from(u32::MAX));
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let score: Score = serde_json::from_str(r#"{"X": 4}"#).unwrap();
        assert_eq!(score, Score::new(4, 0, 0));
        assert_eq!(score.wins(Mark::First), 4);
    }
}
