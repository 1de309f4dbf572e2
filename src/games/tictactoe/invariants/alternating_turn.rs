//! Alternating turn invariant: marks alternate First, Second, First, ...

use super::super::{Mark, RoundState};
use super::Invariant;

/// Invariant: the log alternates starting with First, and while the
/// round is live the mark to move follows from the log length.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundState> for AlternatingTurnInvariant {
    fn holds(round: &RoundState) -> bool {
        let log = round.move_log();

        if log.first().is_some_and(|mov| mov.mark != Mark::First) {
            return false;
        }

        if log.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        if round.is_over() {
            // The mover of the final move keeps the turn.
            return log.last().map(|mov| mov.mark) == Some(round.current_turn());
        }

        let expected_next = if log.len() % 2 == 0 {
            Mark::First
        } else {
            Mark::Second
        };
        round.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (First, Second, First, ...)"
    }
}
