//! Terminal consistency invariant: `is_over` agrees with the rules.

use super::super::RoundState;
use super::super::rules::check_termination;
use super::Invariant;

/// Invariant: the round is over exactly when the board is terminal, and
/// the recorded winning line is the one the rules report.
pub struct TerminalConsistentInvariant;

impl Invariant<RoundState> for TerminalConsistentInvariant {
    fn holds(round: &RoundState) -> bool {
        let outcome = check_termination(round.board());
        round.is_over() == outcome.is_some()
            && round.winning_line() == outcome.and_then(|o| o.line())
    }

    fn description() -> &'static str {
        "Round end status matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Timestamp;
    use crate::games::tictactoe::{Mark, Move, Position, Square};

    #[test]
    fn test_live_round_holds() {
        assert!(TerminalConsistentInvariant::holds(&RoundState::new()));
    }

    #[test]
    fn test_won_round_holds() {
        let mut round = RoundState::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            let mark = round.current_turn();
            round.place(Move::new(mark, pos, Timestamp::ZERO));
        }
        assert!(round.is_over());
        assert!(TerminalConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_unnoticed_win_violates() {
        let mut round = RoundState::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            round.board_mut().set(pos, Square::Occupied(Mark::First));
        }
        assert!(!TerminalConsistentInvariant::holds(&round));
    }
}
