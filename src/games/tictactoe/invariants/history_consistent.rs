//! History consistency invariant: the board is exactly the move log replayed.

use super::super::{RoundState, Square};
use super::Invariant;

/// Invariant: every logged move's square holds its mark, and no other
/// square is occupied.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundState> for HistoryConsistentInvariant {
    fn holds(round: &RoundState) -> bool {
        let log = round.move_log();
        let board = round.board();

        log.len() == board.occupied()
            && log
                .iter()
                .all(|mov| board.get(mov.position) == Square::Occupied(mov.mark))
    }

    fn description() -> &'static str {
        "Board matches the move log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Timestamp;
    use crate::games::tictactoe::{Mark, Move, Position};

    #[test]
    fn test_empty_round_holds() {
        assert!(HistoryConsistentInvariant::holds(&RoundState::new()));
    }

    #[test]
    fn test_place_and_unplace_hold() {
        let mut round = RoundState::new();
        round.place(Move::new(Mark::First, Position::Center, Timestamp::ZERO));
        assert!(HistoryConsistentInvariant::holds(&round));
        round.unplace();
        assert!(HistoryConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_unlogged_square_violates() {
        let mut round = RoundState::new();
        round
            .board_mut()
            .set(Position::Center, Square::Occupied(Mark::First));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut round = RoundState::new();
        round.place(Move::new(Mark::First, Position::Center, Timestamp::ZERO));
        round
            .board_mut()
            .set(Position::Center, Square::Occupied(Mark::Second));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }
}
