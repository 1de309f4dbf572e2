//! First-class invariants for a tic-tac-toe round.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. They are checked in debug builds and tested independently.

pub mod alternating_turn;
pub mod history_consistent;
pub mod terminal_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns the description of every invariant that failed.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(failures: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = failures
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

/// Every round invariant as a composable set.
pub type RoundInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    TerminalConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Timestamp;
    use crate::games::tictactoe::{Mark, Move, Position, RoundState, Square};

    fn play(round: &mut RoundState, positions: &[Position]) {
        for pos in positions {
            let mark = round.current_turn();
            round.place(Move::new(mark, *pos, Timestamp::ZERO));
        }
    }

    #[test]
    fn test_invariant_set_holds_for_empty_round() {
        assert!(RoundInvariants::check_all(&RoundState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut round = RoundState::new();
        play(
            &mut round,
            &[Position::TopLeft, Position::Center, Position::TopRight],
        );
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut round = RoundState::new();
        play(&mut round, &[Position::Center]);
        round
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Mark::Second));

        let violations = RoundInvariants::check_all(&round).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryConsistentInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&RoundState::new()).is_ok());
    }
}
