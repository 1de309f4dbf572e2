//! State of a single round, from empty board to win or draw.

use super::rules::check_termination;
use super::{Board, Line, Mark, Move, Outcome, Square};
use serde::Serialize;

/// Board, turn, move log and terminal status of the current round.
///
/// Mutated only through the engine; everything outside the crate sees a
/// read-only view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundState {
    /// The board.
    board: Board,
    /// Mark to move next.
    current_turn: Mark,
    /// Moves in play order.
    move_log: Vec<Move>,
    /// Whether the round has ended.
    is_over: bool,
    /// The completed line when the round was won.
    winning_line: Option<Line>,
}

impl RoundState {
    /// Empty board, First to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::First,
            move_log: Vec::with_capacity(9),
            is_over: false,
            winning_line: None,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next. After a terminal move this is the mark that moved last.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Moves in play order.
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The completed line when the round was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Undo is offered while moves exist and the round is live.
    pub fn can_undo(&self) -> bool {
        !self.move_log.is_empty() && !self.is_over
    }

    /// The most recent move.
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Places the current mark, records it, and evaluates termination.
    ///
    /// The caller has already validated the move.
    pub(super) fn place(&mut self, mov: Move) -> Option<Outcome> {
        self.board.set(mov.position, Square::Occupied(mov.mark));
        self.move_log.push(mov);

        let outcome = check_termination(&self.board);
        match outcome {
            Some(outcome) => {
                self.is_over = true;
                self.winning_line = outcome.line();
            }
            None => self.current_turn = mov.mark.other(),
        }
        outcome
    }

    /// Removes the last move and hands the turn back to its mark.
    pub(super) fn unplace(&mut self) -> Option<Move> {
        let mov = self.move_log.pop()?;
        self.board.set(mov.position, Square::Empty);
        self.current_turn = mov.mark;
        Some(mov)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current_turn(&mut self, mark: Mark) {
        self.current_turn = mark;
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
