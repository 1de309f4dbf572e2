//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! board storage so the engine and the invariants share one definition
//! of termination.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates whether the board ends the round.
///
/// A completed line wins, taking the first in [`LINES`] order. Failing
/// that, a full board is a draw. Otherwise the round continues and
/// `None` is returned.
#[instrument(skip(board))]
pub fn check_termination(board: &Board) -> Option<Outcome> {
    if let Some((mark, line)) = check_winner(board) {
        return Some(Outcome::Winner { mark, line });
    }
    is_full(board).then_some(Outcome::Draw)
}
