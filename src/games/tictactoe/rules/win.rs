//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Mark, Position};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new(Position::TopLeft, Position::TopCenter, Position::TopRight),
    Line::new(Position::MiddleLeft, Position::Center, Position::MiddleRight),
    Line::new(
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ),
    // Columns
    Line::new(Position::TopLeft, Position::MiddleLeft, Position::BottomLeft),
    Line::new(Position::TopCenter, Position::Center, Position::BottomCenter),
    Line::new(Position::TopRight, Position::MiddleRight, Position::BottomRight),
    // Diagonals
    Line::new(Position::TopLeft, Position::Center, Position::BottomRight),
    Line::new(Position::TopRight, Position::Center, Position::BottomLeft),
];

/// Finds the first uniformly marked line in scan order.
///
/// Returns the owning mark together with the line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}
