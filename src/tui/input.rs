//! Keyboard mapping for the play screen.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the play screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    /// Play the given cell.
    Place(Position),
    /// Play the cell under the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    Cursor(KeyCode),
    /// Take back the last move.
    Undo,
    /// Clear the board, keep players and score.
    ResetRound,
    /// Return to player setup.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Maps a key on the play screen to an action.
pub fn play_action(key: KeyCode) -> Option<PlayAction> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_cell_number(&c.to_string()).map(PlayAction::Place)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(PlayAction::PlaceAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(PlayAction::Cursor(key))
        }
        KeyCode::Char('u') | KeyCode::Backspace => Some(PlayAction::Undo),
        KeyCode::Char('r') => Some(PlayAction::ResetRound),
        KeyCode::Char('n') => Some(PlayAction::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(PlayAction::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
