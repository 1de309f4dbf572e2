//! Board positions for tic-tac-toe moves.

use super::action::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
///
/// Index `i` maps to row `i / 3` and column `i % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Move-history coordinate, 1-based: `R1C1` .. `R3C3`.
    pub fn coordinate(self) -> String {
        format!("R{}C{}", self.row() + 1, self.col() + 1)
    }

    /// Parses a 1-based cell number as typed by a player (`"1"`..`"9"`).
    #[instrument]
    pub fn from_cell_number(s: &str) -> Option<Position> {
        let num = s.trim().parse::<usize>().ok()?;
        num.checked_sub(1).and_then(Self::from_index)
    }
}

impl TryFrom<i64> for Position {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Self::from_index)
            .ok_or(EngineError::OutOfBounds(value))
    }
}

impl TryFrom<u8> for Position {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos as u8
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_and_col() {
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
        assert_eq!(Position::BottomLeft.coordinate(), "R3C1");
        assert_eq!(Position::TopLeft.coordinate(), "R1C1");
    }

    #[test]
    fn test_signed_conversion_rejects_out_of_range() {
        assert_eq!(Position::try_from(4_i64), Ok(Position::Center));
        assert_eq!(Position::try_from(9_i64), Err(EngineError::OutOfBounds(9)));
        assert_eq!(Position::try_from(-1_i64), Err(EngineError::OutOfBounds(-1)));
    }

    #[test]
    fn test_cell_number_parsing() {
        assert_eq!(Position::from_cell_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_cell_number(" 9 "), Some(Position::BottomRight));
        assert_eq!(Position::from_cell_number("0"), None);
        assert_eq!(Position::from_cell_number("10"), None);
        assert_eq!(Position::from_cell_number("x"), None);
    }
}
