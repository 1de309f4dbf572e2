//! Terminal results of a round.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Three board positions forming a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    pub(crate) const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The three positions in ascending index order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner { mark, .. } => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { mark, line } => write!(f, "{} wins on {:?}", mark, line.indices()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
