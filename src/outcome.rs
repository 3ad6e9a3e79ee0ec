//! Outcome of evaluating a board snapshot.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// An ordered triple of positions forming one of the 8 winning lines.
pub type WinLine = [Position; 3];

/// Result of evaluating a board snapshot.
///
/// Evaluation is total: every well-formed board maps to exactly one
/// of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// The completed line, for highlighting.
        line: WinLine,
        /// The player holding all three squares.
        player: Player,
    },
    /// Board is full with no winner.
    Draw,
    /// At least one square is still open.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true if the board has reached a terminal state.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_accessors() {
        let outcome = Outcome::Winner {
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
            player: Player::O,
        };
        assert_eq!(outcome.winner(), Some(Player::O));
        assert!(outcome.winning_line().is_some());
        assert!(outcome.is_over());
        assert!(!outcome.is_draw());
    }

    #[test]
    fn test_in_progress_is_not_over() {
        assert!(!Outcome::InProgress.is_over());
        assert_eq!(Outcome::InProgress.winner(), None);
        assert_eq!(Outcome::Draw.winning_line(), None);
    }
}
