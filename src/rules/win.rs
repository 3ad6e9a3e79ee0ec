//! Win detection logic for tic-tac-toe.

use crate::outcome::WinLine;
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines, in the fixed order they are checked:
/// rows, then columns, then diagonals.
pub const LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a completed line on the board.
///
/// Returns the line together with the player holding it, `None`
/// otherwise. Lines are scanned in the fixed `LINES` order, so a board
/// holding more than one completed line (unreachable under engine play)
/// deterministically reports the first.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(WinLine, Player)> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((line, player));
            }
        }
    }

    None
}
