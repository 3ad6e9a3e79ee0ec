//! Renderer-facing projections of engine state.
//!
//! Rendering is an external collaborator: the engine never draws, it
//! only hands out serializable snapshots. A renderer rebuilds its whole
//! display from one `GameView` plus the move descriptors.

use crate::outcome::WinLine;
use crate::types::{Board, Score};
use serde::{Deserialize, Serialize};

/// Complete render snapshot of a game at its current history position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The active board snapshot.
    pub board: Board,
    /// Status message derived from the active snapshot.
    pub status: String,
    /// Squares to highlight, present only when the game is won.
    pub winning_line: Option<WinLine>,
    /// True when the active snapshot is a draw.
    pub is_draw: bool,
    /// Session win counters.
    pub score: Score,
}

/// One labeled entry of the move history.
///
/// Descriptors carry data only; whether an entry renders as a link or
/// as plain text is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// Index of the history entry this descriptor points at.
    pub index: usize,
    /// Display label ("game start" or "move #k").
    pub label: String,
    /// True when this entry is the one currently shown.
    pub is_current: bool,
}

impl MoveDescriptor {
    /// Creates the descriptor for history entry `index`.
    pub fn new(index: usize, is_current: bool) -> Self {
        let label = if index == 0 {
            "game start".to_string()
        } else {
            format!("move #{}", index)
        };
        Self {
            index,
            label,
            is_current,
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_labels() {
        assert_eq!(MoveDescriptor::new(0, true).label, "game start");
        assert_eq!(MoveDescriptor::new(3, false).label, "move #3");
    }
}
