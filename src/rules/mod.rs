//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine derives status on demand instead of storing it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board snapshot.
///
/// Total and deterministic: a completed line yields `Winner`, a full
/// board without one yields `Draw`, anything else is `InProgress`.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((line, player)) = win::check_winner(board) {
        return Outcome::Winner { line, player };
    }

    if draw::is_full(board) {
        return Outcome::Draw;
    }

    Outcome::InProgress
}
