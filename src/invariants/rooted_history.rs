//! Rooted history invariant: history starts at the empty board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Board;

/// Invariant: History is never empty and entry 0 is the empty board.
///
/// Every navigation target, including "game start", must exist.
pub struct RootedHistoryInvariant;

impl Invariant<GameEngine> for RootedHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .first()
            .is_some_and(|root| *root == Board::new())
    }

    fn description() -> &'static str {
        "History is non-empty and rooted at the empty board"
    }
}
