//! Pointer bounds invariant: the history pointer always addresses a stored snapshot.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: `current_move` indexes into history.
///
/// The pointer may trail the end of history after a jump, but it can
/// never pass it: `0 <= current_move < history.len()`.
pub struct PointerInBoundsInvariant;

impl Invariant<GameEngine> for PointerInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_move() < engine.history().len()
    }

    fn description() -> &'static str {
        "History pointer addresses a stored snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_fresh_engine_holds() {
        let engine = GameEngine::new();
        assert!(PointerInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_jump_behind_end() {
        let mut engine = GameEngine::new();
        for index in [4, 0, 1] {
            let pos = Position::from_index(index).expect("in range");
            engine.apply_move(pos).expect("valid move");
        }

        engine.jump_to(1).expect("valid jump");
        assert!(PointerInBoundsInvariant::holds(&engine));
        assert!(engine.current_move() < engine.history().len() - 1);
    }

    #[test]
    fn test_holds_after_restart() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center).expect("valid move");
        engine.restart_board();
        assert!(PointerInBoundsInvariant::holds(&engine));
    }
}
