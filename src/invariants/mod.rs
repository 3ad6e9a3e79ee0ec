//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold across every
//! engine transition. They are testable independently and serve as
//! documentation of the engine's guarantees.

use crate::engine::GameEngine;

pub mod alternating_marks;
pub mod pointer_in_bounds;
pub mod rooted_history;

pub use alternating_marks::AlternatingMarksInvariant;
pub use pointer_in_bounds::PointerInBoundsInvariant;
pub use rooted_history::RootedHistoryInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    PointerInBoundsInvariant,
    RootedHistoryInvariant,
    AlternatingMarksInvariant,
);

/// Asserts that all engine invariants hold (debug builds only).
pub fn assert_invariants(engine: &GameEngine) {
    #[cfg(debug_assertions)]
    if let Err(violations) = EngineInvariants::check_all(engine) {
        panic!("Engine invariant violated: {:?}", violations);
    }
    let _ = engine;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_invariant_set_holds_for_fresh_engine() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for index in [4, 0, 1, 7] {
            let pos = Position::from_index(index).expect("in range");
            engine.apply_move(pos).expect("valid move");
        }

        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_jump_and_branch() {
        let mut engine = GameEngine::new();
        for index in [4, 0, 1] {
            let pos = Position::from_index(index).expect("in range");
            engine.apply_move(pos).expect("valid move");
        }

        engine.jump_to(1).expect("valid jump");
        engine.apply_move(Position::BottomRight).expect("valid move");

        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();

        type TwoInvariants = (PointerInBoundsInvariant, RootedHistoryInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
