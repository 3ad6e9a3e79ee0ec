//! Alternating marks invariant: snapshots grow one mark at a time, X first.

use super::Invariant;
use crate::engine::GameEngine;
use crate::position::Position;
use crate::types::{Player, Square};

/// Invariant: Consecutive snapshots differ by exactly one new mark.
///
/// Snapshot `k + 1` must equal snapshot `k` everywhere except one
/// square that went from empty to occupied, and the mark placed on the
/// k-th transition must follow turn parity: X, O, X, O, ...
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        for (k, pair) in engine.history().windows(2).enumerate() {
            let (before, after) = (&pair[0], &pair[1]);

            let mut placed = Vec::new();
            for pos in Position::ALL {
                match (before.get(pos), after.get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(player)) => placed.push(player),
                    _ => return false,
                }
            }

            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            if placed != [expected] {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ by one mark in turn-parity order"
    }
}
