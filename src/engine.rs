//! The authoritative turn-based state machine.
//!
//! `GameEngine` owns the ordered history of board snapshots, the
//! current position pointer, and the session score. Per-board status is
//! always derived through `rules::evaluate` on the active snapshot; it
//! is never stored, so a stale status cannot diverge from the board.

use crate::invariants;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Score, Square};
use crate::view::{GameView, MoveDescriptor};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A rejected input event.
///
/// Rejections are silent and local: the engine state is unchanged and
/// the caller decides whether to surface any feedback. Clicking a
/// filled cell or clicking after game over is expected traffic, not a
/// fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejected {
    /// The active snapshot is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The target square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The requested history entry does not exist.
    #[display("No move #{} in history", _0)]
    NoSuchMove(usize),
}

impl std::error::Error for Rejected {}

/// Tic-tac-toe game state engine.
///
/// History is append-only except for the truncation performed when a
/// move is played from a past position: entries after the pointer are
/// discarded and the new move becomes the tail (no branching).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    /// Board snapshots; entry 0 is always the empty board.
    history: Vec<Board>,
    /// Index of the snapshot currently shown, `0..history.len()`.
    current_move: usize,
    /// Session win counters, untouched by board restarts.
    score: Score,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl GameEngine {
    /// Creates a fresh engine: one empty snapshot, zeroed score.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            score: Score::new(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Derived reads
// ─────────────────────────────────────────────────────────────

impl GameEngine {
    /// The board snapshot at the current history position.
    pub fn board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// The player whose turn it is at the current position.
    ///
    /// Fully determined by pointer parity: X moves from even indices.
    pub fn to_move(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Evaluates the active snapshot.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Session win counters.
    pub fn score(&self) -> Score {
        self.score
    }

    /// All stored snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Positions still open on the active snapshot.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.board())
    }

    /// Status message for the active snapshot.
    ///
    /// This is the single derivation path for status text; callers must
    /// not compose their own from board internals.
    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::Winner { player, .. } => format!("Game over. Player {} wins!", player),
            Outcome::Draw => "Game over. Draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Labeled history entries, one per snapshot.
    ///
    /// The sequence is recomputed from history on every call; it is a
    /// view, not stored state. `ascending = false` reverses it.
    pub fn move_descriptors(&self, ascending: bool) -> impl Iterator<Item = MoveDescriptor> {
        let current = self.current_move;
        let range = 0..self.history.len();

        let indices: Box<dyn Iterator<Item = usize>> = if ascending {
            Box::new(range)
        } else {
            Box::new(range.rev())
        };

        indices.map(move |index| MoveDescriptor::new(index, index == current))
    }

    /// Complete render snapshot for the current position.
    pub fn view(&self) -> GameView {
        let outcome = self.outcome();
        GameView {
            board: self.board().clone(),
            status: self.status_text(),
            winning_line: outcome.winning_line(),
            is_draw: outcome.is_draw(),
            score: self.score,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  State transitions
// ─────────────────────────────────────────────────────────────

impl GameEngine {
    /// Plays the current player's mark at `pos`.
    ///
    /// On acceptance the history is truncated to the current position,
    /// the new snapshot appended, and the pointer advanced; a winning
    /// snapshot credits the winner's counter exactly once. Any future
    /// entries from an earlier jump are discarded.
    ///
    /// # Errors
    ///
    /// Returns `Rejected::GameOver` when the active snapshot already
    /// has an outcome, `Rejected::SquareOccupied` when the target
    /// square is filled. State is unchanged on rejection.
    #[instrument(skip(self), fields(position = ?pos, to_move = ?self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), Rejected> {
        if self.outcome().is_over() {
            return Err(Rejected::GameOver);
        }

        if !self.board().is_empty(pos) {
            return Err(Rejected::SquareOccupied(pos));
        }

        let mark = self.to_move();
        let next = self.board().with(pos, Square::Occupied(mark));

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        if let Some(winner) = self.outcome().winner() {
            self.score.record_win(winner);
            debug!(winner = %winner, "Line completed, score updated");
        }

        invariants::assert_invariants(self);

        Ok(())
    }

    /// Moves the history pointer to entry `index`.
    ///
    /// History and score are untouched; jumping to the current index is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Rejected::NoSuchMove` when `index` is out of range.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), Rejected> {
        if index >= self.history.len() {
            return Err(Rejected::NoSuchMove(index));
        }

        self.current_move = index;
        invariants::assert_invariants(self);

        Ok(())
    }

    /// Resets the board: history back to the single empty snapshot,
    /// pointer to 0. The score is preserved; see `reset_score`.
    #[instrument(skip(self))]
    pub fn restart_board(&mut self) {
        self.history = vec![Board::new()];
        self.current_move = 0;
        invariants::assert_invariants(self);
    }

    /// Clears both win counters. The board and history are untouched.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.score.reset();
    }
}
