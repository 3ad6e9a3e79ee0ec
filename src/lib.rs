//! Pure tic-tac-toe game state engine.
//!
//! # Architecture
//!
//! - **Rules**: total, pure win/draw evaluation over board snapshots
//! - **Engine**: history of snapshots, move pointer, turn derivation,
//!   score accumulation, and move application with silent rejection
//! - **View**: serializable render snapshots for external UI layers
//! - **Session**: one lock per session for multi-caller embeddings
//!
//! The engine stores no derived status: win, draw, and next-player are
//! always recomputed from the snapshot under the history pointer, which
//! is also what makes "jump to any prior move" free of bookkeeping.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Position};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(Position::Center)?;
//! engine.apply_move(Position::TopLeft)?;
//!
//! // Time travel: back to the empty board, X to move again.
//! engine.jump_to(0)?;
//! assert_eq!(engine.status_text(), "Next player: X");
//! # Ok::<(), tictactoe_engine::Rejected>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod outcome;
mod position;
mod session;
mod types;
mod view;

// Public rule and invariant layers
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{Board, Player, Score, Square};

// Crate-level exports - Positions and outcomes
pub use outcome::{Outcome, WinLine};
pub use position::Position;

// Crate-level exports - Engine
pub use engine::{GameEngine, Rejected};

// Crate-level exports - Render views
pub use view::{GameView, MoveDescriptor};

// Crate-level exports - Session management
pub use session::{GameSession, SessionId, SessionManager};
