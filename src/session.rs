//! Game session management.
//!
//! A session pairs one engine with one UI context and routes its input
//! events (cell clicks, history clicks, restart, sort toggle) to engine
//! operations. `SessionManager` guards each session behind one lock, so
//! the truncate-then-append history mutation is never observed halfway
//! by a second caller.

use crate::engine::GameEngine;
use crate::position::Position;
use crate::view::{GameView, MoveDescriptor};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A game session: one engine plus its presentation flags.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The game state engine.
    pub engine: GameEngine,
    /// Sort order for the history listing. Presentation state owned by
    /// the session, never by the engine.
    pub ascending: bool,
}

impl GameSession {
    /// Creates a new game session.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            engine: GameEngine::new(),
            ascending: true,
        }
    }

    /// Routes a click on cell `index` (0-8) to the engine.
    ///
    /// Out-of-range indices and rejected moves produce no state change;
    /// both are reported to the caller as strings, never escalated.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn cell_clicked(&mut self, index: usize) -> Result<(), String> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of bounds");
            format!("Cell index {} out of bounds (must be 0-8)", index)
        })?;

        match self.engine.apply_move(pos) {
            Ok(()) => {
                info!(
                    position = %pos,
                    status = %self.engine.status_text(),
                    "Move completed"
                );
                Ok(())
            }
            Err(rejection) => {
                debug!(position = %pos, rejection = %rejection, "Move rejected");
                Err(rejection.to_string())
            }
        }
    }

    /// Routes a click on history entry `index` to the engine.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn history_entry_clicked(&mut self, index: usize) -> Result<(), String> {
        self.engine.jump_to(index).map_err(|rejection| {
            debug!(index, rejection = %rejection, "Jump rejected");
            rejection.to_string()
        })
    }

    /// Routes a restart click: board and history reset, score kept.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn restart_clicked(&mut self) {
        info!("Restarting board");
        self.engine.restart_board();
    }

    /// Routes a score-reset click: counters cleared, board kept.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn score_reset_clicked(&mut self) {
        info!("Resetting score");
        self.engine.reset_score();
    }

    /// Flips the history sort order.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn sort_toggled(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "History sort toggled");
    }

    /// Render snapshot for this session.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// History entries in the session's current sort order.
    pub fn move_descriptors(&self) -> Vec<MoveDescriptor> {
        self.engine.move_descriptors(self.ascending).collect()
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game session.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, String> {
        let mut sessions = self.lock_sessions();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err("Session already exists".to_string());
        }

        let session = GameSession::new(id.clone());
        sessions.insert(id.clone(), session);

        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Gets a snapshot of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.lock_sessions();
        let session = sessions.get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.lock_sessions();
        sessions.keys().cloned().collect()
    }

    /// Removes a session, returning true when one was removed.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> bool {
        let mut sessions = self.lock_sessions();
        let removed = sessions.remove(id).is_some();
        if removed {
            info!(session_id = id, "Removed session");
        }
        removed
    }

    /// Atomically routes a cell click into a session.
    ///
    /// The lock is held across the whole engine transition, so two
    /// callers of one session cannot interleave a truncate and an
    /// append.
    #[instrument(skip(self))]
    pub fn cell_clicked_atomic(&self, session_id: &str, index: usize) -> Result<(), String> {
        let mut sessions = self.lock_sessions();

        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| "Session not found".to_string())?;

        session.cell_clicked(index)
    }

    /// Atomically routes a history click into a session.
    #[instrument(skip(self))]
    pub fn history_entry_clicked_atomic(
        &self,
        session_id: &str,
        index: usize,
    ) -> Result<(), String> {
        let mut sessions = self.lock_sessions();

        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| "Session not found".to_string())?;

        session.history_entry_clicked(index)
    }

    fn lock_sessions(&self) -> std::sync::MutexGuard<'_, HashMap<SessionId, GameSession>> {
        // A poisoned lock means another caller panicked mid-transition;
        // the map itself is still structurally sound.
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
