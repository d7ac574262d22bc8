#![cfg(feature = "std")]

//! Per-game-identifier session table and the [`GameApi`] it serves.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info};

use crate::core::{state_vector_len, BoardError, GameSession, DEFAULT_COLS, DEFAULT_ROWS};
use crate::protocol::{
    domain::{ApiError, GameView, MoveOutcome, WireMove},
    GameApi,
};

/// A session shared between requests. Holding its lock serializes every
/// read-then-write on that game.
pub type SharedSession = Arc<tokio::sync::Mutex<GameSession>>;

/// Dimensions used for sessions created on first reference and on reset.
///
/// Only built through [`SessionConfig::new`] or `Default`, so the
/// dimensions always describe a representable board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    rows: usize,
    cols: usize,
}

impl SessionConfig {
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || state_vector_len(rows, cols).is_none() {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn fresh_session(&self) -> Result<GameSession, BoardError> {
        GameSession::with_dimensions(self.rows, self.cols)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Storage for live sessions, keyed by an opaque game identifier.
pub trait SessionStore: Send + Sync {
    /// The session for `game_id`, created with `init` on first reference.
    /// A failing `init` leaves the store unchanged.
    fn session(
        &self,
        game_id: &str,
        init: &dyn Fn() -> Result<GameSession, BoardError>,
    ) -> Result<SharedSession, BoardError>;
    /// Forget a session. Returns `true` if it existed.
    fn remove(&self, game_id: &str) -> bool;
    /// Number of live sessions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime session table.
#[derive(Default)]
pub struct InMemoryStore {
    sessions: Mutex<HashMap<String, SharedSession>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemoryStore {
    fn session(
        &self,
        game_id: &str,
        init: &dyn Fn() -> Result<GameSession, BoardError>,
    ) -> Result<SharedSession, BoardError> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = sessions.get(game_id) {
            return Ok(Arc::clone(existing));
        }
        debug!("creating session {:?}", game_id);
        let session = Arc::new(tokio::sync::Mutex::new(init()?));
        sessions.insert(game_id.to_string(), Arc::clone(&session));
        Ok(session)
    }

    fn remove(&self, game_id: &str) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(game_id)
            .is_some()
    }

    fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// The game service: session lookup plus turn handling for each request.
pub struct GameService<S: SessionStore = InMemoryStore> {
    store: S,
    config: SessionConfig,
}

impl GameService<InMemoryStore> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_store(InMemoryStore::new(), config)
    }
}

impl Default for GameService<InMemoryStore> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<S: SessionStore> GameService<S> {
    pub fn with_store(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn session(&self, game_id: &str) -> anyhow::Result<SharedSession> {
        let config = self.config;
        self.store
            .session(game_id, &move || config.fresh_session())
            .map_err(|e| ApiError::internal(format!("cannot create game {:?}: {}", game_id, e)).into())
    }
}

#[async_trait::async_trait]
impl<S: SessionStore> GameApi for GameService<S> {
    async fn get_state(&self, game_id: &str) -> anyhow::Result<GameView> {
        let session = self.session(game_id)?;
        let game = session.lock().await;
        Ok(GameView::from(&*game))
    }

    async fn submit_move(&self, game_id: &str, mv: WireMove) -> anyhow::Result<MoveOutcome> {
        let session = self.session(game_id)?;
        let mut game = session.lock().await;
        let Some(core_move) = mv.to_move() else {
            debug!("game {:?}: rejected move {:?}", game_id, mv);
            return Err(ApiError::illegal_move().into());
        };
        let player = game.current_player();
        let completed = game.submit(core_move).map_err(|e| {
            debug!("game {:?}: rejected move {}: {}", game_id, core_move, e);
            ApiError::from(e)
        })?;
        debug!(
            "game {:?}: player {} drew {} and closed {} box(es)",
            game_id,
            player.number(),
            core_move,
            completed.len()
        );
        Ok(MoveOutcome {
            completed_boxes: completed.into_iter().map(Into::into).collect(),
            state: GameView::from(&*game),
        })
    }

    async fn reset(&self, game_id: &str) -> anyhow::Result<()> {
        let fresh = self
            .config
            .fresh_session()
            .map_err(|e| ApiError::internal(format!("cannot reset game {:?}: {}", game_id, e)))?;
        let session = self.session(game_id)?;
        let mut game = session.lock().await;
        *game = fresh;
        info!(
            "game {:?}: reset to {}x{}",
            game_id, self.config.rows, self.config.cols
        );
        Ok(())
    }
}
