//! Session directory on top of the deterministic engine.
//!
//! [`SessionService`] owns the repository and a per-session lock table. Every
//! mutation takes the session's lock, loads the stored snapshot, runs the
//! engine on it and writes the result back only on success. Calls against
//! different sessions never contend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use game_core::{
    Action, GameState, NewGame, Observation, Player, RuleError, add_player_to_state,
    apply_action, create_initial_game_state, tick_game, to_observation,
};

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::repository::{InMemorySessionRepo, SessionRecord, SessionRepository};
use crate::workers::AutoTicker;

/// Async façade over the engine that serializes mutations per session id.
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    config: RuntimeConfig,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>, config: RuntimeConfig) -> Self {
        Self {
            repository,
            locks: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Service backed by a fresh [`InMemorySessionRepo`].
    pub fn in_memory(config: RuntimeConfig) -> Self {
        Self::new(Arc::new(InMemorySessionRepo::new()), config)
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Session parameters seeded with the configured defaults.
    pub fn new_game(&self, session_id: impl Into<String>) -> NewGame {
        self.config.new_game(session_id)
    }

    /// Returns the lock guarding `session_id`, creating it on first use.
    async fn session_lock(&self, session_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drops the table entry for `session_id` once nobody else holds or awaits
    /// it and no session is stored under that id.
    ///
    /// Clones are only handed out under the table lock, so a strong count of
    /// two (the table and `lock`) means there are no waiters.
    async fn release_lock(&self, session_id: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;
        let idle = locks
            .get(session_id)
            .is_some_and(|held| Arc::ptr_eq(held, &lock) && Arc::strong_count(&lock) == 2);
        if idle && !self.repository.exists(session_id) {
            locks.remove(session_id);
        }
    }

    /// Runs `body` while holding the session lock.
    async fn with_lock<T>(
        &self,
        session_id: &str,
        body: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        let lock = self.session_lock(session_id).await;
        let result = {
            let _guard = lock.lock().await;
            body()
        };
        self.release_lock(session_id, lock).await;
        result
    }

    fn load(&self, session_id: &str) -> Result<SessionRecord> {
        self.repository
            .get(session_id)?
            .ok_or_else(|| RuntimeError::SessionNotFound(session_id.to_string()))
    }

    /// Creates a session. Fails with `SESSION_EXISTS` if the id is taken.
    pub async fn create_session(&self, params: NewGame) -> Result<(GameState, Player)> {
        let session_id = params.session_id.clone();
        let (state, player) = self
            .with_lock(&session_id, || {
                if self.repository.exists(&params.session_id) {
                    return Err(RuntimeError::SessionExists(params.session_id.clone()));
                }
                let (state, player) = create_initial_game_state(&params)?;
                self.repository
                    .put(&params.session_id, SessionRecord::new(state.clone()))?;
                Ok((state, player))
            })
            .await?;

        info!(
            session_id = %state.session_id,
            mode = %state.mode,
            zombies = state.zombies_alive(),
            companion = state.companion.is_some(),
            host = %player.id,
            "session created"
        );
        Ok((state, player))
    }

    /// Adds a player to an existing session.
    pub async fn join_session(
        &self,
        session_id: &str,
        player_id: Option<&str>,
        player_name: Option<&str>,
    ) -> Result<(GameState, Player)> {
        let (state, player) = self
            .with_lock(session_id, || {
                let mut record = self.load(session_id)?;
                let (state, player) = add_player_to_state(&record.state, player_id, player_name)
                    .inspect_err(|error| {
                        warn!(session_id, code = error.code(), "join rejected: {error}");
                    })?;
                record.replace_state(state.clone());
                self.repository.put(session_id, record)?;
                Ok((state, player))
            })
            .await?;

        info!(session_id, player_id = %player.id, position = %player.position, "player joined");
        Ok((state, player))
    }

    /// Applies a player action and returns the new snapshot.
    pub async fn apply_action(
        &self,
        session_id: &str,
        player_id: &str,
        action: &Action,
    ) -> Result<GameState> {
        self.mutate(session_id, action.as_snake_case(), |state| {
            apply_action(state, player_id, action)
        })
        .await
    }

    /// Parses a tagged JSON action (`{"type":"move","direction":"up"}`) and applies it.
    pub async fn apply_action_json(
        &self,
        session_id: &str,
        player_id: &str,
        payload: &str,
    ) -> Result<GameState> {
        let action: Action = serde_json::from_str(payload).map_err(|error| {
            warn!(session_id, player_id, "unparseable action: {error}");
            RuntimeError::InvalidAction(error.to_string())
        })?;
        self.apply_action(session_id, player_id, &action).await
    }

    /// Advances the session by one tick without a player action.
    pub async fn tick(&self, session_id: &str) -> Result<GameState> {
        self.mutate(session_id, "tick", |state| Ok(tick_game(state)))
            .await
    }

    /// Player-centric view of the current snapshot.
    pub async fn observe(&self, session_id: &str, player_id: &str) -> Result<Observation> {
        let record = self.load(session_id)?;
        Ok(to_observation(&record.state, player_id)?)
    }

    /// Current snapshot of a session.
    pub async fn state(&self, session_id: &str) -> Result<GameState> {
        Ok(self.load(session_id)?.state)
    }

    /// Stored record including timestamps.
    pub async fn record(&self, session_id: &str) -> Result<SessionRecord> {
        self.load(session_id)
    }

    pub async fn session_ids(&self) -> Result<Vec<String>> {
        Ok(self.repository.list_ids()?)
    }

    /// Removes a session. Its lock entry goes away once no caller is waiting on it.
    pub async fn end_session(&self, session_id: &str) -> Result<()> {
        self.with_lock(session_id, || {
            if !self.repository.delete(session_id)? {
                return Err(RuntimeError::SessionNotFound(session_id.to_string()));
            }
            Ok(())
        })
        .await?;

        info!(session_id, "session ended");
        Ok(())
    }

    /// Starts the auto-tick worker for `session_id` when configured.
    pub fn spawn_ticker(self: &Arc<Self>, session_id: impl Into<String>) -> Option<AutoTicker> {
        let period = self.config.auto_tick?;
        Some(AutoTicker::spawn(Arc::clone(self), session_id, period))
    }

    /// Loads, transforms and stores a snapshot under the session lock.
    async fn mutate<F>(&self, session_id: &str, label: &str, step: F) -> Result<GameState>
    where
        F: FnOnce(&GameState) -> std::result::Result<GameState, RuleError>,
    {
        self.with_lock(session_id, || {
            let mut record = self.load(session_id)?;
            let previous = record.state.status;
            let next = step(&record.state).inspect_err(|error| {
                warn!(
                    session_id,
                    action = label,
                    code = error.code(),
                    "action rejected: {error}"
                );
            })?;

            debug!(
                session_id,
                action = label,
                tick = next.tick,
                zombies = next.zombies_alive(),
                defenders = next.defenders_alive(),
                "snapshot advanced"
            );
            if next.status != previous {
                info!(
                    session_id,
                    status = %next.status,
                    wave = next.wave,
                    tick = next.tick,
                    "status changed"
                );
            } else if next.wave != record.state.wave {
                info!(session_id, wave = next.wave, "wave cleared");
            }

            record.replace_state(next.clone());
            self.repository.put(session_id, record)?;
            Ok(next)
        })
        .await
    }
}
