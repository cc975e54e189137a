//! Headless client that plays horde sessions with an autopilot.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ SessionService (engine + session store)
//!   ├─→ ActionProvider (autopilot deciding each player's move)
//!   └─→ AutoTicker (optional background clock)
//! ```
//!
//! The client only talks to the game through [`runtime::SessionService`], the
//! same surface an HTTP layer would use.

mod builder;
pub mod config;
pub mod logging;

pub use builder::ClientBuilder;
pub use config::ClientConfig;

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use game_core::{GameState, GameStatus};
use runtime::{ActionProvider, SessionService};

/// Final outcome of a run, logged as JSON.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub session_id: String,
    pub status: GameStatus,
    pub tick: u64,
    pub wave: u32,
    pub rounds: u32,
    pub zombies_killed: usize,
    pub players: Vec<PlayerSummary>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    pub hp: u32,
    pub alive: bool,
}

impl RunSummary {
    fn from_state(state: &GameState, rounds: u32) -> Self {
        Self {
            session_id: state.session_id.clone(),
            status: state.status,
            tick: state.tick,
            wave: state.wave,
            rounds,
            zombies_killed: state.zombies.values().filter(|z| !z.alive).count(),
            players: state
                .players
                .values()
                .map(|p| PlayerSummary {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    hp: p.hp,
                    alive: p.alive,
                })
                .collect(),
        }
    }
}

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` assembles the service, provider and config
/// 2. `Client::run()` creates the session and joins the guest if requested
/// 3. Each round, every living player observes and acts through the provider
/// 4. The run ends on a terminal status or when the round budget is spent
pub struct Client {
    service: Arc<SessionService>,
    provider: Box<dyn ActionProvider>,
    config: ClientConfig,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Plays one session to completion (or until the round budget runs out).
    pub async fn run(self) -> Result<RunSummary> {
        let session_id = self.config.session_id_or_generate();
        let mut params = self.service.new_game(session_id.clone());
        params.player_name = self.config.player_name.clone();

        let (mut state, host) = self
            .service
            .create_session(params)
            .await
            .with_context(|| format!("failed to create session {session_id}"))?;

        let mut roster = vec![host.id];
        if self.config.with_guest {
            let (joined, guest) = self
                .service
                .join_session(&session_id, None, None)
                .await
                .context("failed to join guest player")?;
            state = joined;
            roster.push(guest.id);
        }

        let ticker = self.service.spawn_ticker(session_id.clone());

        let mut rounds = 0;
        while rounds < self.config.max_turns && !state.status.is_terminal() {
            rounds += 1;
            for player_id in &roster {
                let observation = self.service.observe(&session_id, player_id).await?;
                if observation.status.is_terminal() {
                    // Finished outside this loop, e.g. by the auto-ticker.
                    state = self.service.state(&session_id).await?;
                    break;
                }
                if !observation.you.player.alive {
                    continue;
                }

                let action = self
                    .provider
                    .provide_action(player_id, &observation)
                    .await?;
                debug!(player_id = %player_id, action = action.as_snake_case(), "autopilot chose");

                match self
                    .service
                    .apply_action(&session_id, player_id, &action)
                    .await
                {
                    Ok(next) => state = next,
                    // Auto-ticks can invalidate an observation between read and write.
                    Err(error) if error.as_rule().is_some() => {
                        warn!(
                            player_id = %player_id,
                            code = error.code(),
                            "action rejected: {error}"
                        );
                        state = self.service.state(&session_id).await?;
                    }
                    Err(error) => return Err(error.into()),
                }
            }
        }

        if let Some(ticker) = ticker {
            ticker.stop().await?;
            state = self.service.state(&session_id).await?;
        }

        if !state.status.is_terminal() {
            info!(rounds, "round budget exhausted");
        }

        Ok(RunSummary::from_state(&state, rounds))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use runtime::repository::Result as RepoResult;
    use runtime::{
        InMemorySessionRepo, RuntimeConfig, SessionRecord, SessionRepository, WaitActionProvider,
    };

    use super::*;

    /// Store that marks the session as lost on the `finish_on`-th read, as if a
    /// background tick had ended the game between two client calls.
    struct FinishingRepo {
        inner: InMemorySessionRepo,
        reads: AtomicUsize,
        finish_on: usize,
    }

    impl SessionRepository for FinishingRepo {
        fn get(&self, session_id: &str) -> RepoResult<Option<SessionRecord>> {
            let read = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
            if read == self.finish_on {
                if let Some(mut record) = self.inner.get(session_id)? {
                    record.state.status = GameStatus::Lost;
                    self.inner.put(session_id, record)?;
                }
            }
            self.inner.get(session_id)
        }

        fn put(&self, session_id: &str, record: SessionRecord) -> RepoResult<()> {
            self.inner.put(session_id, record)
        }

        fn delete(&self, session_id: &str) -> RepoResult<bool> {
            self.inner.delete(session_id)
        }

        fn exists(&self, session_id: &str) -> bool {
            self.inner.exists(session_id)
        }

        fn list_ids(&self) -> RepoResult<Vec<String>> {
            self.inner.list_ids()
        }
    }

    #[tokio::test]
    async fn run_stops_when_the_game_ends_between_turns() {
        // Reads: observe, apply, then the second round's observe sees the loss.
        let repo = Arc::new(FinishingRepo {
            inner: InMemorySessionRepo::new(),
            reads: AtomicUsize::new(0),
            finish_on: 3,
        });
        let service = Arc::new(SessionService::new(
            repo,
            RuntimeConfig {
                companion_enabled: false,
                ..RuntimeConfig::default()
            },
        ));
        let client = Client::builder()
            .service(service)
            .provider(WaitActionProvider)
            .config(ClientConfig {
                session_id: Some("stale".into()),
                max_turns: 50,
                ..ClientConfig::default()
            })
            .build()
            .unwrap();

        let summary = client.run().await.unwrap();
        assert_eq!(summary.status, GameStatus::Lost);
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.tick, 1);
    }
}
