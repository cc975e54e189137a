//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration for one autopilot run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Session id to create. Generated from the clock when unset.
    pub session_id: Option<String>,
    pub player_name: Option<String>,
    /// Join a second autopiloted player after the host.
    pub with_guest: bool,
    /// Upper bound on autopilot rounds before giving up.
    pub max_turns: u32,
    /// Also write logs to `<dir>/<session>/client.log`.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            player_name: None,
            with_guest: false,
            max_turns: 200,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HORDE_SESSION_ID` - Session identifier (default: `horde-<unix seconds>`)
    /// - `HORDE_PLAYER_NAME` - Display name of the host player (default: `Player 1`)
    /// - `HORDE_GUEST` - Join a second player (default: false)
    /// - `HORDE_MAX_TURNS` - Autopilot round budget (default: 200)
    /// - `HORDE_LOG_DIR` - Directory for log files (default: stderr only)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.session_id = env::var("HORDE_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());
        config.player_name = env::var("HORDE_PLAYER_NAME").ok();

        if let Some(enable) = read_env::<bool>("HORDE_GUEST") {
            config.with_guest = enable;
        } else if env::var("HORDE_GUEST").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.with_guest = true;
        }

        if let Some(turns) = read_env::<u32>("HORDE_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }

        config.log_dir = env::var("HORDE_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// The configured session id, or one derived from the current time.
    pub fn session_id_or_generate(&self) -> String {
        self.session_id
            .clone()
            .unwrap_or_else(|| format!("horde-{}", chrono::Utc::now().timestamp()))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
