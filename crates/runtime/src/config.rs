//! Runtime configuration structures and loaders.
use std::env;
use std::time::Duration;

use game_core::{GameConfig, GameMode, NewGame};

/// Defaults applied to every session the runtime creates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub default_mode: GameMode,
    pub zombie_count: u32,
    pub companion_enabled: bool,
    /// Period of the auto-tick worker. `None` disables it.
    pub auto_tick: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            default_mode: GameMode::Classic,
            zombie_count: 4,
            companion_enabled: true,
            auto_tick: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HORDE_DEFAULT_MODE` - `classic` or `endless` (default: classic)
    /// - `HORDE_ZOMBIE_COUNT` - Zombies in the first wave (default: 4, clamped to 1..=32)
    /// - `HORDE_COMPANION` - Spawn the companion (default: true)
    /// - `HORDE_AUTO_TICK_MS` - Auto-tick period in milliseconds (default: disabled)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(mode) = read_env::<GameMode>("HORDE_DEFAULT_MODE") {
            config.default_mode = mode;
        }

        if let Some(count) = read_env::<u32>("HORDE_ZOMBIE_COUNT") {
            config.zombie_count =
                count.clamp(GameConfig::MIN_ZOMBIE_COUNT, GameConfig::MAX_ZOMBIE_COUNT);
        }

        if let Some(enabled) = read_env::<bool>("HORDE_COMPANION") {
            config.companion_enabled = enabled;
        }

        config.auto_tick = read_env::<u64>("HORDE_AUTO_TICK_MS")
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        config
    }

    /// Session parameters seeded with these defaults.
    pub fn new_game(&self, session_id: impl Into<String>) -> NewGame {
        NewGame::new(session_id)
            .with_zombies(self.zombie_count)
            .with_companion(self.companion_enabled)
            .with_mode(self.default_mode)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
