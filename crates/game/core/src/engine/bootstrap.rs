//! Session creation and player joins.

use crate::config::GameConfig;
use crate::engine::waves;
use crate::error::RuleError;
use crate::state::{Companion, GameMode, GameState, Player};

/// Parameters for a fresh session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct NewGame {
    pub session_id: String,
    pub player_id: Option<String>,
    pub player_name: Option<String>,
    pub zombie_count: u32,
    pub companion_enabled: bool,
    pub mode: GameMode,
}

impl Default for NewGame {
    fn default() -> Self {
        Self {
            session_id: String::new(),
            player_id: None,
            player_name: None,
            zombie_count: 1,
            companion_enabled: false,
            mode: GameMode::Classic,
        }
    }
}

impl NewGame {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Self::default()
        }
    }

    pub fn with_player(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.player_id = Some(id.into());
        self.player_name = Some(name.into());
        self
    }

    pub fn with_zombies(mut self, count: u32) -> Self {
        self.zombie_count = count;
        self
    }

    pub fn with_companion(mut self, enabled: bool) -> Self {
        self.companion_enabled = enabled;
        self
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Builds the first snapshot of a session and returns it with the host player.
pub fn create_initial_game_state(params: &NewGame) -> Result<(GameState, Player), RuleError> {
    let count = params.zombie_count;
    if !(GameConfig::MIN_ZOMBIE_COUNT..=GameConfig::MAX_ZOMBIE_COUNT).contains(&count) {
        return Err(RuleError::InvalidZombieCount(count));
    }

    let mut state = GameState::new(params.session_id.clone(), params.mode);

    let player_id = non_blank(params.player_id.as_deref()).unwrap_or("player-1");
    let player_name = non_blank(params.player_name.as_deref()).unwrap_or("Player 1");
    let player = Player::new(player_id, player_name, GameConfig::PLAYER_START);
    state.players.insert(player.id.clone(), player.clone());

    let wave = state.wave;
    waves::spawn_wave(&mut state, wave, count as usize);

    if params.companion_enabled {
        let spot = GameConfig::COMPANION_SPAWN_POINTS
            .into_iter()
            .find(|position| state.can_enter(*position))
            .or_else(|| state.first_free_tile());
        if let Some(position) = spot {
            state.companion = Some(Companion::new(position));
        }
    }

    waves::evaluate_status(&mut state);
    Ok((state, player))
}

/// Adds a player to a copy of `state` and returns the new snapshot with that player.
///
/// Omitted ids are generated as `player-N` using the first free `N`.
pub fn add_player_to_state(
    state: &GameState,
    player_id: Option<&str>,
    player_name: Option<&str>,
) -> Result<(GameState, Player), RuleError> {
    if state.status.is_terminal() {
        return Err(RuleError::GameCompleted);
    }

    let (id, ordinal) = match non_blank(player_id) {
        Some(id) if state.players.contains_key(id) => {
            return Err(RuleError::PlayerExists(id.to_string()));
        }
        Some(id) => (id.to_string(), None),
        None => {
            let n = next_player_ordinal(state);
            (format!("player-{n}"), Some(n))
        }
    };
    let name = match (non_blank(player_name), ordinal) {
        (Some(name), _) => name.to_string(),
        (None, Some(n)) => format!("Player {n}"),
        (None, None) => id.clone(),
    };

    let position = state.first_free_tile().ok_or(RuleError::NoSpawn)?;

    let mut draft = state.clone();
    let player = Player::new(id, name, position);
    draft.players.insert(player.id.clone(), player.clone());
    Ok((draft, player))
}

fn next_player_ordinal(state: &GameState) -> usize {
    (1..)
        .find(|n| !state.players.contains_key(&format!("player-{n}")))
        .unwrap_or(state.players.len() + 1)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
