//! Authoritative game state representation.
//!
//! This module owns the snapshot aggregate and the read-only queries the
//! engine uses to reason about it (occupancy, nearest targets, head counts).
//! Runtime layers clone or query this state but mutate it exclusively through
//! the engine.
pub mod types;

use std::collections::BTreeMap;

use crate::env::GameMap;

pub use types::{
    CombatStats, Combatant, Companion, Emote, Player, Position, Zombie, ZombieKind, ZombieProfile,
};

/// Rule set governing what happens when a wave is cleared.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Clearing the zombies wins the game.
    #[default]
    Classic,
    /// Clearing the zombies spawns the next, larger wave.
    Endless,
}

/// Lifecycle of a session. `Won` and `Lost` are terminal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Which roster a defender lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefenderRole {
    Player,
    Companion,
}

/// Lightweight copy of a living defender used for AI targeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Defender {
    pub id: String,
    pub position: Position,
    pub role: DefenderRole,
}

/// Canonical snapshot of the deterministic game state.
///
/// Keyed rosters are ordered maps so iteration is always ascending by id,
/// which the AI relies on for deterministic turn order and tie-breaking.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameState {
    pub session_id: String,
    /// Advances by exactly one per resolved action or manual tick.
    pub tick: u64,
    pub wave: u32,
    pub mode: GameMode,
    pub status: GameStatus,
    pub map: GameMap,
    pub players: BTreeMap<String, Player>,
    pub zombies: BTreeMap<String, Zombie>,
    pub companion: Option<Companion>,

    /// Sequential zombie id allocator. Never reused, even for dead zombies.
    next_zombie_seq: u32,
}

impl GameState {
    /// Creates an empty snapshot on the standard map: no entities, tick 0, wave 1.
    pub fn new(session_id: impl Into<String>, mode: GameMode) -> Self {
        Self {
            session_id: session_id.into(),
            tick: 0,
            wave: 1,
            mode,
            status: GameStatus::Active,
            map: GameMap::standard(),
            players: BTreeMap::new(),
            zombies: BTreeMap::new(),
            companion: None,
            next_zombie_seq: 1,
        }
    }

    /// True when a living entity stands on `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.players
            .values()
            .any(|player| player.alive && player.position == position)
            || self
                .zombies
                .values()
                .any(|zombie| zombie.alive && zombie.position == position)
            || self
                .companion
                .as_ref()
                .is_some_and(|companion| companion.alive && companion.position == position)
    }

    /// Determines whether a tile can be entered considering terrain and occupancy.
    pub fn can_enter(&self, position: Position) -> bool {
        self.map.is_passable(position) && !self.is_occupied(position)
    }

    /// First enterable tile in row-major scan order.
    pub fn first_free_tile(&self) -> Option<Position> {
        self.map
            .grass_positions()
            .find(|position| !self.is_occupied(*position))
    }

    pub fn living_zombies(&self) -> impl Iterator<Item = &Zombie> {
        self.zombies.values().filter(|zombie| zombie.alive)
    }

    pub fn zombies_alive(&self) -> usize {
        self.living_zombies().count()
    }

    /// Living players plus the living companion, in roster order.
    pub fn living_defenders(&self) -> Vec<Defender> {
        let players = self
            .players
            .values()
            .filter(|player| player.alive)
            .map(|player| Defender {
                id: player.id.clone(),
                position: player.position,
                role: DefenderRole::Player,
            });
        let companion = self
            .companion
            .iter()
            .filter(|companion| companion.alive)
            .map(|companion| Defender {
                id: companion.id.clone(),
                position: companion.position,
                role: DefenderRole::Companion,
            });
        players.chain(companion).collect()
    }

    pub fn defenders_alive(&self) -> usize {
        let players = self.players.values().filter(|player| player.alive).count();
        let companion = self
            .companion
            .as_ref()
            .is_some_and(|companion| companion.alive);
        players + usize::from(companion)
    }

    /// Nearest living defender by Manhattan distance, ties broken by ascending id.
    pub fn nearest_defender(&self, from: Position) -> Option<Defender> {
        self.living_defenders()
            .into_iter()
            .min_by(|a, b| {
                (from.manhattan(a.position), &a.id).cmp(&(from.manhattan(b.position), &b.id))
            })
    }

    /// Nearest living zombie by Manhattan distance, ties broken by ascending id.
    pub fn nearest_zombie(&self, from: Position) -> Option<&Zombie> {
        self.living_zombies()
            .min_by(|a, b| {
                (from.manhattan(a.position), &a.id).cmp(&(from.manhattan(b.position), &b.id))
            })
    }

    /// Allocates a fresh zombie id. Ids are zero padded so lexical order
    /// matches spawn order.
    pub fn allocate_zombie_id(&mut self) -> String {
        let id = format!("zombie-{:04}", self.next_zombie_seq);
        self.next_zombie_seq += 1;
        id
    }

    /// Adds a zombie with a freshly allocated id and returns that id.
    ///
    /// Callers are responsible for choosing an enterable position.
    pub fn spawn_zombie(&mut self, kind: ZombieKind, position: Position) -> String {
        let id = self.allocate_zombie_id();
        self.zombies
            .insert(id.clone(), Zombie::new(id.clone(), kind, position));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_player() -> GameState {
        let mut state = GameState::new("s", GameMode::Classic);
        state.players.insert(
            "player-1".into(),
            Player::new("player-1", "One", Position::new(2, 2)),
        );
        state
    }

    #[test]
    fn dead_entities_do_not_occupy() {
        let mut state = state_with_player();
        let id = state.spawn_zombie(ZombieKind::Normal, Position::new(4, 4));
        assert!(state.is_occupied(Position::new(4, 4)));
        if let Some(zombie) = state.zombies.get_mut(&id) {
            zombie.alive = false;
        }
        assert!(!state.is_occupied(Position::new(4, 4)));
        assert!(state.can_enter(Position::new(4, 4)));
    }

    #[test]
    fn zombie_ids_sort_in_spawn_order() {
        let mut state = state_with_player();
        let ids: Vec<String> = (0..12)
            .map(|i| state.spawn_zombie(ZombieKind::Normal, Position::new(1 + i % 10, 6)))
            .collect();
        let sorted: Vec<String> = state.zombies.keys().cloned().collect();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn nearest_zombie_breaks_ties_by_id() {
        let mut state = state_with_player();
        let first = state.spawn_zombie(ZombieKind::Normal, Position::new(4, 2));
        let _second = state.spawn_zombie(ZombieKind::Normal, Position::new(2, 4));
        let nearest = state.nearest_zombie(Position::new(2, 2)).map(|z| z.id.clone());
        assert_eq!(nearest, Some(first));
    }

    #[test]
    fn defenders_include_living_companion() {
        let mut state = state_with_player();
        state.companion = Some(Companion::new(Position::new(3, 2)));
        assert_eq!(state.defenders_alive(), 2);
        let nearest = state.nearest_defender(Position::new(4, 2));
        assert_eq!(nearest.map(|d| d.role), Some(DefenderRole::Companion));

        if let Some(companion) = state.companion.as_mut() {
            companion.alive = false;
        }
        assert_eq!(state.defenders_alive(), 1);
    }

    #[test]
    fn first_free_tile_scans_row_major() {
        let mut state = state_with_player();
        assert_eq!(state.first_free_tile(), Some(Position::new(1, 1)));
        state.spawn_zombie(ZombieKind::Normal, Position::new(1, 1));
        assert_eq!(state.first_free_tile(), Some(Position::new(2, 1)));
    }
}
