//! Player-centric read views of a snapshot.

use crate::env::MapDimensions;
use crate::error::RuleError;
use crate::state::{
    Companion, GameMode, GameState, GameStatus, Player, Position, Zombie, ZombieKind,
};

/// The requesting player plus derived readiness.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SelfView {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub player: Player,
    /// Ticks until the next attack is allowed; 0 means ready now.
    pub attack_ready_in: u64,
}

/// Closest living zombie relative to the requesting player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ThreatView {
    pub id: String,
    pub kind: ZombieKind,
    pub position: Position,
    pub distance: u32,
    pub dx: i32,
    pub dy: i32,
    pub hp: u32,
}

/// Read-only projection handed to clients and autopilots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Observation {
    pub session_id: String,
    pub tick: u64,
    pub wave: u32,
    pub mode: GameMode,
    pub status: GameStatus,
    pub map: MapDimensions,
    pub you: SelfView,
    pub nearest_zombie: Option<ThreatView>,
    pub players: Vec<Player>,
    pub zombies: Vec<Zombie>,
    pub companion: Option<Companion>,
}

/// Projects `state` from the point of view of `player_id`.
pub fn to_observation(state: &GameState, player_id: &str) -> Result<Observation, RuleError> {
    let player = state
        .players
        .get(player_id)
        .ok_or_else(|| RuleError::PlayerNotFound(player_id.to_string()))?;

    let nearest_zombie = state.nearest_zombie(player.position).map(|zombie| ThreatView {
        id: zombie.id.clone(),
        kind: zombie.kind,
        position: zombie.position,
        distance: player.position.manhattan(zombie.position),
        dx: zombie.position.x - player.position.x,
        dy: zombie.position.y - player.position.y,
        hp: zombie.hp,
    });

    Ok(Observation {
        session_id: state.session_id.clone(),
        tick: state.tick,
        wave: state.wave,
        mode: state.mode,
        status: state.status,
        map: state.map.dimensions(),
        you: SelfView {
            player: player.clone(),
            attack_ready_in: player.stats.cooldown_remaining(state.tick),
        },
        nearest_zombie,
        players: state.players.values().cloned().collect(),
        zombies: state.zombies.values().cloned().collect(),
        companion: state.companion.clone(),
    })
}
