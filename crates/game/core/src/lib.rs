//! Deterministic co-op combat rules for the horde game.
//!
//! `game-core` defines the canonical rules (map, combatants, actions, AI turns,
//! explosion chains, waves) and exposes pure APIs that the runtime wraps with
//! session storage. Nothing here performs I/O, reads a clock or logs.
//!
//! Entry points:
//! - [`create_initial_game_state`] and [`add_player_to_state`] build snapshots
//! - [`apply_action`] and [`tick_game`] advance them copy-on-write
//! - [`to_observation`] projects a player-centric read view
//!
//! All state mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod observation;
pub mod state;

pub use action::{Action, ActionTransition, AttackAction, Direction, MoveAction, WaitAction};
pub use config::GameConfig;
pub use engine::{
    GameEngine, NewGame, add_player_to_state, apply_action, create_initial_game_state, tick_game,
};
pub use env::{GameMap, MapDimensions, Tile, TileKind};
pub use error::{ErrorCategory, GameError, RuleError};
pub use observation::{Observation, SelfView, ThreatView, to_observation};
pub use state::{
    CombatStats, Combatant, Companion, Emote, GameMode, GameState, GameStatus, Player, Position,
    Zombie, ZombieKind,
};
