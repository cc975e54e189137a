//! State type definitions.
//!
//! - `common`: positions and combat stats shared by every combatant
//! - `actor`: players, the companion, and the [`Combatant`] trait
//! - `zombie`: zombie archetypes and their stat profiles

mod actor;
mod common;
mod zombie;

pub use actor::{Combatant, Companion, Emote, Player, Zombie};
pub use common::{CombatStats, Position};
pub use zombie::{ZombieKind, ZombieProfile};
