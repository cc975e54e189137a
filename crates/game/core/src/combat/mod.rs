//! Damage resolution shared by player actions and AI turns.
//!
//! - `damage`: single strikes against zombies and defenders
//! - `explosion`: breadth-first chain reactions from explosive zombies

pub mod damage;
pub mod explosion;

pub use damage::{ZombieHit, strike_defender, strike_zombie};
pub use explosion::{ChainReport, resolve_chain};
