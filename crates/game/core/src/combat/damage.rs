use crate::combat::explosion::{self, ChainReport};
use crate::state::{Combatant, Defender, DefenderRole, Emote, GameState};

/// Result of a single strike against a zombie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZombieHit {
    pub target: String,
    pub damage: u32,
    pub killed: bool,
    /// Populated when the kill set off an explosion chain.
    pub chain: Option<ChainReport>,
}

/// Damages a zombie and resolves the explosion chain when the hit kills an
/// explosive one. Returns `None` if the zombie does not exist.
pub fn strike_zombie(state: &mut GameState, zombie_id: &str, damage: u32) -> Option<ZombieHit> {
    let zombie = state.zombies.get_mut(zombie_id)?;
    let killed = zombie.take_damage(damage);
    let explodes = killed && zombie.kind.explodes_on_death();

    let chain = explodes.then(|| explosion::resolve_chain(state, zombie_id));
    Some(ZombieHit {
        target: zombie_id.to_string(),
        damage,
        killed,
        chain,
    })
}

/// Damages a living defender. Returns `true` when the hit was lethal.
///
/// A companion that survives the hit shows [`Emote::Hurt`]; a companion that
/// dies drops back to [`Emote::Idle`].
pub fn strike_defender(state: &mut GameState, defender: &Defender, damage: u32) -> bool {
    match defender.role {
        DefenderRole::Player => state
            .players
            .get_mut(&defender.id)
            .is_some_and(|player| player.take_damage(damage)),
        DefenderRole::Companion => match state.companion.as_mut() {
            Some(companion) => {
                let killed = companion.take_damage(damage);
                companion.emote = if killed { Emote::Idle } else { Emote::Hurt };
                killed
            }
            None => false,
        },
    }
}
