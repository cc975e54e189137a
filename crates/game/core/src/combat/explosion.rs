//! Cascading blast damage from explosive zombies.
//!
//! A dying explosive zombie damages every living entity within
//! [`GameConfig::SPLASH_RADIUS`]. Zombies killed by the blast that are
//! themselves explosive detonate in turn. Processing is breadth-first with a
//! visited set, so each zombie detonates at most once and the chain is bounded
//! by the roster size.

use std::collections::{BTreeSet, VecDeque};

use crate::config::GameConfig;
use crate::state::{Combatant, Emote, GameState};

/// Summary of one chain reaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainReport {
    /// Zombies that detonated, in detonation order (the trigger first).
    pub detonations: Vec<String>,
    /// Zombies killed by blasts (excluding the trigger).
    pub zombies_killed: Vec<String>,
    /// Defenders killed by blasts.
    pub defenders_killed: Vec<String>,
}

/// Resolves the chain started by the death of `origin`.
pub fn resolve_chain(state: &mut GameState, origin: &str) -> ChainReport {
    let mut report = ChainReport::default();
    let mut visited = BTreeSet::from([origin.to_string()]);
    let mut queue = VecDeque::from([origin.to_string()]);

    while let Some(exploder) = queue.pop_front() {
        let Some(center) = state.zombies.get(&exploder).map(|zombie| zombie.position) else {
            continue;
        };
        report.detonations.push(exploder.clone());
        let in_blast = |position| center.manhattan(position) <= GameConfig::SPLASH_RADIUS;

        for player in state.players.values_mut() {
            if player.alive
                && in_blast(player.position)
                && player.take_damage(GameConfig::player_splash_damage())
            {
                report.defenders_killed.push(player.id.clone());
            }
        }

        if let Some(companion) = state.companion.as_mut().filter(|c| c.alive) {
            if in_blast(companion.position) {
                let killed = companion.take_damage(GameConfig::companion_splash_damage());
                companion.emote = if killed { Emote::Idle } else { Emote::Hurt };
                if killed {
                    report.defenders_killed.push(companion.id.clone());
                }
            }
        }

        for (id, zombie) in state.zombies.iter_mut() {
            if *id == exploder || !zombie.alive || !in_blast(zombie.position) {
                continue;
            }
            if zombie.take_damage(GameConfig::EXPLOSION_DAMAGE) {
                report.zombies_killed.push(id.clone());
                if zombie.kind.explodes_on_death() && visited.insert(id.clone()) {
                    queue.push_back(id.clone());
                }
            }
        }
    }

    report
}
