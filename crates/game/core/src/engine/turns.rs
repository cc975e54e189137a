//! AI turn pipeline: the companion acts first, then every living zombie.
//!
//! Both phases run only while the session is active. Attacks that are still
//! on cooldown are skipped silently here; cooldown is only an error when a
//! player asks for an attack.

use crate::combat;
use crate::engine::pathing;
use crate::state::{Emote, GameState, GameStatus};

/// Runs the companion phase followed by the zombie phase.
pub fn run_ai_turns(state: &mut GameState) {
    companion_turn(state);
    zombie_turn(state);
}

/// Resolves the companion's turn: attack the nearest zombie when possible,
/// otherwise close the distance by one step.
pub fn companion_turn(state: &mut GameState) {
    if state.status != GameStatus::Active {
        return;
    }
    let Some(companion) = state.companion.as_ref().filter(|c| c.alive) else {
        return;
    };
    let origin = companion.position;
    let stats = companion.stats;

    let Some(target) = state.nearest_zombie(origin) else {
        if let Some(companion) = state.companion.as_mut() {
            companion.emote = Emote::Idle;
        }
        return;
    };
    let target_id = target.id.clone();
    let target_position = target.position;
    let distance = origin.manhattan(target_position);
    let tick = state.tick;

    if stats.in_range(distance) && stats.is_ready(tick) {
        if let Some(companion) = state.companion.as_mut() {
            companion.stats.record_attack(tick);
            companion.emote = Emote::Attack;
        }
        combat::strike_zombie(state, &target_id, stats.attack_damage);
        return;
    }

    // Adjacent and waiting on cooldown: nothing to do this turn.
    if distance <= 1 {
        return;
    }

    if let Some(next) = pathing::next_step(state, origin, target_position) {
        if let Some(companion) = state.companion.as_mut() {
            companion.position = next;
            companion.emote = Emote::Focus;
        }
    }
}

/// Resolves every living zombie in ascending id order.
pub fn zombie_turn(state: &mut GameState) {
    if state.status != GameStatus::Active {
        return;
    }
    let roster: Vec<String> = state
        .living_zombies()
        .map(|zombie| zombie.id.clone())
        .collect();

    for id in roster {
        let Some(zombie) = state.zombies.get(&id).filter(|z| z.alive) else {
            continue;
        };
        let kind = zombie.kind;
        let stats = zombie.stats;
        let mut position = zombie.position;

        // Every defender is down; the status evaluator will end the game.
        let Some(target) = state.nearest_defender(position) else {
            break;
        };

        if stats.in_range(position.manhattan(target.position)) {
            if stats.is_ready(state.tick) {
                let tick = state.tick;
                if let Some(zombie) = state.zombies.get_mut(&id) {
                    zombie.stats.record_attack(tick);
                }
                combat::strike_defender(state, &target, stats.attack_damage);
            }
            continue;
        }

        for _ in 0..kind.steps_on_tick(state.tick) {
            if stats.in_range(position.manhattan(target.position)) {
                break;
            }
            let Some(next) = pathing::next_step(state, position, target.position) else {
                break;
            };
            position = next;
            if let Some(zombie) = state.zombies.get_mut(&id) {
                zombie.position = next;
            }
        }
    }
}
