//! Win/lose evaluation and endless-mode wave spawning.

use crate::config::GameConfig;
use crate::state::{GameMode, GameState, GameStatus, Position, ZombieKind};

/// Recomputes the session status after a resolution step.
///
/// Losing takes precedence over winning. In endless mode a cleared wave
/// spawns the next one instead of ending the game. Terminal statuses are
/// never revisited.
pub fn evaluate_status(state: &mut GameState) {
    if state.status.is_terminal() {
        return;
    }

    if state.defenders_alive() == 0 {
        state.status = GameStatus::Lost;
        return;
    }

    if state.zombies_alive() == 0 {
        match state.mode {
            GameMode::Classic => state.status = GameStatus::Won,
            GameMode::Endless => {
                state.wave += 1;
                spawn_wave(state, state.wave, wave_size(state.wave));
                state.status = GameStatus::Active;
            }
        }
        return;
    }

    state.status = GameStatus::Active;
}

/// Number of zombies in a respawned wave.
pub fn wave_size(wave: u32) -> usize {
    (2 + wave as usize * 2).clamp(GameConfig::MIN_WAVE_SIZE, GameConfig::MAX_WAVE_SIZE)
}

/// Zombie kind for the `slot`-th spawn of `wave`.
///
/// Later waves mix in tougher kinds at fixed slot intervals.
pub fn zombie_kind_for_slot(wave: u32, slot: usize) -> ZombieKind {
    if wave >= 4 && slot % 6 == 5 {
        ZombieKind::Heavy
    } else if wave >= 2 && slot % 5 == 4 {
        ZombieKind::Explosive
    } else if slot % 4 == 3 {
        ZombieKind::Fast
    } else {
        ZombieKind::Normal
    }
}

/// Candidate spawn tiles: preferred points first, then the remaining grass
/// tiles closest to the map edge, then shallowest along the diagonal.
pub fn spawn_candidates(state: &GameState) -> Vec<Position> {
    let dims = state.map.dimensions();
    let preferred = GameConfig::ZOMBIE_SPAWN_POINTS
        .into_iter()
        .filter(|position| state.map.is_passable(*position));

    let mut rest: Vec<Position> = state
        .map
        .grass_positions()
        .filter(|position| !GameConfig::ZOMBIE_SPAWN_POINTS.contains(position))
        .collect();
    rest.sort_by_key(|position| {
        (
            dims.edge_distance(*position),
            position.x + position.y,
            position.y,
            position.x,
        )
    });

    preferred.chain(rest).collect()
}

/// Spawns up to `count` zombies for `wave` on free candidate tiles.
/// Returns the ids of the zombies actually placed.
pub fn spawn_wave(state: &mut GameState, wave: u32, count: usize) -> Vec<String> {
    let mut spawned = Vec::with_capacity(count);
    for position in spawn_candidates(state) {
        if spawned.len() == count {
            break;
        }
        if !state.can_enter(position) {
            continue;
        }
        let kind = zombie_kind_for_slot(wave, spawned.len());
        spawned.push(state.spawn_zombie(kind, position));
    }
    spawned
}
