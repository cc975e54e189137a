//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so sessions can be
//! driven by human input, scripted fixtures, or simple autopilots.
use async_trait::async_trait;
use game_core::engine::pathing;
use game_core::{Action, GameMap, Observation, Position};

use super::errors::Result;

/// Trait for providing actions based on the current observation.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed actions
/// - Autopilots and testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide an action for `player_id` given its current view of the game.
    async fn provide_action(&self, player_id: &str, observation: &Observation) -> Result<Action>;
}

/// A simple action provider that always returns Wait action.
/// Useful for testing or as a fallback.
pub struct WaitActionProvider;

#[async_trait]
impl ActionProvider for WaitActionProvider {
    async fn provide_action(&self, _player_id: &str, _observation: &Observation) -> Result<Action> {
        Ok(Action::Wait)
    }
}

/// Autopilot that fights the nearest zombie.
///
/// Attacks when the target is in range and the cooldown has elapsed, steps
/// toward it when out of range, and waits otherwise.
pub struct GreedyActionProvider {
    map: GameMap,
}

impl GreedyActionProvider {
    pub fn new() -> Self {
        Self {
            map: GameMap::standard(),
        }
    }

    fn occupied(observation: &Observation, position: Position) -> bool {
        observation
            .players
            .iter()
            .any(|p| p.alive && p.position == position)
            || observation
                .zombies
                .iter()
                .any(|z| z.alive && z.position == position)
            || observation
                .companion
                .as_ref()
                .is_some_and(|c| c.alive && c.position == position)
    }

    /// Picks the next action without awaiting anything.
    pub fn choose(&self, observation: &Observation) -> Action {
        let Some(threat) = &observation.nearest_zombie else {
            return Action::Wait;
        };
        let me = &observation.you.player;

        if me.stats.in_range(threat.distance) {
            if observation.you.attack_ready_in == 0 {
                return Action::attack(threat.id.clone());
            }
            return Action::Wait;
        }

        pathing::preferred_directions(me.position, threat.position)
            .into_iter()
            .find(|direction| {
                let next = direction.step_from(me.position);
                self.map.is_passable(next) && !Self::occupied(observation, next)
            })
            .map(Action::move_to)
            .unwrap_or(Action::Wait)
    }
}

impl Default for GreedyActionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionProvider for GreedyActionProvider {
    async fn provide_action(&self, _player_id: &str, observation: &Observation) -> Result<Action> {
        Ok(self.choose(observation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Direction, GameState, NewGame, create_initial_game_state, to_observation};

    fn observe(state: &GameState) -> Observation {
        to_observation(state, "player-1").unwrap()
    }

    #[test]
    fn attacks_adjacent_target() {
        let (mut state, _) = create_initial_game_state(&NewGame::new("s")).unwrap();
        if let Some(zombie) = state.zombies.get_mut("zombie-0001") {
            zombie.position = Position::new(3, 2);
        }
        let action = GreedyActionProvider::new().choose(&observe(&state));
        assert_eq!(action, Action::attack("zombie-0001"));
    }

    #[test]
    fn walks_toward_distant_target() {
        let (state, _) = create_initial_game_state(&NewGame::new("s")).unwrap();
        // The only zombie spawns at (13, 9): mostly to the right.
        let action = GreedyActionProvider::new().choose(&observe(&state));
        assert_eq!(action, Action::move_to(Direction::Right));
    }

    #[test]
    fn waits_while_on_cooldown() {
        let (mut state, _) = create_initial_game_state(&NewGame::new("s")).unwrap();
        if let Some(zombie) = state.zombies.get_mut("zombie-0001") {
            zombie.position = Position::new(3, 2);
        }
        if let Some(player) = state.players.get_mut("player-1") {
            player.stats.record_attack(0);
        }
        let action = GreedyActionProvider::new().choose(&observe(&state));
        assert_eq!(action, Action::Wait);
    }

    #[tokio::test]
    async fn wait_provider_always_waits() {
        let (state, _) = create_initial_game_state(&NewGame::new("s")).unwrap();
        let action = WaitActionProvider
            .provide_action("player-1", &observe(&state))
            .await
            .unwrap();
        assert_eq!(action, Action::Wait);
    }
}
