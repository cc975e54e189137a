//! Turn scheduling and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! call follows the same shape: resolve the player's action (if any), advance
//! the tick, run the companion and zombie turns, then re-evaluate the session
//! status.
//!
//! The free functions [`apply_action`] and [`tick_game`] wrap the engine in
//! copy-on-write semantics: the caller's snapshot is cloned into a draft and
//! only the draft is mutated, so a rejected action leaves no trace.

pub mod bootstrap;
pub mod pathing;
mod transition;
pub mod turns;
pub mod waves;

pub use bootstrap::{NewGame, add_player_to_state, create_initial_game_state};

use crate::action::Action;
use crate::error::RuleError;
use crate::state::GameState;

/// Game engine that drives actions and AI turns against a mutable snapshot.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Resolves `action` for `actor_id`, then advances the world by one tick.
    ///
    /// On error the state may be partially mutated; callers that need
    /// atomicity should run the engine on a draft (see [`apply_action`]).
    pub fn execute(&mut self, actor_id: &str, action: &Action) -> Result<(), RuleError> {
        self.validate_actor(actor_id)?;
        transition::execute_transition(actor_id, action, self.state)?;
        self.advance();
        Ok(())
    }

    /// Advances the tick and, while the session is active, resolves the AI
    /// turns and re-evaluates the status.
    pub fn advance(&mut self) {
        self.state.tick += 1;
        turns::run_ai_turns(self.state);
        waves::evaluate_status(self.state);
    }

    /// Game must be active and the actor must be a living player.
    fn validate_actor(&self, actor_id: &str) -> Result<(), RuleError> {
        if self.state.status.is_terminal() {
            return Err(RuleError::GameCompleted);
        }
        let player = self
            .state
            .players
            .get(actor_id)
            .ok_or_else(|| RuleError::PlayerNotFound(actor_id.to_string()))?;
        if !player.alive {
            return Err(RuleError::PlayerDead(actor_id.to_string()));
        }
        Ok(())
    }
}

/// Applies `action` for `actor_id` and returns the next snapshot.
///
/// The input is never mutated.
pub fn apply_action(
    state: &GameState,
    actor_id: &str,
    action: &Action,
) -> Result<GameState, RuleError> {
    let mut draft = state.clone();
    GameEngine::new(&mut draft).execute(actor_id, action)?;
    Ok(draft)
}

/// Advances the world by one tick without a player action.
///
/// On a terminal snapshot only the tick moves.
pub fn tick_game(state: &GameState) -> GameState {
    let mut draft = state.clone();
    GameEngine::new(&mut draft).advance();
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::state::{GameMode, GameStatus, Player, Position, ZombieKind};

    fn duel() -> GameState {
        let mut state = GameState::new("s", GameMode::Classic);
        state
            .players
            .insert("p".into(), Player::new("p", "P", Position::new(2, 2)));
        state.spawn_zombie(ZombieKind::Normal, Position::new(9, 7));
        state
    }

    #[test]
    fn wait_advances_tick_and_ai() {
        let state = duel();
        let next = apply_action(&state, "p", &Action::Wait).unwrap();
        assert_eq!(next.tick, 1);
        assert_eq!(next.zombies["zombie-0001"].position, Position::new(8, 7));
        assert_eq!(state.tick, 0);
    }

    #[test]
    fn rejected_action_leaves_input_untouched() {
        let mut state = duel();
        if let Some(player) = state.players.get_mut("p") {
            player.position = Position::new(1, 2);
        }
        let before = state.clone();
        let err = apply_action(&state, "p", &Action::move_to(Direction::Left)).unwrap_err();
        assert_eq!(err, RuleError::MoveBlocked { x: 0, y: 2 });
        assert_eq!(state, before);
    }

    #[test]
    fn actor_checks_run_in_order() {
        let mut state = duel();
        assert_eq!(
            apply_action(&state, "ghost", &Action::Wait).unwrap_err(),
            RuleError::PlayerNotFound("ghost".into())
        );

        if let Some(player) = state.players.get_mut("p") {
            player.alive = false;
        }
        assert_eq!(
            apply_action(&state, "p", &Action::Wait).unwrap_err(),
            RuleError::PlayerDead("p".into())
        );

        state.status = GameStatus::Lost;
        assert_eq!(
            apply_action(&state, "p", &Action::Wait).unwrap_err(),
            RuleError::GameCompleted
        );
    }

    #[test]
    fn tick_on_terminal_state_only_moves_the_clock() {
        let mut state = duel();
        state.status = GameStatus::Won;
        let next = tick_game(&state);
        assert_eq!(next.tick, 1);
        assert_eq!(next.status, GameStatus::Won);
        assert_eq!(next.zombies, state.zombies);
    }
}
