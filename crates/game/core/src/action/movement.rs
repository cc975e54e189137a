use crate::action::{ActionTransition, Direction};
use crate::error::RuleError;
use crate::state::{GameState, Position};

/// Single-tile step in a cardinal direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: String,
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(actor: impl Into<String>, direction: Direction) -> Self {
        Self {
            actor: actor.into(),
            direction,
        }
    }

    fn origin(&self, state: &GameState) -> Result<Position, RuleError> {
        state
            .players
            .get(&self.actor)
            .map(|player| player.position)
            .ok_or_else(|| RuleError::PlayerNotFound(self.actor.clone()))
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> &str {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), RuleError> {
        let destination = self.direction.step_from(self.origin(state)?);

        // Walls and the map edge are checked before occupancy.
        if !state.map.is_passable(destination) {
            return Err(RuleError::MoveBlocked {
                x: destination.x,
                y: destination.y,
            });
        }

        if state.is_occupied(destination) {
            return Err(RuleError::MoveOccupied {
                x: destination.x,
                y: destination.y,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), RuleError> {
        let destination = self.direction.step_from(self.origin(state)?);
        let player = state
            .players
            .get_mut(&self.actor)
            .ok_or_else(|| RuleError::PlayerNotFound(self.actor.clone()))?;
        player.position = destination;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameMode, Player, ZombieKind};

    fn state_at(position: Position) -> GameState {
        let mut state = GameState::new("s", GameMode::Classic);
        state
            .players
            .insert("p".into(), Player::new("p", "P", position));
        state
    }

    #[test]
    fn moving_into_the_border_is_blocked() {
        let state = state_at(Position::new(1, 1));
        let err = MoveAction::new("p", Direction::Up)
            .pre_validate(&state)
            .unwrap_err();
        assert_eq!(err, RuleError::MoveBlocked { x: 1, y: 0 });
    }

    #[test]
    fn moving_into_a_pillar_is_blocked() {
        let state = state_at(Position::new(4, 4));
        let err = MoveAction::new("p", Direction::Right)
            .pre_validate(&state)
            .unwrap_err();
        assert_eq!(err.code(), "MOVE_BLOCKED");
    }

    #[test]
    fn moving_onto_a_living_zombie_is_occupied() {
        let mut state = state_at(Position::new(2, 2));
        state.spawn_zombie(ZombieKind::Normal, Position::new(3, 2));
        let err = MoveAction::new("p", Direction::Right)
            .pre_validate(&state)
            .unwrap_err();
        assert_eq!(err.code(), "MOVE_OCCUPIED");
    }

    #[test]
    fn apply_updates_position() {
        let mut state = state_at(Position::new(2, 2));
        let action = MoveAction::new("p", Direction::Down);
        action.pre_validate(&state).unwrap();
        action.apply(&mut state).unwrap();
        assert_eq!(state.players["p"].position, Position::new(2, 3));
    }
}
