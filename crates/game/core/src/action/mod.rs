//! Player actions and their transitions.
//!
//! [`Action`] is the closed set of intents a caller may submit. The engine
//! materialises each intent into a concrete transition ([`MoveAction`],
//! [`AttackAction`], [`WaitAction`]) that validates against the snapshot
//! before mutating it.
//!
//! # Module Structure
//!
//! - `movement`: single-tile moves with wall and occupancy checks
//! - `combat`: attacks with cooldown, target resolution and range checks
//! - `wait`: the no-op action that only lets time pass

mod combat;
mod movement;
mod wait;

pub use combat::AttackAction;
pub use movement::MoveAction;
pub use wait::WaitAction;

use crate::error::RuleError;
use crate::state::{GameState, Position};

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    /// Returns the player performing this action.
    fn actor(&self) -> &str;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), RuleError> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState) -> Result<(), RuleError>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), RuleError> {
        Ok(())
    }
}

/// Unit step on the grid. `Up` decreases `y`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn step_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }

    /// Horizontal direction pointing along `dx`, if any.
    pub fn horizontal(dx: i32) -> Option<Direction> {
        match dx.signum() {
            1 => Some(Direction::Right),
            -1 => Some(Direction::Left),
            _ => None,
        }
    }

    /// Vertical direction pointing along `dy`, if any.
    pub fn vertical(dy: i32) -> Option<Direction> {
        match dy.signum() {
            1 => Some(Direction::Down),
            -1 => Some(Direction::Up),
            _ => None,
        }
    }
}

/// Intent submitted by a player.
///
/// Serialized form is internally tagged:
/// `{"type":"move","direction":"up"}`, `{"type":"attack","targetId":"zombie-0001"}`,
/// `{"type":"wait"}`. Unknown tags fail to deserialize.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Action {
    Move {
        direction: Direction,
    },
    Attack {
        #[cfg_attr(
            feature = "serde",
            serde(
                default,
                rename = "targetId",
                alias = "target_id",
                skip_serializing_if = "Option::is_none"
            )
        )]
        target_id: Option<String>,
    },
    Wait,
}

impl Action {
    pub fn move_to(direction: Direction) -> Self {
        Self::Move { direction }
    }

    /// Attack the nearest living zombie.
    pub fn attack_nearest() -> Self {
        Self::Attack { target_id: None }
    }

    pub fn attack(target_id: impl Into<String>) -> Self {
        Self::Attack {
            target_id: Some(target_id.into()),
        }
    }

    /// Returns the snake_case name of the action, used for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move { .. } => "move",
            Action::Attack { .. } => "attack",
            Action::Wait => "wait",
        }
    }
}
