//! Greedy axis-preference steering used by every AI-controlled unit.
//!
//! The axis with the larger absolute delta is tried first (horizontal on a
//! tie), then the perpendicular axis. There is no search: a unit boxed in on
//! both candidate directions simply stays put.

use arrayvec::ArrayVec;

use crate::action::Direction;
use crate::state::{GameState, Position};

/// Candidate directions from `from` toward `to`, most preferred first.
pub fn preferred_directions(from: Position, to: Position) -> ArrayVec<Direction, 2> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let horizontal = Direction::horizontal(dx);
    let vertical = Direction::vertical(dy);

    let ordered = if dx.abs() >= dy.abs() {
        [horizontal, vertical]
    } else {
        [vertical, horizontal]
    };
    ordered.into_iter().flatten().collect()
}

/// First enterable tile one step from `from` toward `to`, if any.
pub fn next_step(state: &GameState, from: Position, to: Position) -> Option<Position> {
    preferred_directions(from, to)
        .into_iter()
        .map(|direction| direction.step_from(from))
        .find(|candidate| state.can_enter(*candidate))
}
