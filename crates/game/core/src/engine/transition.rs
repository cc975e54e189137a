//! Action transition dispatch.

use crate::action::{Action, ActionTransition, AttackAction, MoveAction, WaitAction};
use crate::error::RuleError;
use crate::state::GameState;

/// Runs a transition through its three phases:
/// `pre_validate` → `apply` → `post_validate`.
#[inline]
fn drive_transition<T>(transition: &T, state: &mut GameState) -> Result<(), RuleError>
where
    T: ActionTransition,
{
    transition.pre_validate(state)?;
    transition.apply(state)?;
    transition.post_validate(state)
}

/// Materialises `action` for `actor` and drives it against `state`.
pub(super) fn execute_transition(
    actor: &str,
    action: &Action,
    state: &mut GameState,
) -> Result<(), RuleError> {
    match action {
        Action::Move { direction } => drive_transition(&MoveAction::new(actor, *direction), state),
        Action::Attack { target_id } => {
            drive_transition(&AttackAction::new(actor, target_id.clone()), state)
        }
        Action::Wait => drive_transition(&WaitAction::new(actor), state),
    }
}
