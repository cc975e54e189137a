use crate::action::ActionTransition;
use crate::error::RuleError;
use crate::state::GameState;

/// Lets time pass without moving or attacking.
///
/// The engine still advances the tick and runs the AI turns afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitAction {
    pub actor: String,
}

impl WaitAction {
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
        }
    }
}

impl ActionTransition for WaitAction {
    fn actor(&self) -> &str {
        &self.actor
    }

    fn apply(&self, _state: &mut GameState) -> Result<(), RuleError> {
        Ok(())
    }
}
