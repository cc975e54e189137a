use crate::action::ActionTransition;
use crate::combat;
use crate::error::RuleError;
use crate::state::{GameState, Player};

/// Offensive action against a zombie.
///
/// Without an explicit target the nearest living zombie is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackAction {
    pub actor: String,
    pub target: Option<String>,
}

impl AttackAction {
    /// Blank target ids are treated as "no target".
    pub fn new(actor: impl Into<String>, target: Option<String>) -> Self {
        let target = target
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        Self {
            actor: actor.into(),
            target,
        }
    }

    fn attacker<'s>(&self, state: &'s GameState) -> Result<&'s Player, RuleError> {
        state
            .players
            .get(&self.actor)
            .ok_or_else(|| RuleError::PlayerNotFound(self.actor.clone()))
    }

    /// Resolves the target id and its distance from the attacker.
    fn resolve_target(
        &self,
        state: &GameState,
        attacker: &Player,
    ) -> Result<(String, u32), RuleError> {
        let zombie = match &self.target {
            Some(id) => state
                .zombies
                .get(id)
                .filter(|zombie| zombie.alive)
                .ok_or_else(|| RuleError::TargetNotFound(id.clone()))?,
            None => state
                .nearest_zombie(attacker.position)
                .ok_or(RuleError::NoZombies)?,
        };
        Ok((zombie.id.clone(), attacker.position.manhattan(zombie.position)))
    }
}

impl ActionTransition for AttackAction {
    fn actor(&self) -> &str {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), RuleError> {
        let attacker = self.attacker(state)?;

        // Cooldown must be reported even when the target id is bogus.
        let remaining = attacker.stats.cooldown_remaining(state.tick);
        if remaining > 0 {
            return Err(RuleError::AttackCooldown { remaining });
        }

        let (target, distance) = self.resolve_target(state, attacker)?;
        if !attacker.stats.in_range(distance) {
            return Err(RuleError::TargetOutOfRange {
                target,
                distance,
                range: attacker.stats.attack_range,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), RuleError> {
        let attacker = self.attacker(state)?;
        let damage = attacker.stats.attack_damage;
        let (target, _) = self.resolve_target(state, attacker)?;

        let tick = state.tick;
        if let Some(player) = state.players.get_mut(&self.actor) {
            player.stats.record_attack(tick);
        }
        combat::strike_zombie(state, &target, damage);
        Ok(())
    }
}
