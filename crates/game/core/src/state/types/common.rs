use std::fmt;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance, the only metric used for targeting, range and steering.
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn offset(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Per-combatant attack parameters and cooldown bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombatStats {
    pub attack_damage: u32,
    /// Maximum Manhattan distance at which an attack lands.
    pub attack_range: u32,
    pub attack_cooldown_ticks: u32,
    /// Tick of the most recent attack. Starts at `-attack_cooldown_ticks` so
    /// the first attack is never blocked.
    pub last_attack_tick: i64,
}

impl CombatStats {
    pub fn new(attack_damage: u32, attack_range: u32, attack_cooldown_ticks: u32) -> Self {
        Self {
            attack_damage,
            attack_range,
            attack_cooldown_ticks,
            last_attack_tick: -i64::from(attack_cooldown_ticks),
        }
    }

    /// Ticks left before the next attack is allowed; zero when ready.
    pub fn cooldown_remaining(&self, tick: u64) -> u64 {
        let elapsed = tick as i64 - self.last_attack_tick;
        (i64::from(self.attack_cooldown_ticks) - elapsed).max(0) as u64
    }

    pub fn is_ready(&self, tick: u64) -> bool {
        self.cooldown_remaining(tick) == 0
    }

    pub fn in_range(&self, distance: u32) -> bool {
        distance <= self.attack_range
    }

    pub fn record_attack(&mut self, tick: u64) {
        self.last_attack_tick = tick as i64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_ignores_direction() {
        let a = Position::new(2, 3);
        let b = Position::new(5, 1);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn first_attack_is_never_blocked() {
        let stats = CombatStats::new(10, 1, 3);
        assert!(stats.is_ready(0));
    }

    #[test]
    fn cooldown_counts_down_from_last_attack() {
        let mut stats = CombatStats::new(10, 1, 2);
        stats.record_attack(4);
        assert_eq!(stats.cooldown_remaining(4), 2);
        assert_eq!(stats.cooldown_remaining(5), 1);
        assert!(stats.is_ready(6));
    }
}
