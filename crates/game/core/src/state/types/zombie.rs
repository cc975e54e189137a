/// Zombie archetypes. Each kind has a fixed stat profile and movement cadence.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ZombieKind {
    #[default]
    Normal,
    /// Moves two tiles per turn.
    Fast,
    /// Detonates on death, damaging everything nearby.
    Explosive,
    /// Moves only on even ticks.
    Heavy,
}

/// Stat block shared by every zombie of one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZombieProfile {
    pub max_hp: u32,
    pub attack_damage: u32,
    pub attack_range: u32,
    pub attack_cooldown_ticks: u32,
}

impl ZombieKind {
    pub const fn profile(self) -> ZombieProfile {
        match self {
            ZombieKind::Normal => ZombieProfile {
                max_hp: 30,
                attack_damage: 8,
                attack_range: 1,
                attack_cooldown_ticks: 2,
            },
            ZombieKind::Fast => ZombieProfile {
                max_hp: 20,
                attack_damage: 6,
                attack_range: 1,
                attack_cooldown_ticks: 1,
            },
            ZombieKind::Explosive => ZombieProfile {
                max_hp: 20,
                attack_damage: 10,
                attack_range: 1,
                attack_cooldown_ticks: 3,
            },
            ZombieKind::Heavy => ZombieProfile {
                max_hp: 60,
                attack_damage: 15,
                attack_range: 1,
                attack_cooldown_ticks: 3,
            },
        }
    }

    /// Whether a zombie of this kind detonates when killed.
    pub const fn explodes_on_death(self) -> bool {
        matches!(self, ZombieKind::Explosive)
    }

    /// Movement steps attempted on the given tick.
    pub const fn steps_on_tick(self, tick: u64) -> u32 {
        match self {
            ZombieKind::Fast => 2,
            ZombieKind::Heavy if tick % 2 != 0 => 0,
            _ => 1,
        }
    }
}
