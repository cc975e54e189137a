//! Combatants that occupy the grid.
//!
//! Players, zombies and the companion share one combat shape: a position,
//! hit points, an alive flag, and [`CombatStats`]. Damage code reaches all of
//! them through [`Combatant`].

use super::{CombatStats, Position, ZombieKind};

/// Damage intake shared by every entity on the grid.
pub trait Combatant {
    /// Applies `amount` damage. Returns `true` only when this hit killed the entity.
    fn take_damage(&mut self, amount: u32) -> bool;
}

macro_rules! impl_combatant {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Combatant for $ty {
                fn take_damage(&mut self, amount: u32) -> bool {
                    if !self.alive {
                        return false;
                    }
                    self.hp = self.hp.saturating_sub(amount);
                    if self.hp == 0 {
                        self.alive = false;
                        return true;
                    }
                    false
                }
            }
        )+
    };
}

impl_combatant!(Player, Zombie, Companion);

/// Human-controlled defender.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub hp: u32,
    pub max_hp: u32,
    pub alive: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stats: CombatStats,
}

impl Player {
    pub const MAX_HP: u32 = 100;
    pub const ATTACK_DAMAGE: u32 = 10;
    pub const ATTACK_RANGE: u32 = 1;
    pub const ATTACK_COOLDOWN: u32 = 2;

    pub fn new(id: impl Into<String>, name: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            hp: Self::MAX_HP,
            max_hp: Self::MAX_HP,
            alive: true,
            stats: CombatStats::new(
                Self::ATTACK_DAMAGE,
                Self::ATTACK_RANGE,
                Self::ATTACK_COOLDOWN,
            ),
        }
    }
}

/// Hostile unit. Dead zombies stay in the roster so result payloads remain stable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Zombie {
    pub id: String,
    pub kind: ZombieKind,
    pub position: Position,
    pub hp: u32,
    pub max_hp: u32,
    pub alive: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stats: CombatStats,
}

impl Zombie {
    pub fn new(id: impl Into<String>, kind: ZombieKind, position: Position) -> Self {
        let profile = kind.profile();
        Self {
            id: id.into(),
            kind,
            position,
            hp: profile.max_hp,
            max_hp: profile.max_hp,
            alive: true,
            stats: CombatStats::new(
                profile.attack_damage,
                profile.attack_range,
                profile.attack_cooldown_ticks,
            ),
        }
    }

    /// Overrides current and maximum hit points.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp;
        self.max_hp = self.max_hp.max(hp);
        self
    }
}

/// Outcome marker of the companion's most recent turn.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Emote {
    #[default]
    Idle,
    Focus,
    Attack,
    Hurt,
}

/// AI-controlled ally. At most one per session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Companion {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub hp: u32,
    pub max_hp: u32,
    pub alive: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stats: CombatStats,
    pub emote: Emote,
}

impl Companion {
    pub const ID: &'static str = "companion-1";
    pub const NAME: &'static str = "Companion";
    pub const MAX_HP: u32 = 80;
    pub const ATTACK_DAMAGE: u32 = 8;
    pub const ATTACK_RANGE: u32 = 2;
    pub const ATTACK_COOLDOWN: u32 = 2;

    pub fn new(position: Position) -> Self {
        Self {
            id: Self::ID.to_string(),
            name: Self::NAME.to_string(),
            position,
            hp: Self::MAX_HP,
            max_hp: Self::MAX_HP,
            alive: true,
            stats: CombatStats::new(
                Self::ATTACK_DAMAGE,
                Self::ATTACK_RANGE,
                Self::ATTACK_COOLDOWN,
            ),
            emote: Emote::Idle,
        }
    }
}
