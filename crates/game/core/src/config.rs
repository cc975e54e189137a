use crate::state::Position;

/// Game configuration constants and tunable parameters.
///
/// Every value here is part of the deterministic rule set: changing one
/// changes the outcome of replaying the same action sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig;

impl GameConfig {
    // ===== map layout =====
    pub const MAP_WIDTH: u32 = 16;
    pub const MAP_HEIGHT: u32 = 12;
    /// Interior pillars sit on every tile where `x % PILLAR_X == 0 && y % PILLAR_Y == 0`.
    pub const PILLAR_X: i32 = 5;
    pub const PILLAR_Y: i32 = 4;

    // ===== spawning =====
    pub const PLAYER_START: Position = Position::new(2, 2);

    /// Preferred companion tiles, tried in order before falling back to a scan.
    pub const COMPANION_SPAWN_POINTS: [Position; 5] = [
        Position::new(3, 2),
        Position::new(2, 3),
        Position::new(3, 3),
        Position::new(1, 2),
        Position::new(2, 1),
    ];

    /// Preferred zombie tiles, used for the opening wave and every respawn.
    pub const ZOMBIE_SPAWN_POINTS: [Position; 8] = [
        Position::new(13, 9),
        Position::new(13, 2),
        Position::new(2, 9),
        Position::new(8, 9),
        Position::new(13, 6),
        Position::new(8, 2),
        Position::new(11, 9),
        Position::new(11, 2),
    ];

    pub const MIN_ZOMBIE_COUNT: u32 = 1;
    pub const MAX_ZOMBIE_COUNT: u32 = 32;

    // ===== waves =====
    pub const MIN_WAVE_SIZE: usize = 3;
    pub const MAX_WAVE_SIZE: usize = 32;

    // ===== explosions =====
    /// Manhattan radius of an explosive zombie's death blast.
    pub const SPLASH_RADIUS: u32 = 2;
    pub const EXPLOSION_DAMAGE: u32 = 20;
    pub const PLAYER_SPLASH_PERCENT: u32 = 50;
    pub const COMPANION_SPLASH_PERCENT: u32 = 60;

    pub const fn new() -> Self {
        Self
    }

    /// Splash damage dealt to a player caught in a blast.
    pub const fn player_splash_damage() -> u32 {
        Self::EXPLOSION_DAMAGE * Self::PLAYER_SPLASH_PERCENT / 100
    }

    /// Splash damage dealt to the companion caught in a blast.
    pub const fn companion_splash_damage() -> u32 {
        Self::EXPLOSION_DAMAGE * Self::COMPANION_SPLASH_PERCENT / 100
    }
}
