//! Rule errors raised by the engine.
//!
//! Every failure the engine reports is a deterministic rule evaluation: the
//! same snapshot and the same input always produce the same error, so callers
//! must change their input before trying again.
//!
//! # Design Principles
//!
//! - **Stable codes**: each variant exposes a fixed `SCREAMING_SNAKE` code that
//!   outer layers map to their own transport status
//! - **Categorised**: errors are grouped by caller-visible effect, not by module
//! - **No partial mutation**: an error always means the caller's snapshot is untouched

/// Caller-visible category of a rule error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// The referenced entity does not exist or is already dead.
    NotFound,

    /// The request breaks a game rule; a different input may succeed.
    ///
    /// Examples: destination blocked, attack on cooldown, game already over
    Conflict,

    /// The request is malformed regardless of game state.
    ///
    /// Examples: zombie count outside the allowed bounds
    Validation,
}

impl ErrorCategory {
    /// Rule errors are never transient, so automatic retries are never useful.
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for classification so that runtime layers can
/// translate errors without matching on every variant.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the category of this error.
    fn category(&self) -> ErrorCategory;

    /// Returns a stable string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors produced while validating or resolving engine operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleError {
    #[error("session is no longer active")]
    GameCompleted,

    #[error("player {0} not found")]
    PlayerNotFound(String),

    #[error("player {0} is dead")]
    PlayerDead(String),

    #[error("player {0} already exists")]
    PlayerExists(String),

    #[error("no free tile available to spawn a player")]
    NoSpawn,

    #[error("destination ({x}, {y}) is blocked")]
    MoveBlocked { x: i32, y: i32 },

    #[error("destination ({x}, {y}) is occupied")]
    MoveOccupied { x: i32, y: i32 },

    #[error("attack on cooldown for {remaining} more tick(s)")]
    AttackCooldown { remaining: u64 },

    #[error("target {0} not found")]
    TargetNotFound(String),

    #[error("target {target} is {distance} tile(s) away, range is {range}")]
    TargetOutOfRange {
        target: String,
        distance: u32,
        range: u32,
    },

    #[error("no living zombies to attack")]
    NoZombies,

    #[error("zombie count {0} must be between 1 and 32")]
    InvalidZombieCount(u32),
}

impl GameError for RuleError {
    fn category(&self) -> ErrorCategory {
        use RuleError::*;
        match self {
            PlayerNotFound(_) | TargetNotFound(_) => ErrorCategory::NotFound,
            InvalidZombieCount(_) => ErrorCategory::Validation,
            GameCompleted | PlayerDead(_) | PlayerExists(_) | NoSpawn => ErrorCategory::Conflict,
            MoveBlocked { .. } | MoveOccupied { .. } => ErrorCategory::Conflict,
            AttackCooldown { .. } | TargetOutOfRange { .. } | NoZombies => {
                ErrorCategory::Conflict
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use RuleError::*;
        match self {
            GameCompleted => "GAME_COMPLETED",
            PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            PlayerDead(_) => "PLAYER_DEAD",
            PlayerExists(_) => "PLAYER_EXISTS",
            NoSpawn => "NO_SPAWN",
            MoveBlocked { .. } => "MOVE_BLOCKED",
            MoveOccupied { .. } => "MOVE_OCCUPIED",
            AttackCooldown { .. } => "ATTACK_COOLDOWN",
            TargetNotFound(_) => "TARGET_NOT_FOUND",
            TargetOutOfRange { .. } => "TARGET_OUT_OF_RANGE",
            NoZombies => "NO_ZOMBIES",
            InvalidZombieCount(_) => "INVALID_ZOMBIE_COUNT",
        }
    }
}

impl RuleError {
    /// Shorthand for [`GameError::error_code`].
    pub fn code(&self) -> &'static str {
        self.error_code()
    }
}
