//! Stored representation of a session.

use chrono::{DateTime, Utc};
use game_core::GameState;
use serde::{Deserialize, Serialize};

/// A session snapshot plus the wall-clock bookkeeping the engine never sees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub state: GameState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(state: GameState) -> Self {
        let now = Utc::now();
        Self {
            state,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the snapshot and bumps `updated_at`.
    pub fn replace_state(&mut self, state: GameState) {
        self.state = state;
        self.updated_at = Utc::now();
    }

    /// Serializes the record to JSON, e.g. for export or debugging dumps.
    pub fn to_json(&self) -> super::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> super::Result<Self> {
        let record: Self = serde_json::from_str(json)?;
        if record.updated_at < record.created_at {
            return Err(super::RepositoryError::CorruptedData(
                record.state.session_id.clone(),
            ));
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameMode;

    #[test]
    fn json_round_trip_keeps_timestamps() {
        let record = SessionRecord::new(GameState::new("s", GameMode::Endless));
        let json = record.to_json().unwrap();
        assert!(json.contains("\"createdAt\""));
        assert_eq!(SessionRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn replacing_state_moves_updated_at_forward() {
        let mut record = SessionRecord::new(GameState::new("s", GameMode::Classic));
        let mut next = record.state.clone();
        next.tick = 3;
        record.replace_state(next);
        assert_eq!(record.state.tick, 3);
        assert!(record.updated_at >= record.created_at);
    }
}
