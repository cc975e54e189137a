//! In-memory SessionRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::{RepositoryError, Result, SessionRecord, SessionRepository};

/// In-memory implementation of SessionRepository.
///
/// Stores records keyed by session id for testing and local development.
pub struct InMemorySessionRepo {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl InMemorySessionRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionRepo {
    fn get(&self, session_id: &str) -> Result<Option<SessionRecord>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(sessions.get(session_id).cloned())
    }

    fn put(&self, session_id: &str, record: SessionRecord) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sessions.insert(session_id.to_string(), record);
        Ok(())
    }

    fn delete(&self, session_id: &str) -> Result<bool> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(sessions.remove(session_id).is_some())
    }

    fn exists(&self, session_id: &str) -> bool {
        self.sessions
            .read()
            .map(|sessions| sessions.contains_key(session_id))
            .unwrap_or(false)
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<String> = sessions.keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameMode, GameState};

    #[test]
    fn put_get_delete() {
        let repo = InMemorySessionRepo::new();
        assert!(repo.get("a").unwrap().is_none());

        repo.put("b", SessionRecord::new(GameState::new("b", GameMode::Classic)))
            .unwrap();
        repo.put("a", SessionRecord::new(GameState::new("a", GameMode::Classic)))
            .unwrap();
        assert!(repo.exists("a"));
        assert_eq!(repo.list_ids().unwrap(), vec!["a", "b"]);

        assert!(repo.delete("a").unwrap());
        assert!(!repo.delete("a").unwrap());
        assert_eq!(repo.list_ids().unwrap(), vec!["b"]);
    }
}
