//! Repository contracts for saving and loading session snapshots.

use super::error::Result;
use super::types::SessionRecord;

/// Keyed store of live sessions.
///
/// Implementations are injected into the service layer as
/// `Arc<dyn SessionRepository>`, so lifetimes and test isolation stay explicit.
/// Callers serialize writes per session id; implementations only need to be
/// safe for concurrent access across different ids.
pub trait SessionRepository: Send + Sync {
    /// Load a session record by id.
    fn get(&self, session_id: &str) -> Result<Option<SessionRecord>>;

    /// Insert or replace a session record.
    fn put(&self, session_id: &str, record: SessionRecord) -> Result<()>;

    /// Remove a session record. Returns whether a record was removed.
    fn delete(&self, session_id: &str) -> Result<bool>;

    /// Check if a session exists.
    fn exists(&self, session_id: &str) -> bool {
        matches!(self.get(session_id), Ok(Some(_)))
    }

    /// List all stored session ids in ascending order.
    fn list_ids(&self) -> Result<Vec<String>>;
}
