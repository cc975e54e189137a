//! Repository layer for live session data.
//!
//! Repositories hold the snapshots that CHANGE during gameplay. The rules and
//! static map live in `game-core`; only the per-session state is stored here.

mod error;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use memory::InMemorySessionRepo;
pub use traits::SessionRepository;
pub use types::SessionRecord;
