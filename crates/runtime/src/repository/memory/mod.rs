//! In-memory repository implementations.

mod session;

pub use session::InMemorySessionRepo;
