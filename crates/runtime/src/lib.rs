//! Session runtime for the deterministic horde engine.
//!
//! This crate wraps `game-core` with a keyed session store, per-session
//! serialization of mutations, structured logging and background workers.
//! Consumers create a [`SessionService`] and drive sessions through it.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes errors and the action provider abstraction
//! - [`repository`] provides the session store contract and an in-memory store
//! - [`service`] hosts the session directory itself
//! - [`config`] loads runtime defaults from the environment
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod repository;
pub mod service;

mod workers;

pub use api::{
    ActionProvider, GreedyActionProvider, Result, RuntimeError, WaitActionProvider,
};
pub use config::RuntimeConfig;
pub use repository::{InMemorySessionRepo, RepositoryError, SessionRecord, SessionRepository};
pub use service::SessionService;
pub use workers::{AutoTicker, TickerExit};
