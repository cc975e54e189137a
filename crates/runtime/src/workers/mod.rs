//! Worker tasks that back the runtime.
//!
//! Workers run on the ambient tokio runtime and talk to sessions only through
//! [`crate::SessionService`], so they obey the same per-session locking as
//! every other caller.

mod ticker;

pub use ticker::{AutoTicker, TickerExit};
