//! # Database module — SQLite connection pool and migrations
//!
//! All persistent state (users, notes, the purchase ledger and the session
//! table) lives in one SQLite file. The pool is created once at startup from
//! [`crate::settings::Database`] and handed to the web layer's shared state,
//! so tests can run against their own in-memory database.
//!
//! - [`connect`] — opens the pool (creating the file if needed, foreign keys on).
//! - [`migrate`] — applies the embedded migrations in `migrations/`.
//! - [`in_memory`] — a single-connection in-memory pool with migrations applied.

mod pool;

pub use pool::{connect, in_memory, migrate};
