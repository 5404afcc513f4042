//! Persistence for quiz results.
//!
//! Every backend implements [`ResultStore`]: append a record unless its
//! identity already has one, list everything, and remove all records for
//! one agent. The leaderboard is always computed from the full list.
//!
//! ```text
//! QuizSession --(StoreResultSink)--+
//!                                  +--> Arc<dyn ResultStore>
//! HTTP API ------------------------+        |-- MemoryResultStore
//!                                           |-- FileResultStore (JSON array)
//!                                           +-- KvResultStore   (Dragonfly hash)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- The [`ResultStore`] trait
//! - [`memory_store`] -- In-memory backend
//! - [`file_store`] -- JSON file backend
//! - [`kv_store`] -- `Dragonfly` backend
//! - [`dragonfly`] -- `Dragonfly` (Redis-compatible) connection and hash operations
//! - [`leaderboard`] -- Per-agent counts
//! - [`sink`] -- Quiz result sink over a store
//! - [`error`] -- Shared error types

pub mod dragonfly;
pub mod error;
pub mod file_store;
pub mod kv_store;
pub mod leaderboard;
pub mod memory_store;
pub mod sink;
pub mod store;

// Re-export primary types for convenience.
pub use dragonfly::DragonflyPool;
pub use error::DbError;
pub use file_store::FileResultStore;
pub use kv_store::{DEFAULT_RESULTS_KEY, KvResultStore};
pub use leaderboard::build_leaderboard;
pub use memory_store::MemoryResultStore;
pub use sink::StoreResultSink;
pub use store::{AppendOutcome, ResultStore};
