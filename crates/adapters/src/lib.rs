//! blucky adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `kv`: SQLite key-value store for analytics and linked accounts
//! - `store`: in-memory profile store and the Sui JSON-RPC profile reader
//! - `outbox`: JSONL outbox that records profile mutations for an external signer

mod kv_sqlite;
pub mod outbox;
mod store_memory;

pub mod sui_rpc;

/// Re-exports for key-value adapters
pub mod kv {
    pub use crate::kv_sqlite::SqliteKvStore;
}

/// Re-exports for profile store adapters
pub mod store {
    pub use crate::store_memory::InMemoryProfileStore;
    pub use crate::sui_rpc::SuiRpcReader;
}
