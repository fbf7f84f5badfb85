//! Trash2Cash ledger engine.
//!
//! A single-threaded, synchronous core: pure transition functions over a
//! [`Snapshot`] (listings + transaction history + wallet), plus read-only
//! analytics, filtering and CSV export. The hosting UI owns the snapshot
//! and replaces it wholesale after each operation; nothing here persists
//! state or touches the network.

pub use error::EngineError;
pub use ledger::listing_credits;
pub use snapshot::Snapshot;
pub use tokens::Tokens;

pub mod analytics;
pub mod export;
pub mod filter;

mod error;
mod ledger;
mod snapshot;
mod tokens;

pub type ResultEngine<T> = Result<T, EngineError>;
