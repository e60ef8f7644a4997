//! Identity registry.
//!
//! Transmission clients address torrents by small integer IDs while the
//! backend only knows content hashes. The registry hands out 1-based IDs in
//! the order hashes are first observed and keeps them stable for the lifetime
//! of the process.
//!
//! # Guarantees
//!
//! - A hash keeps the ID it was first given until it is forgotten.
//! - Forgetting tombstones the slot: the position stays, its hash is cleared,
//!   and the ID is never handed to another hash.
//! - The table only grows; `reconcile` is the only way new slots appear.
//!
//! # Concurrency
//!
//! The table lives behind a single `parking_lot::RwLock`. Lookups take the
//! read lock, `reconcile` and `forget` hold the write lock for the whole
//! read-modify-write so concurrent reconciliations never skip or duplicate IDs.

/// Error types for registry lookups.
pub mod errors;

/// Registry data structures.
pub mod structs;

/// Implementation blocks for the registry.
pub mod impls;
