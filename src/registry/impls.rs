//! Implementation blocks for the registry.

/// Lookup, reconciliation and tombstoning.
pub mod identity_registry;

/// Slot bookkeeping used under the registry lock.
pub mod identity_table;
