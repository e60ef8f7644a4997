//! Registry data structures.

/// Shared, lock-guarded hash ⇄ ID table.
pub mod identity_registry;

/// Unlocked table contents guarded by the registry.
pub mod identity_table;
