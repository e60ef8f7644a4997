use parking_lot::RwLock;
use crate::registry::structs::identity_table::IdentityTable;

/// Bidirectional mapping between backend hashes and Transmission IDs.
///
/// Shared between request handlers behind an `Arc`; every operation goes
/// through the inner lock.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    pub(crate) table: RwLock<IdentityTable>,
}
