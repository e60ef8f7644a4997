use log::debug;
use crate::registry::errors::RegistryError;
use crate::registry::structs::identity_registry::IdentityRegistry;

impl IdentityRegistry {
    pub fn new() -> IdentityRegistry {
        IdentityRegistry::default()
    }

    /// Hash stored for `id`, or `None` when the slot is tombstoned or out of range.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve(&self, id: i64) -> Option<String> {
        let lock = self.table.read();
        lock.hash_at(id).map(str::to_string)
    }

    /// Every live ID in ascending order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve_all(&self) -> Vec<i64> {
        let lock = self.table.read();
        lock.slots.iter()
            .enumerate()
            .filter(|(_, hash)| !hash.is_empty())
            .map(|(position, _)| (position + 1) as i64)
            .collect()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn id_of(&self, hash: &str) -> Result<i64, RegistryError> {
        let hash = hash.to_ascii_lowercase();
        let lock = self.table.read();
        match lock.position_of(&hash) {
            Some(position) => Ok((position + 1) as i64),
            None => Err(RegistryError::NotFound(hash)),
        }
    }

    /// Assigns IDs to every hash of `live_hashes` not seen before.
    ///
    /// Returns exactly the hashes that received an ID during this call, in
    /// the order they were assigned. Duplicates inside `live_hashes` count once.
    #[tracing::instrument(level = "debug", skip(self, live_hashes))]
    pub fn reconcile<I, S>(&self, live_hashes: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut newly_assigned = Vec::new();
        let mut lock = self.table.write();
        for hash in live_hashes {
            let hash = hash.as_ref().to_ascii_lowercase();
            if hash.is_empty() || lock.position_of(&hash).is_some() {
                continue;
            }
            let id = lock.push(hash.clone());
            debug!("[REGISTRY] Assigned ID {id} to {hash}");
            newly_assigned.push(hash);
        }
        newly_assigned
    }

    /// Tombstones `id`; the position is kept and never reassigned.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn forget(&self, id: i64) -> Option<String> {
        let mut lock = self.table.write();
        let forgotten = lock.tombstone(id);
        if let Some(hash) = &forgotten {
            debug!("[REGISTRY] Forgot ID {id} ({hash})");
        }
        forgotten
    }

    /// Number of slots, tombstones included.
    pub fn len(&self) -> usize {
        self.table.read().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().slots.is_empty()
    }
}
