use crate::registry::structs::identity_table::IdentityTable;

impl IdentityTable {
    pub fn hash_at(&self, id: i64) -> Option<&str> {
        if id < 1 {
            return None;
        }
        match self.slots.get((id - 1) as usize) {
            Some(hash) if !hash.is_empty() => Some(hash.as_str()),
            _ => None,
        }
    }

    pub fn position_of(&self, hash: &str) -> Option<usize> {
        self.positions.get(hash).copied()
    }

    /// Appends `hash` and returns its new 1-based ID.
    pub fn push(&mut self, hash: String) -> i64 {
        self.slots.push(hash.clone());
        let position = self.slots.len() - 1;
        self.positions.insert(hash, position);
        (position + 1) as i64
    }

    /// Clears the slot for `id`, returning the hash it held.
    pub fn tombstone(&mut self, id: i64) -> Option<String> {
        if id < 1 {
            return None;
        }
        let slot = self.slots.get_mut((id - 1) as usize)?;
        if slot.is_empty() {
            return None;
        }
        let hash = std::mem::take(slot);
        self.positions.remove(&hash);
        Some(hash)
    }
}
