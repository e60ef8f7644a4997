use std::collections::HashMap;

/// Slot `n` holds the hash for ID `n + 1`; an empty string is a tombstone.
#[derive(Debug, Default, Clone)]
pub struct IdentityTable {
    pub(crate) slots: Vec<String>,
    pub(crate) positions: HashMap<String, usize>,
}
