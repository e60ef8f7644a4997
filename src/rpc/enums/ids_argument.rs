use crate::rpc::enums::id_entry::IdEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdsArgument {
    /// `ids` absent or null.
    All,
    /// The `"recently-active"` string; answered like `All`.
    RecentlyActive,
    Single(i64),
    List(Vec<IdEntry>),
}
