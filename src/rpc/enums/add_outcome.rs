use crate::rpc::structs::added_torrent::AddedTorrent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(AddedTorrent),
    /// The hash was already known; nothing was submitted.
    Duplicate(AddedTorrent),
    TimedOut,
}
