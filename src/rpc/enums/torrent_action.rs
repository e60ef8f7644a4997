#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorrentAction {
    Stop,
    Start,
    Verify,
}
