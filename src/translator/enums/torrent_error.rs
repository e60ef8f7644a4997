/// Transmission `tr_stat_errtype`. Only the codes a backend state can produce are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TorrentError {
    Ok = 0,
    LocalError = 3,
}
