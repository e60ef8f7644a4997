#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddSource {
    /// Base64 encoded `.torrent` contents.
    Metainfo(String),
    Magnet(String),
    /// HTTP(S) location of a `.torrent` file.
    Url(String),
}
