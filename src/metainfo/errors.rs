use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetainfoError {
    #[error("invalid or corrupt torrent file: {0}")]
    BencodeError(String),

    #[error("invalid or corrupt torrent file: missing info dictionary")]
    MissingInfo,

    #[error("invalid or corrupt torrent file: missing name")]
    MissingName,

    #[error("invalid or corrupt torrent file: {0}")]
    Base64Error(String),

    #[error("invalid magnet link: {0}")]
    MagnetError(String),
}

impl From<base64::DecodeError> for MetainfoError {
    fn from(error: base64::DecodeError) -> Self {
        MetainfoError::Base64Error(error.to_string())
    }
}
