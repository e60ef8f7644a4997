use thiserror::Error;
use crate::backend::errors::BackendError;
use crate::metainfo::errors::MetainfoError;

/// Failure of a single RPC call. The message becomes the `result` string of the reply.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("{0}")]
    UnsupportedRequest(String),

    #[error("Torrent-add timeout")]
    AddTimeout,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Metainfo(#[from] MetainfoError),
}

impl RpcError {
    pub fn invalid_argument(name: &str, reason: &str) -> RpcError {
        RpcError::InvalidArgument {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
