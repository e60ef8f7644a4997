use serde_json::{Map, Value};
use crate::metainfo::structs::magnet_link::MagnetLink;
use crate::rpc::enums::add_source::AddSource;
use crate::rpc::errors::RpcError;

impl AddSource {
    /// `metainfo` wins over `filename` when a client sends both.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<AddSource, RpcError> {
        if let Some(metainfo) = arguments.get("metainfo") {
            return match metainfo.as_str() {
                Some(metainfo) => Ok(AddSource::Metainfo(metainfo.to_string())),
                None => Err(RpcError::invalid_argument("metainfo", "expected a base64 string")),
            };
        }

        let filename = match arguments.get("filename") {
            None => return Err(RpcError::MalformedRequest(String::from("torrent-add needs either 'metainfo' or 'filename'"))),
            Some(filename) => filename.as_str()
                .ok_or_else(|| RpcError::invalid_argument("filename", "expected a string"))?,
        };

        if MagnetLink::is_magnet(filename) {
            Ok(AddSource::Magnet(filename.to_string()))
        } else if filename.starts_with("http://") || filename.starts_with("https://") {
            Ok(AddSource::Url(filename.to_string()))
        } else {
            Err(RpcError::invalid_argument("filename", "only magnet links and HTTP(S) URLs are supported"))
        }
    }
}
