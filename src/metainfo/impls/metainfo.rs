use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bip_bencode::{BDecodeOpt, BRefAccess, BencodeRef};
use log::debug;
use sha1::{Digest, Sha1};
use crate::metainfo::errors::MetainfoError;
use crate::metainfo::structs::metainfo::Metainfo;

impl Metainfo {
    pub fn from_bytes(data: &[u8]) -> Result<Metainfo, MetainfoError> {
        let bencode = BencodeRef::decode(data, BDecodeOpt::default())
            .map_err(|e| MetainfoError::BencodeError(e.to_string()))?;
        let root = bencode.dict().ok_or(MetainfoError::MissingInfo)?;
        let info = root.lookup(b"info").ok_or(MetainfoError::MissingInfo)?;
        let info_dict = info.dict().ok_or(MetainfoError::MissingInfo)?;

        let name = info_dict.lookup(b"name.utf-8")
            .or_else(|| info_dict.lookup(b"name"))
            .and_then(|name| name.str())
            .ok_or(MetainfoError::MissingName)?
            .to_string();

        let total_length = match info_dict.lookup(b"length").and_then(|length| length.int()) {
            Some(length) => length,
            None => info_dict.lookup(b"files")
                .and_then(|files| files.list())
                .map(|files| (0..files.len())
                    .filter_map(|index| files.get(index))
                    .filter_map(|file| file.dict())
                    .filter_map(|file| file.lookup(b"length").and_then(|length| length.int()))
                    .sum())
                .unwrap_or(0),
        };

        let info_hash = hex::encode(Sha1::digest(info.buffer()));
        debug!("[METAINFO] Decoded {} bytes: {info_hash} \"{name}\" ({total_length} bytes of content)", data.len());

        Ok(Metainfo {
            info_hash,
            name,
            total_length,
        })
    }

    /// Decodes the base64 `metainfo` argument of `torrent-add`.
    pub fn from_base64(encoded: &str) -> Result<(Metainfo, Vec<u8>), MetainfoError> {
        let cleaned: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let data = STANDARD.decode(cleaned)?;
        let metainfo = Metainfo::from_bytes(&data)?;
        Ok((metainfo, data))
    }
}
