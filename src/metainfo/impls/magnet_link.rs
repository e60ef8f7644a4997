use log::debug;
use crate::common::common::parse_query;
use crate::metainfo::errors::MetainfoError;
use crate::metainfo::structs::magnet_link::MagnetLink;

const MAGNET_PREFIX: &str = "magnet:?";
const BTIH_PREFIX: &str = "urn:btih:";
const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Display name used when a magnet link carries no `dn` parameter.
pub const DEFAULT_MAGNET_NAME: &str = "Torrent name";

impl MagnetLink {
    pub fn is_magnet(link: &str) -> bool {
        link.starts_with(MAGNET_PREFIX)
    }

    pub fn parse(link: &str) -> Result<MagnetLink, MetainfoError> {
        let query = link.strip_prefix(MAGNET_PREFIX)
            .ok_or_else(|| MetainfoError::MagnetError(String::from("missing magnet:? prefix")))?;
        let params = parse_query(query).map_err(|e| MetainfoError::MagnetError(e.to_string()))?;
        debug!("[METAINFO] Magnet params decoded: {params:?}");

        let topic = params.get("xt")
            .and_then(|values| values.iter().find_map(|value| {
                if value.get(..BTIH_PREFIX.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(BTIH_PREFIX)) {
                    Some(&value[BTIH_PREFIX.len()..])
                } else {
                    None
                }
            }))
            .ok_or_else(|| MetainfoError::MagnetError(String::from("missing urn:btih topic")))?;

        let info_hash = match topic.len() {
            40 if topic.bytes().all(|c| c.is_ascii_hexdigit()) => topic.to_ascii_lowercase(),
            32 => base32_to_hex(topic)
                .ok_or_else(|| MetainfoError::MagnetError(format!("invalid base32 info hash {topic}")))?,
            _ => return Err(MetainfoError::MagnetError(format!("invalid info hash {topic}"))),
        };

        let display_name = params.get("dn")
            .and_then(|values| values.first())
            .cloned()
            .unwrap_or_else(|| String::from(DEFAULT_MAGNET_NAME));

        let trackers = params.get("tr").cloned().unwrap_or_default();

        Ok(MagnetLink {
            info_hash,
            display_name,
            trackers,
        })
    }
}

/// Decodes a 32 character base32 topic into the 40 character hex form.
fn base32_to_hex(topic: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(20);
    let mut buffer: u64 = 0;
    let mut bits = 0u32;
    for c in topic.bytes() {
        let value = BASE32_ALPHABET.iter().position(|a| *a == c.to_ascii_uppercase())? as u64;
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            bytes.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    Some(hex::encode(bytes))
}
