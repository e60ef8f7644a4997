use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Packs `have` completed pieces out of `total` into a big-endian bitfield,
/// base64 encoded. Pieces are assumed to complete in order.
///
/// Negative counts yield an empty string. `have` larger than `total` is not
/// rejected; bits past the end of the allocation are dropped.
pub fn make_pieces_bitfield(total: i64, have: i64) -> String {
    if total < 0 || have < 0 {
        return String::new();
    }
    let mut bitfield = vec![0u8; (total as u64).div_ceil(8) as usize];

    let full_bytes = (have / 8) as usize;
    for byte in bitfield.iter_mut().take(full_bytes) {
        *byte = u8::MAX;
    }
    if let Some(byte) = bitfield.get_mut(full_bytes) {
        for i in 0..(have % 8) {
            *byte |= 128u8 >> i;
        }
    }

    STANDARD.encode(bitfield)
}
