use std::fmt;

use num_enum::TryFromPrimitive;

/// CRC-32 (IEEE) of `data`, identical to zlib's `crc32`.
#[inline]
pub fn compute_crc32(data: &[u8]) -> u32 {
    use crc32fast::Hasher;
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Printable form of a magic or marker: quoted when ASCII, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// First `max` bytes of the UTF-8 encoding of `name`.
///
/// The cut is made on encoded bytes, so a multi-byte character straddling
/// the limit is split. Readers drop the dangling fragment, see
/// [`decode_filename`].
#[inline]
pub fn truncate_filename(name: &str, max: usize) -> &[u8] {
    let bytes = name.as_bytes();
    &bytes[..bytes.len().min(max)]
}

/// Decode stored filename bytes.
///
/// An incomplete sequence at the very end is the remainder of a split
/// character and is dropped. Any other invalid sequence becomes U+FFFD.
pub fn decode_filename(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(e) if e.error_len().is_none() => {
            String::from_utf8_lossy(&bytes[..e.valid_up_to()]).into_owned()
        }
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Smallest `w` with `w * w >= n`.
pub fn ceil_sqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut w = (n as f64).sqrt() as u64;
    // Float estimate can be off by one either way for large n.
    while w.saturating_mul(w) < n {
        w += 1;
    }
    while w > 1 && (w - 1).saturating_mul(w - 1) >= n {
        w -= 1;
    }
    w
}
