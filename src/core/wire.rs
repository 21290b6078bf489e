//! Big-endian wire primitives shared by every extension codec.
//!
//! Readers take a buffer and a cursor offset and return the value together
//! with the advanced offset. Every read is bounds-checked.

use super::error::{DecodeError, EncodeError};

/// Width of a length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrefixWidth {
    /// 1-byte prefix (max 255).
    U8 = 1,
    /// 2-byte big-endian prefix (max 65535).
    U16 = 2,
}

impl PrefixWidth {
    /// Prefix size in bytes.
    pub fn size(self) -> usize {
        self as usize
    }

    /// Largest length representable by this prefix.
    pub fn max_len(self) -> usize {
        match self {
            Self::U8 => u8::MAX as usize,
            Self::U16 => u16::MAX as usize,
        }
    }
}

fn ensure(buf: &[u8], offset: usize, needed: usize) -> Result<(), DecodeError> {
    let remaining = buf.len().saturating_sub(offset);
    if offset > buf.len() || remaining < needed {
        return Err(DecodeError::Truncated { needed, remaining });
    }
    Ok(())
}

/// Encode a u16 as 2 big-endian bytes.
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Read a single byte at `offset`.
pub fn decode_u8(buf: &[u8], offset: usize) -> Result<(u8, usize), DecodeError> {
    ensure(buf, offset, 1)?;
    Ok((buf[offset], offset + 1))
}

/// Read a big-endian u16 at `offset`.
pub fn decode_u16(buf: &[u8], offset: usize) -> Result<(u16, usize), DecodeError> {
    ensure(buf, offset, 2)?;
    Ok((u16::from_be_bytes([buf[offset], buf[offset + 1]]), offset + 2))
}

/// Borrow `len` raw bytes at `offset`.
pub fn take(buf: &[u8], offset: usize, len: usize) -> Result<(&[u8], usize), DecodeError> {
    ensure(buf, offset, len)?;
    Ok((&buf[offset..offset + len], offset + len))
}

/// Append a length prefix of the given width.
pub fn encode_length(width: PrefixWidth, len: usize, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    if len > width.max_len() {
        return Err(EncodeError::LengthOverflow {
            len,
            width: width.size(),
        });
    }
    match width {
        PrefixWidth::U8 => out.push(len as u8),
        PrefixWidth::U16 => out.extend_from_slice(&encode_u16(len as u16)),
    }
    Ok(())
}

/// Read a length prefix of the given width.
pub fn decode_length(
    width: PrefixWidth,
    buf: &[u8],
    offset: usize,
) -> Result<(usize, usize), DecodeError> {
    match width {
        PrefixWidth::U8 => decode_u8(buf, offset).map(|(v, o)| (v as usize, o)),
        PrefixWidth::U16 => decode_u16(buf, offset).map(|(v, o)| (v as usize, o)),
    }
}

/// Append `bytes` preceded by its length.
pub fn encode_length_prefixed(
    width: PrefixWidth,
    bytes: &[u8],
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    encode_length(width, bytes.len(), out)?;
    out.extend_from_slice(bytes);
    Ok(())
}

/// Read a length prefix and borrow that many bytes after it.
pub fn decode_length_prefixed(
    width: PrefixWidth,
    buf: &[u8],
    offset: usize,
) -> Result<(&[u8], usize), DecodeError> {
    let (len, offset) = decode_length(width, buf, offset)?;
    take(buf, offset, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_u16() {
        assert_eq!(encode_u16(0), [0x00, 0x00]);
        assert_eq!(encode_u16(1), [0x00, 0x01]);
        assert_eq!(encode_u16(255), [0x00, 0xFF]);
        assert_eq!(encode_u16(256), [0x01, 0x00]);
        assert_eq!(encode_u16(65535), [0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_u16_advances_offset() {
        let data = [0x00, 0x0A, 0x00, 0x0B, 0x00, 0x0C];

        let (v1, offset) = decode_u16(&data, 0).unwrap();
        let (v2, offset) = decode_u16(&data, offset).unwrap();
        let (v3, offset) = decode_u16(&data, offset).unwrap();

        assert_eq!((v1, v2, v3), (10, 11, 12));
        assert_eq!(offset, 6);
    }

    #[test]
    fn test_decode_u16_truncated() {
        assert_eq!(
            decode_u16(&[0x01], 0),
            Err(DecodeError::Truncated {
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(
            decode_u16(&[0x01, 0x02], 2),
            Err(DecodeError::Truncated {
                needed: 2,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_offset_past_end() {
        assert!(matches!(
            decode_u8(&[0x01], 5),
            Err(DecodeError::Truncated { remaining: 0, .. })
        ));
    }

    #[test]
    fn test_take_offset_past_end() {
        assert_eq!(
            take(&[0x01], 5, 0),
            Err(DecodeError::Truncated {
                needed: 0,
                remaining: 0
            })
        );
        assert_eq!(take(&[0x01], 1, 0), Ok((&[][..], 1)));
    }

    #[test]
    fn test_length_prefixed_u8() {
        let mut out = Vec::new();
        encode_length_prefixed(PrefixWidth::U8, b"h2", &mut out).unwrap();
        assert_eq!(out, [0x02, b'h', b'2']);

        let (bytes, offset) = decode_length_prefixed(PrefixWidth::U8, &out, 0).unwrap();
        assert_eq!(bytes, b"h2");
        assert_eq!(offset, 3);
    }

    #[test]
    fn test_length_prefixed_u16() {
        let mut out = Vec::new();
        encode_length_prefixed(PrefixWidth::U16, &[0xAA; 300], &mut out).unwrap();
        assert_eq!(&out[..2], &[0x01, 0x2C]);
        assert_eq!(out.len(), 302);
    }

    #[test]
    fn test_length_prefixed_overflow() {
        let mut out = Vec::new();
        let result = encode_length_prefixed(PrefixWidth::U8, &[0u8; 256], &mut out);
        assert_eq!(
            result,
            Err(EncodeError::LengthOverflow { len: 256, width: 1 })
        );
    }

    #[test]
    fn test_length_prefixed_truncated_body() {
        // Prefix claims 5 bytes, only 2 follow
        let data = [0x00, 0x05, 0x01, 0x02];
        assert_eq!(
            decode_length_prefixed(PrefixWidth::U16, &data, 0),
            Err(DecodeError::Truncated {
                needed: 5,
                remaining: 2
            })
        );
    }
}
