//! Packing text into fixed-width cipher inputs and back.

use thiserror::Error;

/// Errors that can occur when packing text into a fixed number of bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// Occurs when the UTF-8 encoding of the text does not fit.
    #[error("text is {length} bytes long, but only {capacity} bytes fit")]
    TooLong {
        /// UTF-8 length of the rejected text.
        length: usize,
        /// Number of bytes available.
        capacity: usize,
    },
}

/// Packs the UTF-8 bytes of `text` into exactly `N` bytes.
///
/// The bytes are right-aligned and zero-padded on the left, which is the
/// same as reading the text as one big-endian integer.
pub fn pack_text<const N: usize>(text: &str) -> Result<[u8; N], TextError> {
    let bytes = text.as_bytes();
    if bytes.len() > N {
        return Err(TextError::TooLong {
            length: bytes.len(),
            capacity: N,
        });
    }

    let mut packed = [0u8; N];
    packed[N - bytes.len()..].copy_from_slice(bytes);

    Ok(packed)
}

/// Decodes packed bytes back into text, one character per byte.
///
/// Leading zero bytes are padding and are dropped. Bytes are mapped to
/// the first 256 code points, so any block can be shown, not only valid
/// UTF-8.
pub fn unpack_text(bytes: &[u8]) -> String {
    let start = bytes
        .iter()
        .position(|&byte| byte != 0)
        .unwrap_or(bytes.len());

    bytes[start..].iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_text_exact_fit() {
        let packed = pack_text::<8>("DHHUTECH").expect("8 ASCII bytes fit in a block");
        assert_eq!(&packed, b"DHHUTECH");
    }

    #[test]
    fn test_pack_text_pads_on_the_left() {
        let packed = pack_text::<8>("HI").expect("Short text should fit");
        assert_eq!(packed, [0, 0, 0, 0, 0, 0, b'H', b'I']);
    }

    #[test]
    fn test_pack_text_rejects_long_text() {
        let err = pack_text::<8>("DHHUTECH!").expect_err("Expected TooLong");
        assert_eq!(
            err,
            TextError::TooLong {
                length: 9,
                capacity: 8
            }
        );
    }

    #[test]
    fn test_pack_text_counts_utf8_bytes() {
        // "é" takes two bytes in UTF-8
        let err = pack_text::<8>("ééééé").expect_err("Expected TooLong");
        assert!(matches!(err, TextError::TooLong { length: 10, .. }));
    }

    #[test]
    fn test_unpack_text_drops_padding() {
        assert_eq!(unpack_text(&[0, 0, 0, 0, 0, 0, b'H', b'I']), "HI");
        assert_eq!(unpack_text(b"DHHUTECH"), "DHHUTECH");
    }

    #[test]
    fn test_unpack_text_of_all_zero_bytes_is_empty() {
        assert_eq!(unpack_text(&[0; 8]), "");
    }

    #[test]
    fn test_unpack_text_keeps_non_ascii_bytes() {
        assert_eq!(unpack_text(&[0xB6, 0x41]), "\u{B6}A");
    }
}
