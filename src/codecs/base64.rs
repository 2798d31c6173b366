//! Base64: three bytes become four 6-bit symbols.

use super::{DecodeTable, decode_table};
use crate::core::{AlphabetVariant, BlockCodec, Sink, Symbol};
use crate::errors::DecodeError;

const STANDARD_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// The base64 block codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

/// RFC 4648 section 4: `+` and `/`, padded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Rfc4648;

/// RFC 4648 section 5: `-` and `_`, padded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Url;

/// URL-safe alphabet without padding; trailing `=` is still accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64UrlUnpadded;

impl Base64Rfc4648 {
    const TABLE: DecodeTable = decode_table(STANDARD_SYMBOLS, Some(b'='), false);
}

impl Base64Url {
    const TABLE: DecodeTable = decode_table(URL_SAFE_SYMBOLS, Some(b'='), false);
}

impl AlphabetVariant for Base64Rfc4648 {
    const SYMBOLS: &'static [u8] = STANDARD_SYMBOLS;
    const REQUIRES_PADDING: bool = true;
    const GENERATES_PADDING: bool = true;

    #[inline]
    fn index_of(c: u8) -> Symbol {
        Self::TABLE[c as usize]
    }
}

impl AlphabetVariant for Base64Url {
    const SYMBOLS: &'static [u8] = URL_SAFE_SYMBOLS;
    const REQUIRES_PADDING: bool = true;
    const GENERATES_PADDING: bool = true;

    #[inline]
    fn index_of(c: u8) -> Symbol {
        Self::TABLE[c as usize]
    }
}

impl AlphabetVariant for Base64UrlUnpadded {
    const SYMBOLS: &'static [u8] = URL_SAFE_SYMBOLS;
    const REQUIRES_PADDING: bool = false;
    const GENERATES_PADDING: bool = false;

    #[inline]
    fn index_of(c: u8) -> Symbol {
        Base64Url::TABLE[c as usize]
    }
}

impl<V: AlphabetVariant> BlockCodec<V> for Base64 {
    const BINARY_BLOCK_SIZE: usize = 3;
    const ENCODED_BLOCK_SIZE: usize = 4;

    #[inline]
    fn encode_block<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]) {
        out.put(state, V::symbol(src[0] >> 2));
        out.put(state, V::symbol(((src[0] & 0x03) << 4) | (src[1] >> 4)));
        out.put(state, V::symbol(((src[1] & 0x0f) << 2) | (src[2] >> 6)));
        out.put(state, V::symbol(src[2] & 0x3f));
    }

    fn encode_tail<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]) {
        out.put(state, V::symbol(src[0] >> 2));
        match src {
            [a] => out.put(state, V::symbol((a & 0x03) << 4)),
            [a, b] => {
                out.put(state, V::symbol(((a & 0x03) << 4) | (b >> 4)));
                out.put(state, V::symbol((b & 0x0f) << 2));
            }
            _ => unreachable!("base64 tail of {} bytes", src.len()),
        }
    }

    #[inline]
    fn decode_block<O: Sink>(out: &mut O, state: &mut O::State, idx: &[u8]) {
        out.put(state, (idx[0] << 2) | (idx[1] >> 4));
        out.put(state, (idx[1] << 4) | (idx[2] >> 2));
        out.put(state, (idx[2] << 6) | idx[3]);
    }

    fn decode_tail<O: Sink>(
        out: &mut O,
        state: &mut O::State,
        idx: &[u8],
    ) -> Result<(), DecodeError> {
        match idx {
            [a, b] => out.put(state, (a << 2) | (b >> 4)),
            [a, b, c] => {
                out.put(state, (a << 2) | (b >> 4));
                out.put(state, (b << 4) | (c >> 2));
            }
            _ => {
                return Err(DecodeError::invalid_length(
                    idx.len(),
                    "a base64 block ends with 2 or 3 symbols before its padding",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{BASE64, BASE64_URL, BASE64_URL_UNPADDED};

    // RFC 4648 section 10 test vectors.
    const VECTORS: &[(&str, &str)] = &[
        ("", ""),
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foob", "Zm9vYg=="),
        ("fooba", "Zm9vYmE="),
        ("foobar", "Zm9vYmFy"),
    ];

    #[test]
    fn test_rfc4648_vectors() {
        for (plain, encoded) in VECTORS {
            assert_eq!(BASE64.encode(plain.as_bytes()), *encoded);
            assert_eq!(BASE64.decode(encoded).unwrap(), plain.as_bytes());
        }
    }

    #[test]
    fn test_url_alphabet() {
        let data = [0xfb, 0xff, 0xfe];
        assert_eq!(BASE64.encode(&data), "+//+");
        assert_eq!(BASE64_URL.encode(&data), "-__-");
        assert_eq!(BASE64_URL.decode("-__-").unwrap(), data);
        assert!(matches!(
            BASE64_URL.decode("+//+"),
            Err(DecodeError::InvalidCharacter { byte: b'+', position: 0 })
        ));
    }

    #[test]
    fn test_unpadded_variant() {
        assert_eq!(BASE64_URL_UNPADDED.encode(b"f"), "Zg");
        assert_eq!(BASE64_URL_UNPADDED.encode(b"fo"), "Zm8");
        assert_eq!(BASE64_URL_UNPADDED.decode("Zm8").unwrap(), b"fo");
        // Padding is optional, not forbidden.
        assert_eq!(BASE64_URL_UNPADDED.decode("Zm8=").unwrap(), b"fo");
        assert_eq!(BASE64_URL_UNPADDED.decode("Zg=").unwrap(), b"f");
    }

    #[test]
    fn test_missing_padding_rejected() {
        assert!(matches!(
            BASE64.decode("Zm8"),
            Err(DecodeError::InvalidPadding { .. })
        ));
        assert!(matches!(
            BASE64.decode("Zg="),
            Err(DecodeError::InvalidPadding { .. })
        ));
    }

    #[test]
    fn test_data_after_padding_rejected() {
        assert_eq!(
            BASE64.decode("AB==C"),
            Err(DecodeError::InvalidPadding { position: 4 })
        );
    }

    #[test]
    fn test_excess_padding_rejected() {
        assert_eq!(
            BASE64.decode("Zg==="),
            Err(DecodeError::InvalidPadding { position: 4 })
        );
    }

    #[test]
    fn test_padding_after_whole_blocks() {
        assert_eq!(BASE64.decode("AQID==").unwrap(), [1, 2, 3]);
        assert_eq!(BASE64.decode("AQID====").unwrap(), [1, 2, 3]);
        assert_eq!(BASE64_URL_UNPADDED.decode("AQID=").unwrap(), [1, 2, 3]);
        assert_eq!(
            BASE64.decode("AQID====="),
            Err(DecodeError::InvalidPadding { position: 8 })
        );
    }

    #[test]
    fn test_stray_byte_inside_padding() {
        assert_eq!(
            BASE64.decode("Zg=%="),
            Err(DecodeError::InvalidPadding { position: 3 })
        );
        assert_eq!(BASE64.decode("Zg=\r\n=").unwrap(), b"f");
    }

    #[test]
    fn test_single_symbol_tail_rejected() {
        assert!(matches!(
            BASE64_URL_UNPADDED.decode("Zm9vY"),
            Err(DecodeError::InvalidLength { actual: 1, .. })
        ));
        assert!(matches!(
            BASE64.decode("Zm9vY==="),
            Err(DecodeError::InvalidLength { actual: 1, .. })
        ));
    }

    #[test]
    fn test_end_marker_ignores_rest() {
        assert_eq!(
            BASE64.decode("AQID\0garbage").unwrap(),
            BASE64.decode("AQID").unwrap()
        );
        assert_eq!(BASE64.decode("AQID\0garbage").unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_line_breaks_ignored() {
        assert_eq!(BASE64.decode("Zm9v\r\nYmFy\n").unwrap(), b"foobar");
        assert_eq!(BASE64.decode("Zm\n9vYg=\n=\n").unwrap(), b"foob");
    }

    #[test]
    fn test_rejects_whitespace_other_than_line_breaks() {
        assert_eq!(
            BASE64.decode("Zm9v YmFy"),
            Err(DecodeError::InvalidCharacter { byte: b' ', position: 4 })
        );
    }
}
