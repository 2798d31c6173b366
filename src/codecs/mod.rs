//! Concrete block codecs and their alphabet variants.
//!
//! Every built-in variant treats NUL as the end marker and CR/LF as
//! ignorable line breaks.

pub mod base32;
pub mod base64;
pub mod hex;

pub use base32::{Base32, Base32Crockford, Base32Hex, Base32Rfc4648};
pub use base64::{Base64, Base64Rfc4648, Base64Url, Base64UrlUnpadded};
pub use hex::{Hex, HexLower, HexUpper};

use crate::core::Symbol;

/// Character classification table for a variant, built at compile time.
pub(crate) type DecodeTable = [Symbol; 256];

/// Builds the table shared by all built-in variants: `symbols` carry their
/// index, `padding` (if any) pads, NUL ends, CR and LF are skipped.
///
/// With `case_insensitive`, the other case of every ASCII letter in
/// `symbols` maps to the same value.
pub(crate) const fn decode_table(
    symbols: &[u8],
    padding: Option<u8>,
    case_insensitive: bool,
) -> DecodeTable {
    let mut table = [Symbol::Invalid; 256];
    table[0] = Symbol::Eof;
    table[b'\r' as usize] = Symbol::Ignore;
    table[b'\n' as usize] = Symbol::Ignore;
    if let Some(pad) = padding {
        table[pad as usize] = Symbol::Padding;
    }

    let mut i = 0;
    while i < symbols.len() {
        let c = symbols[i];
        table[c as usize] = Symbol::Value(i as u8);
        if case_insensitive {
            if c.is_ascii_uppercase() {
                table[c.to_ascii_lowercase() as usize] = Symbol::Value(i as u8);
            } else if c.is_ascii_lowercase() {
                table[c.to_ascii_uppercase() as usize] = Symbol::Value(i as u8);
            }
        }
        i += 1;
    }
    table
}
