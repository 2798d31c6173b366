//! Base32: five bytes become eight 5-bit symbols.

use super::{DecodeTable, decode_table};
use crate::core::{AlphabetVariant, BlockCodec, Sink, Symbol};
use crate::errors::DecodeError;

const RFC4648_SYMBOLS: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const EXTENDED_HEX_SYMBOLS: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";
const CROCKFORD_SYMBOLS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// The base32 block codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32;

/// RFC 4648 section 6, padded. Lowercase input is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32Rfc4648;

/// RFC 4648 section 7 ("base32hex"), padded. Lowercase input is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32Hex;

/// Douglas Crockford's base32: unpadded, case-insensitive, `-` is ignored
/// and the look-alikes `I`, `L` and `O` read as `1`, `1` and `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32Crockford;

impl Base32Rfc4648 {
    const TABLE: DecodeTable = decode_table(RFC4648_SYMBOLS, Some(b'='), true);
}

impl Base32Hex {
    const TABLE: DecodeTable = decode_table(EXTENDED_HEX_SYMBOLS, Some(b'='), true);
}

impl Base32Crockford {
    const TABLE: DecodeTable = {
        let mut table = decode_table(CROCKFORD_SYMBOLS, None, true);
        table[b'-' as usize] = Symbol::Ignore;
        table[b'I' as usize] = Symbol::Value(1);
        table[b'i' as usize] = Symbol::Value(1);
        table[b'L' as usize] = Symbol::Value(1);
        table[b'l' as usize] = Symbol::Value(1);
        table[b'O' as usize] = Symbol::Value(0);
        table[b'o' as usize] = Symbol::Value(0);
        table
    };
}

impl AlphabetVariant for Base32Rfc4648 {
    const SYMBOLS: &'static [u8] = RFC4648_SYMBOLS;
    const REQUIRES_PADDING: bool = true;
    const GENERATES_PADDING: bool = true;

    #[inline]
    fn index_of(c: u8) -> Symbol {
        Self::TABLE[c as usize]
    }
}

impl AlphabetVariant for Base32Hex {
    const SYMBOLS: &'static [u8] = EXTENDED_HEX_SYMBOLS;
    const REQUIRES_PADDING: bool = true;
    const GENERATES_PADDING: bool = true;

    #[inline]
    fn index_of(c: u8) -> Symbol {
        Self::TABLE[c as usize]
    }
}

impl AlphabetVariant for Base32Crockford {
    const SYMBOLS: &'static [u8] = CROCKFORD_SYMBOLS;
    const REQUIRES_PADDING: bool = false;
    const GENERATES_PADDING: bool = false;

    #[inline]
    fn index_of(c: u8) -> Symbol {
        Self::TABLE[c as usize]
    }
}

/// Symbols needed for a tail of `n` bytes: 2, 4, 5 or 7.
const fn tail_symbols(n: usize) -> usize {
    (n * 8).div_ceil(5)
}

impl<V: AlphabetVariant> BlockCodec<V> for Base32 {
    const BINARY_BLOCK_SIZE: usize = 5;
    const ENCODED_BLOCK_SIZE: usize = 8;

    fn encode_block<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]) {
        let bits = src.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        for i in 0..8 {
            out.put(state, V::symbol(((bits >> (35 - 5 * i)) & 0x1f) as u8));
        }
    }

    fn encode_tail<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]) {
        debug_assert!(!src.is_empty() && src.len() < 5);
        let mut block = [0u8; 5];
        block[..src.len()].copy_from_slice(src);
        let bits = block.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        for i in 0..tail_symbols(src.len()) {
            out.put(state, V::symbol(((bits >> (35 - 5 * i)) & 0x1f) as u8));
        }
    }

    fn decode_block<O: Sink>(out: &mut O, state: &mut O::State, idx: &[u8]) {
        let bits = idx.iter().fold(0u64, |acc, &v| (acc << 5) | u64::from(v));
        for i in 0..5 {
            out.put(state, (bits >> (32 - 8 * i)) as u8);
        }
    }

    fn decode_tail<O: Sink>(
        out: &mut O,
        state: &mut O::State,
        idx: &[u8],
    ) -> Result<(), DecodeError> {
        let bytes = idx.len() * 5 / 8;
        if tail_symbols(bytes) != idx.len() {
            return Err(DecodeError::invalid_length(
                idx.len(),
                "a base32 block ends with 2, 4, 5 or 7 symbols before its padding",
            ));
        }

        let bits = idx.iter().fold(0u64, |acc, &v| (acc << 5) | u64::from(v));
        let bits = bits << (5 * (8 - idx.len()));
        for i in 0..bytes {
            out.put(state, (bits >> (32 - 8 * i)) as u8);
        }
        Ok(())
    }
}
