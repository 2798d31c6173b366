//! Base16: every byte becomes two 4-bit symbols, high nibble first.

use super::{DecodeTable, decode_table};
use crate::core::{AlphabetVariant, BlockCodec, Sink, Symbol};
use crate::errors::DecodeError;

const LOWER_SYMBOLS: &[u8; 16] = b"0123456789abcdef";
const UPPER_SYMBOLS: &[u8; 16] = b"0123456789ABCDEF";

/// The base16 block codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

/// Emits lowercase digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexLower;

/// Emits uppercase digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexUpper;

// Both variants read either case.
const TABLE: DecodeTable = decode_table(LOWER_SYMBOLS, None, true);

impl AlphabetVariant for HexLower {
    const SYMBOLS: &'static [u8] = LOWER_SYMBOLS;
    const REQUIRES_PADDING: bool = false;
    const GENERATES_PADDING: bool = false;

    #[inline]
    fn index_of(c: u8) -> Symbol {
        TABLE[c as usize]
    }
}

impl AlphabetVariant for HexUpper {
    const SYMBOLS: &'static [u8] = UPPER_SYMBOLS;
    const REQUIRES_PADDING: bool = false;
    const GENERATES_PADDING: bool = false;

    #[inline]
    fn index_of(c: u8) -> Symbol {
        TABLE[c as usize]
    }
}

impl<V: AlphabetVariant> BlockCodec<V> for Hex {
    const BINARY_BLOCK_SIZE: usize = 1;
    const ENCODED_BLOCK_SIZE: usize = 2;

    #[inline]
    fn encode_block<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]) {
        out.put(state, V::symbol(src[0] >> 4));
        out.put(state, V::symbol(src[0] & 0x0f));
    }

    fn encode_tail<O: Sink>(_out: &mut O, _state: &mut O::State, src: &[u8]) {
        unreachable!("single-byte blocks leave no tail, got {} bytes", src.len());
    }

    #[inline]
    fn decode_block<O: Sink>(out: &mut O, state: &mut O::State, idx: &[u8]) {
        out.put(state, (idx[0] << 4) | idx[1]);
    }

    fn decode_tail<O: Sink>(
        _out: &mut O,
        _state: &mut O::State,
        idx: &[u8],
    ) -> Result<(), DecodeError> {
        Err(DecodeError::invalid_length(
            idx.len(),
            "hex input needs an even number of digits",
        ))
    }
}
