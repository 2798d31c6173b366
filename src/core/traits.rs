use super::sink::Sink;
use crate::errors::DecodeError;

/// Largest encoded block any codec may declare.
///
/// The decode loop assembles blocks in a stack array of this size.
pub const MAX_ENCODED_BLOCK_SIZE: usize = 8;

/// Classification of a single encoded input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A data symbol carrying a value in `0..alphabet size`.
    Value(u8),
    /// Filler that is skipped without occupying a block position.
    Ignore,
    /// The padding symbol used to fill the final block.
    Padding,
    /// End marker: decoding stops here and the rest of the input is left alone.
    Eof,
    /// Not part of the encoding.
    Invalid,
}

/// Character policy for one textual alphabet.
///
/// A variant decides which symbol carries which value, which characters are
/// skipped, what padding looks like and whether padding is mandatory.
pub trait AlphabetVariant {
    /// Data symbols in value order.
    const SYMBOLS: &'static [u8];

    /// Emitted by [`BlockCodec::pad`] when [`Self::GENERATES_PADDING`] is set.
    const PADDING_SYMBOL: u8 = b'=';

    /// Decoding rejects a final block that is not filled up with padding.
    const REQUIRES_PADDING: bool;

    /// Encoding fills the final block with padding symbols.
    const GENERATES_PADDING: bool;

    /// Classifies one input character.
    fn index_of(c: u8) -> Symbol;

    /// Returns the symbol for a value in `0..SYMBOLS.len()`.
    #[inline]
    fn symbol(index: u8) -> u8 {
        Self::SYMBOLS[index as usize]
    }

    #[inline]
    fn should_ignore(symbol: Symbol) -> bool {
        symbol == Symbol::Ignore
    }

    /// Padding and end markers both end the data portion of the input.
    #[inline]
    fn is_special_character(symbol: Symbol) -> bool {
        matches!(symbol, Symbol::Padding | Symbol::Eof)
    }

    #[inline]
    fn is_padding_symbol(symbol: Symbol) -> bool {
        symbol == Symbol::Padding
    }

    #[inline]
    fn is_eof(symbol: Symbol) -> bool {
        symbol == Symbol::Eof
    }

    #[inline]
    fn requires_padding() -> bool {
        Self::REQUIRES_PADDING
    }

    #[inline]
    fn generates_padding() -> bool {
        Self::GENERATES_PADDING
    }
}

/// Block arithmetic for one encoding family, parameterized by the variant
/// that supplies its symbols.
///
/// `encode_block` consumes exactly `BINARY_BLOCK_SIZE` bytes and
/// `decode_block` exactly `ENCODED_BLOCK_SIZE` values. Tails are strictly
/// shorter than a block and never empty.
pub trait BlockCodec<V: AlphabetVariant> {
    /// Raw bytes per block.
    const BINARY_BLOCK_SIZE: usize;

    /// Symbols per block.
    const ENCODED_BLOCK_SIZE: usize;

    fn encode_block<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]);

    fn encode_tail<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]);

    /// Appends the padding that completes a block whose tail held
    /// `remaining` bytes.
    ///
    /// The default fits every codec whose symbols carry a fixed number of
    /// bits: the tail produced `ceil(remaining * E / B)` symbols.
    fn pad<O: Sink>(out: &mut O, state: &mut O::State, remaining: usize) {
        let emitted = (remaining * Self::ENCODED_BLOCK_SIZE).div_ceil(Self::BINARY_BLOCK_SIZE);
        for _ in emitted..Self::ENCODED_BLOCK_SIZE {
            out.put(state, V::PADDING_SYMBOL);
        }
    }

    fn decode_block<O: Sink>(out: &mut O, state: &mut O::State, idx: &[u8]);

    /// Decodes the values of an incomplete final block.
    ///
    /// Fails with [`DecodeError::InvalidLength`] when `idx.len()` symbols
    /// cannot carry a whole number of bytes.
    fn decode_tail<O: Sink>(out: &mut O, state: &mut O::State, idx: &[u8])
    -> Result<(), DecodeError>;
}
