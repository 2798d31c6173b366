use std::marker::PhantomData;

use super::sink::Sink;
use super::traits::{AlphabetVariant, BlockCodec, MAX_ENCODED_BLOCK_SIZE, Symbol};
use crate::errors::DecodeError;

/// Drives a [`BlockCodec`] over a whole buffer in both directions.
///
/// The driver owns no state; everything lives in the locals of one call.
pub struct StreamCodec<C, V> {
    _marker: PhantomData<fn() -> (C, V)>,
}

impl<C, V> StreamCodec<C, V>
where
    C: BlockCodec<V>,
    V: AlphabetVariant,
{
    const BINARY_BLOCK: usize = C::BINARY_BLOCK_SIZE;
    const ENCODED_BLOCK: usize = C::ENCODED_BLOCK_SIZE;

    /// Evaluated at monomorphization: a codec with impossible block sizes
    /// does not compile.
    const VALID_BLOCK_SIZES: () = {
        assert!(C::BINARY_BLOCK_SIZE > 0, "binary block size must be positive");
        assert!(
            C::BINARY_BLOCK_SIZE <= C::ENCODED_BLOCK_SIZE,
            "encoded blocks must not be shorter than binary blocks"
        );
        assert!(
            C::ENCODED_BLOCK_SIZE <= MAX_ENCODED_BLOCK_SIZE,
            "encoded block size exceeds the decode buffer"
        );
    };

    /// Encodes `src` into `out`, padding the final block if the variant
    /// generates padding.
    pub fn encode<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]) {
        let () = Self::VALID_BLOCK_SIZES;

        let mut blocks = src.chunks_exact(Self::BINARY_BLOCK);
        for block in &mut blocks {
            C::encode_block(out, state, block);
        }

        let tail = blocks.remainder();
        if !tail.is_empty() {
            debug_assert!(tail.len() < Self::BINARY_BLOCK);
            C::encode_tail(out, state, tail);
            if V::generates_padding() {
                C::pad(out, state, tail.len());
            }
        }
    }

    /// Decodes `src` into `out`.
    ///
    /// Ignorable characters are skipped anywhere. An end marker stops
    /// decoding successfully and leaves the rest of `src` unread. Bytes of
    /// complete blocks already written to `out` stay there when an error is
    /// returned.
    pub fn decode<O: Sink>(
        out: &mut O,
        state: &mut O::State,
        src: &[u8],
    ) -> Result<(), DecodeError> {
        let () = Self::VALID_BLOCK_SIZES;

        let mut idx = [0u8; MAX_ENCODED_BLOCK_SIZE];
        let mut filled = 0;
        let mut saw_padding = false;
        let mut chars = src.iter().copied().enumerate();

        for (position, c) in chars.by_ref() {
            let symbol = V::index_of(c);
            if V::should_ignore(symbol) {
                continue;
            }
            if V::is_special_character(symbol) {
                saw_padding = V::is_padding_symbol(symbol);
                break;
            }
            let Symbol::Value(value) = symbol else {
                return Err(DecodeError::invalid_character(c, position));
            };

            idx[filled] = value;
            filled += 1;
            if filled == Self::ENCODED_BLOCK {
                C::decode_block(out, state, &idx[..filled]);
                filled = 0;
            }
        }

        // Positions taken by the final block, padding included. Padding that
        // starts a block is still bounded by E but leaves nothing to decode.
        let mut occupied = filled;
        if saw_padding {
            occupied += 1;

            for (position, c) in chars.by_ref() {
                let symbol = V::index_of(c);
                if V::is_eof(symbol) {
                    break;
                }
                if V::should_ignore(symbol) {
                    continue;
                }
                if !V::is_padding_symbol(symbol) {
                    return Err(DecodeError::InvalidPadding { position });
                }
                occupied += 1;
                if occupied > Self::ENCODED_BLOCK {
                    return Err(DecodeError::InvalidPadding { position });
                }
            }
        }

        if filled > 0 {
            if V::requires_padding() && occupied != Self::ENCODED_BLOCK {
                return Err(DecodeError::InvalidPadding {
                    position: src.len(),
                });
            }
            debug_assert!(filled < Self::ENCODED_BLOCK);
            C::decode_tail(out, state, &idx[..filled])?;
        }

        Ok(())
    }

    /// Exact number of symbols [`Self::encode`] emits for `binary_size` bytes.
    pub const fn encoded_size(binary_size: usize) -> usize {
        let n = binary_size as u128;
        let b = Self::BINARY_BLOCK as u128;
        let e = Self::ENCODED_BLOCK as u128;

        let size = if V::GENERATES_PADDING {
            n.div_ceil(b) * e
        } else {
            (n * e).div_ceil(b)
        };
        saturate(size)
    }

    /// Upper bound on the bytes [`Self::decode`] produces from
    /// `encoded_size` characters.
    ///
    /// Overestimates by up to one block when the input carries padding the
    /// formula cannot see.
    pub const fn decoded_max_size(encoded_size: usize) -> usize {
        let m = encoded_size as u128;
        let b = Self::BINARY_BLOCK as u128;
        let e = Self::ENCODED_BLOCK as u128;

        let size = if V::REQUIRES_PADDING {
            m * b / e
        } else {
            (m * b).div_ceil(e)
        };
        saturate(size)
    }
}

/// Sizes past `usize::MAX` clamp instead of wrapping, so bounds never round down.
const fn saturate(size: u128) -> usize {
    if size > usize::MAX as u128 {
        usize::MAX
    } else {
        size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::CountingSink;

    /// Two-byte blocks of four symbols.
    struct Toy;

    /// `a`..`d` carry 0..3, `.` pads, `!` ends, space is ignored.
    struct ToyPadded;

    struct ToyLoose;

    fn toy_index(c: u8) -> Symbol {
        match c {
            b'a'..=b'd' => Symbol::Value(c - b'a'),
            b'.' => Symbol::Padding,
            b'!' => Symbol::Eof,
            b' ' => Symbol::Ignore,
            _ => Symbol::Invalid,
        }
    }

    impl AlphabetVariant for ToyPadded {
        const SYMBOLS: &'static [u8] = b"abcd";
        const PADDING_SYMBOL: u8 = b'.';
        const REQUIRES_PADDING: bool = true;
        const GENERATES_PADDING: bool = true;

        fn index_of(c: u8) -> Symbol {
            toy_index(c)
        }
    }

    impl AlphabetVariant for ToyLoose {
        const SYMBOLS: &'static [u8] = b"abcd";
        const PADDING_SYMBOL: u8 = b'.';
        const REQUIRES_PADDING: bool = false;
        const GENERATES_PADDING: bool = false;

        fn index_of(c: u8) -> Symbol {
            toy_index(c)
        }
    }

    // One byte is two symbols holding its low and high nibble, truncated
    // to two bits each. Only bytes below 16 round-trip; the tests stay
    // inside that range.
    impl<V: AlphabetVariant> BlockCodec<V> for Toy {
        const BINARY_BLOCK_SIZE: usize = 2;
        const ENCODED_BLOCK_SIZE: usize = 4;

        fn encode_block<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]) {
            for &byte in src {
                out.put(state, V::symbol(byte & 3));
                out.put(state, V::symbol((byte >> 2) & 3));
            }
        }

        fn encode_tail<O: Sink>(out: &mut O, state: &mut O::State, src: &[u8]) {
            <Self as BlockCodec<V>>::encode_block(out, state, src);
        }

        fn decode_block<O: Sink>(out: &mut O, state: &mut O::State, idx: &[u8]) {
            for pair in idx.chunks_exact(2) {
                out.put(state, pair[0] | (pair[1] << 2));
            }
        }

        fn decode_tail<O: Sink>(
            out: &mut O,
            state: &mut O::State,
            idx: &[u8],
        ) -> Result<(), DecodeError> {
            if idx.len() % 2 != 0 {
                return Err(DecodeError::invalid_length(idx.len(), "symbols come in pairs"));
            }
            <Self as BlockCodec<V>>::decode_block(out, state, idx);
            Ok(())
        }
    }

    type Padded = StreamCodec<Toy, ToyPadded>;
    type Loose = StreamCodec<Toy, ToyLoose>;

    fn encode_padded(data: &[u8]) -> String {
        let mut out = String::new();
        Padded::encode(&mut out, &mut (), data);
        out
    }

    fn decode_padded(input: &str) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::new();
        Padded::decode(&mut out, &mut (), input.as_bytes())?;
        Ok(out)
    }

    fn decode_loose(input: &str) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::new();
        Loose::decode(&mut out, &mut (), input.as_bytes())?;
        Ok(out)
    }

    #[test]
    fn test_encode_full_blocks_and_padded_tail() {
        assert_eq!(encode_padded(&[]), "");
        assert_eq!(encode_padded(&[1, 2]), "baca");
        assert_eq!(encode_padded(&[5]), "bb..");
        assert_eq!(encode_padded(&[5, 6, 7]), "bbcbdb..");
    }

    #[test]
    fn test_encode_unpadded_tail_is_short() {
        let mut out = String::new();
        Loose::encode(&mut out, &mut (), &[5, 6, 7]);
        assert_eq!(out, "bbcbdb");
    }

    #[test]
    fn test_decode_roundtrip() {
        let data = [0u8, 1, 2, 3, 15, 14, 9];
        assert_eq!(decode_padded(&encode_padded(&data)).unwrap(), data);
    }

    #[test]
    fn test_decode_requires_padding() {
        assert_eq!(
            decode_padded("bbcbdb"),
            Err(DecodeError::InvalidPadding { position: 6 })
        );
        assert_eq!(decode_loose("bbcbdb").unwrap(), vec![5, 6, 7]);
    }

    #[test]
    fn test_data_after_padding_is_rejected() {
        assert_eq!(
            decode_padded("bb.a"),
            Err(DecodeError::InvalidPadding { position: 3 })
        );
    }

    #[test]
    fn test_too_much_padding_is_rejected() {
        assert_eq!(
            decode_padded("bb..."),
            Err(DecodeError::InvalidPadding { position: 4 })
        );
    }

    #[test]
    fn test_padding_after_full_block_is_bounded() {
        assert_eq!(decode_padded("baca....").unwrap(), vec![1, 2]);
        assert_eq!(decode_padded("baca. .").unwrap(), vec![1, 2]);
        assert_eq!(decode_loose("baca.").unwrap(), vec![1, 2]);
        assert_eq!(decode_padded("baca....!junk").unwrap(), vec![1, 2]);
        assert_eq!(
            decode_padded("baca....."),
            Err(DecodeError::InvalidPadding { position: 8 })
        );
        assert_eq!(
            decode_padded("baca..a"),
            Err(DecodeError::InvalidPadding { position: 6 })
        );
    }

    #[test]
    fn test_end_marker_stops_decoding() {
        assert_eq!(decode_padded("bbcb!garbage").unwrap(), vec![5, 6]);
        assert_eq!(decode_padded("bb..!zzz").unwrap(), vec![5]);
        assert_eq!(decode_padded("!").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_ignorable_characters_anywhere() {
        assert_eq!(decode_padded(" b b c b d b . . ").unwrap(), vec![5, 6, 7]);
    }

    #[test]
    fn test_invalid_character_reports_position() {
        assert_eq!(
            decode_padded("bbxa"),
            Err(DecodeError::InvalidCharacter { byte: b'x', position: 2 })
        );
    }

    #[test]
    fn test_anything_but_padding_after_padding_is_a_padding_error() {
        assert_eq!(
            decode_padded("bb.x"),
            Err(DecodeError::InvalidPadding { position: 3 })
        );
        assert_eq!(
            decode_loose("bb.c"),
            Err(DecodeError::InvalidPadding { position: 3 })
        );
    }

    #[test]
    fn test_partial_padding_accepted_when_optional() {
        assert_eq!(decode_loose("bb.").unwrap(), vec![5]);
        assert_eq!(
            decode_loose("b"),
            Err(DecodeError::InvalidLength {
                actual: 1,
                hint: "symbols come in pairs".to_string(),
            })
        );
    }

    #[test]
    fn test_size_formulas() {
        assert_eq!(Padded::encoded_size(0), 0);
        assert_eq!(Padded::encoded_size(1), 4);
        assert_eq!(Padded::encoded_size(2), 4);
        assert_eq!(Padded::encoded_size(3), 8);
        assert_eq!(Loose::encoded_size(3), 6);
        assert_eq!(Padded::decoded_max_size(8), 4);
        assert_eq!(Loose::decoded_max_size(6), 3);
        assert_eq!(Loose::decoded_max_size(5), 3);
    }

    #[test]
    fn test_encoded_size_matches_emitted_symbols() {
        let data = [3u8; 64];
        for n in 0..data.len() {
            let mut padded = 0;
            Padded::encode(&mut CountingSink, &mut padded, &data[..n]);
            assert_eq!(padded, Padded::encoded_size(n));

            let mut loose = 0;
            Loose::encode(&mut CountingSink, &mut loose, &data[..n]);
            assert_eq!(loose, Loose::encoded_size(n));
        }
    }

    #[test]
    fn test_sizes_saturate_instead_of_wrapping() {
        assert_eq!(Padded::encoded_size(usize::MAX), usize::MAX);
        assert_eq!(Loose::encoded_size(usize::MAX), usize::MAX);
        assert_eq!(Loose::encoded_size(usize::MAX / 2 + 1), usize::MAX);
        assert_eq!(Padded::decoded_max_size(usize::MAX), usize::MAX / 2);
        assert_eq!(saturate(u128::from(u64::MAX) + 1), usize::MAX);
    }

    #[test]
    fn test_sizes_are_const() {
        const SIZE: usize = StreamCodec::<Toy, ToyPadded>::encoded_size(5);
        assert_eq!(SIZE, 12);
    }
}
