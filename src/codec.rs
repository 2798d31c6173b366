use std::fmt;
use std::marker::PhantomData;

use crate::codecs::{
    Base32, Base32Crockford, Base32Hex, Base32Rfc4648, Base64, Base64Rfc4648, Base64Url,
    Base64UrlUnpadded, Hex, HexLower, HexUpper,
};
use crate::core::{AlphabetVariant, BlockCodec, SliceSink, StreamCodec};
use crate::errors::{BufferTooSmall, DecodeError};

/// Standard base64 with padding.
pub const BASE64: Codec<Base64, Base64Rfc4648> = Codec::new();
/// URL-safe base64 with padding.
pub const BASE64_URL: Codec<Base64, Base64Url> = Codec::new();
/// URL-safe base64 without padding.
pub const BASE64_URL_UNPADDED: Codec<Base64, Base64UrlUnpadded> = Codec::new();
/// Standard base32 with padding.
pub const BASE32: Codec<Base32, Base32Rfc4648> = Codec::new();
/// Base32 with the extended hex alphabet.
pub const BASE32_HEX: Codec<Base32, Base32Hex> = Codec::new();
/// Crockford's base32.
pub const BASE32_CROCKFORD: Codec<Base32, Base32Crockford> = Codec::new();
/// Lowercase hex.
pub const HEX: Codec<Hex, HexLower> = Codec::new();
/// Uppercase hex.
pub const HEX_UPPER: Codec<Hex, HexUpper> = Codec::new();

/// A block codec bound to one alphabet variant.
///
/// Zero-sized; owned outputs are allocated once at their exact (encode) or
/// maximum (decode) size.
///
/// # Example
///
/// ```
/// use base_block::BASE64;
///
/// let encoded = BASE64.encode(b"hello");
/// assert_eq!(encoded, "aGVsbG8=");
/// assert_eq!(BASE64.decode(&encoded).unwrap(), b"hello");
/// ```
pub struct Codec<C, V> {
    _marker: PhantomData<fn() -> (C, V)>,
}

impl<C, V> Codec<C, V> {
    pub const fn new() -> Self {
        Codec {
            _marker: PhantomData,
        }
    }
}

impl<C, V> Clone for Codec<C, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, V> Copy for Codec<C, V> {}

impl<C, V> Default for Codec<C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, V> fmt::Debug for Codec<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("codec", &std::any::type_name::<C>())
            .field("variant", &std::any::type_name::<V>())
            .finish()
    }
}

impl<C, V> Codec<C, V>
where
    C: BlockCodec<V>,
    V: AlphabetVariant,
{
    pub const BINARY_BLOCK_SIZE: usize = C::BINARY_BLOCK_SIZE;
    pub const ENCODED_BLOCK_SIZE: usize = C::ENCODED_BLOCK_SIZE;

    /// Number of symbols `encode` produces for `binary_size` bytes.
    pub const fn encoded_size(binary_size: usize) -> usize {
        StreamCodec::<C, V>::encoded_size(binary_size)
    }

    /// Upper bound on the bytes `decode` produces for `encoded_size` characters.
    pub const fn decoded_max_size(encoded_size: usize) -> usize {
        StreamCodec::<C, V>::decoded_max_size(encoded_size)
    }

    pub fn requires_padding(&self) -> bool {
        V::requires_padding()
    }

    pub fn generates_padding(&self) -> bool {
        V::generates_padding()
    }

    pub fn encode(&self, data: &[u8]) -> String {
        let mut out = String::with_capacity(Self::encoded_size(data.len()));
        StreamCodec::<C, V>::encode(&mut out, &mut (), data);
        out
    }

    pub fn encode_to_vec(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::encoded_size(data.len()));
        StreamCodec::<C, V>::encode(&mut out, &mut (), data);
        out
    }

    /// Encodes into `out` and returns the number of symbols written.
    pub fn encode_to_slice(&self, data: &[u8], out: &mut [u8]) -> Result<usize, BufferTooSmall> {
        let needed = Self::encoded_size(data.len());
        if out.len() < needed {
            return Err(BufferTooSmall {
                needed,
                available: out.len(),
            });
        }

        let mut written = 0;
        StreamCodec::<C, V>::encode(&mut SliceSink::new(out), &mut written, data);
        debug_assert_eq!(written, needed);
        Ok(written)
    }

    pub fn decode(&self, encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
        let encoded = encoded.as_ref();
        let mut out = Vec::with_capacity(Self::decoded_max_size(encoded.len()));
        StreamCodec::<C, V>::decode(&mut out, &mut (), encoded)?;
        Ok(out)
    }

    /// Decodes into `out` and returns the number of bytes written.
    ///
    /// `out` must hold at least `decoded_max_size(encoded.len())` bytes. On
    /// error, bytes of blocks decoded before the failure remain in `out`.
    pub fn decode_to_slice(
        &self,
        encoded: impl AsRef<[u8]>,
        out: &mut [u8],
    ) -> Result<usize, DecodeError> {
        let encoded = encoded.as_ref();
        let needed = Self::decoded_max_size(encoded.len());
        if out.len() < needed {
            return Err(BufferTooSmall {
                needed,
                available: out.len(),
            }
            .into());
        }

        let mut written = 0;
        StreamCodec::<C, V>::decode(&mut SliceSink::new(out), &mut written, encoded)?;
        Ok(written)
    }
}
