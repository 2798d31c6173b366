//! Block-structured textual encodings: base64, base32 and base16.
//!
//! [`crate::core::StreamCodec`] turns a byte buffer into whole blocks plus one
//! optional tail and back again. It is generic over a [`crate::core::BlockCodec`]
//! (block arithmetic) and an [`crate::core::AlphabetVariant`] (symbols, padding
//! policy, ignorable characters and end markers). [`Codec`] wraps the
//! driver with allocation-aware helpers, and [`Encoding`] selects a codec by
//! name at runtime from the TOML registry.
//!
//! ```
//! use base_block::{BASE32, HEX};
//!
//! assert_eq!(BASE32.encode(b"foo"), "MZXW6===");
//! assert_eq!(HEX.decode("c0ffee").unwrap(), [0xc0, 0xff, 0xee]);
//! ```

pub mod codec;
pub mod codecs;
pub mod config;
pub mod core;
pub mod errors;
pub mod registry;

pub use codec::{
    BASE32, BASE32_CROCKFORD, BASE32_HEX, BASE64, BASE64_URL, BASE64_URL_UNPADDED, Codec, HEX,
    HEX_UPPER,
};
pub use config::{CodecKind, EncodingConfig, EncodingsConfig};
pub use errors::{BufferTooSmall, DecodeError, EncodingNotFoundError, find_closest_encoding};
pub use registry::Encoding;

/// Encodes `data` with a registry encoding.
pub fn encode(data: &[u8], encoding: &Encoding) -> String {
    encoding.encode(data)
}

/// Decodes `encoded` with a registry encoding.
pub fn decode(encoded: &str, encoding: &Encoding) -> Result<Vec<u8>, DecodeError> {
    encoding.decode(encoded.as_bytes())
}
