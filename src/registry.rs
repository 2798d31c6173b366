use crate::codec::{
    BASE32, BASE32_CROCKFORD, BASE32_HEX, BASE64, BASE64_URL, BASE64_URL_UNPADDED, Codec, HEX,
    HEX_UPPER,
};
use crate::config::{CodecKind, EncodingsConfig};
use crate::core::{AlphabetVariant, BlockCodec};
use crate::errors::{DecodeError, EncodingNotFoundError, find_closest_encoding};

/// Evaluates `$body` with `$codec` bound to the compiled-in codec for `$kind`.
macro_rules! with_codec {
    ($kind:expr, |$codec:ident| $body:expr) => {
        match $kind {
            CodecKind::Base64 => {
                let $codec = BASE64;
                $body
            }
            CodecKind::Base64url => {
                let $codec = BASE64_URL;
                $body
            }
            CodecKind::Base64urlUnpadded => {
                let $codec = BASE64_URL_UNPADDED;
                $body
            }
            CodecKind::Base32 => {
                let $codec = BASE32;
                $body
            }
            CodecKind::Base32hex => {
                let $codec = BASE32_HEX;
                $body
            }
            CodecKind::Base32crockford => {
                let $codec = BASE32_CROCKFORD;
                $body
            }
            CodecKind::Hex => {
                let $codec = HEX;
                $body
            }
            CodecKind::HexUpper => {
                let $codec = HEX_UPPER;
                $body
            }
        }
    };
}

fn block_sizes<C: BlockCodec<V>, V: AlphabetVariant>(_: Codec<C, V>) -> (usize, usize) {
    (C::BINARY_BLOCK_SIZE, C::ENCODED_BLOCK_SIZE)
}

fn encoded_size<C: BlockCodec<V>, V: AlphabetVariant>(_: Codec<C, V>, binary: usize) -> usize {
    Codec::<C, V>::encoded_size(binary)
}

fn decoded_max_size<C: BlockCodec<V>, V: AlphabetVariant>(
    _: Codec<C, V>,
    encoded: usize,
) -> usize {
    Codec::<C, V>::decoded_max_size(encoded)
}

impl CodecKind {
    pub const ALL: [CodecKind; 8] = [
        CodecKind::Base64,
        CodecKind::Base64url,
        CodecKind::Base64urlUnpadded,
        CodecKind::Base32,
        CodecKind::Base32hex,
        CodecKind::Base32crockford,
        CodecKind::Hex,
        CodecKind::HexUpper,
    ];

    /// `(binary, encoded)` block sizes.
    pub fn block_sizes(self) -> (usize, usize) {
        with_codec!(self, |codec| block_sizes(codec))
    }

    pub fn requires_padding(self) -> bool {
        with_codec!(self, |codec| codec.requires_padding())
    }

    pub fn generates_padding(self) -> bool {
        with_codec!(self, |codec| codec.generates_padding())
    }

    pub fn encoded_size(self, binary_size: usize) -> usize {
        with_codec!(self, |codec| encoded_size(codec, binary_size))
    }

    pub fn decoded_max_size(self, encoded_size: usize) -> usize {
        with_codec!(self, |codec| decoded_max_size(codec, encoded_size))
    }

    pub fn encode(self, data: &[u8]) -> String {
        with_codec!(self, |codec| codec.encode(data))
    }

    pub fn decode(self, encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
        with_codec!(self, |codec| codec.decode(encoded))
    }
}

/// A named encoding resolved from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    name: String,
    kind: CodecKind,
    wrap: Option<usize>,
    description: Option<String>,
}

impl Encoding {
    /// Looks `name` up in `config`, suggesting the closest name on a miss.
    pub fn from_config(config: &EncodingsConfig, name: &str) -> Result<Self, EncodingNotFoundError> {
        let Some(entry) = config.get_encoding(name) else {
            let suggestion = find_closest_encoding(name, config.names());
            tracing::debug!(name, ?suggestion, "encoding not registered");
            return Err(EncodingNotFoundError::new(name, suggestion));
        };

        tracing::debug!(name, codec = ?entry.codec, "resolved encoding");
        Ok(Encoding {
            name: name.to_string(),
            kind: entry.codec,
            wrap: entry.wrap.filter(|&cols| cols > 0),
            description: entry.description.clone(),
        })
    }

    /// An unnamed encoding for `kind` with no wrapping.
    pub fn from_kind(kind: CodecKind) -> Self {
        Encoding {
            name: format!("{:?}", kind).to_lowercase(),
            kind,
            wrap: None,
            description: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CodecKind {
        self.kind
    }

    /// Default line width for encoded output, if the entry sets one.
    pub fn wrap(&self) -> Option<usize> {
        self.wrap
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn encode(&self, data: &[u8]) -> String {
        self.kind.encode(data)
    }

    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
        self.kind.decode(encoded)
    }
}
