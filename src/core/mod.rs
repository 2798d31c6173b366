//! The generic block-stream transcoder and the interfaces it drives.

pub mod sink;
pub mod stream;
pub mod traits;

pub use sink::{CountingSink, Sink, SliceSink};
pub use stream::StreamCodec;
pub use traits::{AlphabetVariant, BlockCodec, MAX_ENCODED_BLOCK_SIZE, Symbol};
