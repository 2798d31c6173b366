/// Destination for the bytes produced by a block codec.
///
/// `State` belongs to the caller of a single encode or decode call. The
/// stream driver only threads it through to the block codec, which hands it
/// back on every [`Sink::put`].
pub trait Sink {
    type State;

    fn put(&mut self, state: &mut Self::State, byte: u8);
}

impl Sink for Vec<u8> {
    type State = ();

    #[inline]
    fn put(&mut self, _state: &mut (), byte: u8) {
        self.push(byte);
    }
}

/// Only used for encoded output, whose symbols are all ASCII.
impl Sink for String {
    type State = ();

    #[inline]
    fn put(&mut self, _state: &mut (), byte: u8) {
        debug_assert!(byte.is_ascii(), "encoded symbols must be ASCII");
        self.push(char::from(byte));
    }
}

/// Writes into a caller-provided buffer; the state is the write cursor.
///
/// Callers size the buffer up front with the exact size formulas, so a
/// write past the end is a bug and panics.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        SliceSink { buf }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

impl Sink for SliceSink<'_> {
    type State = usize;

    #[inline]
    fn put(&mut self, position: &mut usize, byte: u8) {
        self.buf[*position] = byte;
        *position += 1;
    }
}

/// Counts bytes without storing them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSink;

impl Sink for CountingSink {
    type State = usize;

    #[inline]
    fn put(&mut self, count: &mut usize, _byte: u8) {
        *count += 1;
    }
}
