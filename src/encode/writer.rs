//! A growable byte sink for emitting the WebAssembly binary format.
use crate::encode::integer::{encode_s64, encode_u64};
use tracing::trace;

/// Primitive types with a fixed-width little-endian wire representation.
pub trait Fixed: Copy {
    fn push_le(self, out: &mut Vec<u8>);
}

macro_rules! impl_fixed {
    ($($t:ty),*) => {$(
        impl Fixed for $t {
            fn push_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }
        }
    )*};
}

impl_fixed!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// An append-only byte buffer with the write primitives of the binary format: single
/// bytes, fixed-width little-endian fields, LEB128 variable-length integers, raw byte
/// runs, and length-prefixed nested emissions (see [`ByteWriter::with_length_prefix`]).
#[derive(Debug, Default)]
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one byte verbatim.
    pub fn write_u8(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    /// Append the little-endian bytes of `value`.
    pub fn write_fixed<T: Fixed>(&mut self, value: T) {
        value.push_le(&mut self.buffer);
    }

    /// Append `value` as ULEB128.
    pub fn write_unsigned(&mut self, value: u64) {
        encode_u64(&mut self.buffer, value);
    }

    /// Append `value` as SLEB128. Negative values cover the reserved type tags of the
    /// binary type grammar.
    pub fn write_signed(&mut self, value: i64) {
        encode_s64(&mut self.buffer, value);
    }

    /// Append a run of raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// The number of bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Run `emit` against a fresh nested writer, then append the nested byte count (as
    /// ULEB128) followed by the nested bytes themselves. This is the framing primitive of
    /// the binary format: sections and code entries declare their size before their
    /// contents.
    ///
    /// Nested uses bracket properly because each level borrows its own writer for the
    /// duration of its closure. The format treats the byte count as a 32-bit value;
    /// emissions past 4 GiB are assumed not to occur.
    pub fn with_length_prefix<T>(&mut self, emit: impl FnOnce(&mut ByteWriter) -> T) -> T {
        let mut nested = ByteWriter::new();
        let result = emit(&mut nested);

        trace!(
            "copying {} bytes to the parent stream",
            nested.bytes_written()
        );
        self.write_unsigned(nested.bytes_written() as u64);
        self.write_bytes(&nested.buffer);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_fixed_is_little_endian() {
        let mut w = ByteWriter::new();
        w.write_fixed(0x0102_0304_u32);
        w.write_fixed(1.5_f32);
        assert_eq!(w.as_slice(), [0x04, 0x03, 0x02, 0x01, 0x00, 0x00, 0xC0, 0x3F]);
    }

    #[test]
    fn write_u8_and_bytes_append_verbatim() {
        let mut w = ByteWriter::new();
        w.write_u8(0xAB);
        w.write_bytes(&[0x01, 0x02]);
        assert_eq!(w.as_slice(), [0xAB, 0x01, 0x02]);
        assert_eq!(w.bytes_written(), 3);
    }

    #[test]
    fn length_prefix_precedes_payload() {
        let mut w = ByteWriter::new();
        w.write_u8(0xFF);
        w.with_length_prefix(|w| {
            w.write_unsigned(23);
            w.write_unsigned(98);
        });
        assert_eq!(w.as_slice(), [0xFF, 0x02, 23, 98]);
    }

    #[test]
    fn length_prefix_of_empty_payload_is_zero() {
        let mut w = ByteWriter::new();
        w.with_length_prefix(|_| {});
        assert_eq!(w.as_slice(), [0x00]);
    }

    #[test]
    fn length_prefix_grows_parent_by_prefix_plus_payload() {
        let payload = [0x55_u8; 130];

        let mut w = ByteWriter::new();
        w.write_u8(0x00);
        let before = w.bytes_written();
        w.with_length_prefix(|w| w.write_bytes(&payload));

        // 130 needs a two-byte ULEB128.
        assert_eq!(w.bytes_written(), before + 2 + payload.len());
        assert_eq!(&w.as_slice()[before..before + 2], [0x82, 0x01]);
        assert_eq!(&w.as_slice()[before + 2..], payload);
    }

    #[test]
    fn length_prefixes_nest() {
        let mut w = ByteWriter::new();
        w.with_length_prefix(|w| {
            w.write_u8(0x01);
            w.with_length_prefix(|w| w.write_u8(0x02));
        });
        // Outer payload: 0x01, inner prefix 0x01, inner payload 0x02.
        assert_eq!(w.as_slice(), [0x03, 0x01, 0x01, 0x02]);
    }

    #[test]
    fn length_prefix_passes_closure_result_through() {
        let mut w = ByteWriter::new();
        let n: Result<u32, ()> = w.with_length_prefix(|_| Ok(7));
        assert_eq!(n, Ok(7));
    }
}
