use crate::core::types::heaptype::HeapType;
use crate::encode::{ByteWriter, EncodeError};

impl HeapType {
    /// Abstract heap types are encoded as negative SLEB128 tags; a concrete heap type is
    /// its (non-negative) type index, also as SLEB128.
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        match self {
            HeapType::Func => w.write_signed(-0x10),
            HeapType::Extern => w.write_signed(-0x11),
            // Tag -0x12; the target engine rejects it.
            HeapType::Any => return Err(EncodeError::UnsupportedAnyHeapType),
            HeapType::Eq => w.write_signed(-0x13),
            // The GC proposal text lists i31 as -0x17, but engines use -0x16; -0x17 is
            // the rtt tag here.
            HeapType::I31 => w.write_signed(-0x16),
            HeapType::TypeIdx(idx) => w.write_signed(i64::from(idx.0)),
        }
        Ok(())
    }
}
