use crate::core::types::valtype::ValType;
use crate::encode::{ByteWriter, EncodeError};

impl ValType {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        match self {
            ValType::Num(t) => {
                t.encode(w);
                Ok(())
            }
            ValType::Ref(t) => t.encode(w),
            ValType::Rtt(t) => t.encode(w),
        }
    }
}
