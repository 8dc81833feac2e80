use crate::core::types::rtt::Rtt;
use crate::encode::{ByteWriter, EncodeError};

impl Rtt {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        w.write_signed(-0x17);
        w.write_unsigned(u64::from(self.depth));
        self.heap.encode(w)
    }
}
