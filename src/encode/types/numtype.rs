use crate::core::types::numtype::NumType;
use crate::encode::ByteWriter;

impl NumType {
    pub fn encode(&self, w: &mut ByteWriter) {
        match self {
            NumType::Int32 => w.write_u8(0x7F),
            NumType::Int64 => w.write_u8(0x7E),
            NumType::Float32 => w.write_u8(0x7D),
            NumType::Float64 => w.write_u8(0x7C),
            NumType::V128 => w.write_u8(0x7B),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_types_encode_to_their_marker_bytes() {
        let cases = [
            (NumType::Int32, 0x7F),
            (NumType::Int64, 0x7E),
            (NumType::Float32, 0x7D),
            (NumType::Float64, 0x7C),
            (NumType::V128, 0x7B),
        ];
        for (ty, marker) in cases {
            let mut w = ByteWriter::new();
            ty.encode(&mut w);
            assert_eq!(w.as_slice(), [marker], "{ty:?}");
        }
    }
}
