use crate::core::types::heaptype::HeapType;
use crate::core::types::reftype::RefType;
use crate::encode::{ByteWriter, EncodeError};

impl RefType {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        // Shorthand forms must win whenever they apply.
        if !self.nullable && self.heap == HeapType::I31 {
            // ref i31 = i31ref.
            w.write_signed(-0x16);
            return Ok(());
        }
        if self.nullable {
            // ref null {func,extern,any,eq} = {func,extern,any,eq}ref: the abstract heap
            // tag doubles as the nullable shorthand.
            match self.heap {
                HeapType::Func | HeapType::Extern | HeapType::Any | HeapType::Eq => {
                    return self.heap.encode(w);
                }
                _ => {}
            }
        }

        // The general case.
        w.write_signed(if self.nullable { -0x14 } else { -0x15 });
        self.heap.encode(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::indices::TypeIdx;

    fn encoded(ty: RefType) -> Vec<u8> {
        let mut w = ByteWriter::new();
        ty.encode(&mut w).unwrap();
        w.into_bytes()
    }

    #[test]
    fn nullable_abstract_refs_use_the_shorthand_tag() {
        assert_eq!(encoded(RefType::FUNCREF), [0x70]);
        assert_eq!(encoded(RefType::EXTERNREF), [0x6F]);
        assert_eq!(encoded(RefType::EQREF), [0x6D]);
    }

    #[test]
    fn non_null_i31_uses_the_shorthand_tag() {
        assert_eq!(encoded(RefType::I31REF), [0x6A]);
    }

    #[test]
    fn general_forms_carry_a_nullability_tag_and_the_heap() {
        let concrete = HeapType::TypeIdx(TypeIdx(3));
        assert_eq!(encoded(RefType::new(true, concrete)), [0x6C, 0x03]);
        assert_eq!(encoded(RefType::new(false, concrete)), [0x6B, 0x03]);
        // No shorthand covers non-null func or nullable i31.
        assert_eq!(encoded(RefType::new(false, HeapType::Func)), [0x6B, 0x70]);
        assert_eq!(encoded(RefType::new(true, HeapType::I31)), [0x6C, 0x6A]);
    }

    #[test]
    fn nullable_anyref_shorthand_still_fails_on_the_heap_tag() {
        let mut w = ByteWriter::new();
        assert_eq!(
            RefType::ANYREF.encode(&mut w),
            Err(EncodeError::UnsupportedAnyHeapType)
        );
    }
}
