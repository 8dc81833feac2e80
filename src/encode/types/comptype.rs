use crate::core::types::comptype::{
    ArrayType, CompType, FieldType, FuncType, Mut, PackType, StorageType, StructType,
};
use crate::encode::{ByteWriter, EncodeError};

impl CompType {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        match self {
            CompType::Func(t) => t.encode(w),
            CompType::Struct(t) => t.encode(w),
            CompType::Array(t) => t.encode(w),
        }
    }
}

impl FuncType {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        w.write_u8(0x60);
        w.write_unsigned(self.parameters.len() as u64);
        for parameter in &self.parameters {
            parameter.encode(w)?;
        }
        // The result vector always has length one; multiple results are unsupported.
        w.write_u8(1);
        self.result.encode(w)
    }
}

impl StructType {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        w.write_u8(0x5F);
        w.write_unsigned(self.fields.len() as u64);
        for field in &self.fields {
            field.encode(w)?;
        }
        Ok(())
    }
}

impl ArrayType {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        w.write_u8(0x5E);
        self.field.encode(w)
    }
}

impl FieldType {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        let FieldType(mutability, storage) = self;
        storage.encode(w)?;
        w.write_u8(match mutability {
            Mut::Const => 0x00,
            Mut::Var => 0x01,
        });
        Ok(())
    }
}

impl StorageType {
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        match self {
            StorageType::ValType(t) => t.encode(w),
            StorageType::PackType(t) => {
                t.encode(w);
                Ok(())
            }
        }
    }
}

impl PackType {
    pub fn encode(&self, w: &mut ByteWriter) {
        match self {
            PackType::I8 => w.write_u8(0x7A),
            PackType::I16 => w.write_u8(0x79),
        }
    }
}
