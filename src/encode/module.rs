//! Binary emission of functions, sections and the module preamble.
use crate::builder::ModuleBuilder;
use crate::core::function::{Function, LocalKind};
use crate::encode::instructions::END_OPCODE;
use crate::encode::{ByteWriter, EncodeError};
use tracing::trace;

pub(crate) const MAGIC_NUMBER: [u8; 4] = [0x00, 0x61, 0x73, 0x6D];
pub(crate) const VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

/// The sections this builder emits. Sections must appear in the module in ascending id
/// order.
///
/// <https://www.w3.org/TR/wasm-core-2/#binary-section>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SectionKind {
    Type,
    Function,
    Code,
}

impl SectionKind {
    pub fn id(self) -> u8 {
        match self {
            SectionKind::Type => 1,
            SectionKind::Function => 3,
            SectionKind::Code => 10,
        }
    }
}

impl Function {
    /// The code-section entry of this function: the locals vector followed by the body
    /// expression. Parameters are part of the function's type and are not re-encoded.
    ///
    /// Runs of identical locals may legally be merged into one entry; this encoder writes
    /// one entry of count 1 per local instead.
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        let plain_locals = || self.locals().iter().filter(|l| l.kind() == LocalKind::Local);

        w.write_unsigned(plain_locals().count() as u64);
        for local in plain_locals() {
            w.write_unsigned(1);
            local.value_type().encode(w)?;
        }

        match self.body() {
            Some(body) => body.encode(w)?,
            None => trace!("function {:?} has no body, encoding it empty", self.name()),
        }
        w.write_u8(END_OPCODE);
        Ok(())
    }
}

impl ModuleBuilder {
    /// Emit the complete binary module: preamble, then the type, function and code
    /// sections in ascending section-id order.
    pub fn encode(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        w.write_bytes(&MAGIC_NUMBER);
        w.write_bytes(&VERSION);

        self.encode_type_section(w)?;
        self.encode_function_section(w);
        self.encode_code_section(w)?;

        Ok(())
    }

    /// Convenience wrapper over [`ModuleBuilder::encode`] collecting into a fresh buffer.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        let mut w = ByteWriter::new();
        self.encode(&mut w)?;
        Ok(w.into_bytes())
    }

    fn encode_type_section(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        w.write_u8(SectionKind::Type.id());
        w.with_length_prefix(|w| {
            w.write_unsigned(self.types().len() as u64);
            for ty in self.types() {
                ty.encode(w)?;
            }
            Ok(())
        })
    }

    fn encode_function_section(&self, w: &mut ByteWriter) {
        w.write_u8(SectionKind::Function.id());
        w.with_length_prefix(|w| {
            w.write_unsigned(self.functions().len() as u64);
            for function in self.functions() {
                w.write_unsigned(u64::from(function.type_idx().0));
            }
        });
    }

    fn encode_code_section(&self, w: &mut ByteWriter) -> Result<(), EncodeError> {
        w.write_u8(SectionKind::Code.id());
        w.with_length_prefix(|w| {
            w.write_unsigned(self.functions().len() as u64);
            for function in self.functions() {
                // Each entry carries its own byte count so engines can skip or lazily
                // compile individual bodies.
                w.with_length_prefix(|w| function.encode(w))?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_ascending() {
        let ids = [SectionKind::Type, SectionKind::Function, SectionKind::Code].map(SectionKind::id);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
